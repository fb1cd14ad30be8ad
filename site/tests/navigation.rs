mod support;

use site::{
    ClickRegion, DeviceClass, NavController, NavigationState,
    nav::{LevelKind, LevelPayload},
};
use support::site_menu;

#[test]
fn scenario_desktop_mega_menu() {
    let tree = site_menu();
    let mut nav = NavController::new(tree.clone());

    // A: opening defaults to the first category of Products
    nav.open_mega_menu();
    assert!(nav.state().mega_menu_open());
    let products = tree.find_entry("Products").unwrap();
    assert_eq!(nav.active_category(), products.categories().first());

    // B: hovering a category switches the right pane
    nav.set_active_category("Databases");
    assert_eq!(nav.active_category().unwrap().name, "Databases");

    // C: choosing a leaf navigates, which resets everything
    nav.on_route_changed("/products/db/aurora");
    assert_eq!(nav.state(), &NavigationState::initial(&tree));
}

#[test]
fn scenario_mobile_drill_down() {
    let tree = site_menu();
    let mut nav = NavController::new(tree.clone()).with_device(DeviceClass::Mobile);

    nav.open_mobile_menu();
    assert_eq!(nav.state().depth(), 1);

    let products = tree.find_entry("Products").unwrap();
    nav.drill_into_entry(products);
    assert_eq!(nav.state().depth(), 2);
    assert_eq!(nav.state().current_level().kind(), LevelKind::CategoryList);

    nav.drill_into_category(products.find_category("Compute").unwrap());
    assert_eq!(nav.state().depth(), 3);
    match &nav.state().current_level().payload {
        LevelPayload::Entries(entries) => {
            let paths: Vec<_> = entries.iter().map(|e| e.path.as_str()).collect();
            assert_eq!(
                paths,
                [
                    "/products/compute/ec2",
                    "/products/compute/lambda",
                    "/products/compute/lightsail",
                    "/products/compute/eks",
                ]
            );
        }
        LevelPayload::Categories(_) => panic!("expected Compute's items"),
    }

    nav.pop_mobile_level();
    nav.pop_mobile_level();
    assert_eq!(nav.state().depth(), 1);
    assert!(nav.state().mobile_menu_open());
}

#[test]
fn pop_at_root_is_a_no_op() {
    let mut nav = NavController::new(site_menu());
    nav.open_mobile_menu();
    let before = nav.state().clone();

    nav.pop_mobile_level();
    assert_eq!(nav.state(), &before);
    assert_eq!(nav.state().depth(), 1);
}

#[test]
fn open_then_close_mega_menu_is_a_round_trip() {
    let mut nav = NavController::new(site_menu());
    let before = nav.clone();

    nav.open_mega_menu();
    nav.close_mega_menu();
    assert_eq!(nav, before);

    // closing again changes nothing
    nav.close_mega_menu();
    assert_eq!(nav, before);
}

#[test]
fn click_after_hover_keeps_menu_open() {
    let tree = site_menu();
    let mut nav = NavController::new(tree.clone()).with_device(DeviceClass::HoverDesktop);

    nav.hover_mega_trigger();
    assert!(nav.state().mega_menu_open());

    // the click that follows the hover confirms the open menu
    nav.toggle_mega_menu();
    assert!(nav.state().mega_menu_open());
    assert!(!nav.state().opened_by_hover());

    // a second click is the re-click that closes it
    nav.toggle_mega_menu();
    assert!(!nav.state().mega_menu_open());
    assert_eq!(nav.state(), &NavigationState::initial(&tree));
}

#[test]
fn hover_open_is_forgotten_on_close() {
    let tree = site_menu();
    let mut nav = NavController::new(tree.clone()).with_device(DeviceClass::HoverDesktop);

    nav.hover_mega_trigger();
    nav.on_outside_interaction(ClickRegion::Outside);
    assert_eq!(nav.state(), &NavigationState::initial(&tree));

    nav.hover_mega_trigger();
    nav.on_route_changed("/pricing");
    assert_eq!(nav.state(), &NavigationState::initial(&tree));

    // a click-opened menu still closes on the next click
    nav.toggle_mega_menu();
    nav.toggle_mega_menu();
    assert!(!nav.state().mega_menu_open());
}

#[test]
fn category_is_ignored_while_closed() {
    let mut nav = NavController::new(site_menu());
    let before = nav.clone();

    nav.set_active_category("Databases");
    assert_eq!(nav, before);
}

#[test]
fn leaf_on_current_path_still_closes() {
    let tree = site_menu();
    let mut nav = NavController::new(tree.clone());

    nav.on_route_changed("/products/db/aurora");
    nav.open_mega_menu();
    nav.set_active_category("Databases");

    // the router would not report a change here, so the leaf handler calls the hook itself
    nav.on_route_changed("/products/db/aurora");
    assert_eq!(nav.state(), &NavigationState::initial(&tree));
}

#[test]
fn route_change_wins_over_everything() {
    let tree = site_menu();
    let mut nav = NavController::new(tree.clone()).with_device(DeviceClass::Mobile);

    nav.open_mobile_menu();
    nav.drill_into_entry(tree.find_entry("Products").unwrap());
    nav.on_route_changed("/pricing");

    assert!(!nav.scroll_locked());
    assert_eq!(nav.state(), &NavigationState::initial(&tree));
}
