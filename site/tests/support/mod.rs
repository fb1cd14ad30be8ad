#![allow(dead_code)]

use std::sync::Arc;

use site::{
    ClickRegion, DeviceClass, MenuTree, NavController, SiteConfig,
    nav::{LevelPayload, NavigationLevel},
};

pub fn site_menu() -> Arc<MenuTree> {
    SiteConfig::embedded()
        .expect("embedded site config")
        .menu
}

// one input event, as the render layer or a collaborator would deliver it
#[derive(Clone, Debug)]
pub enum Action {
    OpenMega,
    CloseMega,
    ToggleMega,
    HoverTrigger,
    SetCategory(String),
    OpenMobile,
    CloseMobile,
    ToggleMobile,
    // index into the current level's entries or categories
    DrillEntry(usize),
    DrillCategory(usize),
    PushRoot,
    Pop,
    RouteChanged(String),
    Outside(ClickRegion),
    Device(DeviceClass),
}

pub fn apply(nav: &mut NavController, action: &Action) {
    match action {
        Action::OpenMega => nav.open_mega_menu(),
        Action::CloseMega => nav.close_mega_menu(),
        Action::ToggleMega => nav.toggle_mega_menu(),
        Action::HoverTrigger => nav.hover_mega_trigger(),
        Action::SetCategory(name) => nav.set_active_category(name),
        Action::OpenMobile => nav.open_mobile_menu(),
        Action::CloseMobile => nav.close_mobile_menu(),
        Action::ToggleMobile => nav.toggle_mobile_menu(),
        Action::DrillEntry(index) => {
            let entry = match &nav.state().current_level().payload {
                LevelPayload::Entries(entries) => entries.get(*index).cloned(),
                LevelPayload::Categories(_) => None,
            };
            if let Some(entry) = entry {
                nav.drill_into_entry(&entry);
            }
        }
        Action::DrillCategory(index) => {
            let category = match &nav.state().current_level().payload {
                LevelPayload::Categories(categories) => categories.get(*index).cloned(),
                LevelPayload::Entries(_) => None,
            };
            if let Some(category) = category {
                nav.drill_into_category(&category);
            }
        }
        Action::PushRoot => {
            let root = NavigationLevel::root(nav.tree());
            nav.push_mobile_level(root);
        }
        Action::Pop => nav.pop_mobile_level(),
        Action::RouteChanged(path) => nav.on_route_changed(path),
        Action::Outside(region) => nav.on_outside_interaction(*region),
        Action::Device(device) => nav.on_device_class_changed(*device),
    }
}

// every action that can be taken from the current state, without the unbounded PushRoot
pub fn actions_from(nav: &NavController) -> Vec<Action> {
    let mut actions = vec![
        Action::OpenMega,
        Action::CloseMega,
        Action::ToggleMega,
        Action::HoverTrigger,
        Action::SetCategory("No Such Category".to_owned()),
        Action::OpenMobile,
        Action::CloseMobile,
        Action::ToggleMobile,
        Action::Pop,
        Action::RouteChanged("/products/db/aurora".to_owned()),
        Action::Outside(ClickRegion::Trigger),
        Action::Outside(ClickRegion::Panel),
        Action::Outside(ClickRegion::Outside),
        Action::Device(DeviceClass::HoverDesktop),
        Action::Device(DeviceClass::TouchDesktop),
        Action::Device(DeviceClass::Mobile),
    ];

    if let Some(entry) = nav.mega_entry() {
        actions.extend(
            entry
                .categories()
                .iter()
                .map(|c| Action::SetCategory(c.name.clone())),
        );
    }

    match &nav.state().current_level().payload {
        LevelPayload::Entries(entries) => {
            actions.extend((0..entries.len()).map(Action::DrillEntry));
        }
        LevelPayload::Categories(categories) => {
            actions.extend((0..categories.len()).map(Action::DrillCategory));
        }
    }

    actions
}
