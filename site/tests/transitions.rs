mod support;

use std::{
    cell::RefCell,
    collections::{HashSet, VecDeque},
    rc::Rc,
};

use site::{
    ClickRegion, DeviceClass, NavController, NavigationState,
    effects::{OutsideClickWatcher, ScrollLock, ScrollTarget},
};
use proptest::prelude::*;
use support::{Action, actions_from, apply, site_menu};

#[derive(Clone, Default)]
struct RecordingBody(Rc<RefCell<Option<bool>>>);

impl ScrollTarget for RecordingBody {
    fn set_scroll_locked(&mut self, locked: bool) {
        *self.0.borrow_mut() = Some(locked);
    }
}

fn check_invariants(nav: &NavController) {
    let state = nav.state();

    assert!(state.depth() >= 1);
    assert_eq!(
        nav.scroll_locked(),
        state.mobile_menu_open() || state.mega_menu_open()
    );
    assert_eq!(state.active_category_index().is_some(), state.mega_menu_open());
    if state.opened_by_hover() {
        assert!(state.mega_menu_open());
        assert!(nav.device().opens_on_hover());
    }
    if state.mega_menu_open() {
        assert!(nav.device().has_mega_menu());
        assert!(nav.active_category().is_some());
    }
}

// breadth-first search over every (device, state) pair reachable from the initial state
#[test]
fn exhaustive_reachable_states() {
    let tree = site_menu();
    let mut visited: HashSet<(DeviceClass, NavigationState)> = HashSet::new();
    let mut queue = VecDeque::new();

    for device in [
        DeviceClass::HoverDesktop,
        DeviceClass::TouchDesktop,
        DeviceClass::Mobile,
    ] {
        queue.push_back(NavController::new(tree.clone()).with_device(device));
    }

    while let Some(nav) = queue.pop_front() {
        if !visited.insert((nav.device(), nav.state().clone())) {
            continue;
        }
        check_invariants(&nav);

        for action in actions_from(&nav) {
            let mut next = nav.clone();

            let body = RecordingBody::default();
            let mut lock = ScrollLock::new(body.clone());
            lock.sync(nav.state());

            apply(&mut next, &action);
            lock.sync(next.state());

            assert_eq!(lock.is_engaged(), next.state().any_menu_open(), "{action:?}");
            if let Some(locked) = *body.0.borrow() {
                assert_eq!(locked, next.state().any_menu_open(), "{action:?}");
            }

            if let Action::RouteChanged(_) = action {
                assert_eq!(next.state(), &NavigationState::initial(&tree));
            }
            if let Action::Pop = action {
                assert_eq!(
                    next.state().depth(),
                    nav.state().depth().saturating_sub(1).max(1)
                );
            }
            if !nav.state().mega_menu_open() {
                if let Action::SetCategory(_) = action {
                    assert_eq!(next.state(), nav.state());
                }
            }

            queue.push_back(next);
        }
    }

    // root, Products, and one level per category, each with the drawer open or closed
    assert!(visited.len() > 20, "only {} states reached", visited.len());
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::OpenMega),
        Just(Action::CloseMega),
        Just(Action::ToggleMega),
        Just(Action::HoverTrigger),
        prop::sample::select(vec!["Featured Products", "Compute", "Databases", "Nope"])
            .prop_map(|name| Action::SetCategory(name.to_owned())),
        Just(Action::OpenMobile),
        Just(Action::CloseMobile),
        Just(Action::ToggleMobile),
        (0usize..10).prop_map(Action::DrillEntry),
        (0usize..10).prop_map(Action::DrillCategory),
        Just(Action::PushRoot),
        Just(Action::Pop),
        Just(Action::Pop),
        prop::sample::select(vec!["/", "/pricing", "/products/db/aurora"])
            .prop_map(|path| Action::RouteChanged(path.to_owned())),
        prop::sample::select(vec![
            ClickRegion::Trigger,
            ClickRegion::Panel,
            ClickRegion::Outside
        ])
        .prop_map(Action::Outside),
        prop::sample::select(vec![
            DeviceClass::HoverDesktop,
            DeviceClass::TouchDesktop,
            DeviceClass::Mobile
        ])
        .prop_map(Action::Device),
    ]
}

proptest! {
    #[test]
    fn random_sequences_keep_invariants(actions in prop::collection::vec(action(), 0..64)) {
        let tree = site_menu();
        let mut nav = NavController::new(tree.clone());
        let body = RecordingBody::default();
        let mut watcher = OutsideClickWatcher::default();

        {
            let mut lock = ScrollLock::new(body.clone());

            for action in actions.iter() {
                apply(&mut nav, action);
                lock.sync(nav.state());
                watcher.sync(nav.state());

                check_invariants(&nav);
                prop_assert_eq!(lock.is_engaged(), nav.state().any_menu_open());
                prop_assert_eq!(watcher.is_registered(), nav.state().mega_menu_open());
            }
        }

        // the lock is released however the sequence ended
        prop_assert_eq!(*body.0.borrow(), Some(false));

        nav.on_route_changed("/");
        prop_assert_eq!(nav.state(), &NavigationState::initial(&tree));
    }
}
