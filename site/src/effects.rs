use tracing::debug;

use crate::nav::{ClickRegion, NavController, NavigationState};

// anything that can suppress page scrolling, in practice the document body
pub trait ScrollTarget {
    fn set_scroll_locked(&mut self, locked: bool);
}

// scroll lock
//
// the lock is a pure function of "is any menu open", recomputed on every sync.  it is never
// toggled independently, so rapid open/close sequences cannot leave it engaged.  dropping the
// lock releases the target, which covers the owning view being torn down mid-interaction
pub struct ScrollLock<T: ScrollTarget> {
    target: T,
    engaged: bool,
}

impl<T: ScrollTarget> ScrollLock<T> {
    pub fn new(target: T) -> Self {
        ScrollLock {
            target,
            engaged: false,
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn sync(&mut self, state: &NavigationState) {
        let wanted = state.any_menu_open();

        if wanted != self.engaged {
            debug!({ locked = wanted }, "syncing scroll lock");
            self.target.set_scroll_locked(wanted);
            self.engaged = wanted;
        }
    }

    // unconditional, since the target may have been touched by someone else in the meantime
    pub fn release(&mut self) {
        self.target.set_scroll_locked(false);
        self.engaged = false;
    }
}

impl<T: ScrollTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.release();
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WatcherChange {
    Register,
    Deregister,
}

// outside-click watcher
//
// registered only while the mega menu is open.  the render layer uses the change notifications
// to attach and detach whatever actually listens for pointer-down
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutsideClickWatcher {
    registered: bool,
}

impl OutsideClickWatcher {
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub fn sync(&mut self, state: &NavigationState) -> Option<WatcherChange> {
        let wanted = state.mega_menu_open();

        if wanted == self.registered {
            return None;
        }

        self.registered = wanted;
        Some(if wanted {
            WatcherChange::Register
        } else {
            WatcherChange::Deregister
        })
    }

    /// Forwards a pointer-down to the controller, returning whether it closed the mega menu.
    pub fn dispatch(&self, region: ClickRegion, nav: &mut NavController) -> bool {
        if !self.registered {
            return false;
        }

        let was_open = nav.state().mega_menu_open();
        nav.on_outside_interaction(region);
        was_open && !nav.state().mega_menu_open()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, sync::Arc};

    use super::*;
    use crate::menu::{MenuCategory, MenuItem, MenuTree, NavEntry};

    #[derive(Clone, Default)]
    struct Body(Rc<RefCell<Vec<bool>>>);

    impl ScrollTarget for Body {
        fn set_scroll_locked(&mut self, locked: bool) {
            self.0.borrow_mut().push(locked);
        }
    }

    fn controller() -> NavController {
        let tree = MenuTree::new(vec![NavEntry::expandable(
            "Products",
            "/products",
            vec![MenuCategory {
                name: "Compute".to_owned(),
                description: None,
                items: vec![MenuItem {
                    name: "EC2".to_owned(),
                    path: "/products/compute/ec2".to_owned(),
                    description: None,
                }],
            }],
        )])
        .unwrap();

        NavController::new(Arc::new(tree))
    }

    #[test]
    fn lock_follows_any_open_menu() {
        let body = Body::default();
        let mut lock = ScrollLock::new(body.clone());
        let mut nav = controller();

        lock.sync(nav.state());
        assert!(!lock.is_engaged());
        assert!(body.0.borrow().is_empty());

        nav.open_mega_menu();
        lock.sync(nav.state());
        assert!(lock.is_engaged());

        // the mobile drawer opening on top does not re-engage
        nav.open_mobile_menu();
        lock.sync(nav.state());
        nav.close_mega_menu();
        lock.sync(nav.state());
        assert!(lock.is_engaged());

        nav.close_mobile_menu();
        lock.sync(nav.state());
        assert!(!lock.is_engaged());
        assert_eq!(*body.0.borrow(), vec![true, false]);
    }

    #[test]
    fn rapid_toggle_leaves_lock_released() {
        let body = Body::default();
        let mut lock = ScrollLock::new(body.clone());
        let mut nav = controller();

        nav.toggle_mobile_menu();
        nav.toggle_mobile_menu();
        lock.sync(nav.state());
        assert!(!lock.is_engaged());

        nav.toggle_mobile_menu();
        lock.sync(nav.state());
        nav.toggle_mobile_menu();
        lock.sync(nav.state());
        assert_eq!(*body.0.borrow(), vec![true, false]);
    }

    #[test]
    fn dropping_the_lock_releases() {
        let body = Body::default();
        let mut nav = controller();
        nav.open_mega_menu();

        {
            let mut lock = ScrollLock::new(body.clone());
            lock.sync(nav.state());
        }

        assert_eq!(body.0.borrow().last(), Some(&false));
    }

    #[test]
    fn watcher_registers_only_while_mega_menu_open() {
        let mut watcher = OutsideClickWatcher::default();
        let mut nav = controller();

        assert_eq!(watcher.sync(nav.state()), None);
        assert!(!watcher.dispatch(ClickRegion::Outside, &mut nav));

        nav.open_mobile_menu();
        assert_eq!(watcher.sync(nav.state()), None);

        nav.open_mega_menu();
        assert_eq!(watcher.sync(nav.state()), Some(WatcherChange::Register));
        assert_eq!(watcher.sync(nav.state()), None);

        assert!(!watcher.dispatch(ClickRegion::Panel, &mut nav));
        assert!(watcher.dispatch(ClickRegion::Outside, &mut nav));
        assert_eq!(watcher.sync(nav.state()), Some(WatcherChange::Deregister));
        assert!(!watcher.is_registered());
    }
}
