use std::sync::Arc;

use tracing::debug;

use crate::menu::{MenuCategory, MenuTree, NavEntry};

pub const ROOT_TITLE: &str = "Menu";

// device class
//
// this is what the viewport collaborator tells us about the current layout.  the desktop
// classes render the mega menu, and only a hover-capable pointer opens it on hover-enter;
// everything else has to click the trigger
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DeviceClass {
    #[default]
    HoverDesktop,
    TouchDesktop,
    Mobile,
}

impl DeviceClass {
    pub fn from_viewport(desktop_layout: bool, hover_capable: bool) -> Self {
        match (desktop_layout, hover_capable) {
            (true, true) => DeviceClass::HoverDesktop,
            (true, false) => DeviceClass::TouchDesktop,
            (false, _) => DeviceClass::Mobile,
        }
    }

    pub fn has_mega_menu(self) -> bool {
        !matches!(self, DeviceClass::Mobile)
    }

    pub fn opens_on_hover(self) -> bool {
        matches!(self, DeviceClass::HoverDesktop)
    }
}

// where a pointer-down landed, as far as the outside-click watcher is concerned
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ClickRegion {
    Trigger,
    Panel,
    Outside,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LevelKind {
    TopLevel,
    CategoryList,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum LevelPayload {
    Entries(Vec<NavEntry>),
    Categories(Vec<MenuCategory>),
}

// one level of the mobile drill-down stack
//
// the kind is derived from the payload so the two can never disagree
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct NavigationLevel {
    pub title: String,
    pub payload: LevelPayload,
}

impl NavigationLevel {
    pub fn root(tree: &MenuTree) -> Self {
        NavigationLevel {
            title: ROOT_TITLE.to_owned(),
            payload: LevelPayload::Entries(tree.entries().to_vec()),
        }
    }

    /// The category list of an expandable entry; `None` for plain links.
    pub fn for_entry(entry: &NavEntry) -> Option<Self> {
        entry.categories.as_ref().map(|categories| NavigationLevel {
            title: entry.name.clone(),
            payload: LevelPayload::Categories(categories.clone()),
        })
    }

    // a category's items are shown the same way as the root level, as a list of plain links
    pub fn for_category(category: &MenuCategory) -> Self {
        NavigationLevel {
            title: category.name.clone(),
            payload: LevelPayload::Entries(category.items.iter().map(NavEntry::from).collect()),
        }
    }

    pub fn kind(&self) -> LevelKind {
        match self.payload {
            LevelPayload::Entries(_) => LevelKind::TopLevel,
            LevelPayload::Categories(_) => LevelKind::CategoryList,
        }
    }
}

// navigation state
//
// the root level lives outside the vector of drilled levels, so the stack can never be empty
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct NavigationState {
    mobile_menu_open: bool,
    mega_menu_open: bool,
    // set while the mega menu is open only because the pointer entered the trigger
    hover_opened: bool,
    active_category: Option<usize>,
    root: NavigationLevel,
    drilled: Vec<NavigationLevel>,
}

impl NavigationState {
    pub fn initial(tree: &MenuTree) -> Self {
        NavigationState {
            mobile_menu_open: false,
            mega_menu_open: false,
            hover_opened: false,
            active_category: None,
            root: NavigationLevel::root(tree),
            drilled: Vec::new(),
        }
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn mega_menu_open(&self) -> bool {
        self.mega_menu_open
    }

    pub fn opened_by_hover(&self) -> bool {
        self.hover_opened
    }

    /// Index of the active category within the mega-menu entry.
    pub fn active_category_index(&self) -> Option<usize> {
        self.active_category
    }

    pub fn any_menu_open(&self) -> bool {
        self.mobile_menu_open || self.mega_menu_open
    }

    pub fn depth(&self) -> usize {
        1 + self.drilled.len()
    }

    pub fn current_level(&self) -> &NavigationLevel {
        self.drilled.last().unwrap_or(&self.root)
    }

    pub fn stack(&self) -> impl Iterator<Item = &NavigationLevel> {
        std::iter::once(&self.root).chain(self.drilled.iter())
    }

    fn reset_stack(&mut self) {
        self.drilled.clear();
    }
}

// navigation state controller
//
// this is the only writer of NavigationState.  every operation is total: requests that do not
// make sense in the current state (popping the root, choosing a category while the mega menu
// is closed, and so on) leave the state untouched
#[derive(Clone, Debug, PartialEq)]
pub struct NavController {
    tree: Arc<MenuTree>,
    device: DeviceClass,
    state: NavigationState,
}

impl NavController {
    pub fn new(tree: Arc<MenuTree>) -> Self {
        let state = NavigationState::initial(&tree);

        NavController {
            tree,
            device: DeviceClass::default(),
            state,
        }
    }

    pub fn with_device(mut self, device: DeviceClass) -> Self {
        self.device = device;
        self
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    pub fn mega_entry(&self) -> Option<&NavEntry> {
        self.tree.mega_entry()
    }

    pub fn active_category(&self) -> Option<&MenuCategory> {
        let index = self.state.active_category?;
        self.mega_entry()?.categories().get(index)
    }

    pub fn scroll_locked(&self) -> bool {
        self.state.any_menu_open()
    }

    // desktop

    pub fn open_mega_menu(&mut self) {
        if self.state.mega_menu_open || !self.device.has_mega_menu() {
            return;
        }

        if self.mega_entry().is_none() {
            return;
        }

        debug!("opening mega menu");
        self.state.mega_menu_open = true;
        if self.state.active_category.is_none() {
            self.state.active_category = Some(0);
        }
    }

    pub fn close_mega_menu(&mut self) {
        if self.state.mega_menu_open {
            debug!("closing mega menu");
        }
        self.state.mega_menu_open = false;
        self.state.hover_opened = false;
        self.state.active_category = None;
    }

    // the first click on a trigger the pointer has just opened confirms the menu instead of
    // closing it; only a click after that counts as a re-click
    pub fn toggle_mega_menu(&mut self) {
        if self.state.hover_opened {
            self.state.hover_opened = false;
        } else if self.state.mega_menu_open {
            self.close_mega_menu();
        } else {
            self.open_mega_menu();
        }
    }

    pub fn hover_mega_trigger(&mut self) {
        if !self.device.opens_on_hover() || self.state.mega_menu_open {
            return;
        }

        self.open_mega_menu();
        self.state.hover_opened = self.state.mega_menu_open;
    }

    pub fn set_active_category(&mut self, name: &str) {
        if !self.state.mega_menu_open {
            return;
        }

        if let Some(index) = self.mega_entry().and_then(|e| e.category_index(name)) {
            self.state.active_category = Some(index);
        }
    }

    // mobile

    pub fn open_mobile_menu(&mut self) {
        debug!("opening mobile menu");
        self.state.mobile_menu_open = true;
        self.state.reset_stack();
    }

    pub fn close_mobile_menu(&mut self) {
        self.state.mobile_menu_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        if self.state.mobile_menu_open {
            self.close_mobile_menu();
        } else {
            self.open_mobile_menu();
        }
    }

    pub fn push_mobile_level(&mut self, level: NavigationLevel) {
        debug!({ title = %level.title, depth = self.state.depth() + 1 }, "pushing mobile level");
        self.state.drilled.push(level);
    }

    pub fn pop_mobile_level(&mut self) {
        self.state.drilled.pop();
    }

    pub fn drill_into_entry(&mut self, entry: &NavEntry) {
        if !self.state.mobile_menu_open {
            return;
        }

        if let Some(level) = NavigationLevel::for_entry(entry) {
            self.push_mobile_level(level);
        }
    }

    pub fn drill_into_category(&mut self, category: &MenuCategory) {
        if self.state.mobile_menu_open {
            self.push_mobile_level(NavigationLevel::for_category(category));
        }
    }

    // external events

    // route changes win over everything, including leaf clicks that target the current path
    pub fn on_route_changed(&mut self, path: &str) {
        debug!({ path = path }, "route changed, resetting navigation");
        self.state.mega_menu_open = false;
        self.state.hover_opened = false;
        self.state.mobile_menu_open = false;
        self.state.active_category = None;
        self.state.reset_stack();
    }

    pub fn on_outside_interaction(&mut self, region: ClickRegion) {
        if self.state.mega_menu_open && region == ClickRegion::Outside {
            self.close_mega_menu();
        }
    }

    // the layouts are mutually exclusive, so whichever surface the new layout cannot render
    // is closed rather than left holding the scroll lock
    pub fn on_device_class_changed(&mut self, device: DeviceClass) {
        if device == self.device {
            return;
        }

        debug!({ from = ?self.device, to = ?device }, "device class changed");
        self.device = device;
        self.state.hover_opened = false;

        if device.has_mega_menu() {
            self.close_mobile_menu();
            self.state.reset_stack();
        } else {
            self.close_mega_menu();
        }
    }
}

// active-link matching for the router collaborator: exact match, or a descendant path
pub fn path_is_active(current: &str, target: &str) -> bool {
    if target == "/" {
        return current == "/";
    }

    match current.strip_prefix(target) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuItem;

    fn tree() -> Arc<MenuTree> {
        let item = |name: &str, path: &str| MenuItem {
            name: name.to_owned(),
            path: path.to_owned(),
            description: None,
        };

        Arc::new(
            MenuTree::new(vec![
                NavEntry::link("Why Us", "/why-us"),
                NavEntry::expandable(
                    "Products",
                    "/products",
                    vec![
                        MenuCategory {
                            name: "Featured".to_owned(),
                            description: Some("start here".to_owned()),
                            items: vec![item("Q", "/products/q")],
                        },
                        MenuCategory {
                            name: "Compute".to_owned(),
                            description: None,
                            items: vec![
                                item("EC2", "/products/compute/ec2"),
                                item("Lambda", "/products/compute/lambda"),
                            ],
                        },
                    ],
                ),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn mega_menu_defaults_to_first_category() {
        let mut nav = NavController::new(tree());
        nav.open_mega_menu();

        assert!(nav.state().mega_menu_open());
        assert_eq!(nav.active_category().unwrap().name, "Featured");

        nav.set_active_category("Compute");
        assert_eq!(nav.active_category().unwrap().name, "Compute");

        // re-opening an open menu keeps the chosen category
        nav.open_mega_menu();
        assert_eq!(nav.active_category().unwrap().name, "Compute");
    }

    #[test]
    fn unknown_category_is_ignored() {
        let mut nav = NavController::new(tree());
        nav.open_mega_menu();
        let before = nav.clone();

        nav.set_active_category("Databases");
        assert_eq!(nav, before);
    }

    #[test]
    fn toggle_and_hover_follow_device_policy() {
        let mut nav = NavController::new(tree()).with_device(DeviceClass::TouchDesktop);

        nav.hover_mega_trigger();
        assert!(!nav.state().mega_menu_open());

        nav.toggle_mega_menu();
        assert!(nav.state().mega_menu_open());
        nav.toggle_mega_menu();
        assert!(!nav.state().mega_menu_open());
        assert!(nav.active_category().is_none());

        let mut nav = NavController::new(tree());
        nav.hover_mega_trigger();
        assert!(nav.state().mega_menu_open());
        assert!(nav.state().opened_by_hover());

        // hovering again over a clicked-open menu does not re-arm the first click
        nav.toggle_mega_menu();
        nav.hover_mega_trigger();
        assert!(!nav.state().opened_by_hover());
        nav.toggle_mega_menu();
        assert!(!nav.state().mega_menu_open());

        let mut nav = NavController::new(tree()).with_device(DeviceClass::Mobile);
        nav.open_mega_menu();
        assert!(!nav.state().mega_menu_open());
    }

    #[test]
    fn mega_menu_needs_an_expandable_entry() {
        let links = Arc::new(MenuTree::new(vec![NavEntry::link("About", "/about")]).unwrap());
        let mut nav = NavController::new(links);

        nav.open_mega_menu();
        assert!(!nav.state().mega_menu_open());
    }

    #[test]
    fn outside_interaction_only_closes_from_outside() {
        let mut nav = NavController::new(tree());
        nav.open_mega_menu();

        nav.on_outside_interaction(ClickRegion::Trigger);
        nav.on_outside_interaction(ClickRegion::Panel);
        assert!(nav.state().mega_menu_open());

        nav.on_outside_interaction(ClickRegion::Outside);
        assert!(!nav.state().mega_menu_open());
    }

    #[test]
    fn drilling_requires_open_drawer_and_expandable_entry() {
        let tree = tree();
        let mut nav = NavController::new(tree.clone()).with_device(DeviceClass::Mobile);
        let products = tree.find_entry("Products").unwrap();

        nav.drill_into_entry(products);
        assert_eq!(nav.state().depth(), 1);

        nav.open_mobile_menu();
        nav.drill_into_entry(tree.find_entry("Why Us").unwrap());
        assert_eq!(nav.state().depth(), 1);

        nav.drill_into_entry(products);
        assert_eq!(nav.state().current_level().kind(), LevelKind::CategoryList);
        assert_eq!(nav.state().current_level().title, "Products");

        nav.drill_into_category(products.find_category("Compute").unwrap());
        let level = nav.state().current_level();
        assert_eq!(level.kind(), LevelKind::TopLevel);
        match &level.payload {
            LevelPayload::Entries(entries) => {
                let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
                assert_eq!(names, ["EC2", "Lambda"]);
                assert!(entries.iter().all(|e| !e.is_expandable()));
            }
            LevelPayload::Categories(_) => panic!("expected item level"),
        }

        let titles: Vec<_> = nav.state().stack().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, [ROOT_TITLE, "Products", "Compute"]);
    }

    #[test]
    fn reopening_drawer_resets_stack() {
        let tree = tree();
        let mut nav = NavController::new(tree.clone()).with_device(DeviceClass::Mobile);

        nav.toggle_mobile_menu();
        nav.drill_into_entry(tree.find_entry("Products").unwrap());
        nav.toggle_mobile_menu();
        assert!(!nav.state().mobile_menu_open());

        nav.toggle_mobile_menu();
        assert!(nav.state().mobile_menu_open());
        assert_eq!(nav.state().depth(), 1);
    }

    #[test]
    fn device_change_closes_unrenderable_surface() {
        let tree = tree();
        let mut nav = NavController::new(tree.clone());

        nav.open_mega_menu();
        nav.on_device_class_changed(DeviceClass::Mobile);
        assert!(!nav.scroll_locked());

        nav.open_mobile_menu();
        nav.drill_into_entry(tree.find_entry("Products").unwrap());
        nav.on_device_class_changed(DeviceClass::TouchDesktop);
        assert!(!nav.scroll_locked());
        assert_eq!(nav.state().depth(), 1);
        assert_eq!(nav.device(), DeviceClass::TouchDesktop);
    }

    #[test]
    fn device_class_from_viewport() {
        assert_eq!(DeviceClass::from_viewport(true, true), DeviceClass::HoverDesktop);
        assert_eq!(DeviceClass::from_viewport(true, false), DeviceClass::TouchDesktop);
        assert_eq!(DeviceClass::from_viewport(false, true), DeviceClass::Mobile);
    }

    #[test]
    fn active_path_matching() {
        assert!(path_is_active("/products", "/products"));
        assert!(path_is_active("/products/db/aurora", "/products"));
        assert!(!path_is_active("/productsx", "/products"));
        assert!(!path_is_active("/about", "/products"));
        assert!(path_is_active("/", "/"));
        assert!(!path_is_active("/about", "/"));
    }
}
