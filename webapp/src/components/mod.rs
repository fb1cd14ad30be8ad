use dioxus::prelude::*;

use site::NavController;

pub mod footer;
pub mod header;
pub mod icons;
pub mod layout;
pub mod mega_menu;
pub mod mobile_drawer;
pub mod nav_link;
pub mod section;
pub mod theme_toggle;

// the layout provides the controller; everything below it only borrows it
pub fn use_nav() -> Signal<NavController> {
    use_context::<Signal<NavController>>()
}
