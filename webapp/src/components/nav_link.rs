use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::nav::path_is_active;

use crate::{Route, components::use_nav};

// a leaf link
//
// the click resets the navigation state directly, so a link to the page already on screen
// still closes whatever menu it was clicked from
#[component]
pub fn NavLink(
    #[props(into)] to: String,
    #[props(into)] class: String,
    children: Element,
) -> Element {
    let mut nav = use_nav();
    let current = use_route::<Route>().to_string();

    let active = path_is_active(&current, &to);
    let link_class = if active {
        format!("{class} active")
    } else {
        class
    };

    let target = to.clone();

    rsx! {
        Link {
            class: link_class,
            to: to,
            onclick: move |_| nav.write().on_route_changed(&target),
            {children}
        }
    }
}
