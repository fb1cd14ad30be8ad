use std::sync::Arc;

use dioxus::prelude::*;

use site::{
    MenuCategory, NavEntry, SiteConfig,
    nav::{LevelPayload, NavigationLevel},
};

use crate::components::{
    icons::{Glyph, GlyphIcon},
    nav_link::NavLink,
    use_nav,
};

#[component]
fn DrawerEntry(entry: NavEntry) -> Element {
    let mut nav = use_nav();

    if !entry.is_expandable() {
        return rsx! {
            li {
                NavLink { class: "drawer-row", to: entry.path.clone(),
                    span {
                        "{entry.name}"
                        if let Some(description) = &entry.description {
                            span { class: "drawer-row-description", "{description}" }
                        }
                    }
                }
            }
        };
    }

    let target = entry.clone();

    rsx! {
        li {
            button {
                class: "drawer-row",
                r#type: "button",
                onclick: move |_| nav.write().drill_into_entry(&target),
                span { "{entry.name}" }
                GlyphIcon { glyph: Glyph::ChevronRight }
            }
        }
    }
}

#[component]
fn DrawerCategory(category: MenuCategory) -> Element {
    let mut nav = use_nav();
    let target = category.clone();

    rsx! {
        li {
            button {
                class: "drawer-row",
                r#type: "button",
                onclick: move |_| nav.write().drill_into_category(&target),
                span {
                    "{category.name}"
                    if let Some(description) = &category.description {
                        span { class: "drawer-row-description", "{description}" }
                    }
                }
                GlyphIcon { glyph: Glyph::ChevronRight }
            }
        }
    }
}

// mobile drill-down drawer
//
// only the top of the stack is rendered; the back button appears once there is something to
// pop back to
#[component]
pub fn MobileDrawer() -> Element {
    let config = use_context::<Arc<SiteConfig>>();
    let mut nav = use_nav();

    let (open, depth, level) = {
        let nav = nav.read();
        let state = nav.state();
        (
            state.mobile_menu_open(),
            state.depth(),
            state.current_level().clone(),
        )
    };

    if !open {
        return rsx! {};
    }

    let NavigationLevel { title, payload } = level;

    let rows = match payload {
        LevelPayload::Entries(entries) => rsx! {
            for entry in entries {
                DrawerEntry { key: "{entry.name}", entry }
            }
        },
        LevelPayload::Categories(categories) => rsx! {
            for category in categories {
                DrawerCategory { key: "{category.name}", category }
            }
        },
    };

    let contact = config.site.contact_path.clone();

    rsx! {
        div {
            class: "menu-backdrop full",
            "aria-hidden": "true",
            onclick: move |_| nav.write().close_mobile_menu(),
        }
        div {
            id: "mobile-drawer",
            class: "drawer",
            role: "dialog",
            "aria-modal": "true",
            "aria-label": "{title}",
            div { class: "drawer-header",
                if depth > 1 {
                    button {
                        class: "icon-btn",
                        r#type: "button",
                        "aria-label": "Back",
                        onclick: move |_| nav.write().pop_mobile_level(),
                        GlyphIcon { glyph: Glyph::ChevronLeft }
                    }
                }
                h2 { class: "drawer-title", "{title}" }
                button {
                    class: "icon-btn",
                    r#type: "button",
                    "aria-label": "Close menu",
                    onclick: move |_| nav.write().close_mobile_menu(),
                    GlyphIcon { glyph: Glyph::Close }
                }
            }
            nav { "aria-label": "Mobile",
                ul { class: "drawer-list", {rows} }
            }
            div { class: "drawer-footer",
                NavLink { class: "btn btn-primary btn-block", to: contact, "Contact Us" }
            }
        }
    }
}
