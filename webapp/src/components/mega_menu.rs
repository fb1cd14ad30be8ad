use dioxus::prelude::*;

use site::MenuCategory;

use crate::components::{
    icons::{Glyph, GlyphIcon},
    nav_link::NavLink,
    use_nav,
};

#[component]
fn CategoryButton(#[props(into)] name: String, active: bool) -> Element {
    let mut nav = use_nav();

    let hovered = name.clone();
    let focused = name.clone();
    let clicked = name.clone();

    rsx! {
        li {
            button {
                class: if active { "mega-category active" } else { "mega-category" },
                r#type: "button",
                "aria-current": if active { "true" } else { "false" },
                onmouseenter: move |_| nav.write().set_active_category(&hovered),
                onfocus: move |_| nav.write().set_active_category(&focused),
                onclick: move |_| nav.write().set_active_category(&clicked),
                "{name}"
                GlyphIcon { glyph: Glyph::ChevronRight }
            }
        }
    }
}

#[component]
fn CategoryPanel(category: MenuCategory, #[props(into)] browse: String) -> Element {
    rsx! {
        h3 { class: "mega-panel-title", "{category.name}" }
        if let Some(description) = &category.description {
            p { class: "mega-panel-description", "{description}" }
            NavLink { class: "mega-browse", to: browse, "Browse all products →" }
        }
        ul { class: "mega-items",
            for item in category.items.iter() {
                li { key: "{item.path}",
                    NavLink { class: "mega-item", to: item.path.clone(),
                        strong { "{item.name}" }
                        if let Some(description) = &item.description {
                            span { class: "mega-item-description", "{description}" }
                        }
                    }
                }
            }
        }
    }
}

// desktop mega menu
//
// renders nothing unless the controller says it is open.  pointer-down inside the panel is
// stopped here for the same reason as on the trigger
#[component]
pub fn MegaMenu() -> Element {
    let mut nav = use_nav();

    let (entry, active) = {
        let nav = nav.read();
        if !nav.state().mega_menu_open() {
            return rsx! {};
        }
        (nav.mega_entry().cloned(), nav.active_category().cloned())
    };

    let Some(entry) = entry else {
        return rsx! {};
    };

    let active_name = active.as_ref().map(|c| c.name.clone());

    rsx! {
        div {
            id: "mega-menu-panel",
            class: "mega-menu",
            role: "region",
            "aria-label": "{entry.name}",
            onmousedown: move |evt| evt.stop_propagation(),
            div { class: "mega-inner",
                ul { class: "mega-categories",
                    for category in entry.categories().iter() {
                        CategoryButton {
                            key: "{category.name}",
                            name: category.name.clone(),
                            active: active_name.as_deref() == Some(category.name.as_str()),
                        }
                    }
                }
                div { class: "mega-panel",
                    button {
                        class: "icon-btn mega-close",
                        r#type: "button",
                        "aria-label": "Close menu",
                        onclick: move |_| nav.write().close_mega_menu(),
                        GlyphIcon { glyph: Glyph::Close }
                    }
                    if let Some(category) = active {
                        CategoryPanel { category, browse: entry.path.clone() }
                    }
                }
            }
        }
    }
}
