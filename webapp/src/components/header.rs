use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::{NavEntry, SiteConfig, nav::path_is_active};

use crate::{
    Route,
    components::{
        icons::{Glyph, GlyphIcon},
        mega_menu::MegaMenu,
        mobile_drawer::MobileDrawer,
        nav_link::NavLink,
        theme_toggle::ThemeToggle,
        use_nav,
    },
};

// the trigger swallows its own pointer-down so the outside-click handler on the layout never
// sees it; the click then toggles as usual
#[component]
fn MegaTrigger(entry: NavEntry) -> Element {
    let mut nav = use_nav();
    let open = nav.read().state().mega_menu_open();
    let current = use_route::<Route>().to_string();

    let class = if open || path_is_active(&current, &entry.path) {
        "nav-trigger active"
    } else {
        "nav-trigger"
    };

    rsx! {
        button {
            class: class,
            r#type: "button",
            "aria-haspopup": "true",
            "aria-expanded": if open { "true" } else { "false" },
            "aria-controls": "mega-menu-panel",
            onmousedown: move |evt| evt.stop_propagation(),
            onclick: move |_| nav.write().toggle_mega_menu(),
            onmouseenter: move |_| nav.write().hover_mega_trigger(),
            "{entry.name}"
            GlyphIcon { glyph: Glyph::ChevronDown }
        }
    }
}

#[component]
fn HeaderEntry(entry: NavEntry) -> Element {
    if entry.is_expandable() {
        rsx! {
            MegaTrigger { entry }
        }
    } else {
        rsx! {
            NavLink { class: "nav-link", to: entry.path.clone(), "{entry.name}" }
        }
    }
}

// site header
//
// the desktop and mobile layouts are chosen from the controller's device class rather than
// from css alone, so a surface that is not on screen can never hold the scroll lock
#[component]
pub fn Header() -> Element {
    let config = use_context::<Arc<SiteConfig>>();
    let mut nav = use_nav();

    let (desktop, mobile_open) = {
        let nav = nav.read();
        (nav.device().has_mega_menu(), nav.state().mobile_menu_open())
    };

    let contact = config.site.contact_path.clone();

    rsx! {
        header { class: "site-header",
            div { class: "header-inner",
                Link { class: "brand", to: Route::HomePage {},
                    GlyphIcon { glyph: Glyph::Logo }
                    " {config.site.name}"
                }

                if desktop {
                    nav { class: "desktop-nav", "aria-label": "Main",
                        for entry in config.menu.entries().iter() {
                            HeaderEntry { key: "{entry.name}", entry: entry.clone() }
                        }
                    }
                }

                div { class: "header-actions",
                    ThemeToggle {}
                    if desktop {
                        NavLink { class: "btn btn-primary", to: contact, "Contact Us" }
                    } else {
                        button {
                            class: "icon-btn",
                            r#type: "button",
                            "aria-label": "Open main menu",
                            "aria-expanded": if mobile_open { "true" } else { "false" },
                            "aria-controls": "mobile-drawer",
                            onclick: move |_| nav.write().toggle_mobile_menu(),
                            GlyphIcon { glyph: Glyph::Menu }
                        }
                    }
                }
            }

            if desktop {
                MegaMenu {}
            }
        }

        if !desktop {
            MobileDrawer {}
        }
    }
}
