use dioxus::prelude::*;

use site::theme::ThemePreference;

use crate::{
    common::theme::{set_theme, use_theme},
    components::icons::{Glyph, GlyphIcon},
};

fn glyph_for(preference: ThemePreference) -> Glyph {
    match preference {
        ThemePreference::Light => Glyph::Sun,
        ThemePreference::Dark => Glyph::Moon,
        ThemePreference::System => Glyph::Monitor,
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let current = theme();

    rsx! {
        div { class: "theme-toggle", role: "group", "aria-label": "Color theme",
            for preference in ThemePreference::all() {
                button {
                    key: "{preference}",
                    r#type: "button",
                    title: "Set theme to {preference}",
                    "aria-label": "Set theme to {preference}",
                    "aria-pressed": if preference == current { "true" } else { "false" },
                    onclick: move |_| set_theme(theme, preference),
                    GlyphIcon { glyph: glyph_for(preference) }
                }
            }
        }
    }
}
