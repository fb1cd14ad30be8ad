use dioxus::prelude::*;

use site::content::Icon;

// svg paths on a 24x24 grid, stroked with currentColor
fn content_paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Layers => &[
            "M12 2 2 7l10 5 10-5-10-5Z",
            "m2 17 10 5 10-5",
            "m2 12 10 5 10-5",
        ],
        Icon::BrainCircuit => &[
            "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
            "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z",
            "M12 5v13",
            "M9 13h6",
        ],
        Icon::CloudCog => &[
            "M20 16.2A4.5 4.5 0 0 0 17.5 8h-1.8A7 7 0 1 0 4 14.9",
            "M12 13a3 3 0 1 0 0 6 3 3 0 0 0 0-6Z",
            "m12 11 0 2",
            "m12 19 0 2",
        ],
        Icon::Database => &[
            "M3 5a9 3 0 1 0 18 0 9 3 0 1 0-18 0",
            "M3 5v14a9 3 0 0 0 18 0V5",
            "M3 12a9 3 0 0 0 18 0",
        ],
        Icon::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
        Icon::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
        Icon::Building => &[
            "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z",
            "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2",
            "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2",
            "M10 6h4",
            "M10 10h4",
            "M10 14h4",
        ],
        Icon::HeartPulse => &[
            "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            "M3.22 12H9.5l.5-1 2 4.5 2-7 1.5 3.5h5.27",
        ],
        Icon::ShoppingCart => &[
            "M8 21a1 1 0 1 0 0-2 1 1 0 0 0 0 2Z",
            "M19 21a1 1 0 1 0 0-2 1 1 0 0 0 0 2Z",
            "M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12",
        ],
    }
}

// glyphs used by the chrome rather than the page copy
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Glyph {
    Logo,
    Menu,
    Close,
    ChevronDown,
    ChevronLeft,
    ChevronRight,
    ArrowUp,
    Sun,
    Moon,
    Monitor,
}

fn glyph_paths(glyph: Glyph) -> &'static [&'static str] {
    match glyph {
        Glyph::Logo => &["M4 4h7v7H4Z", "M13 13h7v7h-7Z", "M13 4h7v7h-7Z"],
        Glyph::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        Glyph::Close => &["M18 6 6 18", "m6 6 12 12"],
        Glyph::ChevronDown => &["m6 9 6 6 6-6"],
        Glyph::ChevronLeft => &["m15 18-6-6 6-6"],
        Glyph::ChevronRight => &["m9 18 6-6-6-6"],
        Glyph::ArrowUp => &["m5 12 7-7 7 7", "M12 19V5"],
        Glyph::Sun => &[
            "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8Z",
            "M12 2v2",
            "M12 20v2",
            "m4.93 4.93 1.41 1.41",
            "m17.66 17.66 1.41 1.41",
            "M2 12h2",
            "M20 12h2",
            "m6.34 17.66-1.41 1.41",
            "m19.07 4.93-1.41 1.41",
        ],
        Glyph::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
        Glyph::Monitor => &["M4 3h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2Z", "M8 21h8", "M12 17v4"],
    }
}

#[component]
fn Svg(paths: &'static [&'static str]) -> Element {
    rsx! {
        svg {
            class: "icon",
            "viewBox": "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            "stroke-width": "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            "aria-hidden": "true",
            for d in paths.iter() {
                path { d: *d }
            }
        }
    }
}

#[component]
pub fn ContentIcon(icon: Icon) -> Element {
    rsx! {
        Svg { paths: content_paths(icon) }
    }
}

#[component]
pub fn GlyphIcon(glyph: Glyph) -> Element {
    rsx! {
        Svg { paths: glyph_paths(glyph) }
    }
}
