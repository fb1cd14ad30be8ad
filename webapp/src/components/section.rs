use std::sync::Arc;

use dioxus::prelude::*;
use tracing::warn;

use site::{SiteConfig, seo::{HeadTags, PageMeta}};

use crate::common::browser::{apply_head_tags, canonical_url};

#[component]
pub fn Section(#[props(default)] muted: bool, children: Element) -> Element {
    rsx! {
        section { class: if muted { "section muted" } else { "section" },
            div { class: "container", {children} }
        }
    }
}

#[component]
pub fn SectionTitle(#[props(into)] title: String, #[props(into)] subtitle: String) -> Element {
    rsx! {
        h2 { class: "section-title", "{title}" }
        p { class: "section-subtitle", "{subtitle}" }
    }
}

// page metadata
//
// renders nothing itself, it rewrites <head> whenever the page's metadata changes
#[component]
pub fn Seo(meta: PageMeta) -> Element {
    let config = use_context::<Arc<SiteConfig>>();

    use_effect(use_reactive((&meta,), move |(meta,)| {
        let canonical = canonical_url().unwrap_or_else(|err| {
            warn!("failed to read location for canonical url: {err}");
            String::new()
        });

        let tags = HeadTags::resolve(&meta, &config.site, canonical);
        if let Err(err) = apply_head_tags(&tags) {
            warn!("failed to apply head tags: {err}");
        }
    }));

    rsx! {}
}
