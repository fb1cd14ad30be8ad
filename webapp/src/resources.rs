use dioxus::prelude::*;

use site::{content::RESOURCES, seo::PageMeta};

use crate::components::{
    nav_link::NavLink,
    section::{Section, SectionTitle, Seo},
};

#[component]
pub fn ResourcesPage() -> Element {
    rsx! {
        Seo {
            meta: PageMeta::titled("Resources")
                .with_description("Articles, whitepapers, and webinars on data platforms, MLOps, and cloud engineering."),
        }

        Section {
            SectionTitle { title: "Insights & Expertise", subtitle: "Resources" }
            div { class: "card-grid",
                for resource in RESOURCES.iter() {
                    div { key: "{resource.title}", class: "card",
                        span { class: "badge", "{resource.kind.label()}" }
                        h3 { class: "card-title", "{resource.title}" }
                        p { class: "card-text", "{resource.description}" }
                        NavLink { class: "mega-browse", to: resource.link, "Read more →" }
                    }
                }
            }
        }
    }
}
