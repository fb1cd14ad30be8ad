use dioxus::prelude::*;

use site::{content::DIFFERENTIATORS, seo::PageMeta};

use crate::components::{
    icons::ContentIcon,
    section::{Section, SectionTitle, Seo},
};

#[component]
pub fn WhyUsPage() -> Element {
    rsx! {
        Seo {
            meta: PageMeta::titled("Why Us")
                .with_description("What sets BintyByte apart: senior engineers, outcome-driven delivery, and platforms your team can own."),
        }

        Section {
            SectionTitle { title: "Our Differentiators", subtitle: "Why BintyByte" }
            p { class: "section-subtitle",
                "We are more than just engineers; we are strategic partners invested in your success."
            }
            div { class: "card-grid",
                for item in DIFFERENTIATORS.iter() {
                    div { key: "{item.title}", class: "card",
                        span { class: "feature-icon", ContentIcon { icon: item.icon } }
                        h3 { class: "card-title", "{item.title}" }
                        p { class: "card-text", "{item.description}" }
                    }
                }
            }
        }
    }
}
