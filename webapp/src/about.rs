use dioxus::prelude::*;

use site::{content::TEAM, seo::PageMeta};

use crate::components::section::{Section, SectionTitle, Seo};

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        Seo {
            meta: PageMeta::titled("About")
                .with_description("Our mission and the people behind BintyByte."),
        }

        Section {
            SectionTitle { title: "Our Mission & Team", subtitle: "About Us" }
            p { class: "section-subtitle",
                "We are a team of passionate technologists dedicated to solving complex problems and delivering tangible business value through principled engineering and innovative thinking."
            }
        }

        Section { muted: true,
            h3 { class: "section-title", "Meet Our Leadership" }
            div { class: "card-grid",
                for member in TEAM.iter() {
                    div { key: "{member.name}", class: "card",
                        img {
                            src: member.image_url,
                            alt: "{member.name}",
                            loading: "lazy",
                            width: "96",
                            height: "96",
                        }
                        h4 { class: "card-title", "{member.name}" }
                        p { class: "team-role", "{member.role}" }
                        p { class: "card-text", "{member.bio}" }
                    }
                }
            }
        }
    }
}
