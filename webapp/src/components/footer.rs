use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::{SiteConfig, content::{COMPANY_LINKS, SOLUTIONS}};

use crate::common::current_year;

#[component]
pub fn Footer() -> Element {
    let config = use_context::<Arc<SiteConfig>>();
    let site = &config.site;
    let year = current_year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        p { class: "footer-heading", "{site.name}" }
                        p { "{site.tagline}" }
                    }
                    div {
                        p { class: "footer-heading", "Solutions" }
                        ul { class: "footer-links",
                            for solution in SOLUTIONS.iter().take(4) {
                                li { key: "{solution.title}",
                                    Link { to: "/solutions", "{solution.title}" }
                                }
                            }
                        }
                    }
                    div {
                        p { class: "footer-heading", "Company" }
                        ul { class: "footer-links",
                            for (name, path) in COMPANY_LINKS.iter().copied() {
                                li { key: "{name}",
                                    Link { to: path, "{name}" }
                                }
                            }
                        }
                    }
                }
                p { class: "footer-bottom", "© {year} {site.legal_name}. All rights reserved." }
            }
        }
    }
}
