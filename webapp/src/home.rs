use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::{
    content::{CORE_PILLARS, SERVICES, Service},
    seo::PageMeta,
};

use crate::{
    Route,
    components::{
        icons::ContentIcon,
        section::{Section, SectionTitle, Seo},
    },
};

#[component]
fn ServiceCard(service: Service) -> Element {
    rsx! {
        div { class: "card",
            span { class: "feature-icon", ContentIcon { icon: service.icon } }
            span { class: "badge", "{service.category.label()}" }
            h3 { class: "card-title", "{service.title}" }
            p { class: "card-text", "{service.description}" }
        }
    }
}

#[component]
pub fn HomePage() -> Element {
    rsx! {
        Seo { meta: PageMeta::default() }

        section { class: "hero",
            div { class: "container",
                h1 { class: "hero-title", "Intelligent Data Solutions, Engineered for Impact" }
                p { class: "hero-subtitle",
                    "We build scalable data platforms, deploy cutting-edge AI, and deliver robust cloud infrastructure to accelerate your business outcomes."
                }
                div { class: "hero-actions",
                    Link { class: "btn btn-primary", to: Route::ContactPage {}, "Get Started" }
                    Link { class: "btn btn-secondary", to: Route::WhyUsPage {}, "Learn More" }
                }
            }
        }

        Section {
            SectionTitle { title: "Core Pillars of Excellence", subtitle: "Our Approach" }
            div { class: "card-grid",
                for pillar in CORE_PILLARS.iter() {
                    div { key: "{pillar.title}", class: "card",
                        span { class: "feature-icon", ContentIcon { icon: pillar.icon } }
                        h3 { class: "card-title", "{pillar.title}" }
                        p { class: "card-text", "{pillar.description}" }
                    }
                }
            }
        }

        Section { muted: true,
            SectionTitle { title: "Our Services", subtitle: "What We Do" }
            div { class: "card-grid",
                for service in SERVICES.iter() {
                    ServiceCard { key: "{service.title}", service: *service }
                }
            }
        }

        Section {
            SectionTitle {
                title: "Ready to unlock your data's potential?",
                subtitle: "Let's discuss how BintyByte can help you achieve your goals.",
            }
            div { class: "hero-actions",
                Link { class: "btn btn-primary", to: Route::ContactPage {}, "Schedule a Consultation" }
            }
        }
    }
}
