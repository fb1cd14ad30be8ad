use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::{
    content::{Icon, PRICING_TIERS, PricingTier},
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
fn TierCard(tier: PricingTier) -> Element {
    let (card, button) = if tier.featured {
        ("card pricing-card featured", "btn btn-primary btn-block")
    } else {
        ("card pricing-card", "btn btn-secondary btn-block")
    };

    rsx! {
        div { class: card,
            if tier.featured {
                span { class: "badge", "Most Popular" }
            }
            h3 { class: "card-title", "{tier.name}" }
            p { class: "pricing-price", "{tier.price}" }
            p { class: "card-text", "{tier.description}" }
            ul { class: "pricing-features",
                for feature in tier.features.iter() {
                    li { key: "{feature}",
                        ContentIcon { icon: Icon::CheckCircle }
                        span { "{feature}" }
                    }
                }
            }
            Link { class: button, to: Route::ContactPage {}, "Select Plan" }
        }
    }
}

#[component]
pub fn PricingPage() -> Element {
    rsx! {
        Seo {
            meta: PageMeta::titled("Pricing")
                .with_description("Flexible engagement models, from fixed-scope projects to dedicated teams."),
        }

        Section {
            SectionTitle { title: "Partnership Models for Every Scale", subtitle: "Pricing Plans" }
            p { class: "section-subtitle",
                "Flexible engagement models designed to align with your project needs and strategic goals."
            }
            div { class: "card-grid",
                for tier in PRICING_TIERS.iter() {
                    TierCard { key: "{tier.name}", tier: *tier }
                }
            }
        }
    }
}
