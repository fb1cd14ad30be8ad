use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::{SiteConfig, seo::PageMeta};

use crate::{
    Route,
    components::{
        nav_link::NavLink,
        section::{Section, SectionTitle, Seo},
    },
    not_found::NotFoundBody,
};

// practice areas shown on the landing page, separate from the catalogue in the menu
const ACCELERATORS: &[(&str, &str)] = &[
    (
        "Cloud Solutions on AWS",
        "We architect and deploy scalable, serverless, and containerized data solutions on Amazon Web Services, from foundational data lakes on S3 to real-time analytics with Kinesis and managed machine learning with SageMaker.",
    ),
    (
        "Federated Lakehouse with Starburst",
        "Break down data silos without moving data. Starburst Enterprise gives a single point of access to every data source, in the cloud or on-premise, for fast interactive analytics across the whole data estate.",
    ),
];

#[component]
pub fn ProductsPage() -> Element {
    let config = use_context::<Arc<SiteConfig>>();
    let products = config.menu.mega_entry().cloned();

    rsx! {
        Seo {
            meta: PageMeta::titled("Products")
                .with_description("Technology accelerators and managed platforms we build on and deliver with."),
        }

        Section {
            SectionTitle { title: "Technology Accelerators", subtitle: "Our Products & Platforms" }
            div { class: "card-grid",
                for (title, description) in ACCELERATORS.iter().copied() {
                    div { key: "{title}", class: "card",
                        h3 { class: "card-title", "{title}" }
                        p { class: "card-text", "{description}" }
                        Link { to: Route::ContactPage {}, "Talk to our team →" }
                    }
                }
            }
        }

        if let Some(products) = products {
            for category in products.categories().iter() {
                Section { key: "{category.name}", muted: true,
                    h2 { class: "section-title", "{category.name}" }
                    if let Some(description) = &category.description {
                        p { class: "section-subtitle", "{description}" }
                    }
                    div { class: "card-grid",
                        for item in category.items.iter() {
                            NavLink { key: "{item.path}", class: "card", to: item.path.clone(),
                                h3 { class: "card-title", "{item.name}" }
                                if let Some(description) = &item.description {
                                    p { class: "card-text", "{description}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

// a single catalogue entry, looked up by the path the menu links to
#[component]
pub fn ProductDetail(segments: Vec<String>) -> Element {
    let config = use_context::<Arc<SiteConfig>>();
    let path = format!("/products/{}", segments.join("/"));

    let Some((category, item)) = config.menu.find_item_by_path(&path) else {
        return rsx! {
            NotFoundBody { path }
        };
    };

    let description = item
        .description
        .clone()
        .unwrap_or_else(|| format!("{} from the {} catalogue.", item.name, category.name));

    rsx! {
        Seo {
            meta: PageMeta::titled(item.name.clone())
                .with_description(description.clone())
                .article(),
        }

        Section {
            nav { class: "breadcrumbs", "aria-label": "Breadcrumb",
                Link { to: Route::ProductsPage {}, "Products" }
                span { "/" }
                span { "{category.name}" }
            }
            h1 { class: "detail-title", "{item.name}" }
            p { class: "detail-lead", "{description}" }
            Link { class: "btn btn-primary", to: Route::ContactPage {}, "Talk to an expert" }
        }

        Section { muted: true,
            h2 { class: "section-title", "More in {category.name}" }
            div { class: "card-grid",
                for other in category.items.iter().filter(|other| other.path != item.path) {
                    NavLink { key: "{other.path}", class: "card", to: other.path.clone(),
                        h3 { class: "card-title", "{other.name}" }
                    }
                }
            }
        }
    }
}
