#![allow(non_snake_case)]
use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, info};

use site::SiteConfig;

mod common;
use common::theme::ThemeProvider;

mod components;
use components::layout::SiteLayout;

mod about;
use about::AboutPage;

mod contact;
use contact::ContactPage;

mod home;
use home::HomePage;

mod not_found;
use not_found::NotFound;

mod pricing;
use pricing::PricingPage;

mod products;
use products::{ProductDetail, ProductsPage};

mod resources;
use resources::ResourcesPage;

mod solutions;
use solutions::SolutionsPage;

mod why_us;
use why_us::WhyUsPage;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    // the menu is validated before anything mounts, a broken site.toml is a build mistake
    let config = match SiteConfig::embedded() {
        Ok(val) => val,
        Err(err) => panic!("failed to parse site config: {err}"),
    };

    info!({ entries = config.menu.entries().len() }, "loaded site config");

    LaunchBuilder::new()
        .with_context(Arc::new(config))
        .launch(App);
}

// product detail paths come straight from the menu tree, so they are matched as a catch-all
// under /products and resolved against the tree by the page itself
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        HomePage {},
        #[route("/why-us")]
        WhyUsPage {},
        #[route("/products")]
        ProductsPage {},
        #[route("/products/:..segments")]
        ProductDetail { segments: Vec<String> },
        #[route("/solutions")]
        SolutionsPage {},
        #[route("/pricing")]
        PricingPage {},
        #[route("/resources")]
        ResourcesPage {},
        #[route("/about")]
        AboutPage {},
        #[route("/contact")]
        ContactPage {},
        #[route("/:..route")]
        NotFound { route: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::SITE_STYLES}" }
        ThemeProvider {
            Router::<Route> { config: RouterConfig::default }
        }
    }
}
