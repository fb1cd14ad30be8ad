use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::seo::PageMeta;

use crate::{Route, components::section::Seo};

#[component]
pub fn NotFoundBody(#[props(into)] path: String) -> Element {
    rsx! {
        Seo { meta: PageMeta::titled("Page not found").no_index() }

        div { class: "not-found container",
            p { class: "not-found-code", "404" }
            h1 { class: "detail-title", "Page not found" }
            p { class: "detail-lead", "Nothing lives at {path}." }
            Link { class: "btn btn-primary", to: Route::HomePage {}, "Back to home" }
        }
    }
}

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    rsx! {
        NotFoundBody { path: format!("/{}", route.join("/")) }
    }
}
