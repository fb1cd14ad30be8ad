use std::fmt::Debug;

use dioxus::prelude::*;
use tracing::warn;
use web_sys::{Document, Element};

use site::{effects::ScrollTarget, seo::HeadTags};

pub const DESKTOP_QUERY: &str = "(min-width: 1024px)";
pub const HOVER_QUERY: &str = "(hover: hover) and (pointer: fine)";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn js_err<E: Debug>(err: E) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

fn html_document() -> anyhow::Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow::Error::msg("no global document"))
}

// body scroll
//
// the page behind an open menu should not scroll.  clearing the property rather than setting it
// to "auto" leaves whatever the stylesheet says in charge again
pub struct BodyScroll;

impl BodyScroll {
    fn set_overflow(locked: bool) -> anyhow::Result<()> {
        let body = html_document()?
            .body()
            .ok_or_else(|| anyhow::Error::msg("document has no body"))?;
        let style = body.style();

        if locked {
            style.set_property("overflow", "hidden").map_err(js_err)?;
        } else {
            style.remove_property("overflow").map_err(js_err)?;
        }

        Ok(())
    }
}

impl ScrollTarget for BodyScroll {
    fn set_scroll_locked(&mut self, locked: bool) {
        if let Err(err) = BodyScroll::set_overflow(locked) {
            warn!("failed to update body scroll: {err}");
        }
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn set_dark_class(dark: bool) -> anyhow::Result<()> {
    let root = html_document()?
        .document_element()
        .ok_or_else(|| anyhow::Error::msg("document has no root element"))?;

    root.class_list()
        .toggle_with_force("dark", dark)
        .map_err(js_err)?;
    Ok(())
}

pub fn canonical_url() -> anyhow::Result<String> {
    let location = web_sys::window()
        .ok_or_else(|| anyhow::Error::msg("no global window"))?
        .location();

    Ok(format!(
        "{}{}{}",
        location.origin().map_err(js_err)?,
        location.pathname().map_err(js_err)?,
        location.search().map_err(js_err)?
    ))
}

// head tags
//
// update-or-create, so navigating between pages rewrites the same elements instead of piling
// up duplicates in <head>
pub fn apply_head_tags(tags: &HeadTags) -> anyhow::Result<()> {
    let document = html_document()?;
    document.set_title(&tags.title);

    for tag in tags.meta.iter() {
        let selector = format!(r#"meta[{}="{}"]"#, tag.attr.as_str(), tag.key);
        let element = find_or_create(&document, &selector, "meta", tag.attr.as_str(), tag.key)?;
        element
            .set_attribute("content", &tag.content)
            .map_err(js_err)?;
    }

    let canonical = find_or_create(
        &document,
        r#"link[rel="canonical"]"#,
        "link",
        "rel",
        "canonical",
    )?;
    canonical
        .set_attribute("href", &tags.canonical)
        .map_err(js_err)?;

    Ok(())
}

fn find_or_create(
    document: &Document,
    selector: &str,
    tag: &str,
    attr: &str,
    value: &str,
) -> anyhow::Result<Element> {
    if let Some(element) = document.query_selector(selector).map_err(js_err)? {
        return Ok(element);
    }

    let head = document
        .head()
        .ok_or_else(|| anyhow::Error::msg("document has no head"))?;
    let element = document.create_element(tag).map_err(js_err)?;
    element.set_attribute(attr, value).map_err(js_err)?;
    head.append_child(&element).map_err(js_err)?;

    Ok(element)
}

pub fn match_media(query: &str) -> anyhow::Result<bool> {
    let list = web_sys::window()
        .ok_or_else(|| anyhow::Error::msg("no global window"))?
        .match_media(query)
        .map_err(js_err)?;

    Ok(list.map(|l| l.matches()).unwrap_or(false))
}

// media query signal
//
// the initial value is read synchronously so the first render already has the right layout,
// and a change listener keeps it current afterwards
pub fn use_media_query(query: &'static str) -> Signal<bool> {
    let mut matches = use_signal(|| {
        match_media(query).unwrap_or_else(|err| {
            warn!("failed to evaluate media query {query}: {err}");
            false
        })
    });

    use_future(move || async move {
        let mut eval = document::eval(&format!(
            r#"
            const list = window.matchMedia({query:?});
            dioxus.send(list.matches);
            list.addEventListener("change", (event) => dioxus.send(event.matches));
            await new Promise(() => {{}});
            "#
        ));

        loop {
            match eval.recv::<bool>().await {
                Ok(value) => {
                    if *matches.peek() != value {
                        matches.set(value);
                    }
                }
                Err(err) => {
                    warn!("stopped watching media query {query}: {err:?}");
                    break;
                }
            }
        }
    });

    matches
}
