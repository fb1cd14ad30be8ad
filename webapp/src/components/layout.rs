use std::{cell::RefCell, rc::Rc, sync::Arc};

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use site::{
    ClickRegion, DeviceClass, NavController, SiteConfig,
    effects::{OutsideClickWatcher, ScrollLock},
};

use crate::{
    Route,
    common::browser::{BodyScroll, DESKTOP_QUERY, HOVER_QUERY, scroll_to_top, use_media_query},
    components::{footer::Footer, header::Header},
};

#[component]
fn SkipLink() -> Element {
    rsx! {
        a { class: "skip-link", href: "#main-content", "Skip to main content" }
    }
}

// site layout
//
// owns the navigation controller and the outside-click watcher and hands both down through
// context.  the effects here are the only places that feed external events (viewport, route)
// into the controller or mirror its state out to the page
#[component]
pub fn SiteLayout() -> Element {
    let config = use_context::<Arc<SiteConfig>>();
    let desktop = use_media_query(DESKTOP_QUERY);
    let hover = use_media_query(HOVER_QUERY);

    let mut nav = use_context_provider(move || {
        let device = DeviceClass::from_viewport(*desktop.peek(), *hover.peek());
        Signal::new(NavController::new(config.menu.clone()).with_device(device))
    });
    let mut watcher = use_context_provider(|| Signal::new(OutsideClickWatcher::default()));

    // viewport
    use_effect(move || {
        let device = DeviceClass::from_viewport(desktop(), hover());
        if nav.peek().device() != device {
            nav.write().on_device_class_changed(device);
        }
    });

    // route changes reset everything, then start the new page at the top
    let path = use_route::<Route>().to_string();
    use_effect(use_reactive((&path,), move |(path,)| {
        nav.write().on_route_changed(&path);
        scroll_to_top();
    }));

    // body scroll follows the state; the hook storage keeps the lock alive for the layout's
    // lifetime and use_drop hands the page back its scrollbar
    let scroll_lock = use_hook(|| Rc::new(RefCell::new(ScrollLock::new(BodyScroll))));
    use_effect({
        let scroll_lock = scroll_lock.clone();
        move || scroll_lock.borrow_mut().sync(nav.read().state())
    });
    use_drop(move || scroll_lock.borrow_mut().release());

    use_effect(move || {
        let change = watcher.write().sync(nav.read().state());
        if let Some(change) = change {
            debug!(?change, "outside click watcher changed");
        }
    });

    // every pointer-down that reaches the layout root is outside the trigger and the panel,
    // since both of those stop propagation
    let on_pointer_down = move |_: MouseEvent| {
        if watcher.read().dispatch(ClickRegion::Outside, &mut nav.write()) {
            debug!("mega menu dismissed by outside click");
        }
    };

    let dimmed = watcher.read().is_registered();

    rsx! {
        div { class: "site", onmousedown: on_pointer_down,
            SkipLink {}
            Header {}
            if dimmed {
                div { class: "menu-backdrop", "aria-hidden": "true" }
            }
            main { id: "main-content", class: "site-main", tabindex: "-1",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
