use dioxus::prelude::*;
use tracing::{debug, warn};

use site::theme::{THEME_STORAGE_KEY, ThemePreference};

use crate::common::{
    browser::{DARK_SCHEME_QUERY, set_dark_class, use_media_query},
    storage::{StoredPreference, get_local_storage, set_local_storage},
};

impl StoredPreference for ThemePreference {
    fn store(&self) -> () {
        set_local_storage(THEME_STORAGE_KEY, self)
    }

    // missing or unreadable storage means following the system
    fn fetch() -> Self {
        match get_local_storage::<ThemePreference>(THEME_STORAGE_KEY) {
            Ok(Some(pref)) => pref,
            Ok(None) => ThemePreference::default(),
            Err(err) => {
                warn!("falling back to system theme: {err}");
                ThemePreference::default()
            }
        }
    }
}

// theme provider
//
// owns the preference signal for the whole app.  readers subscribe through use_theme(), and the
// effect below re-applies the resolved theme whenever either the preference or the os-level
// signal changes
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let preference = use_context_provider(|| Signal::new(ThemePreference::fetch()));
    let system_dark = use_media_query(DARK_SCHEME_QUERY);

    use_effect(move || {
        let resolved = preference().resolve(system_dark());
        debug!({ preference = %preference(), dark = resolved.is_dark() }, "applying theme");

        if let Err(err) = set_dark_class(resolved.is_dark()) {
            warn!("failed to apply theme: {err}");
        }
    });

    rsx! {
        {children}
    }
}

pub fn use_theme() -> Signal<ThemePreference> {
    use_context::<Signal<ThemePreference>>()
}

pub fn set_theme(mut theme: Signal<ThemePreference>, preference: ThemePreference) {
    preference.store();
    theme.set(preference);
}
