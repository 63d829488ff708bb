// Browser-backed seams of the theme resolver.
//
// localStorage holds the literal text of the theme (not JSON), so values stay
// readable and compatible with a hand-written `localStorage.theme = "dark"`.

use gloo_console as console;
use gloo_events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{MediaQueryList, MediaQueryListEvent, Storage};
use yew::Callback;

use super::resolver::{PreferenceStore, StorageError, SystemPreference, ThemeTarget};
use super::themes::Themes;

pub struct ThemeSettings {
    pub storage_key: &'static str,
    pub attribute: &'static str,
    pub media_query: &'static str,
}

impl ThemeSettings {
    pub const DEFAULT: Self = Self {
        storage_key: "theme",
        attribute: "data-theme",
        media_query: "(prefers-color-scheme: dark)",
    };
}

pub struct LocalPreference {
    key: &'static str,
}

impl LocalPreference {
    pub fn new(settings: &ThemeSettings) -> Self {
        Self {
            key: settings.storage_key,
        }
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            // throws when storage is disabled for the origin
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for LocalPreference {
    fn load(&self) -> Result<Option<Themes>, StorageError> {
        let text = self
            .storage()?
            .get_item(self.key)
            .map_err(|e| StorageError::Read(describe(&e)))?;

        match text {
            None => Ok(None),
            Some(text) => Themes::try_from(text.as_str())
                .map(Some)
                .map_err(|_| StorageError::Invalid(text)),
        }
    }

    fn save(&self, theme: Themes) -> Result<(), StorageError> {
        self.storage()?
            .set_item(self.key, theme.as_str())
            .map_err(|e| StorageError::Write(describe(&e)))
    }
}

pub struct MediaQueryPreference {
    query: Option<MediaQueryList>,
}

impl MediaQueryPreference {
    pub fn new(settings: &ThemeSettings) -> Self {
        let query = web_sys::window().and_then(|window| {
            window
                .match_media(settings.media_query)
                .ok()
                .flatten()
        });

        if query.is_none() {
            console::log!("matchMedia unavailable, assuming light preference");
        }

        Self { query }
    }
}

impl SystemPreference for MediaQueryPreference {
    type Subscription = Option<EventListener>;

    fn prefers_dark(&self) -> bool {
        self.query.as_ref().map_or(false, MediaQueryList::matches)
    }

    fn subscribe(&self, on_change: Callback<bool>) -> Self::Subscription {
        let target = self.query.clone()?;
        let query = target.clone();

        Some(EventListener::new(&target, "change", move |event| {
            let prefers_dark = event
                .dyn_ref::<MediaQueryListEvent>()
                .map_or_else(|| query.matches(), MediaQueryListEvent::matches);
            on_change.emit(prefers_dark);
        }))
    }
}

pub struct DocumentAttribute {
    attribute: &'static str,
}

impl DocumentAttribute {
    pub fn new(settings: &ThemeSettings) -> Self {
        Self {
            attribute: settings.attribute,
        }
    }
}

impl ThemeTarget for DocumentAttribute {
    fn apply(&self, theme: Themes) {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());

        let Some(root) = root else {
            console::error!("no document element to apply the theme to");
            return;
        };

        if let Err(e) = root.set_attribute(self.attribute, theme.as_str()) {
            console::error!(format!("failed to apply theme: {}", describe(&e)));
        }
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
