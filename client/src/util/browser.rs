//! Browser bindings for the theme controller.
//!
//! Wraps `localStorage`, `matchMedia`, and the live document behind the
//! seams in `util::theme_env`. Every failure (storage disabled, no window,
//! a throwing class list) is logged and treated as "absent".

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, DocumentReadyState, Storage, Window};

use crate::util::dark_mode::{TOGGLE_BUTTON_ID, ThemeController};
use crate::util::theme_env::{ColorSchemeQuery, HIDDEN_CLASS, PreferenceStore, ThemeDocument};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Controller wired to the running page.
pub type BrowserThemeController = ThemeController<LocalStorage, MediaQuery, BrowserDocument>;

/// Build a controller for the current window.
pub fn controller() -> BrowserThemeController {
    let window = web_sys::window();
    ThemeController::new(
        LocalStorage::new(window.as_ref()),
        MediaQuery {
            window: window.clone(),
        },
        BrowserDocument {
            document: window.and_then(|w| w.document()),
        },
    )
}

/// `window.localStorage`, if the browser grants it.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    fn new(window: Option<&Window>) -> Self {
        let storage = match window.map(Window::local_storage) {
            Some(Ok(storage)) => storage,
            Some(Err(err)) => {
                log::debug!("dark mode: localStorage unavailable: {err:?}");
                None
            }
            None => None,
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("dark mode: failed to persist {key}: {err:?}");
            }
        }
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
pub struct MediaQuery {
    window: Option<Window>,
}

impl ColorSchemeQuery for MediaQuery {
    fn prefers_dark(&self) -> bool {
        self.window
            .as_ref()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
}

/// The live `document`.
pub struct BrowserDocument {
    document: Option<Document>,
}

impl ThemeDocument for BrowserDocument {
    fn root_has_class(&self, class: &str) -> bool {
        self.document
            .as_ref()
            .and_then(Document::document_element)
            .map_or(false, |el| el.class_list().contains(class))
    }

    fn set_root_class(&self, class: &str, present: bool) {
        let Some(el) = self.document.as_ref().and_then(Document::document_element) else {
            return;
        };
        let class_list = el.class_list();
        let result = if present {
            class_list.add_1(class)
        } else {
            class_list.remove_1(class)
        };
        if let Err(err) = result {
            log::warn!("dark mode: failed to update root class {class}: {err:?}");
        }
    }

    fn has_element(&self, id: &str) -> bool {
        self.document
            .as_ref()
            .is_some_and(|doc| doc.get_element_by_id(id).is_some())
    }

    fn set_element_hidden(&self, id: &str, hidden: bool) {
        let Some(el) = self.document.as_ref().and_then(|doc| doc.get_element_by_id(id)) else {
            return;
        };
        if let Err(err) = el.class_list().toggle_with_force(HIDDEN_CLASS, hidden) {
            log::warn!("dark mode: failed to toggle icon {id}: {err:?}");
        }
    }
}

/// Standalone wiring for pages not rendered by Leptos.
///
/// Applies the initial mode immediately, then attaches the click handler to
/// `#dark-mode-toggle` once the DOM is ready.
pub fn attach() {
    let controller = Rc::new(controller());
    controller.initialize();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == DocumentReadyState::Loading {
        let on_ready = Closure::<dyn FnMut()>::new(move || wire_click(&controller));
        if let Err(err) = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        {
            log::warn!("dark mode: failed to listen for DOMContentLoaded: {err:?}");
        }
        // Listener lives for the page lifetime.
        on_ready.forget();
    } else {
        wire_click(&controller);
    }
}

fn wire_click(controller: &Rc<BrowserThemeController>) {
    if !controller.wire_button() {
        return;
    }
    let Some(button) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(TOGGLE_BUTTON_ID))
    else {
        return;
    };

    let ctrl = Rc::clone(controller);
    let on_click = Closure::<dyn FnMut()>::new(move || {
        ctrl.toggle();
    });
    if let Err(err) = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        log::warn!("dark mode: failed to attach toggle handler: {err:?}");
    }
    on_click.forget();
}
