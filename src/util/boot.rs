//! WASM entry point: wires the page once the document is ready.
//!
//! The host page may embed a JSON override of [`PageConfig`] in
//! `<script type="application/json" id="futaba-config">`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

use super::dom::{WebSurface, query_all};
use super::log_js_err;
use super::scroll::{init_scroll_reveal, init_smooth_scroll};
use super::storage::BrowserStore;
use crate::app::Page;
use crate::config::PageConfig;
use crate::theme::Direction;

const CONFIG_ELEMENT_ID: &str = "futaba-config";

/// Live page state shared by every click handler.
struct Runtime {
    page: Page<BrowserStore>,
    surface: WebSurface,
}

impl Runtime {
    fn boot(&mut self) {
        self.page.boot(&mut self.surface);
    }

    fn cascade(&mut self, direction: Direction) {
        let theme = match direction {
            Direction::Previous => self.page.on_cascade_prev(&mut self.surface),
            Direction::Next => self.page.on_cascade_next(&mut self.surface),
        };
        log::debug!("cascade {direction:?} -> {}", theme.name());
    }

    fn switch_locale(&mut self, target: Option<&str>) {
        self.page.on_locale_button(&mut self.surface, target);
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::debug!("console logging ready");
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document, page enhancements disabled");
        return;
    };

    if document.ready_state() == "loading" {
        let ready_doc = document.clone();
        let on_ready = Closure::<dyn FnMut(Event)>::once(move |_: Event| init(&ready_doc));
        log_js_err(
            "addEventListener(DOMContentLoaded)",
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref()),
        );
        on_ready.forget();
    } else {
        init(&document);
    }
}

fn read_config(document: &Document) -> PageConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return PageConfig::default();
    };
    PageConfig::from_json(&raw).unwrap_or_else(|e| {
        log::warn!("{e}; using defaults");
        PageConfig::default()
    })
}

fn init(document: &Document) {
    let config = read_config(document);
    let Some(surface) = WebSurface::new(document.clone(), &config) else {
        log::warn!("document has no root element");
        return;
    };
    let runtime = Rc::new(RefCell::new(Runtime {
        page: Page::new(BrowserStore, &config),
        surface,
    }));

    bind_cascade(document, &config.prev_control_id, &runtime, Direction::Previous);
    bind_cascade(document, &config.next_control_id, &runtime, Direction::Next);
    bind_locale_switches(document, &config, &runtime);

    runtime.borrow_mut().boot();

    let revealed = init_scroll_reveal(document, &config.scroll_reveal);
    let anchors = init_smooth_scroll(document, &config.smooth_scroll_selector);
    log::debug!("scroll reveal on {revealed} elements, smooth scroll on {anchors} anchors");
}

fn bind_cascade(document: &Document, id: &str, runtime: &Rc<RefCell<Runtime>>, direction: Direction) {
    let Some(button) = document.get_element_by_id(id) else {
        return;
    };
    let runtime = Rc::clone(runtime);
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        runtime.borrow_mut().cascade(direction);
    });
    log_js_err(
        "addEventListener(click)",
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()),
    );
    on_click.forget();
}

fn bind_locale_switches(document: &Document, config: &PageConfig, runtime: &Rc<RefCell<Runtime>>) {
    for button in query_all(document, &config.locale_switch_selector) {
        let runtime = Rc::clone(runtime);
        let attr = config.locale_switch_attr.clone();
        let target_button = button.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            let target = target_button.get_attribute(&attr);
            runtime.borrow_mut().switch_locale(target.as_deref());
        });
        log_js_err(
            "addEventListener(click)",
            button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()),
        );
        on_click.forget();
    }
}
