//! Scroll reveal and smooth in-page anchor scrolling.
//!
//! Both are independent of the preference controllers. Their closures are
//! leaked and live as long as the page.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::dom::query_all;
use super::{describe, log_js_err};
use crate::config::ScrollRevealConfig;

/// Add `visible_class` to each matching element the first time it scrolls
/// into view, then stop watching it. Returns the number of elements watched.
pub fn init_scroll_reveal(document: &Document, config: &ScrollRevealConfig) -> usize {
    let elements = query_all(document, &config.selector);
    if elements.is_empty() {
        return 0;
    }

    let visible_class = config.visible_class.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                log_js_err("classList.add", target.class_list().add_1(&visible_class));
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from(config.threshold));
    options.set_root_margin(&config.root_margin);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("scroll reveal disabled: {}", describe(&e));
            return 0;
        }
    };
    for element in &elements {
        observer.observe(element);
    }
    callback.forget();
    elements.len()
}

/// Smoothly scroll to same-page anchors instead of jumping. Links whose
/// target does not exist keep their default behaviour.
pub fn init_smooth_scroll(document: &Document, selector: &str) -> usize {
    let links = query_all(document, selector);
    for link in &links {
        let document = document.clone();
        let anchor = link.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(target) = anchor_target(&document, &anchor) else {
                return;
            };
            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
        log_js_err(
            "addEventListener(click)",
            link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()),
        );
        on_click.forget();
    }
    links.len()
}

fn anchor_target(document: &Document, anchor: &Element) -> Option<Element> {
    let href = anchor.get_attribute("href")?;
    // A bare "#" or malformed fragment is not a valid selector.
    match document.query_selector(&href) {
        Ok(target) => target,
        Err(_) => None,
    }
}
