//! Browser glue for the `hydrate` build.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate every `web-sys` call so the controllers, tables,
//! and bootstrap logic stay testable natively.

pub mod boot;
pub mod dom;
pub mod scroll;
pub mod storage;

use wasm_bindgen::JsValue;

/// Render a thrown JS value for logs.
pub(crate) fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Log a failed DOM call and carry on.
pub(crate) fn log_js_err<T>(context: &str, result: Result<T, JsValue>) {
    if let Err(e) = result {
        log::debug!("{context} failed: {}", describe(&e));
    }
}
