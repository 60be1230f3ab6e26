//! Conversion of core errors into JavaScript exceptions.

use std::fmt::Display;

use wasm_bindgen::prelude::*;

/// Turn any core error into a JS `Error`, echoing it to the console.
///
/// Only callable on wasm32: building a `JsValue` on a native target panics,
/// so native tests stay on the `Ok` paths.
pub(crate) fn to_js_error(err: impl Display) -> JsValue {
    let message = err.to_string();
    web_sys::console::error_1(&JsValue::from_str(&message));
    js_sys::Error::new(&message).into()
}
