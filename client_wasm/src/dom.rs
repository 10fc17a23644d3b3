//! Page access: parameter inputs and clock

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Value of the `<input>` matching `selector`, or empty text when missing
pub fn read_input(selector: &str) -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Page clock in milliseconds
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
