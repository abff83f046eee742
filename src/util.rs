// Console logging helpers shared by the widget and the demo app.

#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clog(msg: &str) {
    // No console outside the browser
    let _ = msg;
}

#[cfg(target_arch = "wasm32")]
pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn cwarn(msg: &str) {
    let _ = msg;
}

/// Formats a scale factor the way the demo shows it (`x1.00`).
pub fn format_scale(scale: f64) -> String {
    format!("x{:.2}", scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_formatted_with_two_decimals() {
        assert_eq!(format_scale(1.0), "x1.00");
        assert_eq!(format_scale(2.346), "x2.35");
    }
}
