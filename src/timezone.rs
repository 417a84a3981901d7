//! Host timezone lookup.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Resolved IANA timezone of the browser, e.g. `Europe/Paris`.
///
/// Read fresh on every call; nothing is cached.
#[cfg(target_arch = "wasm32")]
pub fn local_timezone() -> String {
    let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
    js_sys::Reflect::get(&format.resolved_options(), &JsValue::from_str("timeZone"))
        .ok()
        .and_then(|tz| tz.as_string())
        .unwrap_or_else(offset_label)
}

/// Outside the browser there is no IANA name to ask for, so the current UTC
/// offset stands in.
#[cfg(not(target_arch = "wasm32"))]
pub fn local_timezone() -> String {
    offset_label()
}

fn offset_label() -> String {
    chrono::Local::now().format("UTC%:z").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_timezone_is_utc_offset() {
        let tz = local_timezone();
        assert!(tz.starts_with("UTC"));
        assert_eq!(tz.len(), "UTC+00:00".len());
    }
}
