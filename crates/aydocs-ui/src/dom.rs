//! Browser bindings: the DOM scroll host and small `window` helpers.
//!
//! Everything here degrades to a neutral value when there is no window
//! (tests, pre-render) instead of panicking.

use aydocs_core::{NavError, ScrollBehavior, ScrollHost};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, ScrollIntoViewOptions};

/// [`ScrollHost`] over the live document; anchors are elements by `id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomScrollHost;

fn anchor(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

impl ScrollHost for DomScrollHost {
    fn scroll_to_anchor(&mut self, id: &str, behavior: ScrollBehavior) -> Result<(), NavError> {
        let element = anchor(id).ok_or_else(|| NavError::MissingAnchor(id.to_string()))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    fn anchor_top(&self, id: &str) -> Option<f64> {
        anchor(id).map(|element| element.get_bounding_client_rect().top())
    }

    fn at_bottom(&self) -> bool {
        // Sub-pixel rounding keeps the sum a fraction short on some zoom levels.
        document_metrics()
            .is_some_and(|m| m.scrolled + m.viewport >= m.document_height - 1.0)
    }

    fn scrollable(&self) -> bool {
        document_metrics().is_some_and(|m| m.document_height > m.viewport + 1.0)
    }
}

/// Vertical scroll state of the document, in CSS pixels.
struct DocumentMetrics {
    scrolled: f64,
    viewport: f64,
    document_height: f64,
}

fn document_metrics() -> Option<DocumentMetrics> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;

    Some(DocumentMetrics {
        scrolled: window.scroll_y().unwrap_or_default(),
        viewport: window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or_default(),
        document_height: f64::from(root.scroll_height()),
    })
}

/// Current viewport width in CSS pixels.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or_default()
}

/// Raw `location.hash`, including the leading `#`.
pub fn location_hash() -> Option<String> {
    web_sys::window()?.location().hash().ok()
}

/// Monotonic milliseconds since page load.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default()
}

/// Write `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let clipboard = window.navigator().clipboard();
    // `navigator.clipboard` is undefined outside secure contexts.
    if clipboard.is_undefined() {
        return Err("clipboard unavailable".to_string());
    }

    let promise: js_sys::Promise = clipboard.write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(describe_js_error)
}

fn describe_js_error(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(&err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| "clipboard write rejected".to_string())
}
