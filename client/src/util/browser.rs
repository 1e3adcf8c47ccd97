//! Thin wrappers over browser dialogs and the clipboard.
//!
//! Outside the browser `confirm` answers `false` and `copy_text` reports
//! nothing copied, so destructive actions never fire during SSR.

/// Native confirmation dialog.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Copy `text` to the clipboard. Returns whether a clipboard was available.
pub fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(clipboard) = web_sys::window().and_then(|w| w.navigator().clipboard()) {
            let _ = clipboard.write_text(text);
            return true;
        }
        false
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

/// Whether a click landed on (or inside) an element matching `selector`.
#[cfg(feature = "hydrate")]
pub fn click_hits(ev: &leptos::ev::MouseEvent, selector: &str) -> bool {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}
