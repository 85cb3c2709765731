//! Viewport helpers for the compact (smartphone) layout.

use leptos::ev;
use leptos::prelude::*;

/// Whether a viewport `width` px wide gets the compact layout.
pub fn is_smartphone(width: f64, breakpoint_px: u32) -> bool {
    width < f64::from(breakpoint_px)
}

/// Current `window.innerWidth`, or 0 when there is no window.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Signal tracking the viewport width across resizes.
pub fn use_viewport_width() -> ReadSignal<f64> {
    let (width, set_width) = signal(viewport_width());
    let handle = window_event_listener(ev::resize, move |_| set_width.set(viewport_width()));
    on_cleanup(move || handle.remove());
    width
}
