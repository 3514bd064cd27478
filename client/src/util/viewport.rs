//! Viewport width lookups for layout decisions made in Rust.

/// Width assumed before the browser reports one (and during SSR).
pub const FALLBACK_WIDTH_PX: f64 = 1024.0;

/// Current `window.innerWidth` in CSS pixels.
pub fn width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(FALLBACK_WIDTH_PX)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_WIDTH_PX
    }
}
