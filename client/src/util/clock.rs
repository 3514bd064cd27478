//! Record-id clock for the browser.

use content::Clock;

/// `Date.now()` in the browser; the host clock elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_millis(&self) -> i64 {
        #[cfg(feature = "hydrate")]
        {
            #[allow(clippy::cast_possible_truncation)]
            {
                js_sys::Date::now() as i64
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            content::SystemClock.now_millis()
        }
    }
}
