//! Clock access for message ids and the footer year.

/// Milliseconds since the epoch, per the browser clock. Zero off-browser.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Current calendar year for the footer copyright line.
pub fn current_year() -> i32 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_wrap)]
        {
            js_sys::Date::new_0().get_full_year() as i32
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        2025
    }
}
