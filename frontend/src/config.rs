use log::Level;

/// Scroll offset past which the header switches to its "scrolled" look and
/// the navbar is allowed to hide.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Scroll movement smaller than this is treated as jitter.
pub const NAV_HIDE_HYSTERESIS: f64 = 50.0;

pub const CONSENT_STORAGE_KEY: &str = "cookieChoice";
pub const CONSENT_BANNER_DELAY_MS: u32 = 1000;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

pub const PRESS_FEEDBACK_MS: u32 = 150;

// Featured member swap: dim, write new content while hidden, then show again.
pub const FADE_OUT_MS: u32 = 100;
pub const SWAP_MS: u32 = 150;
pub const FADE_IN_MS: u32 = 200;

pub const CONTACT_PHONE: &str = "+354 517 8080";

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub header_threshold: f64,
    pub hide_hysteresis: f64,
    pub consent_key: &'static str,
    pub consent_delay_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,
    pub press_feedback_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_threshold: HEADER_SCROLL_THRESHOLD,
            hide_hysteresis: NAV_HIDE_HYSTERESIS,
            consent_key: CONSENT_STORAGE_KEY,
            consent_delay_ms: CONSENT_BANNER_DELAY_MS,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN,
            press_feedback_ms: PRESS_FEEDBACK_MS,
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose widget tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
