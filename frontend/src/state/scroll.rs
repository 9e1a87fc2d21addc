use crate::config::SiteConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollUpdate {
    /// Past the header threshold; re-evaluated on every event.
    pub scrolled: bool,
    pub nav_hidden: bool,
}

/// Tracks the header look and the hide-on-scroll-down navbar.
///
/// Only one prior sample is kept. It moves when a scroll covers more than
/// the hysteresis band, so slow jitter below the band never flips the navbar
/// no matter how long it goes on.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollWatcher {
    threshold: f64,
    hysteresis: f64,
    last_offset: f64,
    nav_hidden: bool,
}

impl ScrollWatcher {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            threshold: config.header_threshold,
            hysteresis: config.hide_hysteresis,
            last_offset: 0.0,
            nav_hidden: false,
        }
    }

    #[cfg(test)]
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn on_scroll(&mut self, offset: f64) -> ScrollUpdate {
        let delta = offset - self.last_offset;
        if delta.abs() > self.hysteresis {
            self.nav_hidden = delta > 0.0 && offset > self.threshold;
            self.last_offset = offset;
        }
        ScrollUpdate {
            scrolled: offset > self.threshold,
            nav_hidden: self.nav_hidden,
        }
    }
}
