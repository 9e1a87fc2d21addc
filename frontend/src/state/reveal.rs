use crate::config::REVEAL_TRANSITION;

/// One-shot fade-in for an element entering the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    #[cfg(test)]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one observer entry. Returns `true` only for the entry that
    /// reveals; leaving the viewport afterwards is ignored.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if !is_intersecting || self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn css(&self) -> String {
        let (opacity, transform) = if self.revealed {
            ("1", "translateY(0)")
        } else {
            ("0", "translateY(20px)")
        };
        format!("opacity: {}; transform: {}; transition: {};", opacity, transform, REVEAL_TRANSITION)
    }
}

/// An image whose real source is only assigned once it scrolls into view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LazySource {
    deferred: String,
    loaded: bool,
}

impl LazySource {
    pub fn new(deferred: impl Into<String>) -> Self {
        Self { deferred: deferred.into(), loaded: false }
    }

    /// Returns the source to load on the first intersecting entry; the caller
    /// stops observing after that.
    pub fn observe(&mut self, is_intersecting: bool) -> Option<&str> {
        if !is_intersecting || self.loaded {
            return None;
        }
        self.loaded = true;
        Some(&self.deferred)
    }

    pub fn src(&self) -> Option<&str> {
        self.loaded.then_some(self.deferred.as_str())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_fires_once_and_never_reverts() {
        let mut reveal = Reveal::default();
        assert!(reveal.css().contains("opacity: 0"));
        assert!(!reveal.observe(false));
        assert!(reveal.observe(true));
        assert!(!reveal.observe(true));
        assert!(!reveal.observe(false));
        assert!(reveal.is_revealed());
        assert!(reveal.css().starts_with("opacity: 1; transform: translateY(0)"));
    }

    #[test]
    fn lazy_source_loads_on_first_intersection() {
        let mut image = LazySource::new("photos/office.jpg");
        assert_eq!(image.src(), None);
        assert_eq!(image.observe(false), None);
        assert_eq!(image.observe(true), Some("photos/office.jpg"));
        assert_eq!(image.observe(true), None);
        assert!(image.is_loaded());
        assert_eq!(image.src(), Some("photos/office.jpg"));
    }
}
