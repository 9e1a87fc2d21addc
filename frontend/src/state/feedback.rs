//! Hover and press feedback for cards and call-to-action buttons.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
    Practice,
    Testimonial,
    Thumbnail,
    Cta,
}

impl CardKind {
    fn hover_transform(self) -> Option<&'static str> {
        match self {
            CardKind::Practice => Some("translateY(-5px)"),
            CardKind::Testimonial => Some("translateY(-3px)"),
            CardKind::Thumbnail => Some("scale(1.05)"),
            CardKind::Cta => None,
        }
    }

    fn press_transform(self) -> Option<&'static str> {
        match self {
            CardKind::Practice => Some("scale(0.98)"),
            CardKind::Cta => Some("scale(0.95)"),
            CardKind::Testimonial | CardKind::Thumbnail => None,
        }
    }

    fn rest_transform(self) -> Option<&'static str> {
        match self {
            CardKind::Practice | CardKind::Testimonial => Some("translateY(0)"),
            CardKind::Thumbnail => Some("scale(1)"),
            CardKind::Cta => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardMotion {
    kind: CardKind,
    hovered: bool,
    pressed: bool,
}

impl CardMotion {
    pub fn new(kind: CardKind) -> Self {
        Self { kind, hovered: false, pressed: false }
    }

    pub fn hover(self, hovered: bool) -> Self {
        Self { hovered, ..self }
    }

    /// Returns the pressed state, or `None` for kinds with no press effect so
    /// the caller doesn't schedule a release.
    pub fn press(self) -> Option<Self> {
        self.kind.press_transform().map(|_| Self { pressed: true, ..self })
    }

    pub fn release(self) -> Self {
        Self { pressed: false, ..self }
    }

    /// Pressing wins over hovering; the release clears back to no inline
    /// transform so the stylesheet takes over again.
    pub fn transform(&self) -> Option<&'static str> {
        if self.pressed {
            return self.kind.press_transform();
        }
        if self.hovered {
            return self.kind.hover_transform();
        }
        self.kind.rest_transform()
    }

    pub fn css(&self) -> String {
        self.transform()
            .map(|transform| format!("transform: {};", transform))
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaAction {
    ScrollToContact,
    Call,
    None,
}

impl CtaAction {
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("consultation") {
            CtaAction::ScrollToContact
        } else if label.contains("call") {
            CtaAction::Call
        } else {
            CtaAction::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn practice_card_lifts_and_presses() {
        let card = CardMotion::new(CardKind::Practice);
        assert_eq!(card.transform(), Some("translateY(0)"));
        let hovered = card.hover(true);
        assert_eq!(hovered.transform(), Some("translateY(-5px)"));
        let pressed = hovered.press().unwrap();
        assert_eq!(pressed.css(), "transform: scale(0.98);");
        assert_eq!(pressed.release().transform(), Some("translateY(-5px)"));
    }

    #[test]
    fn testimonials_have_no_press_effect() {
        let card = CardMotion::new(CardKind::Testimonial).hover(true);
        assert_eq!(card.transform(), Some("translateY(-3px)"));
        assert_eq!(card.press(), None);
    }

    #[test]
    fn cta_press_clears_back_to_stylesheet() {
        let button = CardMotion::new(CardKind::Cta);
        assert_eq!(button.css(), "");
        assert_eq!(button.press().map(|b| b.css()), Some("transform: scale(0.95);".to_string()));
    }

    #[test]
    fn cta_labels_map_to_actions() {
        assert_eq!(CtaAction::from_label("Book a Consultation"), CtaAction::ScrollToContact);
        assert_eq!(CtaAction::from_label("CALL US NOW"), CtaAction::Call);
        assert_eq!(CtaAction::from_label("Read more"), CtaAction::None);
    }
}
