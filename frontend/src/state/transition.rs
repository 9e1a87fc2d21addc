//! Staged content swap for the featured team member.
//!
//! `Idle -> FadingOut -> Swapping -> FadingIn -> Idle`. The displayed index
//! only changes on entering `Swapping`, and both the portrait and the text are
//! hidden from `FadingOut` until `FadingIn`, so an old image never sits next
//! to new text. Each timer carries the epoch it was scheduled for; a restarted
//! transition bumps the epoch and late timers are ignored.

use crate::config::{FADE_IN_MS, FADE_OUT_MS, SWAP_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FadingOut,
    Swapping,
    FadingIn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    pub fade_out_ms: u32,
    pub swap_ms: u32,
    pub fade_in_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            fade_out_ms: FADE_OUT_MS,
            swap_ms: SWAP_MS,
            fade_in_ms: FADE_IN_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeaturedStyle {
    pub details_opacity: f32,
    pub details_shift_px: i32,
    pub image_opacity: f32,
    /// Duration of the opacity change into this style. Fading out must
    /// finish within the fade-out phase so the swap happens on cleared
    /// content.
    pub fade_ms: u32,
}

impl FeaturedStyle {
    pub fn details_css(&self) -> String {
        format!(
            "opacity: {}; transform: translateX({}px); transition: opacity {}ms ease, transform {}ms ease;",
            self.details_opacity, self.details_shift_px, self.fade_ms, self.fade_ms
        )
    }

    pub fn image_css(&self) -> String {
        format!("opacity: {}; transition: opacity {}ms ease;", self.image_opacity, self.fade_ms)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContentTransition {
    phase: Phase,
    displayed: usize,
    target: usize,
    epoch: u64,
    timings: Timings,
}

impl ContentTransition {
    pub fn new(displayed: usize) -> Self {
        Self::with_timings(displayed, Timings::default())
    }

    pub fn with_timings(displayed: usize, timings: Timings) -> Self {
        Self {
            phase: Phase::Idle,
            displayed,
            target: displayed,
            epoch: 0,
            timings,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn displayed(&self) -> usize {
        self.displayed
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Requests that `index` be shown. Returns `false` when nothing changed,
    /// which is the case for re-selecting what is already shown or already
    /// on its way in.
    pub fn begin(&mut self, index: usize) -> bool {
        match self.phase {
            Phase::Idle | Phase::FadingIn if index == self.displayed => {
                // FadingIn for the same member just keeps going.
                false
            }
            Phase::FadingOut => {
                // Content is still the old one; retarget the pending swap.
                let changed = self.target != index;
                self.target = index;
                changed
            }
            Phase::Swapping if index == self.displayed => false,
            _ => {
                self.target = index;
                self.phase = Phase::FadingOut;
                self.epoch += 1;
                true
            }
        }
    }

    /// Moves to the next phase if `epoch` is current. Returns `false` for
    /// stale timers and when already idle.
    pub fn advance(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.phase = match self.phase {
            Phase::Idle => return false,
            Phase::FadingOut => {
                self.displayed = self.target;
                Phase::Swapping
            }
            Phase::Swapping => Phase::FadingIn,
            Phase::FadingIn => Phase::Idle,
        };
        true
    }

    /// How long the current phase lasts before `advance` should run.
    pub fn delay_ms(&self) -> Option<u32> {
        match self.phase {
            Phase::Idle => None,
            Phase::FadingOut => Some(self.timings.fade_out_ms),
            Phase::Swapping => Some(self.timings.swap_ms),
            Phase::FadingIn => Some(self.timings.fade_in_ms),
        }
    }

    pub fn is_content_hidden(&self) -> bool {
        matches!(self.phase, Phase::FadingOut | Phase::Swapping)
    }

    pub fn style(&self) -> FeaturedStyle {
        if self.is_content_hidden() {
            FeaturedStyle {
                details_opacity: 0.0,
                details_shift_px: -8,
                image_opacity: 0.0,
                fade_ms: self.timings.fade_out_ms,
            }
        } else {
            FeaturedStyle {
                details_opacity: 1.0,
                details_shift_px: 0,
                image_opacity: 1.0,
                fade_ms: self.timings.fade_in_ms,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_idle(transition: &mut ContentTransition) -> Vec<(Phase, usize, bool)> {
        let mut seen = Vec::new();
        while transition.delay_ms().is_some() {
            transition.advance(transition.epoch());
            seen.push((transition.phase(), transition.displayed(), transition.is_content_hidden()));
        }
        seen
    }

    #[test]
    fn phases_run_in_order_and_swap_while_hidden() {
        let mut transition = ContentTransition::new(0);
        assert!(transition.begin(2));
        assert_eq!(transition.phase(), Phase::FadingOut);
        assert!(transition.is_content_hidden());
        assert_eq!(transition.displayed(), 0);

        let seen = run_to_idle(&mut transition);
        assert_eq!(
            seen,
            vec![
                (Phase::Swapping, 2, true),
                (Phase::FadingIn, 2, false),
                (Phase::Idle, 2, false),
            ]
        );
    }

    #[test]
    fn displayed_content_never_changes_while_visible() {
        let mut transition = ContentTransition::new(0);
        transition.begin(1);
        let mut last = transition.displayed();
        while transition.delay_ms().is_some() {
            let hidden_before = transition.is_content_hidden();
            transition.advance(transition.epoch());
            if transition.displayed() != last {
                assert!(hidden_before && transition.is_content_hidden());
                last = transition.displayed();
            }
        }
    }

    #[test]
    fn selecting_the_same_member_twice_matches_once() {
        let mut once = ContentTransition::new(0);
        once.begin(1);
        run_to_idle(&mut once);

        let mut twice = ContentTransition::new(0);
        twice.begin(1);
        assert!(!twice.begin(1));
        run_to_idle(&mut twice);
        assert!(!twice.begin(1));

        assert_eq!(once.displayed(), twice.displayed());
        assert_eq!(once.style(), twice.style());
        assert_eq!(twice.phase(), Phase::Idle);
    }

    #[test]
    fn stale_timer_is_ignored_after_restart() {
        let mut transition = ContentTransition::new(0);
        transition.begin(1);
        let first_epoch = transition.epoch();
        transition.advance(first_epoch);
        assert_eq!(transition.phase(), Phase::Swapping);

        assert!(transition.begin(2));
        assert_eq!(transition.phase(), Phase::FadingOut);
        assert!(!transition.advance(first_epoch));
        assert_eq!(transition.phase(), Phase::FadingOut);

        run_to_idle(&mut transition);
        assert_eq!(transition.displayed(), 2);
    }

    #[test]
    fn retarget_during_fade_out_keeps_the_pending_timer() {
        let mut transition = ContentTransition::new(0);
        transition.begin(1);
        let epoch = transition.epoch();
        assert!(transition.begin(2));
        assert_eq!(transition.epoch(), epoch);
        run_to_idle(&mut transition);
        assert_eq!(transition.displayed(), 2);
    }

    #[test]
    fn idle_has_no_pending_delay() {
        let transition = ContentTransition::new(0);
        assert_eq!(transition.delay_ms(), None);
        assert_eq!(transition.style().image_opacity, 1.0);
    }

    #[test]
    fn delays_follow_the_configured_timings() {
        let timings = Timings { fade_out_ms: 10, swap_ms: 20, fade_in_ms: 30 };
        let mut transition = ContentTransition::with_timings(0, timings);
        transition.begin(1);
        let mut delays = Vec::new();
        while let Some(delay) = transition.delay_ms() {
            delays.push(delay);
            transition.advance(transition.epoch());
        }
        assert_eq!(delays, vec![10, 20, 30]);
    }

    #[test]
    fn fade_out_finishes_before_the_swap() {
        let mut transition = ContentTransition::new(0);
        transition.begin(1);
        let style = transition.style();
        let fade_out = transition.delay_ms().unwrap();
        assert!(style.fade_ms <= fade_out);
        let window = format!("opacity {}ms", style.fade_ms);
        assert!(style.details_css().contains(&window));
        assert!(style.image_css().contains(&window));

        // Still hidden with the same fade while the content is swapped.
        transition.advance(transition.epoch());
        assert_eq!(transition.phase(), Phase::Swapping);
        assert_eq!(transition.style().fade_ms, style.fade_ms);
    }

    #[test]
    fn fade_in_uses_its_own_duration() {
        let timings = Timings { fade_out_ms: 40, swap_ms: 50, fade_in_ms: 90 };
        let mut transition = ContentTransition::with_timings(0, timings);
        transition.begin(1);
        assert_eq!(transition.style().fade_ms, 40);
        transition.advance(transition.epoch());
        transition.advance(transition.epoch());
        assert_eq!(transition.phase(), Phase::FadingIn);
        assert!(transition.style().details_css().contains("opacity 90ms ease"));
    }
}
