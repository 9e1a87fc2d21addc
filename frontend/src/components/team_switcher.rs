use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::content::TEAM_MEMBERS;
use crate::state::feedback::{CardKind, CardMotion};
use crate::state::selection::SelectionGroup;
use crate::state::transition::ContentTransition;

pub enum TransitionAction {
    Begin(usize),
    Advance(u64),
}

impl Reducible for ContentTransition {
    type Action = TransitionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            TransitionAction::Begin(index) => next.begin(index),
            TransitionAction::Advance(epoch) => next.advance(epoch),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Featured team member with thumbnails underneath. Picking a thumbnail fades
/// the current member out, swaps the content while hidden, and fades back in.
#[function_component(TeamSwitcher)]
pub fn team_switcher() -> Html {
    let thumbnails = use_state_eq(|| SelectionGroup::with_active(0..TEAM_MEMBERS.len(), 0));
    let transition = use_reducer(|| ContentTransition::new(0));
    let hovered = use_state_eq(|| None::<usize>);

    // One timer per phase; dropping it on phase change or unmount cancels it.
    {
        let deps = (transition.phase(), transition.epoch());
        let transition = transition.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = transition.delay_ms().map(|delay| {
                    let epoch = transition.epoch();
                    let dispatcher = transition.dispatcher();
                    Timeout::new(delay, move || dispatcher.dispatch(TransitionAction::Advance(epoch)))
                });
                move || drop(timeout)
            },
            deps,
        );
    }

    let member = match TEAM_MEMBERS.get(transition.displayed()) {
        Some(member) => member,
        None => {
            log::debug!("No team member at {}", transition.displayed());
            return html! {};
        }
    };
    let style = transition.style();

    html! {
        <section class="featured-team">
            <div class="featured-member">
                <img class="featured-img" src={member.image} alt={member.name} style={style.image_css()} />
                <div class="featured-details" style={style.details_css()}>
                    <h3 class="featured-name">{member.name}</h3>
                    <p class="featured-title">{member.title}</p>
                    <p class="featured-bio">{member.bio}</p>
                </div>
            </div>
            <div class="team-thumbnails">
                { for TEAM_MEMBERS.iter().enumerate().map(|(index, thumb)| {
                    let active = thumbnails.is_active(index);
                    let motion = CardMotion::new(CardKind::Thumbnail).hover(active || *hovered == Some(index));
                    let border = if active { "2px solid var(--primary-color)" } else { "2px solid transparent" };
                    let onclick = {
                        let thumbnails = thumbnails.clone();
                        let transition = transition.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = (*thumbnails).clone();
                            if let Some(activated) = next.select(index).activated() {
                                transition.dispatch(TransitionAction::Begin(activated));
                            }
                            thumbnails.set(next);
                        })
                    };
                    let onmouseenter = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                    };
                    let onmouseleave = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(None))
                    };
                    html! {
                        <img
                            class={classes!("team-thumbnail", active.then(|| "active"))}
                            src={thumb.image}
                            alt={thumb.name}
                            style={format!("border: {}; cursor: pointer; {}", border, motion.css())}
                            onclick={onclick}
                            onmouseenter={onmouseenter}
                            onmouseleave={onmouseleave}
                        />
                    }
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::transition::Phase;

    fn timer_key(transition: &ContentTransition) -> (Phase, u64) {
        (transition.phase(), transition.epoch())
    }

    #[test]
    fn every_step_changes_the_timer_key() {
        let mut current = Rc::new(ContentTransition::new(0));
        let mut keys = vec![timer_key(&current)];
        current = current.reduce(TransitionAction::Begin(1));
        keys.push(timer_key(&current));
        while current.delay_ms().is_some() {
            let epoch = current.epoch();
            current = current.reduce(TransitionAction::Advance(epoch));
            keys.push(timer_key(&current));
        }
        for pair in keys.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
        assert_eq!(current.displayed(), 1);
    }

    #[test]
    fn stale_advance_keeps_the_same_state() {
        let started = Rc::new(ContentTransition::new(0)).reduce(TransitionAction::Begin(2));
        let stale = started.epoch() + 1;
        let after = started.clone().reduce(TransitionAction::Advance(stale));
        assert!(Rc::ptr_eq(&started, &after));
        assert_eq!(timer_key(&after), (Phase::FadingOut, started.epoch()));
    }
}
