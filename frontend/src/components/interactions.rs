use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::content::{Section, Testimonial};
use crate::state::feedback::{CardKind, CardMotion, CtaAction};

/// Smoothly scrolls the element with `id` to the top of the viewport.
/// Returns `false` if there is no such element.
pub fn scroll_to_anchor(id: &str) -> bool {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match target {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            log::debug!("No #{} on this page", id);
            false
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    /// Target element id, without the `#`.
    pub to: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let to = props.to.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(&to);
        })
    };
    html! {
        <a href={format!("#{}", props.to)} class={props.class.clone()} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}

pub enum MotionAction {
    Hover(bool),
    Press,
    Release,
}

impl Reducible for CardMotion {
    type Action = MotionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            MotionAction::Hover(hovered) => (*self).hover(hovered),
            MotionAction::Press => match (*self).press() {
                Some(pressed) => pressed,
                None => return self,
            },
            MotionAction::Release => (*self).release(),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub struct CardFeedback {
    pub style: String,
    pub onmouseenter: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
    pub onpress: Callback<MouseEvent>,
}

#[hook]
pub fn use_card_feedback(kind: CardKind) -> CardFeedback {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let motion = use_reducer(move || CardMotion::new(kind));
    // Dropped with the component, which cancels a pending release.
    let release = use_mut_ref(|| None::<Timeout>);

    let hover = |hovered: bool| {
        let dispatcher = motion.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MotionAction::Hover(hovered)))
    };

    let onpress = {
        let motion = motion.clone();
        let press_ms = config.press_feedback_ms;
        Callback::from(move |_: MouseEvent| {
            if (*motion).press().is_none() {
                return;
            }
            motion.dispatch(MotionAction::Press);
            let dispatcher = motion.dispatcher();
            *release.borrow_mut() = Some(Timeout::new(press_ms, move || {
                dispatcher.dispatch(MotionAction::Release)
            }));
        })
    };

    CardFeedback {
        style: motion.css(),
        onmouseenter: hover(true),
        onmouseleave: hover(false),
        onpress,
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub label: AttrValue,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let feedback = use_card_feedback(CardKind::Cta);
    let onclick = {
        let onpress = feedback.onpress.clone();
        let label = props.label.clone();
        Callback::from(move |e: MouseEvent| {
            onpress.emit(e);
            match CtaAction::from_label(&label) {
                CtaAction::ScrollToContact => {
                    scroll_to_anchor("contact");
                }
                CtaAction::Call => log::info!("Phone call initiated"),
                CtaAction::None => {}
            }
        })
    };
    html! {
        <button class="cta-button" style={feedback.style} onclick={onclick}>
            {props.label.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct PracticeCardProps {
    pub area: Section,
}

#[function_component(PracticeCard)]
pub fn practice_card(props: &PracticeCardProps) -> Html {
    let feedback = use_card_feedback(CardKind::Practice);
    html! {
        <div
            class="practice-card"
            style={feedback.style}
            onmouseenter={feedback.onmouseenter}
            onmouseleave={feedback.onmouseleave}
            onclick={feedback.onpress}
        >
            <h3>{props.area.title}</h3>
            <p>{props.area.body}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let feedback = use_card_feedback(CardKind::Testimonial);
    html! {
        <blockquote
            class="testimonial-card"
            style={feedback.style}
            onmouseenter={feedback.onmouseenter}
            onmouseleave={feedback.onmouseleave}
        >
            <p>{props.testimonial.quote}</p>
            <cite>{props.testimonial.author}</cite>
        </blockquote>
    }
}
