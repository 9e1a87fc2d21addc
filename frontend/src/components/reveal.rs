use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::state::reveal::{LazySource, Reveal};

/// Keeps an observer alive; disconnects on drop.
struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(
    element: &Element,
    options: &IntersectionObserverInit,
    mut on_entry: impl FnMut(bool, &Element, &IntersectionObserver) + 'static,
) -> Option<ObserverGuard> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            on_entry(entry.is_intersecting(), &entry.target(), &observer);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options) {
        Ok(observer) => {
            observer.observe(element);
            Some(ObserverGuard { observer, _callback: callback })
        }
        Err(err) => {
            log::debug!("IntersectionObserver unavailable: {:?}", err);
            None
        }
    }
}

fn reveal_options(config: &SiteConfig) -> IntersectionObserverInit {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&config.reveal_threshold.into());
    options.set_root_margin(config.reveal_root_margin);
    options
}

#[derive(Properties, PartialEq)]
pub struct RevealOnScrollProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Starts transparent and shifted down, fades in the first time it enters
/// the viewport.
#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll(props: &RevealOnScrollProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let node = use_node_ref();
    let reveal = use_state_eq(Reveal::default);

    {
        let node = node.clone();
        let reveal = reveal.clone();
        use_effect_with_deps(
            move |_| {
                let guard = node.cast::<Element>().and_then(|element| {
                    let mut current = Reveal::default();
                    observe(&element, &reveal_options(&config), move |intersecting, _, _| {
                        if current.observe(intersecting) {
                            reveal.set(current);
                        }
                    })
                });
                move || drop(guard)
            },
            (),
        );
    }

    html! {
        <div class={props.class.clone()} ref={node} style={reveal.css()}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Image that only gets its real `src` once it scrolls into view.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let source = use_state_eq(|| LazySource::new(props.src.to_string()));

    {
        let node = node.clone();
        let source = source.clone();
        use_effect_with_deps(
            move |_| {
                let guard = node.cast::<Element>().and_then(|element| {
                    let mut current = (*source).clone();
                    observe(&element, &IntersectionObserverInit::new(), move |intersecting, target, observer| {
                        if current.observe(intersecting).is_some() {
                            observer.unobserve(target);
                            source.set(current.clone());
                        }
                    })
                });
                move || drop(guard)
            },
            (),
        );
    }

    html! {
        <img
            ref={node}
            class={classes!(props.class.clone(), (!source.is_loaded()).then(|| "lazy"))}
            src={source.src().map(|src| src.to_string())}
            data-src={props.src.clone()}
            alt={props.alt.clone()}
        />
    }
}
