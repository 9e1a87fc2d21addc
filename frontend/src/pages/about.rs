use yew::prelude::*;

use crate::components::dropdown::DropdownGroup;
use crate::components::reveal::RevealOnScroll;
use crate::content::ABOUT_SECTIONS;

#[function_component(About)]
pub fn about() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="about-page">
            <section class="page-hero">
                <h1>{"About us"}</h1>
                <p>{"A focused intellectual property practice in Reykjavík."}</p>
            </section>
            <RevealOnScroll class="about-content">
                <DropdownGroup sections={ABOUT_SECTIONS} class="about-dropdown" />
            </RevealOnScroll>
        </div>
    }
}
