use yew::prelude::*;

use crate::components::dropdown::DropdownGroup;
use crate::content::SERVICES;

#[function_component(Services)]
pub fn services() -> Html {
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
        <div class="services-page">
            <section class="page-hero">
                <h1>{"Services"}</h1>
                <p>{"From first search to final renewal."}</p>
            </section>
            <DropdownGroup sections={SERVICES} class="service-dropdown" />
        </div>
    }
}
