use yew::prelude::*;

use crate::components::team_filter::TeamDirectory;

#[function_component(Team)]
pub fn team() -> Html {
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
        <div class="team-page">
            <section class="page-hero">
                <h1>{"Our team"}</h1>
                <p>{"IP attorneys and lawyers with experience across every kind of registered right."}</p>
            </section>
            <TeamDirectory />
        </div>
    }
}
