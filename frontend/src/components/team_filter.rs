use yew::prelude::*;

use crate::components::dismiss::use_outside_item_dismiss;
use crate::content::{TeamFilter, TEAM_FILTERS, TEAM_MEMBERS};
use crate::state::selection::SelectionGroup;

#[function_component(TeamDirectory)]
pub fn team_directory() -> Html {
    let filters = use_state_eq(|| SelectionGroup::with_active(TEAM_FILTERS.iter().copied(), 0));
    let profiles = use_state_eq(|| SelectionGroup::new(0..TEAM_MEMBERS.len()));
    let grid = use_node_ref();

    let close_profiles = {
        let profiles = profiles.clone();
        Callback::from(move |_: ()| {
            let mut next = (*profiles).clone();
            if !next.clear().is_empty() {
                profiles.set(next);
            }
        })
    };
    use_outside_item_dismiss("team-profile", grid.clone(), "team-profile", profiles.active().is_some(), close_profiles);

    let filter = filters.active_payload().copied().unwrap_or(TeamFilter::All);

    html! {
        <section class="team-directory">
            <div class="team-filters">
                { for TEAM_FILTERS.iter().enumerate().map(|(index, option)| {
                    let onclick = {
                        let filters = filters.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            let mut next = (*filters).clone();
                            if next.select(index).activated().is_some() {
                                log::info!("Team filter set to {}", next.active_payload().map_or("", |f| f.label()));
                                filters.set(next);
                            }
                        })
                    };
                    html! {
                        <button
                            class={classes!("team-filter", filters.is_active(index).then(|| "active"))}
                            onclick={onclick}
                        >
                            {option.label()}
                        </button>
                    }
                }) }
            </div>
            <div class="team-profiles" ref={grid}>
                { for TEAM_MEMBERS.iter().enumerate().map(|(index, member)| {
                    let onclick = {
                        let profiles = profiles.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            let mut next = (*profiles).clone();
                            next.toggle(index);
                            profiles.set(next);
                        })
                    };
                    html! {
                        <div
                            class={classes!(
                                "team-profile",
                                profiles.is_active(index).then(|| "active"),
                                (!filter.shows(member)).then(|| "hidden")
                            )}
                            data-category={member.category.as_str()}
                        >
                            <img class="profile-img" src={member.image} alt={member.name} loading="lazy" />
                            <h3>{member.name}</h3>
                            <p class="profile-title">{member.title}</p>
                            <button class="profile-dropdown-trigger" onclick={onclick}>
                                {if profiles.is_active(index) { "Hide bio" } else { "Read bio" }}
                            </button>
                            <div class="profile-dropdown-content">
                                <p>{member.bio}</p>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
