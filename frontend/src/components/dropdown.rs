use yew::prelude::*;

use crate::components::dismiss::use_outside_item_dismiss;
use crate::content::Section;
use crate::state::selection::SelectionGroup;

#[derive(Properties, PartialEq)]
pub struct DropdownGroupProps {
    pub sections: &'static [Section],
    /// Class prefix, e.g. `about-dropdown` gives `about-dropdown-trigger`.
    pub class: &'static str,
}

/// A stack of dropdowns where opening one closes the rest. Re-clicking an
/// open trigger closes it, and a click outside every dropdown, including the
/// gaps between them, closes everything.
#[function_component(DropdownGroup)]
pub fn dropdown_group(props: &DropdownGroupProps) -> Html {
    let group = use_state_eq(|| SelectionGroup::new(0..props.sections.len()));
    let root = use_node_ref();

    let close_all = {
        let group = group.clone();
        Callback::from(move |_: ()| {
            let mut next = (*group).clone();
            if !next.clear().is_empty() {
                group.set(next);
            }
        })
    };
    use_outside_item_dismiss(props.class, root.clone(), props.class, group.active().is_some(), close_all);

    let class = props.class;
    html! {
        <div class={format!("{}-group", class)} ref={root}>
            { for props.sections.iter().enumerate().map(|(index, section)| {
                let onclick = {
                    let group = group.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        let mut next = (*group).clone();
                        let changes = next.toggle(index);
                        log::debug!("{} {} -> {:?}", class, index, changes);
                        group.set(next);
                    })
                };
                html! {
                    <div class={classes!(class, group.is_active(index).then(|| "active"))}>
                        <button class={format!("{}-trigger", class)} onclick={onclick}>
                            <span>{section.title}</span>
                            <span class="toggle-icon">{if group.is_active(index) { "−" } else { "+" }}</span>
                        </button>
                        <div class={format!("{}-content", class)}>
                            <p>{section.body}</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
