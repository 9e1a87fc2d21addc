use web_sys::window;
use yew::prelude::*;

use crate::content::{Language, DEFAULT_LANGUAGE, LANGUAGES};
use crate::state::selection::SelectionGroup;

fn apply_language(language: &Language) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => {
            let _ = root.set_attribute("lang", language.code);
        }
        None => log::debug!("No document element to set lang on"),
    }
}

#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let languages = use_state_eq(|| SelectionGroup::with_active(LANGUAGES.iter().copied(), DEFAULT_LANGUAGE));

    html! {
        <div class="lang-switcher">
            { for LANGUAGES.iter().enumerate().map(|(index, language)| {
                let onclick = {
                    let languages = languages.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = (*languages).clone();
                        if next.select(index).activated().is_none() {
                            return;
                        }
                        if let Some(selected) = next.active_payload() {
                            log::info!("Language switched to: {}", selected.code);
                            apply_language(selected);
                        }
                        languages.set(next);
                    })
                };
                html! {
                    <button
                        class={classes!("lang-btn", languages.is_active(index).then(|| "active"))}
                        data-lang={language.code}
                        onclick={onclick}
                    >
                        {language.label}
                    </button>
                }
            }) }
        </div>
    }
}
