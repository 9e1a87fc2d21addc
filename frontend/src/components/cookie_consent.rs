use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::state::consent::ConsentFlag;
use crate::storage::{LocalStore, StorageError};

type ConsentAction = fn(&mut ConsentFlag<LocalStore>) -> Result<(), StorageError>;

#[function_component(CookieConsent)]
pub fn cookie_consent() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let consent = use_state(|| ConsentFlag::init(LocalStore, &config));

    // The flag cannot change before the banner shows, so the mount-time
    // snapshot is still current when the timer fires.
    {
        let consent = consent.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = consent.pending_delay_ms().map(|delay| {
                    let consent = consent.clone();
                    Timeout::new(delay, move || {
                        let mut next = (*consent).clone();
                        if next.show_banner() {
                            consent.set(next);
                        }
                    })
                });
                move || drop(timeout)
            },
            (),
        );
    }

    if !consent.is_banner_visible() {
        return html! {};
    }

    let on = |action: ConsentAction| {
        let consent = consent.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*consent).clone();
            if let Err(err) = action(&mut next) {
                log::warn!("Cookie choice kept for this visit only: {}", err);
            }
            consent.set(next);
        })
    };

    html! {
        <div id="cookie-consent" class="cookie-popup">
            <button id="cookie-close" class="cookie-close" aria-label="Close" onclick={on(ConsentFlag::close)}>
                {"×"}
            </button>
            <h4>{"We use cookies"}</h4>
            <p>
                {"Essential cookies keep the site working. Optional cookies help us understand how the site is used."}
            </p>
            <div class="cookie-actions">
                <button class="cookie-accept-all" onclick={on(ConsentFlag::accept_all)}>{"Accept all"}</button>
                <button class="cookie-reject" onclick={on(ConsentFlag::reject_optional)}>{"Reject optional"}</button>
            </div>
        </div>
    }
}
