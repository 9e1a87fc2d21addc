use chrono::Datelike;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

mod config;
mod content;
mod storage;
mod state {
    pub mod consent;
    pub mod dismiss;
    pub mod feedback;
    pub mod reveal;
    pub mod scroll;
    pub mod selection;
    pub mod transition;
    pub mod validate;
}
mod components {
    pub mod contact_form;
    pub mod cookie_consent;
    pub mod dismiss;
    pub mod dropdown;
    pub mod interactions;
    pub mod language;
    pub mod reveal;
    pub mod team_filter;
    pub mod team_switcher;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod services;
    pub mod team;
}

use components::{
    cookie_consent::CookieConsent,
    dismiss::{use_outside_dismiss, DismissHandle},
    interactions::AnchorLink,
    language::LanguageSwitcher,
};
use config::SiteConfig;
use pages::{about::About, home::Home, services::Services, team::Team};
use state::scroll::ScrollWatcher;
use state::selection::BinaryToggle;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/team")]
    Team,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Team => {
            info!("Rendering Team page");
            html! { <Team /> }
        }
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let menu = use_state_eq(BinaryToggle::default);
    let is_scrolled = use_state_eq(|| false);
    let nav_hidden = use_state_eq(|| false);
    let root = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        let nav_hidden = nav_hidden.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let window_clone = window.clone();
                let mut watcher = ScrollWatcher::new(&config);

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_clone.scroll_y().unwrap_or(0.0);
                    let update = watcher.on_scroll(offset);
                    is_scrolled.set(update.scrolled);
                    nav_hidden.set(update.nav_hidden);
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = *menu;
            next.toggle();
            menu.set(next);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| {
            let mut next = *menu;
            if next.close() {
                menu.set(next);
            }
        })
    };

    {
        let close_menu = close_menu.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                close_menu.emit(());
            }
        });
    }

    use_outside_dismiss("nav-menu", root.clone(), menu.is_open(), close_menu.clone());

    let close_on_link = close_menu.reform(|_: MouseEvent| ());
    let open = menu.is_open();

    html! {
        <header
            class={classes!("header", (*is_scrolled).then(|| "scrolled"), (*nav_hidden).then(|| "nav-hidden"))}
            ref={root}
        >
            <nav class="navbar">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Tego"}
                </Link<Route>>

                <button class={classes!("hamburger", open.then(|| "active"))} onclick={toggle_menu}>
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
                <ul class={classes!("nav-menu", open.then(|| "active"))}>
                    <li onclick={close_on_link.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">{"About"}</Link<Route>>
                    </li>
                    <li onclick={close_on_link.clone()}>
                        <Link<Route> to={Route::Services} classes="nav-link">{"Services"}</Link<Route>>
                    </li>
                    <li onclick={close_on_link.clone()}>
                        <Link<Route> to={Route::Team} classes="nav-link">{"Team"}</Link<Route>>
                    </li>
                    <li onclick={close_on_link}>
                        <AnchorLink to="contact" class="nav-link">{"Contact"}</AnchorLink>
                    </li>
                </ul>
                <LanguageSwitcher />
            </nav>
        </header>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="footer">
            <p>{format!("© {} Tego IP Consulting", year)}</p>
            <p>{format!("Tel. {}", config::CONTACT_PHONE)}</p>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    let site_config = use_memo(|_| SiteConfig::default(), ());
    let dismiss = use_memo(|_| DismissHandle::default(), ());

    {
        let dismiss = (*dismiss).clone();
        use_event_with_window("click", move |e: MouseEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) {
                dismiss.dispatch(&target);
            }
        });
    }

    html! {
        <ContextProvider<SiteConfig> context={(*site_config).clone()}>
            <ContextProvider<DismissHandle> context={(*dismiss).clone()}>
                <BrowserRouter>
                    <Nav />
                    <main>
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                    <CookieConsent />
                </BrowserRouter>
                <style>
                    {r#"
                    .header {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        background-color: #ffffff;
                        transition: transform 0.3s ease, background-color 0.3s ease;
                        z-index: 1000;
                    }
                    .header.scrolled {
                        background-color: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(10px);
                    }
                    .header.nav-hidden {
                        transform: translateY(-100%);
                    }
                    .lang-btn.active,
                    .team-filter.active {
                        font-weight: 700;
                        border-bottom: 2px solid var(--primary-color);
                    }
                    .about-dropdown-content,
                    .service-dropdown-content,
                    .profile-dropdown-content {
                        display: none;
                    }
                    .about-dropdown.active .about-dropdown-content,
                    .service-dropdown.active .service-dropdown-content,
                    .team-profile.active .profile-dropdown-content {
                        display: block;
                    }
                    .team-profile.hidden {
                        display: none;
                    }
                    .cookie-popup {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        max-width: 360px;
                        padding: 1.5rem;
                        background: #ffffff;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
                        z-index: 1100;
                    }
                    @media (max-width: 768px) {
                        .nav-menu {
                            display: none;
                        }
                        .nav-menu.active {
                            display: flex;
                            flex-direction: column;
                        }
                    }
                    "#}
                </style>
            </ContextProvider<DismissHandle>>
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Welcome to Tego website!");
    info!("For legal assistance, please contact us at {}", config::CONTACT_PHONE);
    yew::Renderer::<App>::new().render();
}
