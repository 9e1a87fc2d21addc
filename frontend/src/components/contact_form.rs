use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::CONTACT_PHONE;
use crate::state::validate::ContactForm;

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);
    let errors = use_state(Vec::<String>::new);
    let sent = use_state(|| false);

    let bind_input = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        let errors = errors.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = ContactForm::from_fields([
                ("name", (*name).clone()),
                ("email", (*email).clone()),
                ("phone", (*phone).clone()),
                ("message", (*message).clone()),
            ]);
            let problems = form.validate();
            if problems.is_empty() {
                log::info!("Contact request from {}", *email);
                sent.set(true);
            } else {
                log::debug!("Contact form rejected: {:?}", problems);
                sent.set(false);
            }
            errors.set(problems);
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <h2>{"Contact us"}</h2>
            <p>{format!("Call us at {} or send us a message.", CONTACT_PHONE)}</p>
            if *sent {
                <div class="form-success">
                    {"Thank you. We will be in touch shortly."}
                </div>
            } else {
                <form class="contact-form" onsubmit={onsubmit}>
                    if !errors.is_empty() {
                        <ul class="form-errors">
                            { for errors.iter().map(|error| html! { <li>{error}</li> }) }
                        </ul>
                    }
                    <input type="text" name="name" placeholder="Name" value={(*name).clone()} oninput={bind_input(&name)} />
                    <input type="email" name="email" placeholder="Email" value={(*email).clone()} oninput={bind_input(&email)} />
                    <input type="tel" name="phone" placeholder="Phone" value={(*phone).clone()} oninput={bind_input(&phone)} />
                    <textarea name="message" placeholder="How can we help?" value={(*message).clone()} oninput={on_message}></textarea>
                    <button type="submit" class="cta-button">{"Send"}</button>
                </form>
            }
        </section>
    }
}
