use yew::prelude::*;

use crate::components::contact_form::ContactSection;
use crate::components::interactions::{CtaButton, PracticeCard, TestimonialCard};
use crate::components::reveal::{LazyImage, RevealOnScroll};
use crate::components::team_switcher::TeamSwitcher;
use crate::content::{PRACTICE_AREAS, TESTIMONIALS};

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
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
        <div class="home-page">
            <section class="hero" id="home">
                <RevealOnScroll class="hero-content">
                    <h1>{"Protecting the ideas that build your business"}</h1>
                    <p class="hero-subtitle">
                        {"Tego is an Icelandic intellectual property firm handling trademarks, patents and designs."}
                    </p>
                    <div class="hero-actions">
                        <CtaButton label="Book a consultation" />
                        <CtaButton label="Call us" />
                    </div>
                </RevealOnScroll>
            </section>

            <section class="practice-areas" id="practice-areas">
                <h2>{"Practice areas"}</h2>
                <div class="practice-grid">
                    { for PRACTICE_AREAS.iter().map(|area| html! {
                        <RevealOnScroll>
                            <PracticeCard area={*area} />
                        </RevealOnScroll>
                    }) }
                </div>
            </section>

            <section class="about" id="about">
                <RevealOnScroll class="about-content">
                    <h2>{"About Tego"}</h2>
                    <p>
                        {"Our attorneys have represented clients before the Icelandic authorities and the EUIPO for two decades."}
                    </p>
                    <LazyImage class="about-img" src="photos/office.jpg" alt="The Tego office" />
                </RevealOnScroll>
            </section>

            <section class="team-section" id="team">
                <h2>{"Our people"}</h2>
                <TeamSwitcher />
            </section>

            <section class="testimonials">
                <h2>{"What clients say"}</h2>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|testimonial| html! {
                        <RevealOnScroll>
                            <TestimonialCard testimonial={*testimonial} />
                        </RevealOnScroll>
                    }) }
                </div>
            </section>

            <ContactSection />
        </div>
    }
}
