//! Landing page component
//!
//! - SEO meta tags
//! - Wave heading and staggered project list
//! - Athena transition link with mute toggle
//! - Skills and stack cards
//! - Audience spotlight
//! - Playbook signup

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::site::{ATHENA_TARGET, PageFeatures, SKILL_PANELS, STACK_PANELS};
use crate::core::wave::WaveMode;
use crate::ui::accordion::Accordion;
use crate::ui::athena::AthenaPortal;
use crate::ui::mute::provide_mute_context;
use crate::ui::project_list::ProjectList;
use crate::ui::signup::SignupForm;
use crate::ui::spotlight::SpotlightShowcase;
use crate::ui::wave_text::WaveText;

#[component]
pub fn LandingPage() -> impl IntoView {
    let features = PageFeatures::LANDING;
    provide_mute_context();

    view! {
        <SeoMeta />

        <main class="landing">
            <header class="hero">
                <h1 class="main-name">
                    {if features.wave_text {
                        view! { <WaveText text="Trust, Safety & Care" mode=WaveMode::Scroll /> }.into_any()
                    } else {
                        "Trust, Safety & Care".into_any()
                    }}
                </h1>
                <p class="hero-tagline">
                    "Research, teaching and policy work for safer digital childhoods."
                </p>
                <a href="/desk" class="hero-desk-link">"Browse the desk \u{2192}"</a>
            </header>

            {features.stagger.then(|| view! {
                <section class="projects" aria-labelledby="projects-heading">
                    <h2 id="projects-heading" class="section-title">"Projects"</h2>
                    <ProjectList />
                </section>
            })}

            {features.athena.then(|| view! { <AthenaPortal href=ATHENA_TARGET /> })}

            {features.accordions.then(|| view! {
                <section class="cards" aria-labelledby="skills-heading">
                    <h2 id="skills-heading" class="section-title">"Skills"</h2>
                    <Accordion name="skills" panels=SKILL_PANELS />
                </section>
                <section class="cards" aria-labelledby="stack-heading">
                    <h2 id="stack-heading" class="section-title">"Stack"</h2>
                    <Accordion name="stack" panels=STACK_PANELS class="accordion-compact" />
                </section>
            })}

            {features.spotlight.then(|| view! { <SpotlightShowcase /> })}

            {features.signup.then(|| view! { <SignupForm /> })}

            <Footer />
        </main>
    }
}

/// SEO meta tags
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Trust, Safety & Care | Portfolio" />
        <Meta name="description" content="Portfolio of research, teaching and policy work on digital safety, responsible AI and environmental justice." />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Trust, Safety & Care | Portfolio" />
        <Meta property="og:description" content="Research, teaching and policy work for safer digital childhoods." />
        <Link rel="canonical" href="/" />
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <a href="/desk">"Desk"</a>
            <p class="footer-note">"Built with Rust & Leptos."</p>
        </footer>
    }
}
