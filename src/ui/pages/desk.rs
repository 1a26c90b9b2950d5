use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::site::PageFeatures;
use crate::ui::paper::Desk;

/// Desk page: project papers scattered on a work surface
#[component]
pub fn DeskPage() -> impl IntoView {
    let features = PageFeatures::DESK;

    view! {
        <Title text="Desk | Trust, Safety & Care" />
        <Meta name="description" content="Project papers on a desk. Drag them around or click one to open it." />

        <main class="desk-page">
            <header class="desk-header">
                <a href="/" class="back-link">"\u{2190} Home"</a>
                <h1>"On the desk"</h1>
                <p class="desk-hint">"Drag papers around. Click or press Enter to open one."</p>
            </header>
            {features.desk.then(|| view! { <Desk /> })}
        </main>
    }
}
