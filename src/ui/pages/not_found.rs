//! Not found page component
//!
//! A 404 error page displayed when a route or project is not found.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Real 404 status for server-rendered responses
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found" />
        <main class="not-found">
            <h1 class="not-found-code">"404"</h1>
            <h2 class="not-found-title">"Page Not Found"</h2>
            <p class="not-found-text">
                "The page you're looking for doesn't exist or has been moved."
            </p>
            <div class="not-found-actions">
                <a href="/" class="button">
                    <Icon name=icons::HOME />
                    "Go Home"
                </a>
                <a href="/desk" class="button button-outline">"Open the desk"</a>
            </div>
        </main>
    }
}
