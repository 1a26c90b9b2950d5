use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    path,
};

use crate::ui::pages::{DeskPage, LandingPage, NotFoundPage, ProjectPage};

/// Hydration entry loaded as an external module; the content security
/// policy does not allow inline scripts
pub const BOOTSTRAP_SCRIPT: &str = "/bootstrap.js";

pub fn shell(_options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="modulepreload" href="/pkg/paperdesk.js"/>
                <script type="module" src=BOOTSTRAP_SCRIPT></script>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/paperdesk.css"/>

        <Title text="Trust, Safety & Care"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("index.html") view=LandingPage/>
                <Route path=StaticSegment("desk") view=DeskPage/>
                <Route path=path!("/projects/:page") view=ProjectPage/>
            </Routes>
        </Router>
    }
}
