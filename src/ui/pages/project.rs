use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use crate::core::site::{PageFeatures, Project, find_project};
use crate::ui::page_nav::PageNav;
use crate::ui::pages::NotFoundPage;
use crate::ui::textile_canvas::TextileCanvas;

/// `/projects/:page`; unknown pages render the 404 page
#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("page").unwrap_or_default();

    move || match find_project(&slug()) {
        Some(project) => view! { <ProjectView project=project /> }.into_any(),
        None => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
fn ProjectView(project: &'static Project) -> impl IntoView {
    let features = PageFeatures::project(project);

    view! {
        <Title text=format!("{} | Trust, Safety & Care", project.title) />
        <Meta name="description" content=project.summary />

        {features.textile.then(|| view! { <TextileCanvas /> })}

        <main class="project-container slide-in">
            <p class="project-kicker">{project.kicker}</p>
            <h1 class="project-heading">{project.title}</h1>
            <p class="project-lede">{project.summary}</p>
        </main>

        {features.navigation.map(|group| {
            view! { <PageNav group=group path=group.href(project.slug) /> }
        })}
    }
}
