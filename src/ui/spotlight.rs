//! Audience spotlight showcase
//!
//! Tabs pick an audience; the detail card and the playbook below it follow
//! the selection.

use leptos::prelude::*;

use crate::core::spotlight::{SPOTLIGHTS, SpotlightSelection, profile_for};
use crate::ui::common::{TabItem, Tabs};

#[component]
pub fn SpotlightShowcase() -> impl IntoView {
    let selection = RwSignal::new(SpotlightSelection::default());
    let active = Memo::new(move |_| selection.with(|s| *s.active()));

    let tabs = SPOTLIGHTS
        .iter()
        .map(|entry| TabItem::new(entry.id, entry.title).with_caption(entry.subtitle))
        .collect::<Vec<_>>();

    let on_change = Callback::new(move |id: &'static str| {
        selection.update(|s| {
            s.select(id);
        });
    });

    view! {
        <section class="spotlight" aria-labelledby="spotlight-heading">
            <h2 id="spotlight-heading" class="section-title">"Who is reading?"</h2>
            <Tabs
                tabs=tabs
                active_tab=Signal::derive(move || selection.with(|s| s.active_id()))
                on_change=on_change
                label="Audience"
                class="spotlight-tabs"
            />

            <article class="spotlight-detail" aria-live="polite">
                <p class="spotlight-subtitle">{move || active.get().subtitle}</p>
                <h3 class="spotlight-title">{move || active.get().title}</h3>
                <p class="spotlight-summary">{move || active.get().summary}</p>
                <ul class="spotlight-recommendations">
                    {move || {
                        active
                            .get()
                            .recommendations
                            .iter()
                            .map(|item| view! { <li>{*item}</li> })
                            .collect_view()
                    }}
                </ul>
                <div class="spotlight-metrics">
                    {move || {
                        active
                            .get()
                            .metrics
                            .iter()
                            .map(|tag| view! { <span class="metric-tag">{*tag}</span> })
                            .collect_view()
                    }}
                </div>
            </article>

            <div class="playbook">
                {move || {
                    let profile = profile_for(active.get().subtitle);
                    view! {
                        <div class="playbook-focus">
                            <div>
                                <h3 class="playbook-heading">"What they look for"</h3>
                                <ul class="playbook-priorities">
                                    {profile
                                        .priorities
                                        .iter()
                                        .map(|priority| view! { <li>{*priority}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                            <div>
                                <h3 class="playbook-heading">"Sections to feature"</h3>
                                <div class="spotlight-metrics">
                                    {profile
                                        .highlight_sections
                                        .iter()
                                        .map(|section| view! { <span class="metric-tag">{*section}</span> })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    }
                }}
                <h3 class="playbook-heading">"Next steps"</h3>
                {move || {
                    profile_for(active.get().subtitle)
                        .playbook
                        .iter()
                        .map(|rec| {
                            view! {
                                <div class="playbook-item">
                                    <h4>{rec.heading}</h4>
                                    <ul>
                                        {rec
                                            .talking_points
                                            .iter()
                                            .map(|point| view! { <li>{*point}</li> })
                                            .collect_view()}
                                    </ul>
                                    <p class="playbook-cta">{rec.call_to_action}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
