//! Project list with staggered entrance and click ripples

use leptos::prelude::*;

use crate::core::effects::{REVEAL_DURATION, Ripple, stagger_delay};
use crate::core::navigation::PROJECT_GROUP;
use crate::core::site::PROJECTS;

#[component]
pub fn ProjectList() -> impl IntoView {
    let revealed = RwSignal::new(false);
    // Once every item is in, delays are dropped so later transitions start at once
    let settled = RwSignal::new(false);
    let ripples = RwSignal::new(Vec::<(usize, Ripple)>::new());
    let next_ripple = StoredValue::new(0u64);

    // Items render hidden and reveal one after another once hydrated
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        use crate::core::effects::reveal_settled;
        use gloo_timers::future::TimeoutFuture;

        revealed.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(reveal_settled(PROJECTS.len()).as_millis() as u32).await;
            settled.try_set(true);
        });
    });

    let spawn_ripple = move |item: usize, ev: leptos::ev::MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::effects::RIPPLE_DURATION;
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen::JsCast;
            use wasm_bindgen_futures::spawn_local;

            let Some(target) = ev
                .current_target()
                .and_then(|target| target.dyn_into::<leptos::web_sys::Element>().ok())
            else {
                return;
            };
            let rect = target.get_bounding_client_rect();

            let id = next_ripple.with_value(|id| *id);
            next_ripple.set_value(id + 1);
            let ripple = Ripple::at(
                id,
                ev.client_x() as f64,
                ev.client_y() as f64,
                rect.left(),
                rect.top(),
            );
            ripples.update(|list| list.push((item, ripple)));

            spawn_local(async move {
                TimeoutFuture::new(RIPPLE_DURATION.as_millis() as u32).await;
                ripples.update(|list| list.retain(|(_, r)| r.id != id));
            });
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (item, ev, next_ripple);
        }
    };

    view! {
        <ul class="project-list">
            {PROJECTS
                .iter()
                .enumerate()
                .map(|(index, project)| {
                    let delay = stagger_delay(index);
                    view! {
                        <li
                            class="project-item"
                            class:revealed=move || revealed.get()
                            style:transition-delay=move || {
                                if settled.get() {
                                    "0ms".to_string()
                                } else {
                                    format!("{}ms", delay.as_millis())
                                }
                            }
                            style:transition-duration=format!("{}ms", REVEAL_DURATION.as_millis())
                            on:click=move |ev| spawn_ripple(index, ev)
                        >
                            <a href=PROJECT_GROUP.href(project.slug) class="project-link">
                                <span class="project-kicker">{project.kicker}</span>
                                <span class="project-title">{project.title}</span>
                                <span class="project-summary">{project.summary}</span>
                            </a>
                            <For
                                each=move || {
                                    ripples
                                        .get()
                                        .into_iter()
                                        .filter(|(item, _)| *item == index)
                                        .map(|(_, ripple)| ripple)
                                        .collect::<Vec<_>>()
                                }
                                key=|ripple| ripple.id
                                children=|ripple| {
                                    view! { <span class="ripple" style=ripple.style()></span> }
                                }
                            />
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
