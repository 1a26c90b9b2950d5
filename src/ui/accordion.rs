use leptos::html;
use leptos::prelude::*;

use crate::core::disclosure::{DisclosureGroup, Layout, focus_target};
use crate::core::site::Panel;
use crate::ui::icon::{Icon, icons};

/// Disclosure group of cards.
///
/// Wide viewports keep exactly one card open; narrow viewports let the open
/// card collapse. Arrow keys move focus between triggers.
#[component]
pub fn Accordion(
    /// Used to build element ids
    name: &'static str,
    panels: &'static [Panel],
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    // Server and first client render agree on the wide layout; the real
    // viewport is applied once hydrated
    let group = RwSignal::new(DisclosureGroup::new(panels.len(), Layout::Wide));
    let triggers: Vec<NodeRef<html::Button>> = panels.iter().map(|_| NodeRef::new()).collect();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::disclosure::WIDE_VIEWPORT_QUERY;
        use crate::ui::dom::{MediaWatch, hold};

        Effect::new(move |_| {
            let watch = MediaWatch::new(WIDE_VIEWPORT_QUERY, move |wide| {
                group.update(|g| g.set_layout(Layout::from_wide(wide)));
            });
            if let Some(watch) = watch {
                hold(watch);
            }
        });
    }

    let focus = {
        let triggers = triggers.clone();
        move |index: usize| {
            if let Some(button) = triggers.get(index).and_then(|trigger| trigger.get()) {
                let _ = button.focus();
            }
        }
    };

    view! {
        <div class=format!("accordion {}", class)>
            {panels
                .iter()
                .enumerate()
                .map(|(index, panel)| {
                    let trigger_id = format!("{}-trigger-{}", name, panel.id);
                    let panel_id = format!("{}-panel-{}", name, panel.id);
                    let is_open = move || group.with(|g| g.is_open(index));
                    let focus = focus.clone();

                    view! {
                        <div class="accordion-item" class:open=is_open>
                            <button
                                type="button"
                                class="accordion-trigger"
                                id=trigger_id.clone()
                                aria-controls=panel_id.clone()
                                aria-expanded=move || is_open().to_string()
                                node_ref=triggers[index]
                                on:click=move |_| {
                                    group.update(|g| {
                                        g.activate(index);
                                    });
                                }
                                on:keydown=move |ev| {
                                    let len = group.with_untracked(|g| g.len());
                                    if let Some(target) = focus_target(index, &ev.key(), len) {
                                        ev.prevent_default();
                                        focus(target);
                                    }
                                }
                            >
                                <span class="accordion-title">{panel.title}</span>
                                <Icon name=icons::CHEVRON_DOWN class="icon accordion-chevron" />
                            </button>
                            <div
                                class="accordion-panel"
                                id=panel_id
                                role="region"
                                aria-labelledby=trigger_id
                                hidden=move || !is_open()
                            >
                                <p>{panel.body}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
