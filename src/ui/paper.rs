//! Draggable papers on the desk surface

use leptos::html;
use leptos::prelude::*;

use crate::core::desk::{Paper, Point, StackOrder};
use crate::core::site::DESK_PAPERS;

/// Desk surface holding every paper. Owns the shared stacking counter.
#[component]
pub fn Desk() -> impl IntoView {
    let stack = StoredValue::new(StackOrder::new());
    let desk_ref = NodeRef::<html::Div>::new();

    view! {
        <div class="desk" id="desk" node_ref=desk_ref>
            {DESK_PAPERS
                .iter()
                .map(|&(title, link, left, top)| {
                    view! {
                        <DeskPaper
                            title=title
                            link=link
                            left_percent=left
                            top_percent=top
                            stack=stack
                            desk_ref=desk_ref
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn DeskPaper(
    title: &'static str,
    link: Option<&'static str>,
    /// Initial position as a percentage of the desk
    left_percent: u8,
    top_percent: u8,
    stack: StoredValue<StackOrder>,
    desk_ref: NodeRef<html::Div>,
) -> impl IntoView {
    let paper = StoredValue::new(Paper::new(link.map(str::to_string)));
    // Pixel position once the paper has been dragged
    let position = RwSignal::new(None::<Point>);
    let z_index = RwSignal::new(stack.try_update_value(|s| s.raise()).unwrap_or_default());
    let dragging = RwSignal::new(false);
    let paper_ref = NodeRef::<html::Div>::new();

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            let Some(element) = paper_ref.get() else {
                return;
            };
            ev.prevent_default();
            if let Err(err) = element.set_pointer_capture(ev.pointer_id()) {
                leptos::logging::warn!("pointer capture failed: {:?}", err);
            }

            let origin = Point::new(element.offset_left() as f64, element.offset_top() as f64);
            let pointer = Point::new(ev.client_x() as f64, ev.client_y() as f64);
            let raised = paper.try_update_value(|p| {
                stack
                    .try_update_value(|s| p.pointer_down(s, ev.pointer_id(), pointer, origin))
                    .unwrap_or_default()
            });
            if let Some(z) = raised {
                z_index.set(z);
            }
            dragging.set(true);
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (ev, paper_ref);
        }
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::desk::Size;

            if !paper.with_value(|p| p.is_dragging()) {
                return;
            }
            let (Some(element), Some(desk)) = (paper_ref.get(), desk_ref.get()) else {
                return;
            };
            let paper_size = Size {
                width: element.offset_width() as f64,
                height: element.offset_height() as f64,
            };
            let desk_size = Size {
                width: desk.client_width() as f64,
                height: desk.client_height() as f64,
            };
            let pointer = Point::new(ev.client_x() as f64, ev.client_y() as f64);

            if let Some(next) = paper
                .try_update_value(|p| p.pointer_move(pointer, paper_size, desk_size))
                .flatten()
            {
                position.set(Some(next));
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (ev, desk_ref);
        }
    };

    let on_pointer_up = move |ev: leptos::ev::PointerEvent| {
        dragging.set(false);
        let target = paper
            .try_update_value(|p| p.pointer_up().map(str::to_string))
            .flatten();

        #[cfg(not(feature = "ssr"))]
        {
            if let Some(element) = paper_ref.get() {
                let _ = element.release_pointer_capture(ev.pointer_id());
            }
            if let Some(href) = target {
                crate::ui::dom::navigate(&href);
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (ev, target);
        }
    };

    let on_pointer_cancel = move |_| {
        dragging.set(false);
        paper.update_value(|p| p.pointer_cancel());
    };

    let on_key_down = move |ev: leptos::ev::KeyboardEvent| {
        let target = paper.with_value(|p| p.key_down(&ev.key()).map(str::to_string));
        if let Some(href) = target {
            ev.prevent_default();
            #[cfg(not(feature = "ssr"))]
            crate::ui::dom::navigate(&href);
            #[cfg(feature = "ssr")]
            let _ = href;
        }
    };

    let style = move || match position.get() {
        Some(p) => format!("left: {:.0}px; top: {:.0}px; z-index: {};", p.x, p.y, z_index.get()),
        None => format!(
            "left: {}%; top: {}%; z-index: {};",
            left_percent,
            top_percent,
            z_index.get()
        ),
    };

    view! {
        <div
            class="paper"
            class:dragging=move || dragging.get()
            class:has-link=link.is_some()
            node_ref=paper_ref
            style=style
            tabindex="0"
            role=if link.is_some() { "link" } else { "group" }
            aria-label=title
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
            on:keydown=on_key_down
        >
            <span class="paper-title">{title}</span>
        </div>
    }
}
