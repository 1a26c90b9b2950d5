use leptos::prelude::*;

use crate::core::wave::{WaveMode, WaveStyle, scroll_style, time_style, wave_chars};

/// What the characters are currently styled from
#[cfg_attr(feature = "ssr", allow(dead_code))]
#[derive(Clone, Copy, PartialEq)]
enum WavePhase {
    Time(f64),
    Scroll(f64),
}

impl WavePhase {
    fn style(self, index: usize) -> WaveStyle {
        match self {
            WavePhase::Time(ms) => time_style(ms, index),
            WavePhase::Scroll(progress) => scroll_style(progress, index),
        }
    }
}

/// Heading text with a per-character sine wave.
///
/// Honours `prefers-reduced-motion`: while it matches, the text is plain and
/// carries `wave-disabled`. The preference is watched live and every switch
/// tears the running effect down before starting a new one.
#[component]
pub fn WaveText(
    text: &'static str,
    #[prop(optional)] mode: WaveMode,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    // None renders unstyled characters
    let phase = RwSignal::new(None::<WavePhase>);
    let disabled = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::wave::{MAX_SCROLL_PX, REDUCED_MOTION_QUERY, scroll_progress};
        use crate::ui::dom::{FrameLoop, Listener, MediaWatch, hold, scroll_y};

        // Held only for their Drop
        #[allow(dead_code)]
        enum Driver {
            Frames(FrameLoop),
            Scroll(Listener),
        }

        let driver = StoredValue::new_local(None::<Driver>);

        // Server and first client render both animate; the preference is
        // applied once hydrated
        Effect::new(move |_| {
            if let Some(watch) = MediaWatch::new(REDUCED_MOTION_QUERY, move |reduce| disabled.set(reduce)) {
                hold(watch);
            }
        });

        Effect::new(move |_| {
            let reduce = disabled.get();

            // Tear down whatever ran before
            driver.set_value(None);
            phase.set(None);

            if reduce {
                return;
            }

            let next = match mode {
                WaveMode::Time => Driver::Frames(FrameLoop::start(move |time| {
                    phase.set(Some(WavePhase::Time(time)));
                })),
                WaveMode::Scroll => {
                    let update = move || {
                        phase.set(Some(WavePhase::Scroll(scroll_progress(scroll_y(), MAX_SCROLL_PX))));
                    };
                    update();
                    Driver::Scroll(Listener::new(window_event_listener(leptos::ev::scroll, move |_| update())))
                }
            };
            driver.set_value(Some(next));
        });

        on_cleanup(move || {
            let _ = driver.try_set_value(None);
        });
    }

    let characters = move || {
        wave_chars(text)
            .into_iter()
            .enumerate()
            .map(|(index, character)| {
                let style = move || phase.get().map(|phase| phase.style(index));
                view! {
                    <span
                        class="wave-char"
                        aria-hidden="true"
                        style:transform=move || style().map(|s| s.transform()).unwrap_or_default()
                        style:color=move || style().map(|s| s.color()).unwrap_or_default()
                        style:text-shadow=move || style().map(|s| s.text_shadow()).unwrap_or_default()
                    >
                        {character.to_string()}
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <span class=format!("wave-text {}", class) class:wave-disabled=move || disabled.get()>
            {move || {
                if disabled.get() {
                    text.into_any()
                } else {
                    view! {
                        <span class="visually-hidden">{text}</span>
                        {characters()}
                    }
                        .into_any()
                }
            }}
        </span>
    }
}
