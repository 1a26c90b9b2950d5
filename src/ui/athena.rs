//! Scripted transition into the Athena project
//!
//! The link runs a short overlay and sound timeline before navigating.
//! Skip (button or Escape) jumps straight to the navigation.

use leptos::prelude::*;

use crate::core::sequence::{Step, TransitionSequence};
use crate::ui::mute::{MuteToggle, use_mute_context};

#[component]
pub fn AthenaPortal(
    /// Where the sequence ends up
    href: &'static str,
    #[prop(default = "Enter Athena's archive")] label: &'static str,
) -> impl IntoView {
    let mute = use_mute_context();
    let overlay = RwSignal::new(false);
    let sequence = StoredValue::new(TransitionSequence::new());

    // Pending cue and navigation timers; replacing the list cancels them
    #[cfg(not(feature = "ssr"))]
    let timers = StoredValue::new_local(Vec::<gloo_timers::callback::Timeout>::new());

    let perform = move |step: Step| {
        if !mute.preference.with_untracked(|pref| pref.allows(step)) {
            return;
        }
        match step {
            Step::Overlay => overlay.set(true),
            Step::Cue(index) => play_cue(index),
            Step::Navigate => {
                #[cfg(not(feature = "ssr"))]
                crate::ui::dom::navigate(href);
            }
        }
    };

    let skip = move || {
        if let Some(step) = sequence.try_update_value(|seq| seq.skip()).flatten() {
            #[cfg(not(feature = "ssr"))]
            timers.set_value(Vec::new());
            perform(step);
        }
    };

    let start = move |ev: leptos::ev::MouseEvent| {
        // Navigation already issued; let the link behave normally
        if sequence.with_value(|seq| seq.is_finished()) {
            return;
        }
        ev.prevent_default();

        let Some(now) = sequence.try_update_value(|seq| seq.arm()) else {
            return;
        };
        // Already armed or finished
        if now.is_empty() {
            return;
        }
        now.into_iter().for_each(perform);

        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::callback::Timeout;

            let pending = sequence.with_value(|seq| seq.pending());
            let scheduled = pending
                .iter()
                .map(|&(offset, _)| {
                    Timeout::new(offset.as_millis() as u32, move || {
                        let due = sequence
                            .try_update_value(|seq| seq.advance(offset))
                            .unwrap_or_default();
                        due.into_iter().for_each(perform);
                    })
                })
                .collect::<Vec<_>>();
            timers.set_value(scheduled);
        }
    };

    #[cfg(not(feature = "ssr"))]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                skip();
            }
        });
        crate::ui::dom::hold(crate::ui::dom::Listener::new(handle));

        // A page restored from the back/forward cache starts over
        let handle = window_event_listener(leptos::ev::pageshow, move |_| {
            timers.set_value(Vec::new());
            sequence.update_value(|seq| seq.reset());
            overlay.set(false);
        });
        crate::ui::dom::hold(crate::ui::dom::Listener::new(handle));

        on_cleanup(move || {
            let _ = timers.try_set_value(Vec::new());
        });
    }

    view! {
        <div class="athena">
            <a href=href class="athena-link" on:click=start>
                {label}
            </a>
            <MuteToggle />
            <div
                class="athena-overlay"
                class:active=move || overlay.get()
                aria-hidden=move || (!overlay.get()).to_string()
            >
                <p class="athena-message">"Opening the archive\u{2026}"</p>
                <button type="button" class="athena-skip" on:click=move |_| skip()>
                    "Skip"
                </button>
            </div>
        </div>
    }
}

/// Start cue `index`; a rejected play() is logged and otherwise ignored
fn play_cue(index: usize) {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::sequence::CUE_SOUNDS;
        use leptos::web_sys::HtmlAudioElement;

        let Some(src) = CUE_SOUNDS.get(index) else {
            return;
        };
        let audio = match HtmlAudioElement::new_with_src(src) {
            Ok(audio) => audio,
            Err(err) => {
                leptos::logging::warn!("could not create audio for {}: {:?}", src, err);
                return;
            }
        };
        match audio.play() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    leptos::logging::warn!("cue {} did not play: {:?}", index, err);
                }
            }),
            Err(err) => leptos::logging::warn!("cue {} did not play: {:?}", index, err),
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = index;
    }
}
