//! Sound preference for the scripted transition
//!
//! Provides:
//! - MuteContext for reactive mute state
//! - LocalStorage persistence under the `athena-muted` key
//! - MuteToggle button

use leptos::prelude::*;

use crate::core::sequence::MutePreference;
use crate::ui::icon::{Icon, icons};

/// Mute context shared by the toggle and the sequence player
#[derive(Clone, Copy)]
pub struct MuteContext {
    pub preference: RwSignal<MutePreference>,
}

impl MuteContext {
    /// Flip the preference and persist it
    pub fn toggle(&self) {
        self.preference.update(|pref| *pref = pref.toggled());
        persist_preference(self.preference.get_untracked());
    }
}

fn persist_preference(preference: MutePreference) {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::sequence::MUTE_STORAGE_KEY;

        match crate::ui::dom::local_storage() {
            Some(storage) => {
                if let Err(err) = storage.set_item(MUTE_STORAGE_KEY, preference.as_stored()) {
                    leptos::logging::warn!("could not save mute preference: {:?}", err);
                }
            }
            None => leptos::logging::warn!("localStorage unavailable, mute preference not saved"),
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = preference;
    }
}

#[cfg(not(feature = "ssr"))]
fn load_persisted_preference() -> MutePreference {
    use crate::core::sequence::MUTE_STORAGE_KEY;

    let stored = crate::ui::dom::local_storage()
        .and_then(|storage| storage.get_item(MUTE_STORAGE_KEY).ok().flatten());
    MutePreference::from_stored(stored.as_deref())
}

/// Provide mute context to the page
pub fn provide_mute_context() -> MuteContext {
    let ctx = MuteContext {
        preference: RwSignal::new(MutePreference::default()),
    };

    // The server can't see storage, so the stored value is read after hydration
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        ctx.preference.set(load_persisted_preference());
    });

    provide_context(ctx);

    ctx
}

/// Use mute context from anywhere below the page
pub fn use_mute_context() -> MuteContext {
    use_context::<MuteContext>().unwrap_or_else(provide_mute_context)
}

#[component]
pub fn MuteToggle() -> impl IntoView {
    let mute = use_mute_context();
    let muted = move || mute.preference.get().muted;

    view! {
        <button
            type="button"
            class="mute-toggle"
            aria-pressed=move || muted().to_string()
            aria-label=move || if muted() { "Unmute sound" } else { "Mute sound" }
            on:click=move |_| mute.toggle()
        >
            {move || {
                if muted() {
                    view! { <Icon name=icons::VOLUME_OFF class="icon" /> }
                } else {
                    view! { <Icon name=icons::VOLUME class="icon" /> }
                }
            }}
            <span class="mute-label">{move || if muted() { "Sound off" } else { "Sound on" }}</span>
        </button>
    }
}
