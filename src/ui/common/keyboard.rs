//! Keyboard shortcut hint strip

use leptos::prelude::*;

/// One shortcut: the key label and what it does
#[derive(Clone, Copy, Debug)]
pub struct KeyboardHint {
    /// Key label (e.g. "←", "Esc")
    pub key: &'static str,
    /// What the key does (e.g. "previous project")
    pub action: &'static str,
}

impl KeyboardHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Row of shortcut hints
#[component]
pub fn KeyboardHints(
    hints: &'static [KeyboardHint],
    #[prop(default = "Keyboard shortcuts")] label: &'static str,
) -> impl IntoView {
    view! {
        <ul class="kbd-hints" aria-label=label>
            {hints
                .iter()
                .map(|hint| {
                    view! {
                        <li class="kbd-hint">
                            <Kbd key=hint.key />
                            <span class="kbd-action">{hint.action}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Single key cap
#[component]
pub fn Kbd(key: &'static str) -> impl IntoView {
    view! { <kbd class="kbd">{key}</kbd> }
}
