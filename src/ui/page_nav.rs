//! Previous/next navigation between the pages of a group
//!
//! Arrow keys, Home/Escape and horizontal swipes all resolve through
//! [`PageNavigator`]; every navigation fades the page out first.

use leptos::prelude::*;

use crate::core::navigation::{NavAction, PageGroup, PageNavigator};
use crate::ui::common::{KeyboardHint, KeyboardHints};
use crate::ui::icon::{Icon, icons};

const NAV_HINTS: &[KeyboardHint] = &[
    KeyboardHint::new("\u{2190}", "previous"),
    KeyboardHint::new("\u{2192}", "next"),
    KeyboardHint::new("Esc", "home"),
];

/// Fade out and leave for the page `action` points at, if any
fn go(navigator: PageNavigator, action: NavAction) {
    let Some(href) = navigator.target(action) else {
        return;
    };
    #[cfg(not(feature = "ssr"))]
    crate::ui::dom::navigate_with_fade(href, navigator.group().fade);
    #[cfg(feature = "ssr")]
    let _ = href;
}

#[component]
pub fn PageNav(group: PageGroup, path: String) -> impl IntoView {
    let navigator = PageNavigator::new(group, &path);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::dom::{Listener, hold};

        hold(Listener::new(window_event_listener(leptos::ev::keydown, move |ev| {
            if let Some(action) = NavAction::from_key(&ev.key()) {
                ev.prevent_default();
                go(navigator, action);
            }
        })));

        let swipe_start = StoredValue::new(None::<f64>);

        hold(Listener::new(window_event_listener(leptos::ev::touchstart, move |ev| {
            let start = ev.changed_touches().get(0).map(|t| t.client_x() as f64);
            swipe_start.set_value(start);
        })));

        hold(Listener::new(window_event_listener(leptos::ev::touchend, move |ev| {
            let start = swipe_start.with_value(|start| *start);
            swipe_start.set_value(None);
            let end = ev.changed_touches().get(0).map(|t| t.client_x() as f64);

            if let (Some(start), Some(end)) = (start, end) {
                if let Some(action) = NavAction::from_swipe(start, end) {
                    go(navigator, action);
                }
            }
        })));
    }

    let link = move |action: NavAction| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            go(navigator, action);
        }
    };

    let position = navigator
        .current_index()
        .map(|index| format!("{} / {}", index + 1, group.pages.len()));

    view! {
        <nav class="page-nav" aria-label="Project navigation">
            {navigator.previous_page().map(|page| {
                view! {
                    <a href=group.href(page) class="page-nav-link prev" rel="prev" on:click=link(NavAction::Previous)>
                        <Icon name=icons::CHEVRON_LEFT />
                        <span>"Previous"</span>
                    </a>
                }
            })}
            <a href=group.landing class="page-nav-link home" on:click=link(NavAction::Landing)>
                <Icon name=icons::HOME />
                <span>"Home"</span>
            </a>
            {position.map(|text| view! { <span class="page-nav-position">{text}</span> })}
            {navigator.next_page().map(|page| {
                view! {
                    <a href=group.href(page) class="page-nav-link next" rel="next" on:click=link(NavAction::Next)>
                        <span>"Next"</span>
                        <Icon name=icons::CHEVRON_RIGHT />
                    </a>
                }
            })}
            <KeyboardHints hints=NAV_HINTS label="Navigation shortcuts" />
        </nav>
    }
}
