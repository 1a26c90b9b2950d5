use leptos::prelude::*;

/// Tab button definition
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TabItem {
    /// Identifier passed to `on_change`
    pub id: &'static str,
    pub label: &'static str,
    /// Secondary line under the label
    pub caption: Option<&'static str>,
}

impl TabItem {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            caption: None,
        }
    }

    pub const fn with_caption(mut self, caption: &'static str) -> Self {
        self.caption = Some(caption);
        self
    }
}

/// Row of toggle buttons of which exactly one is pressed
#[component]
pub fn Tabs(
    tabs: Vec<TabItem>,
    /// Currently active tab ID
    active_tab: Signal<&'static str>,
    /// Called with the id of the pressed tab
    on_change: Callback<&'static str>,
    /// Accessible name of the group
    label: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("tabs-list {}", class) role="group" aria-label=label>
            {tabs
                .into_iter()
                .map(|tab| {
                    let is_active = move || active_tab.get() == tab.id;
                    view! {
                        <button
                            type="button"
                            class="tab-item"
                            class:tab-active=is_active
                            aria-pressed=move || is_active().to_string()
                            on:click=move |_| on_change.run(tab.id)
                        >
                            {tab.caption.map(|caption| view! { <span class="tab-caption">{caption}</span> })}
                            <span class="tab-label">{tab.label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_item_caption() {
        let plain = TabItem::new("employers", "Hiring teams");
        assert_eq!(plain.caption, None);

        let captioned = plain.with_caption("Employers");
        assert_eq!(captioned.id, "employers");
        assert_eq!(captioned.label, "Hiring teams");
        assert_eq!(captioned.caption, Some("Employers"));
    }
}
