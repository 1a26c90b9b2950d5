use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name under /icons, without the .svg extension
    name: &'static str,
    /// CSS classes for sizing
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

/// Icons shipped in public/icons
pub mod icons {
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const HOME: &str = "home";
    pub const VOLUME: &str = "volume";
    pub const VOLUME_OFF: &str = "volume-off";
    pub const MAIL: &str = "mail";
}
