//! Email signup form posting to the capture endpoint

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ui::icon::{Icon, icons};

/// Path of the capture endpoint
pub const SIGNUP_ENDPOINT: &str = "/api/submit-email";

#[cfg_attr(feature = "ssr", allow(dead_code))]
#[derive(Serialize)]
struct SignupBody {
    email: String,
}

/// Either shape the endpoint answers with
#[cfg_attr(feature = "ssr", allow(dead_code))]
#[derive(Deserialize, Default)]
struct SignupReply {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone, PartialEq)]
enum FormStatus {
    Idle,
    Sending,
    Sent(String),
    Failed(String),
}

#[cfg(not(feature = "ssr"))]
async fn submit(email: String) -> Result<String, String> {
    use gloo_net::http::Request;

    let request = Request::post(SIGNUP_ENDPOINT)
        .header("Content-Type", "application/json")
        .json(&SignupBody { email })
        .map_err(|_| "Failed to send request".to_string())?;

    let response = request
        .send()
        .await
        .map_err(|_| "Network error. Please try again.".to_string())?;

    let ok = response.ok();
    let reply = response.json::<SignupReply>().await.unwrap_or_default();

    if ok {
        Ok(reply.message.unwrap_or_else(|| "Thanks for signing up!".to_string()))
    } else {
        Err(reply.error.unwrap_or_else(|| "Signup failed. Please try again.".to_string()))
    }
}

#[component]
pub fn SignupForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let value = email.get_untracked().trim().to_string();
        if !value.contains('@') {
            status.set(FormStatus::Failed("Valid email required".to_string()));
            return;
        }
        status.set(FormStatus::Sending);

        #[cfg(not(feature = "ssr"))]
        leptos::task::spawn_local(async move {
            match submit(value).await {
                Ok(message) => {
                    email.set(String::new());
                    status.set(FormStatus::Sent(message));
                }
                Err(message) => status.set(FormStatus::Failed(message)),
            }
        });
        #[cfg(feature = "ssr")]
        let _ = value;
    };

    view! {
        <form class="signup" on:submit=on_submit novalidate>
            <label for="signup-email" class="signup-label">
                "Get the Digital Safety Playbook"
            </label>
            <div class="signup-row">
                <Icon name=icons::MAIL />
                <input
                    id="signup-email"
                    type="email"
                    name="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="signup-submit"
                    disabled=move || status.get() == FormStatus::Sending
                >
                    {move || if status.get() == FormStatus::Sending { "Sending\u{2026}" } else { "Send it" }}
                </button>
            </div>
            <p class="signup-status" role="status">
                {move || match status.get() {
                    FormStatus::Idle | FormStatus::Sending => String::new(),
                    FormStatus::Sent(message) | FormStatus::Failed(message) => message,
                }}
            </p>
        </form>
    }
}
