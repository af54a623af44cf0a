//! Login page: username + password, establishing the Basic-auth session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::context::SharedContext;
use crate::net::credential::{MSG_USERNAME_COLON, is_basic_username};
use crate::net::error::ApiError;
use crate::net::types::LoginRequest;
use crate::router::routes::{APP_TITLE, DEFAULT_HOME, REGISTER_PATH};

/// Trim the username and require both fields; the username may not hold `:`.
///
/// # Errors
///
/// Returns the message to show when a field is blank.
pub fn validate_login(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    if !is_basic_username(username) {
        return Err(MSG_USERNAME_COLON);
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let shared = expect_context::<SharedContext>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login(&username.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());
        let ctx = shared.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match ctx.session.login(&ctx.api, request).await {
                Ok(user) => {
                    leptos::logging::log!("logged in as {}", user.username);
                    password.set(String::new());
                    info.set(String::new());
                    navigate(DEFAULT_HOME, NavigateOptions::default());
                }
                Err(ApiError::Validation(message)) => info.set(message),
                // The HTTP layer has already shown a notice.
                Err(_) => info.set(String::new()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{APP_TITLE}</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account? "
                    <A href=REGISTER_PATH>"Register"</A>
                </p>
            </div>
        </div>
    }
}
