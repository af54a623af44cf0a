//! Self-registration for students and teachers. Success returns to login;
//! registering never signs the user in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::context::SharedContext;
use crate::net::api::auth;
use crate::net::credential::{MSG_USERNAME_COLON, is_basic_username};
use crate::net::error::ApiError;
use crate::net::types::{RegisterRequest, UserType};
use crate::router::routes::LOGIN_PATH;
use crate::state::notices::Notice;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Raw form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFields {
    pub username: String,
    pub password: String,
    pub confirm: String,
    pub real_name: String,
    pub email: String,
    pub phone: String,
    pub user_type: Option<UserType>,
}

/// Check the form and build the request.
///
/// # Errors
///
/// Returns the first problem found, as a user-facing message.
pub fn validate_registration(fields: &RegisterFields) -> Result<RegisterRequest, &'static str> {
    let username = fields.username.trim();
    let real_name = fields.real_name.trim();
    let email = fields.email.trim();
    let phone = fields.phone.trim();
    if username.is_empty() || real_name.is_empty() || email.is_empty() {
        return Err("Username, name and email are required.");
    }
    if !is_basic_username(username) {
        return Err(MSG_USERNAME_COLON);
    }
    if fields.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if fields.password != fields.confirm {
        return Err("Passwords do not match.");
    }
    if !email.split_once('@').is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.')) {
        return Err("Enter a valid email address.");
    }
    let user_type = match fields.user_type {
        Some(kind) if kind.can_self_register() => kind,
        _ => return Err("Choose student or teacher."),
    };
    Ok(RegisterRequest {
        username: username.to_owned(),
        password: fields.password.clone(),
        real_name: real_name.to_owned(),
        email: email.to_owned(),
        phone: (!phone.is_empty()).then(|| phone.to_owned()),
        user_type,
        branch_id: None,
    })
}

fn parse_user_type(value: &str) -> Option<UserType> {
    match value {
        "STUDENT" => Some(UserType::Student),
        "TEACHER" => Some(UserType::Teacher),
        _ => None,
    }
}

type FieldGet = fn(&RegisterFields) -> &String;
type FieldSet = fn(&mut RegisterFields, String);

fn text_input(
    fields: RwSignal<RegisterFields>,
    label: &'static str,
    kind: &'static str,
    get: FieldGet,
    set: FieldSet,
) -> impl IntoView {
    view! {
        <label class="register-field">
            <span>{label}</span>
            <input
                class="login-input"
                type=kind
                prop:value=move || fields.with(|f| get(f).clone())
                on:input=move |ev| fields.update(|f| set(f, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let shared = expect_context::<SharedContext>();
    let navigate = use_navigate();
    let fields = RwSignal::new(RegisterFields { user_type: Some(UserType::Student), ..RegisterFields::default() });
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match fields.with(validate_registration) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        let ctx = shared.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth::register(&ctx.api, &request).await {
                Ok(user) => {
                    leptos::logging::log!("registered {}", user.username);
                    ctx.api.notifier().notify(Notice::info("Registration successful, please sign in."));
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(ApiError::Validation(message)) => info.set(message),
                Err(_) => info.set(String::new()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <form class="login-form" on:submit=on_submit>
                    {text_input(fields, "Username", "text", |f| &f.username, |f, v| f.username = v)}
                    {text_input(fields, "Password", "password", |f| &f.password, |f, v| f.password = v)}
                    {text_input(fields, "Confirm password", "password", |f| &f.confirm, |f, v| f.confirm = v)}
                    {text_input(fields, "Full name", "text", |f| &f.real_name, |f, v| f.real_name = v)}
                    {text_input(fields, "Email", "email", |f| &f.email, |f, v| f.email = v)}
                    {text_input(fields, "Phone (optional)", "tel", |f| &f.phone, |f, v| f.phone = v)}
                    <label class="register-field">
                        <span>"Account type"</span>
                        <select on:change=move |ev| {
                            let kind = parse_user_type(&event_target_value(&ev));
                            fields.update(|f| f.user_type = kind);
                        }>
                            <option value="STUDENT" selected=true>"Student"</option>
                            <option value="TEACHER">"Teacher"</option>
                        </select>
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <A href=LOGIN_PATH>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
