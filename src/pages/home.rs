//! Authenticated shell: header, role-filtered navigation, unread badge and
//! the outlet for the `/home/*` sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable after the guard allowed the path, so a profile is present.
//! Losing the identity while mounted (logout, 401) sends the user to login.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;

use crate::context::{SharedContext, UiSignals};
use crate::router::routes::{APP_TITLE, DEFAULT_HOME, menu_for};
use crate::state::notices::Notice;
use crate::util::auth::{install_logout_redirect, role_label};

/// `(path, label)` pairs of the menu for `role`.
#[must_use]
pub fn nav_links(role: &str) -> Vec<(&'static str, &'static str)> {
    menu_for(role)
        .map(|entry| (entry.path, entry.meta.title.unwrap_or(entry.name)))
        .collect()
}

/// Badge text; large counts are capped.
#[must_use]
pub fn badge_text(unread: u64) -> Option<String> {
    match unread {
        0 => None,
        1..=99 => Some(unread.to_string()),
        _ => Some("99+".to_owned()),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let shared = expect_context::<SharedContext>();
    let ui = expect_context::<UiSignals>();
    install_logout_redirect(ui.session, use_navigate());

    leptos::task::spawn_local(async move {
        let ctx = shared.get_value();
        ctx.notifications.fetch_unread_count(&ctx.api).await;
    });

    let on_logout = move |_| shared.with_value(|ctx| ctx.session.logout());
    let on_mark_all = move |_| {
        let ctx = shared.get_value();
        leptos::task::spawn_local(async move {
            if ctx.notifications.mark_all_as_read(&ctx.api).await {
                ctx.api.notifier().notify(Notice::info("All notifications marked as read."));
            }
        });
    };

    let role = move || ui.session.with(|s| s.role.clone());
    let user_name = move || {
        ui.session
            .with(|s| s.profile.as_ref().map(|p| p.display_name().to_owned()))
            .unwrap_or_default()
    };

    view! {
        <div class="home">
            <header class="home__header">
                <span class="home__brand">{APP_TITLE}</span>
                <span class="home__user">
                    {user_name}
                    <span class="home__role">{move || role_label(&role())}</span>
                </span>
                <A href=DEFAULT_HOME attr:class="home__inbox">
                    "Notifications"
                    {move || badge_text(ui.unread.get()).map(|text| view! { <span class="home__badge">{text}</span> })}
                </A>
                <button class="home__action" on:click=on_mark_all>"Mark all read"</button>
                <button class="home__action" on:click=on_logout>"Log out"</button>
            </header>
            <nav class="home__nav">
                <For
                    each=move || nav_links(&role())
                    key=|(path, _)| *path
                    children=|(path, label)| view! { <A href=path>{label}</A> }
                />
            </nav>
            <main class="home__content">
                <Outlet/>
            </main>
        </div>
    }
}

/// `/home` with no section selected.
#[component]
pub fn HomeIndex() -> impl IntoView {
    let ui = expect_context::<UiSignals>();
    view! {
        <section class="section">
            <h2>"Welcome"</h2>
            <p>
                {move || ui.session.with(|s| s.profile.as_ref().map(|p| p.display_name().to_owned())).unwrap_or_default()}
                ", pick a section from the menu."
            </p>
        </section>
    }
}
