//! Router-side glue: the guard gate around the routes and the watcher that
//! performs redirects requested from non-component code.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every location change runs `router::guard::evaluate` before the routes
//! render. Evaluation is async (it may fetch the profile), so a stale result
//! for a path the user already left is discarded.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::context::SharedContext;
use crate::router::guard;
use crate::router::navigator::PendingRedirect;
use crate::router::routes;
use crate::util::generation::Generation;

/// Render `children` only once the guard allows the current path.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let shared = expect_context::<SharedContext>();
    let location = use_location();
    let navigate = use_navigate();
    let cleared = RwSignal::new(None::<String>);
    let generation = StoredValue::new(Generation::default());

    Effect::new(move || {
        let path = location.pathname.get();
        let navigate = navigate.clone();
        if let Some(target) = routes::redirect_for(&path) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
            return;
        }
        let ticket = generation.try_update_value(Generation::next).unwrap_or_default();
        let api = shared.get_value().api;
        leptos::task::spawn_local(async move {
            let outcome = guard::evaluate(&api, &path).await;
            if !generation.get_value().is_current(ticket) {
                return;
            }
            match outcome.redirect_path() {
                None => cleared.set(Some(path)),
                Some(target) => navigate(target, NavigateOptions::default()),
            }
        });
    });

    let allowed = move || {
        let current = location.pathname.get();
        cleared.with(|path| {
            path.as_deref()
                .is_some_and(|p| routes::normalize_path(p) == routes::normalize_path(&current))
        })
    };

    view! {
        <Title text=move || routes::page_title(&location.pathname.get())/>
        <Show when=allowed fallback=|| view! { <div class="route-pending"></div> }>
            {children()}
        </Show>
    }
}

/// Apply redirects queued through the `Navigator` seam (e.g. after a 401).
#[component]
pub fn RedirectWatcher(redirect: RwSignal<PendingRedirect>) -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = redirect.get().path {
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
