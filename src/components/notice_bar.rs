//! Transient notice strip rendered above every page.

#[cfg(test)]
#[path = "notice_bar_test.rs"]
mod notice_bar_test;

use leptos::prelude::*;

use crate::context::UiSignals;
use crate::state::notices::NoticeLevel;

/// How long a notice stays up before it dismisses itself.
pub const NOTICE_TTL_MS: u32 = 4_000;

#[must_use]
pub fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "notice notice--info",
        NoticeLevel::Warning => "notice notice--warning",
        NoticeLevel::Error => "notice notice--error",
    }
}

#[component]
pub fn NoticeBar() -> impl IntoView {
    let notices = expect_context::<UiSignals>().notices;
    let scheduled = StoredValue::new(Vec::<u64>::new());

    Effect::new(move || {
        let ids: Vec<u64> = notices.with(|state| state.entries.iter().map(|(id, _)| *id).collect());
        scheduled.update_value(|seen| seen.retain(|id| ids.contains(id)));
        for id in ids {
            if scheduled.with_value(|seen| seen.contains(&id)) {
                continue;
            }
            scheduled.update_value(|seen| seen.push(id));
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
                notices.update(|state| state.dismiss(id));
            });
        }
    });

    view! {
        <div class="notice-bar" role="status">
            <For
                each=move || notices.get().entries
                key=|(id, _)| *id
                children=move |(id, notice)| {
                    view! {
                        <div class=notice_class(notice.level)>
                            <span class="notice__text">{notice.message}</span>
                            <button
                                class="notice__close"
                                aria-label="Dismiss"
                                on:click=move |_| notices.update(|state| state.dismiss(id))
                            >
                                "x"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
