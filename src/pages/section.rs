//! Titled views for the `/home/*` business sections.
//!
//! The business screens render from the route table's title; book detail
//! additionally loads the book so deep links can be shared.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::context::SharedContext;
use crate::net::api::books;
use crate::net::types::Book;
use crate::router::routes::{self, DEFAULT_HOME, RouteView};
use crate::util::generation::Generation;

#[must_use]
pub fn section_title(section: RouteView) -> &'static str {
    routes::find_by_view(section)
        .and_then(|entry| entry.meta.title)
        .unwrap_or("Library")
}

/// Availability line for a book, e.g. `"3 of 5 available"`.
#[must_use]
pub fn availability(book: &Book) -> String {
    match (book.available_num, book.total_num) {
        (Some(available), Some(total)) => format!("{available} of {total} available"),
        (Some(available), None) => format!("{available} available"),
        _ => "Availability unknown".to_owned(),
    }
}

#[component]
pub fn SectionPage(section: RouteView) -> impl IntoView {
    view! {
        <section class="section">
            <h2>{section_title(section)}</h2>
        </section>
    }
}

#[component]
pub fn BookDetailPage() -> impl IntoView {
    let shared = expect_context::<SharedContext>();
    let params = use_params_map();
    let book = RwSignal::new(None::<Book>);
    let failed = RwSignal::new(false);
    let generation = StoredValue::new(Generation::default());

    Effect::new(move || {
        let id = params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()));
        let ticket = generation.try_update_value(Generation::next).unwrap_or_default();
        book.set(None);
        let Some(id) = id else {
            failed.set(true);
            return;
        };
        failed.set(false);
        let ctx = shared.get_value();
        leptos::task::spawn_local(async move {
            let result = books::get_book_detail(&ctx.api, id).await;
            if !generation.get_value().is_current(ticket) {
                return;
            }
            match result {
                Ok(found) => book.set(Some(found)),
                Err(_) => failed.set(true),
            }
        });
    });

    view! {
        <section class="section">
            <h2>{section_title(RouteView::BookDetail)}</h2>
            <Show when=move || !failed.get() fallback=|| view! { <p>"This book could not be loaded."</p> }>
                {move || match book.get() {
                    None => view! { <p>"Loading..."</p> }.into_any(),
                    Some(book) => view! {
                        <dl class="book-detail">
                            <dt>"Title"</dt><dd>{book.book_name.clone()}</dd>
                            <dt>"Author"</dt><dd>{book.author.clone().unwrap_or_default()}</dd>
                            <dt>"ISBN"</dt><dd>{book.isbn.clone().unwrap_or_default()}</dd>
                            <dt>"Branch"</dt><dd>{book.branch_name.clone().unwrap_or_default()}</dd>
                            <dt>"Stock"</dt><dd>{availability(&book)}</dd>
                        </dl>
                    }.into_any(),
                }}
            </Show>
        </section>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="section">
            <h2>"Page not found"</h2>
            <A href=DEFAULT_HOME>"Back to notifications"</A>
        </section>
    }
}
