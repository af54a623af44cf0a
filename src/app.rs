//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::notice_bar::NoticeBar;
use crate::components::route_guard::{RedirectWatcher, RouteGuard};
use crate::config::ClientConfig;
use crate::context::{AppContext, SharedContext, UiSignals};
use crate::pages::home::{HomeIndex, HomePage};
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::section::{BookDetailPage, NotFoundPage, SectionPage};
use crate::router::navigator::PendingRedirect;
use crate::router::routes::RouteView;
use crate::state::notices::NoticeState;

/// Root application component.
///
/// Builds the `AppContext` over the browser transport and storage, provides
/// it together with the reactive mirrors, and mounts the guarded routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notices = RwSignal::new(NoticeState::default());
    let redirect = RwSignal::new(PendingRedirect::default());
    let config = ClientConfig::from_build_env().unwrap_or_else(|err| {
        leptos::logging::warn!("{err}; falling back to default client config");
        ClientConfig::default()
    });

    let ctx = AppContext::browser(config, Rc::new(redirect), Rc::new(notices));
    let ui = UiSignals {
        session: RwSignal::new(ctx.session.snapshot()),
        unread: RwSignal::new(ctx.notifications.unread_count()),
        notices,
    };
    ctx.bind(ui);

    let shared: SharedContext = StoredValue::new_local(ctx);
    on_cleanup(move || shared.with_value(AppContext::teardown));
    provide_context(shared);
    provide_context(ui);

    view! {
        <Router>
            <RedirectWatcher redirect/>
            <NoticeBar/>
            <RouteGuard>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <ParentRoute path=StaticSegment("home") view=HomePage>
                        <Route path=StaticSegment("") view=HomeIndex/>
                        <Route path=StaticSegment("book-query") view=|| section(RouteView::BookQuery)/>
                        <Route path=(StaticSegment("book-detail"), ParamSegment("id")) view=BookDetailPage/>
                        <Route path=StaticSegment("user-management") view=|| section(RouteView::UserManagement)/>
                        <Route
                            path=StaticSegment("notification-management")
                            view=|| section(RouteView::NotificationManagement)
                        />
                        <Route path=StaticSegment("book-management") view=|| section(RouteView::BookManagement)/>
                        <Route path=StaticSegment("borrow-management") view=|| section(RouteView::BorrowManagement)/>
                        <Route path=StaticSegment("borrow-records") view=|| section(RouteView::BorrowRecords)/>
                        <Route path=StaticSegment("my-reservations") view=|| section(RouteView::MyReservations)/>
                        <Route path=StaticSegment("my-fines") view=|| section(RouteView::MyFines)/>
                        <Route path=StaticSegment("my-notifications") view=|| section(RouteView::MyNotifications)/>
                    </ParentRoute>
                </Routes>
            </RouteGuard>
        </Router>
    }
}

fn section(section: RouteView) -> impl IntoView {
    view! { <SectionPage section/> }
}
