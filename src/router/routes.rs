//! Static route table with per-route auth and role metadata.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos router renders views; this table is what the guard, the page
//! title and the home navigation menu consult. Paths are absolute and may
//! contain `:param` segments that match any single non-empty segment.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::roles;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const HOME_PATH: &str = "/home";
/// Where `/` lands.
pub const DEFAULT_HOME: &str = "/home/my-notifications";
pub const APP_TITLE: &str = "Library Management System";

pub const ADMIN_ROLES: &[&str] = &[roles::SYSTEM_ADMIN, roles::BRANCH_ADMIN];
pub const SYSTEM_ADMIN_ONLY: &[&str] = &[roles::SYSTEM_ADMIN];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteView {
    Login,
    Register,
    HomeIndex,
    BookQuery,
    BookDetail,
    UserManagement,
    NotificationManagement,
    BookManagement,
    BorrowManagement,
    BorrowRecords,
    MyReservations,
    MyFines,
    MyNotifications,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    pub title: Option<&'static str>,
    pub requires_auth: bool,
    /// Empty means any authenticated role.
    pub require_role: &'static [&'static str],
    /// Listed in the home navigation menu.
    pub in_menu: bool,
}

impl RouteMeta {
    /// A role restriction implies authentication even without `requires_auth`.
    #[must_use]
    pub fn needs_auth(&self) -> bool {
        self.requires_auth || !self.require_role.is_empty()
    }

    #[must_use]
    pub fn allows_role(&self, role: &str) -> bool {
        self.require_role.is_empty() || self.require_role.contains(&role)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub view: RouteView,
    pub meta: RouteMeta,
}

const fn public(path: &'static str, name: &'static str, view: RouteView, title: &'static str) -> RouteEntry {
    RouteEntry {
        path,
        name,
        view,
        meta: RouteMeta { title: Some(title), requires_auth: false, require_role: &[], in_menu: false },
    }
}

const fn home(
    path: &'static str,
    name: &'static str,
    view: RouteView,
    title: &'static str,
    require_role: &'static [&'static str],
) -> RouteEntry {
    RouteEntry {
        path,
        name,
        view,
        meta: RouteMeta { title: Some(title), requires_auth: true, require_role, in_menu: true },
    }
}

pub static ROUTES: &[RouteEntry] = &[
    public(LOGIN_PATH, "Login", RouteView::Login, "Sign in"),
    public(REGISTER_PATH, "Register", RouteView::Register, "Register"),
    RouteEntry {
        path: HOME_PATH,
        name: "Home",
        view: RouteView::HomeIndex,
        meta: RouteMeta { title: None, requires_auth: true, require_role: &[], in_menu: false },
    },
    home("/home/book-query", "BookQuery", RouteView::BookQuery, "Book search", &[]),
    RouteEntry {
        path: "/home/book-detail/:id",
        name: "BookDetail",
        view: RouteView::BookDetail,
        meta: RouteMeta { title: Some("Book details"), requires_auth: true, require_role: &[], in_menu: false },
    },
    home("/home/user-management", "UserManagement", RouteView::UserManagement, "User management", ADMIN_ROLES),
    home(
        "/home/notification-management",
        "NotificationManagement",
        RouteView::NotificationManagement,
        "Notification management",
        SYSTEM_ADMIN_ONLY,
    ),
    home("/home/book-management", "BookManagement", RouteView::BookManagement, "Book management", ADMIN_ROLES),
    home(
        "/home/borrow-management",
        "BorrowManagement",
        RouteView::BorrowManagement,
        "Borrow management",
        ADMIN_ROLES,
    ),
    home("/home/borrow-records", "BorrowRecords", RouteView::BorrowRecords, "Borrow records", &[]),
    home("/home/my-reservations", "MyReservations", RouteView::MyReservations, "My reservations", &[]),
    home("/home/my-fines", "MyFines", RouteView::MyFines, "My fines", &[]),
    home("/home/my-notifications", "MyNotifications", RouteView::MyNotifications, "My notifications", &[]),
];

/// Drop query, fragment and trailing slashes. The empty path becomes `/`.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Redirect applied before guarding: `/` goes to the default home page.
#[must_use]
pub fn redirect_for(path: &str) -> Option<&'static str> {
    (normalize_path(path) == "/").then_some(DEFAULT_HOME)
}

#[must_use]
pub fn find_route(path: &str) -> Option<&'static RouteEntry> {
    let path = normalize_path(path);
    ROUTES.iter().find(|entry| pattern_matches(entry.path, path))
}

#[must_use]
pub fn find_by_view(view: RouteView) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|entry| entry.view == view)
}

/// Document title for a path, e.g. `"My fines - Library Management System"`.
#[must_use]
pub fn page_title(path: &str) -> String {
    match find_route(path).and_then(|entry| entry.meta.title) {
        Some(title) => format!("{title} - {APP_TITLE}"),
        None => APP_TITLE.to_owned(),
    }
}

/// Home menu entries visible to `role`, in table order.
pub fn menu_for(role: &str) -> impl Iterator<Item = &'static RouteEntry> + '_ {
    ROUTES
        .iter()
        .filter(move |entry| entry.meta.in_menu && entry.meta.allows_role(role))
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(expected), Some(actual)) => {
                let matched = if expected.starts_with(':') { !actual.is_empty() } else { expected == actual };
                if !matched {
                    return false;
                }
            }
            _ => return false,
        }
    }
}
