//! Wire DTOs for the library backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Timestamps are kept as
//! strings because the backend emits `LocalDateTime` either as ISO text or as
//! a `[y, m, d, h, min, s]` array depending on its Jackson setup; both are
//! normalized to ISO-like text here so views never branch on the shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Backend role names as they appear in `UserProfile.role.name`.
pub mod roles {
    pub const SYSTEM_ADMIN: &str = "ROLE_SYSTEM_ADMIN";
    pub const BRANCH_ADMIN: &str = "ROLE_BRANCH_ADMIN";
    pub const TEACHER: &str = "ROLE_TEACHER";
    pub const STUDENT: &str = "ROLE_STUDENT";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    Student,
    Teacher,
    BranchAdmin,
    SystemAdmin,
}

impl UserType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Teacher => "TEACHER",
            Self::BranchAdmin => "BRANCH_ADMIN",
            Self::SystemAdmin => "SYSTEM_ADMIN",
        }
    }

    /// Only students and teachers may self-register.
    #[must_use]
    pub fn can_self_register(self) -> bool {
        matches!(self, Self::Student | Self::Teacher)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
    Locked,
    Deleted,
}

impl UserStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Locked => "LOCKED",
            Self::Deleted => "DELETED",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BorrowStatus {
    Borrowed,
    Returned,
    Overdue,
}

impl BorrowStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Borrowed => "BORROWED",
            Self::Returned => "RETURNED",
            Self::Overdue => "OVERDUE",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    Ready,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Ready => "READY",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    ReservationAvailable,
    ReservationReminder,
    OverdueReminder,
    SystemNotification,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleInfo {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub system_role: bool,
}

/// The logged-in user as returned by login and `current-user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub real_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub user_type: Option<UserType>,
    pub status: Option<UserStatus>,
    pub role: Option<RoleInfo>,
    pub branch_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub create_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub update_time: Option<String>,
}

impl UserProfile {
    /// Role name (e.g. `ROLE_STUDENT`), or empty when the profile carries none.
    #[must_use]
    pub fn role_name(&self) -> &str {
        self.role.as_ref().map_or("", |role| role.name.as_str())
    }

    /// Real name when present, username otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.real_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub real_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub user_type: UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i64>,
}

/// Create-or-update payload for user management. `id` selects update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub book_id: i64,
    pub book_name: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub category: Option<String>,
    pub branch_id: Option<i64>,
    pub book_type: Option<String>,
    pub total_num: Option<i64>,
    pub available_num: Option<i64>,
    pub status: Option<String>,
    #[serde(default)]
    pub branch_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub create_time: Option<String>,
}

/// Payload for adding or editing a book.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_num: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_num: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Search filters for the book catalogue. Paging is supplied separately.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub book_name: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub category: Option<String>,
    pub branch_id: Option<i64>,
    pub book_type: Option<String>,
    pub status: Option<String>,
}

/// Body of `POST /books/query`. The backend pages this one from 1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub page_num: u32,
    pub page_size: u32,
}

impl BookQuery {
    /// Translate a filter and zero-based page into the one-based body.
    #[must_use]
    pub fn new(filter: &BookFilter, page: PageRequest) -> Self {
        let text = |v: &Option<String>| v.as_ref().map(|s| s.trim().to_owned()).filter(|s| !s.is_empty());
        Self {
            book_name: text(&filter.book_name),
            author: text(&filter.author),
            isbn: text(&filter.isbn),
            category: text(&filter.category),
            branch_id: filter.branch_id,
            book_type: text(&filter.book_type),
            status: text(&filter.status),
            page_num: page.one_based(),
            page_size: page.size,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRecord {
    pub id: i64,
    pub user_id: Option<i64>,
    pub book_id: Option<i64>,
    pub book_name: Option<String>,
    pub author: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub borrow_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub due_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub return_time: Option<String>,
    pub status: Option<BorrowStatus>,
    pub overdue_days: Option<i64>,
    pub branch_id: Option<i64>,
    pub branch_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowCreate {
    pub book_id: i64,
    pub branch_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub user_id: Option<i64>,
    pub book_id: Option<i64>,
    pub book_name: Option<String>,
    pub author: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub reserve_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub expiry_time: Option<String>,
    pub status: Option<ReservationStatus>,
    pub branch_id: Option<i64>,
    pub branch_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fine {
    pub fine_id: i64,
    pub record_id: Option<i64>,
    pub fine_amount: Option<f64>,
    pub pay_status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub pay_time: Option<String>,
    pub book_name: Option<String>,
    pub isbn: Option<String>,
    pub overdue_days: Option<i64>,
    pub branch_name: Option<String>,
}

impl Fine {
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.pay_status.as_deref() == Some("paid")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub user_id: Option<i64>,
    pub title: String,
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<NotificationType>,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub important: bool,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<String>,
}

/// Admin broadcast payload. `user_id: None` targets every user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDraft {
    pub user_id: Option<i64>,
    pub title: String,
    pub content: String,
    pub important: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub branch_id: i64,
    pub branch_name: String,
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub create_time: Option<String>,
}

/// Spring Data page envelope carried in `data` of list endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u64,
    /// Zero-based index of this page.
    #[serde(default)]
    pub number: u64,
    #[serde(default)]
    pub size: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.total_pages == 0 || self.number + 1 >= self.total_pages
    }
}

/// Zero-based paging request used by every list call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

pub const DEFAULT_PAGE_SIZE: u32 = 10;

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: DEFAULT_PAGE_SIZE }
    }
}

impl PageRequest {
    #[must_use]
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size: size.max(1) }
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self { page: self.page.saturating_add(1), ..self }
    }

    /// One-based page number for the few backend bodies that expect it.
    #[must_use]
    pub fn one_based(self) -> u32 {
        self.page.saturating_add(1)
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Array(parts)) => {
            let mut nums = Vec::with_capacity(parts.len());
            for part in &parts {
                let n = part
                    .as_i64()
                    .ok_or_else(|| D::Error::custom("expected integer timestamp component"))?;
                nums.push(n);
            }
            match nums.as_slice() {
                [y, mo, d] => Ok(Some(format!("{y:04}-{mo:02}-{d:02}"))),
                [y, mo, d, h, mi] => Ok(Some(format!("{y:04}-{mo:02}-{d:02}T{h:02}:{mi:02}:00"))),
                [y, mo, d, h, mi, s, ..] => Ok(Some(format!("{y:04}-{mo:02}-{d:02}T{h:02}:{mi:02}:{s:02}"))),
                _ => Err(D::Error::custom("unsupported timestamp array length")),
            }
        }
        Some(_) => Err(D::Error::custom("expected timestamp string or array")),
    }
}
