//! Client-side state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` holds the authenticated identity, `notifications` the unread
//! badge count, and `notices` the transient messages shown to the user. All
//! are single-threaded `Rc` handles shared through `AppContext`.

pub mod notices;
pub mod notifications;
pub mod session;
