use super::*;
use crate::net::types::roles;

#[test]
fn student_menu_has_personal_sections_only() {
    let links = nav_links(roles::STUDENT);
    assert!(links.contains(&("/home/my-fines", "My fines")));
    assert!(links.iter().all(|(path, _)| !path.contains("management")));
}

#[test]
fn branch_admin_sees_management_but_not_notifications_admin() {
    let paths: Vec<_> = nav_links(roles::BRANCH_ADMIN).into_iter().map(|(p, _)| p).collect();
    assert!(paths.contains(&"/home/user-management"));
    assert!(paths.contains(&"/home/borrow-management"));
    assert!(!paths.contains(&"/home/notification-management"));
}

#[test]
fn badge_is_hidden_at_zero_and_capped() {
    assert_eq!(badge_text(0), None);
    assert_eq!(badge_text(7).as_deref(), Some("7"));
    assert_eq!(badge_text(250).as_deref(), Some("99+"));
}
