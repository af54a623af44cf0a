use super::*;

#[test]
fn each_level_has_its_own_modifier() {
    assert_eq!(notice_class(NoticeLevel::Info), "notice notice--info");
    assert_eq!(notice_class(NoticeLevel::Warning), "notice notice--warning");
    assert_eq!(notice_class(NoticeLevel::Error), "notice notice--error");
}
