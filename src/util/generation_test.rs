use super::*;

#[test]
fn only_the_latest_ticket_is_current() {
    let mut generation = Generation::default();
    let first = generation.next();
    let second = generation.next();

    assert!(!generation.is_current(first));
    assert!(generation.is_current(second));
}

#[test]
fn late_result_for_previous_id_is_discarded() {
    let mut generation = Generation::default();
    let mut shown = None;

    let book_one = generation.next();
    let book_two = generation.next();
    for (ticket, title) in [(book_two, "second"), (book_one, "first")] {
        if generation.is_current(ticket) {
            shown = Some(title);
        }
    }

    assert_eq!(shown, Some("second"));
}
