use super::*;

#[test]
fn adding_requires_filled_steps() {
    assert!(can_add_step(&[]));
    assert!(can_add_step(&["Open the ticket".into()]));
    assert!(!can_add_step(&["Open the ticket".into(), "  ".into()]));
}

#[test]
fn removing_keeps_order() {
    let mut steps = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
    remove_step(&mut steps, 1);
    assert_eq!(steps, ["a", "c"]);
}

#[test]
fn removing_last_step_leaves_blank_input() {
    let mut steps = vec!["only".to_owned()];
    remove_step(&mut steps, 0);
    assert_eq!(steps, [""]);
}

#[test]
fn out_of_range_remove_is_ignored() {
    let mut steps = vec!["a".to_owned()];
    remove_step(&mut steps, 5);
    assert_eq!(steps, ["a"]);
}
