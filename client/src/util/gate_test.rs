use super::*;

#[test]
fn loaded_outcome_is_ready() {
    let state = Load::from_outcome(GateOutcome::Loaded(vec![1, 2])).unwrap();
    assert_eq!(state.ready(), Some(&vec![1, 2]));
    assert!(state.failure().is_none());
}

#[test]
fn failed_outcome_keeps_message_inline() {
    let state = Load::<()>::from_outcome(GateOutcome::Failed { message: "boom".into() }).unwrap();
    assert_eq!(state.failure(), Some("boom"));
    assert!(state.ready().is_none());
}

#[test]
fn redirect_outcome_yields_location() {
    assert_eq!(Load::<()>::from_outcome(GateOutcome::Redirect("/")), Err("/"));
}

#[test]
fn loading_has_neither_value_nor_failure() {
    let state = Load::<u8>::Loading;
    assert!(state.ready().is_none());
    assert!(state.failure().is_none());
}
