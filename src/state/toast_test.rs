use super::*;

// =============================================================
// Queue behavior
// =============================================================

#[test]
fn push_assigns_monotonic_ids_in_queue_order() {
    let mut state = ToastState::default();
    let a = state.push(Toast::success("one", ""));
    let b = state.push(Toast::destructive("two", ""));
    let c = state.push(Toast::info("three", ""));
    assert!(a < b && b < c);
    let titles: Vec<_> = state.toasts.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["one", "two", "three"]);
}

#[test]
fn dismiss_removes_only_the_targeted_toast() {
    let mut state = ToastState::default();
    let a = state.push(Toast::success("keep", ""));
    let b = state.push(Toast::success("drop", ""));
    state.dismiss(b);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, a);
}

#[test]
fn dismiss_of_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(Toast::info("only", ""));
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = ToastState::default();
    let a = state.push(Toast::info("first", ""));
    state.dismiss(a);
    let b = state.push(Toast::info("second", ""));
    assert!(b > a);
}

// =============================================================
// Constructors
// =============================================================

#[test]
fn constructors_set_severity() {
    assert_eq!(Toast::success("t", "d").severity, ToastSeverity::Success);
    assert_eq!(
        Toast::destructive("t", "d").severity,
        ToastSeverity::Destructive
    );
    assert_eq!(Toast::info("t", "d").severity, ToastSeverity::Info);
}
