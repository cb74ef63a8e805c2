use super::*;

// =============================================================
// RemoteState transitions
// =============================================================

#[test]
fn default_state_is_idle_and_empty() {
    let state = RemoteState::<String>::default();
    assert_eq!(state.phase, Phase::Idle);
    assert!(state.value.is_none());
    assert!(state.error.is_none());
    assert!(!state.is_pending());
}

#[test]
fn begin_enters_pending_and_clears_prior_error() {
    let mut state = RemoteState::<String>::default();
    state.reject(FetchError::Status(500));
    state.begin(false);
    assert_eq!(state.phase, Phase::Pending);
    assert!(state.is_pending());
    assert!(state.error.is_none());
}

#[test]
fn begin_retains_value_unless_told_to_clear() {
    let mut state = RemoteState::default();
    state.fulfill("first".to_owned());

    state.begin(false);
    assert_eq!(state.value.as_deref(), Some("first"));

    state.begin(true);
    assert!(state.value.is_none());
}

#[test]
fn fulfill_replaces_value_and_clears_error() {
    let mut state = RemoteState::default();
    state.begin(false);
    state.fulfill("result".to_owned());
    assert_eq!(state.phase, Phase::Fulfilled);
    assert_eq!(state.value.as_deref(), Some("result"));
    assert!(state.error.is_none());
}

#[test]
fn reject_keeps_prior_value_visible() {
    let mut state = RemoteState::default();
    state.fulfill("kept".to_owned());
    state.begin(false);
    state.reject(FetchError::Transport("refused".to_owned()));
    assert_eq!(state.phase, Phase::Rejected);
    assert_eq!(state.value.as_deref(), Some("kept"));
    assert_eq!(
        state.error,
        Some(FetchError::Transport("refused".to_owned()))
    );
}

#[test]
fn pending_spans_exactly_begin_to_settlement() {
    let mut state = RemoteState::<String>::default();
    assert!(!state.is_pending());
    state.begin(false);
    assert!(state.is_pending());
    state.fulfill("done".to_owned());
    assert!(!state.is_pending());
    state.begin(false);
    assert!(state.is_pending());
    state.reject(FetchError::Status(502));
    assert!(!state.is_pending());
}

// =============================================================
// Dispatch gating
// =============================================================

#[test]
fn second_dispatch_while_pending_is_refused() {
    let action: RemoteAction<u32, String> =
        RemoteAction::new(|n: u32| async move { Ok(n.to_string()) });

    assert!(action.dispatch(1), "idle action accepts a dispatch");
    assert!(action.state().with_untracked(RemoteState::is_pending));
    assert!(
        !action.dispatch(2),
        "in-flight round refuses a second dispatch"
    );
}

#[test]
fn dispatch_clears_value_only_when_opted_in() {
    let retaining: RemoteAction<(), String> =
        RemoteAction::new(|()| async { Ok("x".to_owned()) });
    retaining.state().update(|s| s.fulfill("kept".to_owned()));
    retaining.dispatch(());
    assert_eq!(
        retaining.state().with_untracked(|s| s.value.clone()),
        Some("kept".to_owned())
    );

    let clearing: RemoteAction<(), String> =
        RemoteAction::new(|()| async { Ok("x".to_owned()) }).clear_value_on_dispatch();
    clearing.state().update(|s| s.fulfill("gone".to_owned()));
    clearing.dispatch(());
    assert_eq!(clearing.state().with_untracked(|s| s.value.clone()), None);
}

// =============================================================
// Settlement guard
// =============================================================

#[test]
fn settlement_applies_only_when_alive_and_current() {
    assert!(should_apply(true, 3, 3));
    assert!(!should_apply(false, 3, 3), "unmounted owner discards");
    assert!(!should_apply(true, 4, 3), "superseded round discards");
}
