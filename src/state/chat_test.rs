use super::*;

// =============================================================
// Seeding
// =============================================================

#[test]
fn seeded_transcript_holds_only_the_greeting() {
    let state = ChatState::seeded(1000.0);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].text, GREETING);
    assert_eq!(state.messages[0].sender, Sender::Bot);
    assert!(!state.is_pending());
}

// =============================================================
// Round reducer
// =============================================================

#[test]
fn begin_round_appends_user_message_and_goes_pending() {
    let mut state = ChatState::seeded(1000.0);
    assert!(state.begin_round("When should I sow wheat?", 2000.0));
    assert!(state.is_pending());
    let last = state.messages.last().expect("user message");
    assert_eq!(last.sender, Sender::User);
    assert_eq!(last.text, "When should I sow wheat?");
    assert_eq!(last.id, "2000");
}

#[test]
fn blank_input_never_opens_a_round() {
    let mut state = ChatState::seeded(1000.0);
    assert!(!state.begin_round("   ", 2000.0));
    assert_eq!(state.messages.len(), 1);
    assert!(!state.is_pending());
}

#[test]
fn pending_round_gates_resubmission() {
    let mut state = ChatState::seeded(1000.0);
    assert!(state.begin_round("first", 2000.0));
    assert!(!state.begin_round("second", 3000.0));
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn fulfill_round_appends_bot_reply() {
    let mut state = ChatState::seeded(1000.0);
    state.begin_round("question", 2000.0);
    state.fulfill_round(Some("Plant in early November."), 2500.0);
    assert!(!state.is_pending());
    let last = state.messages.last().expect("bot message");
    assert_eq!(last.sender, Sender::Bot);
    assert_eq!(last.text, "Plant in early November.");
    assert_eq!(last.id, "2501");
}

#[test]
fn fulfill_round_without_reply_uses_canned_fallback() {
    let mut state = ChatState::seeded(1000.0);
    state.begin_round("question", 2000.0);
    state.fulfill_round(None, 2500.0);
    assert_eq!(state.messages.last().expect("bot message").text, FALLBACK_REPLY);
}

#[test]
fn reject_round_appends_canned_apology() {
    let mut state = ChatState::seeded(1000.0);
    state.begin_round("question", 2000.0);
    state.reject_round(2500.0);
    assert!(!state.is_pending());
    assert_eq!(state.messages.last().expect("bot message").text, APOLOGY);
}

#[test]
fn n_rounds_leave_one_plus_two_n_messages_in_order() {
    let mut state = ChatState::seeded(0.0);
    for i in 0..4u32 {
        let ts = f64::from(1000 * (i + 1));
        assert!(state.begin_round(&format!("q{i}"), ts));
        if i % 2 == 0 {
            state.fulfill_round(Some("answer"), ts + 100.0);
        } else {
            state.reject_round(ts + 100.0);
        }
    }
    assert_eq!(state.messages.len(), 1 + 2 * 4);
    let senders: Vec<_> = state.messages.iter().map(|m| m.sender).collect();
    assert_eq!(senders[0], Sender::Bot);
    for round in 0..4 {
        assert_eq!(senders[1 + round * 2], Sender::User);
        assert_eq!(senders[2 + round * 2], Sender::Bot);
    }
}
