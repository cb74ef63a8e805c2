#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Canned greeting seeded into every fresh transcript.
pub const GREETING: &str = "Hello! I'm your AgroPredictor assistant. I can help you with farming \
     questions, crop recommendations, and agricultural best practices. How can I assist you today?";

/// Shown when the service answers but the `response` field is absent.
pub const FALLBACK_REPLY: &str =
    "I apologize, but I'm having trouble processing your request right now.";

/// Appended to the transcript when a round fails outright.
pub const APOLOGY: &str =
    "I'm sorry, but I'm currently unable to process your request. Please try again later.";

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One transcript entry. Ids derive from the submission timestamp, matching
/// the service contract of "monotonic-ish per session".
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: f64,
}

/// Whether a chat round is in flight. One round at a time; the input is
/// disabled while pending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundPhase {
    #[default]
    Idle,
    Pending,
}

/// Append-only chat transcript plus the current round phase.
///
/// This is a plain reducer: `begin_round` appends the user message
/// optimistically, and exactly one of `fulfill_round`/`reject_round` closes
/// the round. Toast signaling for rejected rounds lives with the component's
/// observers, not here.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub round: RoundPhase,
}

impl ChatState {
    /// Fresh transcript holding only the canned greeting.
    pub fn seeded(now_ms: f64) -> Self {
        Self {
            messages: vec![ChatMessage {
                id: "1".to_owned(),
                text: GREETING.to_owned(),
                sender: Sender::Bot,
                timestamp: now_ms,
            }],
            round: RoundPhase::Idle,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.round == RoundPhase::Pending
    }

    /// Optimistically append the user message and open the round. Returns
    /// `false` (appending nothing) for blank input or while a round is
    /// already pending.
    pub fn begin_round(&mut self, text: &str, now_ms: f64) -> bool {
        if self.is_pending() || text.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            id: format!("{}", now_ms as u64),
            text: text.to_owned(),
            sender: Sender::User,
            timestamp: now_ms,
        });
        self.round = RoundPhase::Pending;
        true
    }

    /// Close the round with the bot's reply, or the canned fallback when the
    /// response carried no text.
    pub fn fulfill_round(&mut self, reply: Option<&str>, now_ms: f64) {
        self.push_bot(reply.unwrap_or(FALLBACK_REPLY), now_ms);
    }

    /// Close the round with the canned apology entry.
    pub fn reject_round(&mut self, now_ms: f64) {
        self.push_bot(APOLOGY, now_ms);
    }

    fn push_bot(&mut self, text: &str, now_ms: f64) {
        self.messages.push(ChatMessage {
            id: format!("{}", now_ms as u64 + 1),
            text: text.to_owned(),
            sender: Sender::Bot,
            timestamp: now_ms,
        });
        self.round = RoundPhase::Idle;
    }
}
