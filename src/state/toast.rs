#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How a toast should be styled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastSeverity {
    #[default]
    Info,
    Success,
    Destructive,
}

/// One transient notification. Identity is the queue-assigned id; the
/// `Toaster` component auto-dismisses each toast after a fixed lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub severity: ToastSeverity,
}

impl Toast {
    pub fn success(title: &str, description: &str) -> Self {
        Self::with_severity(ToastSeverity::Success, title, description)
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Self::with_severity(ToastSeverity::Destructive, title, description)
    }

    pub fn info(title: &str, description: &str) -> Self {
        Self::with_severity(ToastSeverity::Info, title, description)
    }

    fn with_severity(severity: ToastSeverity, title: &str, description: &str) -> Self {
        Self {
            // Real id assigned by ToastState::push.
            id: 0,
            title: title.to_owned(),
            description: description.to_owned(),
            severity,
        }
    }
}

/// Process-wide ephemeral notification queue. Append-only from components;
/// removal happens by id, either from the dismiss control or the expiry
/// timer.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Enqueue a toast and return its assigned id.
    pub fn push(&mut self, mut toast: Toast) -> u64 {
        self.next_id += 1;
        toast.id = self.next_id;
        self.toasts.push(toast);
        self.next_id
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
