#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// The signed-in account, as stored by the session collaborator.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    /// Build a user from a sign-in email; the display name is the part
    /// before the `@`.
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_owned();
        Self {
            name,
            email: email.to_owned(),
        }
    }
}

/// Authentication state tracking the current session and its load status.
///
/// `loading` is true only while the stored session is being restored at
/// startup; the dashboard guard waits for it before redirecting.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    pub fn signed_in(&self) -> bool {
        self.user.is_some()
    }
}
