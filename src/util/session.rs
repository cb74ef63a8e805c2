//! Session persistence collaborator.
//!
//! The real authentication backend is out of scope; this stub keeps the
//! signed-in user as a JSON blob in `localStorage` so the route guard has a
//! session predicate to consult across reloads.

use crate::state::auth::User;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "agropredictor_session";

/// Restore the stored session, if any. Always `None` off-browser.
pub fn read_session() -> Option<User> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist the session for the signed-in user.
pub fn store_session(user: &User) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if let Ok(raw) = serde_json::to_string(user) {
                let _ = storage.set_item(STORAGE_KEY, &raw);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user;
    }
}

/// Drop the stored session on sign-out.
pub fn clear_session() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
