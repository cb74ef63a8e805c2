//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `toast`, `ui`, `chat`) so individual
//! components can depend on small focused models. Auth, UI, and toast state
//! are provided as context signals at application start; chat state is
//! component-local so the transcript resets on every mount.

pub mod auth;
pub mod chat;
pub mod toast;
pub mod ui;
