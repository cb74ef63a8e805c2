//! Browser-facing helpers: theme persistence, the session collaborator
//! stub, and clock access. Everything here degrades to an inert default
//! off-browser.

pub mod clock;
pub mod dark_mode;
pub mod session;
