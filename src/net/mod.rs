//! Network layer for the external prediction/weather/chat service.
//!
//! DESIGN
//! ======
//! `types` holds the wire DTOs and their pure conversions, `api` the actual
//! HTTP calls (browser-only), and `remote` the request/loading/result state
//! machine shared by every view component. Keeping conversions pure lets the
//! whole error taxonomy be tested off-browser.

pub mod api;
pub mod config;
pub mod error;
pub mod remote;
pub mod types;
