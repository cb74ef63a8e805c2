//! View components for the dashboard.
//!
//! The five request-driven views (`prediction_form`, `weather_card`,
//! `forecast_card`, `chatbot`, `contact_form`) each own their field signals
//! and one `RemoteAction`; `sidebar`, `footer`, and `toaster` are chrome.

pub mod chatbot;
pub mod contact_form;
pub mod footer;
pub mod forecast_card;
pub mod prediction_form;
pub mod sidebar;
pub mod toaster;
pub mod weather_card;
