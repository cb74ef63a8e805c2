#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the dashboard chrome: dark mode and the sidebar.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
}
