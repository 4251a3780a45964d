//! Application state and the reducer that mutates it
//!
//! [`App`] is the only mutable state in the program. The event loop owns it
//! and changes it exclusively through [`apply_actions`]; side effects the
//! reducer wants performed come back as [`AppCommand`]s.

use reqwest::Client;

use crate::ui::theme::Theme;

pub mod actions;
pub mod session;
pub mod ui_state;

pub use actions::{apply_action, apply_actions, AnalyzeParams, AppAction, AppActionDispatcher, AppCommand};
pub use session::SessionContext;
pub use ui_state::UiState;

/// User-facing message for every failed request.
pub const CONNECTION_ERROR_MESSAGE: &str = "Could not reach the emotion analysis model. Make sure the backend server is running.";

pub struct App {
    pub session: SessionContext,
    pub ui: UiState,
}

impl App {
    pub fn new(client: Client, base_url: String, theme: Theme) -> Self {
        Self {
            session: SessionContext::new(client, base_url),
            ui: UiState::new(theme),
        }
    }

    pub fn input_text(&self) -> String {
        self.ui.input_text()
    }

    /// Whether the analyze action is currently enabled.
    pub fn can_submit(&self) -> bool {
        !self.ui.pending && !self.ui.input_text().trim().is_empty()
    }
}
