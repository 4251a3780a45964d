mod analysis;
mod input;

pub use analysis::run_analysis;

use tokio::sync::mpsc;

use super::App;
use crate::core::emotion::Analysis;

pub enum AppAction {
    SubmitAnalysis,
    AnalysisCompleted {
        request_id: u64,
        analysis: Analysis,
    },
    AnalysisFailed {
        request_id: u64,
        error: String,
    },
    EditInput {
        input: tui_textarea::Input,
    },
    InsertIntoInput {
        text: String,
    },
    LoadSample {
        index: usize,
    },
    ClearInput,
    Quit,
}

#[derive(Clone)]
pub struct AppActionDispatcher {
    tx: mpsc::UnboundedSender<AppAction>,
}

impl AppActionDispatcher {
    pub fn new(tx: mpsc::UnboundedSender<AppAction>) -> Self {
        Self { tx }
    }

    pub fn dispatch_many<I>(&self, actions: I)
    where
        I: IntoIterator<Item = AppAction>,
    {
        for action in actions.into_iter() {
            let _ = self.tx.send(action);
        }
    }
}

/// Everything a background task needs to run one `/analyze` request.
pub struct AnalyzeParams {
    pub client: reqwest::Client,
    pub base_url: String,
    pub text: String,
    pub request_id: u64,
}

pub enum AppCommand {
    SpawnAnalysis(AnalyzeParams),
}

pub fn apply_actions(app: &mut App, actions: impl IntoIterator<Item = AppAction>) -> Vec<AppCommand> {
    let mut commands = Vec::new();
    for action in actions {
        if let Some(cmd) = apply_action(app, action) {
            commands.push(cmd);
        }
    }
    commands
}

pub fn apply_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::SubmitAnalysis
        | AppAction::AnalysisCompleted { .. }
        | AppAction::AnalysisFailed { .. } => analysis::handle_analysis_action(app, action),

        AppAction::EditInput { .. }
        | AppAction::InsertIntoInput { .. }
        | AppAction::LoadSample { .. }
        | AppAction::ClearInput
        | AppAction::Quit => input::handle_input_action(app, action),
    }
}
