use std::time::Instant;

use tracing::{debug, info, warn};

use super::{AnalyzeParams, App, AppAction, AppCommand};
use crate::api::analyze_text;
use crate::core::app::CONNECTION_ERROR_MESSAGE;

pub(super) fn handle_analysis_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::SubmitAnalysis => submit_analysis(app),
        AppAction::AnalysisCompleted {
            request_id,
            analysis,
        } => {
            if !app.session.is_current(request_id) {
                debug!(request_id, "Ignoring result for superseded request");
                return None;
            }
            let dominant = analysis.dominant();
            info!(
                request_id,
                emotion = dominant.emotion.label(),
                score = dominant.score,
                "Analysis completed"
            );
            app.ui.show_results(analysis, Instant::now());
            None
        }
        AppAction::AnalysisFailed { request_id, error } => {
            if !app.session.is_current(request_id) {
                debug!(request_id, "Ignoring failure for superseded request");
                return None;
            }
            debug!(request_id, %error, "Showing connection error");
            app.ui.show_error(CONNECTION_ERROR_MESSAGE);
            None
        }
        _ => unreachable!("non-analysis action routed to analysis handler"),
    }
}

fn submit_analysis(app: &mut App) -> Option<AppCommand> {
    if app.ui.pending {
        return None;
    }

    let text = app.input_text();
    if text.trim().is_empty() {
        return None;
    }

    let request_id = app.session.next_request_id();
    app.ui.begin_request(Instant::now());
    info!(request_id, chars = text.chars().count(), "Submitting text for analysis");

    Some(AppCommand::SpawnAnalysis(AnalyzeParams {
        client: app.session.client.clone(),
        base_url: app.session.base_url.clone(),
        text,
        request_id,
    }))
}

/// Perform the request described by `params` and turn the outcome into an action.
pub async fn run_analysis(params: AnalyzeParams) -> AppAction {
    let AnalyzeParams {
        client,
        base_url,
        text,
        request_id,
    } = params;

    match analyze_text(&client, &base_url, &text).await {
        Ok(analysis) => AppAction::AnalysisCompleted {
            request_id,
            analysis,
        },
        Err(err) => {
            warn!(request_id, base_url = %base_url, error = %err, "Failed to contact the analysis API");
            AppAction::AnalysisFailed {
                request_id,
                error: err.to_string(),
            }
        }
    }
}
