use super::{App, AppAction, AppCommand};
use crate::core::samples::sample_text;

pub(super) fn handle_input_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::EditInput { input } => {
            app.ui.textarea.input(input);
        }
        AppAction::InsertIntoInput { text } => {
            if !text.is_empty() {
                app.ui.textarea.insert_str(&text);
            }
        }
        AppAction::LoadSample { index } => {
            if let Some(text) = sample_text(index) {
                app.ui.set_input_text(text);
            }
        }
        AppAction::ClearInput => app.ui.clear_input(),
        AppAction::Quit => app.ui.exit_requested = true,
        _ => unreachable!("non-input action routed to input handler"),
    }
    None
}
