//! Event polling, dispatching, and UI rendering loop.
//!
//! The loop owns the [`App`] outright. Terminal input and finished requests
//! both arrive as [`AppAction`]s on one channel; applying them may yield
//! [`AppCommand`]s, which are executed here on Tokio tasks.

use std::{
    error::Error,
    time::{Duration, Instant},
};

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::core::app::{
    actions::run_analysis, apply_actions, App, AppAction, AppActionDispatcher, AppCommand,
};
use crate::ui::lifecycle::{restore_terminal, setup_terminal, AppTerminal};
use crate::ui::renderer::ui;

const MAX_FPS: u64 = 60;

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

/// Map a key press to the action it triggers.
pub fn key_to_action(key: KeyEvent) -> AppAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => AppAction::Quit,
        KeyCode::Char('c') if ctrl => AppAction::Quit,
        KeyCode::Char('l') if ctrl => AppAction::ClearInput,
        KeyCode::Enter if key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::SHIFT) => {
            AppAction::EditInput { input: key.into() }
        }
        KeyCode::Enter => AppAction::SubmitAnalysis,
        KeyCode::F(n @ 1..=4) => AppAction::LoadSample {
            index: usize::from(n - 1),
        },
        _ => AppAction::EditInput { input: key.into() },
    }
}

pub(crate) fn sanitize_pasted_text(text: &str) -> String {
    let without_crlf = text.replace("\r\n", "\n");
    let without_cr = without_crlf.replace('\r', "\n");
    let expanded_tabs = without_cr.replace('\t', "    ");
    expanded_tabs
        .chars()
        .filter(|&c| c == '\n' || !c.is_control())
        .collect()
}

/// Translate queued terminal events into actions. Returns whether anything arrived.
fn process_ui_events(
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    dispatcher: &AppActionDispatcher,
) -> bool {
    let mut events_processed = false;

    while let Ok(ev) = event_rx.try_recv() {
        events_processed = true;
        match ev {
            UiEvent::Crossterm(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                dispatcher.dispatch_many([key_to_action(key)]);
            }
            UiEvent::Crossterm(Event::Paste(text)) => {
                let text = sanitize_pasted_text(&text);
                if !text.is_empty() {
                    dispatcher.dispatch_many([AppAction::InsertIntoInput { text }]);
                }
            }
            UiEvent::Crossterm(_) => {}
        }
    }

    events_processed
}

fn spawn_analysis(dispatcher: AppActionDispatcher, params: crate::core::app::AnalyzeParams) {
    tokio::spawn(async move {
        let action = run_analysis(params).await;
        dispatcher.dispatch_many([action]);
    });
}

/// Apply every queued action, then run the commands they produced.
fn drain_action_queue(
    app: &mut App,
    dispatcher: &AppActionDispatcher,
    action_rx: &mut mpsc::UnboundedReceiver<AppAction>,
) -> bool {
    let mut pending = Vec::new();
    while let Ok(action) = action_rx.try_recv() {
        pending.push(action);
    }

    if pending.is_empty() {
        return false;
    }

    for cmd in apply_actions(app, pending) {
        match cmd {
            AppCommand::SpawnAnalysis(params) => {
                debug!(request_id = params.request_id, "Spawning analyze request");
                spawn_analysis(dispatcher.clone(), params);
            }
        }
    }
    true
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        continue;
                    }
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

/// Run the interactive session until the user quits.
pub async fn run_ui(mut app: App) -> Result<(), Box<dyn Error>> {
    info!(base_url = %app.session.base_url, "Starting interactive session");

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut app, &mut terminal).await;
    restore_terminal(&mut terminal)?;

    info!("Interactive session ended");
    result
}

async fn event_loop(app: &mut App, terminal: &mut AppTerminal) -> Result<(), Box<dyn Error>> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<AppAction>();
    let dispatcher = AppActionDispatcher::new(action_tx);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let event_reader_handle = spawn_event_reader(event_tx);

    let frame_duration = Duration::from_millis(1000 / MAX_FPS);
    let mut last_draw = Instant::now() - frame_duration;
    let mut request_redraw = true;

    let result = loop {
        if app.ui.exit_requested {
            break Ok(());
        }

        let now = Instant::now();
        if (app.ui.pending || app.ui.is_animating(now)) && now.duration_since(last_draw) >= frame_duration {
            request_redraw = true;
        }

        if request_redraw && now.duration_since(last_draw) >= frame_duration {
            if let Err(err) = terminal.draw(|f| ui(f, app)) {
                break Err(err.into());
            }
            last_draw = now;
            request_redraw = false;
        }

        let events_processed = process_ui_events(&mut event_rx, &dispatcher);
        let actions_applied = drain_action_queue(app, &dispatcher, &mut action_rx);
        if events_processed || actions_applied {
            request_redraw = true;
        }

        if !events_processed && !actions_applied && !request_redraw {
            tokio::time::sleep(Duration::from_millis(16)).await;
        } else {
            tokio::task::yield_now().await;
        }
    };

    event_reader_handle.abort();
    result
}
