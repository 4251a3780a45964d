use std::time::{Duration, Instant};

use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::core::emotion::Analysis;
use crate::ui::theme::Theme;

/// How long result bars take to grow to full width.
pub const BAR_ANIMATION: Duration = Duration::from_millis(500);

const INPUT_PLACEHOLDER: &str = "Type or paste your text here...";

pub struct UiState {
    pub textarea: TextArea<'static>,
    pub pending: bool,
    pub analysis: Option<Analysis>,
    pub error: Option<String>,
    pub results_shown_at: Option<Instant>,
    pub pulse_start: Instant,
    pub exit_requested: bool,
    pub theme: Theme,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        let textarea = styled_textarea(TextArea::default(), &theme);
        Self {
            textarea,
            pending: false,
            analysis: None,
            error: None,
            results_shown_at: None,
            pulse_start: Instant::now(),
            exit_requested: false,
            theme,
        }
    }

    pub fn input_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Replace the whole input, leaving the cursor at the end.
    pub fn set_input_text(&mut self, text: &str) {
        let textarea = TextArea::from(text.lines().map(str::to_string));
        self.textarea = styled_textarea(textarea, &self.theme);
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
    }

    pub fn clear_input(&mut self) {
        self.textarea = styled_textarea(TextArea::default(), &self.theme);
    }

    pub fn begin_request(&mut self, now: Instant) {
        self.pending = true;
        self.analysis = None;
        self.error = None;
        self.results_shown_at = None;
        self.pulse_start = now;
    }

    pub fn show_results(&mut self, analysis: Analysis, now: Instant) {
        self.pending = false;
        self.error = None;
        self.analysis = Some(analysis);
        self.results_shown_at = Some(now);
    }

    pub fn show_error(&mut self, message: &str) {
        self.pending = false;
        self.analysis = None;
        self.results_shown_at = None;
        self.error = Some(message.to_string());
    }

    /// Fraction of the bar animation completed at `now`, in `0.0..=1.0`.
    pub fn bar_progress(&self, now: Instant) -> f64 {
        match self.results_shown_at {
            Some(shown_at) => {
                let elapsed = now.saturating_duration_since(shown_at);
                (elapsed.as_secs_f64() / BAR_ANIMATION.as_secs_f64()).min(1.0)
            }
            None => 1.0,
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.analysis.is_some() && self.bar_progress(now) < 1.0
    }

    /// Pulse phase in `0.0..=1.0` for the pending indicator, two cycles per second.
    pub fn pulse_intensity(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.pulse_start).as_millis() as f32 / 1000.0;
        let phase = (elapsed * 2.0) % 2.0;
        if phase < 1.0 {
            phase
        } else {
            2.0 - phase
        }
    }
}

fn styled_textarea(mut textarea: TextArea<'static>, theme: &Theme) -> TextArea<'static> {
    textarea.set_style(theme.input_text_style);
    textarea.set_cursor_style(theme.input_cursor_style);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(INPUT_PLACEHOLDER);
    textarea.set_placeholder_style(theme.muted_style);
    textarea
}
