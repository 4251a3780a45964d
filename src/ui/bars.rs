//! Proportional score bars shared by the terminal UI and plain-text output.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::emotion::{Analysis, EmotionResult};
use crate::ui::theme::Theme;

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Widest emotion display name, used to line up bars.
const LABEL_WIDTH: usize = 7;

/// `0.7` → `"70.0%"`.
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Number of filled cells for `score` on a track `track` cells wide.
pub fn bar_width(score: f64, track: u16) -> u16 {
    let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
    (score * f64::from(track)).round() as u16
}

pub fn bar_text(score: f64, track: u16) -> String {
    let filled = bar_width(score, track);
    let mut text = FILLED.repeat(filled as usize);
    text.push_str(&EMPTY.repeat(track.saturating_sub(filled) as usize));
    text
}

fn padded_label(result: &EmotionResult) -> String {
    let appearance = result.emotion.appearance();
    let name = appearance.display_name;
    let padding = LABEL_WIDTH.saturating_sub(name.width());
    format!("{} {}{}", appearance.icon, name, " ".repeat(padding))
}

/// Columns taken by everything on a bar line except the track itself.
pub fn bar_chrome_width() -> u16 {
    // icon (2) + space + label + two spaces + "100.0%"
    (2 + 1 + LABEL_WIDTH + 2 + 2 + 6) as u16
}

/// One labeled bar. `progress` scales the fill for the grow-in animation.
pub fn bar_line(result: &EmotionResult, track: u16, progress: f64, theme: &Theme) -> Line<'static> {
    let filled = bar_width(result.score * progress.clamp(0.0, 1.0), track);
    let color = result.emotion.appearance().color;
    Line::from(vec![
        Span::raw(padded_label(result)),
        Span::raw("  "),
        Span::styled(FILLED.repeat(filled as usize), theme.bar_style(color)),
        Span::styled(
            EMPTY.repeat(track.saturating_sub(filled) as usize),
            theme.track_style,
        ),
        Span::raw("  "),
        Span::styled(format!("{:>6}", format_percent(result.score)), theme.muted_style),
    ])
}

/// Plain rendering of a whole analysis, as printed by the `analyze` command.
pub fn plain_report(analysis: &Analysis, track: u16) -> Vec<String> {
    let dominant = analysis.dominant();
    let mut lines = vec![
        format!(
            "Dominant emotion: {} {} ({} confidence)",
            dominant.emotion.appearance().icon,
            dominant.emotion.display_name(),
            format_percent(dominant.score)
        ),
        String::new(),
        "All predictions:".to_string(),
    ];
    for result in analysis.results() {
        lines.push(format!(
            "  {}  {}  {:>6}",
            padded_label(result),
            bar_text(result.score, track),
            format_percent(result.score)
        ));
    }
    lines
}
