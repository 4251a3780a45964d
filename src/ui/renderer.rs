use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::app::App;
use crate::core::emotion::Analysis;
use crate::core::samples::SAMPLE_TEXTS;
use crate::ui::bars::{bar_chrome_width, bar_line, format_percent};
use crate::ui::theme::Theme;

const INPUT_HEIGHT: u16 = 8;

pub fn ui(f: &mut Frame, app: &App) {
    ui_at(f, app, Instant::now());
}

/// Draw the whole screen as it looks at `now`.
pub fn ui_at(f: &mut Frame, app: &App, now: Instant) {
    let theme = &app.ui.theme;
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_color)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(f.area());

    render_title(f, app, chunks[0]);
    render_input(f, app, chunks[1]);
    render_controls(f, app, chunks[2], now);

    if let Some(error) = &app.ui.error {
        render_error(f, error, theme, chunks[3]);
    } else if let Some(analysis) = &app.ui.analysis {
        let progress = app.ui.bar_progress(now);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style)
            .title(Span::styled(" Results ", theme.title_style));
        let inner = block.inner(chunks[3]);
        f.render_widget(block, chunks[3]);
        f.render_widget(
            Paragraph::new(results_lines(analysis, theme, inner.width, progress)),
            inner,
        );
    } else {
        render_intro(f, theme, chunks[3]);
    }
}

fn render_title(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let title = Line::from(vec![
        Span::styled(format!("EmotionAI v{}", env!("CARGO_PKG_VERSION")), theme.title_style),
        Span::styled(" • Powered by XLNet • ", theme.muted_style),
        Span::styled(app.session.base_url.clone(), theme.muted_style),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style)
        .title(Span::styled(" Enter text to analyze ", theme.title_style));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(&app.ui.textarea, inner);
}

fn render_controls(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let theme = &app.ui.theme;

    let mut samples = vec![Span::styled("Try an example: ", theme.muted_style)];
    for index in 0..SAMPLE_TEXTS.len() {
        samples.push(Span::styled(
            format!("[F{}] Example {}", index + 1, index + 1),
            theme.accent_style,
        ));
        samples.push(Span::raw("  "));
    }

    let action = if app.ui.pending {
        let symbol = pulse_symbol(app.ui.pulse_intensity(now));
        vec![
            Span::styled(" Analyzing... ", theme.action_disabled_style),
            Span::styled(symbol, theme.pending_indicator_style),
        ]
    } else if app.can_submit() {
        vec![Span::styled(" Enter: Analyze Emotion ", theme.action_enabled_style)]
    } else {
        vec![Span::styled(" Enter: Analyze Emotion ", theme.action_disabled_style)]
    };

    let mut action_line = action;
    action_line.push(Span::styled(
        "   Alt+Enter newline • Ctrl+L clear • Esc quit",
        theme.muted_style,
    ));

    f.render_widget(
        Paragraph::new(vec![Line::from(samples), Line::from(action_line)]),
        area,
    );
}

fn pulse_symbol(intensity: f32) -> &'static str {
    if intensity < 0.33 {
        "○"
    } else if intensity < 0.66 {
        "◐"
    } else {
        "●"
    }
}

fn render_error(f: &mut Frame, error: &str, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.error_style);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(error.to_string(), theme.error_style)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn render_intro(f: &mut Frame, theme: &Theme, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Emotion Classification with Deep Learning",
            theme.title_style,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Detect emotions in text across anger, fear, joy, and sadness.",
            theme.muted_style,
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Dominant emotion summary followed by one bar per result.
pub fn results_lines(
    analysis: &Analysis,
    theme: &Theme,
    width: u16,
    progress: f64,
) -> Vec<Line<'static>> {
    let dominant = analysis.dominant();
    let appearance = dominant.emotion.appearance();
    let track = width.saturating_sub(bar_chrome_width()).max(1);

    let mut lines = vec![
        Line::from(Span::styled("Dominant Emotion", theme.muted_style)),
        Line::from(vec![
            Span::raw(format!("{} ", appearance.icon)),
            Span::styled(
                appearance.display_name,
                theme
                    .bar_style(appearance.color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} confidence", format_percent(dominant.score)),
                theme.muted_style,
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("All Predictions", theme.muted_style)),
    ];

    lines.extend(
        analysis
            .results()
            .iter()
            .map(|result| bar_line(result, track, progress, theme)),
    );
    lines
}
