use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub background_color: Color,

    // Chrome
    pub title_style: Style,
    pub accent_style: Style,
    pub muted_style: Style,
    pub border_style: Style,
    pub pending_indicator_style: Style,

    // Input area
    pub input_text_style: Style,
    pub input_cursor_style: Style,
    pub action_enabled_style: Style,
    pub action_disabled_style: Style,

    // Results
    pub error_style: Style,
    pub track_style: Style,
    /// When false, bars use the theme's accent instead of per-emotion colors.
    pub emotion_colors: bool,
}

impl Theme {
    pub fn dark_default() -> Self {
        Theme {
            background_color: Color::Reset,
            title_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            accent_style: Style::default().fg(Color::Rgb(0x8b, 0x7c, 0xf6)),
            muted_style: Style::default().fg(Color::DarkGray),
            border_style: Style::default().fg(Color::Gray),
            pending_indicator_style: Style::default().fg(Color::White),

            input_text_style: Style::default().fg(Color::White),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            action_enabled_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(0x8b, 0x7c, 0xf6))
                .add_modifier(Modifier::BOLD),
            action_disabled_style: Style::default().fg(Color::DarkGray),

            error_style: Style::default().fg(Color::LightRed),
            track_style: Style::default().fg(Color::DarkGray),
            emotion_colors: true,
        }
    }

    pub fn light() -> Self {
        Theme {
            background_color: Color::White,
            title_style: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            accent_style: Style::default().fg(Color::Rgb(0x5b, 0x4b, 0xd6)),
            muted_style: Style::default().fg(Color::Gray),
            border_style: Style::default().fg(Color::DarkGray),
            pending_indicator_style: Style::default().fg(Color::Black),

            input_text_style: Style::default().fg(Color::Black),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            action_enabled_style: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0x5b, 0x4b, 0xd6))
                .add_modifier(Modifier::BOLD),
            action_disabled_style: Style::default().fg(Color::Gray),

            error_style: Style::default().fg(Color::Red),
            track_style: Style::default().fg(Color::Gray),
            emotion_colors: true,
        }
    }

    /// No colors at all, for plain output and dumb terminals.
    pub fn monochrome() -> Self {
        Theme {
            background_color: Color::Reset,
            title_style: Style::default().add_modifier(Modifier::BOLD),
            accent_style: Style::default(),
            muted_style: Style::default().add_modifier(Modifier::DIM),
            border_style: Style::default(),
            pending_indicator_style: Style::default(),

            input_text_style: Style::default(),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            action_enabled_style: Style::default().add_modifier(Modifier::REVERSED),
            action_disabled_style: Style::default().add_modifier(Modifier::DIM),

            error_style: Style::default().add_modifier(Modifier::BOLD),
            track_style: Style::default().add_modifier(Modifier::DIM),
            emotion_colors: false,
        }
    }

    pub fn find(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" | "default" => Some(Self::dark_default()),
            "light" => Some(Self::light()),
            "monochrome" | "mono" => Some(Self::monochrome()),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Self {
        Self::find(name).unwrap_or_else(Self::dark_default)
    }

    pub fn names() -> &'static [&'static str] {
        &["dark", "light", "monochrome"]
    }

    /// Style for the filled part of a bar.
    pub fn bar_style(&self, color: Color) -> Style {
        if self.emotion_colors {
            Style::default().fg(color)
        } else {
            self.accent_style
        }
    }
}
