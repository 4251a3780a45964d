//! TUI-less "analyze" command

use std::error::Error;

use ratatui::crossterm::terminal;

use crate::api::analyze_text;
use crate::core::app::CONNECTION_ERROR_MESSAGE;
use crate::core::emotion::Analysis;
use crate::ui::bars::{plain_report, bar_chrome_width};

const DEFAULT_TRACK: u16 = 40;
const MAX_TRACK: u16 = 60;

pub async fn run_analyze(text: String, base_url: String, json: bool) -> Result<(), Box<dyn Error>> {
    if text.trim().is_empty() {
        eprintln!("Usage: emotion-ai analyze <text>");
        std::process::exit(1);
    }

    let client = reqwest::Client::new();
    let analysis = match analyze_text(&client, &base_url, &text).await {
        Ok(analysis) => analysis,
        Err(err) => {
            tracing::warn!(base_url = %base_url, error = %err, "Failed to contact the analysis API");
            eprintln!("❌ {CONNECTION_ERROR_MESSAGE}");
            std::process::exit(1);
        }
    };

    let terminal_width = terminal::size().ok().map(|(w, _)| w);
    for line in render_output(&analysis, json, terminal_width)? {
        println!("{line}");
    }
    Ok(())
}

/// Lines to print for `analysis`, either as JSON or as a text report sized to the terminal.
pub fn render_output(
    analysis: &Analysis,
    json: bool,
    terminal_width: Option<u16>,
) -> Result<Vec<String>, serde_json::Error> {
    if json {
        return Ok(vec![serde_json::to_string_pretty(analysis.results())?]);
    }

    let track = terminal_width
        .map(|width| width.saturating_sub(bar_chrome_width() + 2))
        .unwrap_or(DEFAULT_TRACK)
        .clamp(10, MAX_TRACK);
    Ok(plain_report(analysis, track))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EmotionScore;

    fn analysis() -> Analysis {
        Analysis::from_scores(vec![
            EmotionScore {
                label: "fear".into(),
                score: 0.25,
            },
            EmotionScore {
                label: "sadness".into(),
                score: 0.75,
            },
        ])
        .unwrap()
    }

    #[test]
    fn json_output_is_sorted_results() {
        let lines = render_output(&analysis(), true, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "label": "sadness", "score": 0.75 },
                { "label": "fear", "score": 0.25 }
            ])
        );
    }

    #[test]
    fn text_output_fits_narrow_terminals() {
        let lines = render_output(&analysis(), false, Some(40)).unwrap();
        assert!(lines[0].contains("Sadness"));
        assert!(lines[0].contains("75.0%"));
        // 40 columns leaves an 18-cell track, above the 10-cell floor.
        assert!(lines[3].contains(&"█".repeat(14)));
        assert!(!lines[3].contains(&"█".repeat(15)));
    }

    #[test]
    fn text_output_caps_track_on_wide_terminals() {
        let lines = render_output(&analysis(), false, Some(500)).unwrap();
        assert!(lines[3].contains(&"█".repeat(45)));
        assert!(!lines[3].contains(&"█".repeat(46)));
    }
}
