//! Emotion labels and classification results
//!
//! The inference service scores a fixed set of four emotions. Labels coming
//! off the wire are parsed into [`Emotion`] up front so that an unexpected
//! label surfaces as an error instead of a missing lookup at render time.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::Serialize;

use crate::api::EmotionScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Fear,
    Joy,
    Sadness,
}

/// Static presentation record for an emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionAppearance {
    pub display_name: &'static str,
    pub icon: &'static str,
    pub color: Color,
}

impl Emotion {
    pub const ALL: [Emotion; 4] = [Emotion::Anger, Emotion::Fear, Emotion::Joy, Emotion::Sadness];

    /// Label as used on the wire.
    pub fn label(self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }

    pub fn appearance(self) -> EmotionAppearance {
        match self {
            Emotion::Anger => EmotionAppearance {
                display_name: "Anger",
                icon: "😠",
                color: Color::Rgb(0xe8, 0x4a, 0x4f),
            },
            Emotion::Fear => EmotionAppearance {
                display_name: "Fear",
                icon: "😨",
                color: Color::Rgb(0x8a, 0x6c, 0xe0),
            },
            Emotion::Joy => EmotionAppearance {
                display_name: "Joy",
                icon: "😄",
                color: Color::Rgb(0x9c, 0xc4, 0x3a),
            },
            Emotion::Sadness => EmotionAppearance {
                display_name: "Sadness",
                icon: "😢",
                color: Color::Rgb(0x2f, 0x7d, 0xe1),
            },
        }
    }

    pub fn display_name(self) -> &'static str {
        self.appearance().display_name
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEmotion(pub String);

impl fmt::Display for UnknownEmotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown emotion label '{}'", self.0)
    }
}

impl std::error::Error for UnknownEmotion {}

impl FromStr for Emotion {
    type Err = UnknownEmotion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Emotion::ALL
            .into_iter()
            .find(|emotion| emotion.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| UnknownEmotion(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmotionResult {
    #[serde(rename = "label")]
    pub emotion: Emotion,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    UnknownEmotion(UnknownEmotion),
    Empty,
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::UnknownEmotion(err) => err.fmt(f),
            AnalysisError::Empty => f.write_str("response contained no scores"),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::UnknownEmotion(err) => Some(err),
            AnalysisError::Empty => None,
        }
    }
}

impl From<UnknownEmotion> for AnalysisError {
    fn from(err: UnknownEmotion) -> Self {
        AnalysisError::UnknownEmotion(err)
    }
}

/// A non-empty set of results ordered from most to least confident.
///
/// One entry per emotion is what the service sends, but neither that nor
/// the scores summing to 1 is relied upon here.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    results: Vec<EmotionResult>,
}

impl Analysis {
    pub fn from_scores(scores: Vec<EmotionScore>) -> Result<Self, AnalysisError> {
        let results = scores
            .into_iter()
            .map(|entry| {
                Ok(EmotionResult {
                    emotion: entry.label.parse()?,
                    score: entry.score,
                })
            })
            .collect::<Result<Vec<_>, UnknownEmotion>>()?;
        Self::from_results(results)
    }

    pub fn from_results(mut results: Vec<EmotionResult>) -> Result<Self, AnalysisError> {
        if results.is_empty() {
            return Err(AnalysisError::Empty);
        }
        // Stable, so equal scores keep the service's order.
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(Self { results })
    }

    pub fn dominant(&self) -> &EmotionResult {
        &self.results[0]
    }

    pub fn results(&self) -> &[EmotionResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(label: &str, score: f64) -> EmotionScore {
        EmotionScore {
            label: label.to_string(),
            score,
        }
    }

    #[test]
    fn parses_wire_labels_case_insensitively() {
        assert_eq!("joy".parse::<Emotion>(), Ok(Emotion::Joy));
        assert_eq!(" Sadness ".parse::<Emotion>(), Ok(Emotion::Sadness));
        assert_eq!("ANGER".parse::<Emotion>(), Ok(Emotion::Anger));
        assert_eq!(
            "surprise".parse::<Emotion>(),
            Err(UnknownEmotion("surprise".to_string()))
        );
    }

    #[test]
    fn every_emotion_round_trips_through_its_label() {
        for emotion in Emotion::ALL {
            assert_eq!(emotion.label().parse::<Emotion>(), Ok(emotion));
            assert!(!emotion.display_name().is_empty());
        }
    }

    #[test]
    fn analysis_sorts_descending_and_picks_dominant() {
        let analysis = Analysis::from_scores(vec![
            score("sadness", 0.1),
            score("joy", 0.7),
            score("anger", 0.1),
            score("fear", 0.1),
        ])
        .unwrap();

        assert_eq!(analysis.dominant().emotion, Emotion::Joy);
        assert_eq!(analysis.len(), 4);
        let ordered: Vec<Emotion> = analysis.results().iter().map(|r| r.emotion).collect();
        assert_eq!(
            ordered,
            vec![Emotion::Joy, Emotion::Sadness, Emotion::Anger, Emotion::Fear]
        );
    }

    #[test]
    fn analysis_rejects_unknown_labels() {
        let err = Analysis::from_scores(vec![score("joy", 0.5), score("disgust", 0.5)])
            .unwrap_err();
        assert_eq!(
            err,
            AnalysisError::UnknownEmotion(UnknownEmotion("disgust".to_string()))
        );
        assert_eq!(err.to_string(), "unknown emotion label 'disgust'");
    }

    #[test]
    fn analysis_rejects_empty_responses() {
        assert_eq!(Analysis::from_scores(Vec::new()), Err(AnalysisError::Empty));
    }

    #[test]
    fn scores_need_not_sum_to_one() {
        let analysis =
            Analysis::from_scores(vec![score("fear", 0.9), score("anger", 0.8)]).unwrap();
        assert_eq!(analysis.dominant().emotion, Emotion::Fear);
    }

    #[test]
    fn results_serialize_with_wire_labels() {
        let analysis = Analysis::from_scores(vec![score("anger", 0.25)]).unwrap();
        let json = serde_json::to_value(analysis.results()).unwrap();
        assert_eq!(json, serde_json::json!([{ "label": "anger", "score": 0.25 }]));
    }
}
