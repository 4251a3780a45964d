pub mod analyze;

pub use analyze::{analyze_text, AnalyzeError, ANALYZE_ENDPOINT};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub text: &'a str,
}

/// One `{label, score}` entry as returned by the inference service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub label: String,
    pub score: f64,
}
