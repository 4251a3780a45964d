use std::fmt;

use tracing::debug;

use crate::api::{AnalyzeRequest, EmotionScore};
use crate::core::emotion::{Analysis, AnalysisError};
use crate::utils::url::construct_api_url;

pub const ANALYZE_ENDPOINT: &str = "analyze";

/// Everything that can go wrong talking to the inference service.
///
/// The UI collapses all of these into one message; the variants exist so the
/// diagnostic log says what actually happened.
#[derive(Debug)]
pub enum AnalyzeError {
    Transport(reqwest::Error),
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    Decode(reqwest::Error),
    Invalid(AnalysisError),
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzeError::Transport(err) => write!(f, "request failed: {err}"),
            AnalyzeError::Status { status, body } => {
                write!(f, "API request failed with status {status}: {body}")
            }
            AnalyzeError::Decode(err) => write!(f, "could not decode response: {err}"),
            AnalyzeError::Invalid(err) => write!(f, "invalid response: {err}"),
        }
    }
}

impl std::error::Error for AnalyzeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalyzeError::Transport(err) | AnalyzeError::Decode(err) => Some(err),
            AnalyzeError::Invalid(err) => Some(err),
            AnalyzeError::Status { .. } => None,
        }
    }
}

impl From<AnalysisError> for AnalyzeError {
    fn from(err: AnalysisError) -> Self {
        AnalyzeError::Invalid(err)
    }
}

/// POST `text` to `{base_url}/analyze` and return the scores ordered by confidence.
pub async fn analyze_text(
    client: &reqwest::Client,
    base_url: &str,
    text: &str,
) -> Result<Analysis, AnalyzeError> {
    let analyze_url = construct_api_url(base_url, ANALYZE_ENDPOINT);
    debug!(url = %analyze_url, chars = text.chars().count(), "Sending analyze request");

    let response = client
        .post(analyze_url)
        .header("Content-Type", "application/json")
        .json(&AnalyzeRequest { text })
        .send()
        .await
        .map_err(AnalyzeError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<no body>".to_string());
        return Err(AnalyzeError::Status { status, body });
    }

    let scores = response
        .json::<Vec<EmotionScore>>()
        .await
        .map_err(AnalyzeError::Decode)?;
    debug!(entries = scores.len(), "Analyze response received");

    Ok(Analysis::from_scores(scores)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::emotion::Emotion;
    use crate::utils::test_utils::{test_client, MockServer};

    const JOY_RESPONSE: &str = r#"[{"label":"sadness","score":0.1},{"label":"joy","score":0.7},{"label":"anger","score":0.1},{"label":"fear","score":0.1}]"#;

    #[tokio::test]
    async fn posts_json_text_to_analyze_endpoint() {
        let server = MockServer::start(200, JOY_RESPONSE).await;

        let analysis = analyze_text(&test_client(), &server.base_url, "I'm so excited!")
            .await
            .expect("analysis should succeed");

        assert_eq!(analysis.dominant().emotion, Emotion::Joy);

        let requests = server.requests().await;
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.request_line, "POST /analyze HTTP/1.1");
        assert_eq!(
            request.header("content-type").as_deref(),
            Some("application/json")
        );
        assert_eq!(
            request.json_body(),
            serde_json::json!({ "text": "I'm so excited!" })
        );
    }

    #[tokio::test]
    async fn trailing_slash_on_base_url_is_normalized() {
        let server = MockServer::start(200, JOY_RESPONSE).await;
        let base_url = format!("{}/", server.base_url);

        analyze_text(&test_client(), &base_url, "hello")
            .await
            .expect("analysis should succeed");

        let requests = server.requests().await;
        assert_eq!(requests[0].request_line, "POST /analyze HTTP/1.1");
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let server = MockServer::start(503, r#"{"error":"model loading"}"#).await;

        let err = analyze_text(&test_client(), &server.base_url, "hello")
            .await
            .unwrap_err();

        match err {
            AnalyzeError::Status { status, body } => {
                assert_eq!(status.as_u16(), 503);
                assert!(body.contains("model loading"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn error_object_with_ok_status_fails_to_decode() {
        let server = MockServer::start(200, r#"{"error":"El texto no puede estar vacío."}"#).await;

        let err = analyze_text(&test_client(), &server.base_url, " ")
            .await
            .unwrap_err();

        assert!(matches!(err, AnalyzeError::Decode(_)));
    }

    #[tokio::test]
    async fn unknown_label_is_an_invalid_response() {
        let server = MockServer::start(200, r#"[{"label":"surprise","score":1.0}]"#).await;

        let err = analyze_text(&test_client(), &server.base_url, "hello")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AnalyzeError::Invalid(AnalysisError::UnknownEmotion(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        let base_url = MockServer::unused_base_url().await;

        let err = analyze_text(&test_client(), &base_url, "hello")
            .await
            .unwrap_err();

        assert!(matches!(err, AnalyzeError::Transport(_)));
    }
}
