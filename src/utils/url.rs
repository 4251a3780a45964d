//! URL helpers for building service endpoints
//!
//! Base URLs come from flags, the environment, or the config file, and any of
//! those may carry trailing slashes.

/// Strip trailing slashes from a base URL.
///
/// # Examples
///
/// ```
/// use emotion_ai::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("https://emotion.example.space"), "https://emotion.example.space");
/// assert_eq!(normalize_base_url("https://emotion.example.space/"), "https://emotion.example.space");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Join a base URL and an endpoint path with exactly one slash between them.
///
/// # Examples
///
/// ```
/// use emotion_ai::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("https://emotion.example.space/", "analyze"),
///     "https://emotion.example.space/analyze"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let endpoint = endpoint.trim_start_matches('/');
    format!("{}/{}", normalize_base_url(base_url), endpoint)
}
