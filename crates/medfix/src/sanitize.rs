//! Helpers for sanitizing values before they enter log lines.
//!
//! Sheet URLs may carry access tokens and every fetch carries a
//! cache-busting stamp; neither belongs in logs.

/// Maximum length of an upstream error body kept for logging.
pub const MAX_LOGGED_BODY_LEN: usize = 200;

/// Masks every query parameter value of a URL, keeping the names.
///
/// - `https://host/export?format=csv&t=17` → `https://host/export?format=****&t=****`
/// - `https://host/path` → unchanged
pub fn redact_url_query(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let masked: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((name, _)) => format!("{}=****", name),
            None => pair.to_string(),
        })
        .collect();

    format!("{}?{}", base, masked.join("&"))
}

/// Truncates an upstream response body to [`MAX_LOGGED_BODY_LEN`] characters.
pub fn truncate_for_log(body: &str) -> String {
    match body.char_indices().nth(MAX_LOGGED_BODY_LEN) {
        Some((cut, _)) => format!("{}... (truncated)", &body[..cut]),
        None => body.to_string(),
    }
}
