//! Shared helpers for the cross crate tests.
use serde_json::{json, Value};
use themepass_wordgen::{GenerativeClient, ProviderConfig};
use wiremock::MockServer;

/// Response body for a generation request returning `text`.
pub fn generated_text(text: &str) -> Value {
    json!({
        "candidates": [
            {"content": {"role": "model", "parts": [{"text": text}]}}
        ]
    })
}

/// Client for the generation endpoint of a mock server.
pub fn mock_client(server: &MockServer) -> anyhow::Result<GenerativeClient> {
    let url = format!("{}/v1beta/models/test:generateContent", server.uri())
        .parse()?;
    Ok(GenerativeClient::new(ProviderConfig::new(url))?)
}

/// Determine if a password splits into separated non-empty segments.
pub fn well_separated(password: &str, separator: &str) -> bool {
    if separator.is_empty() || password.is_empty() {
        return true;
    }
    !password.starts_with(separator) && !password.contains(&separator.repeat(2))
}
