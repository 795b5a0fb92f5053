use std::time::Duration;

use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::config::EmbedConfig;
use crate::error::EmbedError;

// Process-wide HTTP client with connection pooling. Per-request timeouts come
// from the config; these are the outer bounds.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(16)
        .build()
        .expect("failed to build HTTP client")
});

/// Request embeddings for `phrases` from the configured feature-extraction
/// endpoint. Returns one vector per input phrase, in input order.
pub(crate) async fn encode_via_api(
    phrases: &[String],
    cfg: &EmbedConfig,
) -> Result<Vec<Vec<f32>>, EmbedError> {
    let url = cfg
        .api_url
        .as_deref()
        .ok_or_else(|| EmbedError::InvalidConfig("api_url is required for api mode".into()))?;

    let mut request = HTTP_CLIENT
        .post(url)
        .timeout(Duration::from_secs(cfg.api_timeout_secs))
        .json(&json!({ "inputs": phrases }));
    if let Some(auth) = cfg.api_auth_header.as_deref() {
        request = request.header(reqwest::header::AUTHORIZATION, auth);
    }

    let response = request
        .send()
        .await
        .map_err(|e| EmbedError::Api(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(EmbedError::Api(format!(
            "embedding endpoint returned {status}: {body}"
        )));
    }

    let value: Value = response
        .json()
        .await
        .map_err(|e| EmbedError::Decode(e.to_string()))?;

    let rows = parse_embedding_rows(&value)?;
    if rows.len() != phrases.len() {
        return Err(EmbedError::Decode(format!(
            "endpoint returned {} embeddings for {} inputs",
            rows.len(),
            phrases.len()
        )));
    }
    Ok(rows)
}

/// Accepts the response shapes feature-extraction endpoints actually send:
/// a single vector (`[f32, ...]`) or a batch (`[[f32, ...], ...]`).
pub(crate) fn parse_embedding_rows(value: &Value) -> Result<Vec<Vec<f32>>, EmbedError> {
    let outer = value
        .as_array()
        .ok_or_else(|| EmbedError::Decode("expected a JSON array".into()))?;

    if outer.is_empty() {
        return Ok(Vec::new());
    }

    if outer[0].is_array() {
        outer.iter().map(parse_vector).collect()
    } else {
        Ok(vec![parse_vector(value)?])
    }
}

fn parse_vector(value: &Value) -> Result<Vec<f32>, EmbedError> {
    let items = value
        .as_array()
        .ok_or_else(|| EmbedError::Decode("expected an array of numbers".into()))?;
    items
        .iter()
        .map(|item| {
            item.as_f64()
                .map(|f| f as f32)
                .ok_or_else(|| EmbedError::Decode(format!("non-numeric embedding value: {item}")))
        })
        .collect()
}
