use serde::{Deserialize, Serialize};

use crate::error::EmbedError;

/// Runtime configuration for the skill vectorizer.
///
/// # Example
/// ```no_run
/// use embed::{embed_skills, EmbedConfig};
///
/// # async fn run() {
/// let cfg = EmbedConfig {
///     mode: "api".into(),
///     api_url: Some("https://router.huggingface.co/hf-inference/models/BAAI/bge-small-en-v1.5/pipeline/feature-extraction".into()),
///     api_auth_header: Some("Bearer hf_xxx".into()),
///     ..Default::default()
/// };
///
/// let skills = vec!["Python".to_string(), "Machine Learning".to_string()];
/// let embedding = embed_skills(&skills, &cfg).await;
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedConfig {
    /// Encoder selector: `"api"` (remote HTTP backend) or `"hash"` (deterministic
    /// fallback). `"api"` without an [`api_url`](Self::api_url) degrades to hash.
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Friendly label surfaced on every [`SkillEmbedding`](crate::SkillEmbedding).
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// Vector dimension for the hash fallback and for empty skill lists. Must
    /// match the remote model's output dimension or cross-encoder comparisons
    /// degrade to the no-similarity result.
    #[serde(default = "default_dimension")]
    pub dimension: usize,
    /// Feature-extraction endpoint when [`mode`](Self::mode) is `"api"`.
    #[serde(default)]
    pub api_url: Option<String>,
    /// Authorization header value (e.g., `"Bearer hf_xxx"`).
    #[serde(default)]
    pub api_auth_header: Option<String>,
    /// Overall API timeout in seconds.
    #[serde(default = "default_timeout")]
    pub api_timeout_secs: u64,
    /// Normalize output vectors to unit length (recommended for cosine similarity).
    #[serde(default = "default_true")]
    pub normalize: bool,
    /// Capacity of the per-encoder embedding cache, keyed by the joined skill
    /// phrase. `0` disables caching.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl EmbedConfig {
    /// Check the configuration for values the encoder cannot work with.
    pub fn validate(&self) -> Result<(), EmbedError> {
        match self.mode.as_str() {
            "api" | "hash" => {}
            other => {
                return Err(EmbedError::InvalidConfig(format!(
                    "mode must be one of: api, hash (got {other:?})"
                )))
            }
        }
        if self.dimension == 0 {
            return Err(EmbedError::InvalidConfig(
                "dimension must be greater than zero".into(),
            ));
        }
        if self.api_timeout_secs == 0 {
            return Err(EmbedError::InvalidConfig(
                "api_timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            model_name: default_model_name(),
            dimension: default_dimension(),
            api_url: None,
            api_auth_header: None,
            api_timeout_secs: default_timeout(),
            normalize: true,
            cache_capacity: default_cache_capacity(),
        }
    }
}

fn default_mode() -> String {
    "hash".to_string()
}
fn default_model_name() -> String {
    "all-MiniLM-L6-v2".to_string()
}
fn default_dimension() -> usize {
    384
}
fn default_timeout() -> u64 {
    30
}
fn default_true() -> bool {
    true
}
fn default_cache_capacity() -> usize {
    1024
}
