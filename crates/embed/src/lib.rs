//! SkillSync skill vectorization
//!
//! This crate turns free-text skill lists into meaning-aware vectors. Given a
//! list like `["Python", "Machine Learning"]`, it produces one dense embedding
//! for the whole list, suitable for cosine-similarity comparisons between
//! people.
//!
//! Two encoder strategies exist:
//!
//! - **Api mode** - Call out to a hosted feature-extraction endpoint
//!   (Hugging Face router endpoints work out of the box).
//! - **Hash mode** - Deterministic pseudo-vectors derived from a hash of the
//!   skill phrase. Low fidelity, zero dependencies, always available.
//!
//! The nice thing is the fallback behavior. The strategy is picked once at
//! construction: if api mode is requested but no endpoint is configured, the
//! encoder degrades to hash mode up front instead of failing per call. If a
//! configured endpoint errors at runtime, that one call falls back to the
//! hash encoding. Either way `encode` never fails; match scoring keeps
//! running on degraded vectors rather than going down with the backend.
//!
//! Skill names are joined into a single comma-separated phrase before
//! encoding so the embedding captures cross-skill context, not isolated
//! per-skill vectors.
//!
//! ## Quick example
//!
//! ```no_run
//! use embed::{EmbedConfig, SkillEncoder};
//!
//! #[tokio::main]
//! async fn main() {
//!     let cfg = EmbedConfig {
//!         mode: "api".into(),
//!         api_url: Some("https://router.huggingface.co/hf-inference/models/BAAI/bge-small-en-v1.5/pipeline/feature-extraction".into()),
//!         api_auth_header: Some("Bearer YOUR_HF_TOKEN".into()),
//!         ..Default::default()
//!     };
//!
//!     let encoder = SkillEncoder::from_config(cfg).expect("valid config");
//!     let skills = vec!["Python".to_string(), "SQL".to_string()];
//!     let embedding = encoder.encode(&skills).await;
//!     assert_eq!(embedding.vector.len(), embedding.dimension);
//! }
//! ```

pub mod config;
pub mod error;
pub mod types;

mod api;
mod cache;
mod hash;
mod normalize;

pub use crate::config::EmbedConfig;
pub use crate::error::EmbedError;
pub use crate::types::SkillEmbedding;

use std::num::NonZeroUsize;

use crate::cache::EmbeddingCache;
use crate::hash::hash_embedding;
use crate::normalize::l2_normalize_in_place;

enum EncoderStrategy {
    /// Remote feature-extraction endpoint.
    Api,
    /// Deterministic hash-derived pseudo-vectors.
    Hash,
}

/// Skill vectorizer with a fixed strategy, chosen once at construction.
///
/// Construct one per process and share it (`Arc`) with every component that
/// scores matches; the embedded HTTP client and cache are designed for
/// concurrent reuse.
pub struct SkillEncoder {
    strategy: EncoderStrategy,
    cfg: EmbedConfig,
    cache: Option<EmbeddingCache>,
}

impl SkillEncoder {
    /// Build an encoder from configuration, running the capability check that
    /// selects the strategy. Requesting `"api"` without an endpoint is not an
    /// error; it degrades to the hash strategy with a warning.
    pub fn from_config(cfg: EmbedConfig) -> Result<Self, EmbedError> {
        cfg.validate()?;
        let strategy = match (cfg.mode.as_str(), cfg.api_url.as_deref()) {
            ("api", Some(_)) => EncoderStrategy::Api,
            ("api", None) => {
                tracing::warn!(
                    model = %cfg.model_name,
                    "api mode requested without api_url, degrading to hash encoder"
                );
                EncoderStrategy::Hash
            }
            _ => EncoderStrategy::Hash,
        };
        let cache = match (&strategy, NonZeroUsize::new(cfg.cache_capacity)) {
            (EncoderStrategy::Api, Some(capacity)) => Some(EmbeddingCache::new(capacity)),
            _ => None,
        };
        Ok(Self {
            strategy,
            cfg,
            cache,
        })
    }

    /// Vector dimension of the hash fallback and of empty-list embeddings.
    pub fn dimension(&self) -> usize {
        self.cfg.dimension
    }

    /// Model label stamped on every embedding.
    pub fn model_name(&self) -> &str {
        &self.cfg.model_name
    }

    /// True when the capability check selected the hash strategy.
    pub fn is_degraded(&self) -> bool {
        matches!(self.strategy, EncoderStrategy::Hash)
    }

    /// Encode one skill list. Never fails: an empty list yields the zero
    /// vector, and any backend failure yields the hash fallback.
    pub async fn encode(&self, skills: &[String]) -> SkillEmbedding {
        if skills.is_empty() {
            return SkillEmbedding::zeroed(
                self.cfg.dimension,
                &self.cfg.model_name,
                self.cfg.normalize,
            );
        }
        let phrase = join_phrase(skills);
        match self.strategy {
            EncoderStrategy::Hash => hash_embedding(&phrase, &self.cfg),
            EncoderStrategy::Api => {
                if let Some(vector) = self.cache_get(&phrase) {
                    return self.backend_embedding(vector);
                }
                match api::encode_via_api(std::slice::from_ref(&phrase), &self.cfg).await {
                    Ok(mut rows) if !rows.is_empty() => {
                        let mut vector = rows.swap_remove(0);
                        if self.cfg.normalize {
                            l2_normalize_in_place(&mut vector);
                        }
                        self.cache_put(phrase, &vector);
                        self.backend_embedding(vector)
                    }
                    Ok(_) => {
                        tracing::warn!(
                            "embedding endpoint returned no vectors, using hash fallback"
                        );
                        hash_embedding(&phrase, &self.cfg)
                    }
                    Err(err) => {
                        tracing::warn!(
                            error = %err,
                            "embedding backend unavailable, using hash fallback"
                        );
                        hash_embedding(&phrase, &self.cfg)
                    }
                }
            }
        }
    }

    /// Batch variant of [`encode`](Self::encode). Uncached non-empty lists are
    /// sent to the backend in a single request; output order matches input
    /// order. Like `encode`, this never fails.
    pub async fn encode_batch<S: AsRef<[String]>>(&self, lists: &[S]) -> Vec<SkillEmbedding> {
        let mut out: Vec<Option<SkillEmbedding>> = Vec::with_capacity(lists.len());
        let mut pending: Vec<(usize, String)> = Vec::new();

        for (idx, list) in lists.iter().enumerate() {
            let list = list.as_ref();
            if list.is_empty() {
                out.push(Some(SkillEmbedding::zeroed(
                    self.cfg.dimension,
                    &self.cfg.model_name,
                    self.cfg.normalize,
                )));
                continue;
            }
            let phrase = join_phrase(list);
            match self.strategy {
                EncoderStrategy::Hash => out.push(Some(hash_embedding(&phrase, &self.cfg))),
                EncoderStrategy::Api => match self.cache_get(&phrase) {
                    Some(vector) => out.push(Some(self.backend_embedding(vector))),
                    None => {
                        out.push(None);
                        pending.push((idx, phrase));
                    }
                },
            }
        }

        if !pending.is_empty() {
            let phrases: Vec<String> = pending.iter().map(|(_, p)| p.clone()).collect();
            match api::encode_via_api(&phrases, &self.cfg).await {
                Ok(rows) => {
                    for ((idx, phrase), mut vector) in pending.into_iter().zip(rows) {
                        if self.cfg.normalize {
                            l2_normalize_in_place(&mut vector);
                        }
                        self.cache_put(phrase, &vector);
                        out[idx] = Some(self.backend_embedding(vector));
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        batch = pending.len(),
                        "embedding backend unavailable, using hash fallback for batch"
                    );
                    for (idx, phrase) in pending {
                        out[idx] = Some(hash_embedding(&phrase, &self.cfg));
                    }
                }
            }
        }

        out.into_iter()
            .map(|slot| slot.expect("every batch slot is filled above"))
            .collect()
    }

    fn backend_embedding(&self, vector: Vec<f32>) -> SkillEmbedding {
        SkillEmbedding {
            dimension: vector.len(),
            vector,
            model_name: self.cfg.model_name.clone(),
            normalized: self.cfg.normalize,
            fallback: false,
        }
    }

    fn cache_get(&self, phrase: &str) -> Option<Vec<f32>> {
        self.cache.as_ref()?.get(phrase)
    }

    fn cache_put(&self, phrase: String, vector: &[f32]) {
        if let Some(cache) = &self.cache {
            cache.put(phrase, vector.to_vec());
        }
    }
}

/// Join skill names into the single phrase that gets encoded. Casing is
/// preserved; comparison-time folding happens in the scoring layer.
pub fn join_phrase(skills: &[String]) -> String {
    skills.join(", ")
}

/// One-shot convenience wrapper: build a transient encoder and encode once.
/// Prefer holding a [`SkillEncoder`] when encoding more than once.
pub async fn embed_skills(
    skills: &[String],
    cfg: &EmbedConfig,
) -> Result<SkillEmbedding, EmbedError> {
    let encoder = SkillEncoder::from_config(cfg.clone())?;
    Ok(encoder.encode(skills).await)
}
