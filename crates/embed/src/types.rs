use serde::{Deserialize, Serialize};

/// Embedding produced from one skill list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillEmbedding {
    /// Final embedding values (either backend output or deterministic fallback).
    pub vector: Vec<f32>,
    /// Name of the model that produced the vector.
    pub model_name: String,
    /// Dimension of `vector`.
    pub dimension: usize,
    /// Whether [`vector`](Self::vector) was L2-normalized.
    pub normalized: bool,
    /// True when the vector came from the degraded hash encoder (or from an
    /// empty skill list) rather than the semantic backend.
    pub fallback: bool,
}

impl SkillEmbedding {
    /// Zero vector for an empty skill list. Has no semantic content, so it is
    /// always flagged as a fallback.
    pub(crate) fn zeroed(dimension: usize, model_name: &str, normalized: bool) -> Self {
        Self {
            vector: vec![0.0; dimension],
            model_name: model_name.to_string(),
            dimension,
            normalized,
            fallback: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_embedding_has_requested_dimension() {
        let e = SkillEmbedding::zeroed(384, "test-model", true);
        assert_eq!(e.vector.len(), 384);
        assert_eq!(e.dimension, 384);
        assert!(e.vector.iter().all(|&x| x == 0.0));
        assert!(e.fallback);
    }

    #[test]
    fn embedding_serde_roundtrip() {
        let e = SkillEmbedding {
            vector: vec![0.1, 0.2, 0.3],
            model_name: "bge-small-en-v1.5".into(),
            dimension: 3,
            normalized: true,
            fallback: false,
        };

        let serialized = serde_json::to_string(&e).unwrap();
        let deserialized: SkillEmbedding = serde_json::from_str(&serialized).unwrap();
        assert_eq!(e, deserialized);
    }

    #[test]
    fn embedding_clone_and_eq() {
        let e = SkillEmbedding::zeroed(8, "m", false);
        let cloned = e.clone();
        assert_eq!(e, cloned);
    }
}
