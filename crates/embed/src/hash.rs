use fxhash::hash64;

use crate::config::EmbedConfig;
use crate::normalize::l2_normalize_in_place;
use crate::types::SkillEmbedding;

/// Deterministic low-fidelity encoding used when the semantic backend is
/// unconfigured or unavailable. Each lane mixes the phrase hash with its own
/// index so repeated lanes do not alias, then maps into [-1, 1). Same phrase,
/// same vector: cheap, reproducible, and good enough to keep ranking alive.
pub(crate) fn hash_embedding(phrase: &str, cfg: &EmbedConfig) -> SkillEmbedding {
    let h = hash64(phrase.as_bytes());
    let mut v = vec![0f32; cfg.dimension];
    for (idx, slot) in v.iter_mut().enumerate() {
        let lane = h
            .rotate_left((idx % 64) as u32)
            .wrapping_mul(0x9E37_79B9_7F4A_7C15 ^ idx as u64);
        *slot = (lane & 0xFFFF) as f32 / 32768.0 - 1.0;
    }
    if cfg.normalize {
        l2_normalize_in_place(&mut v);
    }
    SkillEmbedding {
        vector: v,
        model_name: cfg.model_name.clone(),
        dimension: cfg.dimension,
        normalized: cfg.normalize,
        fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(normalize: bool) -> EmbedConfig {
        EmbedConfig {
            normalize,
            ..Default::default()
        }
    }

    #[test]
    fn same_phrase_same_vector() {
        let e1 = hash_embedding("python, sql", &cfg(false));
        let e2 = hash_embedding("python, sql", &cfg(false));
        assert_eq!(e1.vector, e2.vector);
    }

    #[test]
    fn different_phrases_differ() {
        let e1 = hash_embedding("python, sql", &cfg(false));
        let e2 = hash_embedding("rust, tokio", &cfg(false));
        assert_ne!(e1.vector, e2.vector);
    }

    #[test]
    fn respects_configured_dimension() {
        let custom = EmbedConfig {
            dimension: 64,
            normalize: false,
            ..Default::default()
        };
        let e = hash_embedding("leadership", &custom);
        assert_eq!(e.vector.len(), 64);
        assert_eq!(e.dimension, 64);
    }

    #[test]
    fn raw_values_stay_in_range() {
        let e = hash_embedding("public speaking, mentoring, project management", &cfg(false));
        for (i, &val) in e.vector.iter().enumerate() {
            assert!(
                (-1.0..1.0).contains(&val),
                "lane {i} is {val}, outside [-1, 1)"
            );
        }
    }

    #[test]
    fn normalized_output_has_unit_length() {
        let e = hash_embedding("python", &cfg(true));
        assert!(e.normalized);
        let norm: f32 = e.vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-4);
    }

    #[test]
    fn marked_as_fallback() {
        let e = hash_embedding("python", &cfg(true));
        assert!(e.fallback);
    }

    #[test]
    fn unicode_phrase_is_fine() {
        let e = hash_embedding("機械学習, データ分析", &cfg(false));
        assert_eq!(e.vector.len(), 384);
        assert!(!e.vector.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn adjacent_lanes_do_not_alias() {
        // The lane mix must not collapse into a short repeating pattern.
        let e = hash_embedding("python", &cfg(false));
        let first = e.vector[0];
        assert!(e.vector.iter().skip(1).take(63).any(|&x| x != first));
        assert_ne!(&e.vector[0..64], &e.vector[64..128]);
    }
}
