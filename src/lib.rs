//! Umbrella crate for the SkillSync match engine.
//!
//! This crate stitches together skill vectorization (`embed`) and match
//! scoring (`matcher`) so callers can stand up the whole engine from one
//! configuration value. The surrounding platform (user storage, transport,
//! auth) lives elsewhere and feeds plain profiles in.
//!
//! ```no_run
//! use skillsync::{matcher_from_config, SkillSyncConfig};
//! use skillsync::{CandidateProfile, RequesterProfile, Role};
//!
//! let config = SkillSyncConfig::from_file("skillsync.yaml").expect("config");
//! let engine = matcher_from_config(&config).expect("engine");
//!
//! let requester = RequesterProfile {
//!     id: "mentee-42".into(),
//!     skills: vec!["Python".into(), "SQL".into()],
//!     experience: "intermediate".into(),
//!     role: Role::MenteeSeeking,
//! };
//! let pool: Vec<CandidateProfile> = vec![/* from the user store */];
//!
//! for result in engine.rank(&requester, &pool).expect("rank") {
//!     println!("{} {:.0}%", result.candidate_id, result.score * 100.0);
//! }
//! ```

pub mod config;

pub use crate::config::{ConfigLoadError, SkillSyncConfig};

pub use embed::{
    embed_skills, join_phrase, EmbedConfig, EmbedError, SkillEmbedding, SkillEncoder,
};
pub use matcher::{
    complementarity, diversity, experience_match, experience_rank, explain, semantic_similarity,
    set_match_metrics, CandidateProfile, ComponentScores, MatchConfig, MatchError, MatchMetrics,
    MatchResult, RequesterProfile, Role, ScoreWeights, SkillMatcher,
};

/// Build a ready-to-use [`SkillMatcher`] from a loaded configuration,
/// constructing the encoder with the capability check along the way.
pub fn matcher_from_config(config: &SkillSyncConfig) -> Result<SkillMatcher, MatchError> {
    let encoder = SkillEncoder::from_config(config.embed.clone())?;
    SkillMatcher::new(encoder, config.matcher.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matcher_from_default_config_works() {
        let config = SkillSyncConfig::default();
        let engine = matcher_from_config(&config).expect("engine");
        assert!((engine.config().min_score - 0.2).abs() < 1e-6);
    }

    #[test]
    fn matcher_from_config_propagates_invalid_embed_config() {
        let mut config = SkillSyncConfig::default();
        config.embed.dimension = 0;
        assert!(matcher_from_config(&config).is_err());
    }
}
