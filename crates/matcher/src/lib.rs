//! # SkillSync Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the vectorization layer (`embed`). It scores a
//! pool of candidate counterparts against one requester using four factors
//! (semantic similarity of skill embeddings, skill complementarity,
//! experience compatibility, and skill-overlap diversity), combines them
//! with fixed weights, and returns results above a minimum-score threshold,
//! best first.
//!
//! In a typical deployment you will:
//! - Resolve the requester's and candidates' skill lists and experience
//!   labels from your user store.
//! - Build one [`SkillMatcher`] at startup around a shared
//!   [`SkillEncoder`](embed::SkillEncoder) and call [`SkillMatcher::rank`]
//!   per request.
//!
//! ## Core Types
//!
//! - [`Role`]: direction of the desired seniority gap (mentee-seeking vs
//!   mentor-seeking).
//! - [`MatchConfig`]: threshold, factor weights, explanation and parallelism
//!   toggles.
//! - [`RequesterProfile`] / [`CandidateProfile`]: the inbound identity +
//!   skills + experience tuples.
//! - [`MatchResult`]: candidate identity, total score, per-factor
//!   [`ComponentScores`], and an optional explanation string.
//! - [`SkillMatcher`]: the engine wiring it all together.
//!
//! ## Example Usage
//!
//! ```
//! use embed::{EmbedConfig, SkillEncoder};
//! use matcher::{
//!     CandidateProfile, MatchConfig, RequesterProfile, Role, SkillMatcher,
//! };
//!
//! let encoder = SkillEncoder::from_config(EmbedConfig::default()).expect("encoder");
//! let matcher = SkillMatcher::new(encoder, MatchConfig::default()).expect("matcher");
//!
//! let requester = RequesterProfile {
//!     id: "mentee-42".into(),
//!     skills: vec!["Python".into(), "SQL".into()],
//!     experience: "intermediate".into(),
//!     role: Role::MenteeSeeking,
//! };
//! let pool = vec![CandidateProfile {
//!     id: "mentor-7".into(),
//!     skills: vec!["Python".into(), "SQL".into(), "Leadership".into()],
//!     experience: "senior".into(),
//! }];
//!
//! let matches = matcher.rank(&requester, &pool).expect("rank");
//! for m in matches {
//!     println!("{} score={:.2}", m.candidate_id, m.score);
//! }
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to
//! record per-rank latency, pool sizes, and result counts. This is typically
//! done once during service startup.

pub mod engine;
pub mod explain;
pub mod metrics;
pub mod score;
pub mod types;

pub use crate::engine::SkillMatcher;
pub use crate::explain::explain;
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::score::{
    complementarity, diversity, experience_match, experience_rank, semantic_similarity,
};
pub use crate::types::{
    CandidateProfile, ComponentScores, MatchConfig, MatchError, MatchResult, RequesterProfile,
    Role, ScoreWeights,
};
