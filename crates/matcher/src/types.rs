use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Direction of the seniority gap the requester is looking for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// The requester wants a more senior counterpart (a mentee looking for a
    /// mentor).
    #[default]
    MenteeSeeking,
    /// The requester wants a less senior counterpart (a mentor looking for a
    /// mentee).
    MentorSeeking,
}

/// The four independent factor scores, each in [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ComponentScores {
    /// Cosine similarity of the two skill embeddings, remapped to [0, 1].
    pub semantic: f32,
    /// Fraction of the candidate's skills the requester lacks.
    pub complementarity: f32,
    /// Experience-level compatibility from the discrete lookup table.
    pub experience: f32,
    /// Reward for moderate (not minimal, not total) skill overlap.
    pub diversity: f32,
}

impl ComponentScores {
    /// Weighted linear combination into the total score.
    pub fn combine(&self, weights: &ScoreWeights) -> f32 {
        weights.semantic * self.semantic
            + weights.complementarity * self.complementarity
            + weights.experience * self.experience
            + weights.diversity * self.diversity
    }
}

/// Weights of the four factors. Fixed per engine instance; the defaults are
/// the tuned production values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreWeights {
    #[serde(default = "default_semantic_weight")]
    pub semantic: f32,
    #[serde(default = "default_complementarity_weight")]
    pub complementarity: f32,
    #[serde(default = "default_experience_weight")]
    pub experience: f32,
    #[serde(default = "default_diversity_weight")]
    pub diversity: f32,
}

impl ScoreWeights {
    /// Weights must be non-negative and sum to 1.0 so the combined score
    /// stays in [0, 1].
    pub fn validate(&self) -> Result<(), MatchError> {
        let parts = [
            ("semantic", self.semantic),
            ("complementarity", self.complementarity),
            ("experience", self.experience),
            ("diversity", self.diversity),
        ];
        for (name, value) in parts {
            if !(0.0..=1.0).contains(&value) {
                return Err(MatchError::InvalidConfig(format!(
                    "weight {name} must be in [0.0, 1.0] (got {value})"
                )));
            }
        }
        let sum: f32 = parts.iter().map(|(_, v)| v).sum();
        if (sum - 1.0).abs() > 1e-5 {
            return Err(MatchError::InvalidConfig(format!(
                "weights must sum to 1.0 (got {sum})"
            )));
        }
        Ok(())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            semantic: default_semantic_weight(),
            complementarity: default_complementarity_weight(),
            experience: default_experience_weight(),
            diversity: default_diversity_weight(),
        }
    }
}

/// Engine configuration. Cheap to clone and serde-friendly so it can live in
/// a deployment config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Candidates whose total score does not exceed this threshold are
    /// dropped from the results.
    #[serde(default = "default_min_score")]
    pub min_score: f32,
    /// Factor weights used by the combiner.
    #[serde(default)]
    pub weights: ScoreWeights,
    /// Whether to attach a human-readable explanation to each result.
    #[serde(default = "default_true")]
    pub explain: bool,
    /// Optional cap on the number of results returned after sorting.
    #[serde(default)]
    pub max_results: Option<usize>,
    /// Score the candidate pool on the rayon thread pool. Output is
    /// identical to the serial path; only wall-clock changes.
    #[serde(default)]
    pub parallel: bool,
}

impl MatchConfig {
    /// Validate the configuration for engine construction.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(MatchError::InvalidConfig(format!(
                "min_score must be in [0.0, 1.0] (got {})",
                self.min_score
            )));
        }
        if self.max_results == Some(0) {
            return Err(MatchError::InvalidConfig(
                "max_results must be greater than zero when set".into(),
            ));
        }
        self.weights.validate()
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            weights: ScoreWeights::default(),
            explain: true,
            max_results: None,
            parallel: false,
        }
    }
}

fn default_semantic_weight() -> f32 {
    0.40
}
fn default_complementarity_weight() -> f32 {
    0.25
}
fn default_experience_weight() -> f32 {
    0.20
}
fn default_diversity_weight() -> f32 {
    0.15
}
fn default_min_score() -> f32 {
    0.2
}
fn default_true() -> bool {
    true
}

/// The person asking for matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequesterProfile {
    /// Opaque caller-supplied identity; the engine never interprets it.
    pub id: String,
    /// Free-text skill names, case-preserving.
    pub skills: Vec<String>,
    /// Free-text experience label ("beginner" .. "expert"); unknown labels
    /// rank as intermediate.
    #[serde(default)]
    pub experience: String,
    /// Which direction of seniority gap the requester wants.
    #[serde(default)]
    pub role: Role,
}

/// One counterpart in the candidate pool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateProfile {
    /// Opaque caller-supplied identity.
    pub id: String,
    /// Free-text skill names, case-preserving.
    pub skills: Vec<String>,
    /// Free-text experience label.
    #[serde(default)]
    pub experience: String,
}

/// A ranked match returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    /// Identity of the matched candidate.
    pub candidate_id: String,
    /// Combined score in [0, 1].
    pub score: f32,
    /// The individual factor scores behind `score`.
    pub components: ComponentScores,
    /// The candidate's skill list, echoed back for display.
    pub skills: Vec<String>,
    /// Human-readable rationale; present when explanations are enabled.
    pub explanation: Option<String>,
}

/// Errors produced by the match engine.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid engine configuration (weights, threshold, result cap).
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Embedding backend configuration was rejected.
    #[error("embed error: {0}")]
    Embed(#[from] embed::EmbedError),
    /// The sync/async bridge could not obtain a runtime.
    #[error("runtime error: {0}")]
    Runtime(String),
}
