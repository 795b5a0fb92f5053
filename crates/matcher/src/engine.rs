use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;

use embed::{SkillEmbedding, SkillEncoder};
use rayon::prelude::*;

use crate::explain::explain;
use crate::metrics::metrics_recorder;
use crate::score::{complementarity, diversity, experience_match, semantic_similarity};
use crate::types::{
    CandidateProfile, ComponentScores, MatchConfig, MatchError, MatchResult, RequesterProfile,
};


/// The match engine: scores a candidate pool against one requester and
/// returns ranked results.
///
/// Construct once with a shared [`SkillEncoder`] and reuse across requests;
/// a ranking pass holds no state beyond its inputs.
pub struct SkillMatcher {
    encoder: Arc<SkillEncoder>,
    cfg: MatchConfig,
}

impl SkillMatcher {
    /// Build an engine owning its encoder.
    pub fn new(encoder: SkillEncoder, cfg: MatchConfig) -> Result<Self, MatchError> {
        Self::with_encoder_arc(Arc::new(encoder), cfg)
    }

    /// Build an engine sharing an encoder with other components.
    pub fn with_encoder_arc(encoder: Arc<SkillEncoder>, cfg: MatchConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        Ok(Self { encoder, cfg })
    }

    /// The engine configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Score every candidate in `pool` against `requester` and return the
    /// matches exceeding the configured threshold, sorted by descending
    /// score. Equal scores keep their pool order.
    ///
    /// A requester without skills gets an empty result set; "no match
    /// possible" is a valid outcome, not an error. Candidates without skills
    /// are skipped, and a candidate whose scoring goes wrong is excluded
    /// without aborting the pass.
    pub fn rank(
        &self,
        requester: &RequesterProfile,
        pool: &[CandidateProfile],
    ) -> Result<Vec<MatchResult>, MatchError> {
        let start = Instant::now();

        if requester.skills.is_empty() {
            tracing::debug!(
                requester = %requester.id,
                "requester has no skills, returning no matches"
            );
            self.observe(requester, start, pool.len(), 0);
            return Ok(Vec::new());
        }

        let (requester_embedding, candidate_embeddings) = self.encode_profiles(requester, pool)?;

        let scored: Vec<Option<MatchResult>> = if self.cfg.parallel {
            pool.par_iter()
                .zip(candidate_embeddings.par_iter())
                .map(|(candidate, embedding)| {
                    self.score_candidate(requester, &requester_embedding, candidate, embedding)
                })
                .collect()
        } else {
            pool.iter()
                .zip(candidate_embeddings.iter())
                .map(|(candidate, embedding)| {
                    self.score_candidate(requester, &requester_embedding, candidate, embedding)
                })
                .collect()
        };

        let mut results: Vec<MatchResult> = scored.into_iter().flatten().collect();
        // Stable sort: ties keep the order candidates arrived in.
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        if let Some(cap) = self.cfg.max_results {
            results.truncate(cap);
        }

        self.observe(requester, start, pool.len(), results.len());
        Ok(results)
    }

    /// Encode the requester and the whole pool in one pass through the async
    /// embed API, reusing the surrounding runtime when one exists.
    fn encode_profiles(
        &self,
        requester: &RequesterProfile,
        pool: &[CandidateProfile],
    ) -> Result<(SkillEmbedding, Vec<SkillEmbedding>), MatchError> {
        let work = async {
            let requester_embedding = self.encoder.encode(&requester.skills).await;
            let lists: Vec<&[String]> = pool.iter().map(|c| c.skills.as_slice()).collect();
            let candidate_embeddings = self.encoder.encode_batch(&lists).await;
            (requester_embedding, candidate_embeddings)
        };

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            Ok(tokio::task::block_in_place(|| handle.block_on(work)))
        } else {
            let runtime =
                tokio::runtime::Runtime::new().map_err(|e| MatchError::Runtime(e.to_string()))?;
            Ok(runtime.block_on(work))
        }
    }

    fn score_candidate(
        &self,
        requester: &RequesterProfile,
        requester_embedding: &SkillEmbedding,
        candidate: &CandidateProfile,
        candidate_embedding: &SkillEmbedding,
    ) -> Option<MatchResult> {
        if candidate.skills.is_empty() {
            tracing::debug!(candidate = %candidate.id, "skipping candidate without skills");
            return None;
        }

        let components = ComponentScores {
            semantic: semantic_similarity(
                &requester_embedding.vector,
                &candidate_embedding.vector,
            ),
            complementarity: complementarity(&requester.skills, &candidate.skills),
            experience: experience_match(
                &requester.experience,
                &candidate.experience,
                requester.role,
            ),
            diversity: diversity(&requester.skills, &candidate.skills),
        };
        let score = components.combine(&self.cfg.weights);

        if !score.is_finite() {
            tracing::warn!(
                candidate = %candidate.id,
                "non-finite score for candidate, excluding from results"
            );
            return None;
        }
        if score <= self.cfg.min_score {
            return None;
        }

        let explanation = self
            .cfg
            .explain
            .then(|| explain(&components, score, &requester.skills, &candidate.skills));

        Some(MatchResult {
            candidate_id: candidate.id.clone(),
            score,
            components,
            skills: candidate.skills.clone(),
            explanation,
        })
    }

    fn observe(
        &self,
        requester: &RequesterProfile,
        start: Instant,
        pool_size: usize,
        result_count: usize,
    ) {
        if let Some(recorder) = metrics_recorder() {
            recorder.record_rank(&requester.id, start.elapsed(), pool_size, result_count);
        }
    }
}
