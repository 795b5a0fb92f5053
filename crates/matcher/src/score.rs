//! The four factor scorers behind a match total.
//!
//! Everything here is pure: two skill lists (and, for experience, two labels
//! plus a role) go in, a score in [0, 1] comes out. Degenerate inputs (empty
//! lists, mismatched vector dimensions, disjoint sets) map to defined
//! boundary scores, never errors.

use std::collections::HashSet;

use crate::types::Role;

/// Cosine similarity between two embeddings, remapped from [-1, 1] to [0, 1]
/// via `(cos + 1) / 2`.
///
/// Mismatched dimensions mean the vectors came from different encoders and
/// carry no comparable signal: the result is 0.0. A zero-magnitude vector has
/// no direction, so its cosine term is taken as 0.0 (landing on 0.5 after the
/// remap); the ranker never feeds this case because empty skill lists are
/// filtered before encoding.
pub fn semantic_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    let cos = if norm_a > 0.0 && norm_b > 0.0 {
        (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
    } else {
        0.0
    };
    (cos + 1.0) / 2.0
}

/// Fraction of the candidate's skills the requester does not already have:
/// `|candidate − requester| / |candidate|` over case-folded sets.
///
/// In a mentorship pairing the counterpart should bring skills the requester
/// lacks, so disjoint skill sets score 1.0 and a candidate who is a strict
/// subset of the requester scores 0.0. Either side empty scores 0.0.
pub fn complementarity(requester: &[String], candidate: &[String]) -> f32 {
    if requester.is_empty() || candidate.is_empty() {
        return 0.0;
    }
    let requester_set = fold_set(requester);
    let candidate_set = fold_set(candidate);
    let missing = candidate_set.difference(&requester_set).count();
    missing as f32 / candidate_set.len() as f32
}

/// Reward for a moderate amount of skill overlap.
///
/// `overlap_ratio = |intersection| / |union|` over case-folded sets, scored
/// on a triangular curve peaking at 0.3: `max(0, 1 − |0.3 − ratio| / 0.7)`.
/// Too little overlap leaves no shared vocabulary; total overlap leaves
/// nothing to exchange. No intersection (or either side empty) scores 0.0.
pub fn diversity(requester: &[String], candidate: &[String]) -> f32 {
    if requester.is_empty() || candidate.is_empty() {
        return 0.0;
    }
    let requester_set = fold_set(requester);
    let candidate_set = fold_set(candidate);
    let intersection = requester_set.intersection(&candidate_set).count();
    if intersection == 0 {
        return 0.0;
    }
    let union = requester_set.union(&candidate_set).count();
    let overlap_ratio = intersection as f32 / union as f32;
    (1.0 - (0.3 - overlap_ratio).abs() / 0.7).max(0.0)
}

/// Ordinal rank of a free-text seniority label. Unknown or empty labels rank
/// as intermediate.
pub fn experience_rank(label: &str) -> i8 {
    match label.to_lowercase().as_str() {
        "beginner" => 1,
        "junior" => 2,
        "intermediate" => 3,
        "senior" => 4,
        "expert" | "advanced" => 5,
        _ => 3,
    }
}

/// Experience-level compatibility from the discrete bucket table.
///
/// For a mentee-seeking requester the ideal counterpart is one level above;
/// for a mentor-seeking requester the table is applied with the gap reversed.
/// Equal seniority (`diff == 0`) and gaps of four or more levels share the
/// catch-all bucket (0.4); that is the shipped behavior and tests pin it.
pub fn experience_match(requester_level: &str, candidate_level: &str, role: Role) -> f32 {
    let requester_rank = experience_rank(requester_level);
    let candidate_rank = experience_rank(candidate_level);
    let diff = match role {
        Role::MenteeSeeking => candidate_rank - requester_rank,
        Role::MentorSeeking => requester_rank - candidate_rank,
    };
    if diff < 0 {
        // Counterpart on the wrong side of the gap: poor fit.
        0.3
    } else {
        match diff {
            1 => 1.0,
            2 => 0.9,
            3 => 0.6,
            _ => 0.4,
        }
    }
}

/// Case-folded skill set used by every set-based comparison.
pub(crate) fn fold_set(skills: &[String]) -> HashSet<String> {
    skills.iter().map(|s| s.to_lowercase()).collect()
}
