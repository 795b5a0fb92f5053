//! Human-readable rationale for a match.
//!
//! Kept deliberately template-driven: the caller-facing apps localize and
//! restyle these strings, so the engine only commits to a stable shape that
//! is easy to assert on.

use crate::score::fold_set;
use crate::types::ComponentScores;

/// Fixed phrase for each factor, in the order used to break score ties.
const FACTOR_PHRASES: [&str; 4] = [
    "strong skill alignment",
    "complementary skill sets",
    "compatible experience levels",
    "diverse skill overlap",
];

/// Maximum number of shared skills spelled out before "and N more".
const MAX_LISTED_SHARED: usize = 3;

/// Build the explanation string for one scored candidate.
///
/// Shape: `"Match confidence: {total}%"`, plus `" (based on ...)"` naming the
/// top one or two factors scoring above 0.5, plus `". Shared interests: ..."`
/// listing up to three case-folded-intersection skills in the requester's
/// original casing and input order.
pub fn explain(
    scores: &ComponentScores,
    total: f32,
    requester_skills: &[String],
    candidate_skills: &[String],
) -> String {
    let mut factors = [
        (scores.semantic, FACTOR_PHRASES[0]),
        (scores.complementarity, FACTOR_PHRASES[1]),
        (scores.experience, FACTOR_PHRASES[2]),
        (scores.diversity, FACTOR_PHRASES[3]),
    ];
    // Stable sort keeps the fixed factor order for equal scores.
    factors.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    let top: Vec<&str> = factors
        .iter()
        .take(2)
        .filter(|(score, _)| *score > 0.5)
        .map(|(_, phrase)| *phrase)
        .collect();

    let shared = shared_skills(requester_skills, candidate_skills);

    let mut explanation = format!("Match confidence: {:.0}%", total * 100.0);
    if !top.is_empty() {
        explanation.push_str(&format!(" (based on {})", top.join(", ")));
    }
    if !shared.is_empty() {
        let mut listed = shared
            .iter()
            .take(MAX_LISTED_SHARED)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        if shared.len() > MAX_LISTED_SHARED {
            listed.push_str(&format!(" and {} more", shared.len() - MAX_LISTED_SHARED));
        }
        explanation.push_str(&format!(". Shared interests: {listed}"));
    }
    explanation
}

/// Skills both sides have, in the requester's casing and input order,
/// deduplicated case-insensitively.
fn shared_skills(requester_skills: &[String], candidate_skills: &[String]) -> Vec<String> {
    let candidate_set = fold_set(candidate_skills);
    let mut seen = std::collections::HashSet::new();
    requester_skills
        .iter()
        .filter(|skill| {
            let folded = skill.to_lowercase();
            candidate_set.contains(&folded) && seen.insert(folded)
        })
        .cloned()
        .collect()
}
