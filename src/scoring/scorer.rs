//! Weighted multi-field pair scoring and reason generation.

use crate::constants::LOW_SCORE_THRESHOLD;
use crate::lexical;
use crate::profile::{FieldEmbeddings, Profile};

use super::types::PairSimilarities;
use super::vector::cosine_similarity;
use super::weights::FieldPairWeights;

/// Generic reason when the total score suggests an incomplete profile.
pub const LOW_SCORE_REASON: &str =
    "Overall match is low so far; completing your profile will improve recommendations";

/// Generic reason when no single pair stands out.
pub const GENERIC_REASON: &str =
    "Potential collaboration opportunity based on overall assessment";

/// Computes the four embedding pair similarities.
///
/// A pair is present only when both sides have an embedding of the same
/// non-zero length; anything else (including a model-version length mismatch)
/// leaves the pair absent.
pub fn embedding_pair_similarities(
    subject: &FieldEmbeddings,
    candidate: &FieldEmbeddings,
) -> PairSimilarities {
    PairSimilarities {
        skills_to_needs: vector_pair(&subject.skills, &candidate.needs),
        interests: vector_pair(&subject.interests, &candidate.interests),
        looking_for_to_skills: vector_pair(&subject.looking_for, &candidate.skills),
        needs_to_skills: vector_pair(&subject.needs, &candidate.skills),
    }
}

/// Computes the four lexical pair similarities over the same field pairs.
///
/// A pair is present only when both texts contain at least one token.
pub fn lexical_pair_similarities(subject: &Profile, candidate: &Profile) -> PairSimilarities {
    PairSimilarities {
        skills_to_needs: text_pair(&subject.skills, &candidate.needs),
        interests: text_pair(&subject.interests, &candidate.interests),
        looking_for_to_skills: text_pair(&subject.looking_for, &candidate.skills),
        needs_to_skills: text_pair(&subject.needs, &candidate.skills),
    }
}

/// Renormalized weighted average of the computable pairs.
///
/// The weighted sum is divided by the sum of only the weights whose pairs
/// were actually computed, so a candidate missing a field loses that pair's
/// information but is not penalized by a phantom zero term. No computable
/// pair at all scores 0.0.
pub fn weighted_score(sims: &PairSimilarities, weights: &FieldPairWeights) -> f32 {
    let terms = [
        (sims.skills_to_needs, weights.skills_to_needs),
        (sims.interests, weights.interests),
        (sims.looking_for_to_skills, weights.looking_for_to_skills),
        (sims.needs_to_skills, weights.needs_to_skills),
    ];

    let mut total = 0.0f32;
    let mut weight_sum = 0.0f32;
    for (similarity, weight) in terms {
        if let Some(similarity) = similarity {
            total += similarity * weight;
            weight_sum += weight;
        }
    }

    if weight_sum > 0.0 { total / weight_sum } else { 0.0 }
}

/// Human-readable reasons for a scored pair.
///
/// Each pair whose similarity exceeds `threshold` contributes one reason
/// naming the matched aspect and the percentage. With no pair above
/// threshold, a single generic reason is emitted: a profile-completeness
/// prompt for very low totals, otherwise a generic opportunity message.
pub fn match_reasons(sims: &PairSimilarities, total_score: f32, threshold: f32) -> Vec<String> {
    let mut reasons = Vec::new();

    if let Some(score) = sims.skills_to_needs {
        if score > threshold {
            reasons.push(format!(
                "Your skills closely match their needs (similarity: {:.1}%)",
                score * 100.0
            ));
        }
    }
    if let Some(score) = sims.interests {
        if score > threshold {
            reasons.push(format!(
                "You share similar research interests (similarity: {:.1}%)",
                score * 100.0
            ));
        }
    }
    if let Some(score) = sims.looking_for_to_skills {
        if score > threshold {
            reasons.push(format!(
                "Their skills match the collaborator you are looking for (similarity: {:.1}%)",
                score * 100.0
            ));
        }
    }
    if let Some(score) = sims.needs_to_skills {
        if score > threshold {
            reasons.push(format!(
                "They could help with what you need (similarity: {:.1}%)",
                score * 100.0
            ));
        }
    }

    if reasons.is_empty() {
        if total_score < LOW_SCORE_THRESHOLD {
            reasons.push(LOW_SCORE_REASON.to_string());
        } else {
            reasons.push(GENERIC_REASON.to_string());
        }
    }

    reasons
}

fn vector_pair(a: &Option<Vec<f32>>, b: &Option<Vec<f32>>) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) if !a.is_empty() && a.len() == b.len() => {
            Some(cosine_similarity(a, b))
        }
        _ => None,
    }
}

fn text_pair(a: &str, b: &str) -> Option<f32> {
    if a.trim().is_empty() || b.trim().is_empty() {
        return None;
    }
    Some(lexical::similarity(a, b))
}
