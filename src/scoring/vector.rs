//! Vector cosine similarity.

/// Cosine similarity of two embedding vectors.
///
/// Returns 0.0 (not NaN and not an error) when either vector is empty, the
/// lengths differ, or either magnitude is zero. The result is the standard
/// unclamped cosine in [-1, 1]; embedding values in this domain are
/// non-negative-ish, so in practice scores land in [0, 1].
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}
