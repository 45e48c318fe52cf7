//! Lexical similarity (Tier 1).
//!
//! Bag-of-words cosine over term frequencies. Used as the per-candidate
//! fallback when a candidate has no usable embeddings, and as the pool-wide
//! fallback when Tier 2 cannot run at all.


use std::collections::HashMap;

/// Punctuation stripped before tokenizing, covering ASCII and CJK forms.
const PUNCTUATION: &[char] = &[
    ',', '.', '!', '?', ';', ':', '\'', '"', '(', ')', '[', ']', '{', '}', '，', '。', '！', '？',
    '、', '；', '：', '“', '”', '‘', '’', '（', '）', '《', '》', '【', '】',
];

/// Splits text into lower-case tokens.
///
/// Punctuation and whitespace are both treated as separators; empty input
/// yields an empty token list.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || PUNCTUATION.contains(&c))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Cosine similarity of the two texts' term-frequency vectors, in [0, 1].
///
/// The union vocabulary never needs to be materialized: terms present in only
/// one text contribute nothing to the dot product. Zero-magnitude input
/// (either text empty after tokenization) scores 0.0, never NaN.
pub fn similarity(a: &str, b: &str) -> f32 {
    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);
    let counts_a = term_counts(&tokens_a);
    let counts_b = term_counts(&tokens_b);

    let dot: f32 = counts_a
        .iter()
        .filter_map(|(term, &fa)| counts_b.get(term).map(|&fb| (fa * fb) as f32))
        .sum();

    let norm_a = magnitude(&counts_a);
    let norm_b = magnitude(&counts_b);

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

fn term_counts(tokens: &[String]) -> HashMap<&str, u32> {
    let mut counts = HashMap::with_capacity(tokens.len());
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

fn magnitude(counts: &HashMap<&str, u32>) -> f32 {
    counts
        .values()
        .map(|&f| (f * f) as f32)
        .sum::<f32>()
        .sqrt()
}
