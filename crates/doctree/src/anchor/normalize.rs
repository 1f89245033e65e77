use unicode_normalization::UnicodeNormalization;

/// Canonicalize text for comparison.
///
/// Applies Unicode NFKC normalization, then collapses every whitespace run
/// (spaces, tabs, newlines, non-breaking spaces) to a single space and trims
/// the ends. Idempotent. Page text and heading titles go through the same
/// function so the two sides compare cleanly regardless of line wrapping or
/// encoding differences.
pub fn normalize(text: &str) -> String {
    let composed: String = text.nfkc().collect();
    composed.split_whitespace().collect::<Vec<_>>().join(" ")
}
