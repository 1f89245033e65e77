use std::sync::OnceLock;

use regex::Regex;

/// Leading outline numbering: one or more dot-separated integers followed by
/// a dot and optional whitespace ("3.2.1. ", "4. ").
fn numbering_prefix() -> &'static Regex {
    static RE_NUMBERING: OnceLock<Regex> = OnceLock::new();
    RE_NUMBERING.get_or_init(|| Regex::new(r"^\d+(?:\.\d+)*\.\s*").unwrap())
}

/// Compile a heading title into a flexible matcher over normalized text.
///
/// The title's own numbering prefix (if any) is stripped, the remainder is
/// matched literally with every space relaxed to `\s+`, and an optional
/// numbering-prefix group is prepended so the matcher accepts the title
/// whether or not a rendered number precedes it in the body. Matching is
/// case-insensitive and may span line boundaries.
///
/// Returns `None` if the resulting expression cannot be compiled (e.g. a
/// pathologically long title exceeding the regex size limit); callers treat
/// that the same as an unmatched anchor.
pub fn heading_pattern(title: &str) -> Option<Regex> {
    let clean = numbering_prefix().replace(title, "");
    let flexible = clean
        .trim()
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    let pattern = format!(r"(?is)(?:\d+(?:\.\d+)*\.\s*)?{flexible}");

    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            log::debug!("heading pattern for {title:?} failed to compile: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(title: &str) -> Regex {
        heading_pattern(title).unwrap()
    }

    #[test]
    fn test_plain_title_matches() {
        let re = pattern("Introduction");
        assert!(re.is_match("Introduction"));
    }

    #[test]
    fn test_case_insensitive() {
        let re = pattern("Introduction");
        assert!(re.is_match("INTRODUCTION"));
        assert!(re.is_match("introduction"));
    }

    #[test]
    fn test_title_numbering_stripped() {
        // "3.2. Risk Assessment" must match body text without the number.
        let re = pattern("3.2. Risk Assessment");
        assert!(re.is_match("Risk Assessment"));
    }

    #[test]
    fn test_whitespace_relaxed() {
        let re = pattern("3.2. Risk Assessment");
        assert!(re.is_match("Risk   Assessment"));
        assert!(re.is_match("Risk\nAssessment"));
    }

    #[test]
    fn test_optional_rendered_number() {
        let re = pattern("Risk Assessment");
        let m = re.find("see 3.2. Risk Assessment for details").unwrap();
        // The optional prefix group pulls the match start back to the number.
        assert!(m.as_str().starts_with("3.2."));
    }

    #[test]
    fn test_deep_numbering_prefix() {
        let re = pattern("1.2.3.4. Deeply Nested");
        assert!(re.is_match("Deeply Nested"));
        assert!(re.is_match("1.2.3.4. Deeply Nested"));
    }

    #[test]
    fn test_metacharacters_escaped() {
        let re = pattern("Results (2024)?");
        assert!(re.is_match("Results (2024)?"));
        assert!(!re.is_match("Results 2024"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let re = pattern("Methods");
        let text = "Methods are discussed later. Methods";
        assert_eq!(re.find(text).unwrap().start(), 0);
    }

    #[test]
    fn test_bare_number_title_matches_everywhere() {
        // A title that is nothing but numbering degenerates to the optional
        // prefix group, which matches (emptily) at the start of any text.
        let re = pattern("3.");
        assert_eq!(re.find("anything").unwrap().start(), 0);
    }
}
