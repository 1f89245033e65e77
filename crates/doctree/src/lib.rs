//! Outline-to-tree structuring engine.
//!
//! Turns a document's flat sequence of declared section headings into a
//! nested tree of content nodes, each carrying the exact span of extracted
//! text it covers. The engine anchors every heading title inside noisy,
//! page-segmented text, carves the span between a heading's own anchor and
//! the next heading's anchor, and nests nodes by declared depth with a stack.
//!
//! The engine is pure: page text arrives already materialized through the
//! [`PageSource`] trait and heading records through [`HeadingRecord`], both
//! produced by external collaborators (PDF bookmark readers, outline
//! inference, text extraction). No I/O happens here, so a run is
//! deterministic apart from the randomly generated node ids.
//!
//! ```rust
//! use doctree::{build_tree, HeadingRecord};
//!
//! let pages = vec![
//!     "Intro\nWelcome.".to_string(),
//!     "Details\nThe fine print.".to_string(),
//! ];
//! let records = vec![
//!     HeadingRecord::with_level(1, "Intro", 1),
//!     HeadingRecord::with_level(2, "Details", 2),
//! ];
//!
//! let roots = build_tree(&records, &pages)?;
//! assert_eq!(roots.len(), 1);
//! assert_eq!(roots[0].children[0].title, "Details");
//! # Ok::<(), doctree::DoctreeError>(())
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod anchor;
pub mod page;
pub mod tree;
pub mod types;

pub use anchor::{heading_pattern, locate_span, normalize, LocatedSpan};
pub use page::PageSource;
pub use tree::{build_tree, flatten};
pub use types::*;

#[derive(Debug, Error)]
pub enum DoctreeError {
    #[error("malformed heading record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

/// A built tree together with its flat navigation index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredDocument {
    pub roots: Vec<ContentNode>,
    pub index: Vec<IndexEntry>,
}

/// Build the tree and its flat index in one call.
pub fn structure<P: PageSource + ?Sized>(
    records: &[HeadingRecord],
    pages: &P,
) -> Result<StructuredDocument, DoctreeError> {
    let roots = tree::build_tree(records, pages)?;
    let index = tree::flatten(&roots);
    Ok(StructuredDocument { roots, index })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_builds_tree_and_index() {
        let pages = vec![
            "Chapter One\nText.".to_string(),
            "Appendix\nTables.".to_string(),
        ];
        let records = vec![
            HeadingRecord::with_level(1, "Chapter One", 1),
            HeadingRecord::with_level(1, "Appendix", 2),
        ];

        let doc = structure(&records, &pages).unwrap();
        assert_eq!(doc.roots.len(), 2);
        assert_eq!(doc.index.len(), 2);
        assert_eq!(doc.index[1].path, ["Appendix"]);
    }

    #[test]
    fn test_structure_empty_outline() {
        let pages = vec!["unstructured text".to_string()];
        let doc = structure(&[], &pages).unwrap();
        assert!(doc.roots.is_empty());
        assert!(doc.index.is_empty());
    }

    #[test]
    fn test_error_names_offending_record() {
        let pages = vec!["text".to_string()];
        let records = vec![
            HeadingRecord::with_level(1, "Ok", 1),
            HeadingRecord::with_level(0, "Bad", 1),
        ];
        let err = structure(&records, &pages).unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed heading record at index 1: explicit level must be >= 1"
        );
    }

    #[test]
    fn test_inferred_outline_end_to_end() {
        let outline_json = r#"[
            {"title": "1. Overview", "physical_index": 1, "structure": "1"},
            {"title": "1.1. Goals", "physical_index": 1, "structure": "1.1"},
            {"title": "2. Design", "physical_index": 2, "structure": "2"}
        ]"#;
        let inferred: Vec<InferredHeading> = serde_json::from_str(outline_json).unwrap();
        let records: Vec<HeadingRecord> = inferred.into_iter().map(Into::into).collect();

        let pages = vec![
            "1. Overview\nIntro text.\n1.1. Goals\nGoal text.".to_string(),
            "2. Design\nDesign text.".to_string(),
        ];
        let doc = structure(&records, &pages).unwrap();

        assert_eq!(doc.roots.len(), 2);
        assert_eq!(doc.roots[0].children.len(), 1);
        assert_eq!(doc.roots[0].children[0].title, "1.1. Goals");
        assert_eq!(doc.roots[0].text, "1. Overview Intro text.");
        assert_eq!(doc.roots[1].text, "2. Design Design text.");
    }
}
