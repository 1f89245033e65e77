use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const NODE_ID_LEN: usize = 8;
const HEX: &[u8; 16] = b"0123456789abcdef";

/// Opaque short identifier assigned to each node of a built tree.
///
/// Ids are random 8-character lowercase hex strings, generated once per node
/// and unique within a run with high probability. Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let id: String = (0..NODE_ID_LEN)
            .map(|_| HEX[rng.gen_range(0..HEX.len())] as char)
            .collect();
        NodeId(id)
    }

    pub fn parse(s: &str) -> Result<Self, InvalidNodeId> {
        let valid = s.len() == NODE_ID_LEN
            && s.chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        if valid {
            Ok(NodeId(s.to_string()))
        } else {
            Err(InvalidNodeId)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a heading declares its nesting depth.
///
/// Native outlines carry an explicit level (1 = root). Inferred outlines carry
/// a dotted numbering string instead, whose component count is the depth
/// ("1.2.3" sits at depth 3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutlineDepth {
    Level(usize),
    Structure(String),
}

/// One declared section heading, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRecord {
    pub title: String,
    /// 1-based page on which the heading starts.
    pub start_page: usize,
    pub depth: OutlineDepth,
}

impl HeadingRecord {
    /// Record from the native outline form `(level, title, start_page)`.
    pub fn with_level(level: usize, title: impl Into<String>, start_page: usize) -> Self {
        HeadingRecord {
            title: title.into(),
            start_page,
            depth: OutlineDepth::Level(level),
        }
    }

    /// Record from the inferred outline form, carrying a dotted numbering
    /// string like "2.4".
    pub fn with_structure(
        title: impl Into<String>,
        start_page: usize,
        structure: impl Into<String>,
    ) -> Self {
        HeadingRecord {
            title: title.into(),
            start_page,
            depth: OutlineDepth::Structure(structure.into()),
        }
    }

    /// Nesting depth of this heading (>= 1, 1 = root).
    pub fn resolve_level(&self) -> Result<usize, InvalidDepth> {
        match &self.depth {
            OutlineDepth::Level(0) => Err(InvalidDepth::ZeroLevel),
            OutlineDepth::Level(n) => Ok(*n),
            OutlineDepth::Structure(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Err(InvalidDepth::EmptyStructure);
                }
                if s.split('.').any(|part| part.is_empty()) {
                    return Err(InvalidDepth::EmptyComponent);
                }
                Ok(s.split('.').count())
            }
        }
    }
}

/// Wire shape of one inferred-outline entry:
/// `{"title": ..., "physical_index": ..., "structure": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferredHeading {
    pub title: String,
    pub physical_index: usize,
    pub structure: String,
}

impl From<InferredHeading> for HeadingRecord {
    fn from(h: InferredHeading) -> Self {
        HeadingRecord::with_structure(h.title, h.physical_index, h.structure)
    }
}

/// One node of the built tree: a heading plus the exact text span it covers.
///
/// Serialized field names follow the external contract: `node_id`,
/// `start_index`, `nodes`. The `anchored` flag records whether the heading's
/// own anchor was found in its window; it is omitted from output in the
/// common (anchored) case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
    pub title: String,
    #[serde(rename = "node_id")]
    pub id: NodeId,
    #[serde(rename = "start_index")]
    pub start_page: usize,
    pub text: String,
    #[serde(default = "default_true", skip_serializing_if = "skip_if_true")]
    pub anchored: bool,
    #[serde(rename = "nodes")]
    pub children: Vec<ContentNode>,
}

fn default_true() -> bool {
    true
}

fn skip_if_true(b: &bool) -> bool {
    *b
}

/// Flat index entry for one node, with its breadcrumb path from the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    #[serde(rename = "node_id")]
    pub id: NodeId,
    pub title: String,
    #[serde(rename = "start_index")]
    pub start_page: usize,
    pub path: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid node ID format (expected 8 lowercase hex characters)")]
pub struct InvalidNodeId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidDepth {
    #[error("explicit level must be >= 1")]
    ZeroLevel,
    #[error("structure string is empty")]
    EmptyStructure,
    #[error("structure string has an empty component")]
    EmptyComponent,
}
