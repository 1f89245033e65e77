use crate::anchor::{locate_span, LocatedSpan};
use crate::page::PageSource;
use crate::types::{ContentNode, HeadingRecord, IndexEntry, NodeId};
use crate::DoctreeError;

/// Assemble an ordered sequence of heading records into a nested content tree.
///
/// Each record's text span is carved from the page window between its own
/// start page and the next record's start page (or the document end), and the
/// node is attached under its parent using a depth stack: a heading at the
/// same or shallower depth closes every deeper open branch.
///
/// An empty outline yields an empty tree. A record with an empty title, a
/// zero start page, or an unresolvable depth aborts the run with
/// [`DoctreeError::MalformedRecord`]; no partial tree is returned.
pub fn build_tree<P: PageSource + ?Sized>(
    records: &[HeadingRecord],
    pages: &P,
) -> Result<Vec<ContentNode>, DoctreeError> {
    let mut roots: Vec<ContentNode> = Vec::new();
    let mut stack: Vec<(usize, ContentNode)> = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let level = validate(record, index)?;

        let next = records.get(index + 1);
        let end_page = next.map_or(pages.page_count(), |n| n.start_page);
        let window = window_text(pages, record.start_page, end_page);
        let LocatedSpan { text, anchored } =
            locate_span(&window, &record.title, next.map(|n| n.title.as_str()));

        let node = ContentNode {
            title: record.title.clone(),
            id: NodeId::generate(),
            start_page: record.start_page,
            text,
            anchored,
            children: Vec::new(),
        };

        // Pop open branches at the same or deeper depth; each popped node
        // becomes a child of the node beneath it, or a root.
        while let Some((top_depth, _)) = stack.last() {
            if *top_depth >= level {
                let (_, finished) = stack.pop().unwrap();
                attach(finished, &mut stack, &mut roots);
            } else {
                break;
            }
        }

        stack.push((level, node));
    }

    // Unwind the remaining open branches.
    while let Some((_, finished)) = stack.pop() {
        attach(finished, &mut stack, &mut roots);
    }

    Ok(roots)
}

fn attach(node: ContentNode, stack: &mut [(usize, ContentNode)], roots: &mut Vec<ContentNode>) {
    if let Some((_, parent)) = stack.last_mut() {
        parent.children.push(node);
    } else {
        roots.push(node);
    }
}

fn validate(record: &HeadingRecord, index: usize) -> Result<usize, DoctreeError> {
    if record.title.trim().is_empty() {
        return Err(DoctreeError::MalformedRecord {
            index,
            reason: "title is empty".to_string(),
        });
    }
    if record.start_page == 0 {
        return Err(DoctreeError::MalformedRecord {
            index,
            reason: "start page must be >= 1 (pages are 1-based)".to_string(),
        });
    }
    record
        .resolve_level()
        .map_err(|e| DoctreeError::MalformedRecord {
            index,
            reason: e.to_string(),
        })
}

/// Concatenated text of the 1-based page range `[start_page, end_page]`,
/// clamped to the document. Pages are joined with a newline so words at page
/// boundaries stay separate.
fn window_text<P: PageSource + ?Sized>(pages: &P, start_page: usize, end_page: usize) -> String {
    let count = pages.page_count();
    let start = start_page.saturating_sub(1).min(count);
    let end = end_page.min(count);

    let mut out = String::new();
    for index in start..end {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(pages.page_text(index));
    }
    out
}

/// Flatten a tree into one entry per node, in document order, each carrying
/// its breadcrumb path from the root.
pub fn flatten(nodes: &[ContentNode]) -> Vec<IndexEntry> {
    let mut entries = Vec::new();
    for node in nodes {
        flatten_node(node, &[], &mut entries);
    }
    entries
}

fn flatten_node(node: &ContentNode, parent_path: &[String], entries: &mut Vec<IndexEntry>) {
    let mut path = parent_path.to_vec();
    path.push(node.title.clone());

    entries.push(IndexEntry {
        id: node.id.clone(),
        title: node.title.clone(),
        start_page: node.start_page,
        path: path.clone(),
    });

    for child in &node.children {
        flatten_node(child, &path, entries);
    }
}
