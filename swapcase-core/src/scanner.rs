//! Occurrence detection in file contents and path basenames (§4.3).

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use crate::casing::{Casing, VariantSet, PRIORITY_ORDER};
use crate::enumerate::{Node, NodeKind};
use crate::error::{Result, SwapcaseError};

/// A located match within one line of text or within a path basename (§3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub casing: Casing,
    pub matched: String,
    /// Zero-based code-point offset from the start of the containing text.
    pub start_index: usize,
    /// Offset of the match within its line (content) or the full path (path).
    pub line_start_index: usize,
    /// The text of the containing line (content) or the full path (path).
    pub line: String,
    /// Zero-based line index. Always 0 for path occurrences.
    pub line_number: usize,
    pub surrounding_before: Vec<String>,
    pub surrounding_after: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Content,
    Path,
}

#[derive(Debug, Clone)]
pub struct OccurrenceGroup {
    pub path: PathBuf,
    pub kind: GroupKind,
    pub occurrences: Vec<Occurrence>,
}

/// Finds every non-overlapping occurrence of every variant in `line`.
///
/// Variants are tried in `PRIORITY_ORDER`; a variant claims every
/// left-to-right, non-overlapping occurrence of its own string, but any
/// start index already claimed by an earlier (higher-priority) variant is
/// rejected. Results are returned sorted ascending by start index.
fn find_occurrences_in_text(text: &[char], variants: &VariantSet) -> Vec<(Casing, String, usize)> {
    let mut claimed = std::collections::HashSet::new();
    let mut found = Vec::new();

    for &tag in &PRIORITY_ORDER {
        let variant = variants.lookup(tag);
        let needle: Vec<char> = variant.value.chars().collect();
        if needle.is_empty() {
            continue;
        }

        let mut start = 0usize;
        while start + needle.len() <= text.len() {
            if text[start..start + needle.len()] == needle[..] && !claimed.contains(&start) {
                claimed.insert(start);
                found.push((tag, variant.value.clone(), start));
            }
            start += 1;
        }
    }

    found.sort_by_key(|(_, _, start)| *start);
    found
}

/// Returns up to `count` lines before `idx` and after `idx`. `before` is
/// nearest-line-first (the line immediately above comes first), matching
/// `examples/original_source/scanner/scanner.go`'s `GetSurroundingLines`,
/// which walks backward from `lineIdx-1` and appends without reversing.
fn surrounding(lines: &[&str], idx: usize, count: usize) -> (Vec<String>, Vec<String>) {
    let before = lines[..idx]
        .iter()
        .rev()
        .take(count)
        .map(|s| s.to_string())
        .collect();
    let after = lines[idx + 1..]
        .iter()
        .take(count)
        .map(|s| s.to_string())
        .collect();
    (before, after)
}

/// Scans file contents for occurrences of every variant in `variants`.
///
/// Offsets are counted in code points, including one per line-separating
/// `\n` — the sole way downstream rewriting stays aligned with string
/// slicing on non-ASCII content.
pub fn scan_content(content: &str, variants: &VariantSet) -> Vec<Occurrence> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut result = Vec::new();
    let mut total_index = 0usize;

    for (line_idx, line) in lines.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        let hits = find_occurrences_in_text(&chars, variants);
        if !hits.is_empty() {
            let (before, after) = surrounding(&lines, line_idx, 3);
            for (casing, matched, line_start_index) in hits {
                result.push(Occurrence {
                    casing,
                    matched,
                    start_index: total_index + line_start_index,
                    line_start_index,
                    line: (*line).to_string(),
                    line_number: line_idx,
                    surrounding_before: before.clone(),
                    surrounding_after: after.clone(),
                });
            }
        }
        total_index += chars.len() + 1;
    }

    result
}

/// Scans a path's basename for occurrences of every variant in `variants`.
///
/// Only the basename is searched — ancestor directory segments are
/// covered by their own `Node` entries, scanned independently.
pub fn scan_path(full_path: &str, variants: &VariantSet) -> Vec<Occurrence> {
    let (dir, basename) = match full_path.rfind('/') {
        Some(idx) => (&full_path[..idx], &full_path[idx + 1..]),
        None => ("", full_path),
    };
    let dir_len_chars = if dir.is_empty() {
        0
    } else {
        dir.chars().count() + 1
    };

    let basename_chars: Vec<char> = basename.chars().collect();
    let hits = find_occurrences_in_text(&basename_chars, variants);

    hits.into_iter()
        .map(|(casing, matched, line_start_index)| Occurrence {
            casing,
            matched,
            start_index: dir_len_chars + line_start_index,
            line_start_index: dir_len_chars + line_start_index,
            line: full_path.to_string(),
            line_number: 0,
            surrounding_before: Vec::new(),
            surrounding_after: Vec::new(),
        })
        .collect()
}

/// Establishes the application order: all `Content` groups first, then
/// `Path` groups from deepest to shallowest (§3 OccurrenceGroupOrdering).
/// This is a correctness criterion, not presentation: renaming a parent
/// directory before its children would invalidate the children's paths.
pub fn sort_groups(groups: &mut [OccurrenceGroup]) {
    groups.sort_by(|a, b| {
        use std::cmp::Ordering;
        match (a.kind, b.kind) {
            (GroupKind::Content, GroupKind::Path) => Ordering::Less,
            (GroupKind::Path, GroupKind::Content) => Ordering::Greater,
            (GroupKind::Content, GroupKind::Content) => Ordering::Equal,
            (GroupKind::Path, GroupKind::Path) => depth(&b.path).cmp(&depth(&a.path)),
        }
    });
}

fn depth(p: &Path) -> usize {
    p.components().count()
}

fn scan_node(node: &Node, variants: &VariantSet) -> Result<Vec<OccurrenceGroup>> {
    let mut groups = Vec::new();

    if node.kind == NodeKind::File {
        let content = std::fs::read_to_string(&node.path).map_err(|e| SwapcaseError::IoRead {
            path: node.path.clone(),
            source: e,
        })?;
        let occurrences = scan_content(&content, variants);
        if !occurrences.is_empty() {
            groups.push(OccurrenceGroup {
                path: node.path.clone(),
                kind: GroupKind::Content,
                occurrences,
            });
        }
    }

    let path_str = node.path.to_string_lossy();
    let path_occurrences = scan_path(&path_str, variants);
    if !path_occurrences.is_empty() {
        groups.push(OccurrenceGroup {
            path: node.path.clone(),
            kind: GroupKind::Path,
            occurrences: path_occurrences,
        });
    }

    Ok(groups)
}

/// Scans every node concurrently, one scoped thread per node, collecting
/// results through a bounded channel (capacity 20, per §5).
///
/// On the first worker error, the driver stops reading from the channel
/// and returns the error; threads still queued to send simply block on
/// the full channel until the scope joins them — no result is silently
/// dropped, and nothing panics on a closed channel.
pub fn scan_tree(nodes: &[Node], variants: &VariantSet) -> Result<Vec<OccurrenceGroup>> {
    let (tx, rx) = mpsc::sync_channel::<Result<Vec<OccurrenceGroup>>>(20);

    std::thread::scope(|scope| {
        for node in nodes {
            let tx = tx.clone();
            scope.spawn(move || {
                let outcome = scan_node(node, variants);
                let _ = tx.send(outcome);
            });
        }
        drop(tx);

        let mut collected = Vec::new();
        let mut first_error = None;
        for outcome in rx {
            match outcome {
                Ok(mut groups) => collected.append(&mut groups),
                Err(e) => {
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                },
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        sort_groups(&mut collected);
        Ok(collected)
    })
}
