//! Producing replacement text and applying it to files and paths (§4.4).

use std::path::{Path, PathBuf};

use crate::casing::VariantSet;
use crate::error::{Result, SwapcaseError};
use crate::scanner::{GroupKind, Occurrence, OccurrenceGroup};

/// An injected file-write capability. The real primitive and dry-run's
/// no-op both implement this signature, so the rewriter never needs to
/// know which one it was given (§4.4, §9 "Injected mutation primitives").
pub type WriteFn<'a> = dyn Fn(&Path, &str) -> std::io::Result<()> + 'a;

/// An injected path-rename capability, same shape as `WriteFn`.
pub type RenameFn<'a> = dyn Fn(&Path, &Path) -> std::io::Result<()> + 'a;

/// The real file-write primitive: writes `content` to `path`, preserving
/// the original mode bits. Stat/chmod failures after a successful write
/// are swallowed (write primacy) — the content change already landed.
pub fn real_write(path: &Path, content: &str) -> std::io::Result<()> {
    let original_mode = std::fs::metadata(path).map(|m| m.permissions()).ok();
    std::fs::write(path, content)?;
    if let Some(perm) = original_mode {
        let _ = std::fs::set_permissions(path, perm);
    }
    Ok(())
}

/// The real rename primitive.
pub fn real_rename(old: &Path, new: &Path) -> std::io::Result<()> {
    std::fs::rename(old, new)
}

/// A no-op write primitive — dry-run substitutes this for `real_write`.
pub fn noop_write(_path: &Path, _content: &str) -> std::io::Result<()> {
    Ok(())
}

/// A no-op rename primitive — dry-run substitutes this for `real_rename`.
pub fn noop_rename(_old: &Path, _new: &Path) -> std::io::Result<()> {
    Ok(())
}

/// Replaces every occurrence's span in `source` with the replacement
/// rendering matching its casing.
///
/// `occurrences` must already be sorted ascending by `start_index` with
/// no overlaps — the scanner guarantees this by construction; violating
/// it here is undefined behavior (§4.4).
///
/// Walks `source` as code points, cutting a slice at each occurrence
/// boundary and skipping ahead by the code-point length of the match,
/// then interleaves the collected slices with the replacement strings.
pub fn replace_text(
    source: &str,
    occurrences: &[Occurrence],
    replacement_variants: &VariantSet,
) -> String {
    if occurrences.is_empty() {
        return source.to_string();
    }

    let chars: Vec<char> = source.chars().collect();
    let mut slices: Vec<String> = Vec::with_capacity(occurrences.len() + 1);
    let mut buf = String::new();
    let mut occ_idx = 0;
    let mut idx = 0;

    while idx < chars.len() {
        if occ_idx < occurrences.len() && idx == occurrences[occ_idx].start_index {
            slices.push(std::mem::take(&mut buf));
            idx += occurrences[occ_idx].matched.chars().count();
            occ_idx += 1;
        } else {
            buf.push(chars[idx]);
            idx += 1;
        }
    }
    slices.push(buf);

    let mut result = String::with_capacity(source.len());
    result.push_str(&slices[0]);
    for (i, occ) in occurrences.iter().enumerate() {
        result.push_str(&replacement_variants.lookup(occ.casing).value);
        result.push_str(&slices[i + 1]);
    }

    result
}

/// Reads `path`, rewrites its content per `occurrences`, and writes the
/// result back through the injected `write` primitive.
pub fn rewrite_file(
    path: &Path,
    occurrences: &[Occurrence],
    replacement_variants: &VariantSet,
    write: &WriteFn,
) -> Result<()> {
    let content = std::fs::read_to_string(path).map_err(|e| SwapcaseError::IoRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let new_content = replace_text(&content, occurrences, replacement_variants);
    write(path, &new_content).map_err(|e| SwapcaseError::IoWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Rewrites `path` itself per `occurrences` and invokes the injected
/// `rename` primitive with `(old, new)`, returning the new path.
pub fn rename_path(
    path: &Path,
    occurrences: &[Occurrence],
    replacement_variants: &VariantSet,
    rename: &RenameFn,
) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();
    let new_path = PathBuf::from(replace_text(&path_str, occurrences, replacement_variants));
    rename(path, &new_path).map_err(|e| SwapcaseError::IoWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(new_path)
}

/// Applies every group in order (the scanner's `OccurrenceGroupOrdering`:
/// content first, then path renames deepest-first), returning the total
/// number of occurrences replaced.
pub fn apply(
    groups: &[OccurrenceGroup],
    replacement_variants: &VariantSet,
    write: &WriteFn,
    rename: &RenameFn,
) -> Result<usize> {
    let mut total = 0;
    for group in groups {
        match group.kind {
            GroupKind::Content => {
                rewrite_file(&group.path, &group.occurrences, replacement_variants, write)?;
            },
            GroupKind::Path => {
                rename_path(&group.path, &group.occurrences, replacement_variants, rename)?;
            },
        }
        total += group.occurrences.len();
    }
    Ok(total)
}
