//! Core library: scan a directory tree for every casing variant of a
//! needle, confirm each occurrence, and rewrite file content and paths
//! with the matching variant of the replacement.

pub mod casing;
pub mod enumerate;
pub mod error;
pub mod ignore;
pub mod prompt;
pub mod rewrite;
pub mod scanner;

use std::path::Path;

pub use casing::{generate_variants, Casing, VariantSet};
pub use enumerate::{enumerate, Node, NodeKind};
pub use error::{Result, SwapcaseError};
pub use ignore::IgnoreMatcher;
pub use prompt::{filter_groups, AcceptAllPrompter, Prompter, RejectAllPrompter};
pub use rewrite::{noop_rename, noop_write, real_rename, real_write, RenameFn, WriteFn};
pub use scanner::{scan_tree, GroupKind, Occurrence, OccurrenceGroup};

/// The full pipeline wired end to end: enumerate, scan, prompt, rewrite.
pub struct RunOptions<'a> {
    pub root: &'a Path,
    pub glob: &'a str,
    pub needle: &'a str,
    pub replacement: &'a str,
    pub ignore_pattern: &'a str,
    pub prompter: &'a mut dyn Prompter,
    pub write: &'a WriteFn<'a>,
    pub rename: &'a RenameFn<'a>,
}

/// Runs the full find-and-replace pipeline and returns the number of
/// occurrences actually applied (after prompting).
///
/// Returns `Ok(0)` both when nothing matched and when every match was
/// rejected at the prompt — the two are indistinguishable to the caller
/// by design, since both mean "nothing to report changed".
pub fn run(options: RunOptions) -> Result<usize> {
    let ignore = IgnoreMatcher::new(options.ignore_pattern);
    let nodes = enumerate::enumerate(options.root, options.glob, &ignore)?;

    let needle_variants = casing::generate_variants(options.needle);
    let replacement_variants = casing::generate_variants(options.replacement);

    let groups = scanner::scan_tree(&nodes, &needle_variants)?;
    if groups.is_empty() {
        return Ok(0);
    }

    let groups = prompt::filter_groups(groups, options.prompter)?;
    if groups.is_empty() {
        return Ok(0);
    }

    rewrite::apply(&groups, &replacement_variants, options.write, options.rename)
}
