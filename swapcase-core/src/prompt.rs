//! The accept/reject gate run once per occurrence before it is applied
//! (§6.3). The terminal implementation lives in the CLI crate; this
//! module only defines the contract plus the trivial substitutes used in
//! force mode and in core-level tests.

use crate::error::Result;
use crate::scanner::{Occurrence, OccurrenceGroup};

/// Decides whether a single occurrence should be replaced.
///
/// Implementations may use `group` for context (e.g. to render the
/// surrounding lines or the containing path once per group rather than
/// per occurrence).
pub trait Prompter {
    fn confirm(&mut self, group: &OccurrenceGroup, occurrence: &Occurrence) -> Result<bool>;
}

/// Accepts every occurrence without asking — the `--force` substitute.
pub struct AcceptAllPrompter;

impl Prompter for AcceptAllPrompter {
    fn confirm(&mut self, _group: &OccurrenceGroup, _occurrence: &Occurrence) -> Result<bool> {
        Ok(true)
    }
}

/// Rejects every occurrence — useful for exercising the "nothing applied"
/// path in tests without wiring up a real terminal.
pub struct RejectAllPrompter;

impl Prompter for RejectAllPrompter {
    fn confirm(&mut self, _group: &OccurrenceGroup, _occurrence: &Occurrence) -> Result<bool> {
        Ok(false)
    }
}

/// Filters every group's occurrences through `prompter`, dropping any
/// occurrence it rejects and any group left with none (§3: groups are
/// non-empty coming out of the scanner, but prompting can empty one out).
pub fn filter_groups(
    groups: Vec<OccurrenceGroup>,
    prompter: &mut dyn Prompter,
) -> Result<Vec<OccurrenceGroup>> {
    let mut kept = Vec::with_capacity(groups.len());

    for group in groups {
        let mut accepted = Vec::with_capacity(group.occurrences.len());
        for occurrence in group.occurrences {
            if prompter.confirm(
                &OccurrenceGroup {
                    path: group.path.clone(),
                    kind: group.kind,
                    occurrences: Vec::new(),
                },
                &occurrence,
            )? {
                accepted.push(occurrence);
            }
        }
        if !accepted.is_empty() {
            kept.push(OccurrenceGroup {
                path: group.path,
                kind: group.kind,
                occurrences: accepted,
            });
        }
    }

    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casing::generate_variants;
    use crate::scanner::scan_content;
    use std::path::PathBuf;

    fn one_group() -> OccurrenceGroup {
        let variants = generate_variants("space");
        OccurrenceGroup {
            path: PathBuf::from("x.txt"),
            kind: crate::scanner::GroupKind::Content,
            occurrences: scan_content("space and Space and SPACE", &variants),
        }
    }

    #[test]
    fn accept_all_keeps_every_occurrence() {
        let groups = vec![one_group()];
        let mut prompter = AcceptAllPrompter;
        let filtered = filter_groups(groups, &mut prompter).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].occurrences.len(), 3);
    }

    #[test]
    fn reject_all_drops_the_whole_group() {
        let groups = vec![one_group()];
        let mut prompter = RejectAllPrompter;
        let filtered = filter_groups(groups, &mut prompter).unwrap();
        assert!(filtered.is_empty());
    }
}
