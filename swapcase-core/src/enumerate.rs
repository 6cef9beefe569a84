//! Glob-based file enumeration (§6.1, the Enumerator external contract).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use walkdir::WalkDir;

use crate::error::{Result, SwapcaseError};
use crate::ignore::IgnoreMatcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NodeKind {
    /// Sorts before `File` per the Enumerator contract's sort key.
    Dir = 1,
    File = 2,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub path: PathBuf,
}

/// Expands a leading `~` to the user's home directory.
fn expand_home(glob: &str) -> PathBuf {
    if let Some(rest) = glob.strip_prefix('~') {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        if rest.is_empty() {
            home
        } else {
            home.join(rest)
        }
    } else {
        PathBuf::from(glob)
    }
}

/// Returns the longest fixed (wildcard-free) prefix directory of `pattern`,
/// which is where the filesystem walk can start from instead of the root.
fn glob_base(pattern: &Path) -> PathBuf {
    let mut base = PathBuf::new();
    for component in pattern.components() {
        let s = component.as_os_str().to_string_lossy();
        if s.contains(['*', '?', '[', '{']) {
            break;
        }
        base.push(component);
    }

    if base.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        base
    }
}

fn build_matcher(pattern: &Path) -> Result<GlobMatcher> {
    let pattern_str = pattern.to_string_lossy();
    GlobBuilder::new(&pattern_str)
        .literal_separator(true)
        .build()
        .map(|g| g.compile_matcher())
        .map_err(|e| SwapcaseError::EnumerationError {
            root: pattern.to_path_buf(),
            source: Box::new(e),
        })
}

/// Enumerates the node list for `root` + `glob`, dropping anything the
/// `ignore` matcher flags.
///
/// Output is every file matching `glob`, plus every ancestor directory of
/// every matched file up to (but not including) `root`, each listed at
/// most once. Directories sort before files; within a kind, insertion
/// (discovery) order is preserved.
pub fn enumerate(root: &Path, glob: &str, ignore: &IgnoreMatcher) -> Result<Vec<Node>> {
    let expanded = expand_home(glob);
    let full_pattern = if expanded.is_absolute() {
        expanded
    } else {
        root.join(&expanded)
    };

    let matcher = build_matcher(&full_pattern)?;
    let base = glob_base(&full_pattern);

    let mut dirs: Vec<PathBuf> = Vec::new();
    let mut seen_dirs: HashSet<PathBuf> = HashSet::new();
    let mut files: Vec<PathBuf> = Vec::new();

    let walker = WalkDir::new(&base).follow_links(false);
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            // A file disappearing mid-walk (race with external mutation)
            // is skipped, not an error (§7 policy).
            Err(_) => continue,
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if !matcher.is_match(path) {
            continue;
        }
        if ignore.matches(&path.to_string_lossy()) {
            continue;
        }

        files.push(path.to_path_buf());

        let mut ancestor = path.parent();
        while let Some(dir) = ancestor {
            if dir == root || dir.as_os_str().is_empty() {
                break;
            }
            if ignore.matches(&dir.to_string_lossy()) {
                break;
            }
            if seen_dirs.insert(dir.to_path_buf()) {
                dirs.push(dir.to_path_buf());
            }
            ancestor = dir.parent();
        }
    }

    let mut nodes: Vec<Node> = dirs
        .into_iter()
        .map(|path| Node {
            kind: NodeKind::Dir,
            path,
        })
        .collect();
    nodes.extend(files.into_iter().map(|path| Node {
        kind: NodeKind::File,
        path,
    }));

    Ok(nodes)
}
