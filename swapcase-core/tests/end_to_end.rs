//! `spec.md` §8 scenarios S5 (full real run) and S6 (dry run).

use std::fs;
use std::path::Path;

use swapcase_core::{
    noop_rename, noop_write, real_rename, real_write, run, AcceptAllPrompter, RunOptions,
};

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn populate_fixture(root: &Path) {
    write(
        &root.join("src/spaces/space-repository.js"),
        "const space = 'space';\nexport const Space = 1;\nexport const SPACE = 2;\n",
    );
    write(
        &root.join("src/spaceTypes.js"),
        "export type SpaceKind = 'space' | 'SPACE';\n",
    );
    write(
        &root.join("src/SPACE_STUFFS.js"),
        "// SPACE_STUFFS constant file\n",
    );
}

/// S5: a force run (every occurrence accepted) rewrites content and
/// renames every path segment that carried a casing of `space`.
#[test]
fn scenario_s5_full_run_matches_expected_tree() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    populate_fixture(root);

    let mut prompter = AcceptAllPrompter;
    let replaced = run(RunOptions {
        root,
        glob: "**/*.js",
        needle: "space",
        replacement: "board",
        ignore_pattern: "",
        prompter: &mut prompter,
        write: &real_write,
        rename: &real_rename,
    })
    .unwrap();
    assert!(replaced > 0);

    assert!(!root.join("src/spaces").exists());
    assert!(root.join("src/boards").exists());
    assert!(root.join("src/boards/board-repository.js").exists());
    assert_eq!(
        fs::read_to_string(root.join("src/boards/board-repository.js")).unwrap(),
        "const board = 'board';\nexport const Board = 1;\nexport const BOARD = 2;\n"
    );

    assert!(root.join("src/boardTypes.js").exists());
    assert_eq!(
        fs::read_to_string(root.join("src/boardTypes.js")).unwrap(),
        "export type BoardKind = 'board' | 'BOARD';\n"
    );

    assert!(root.join("src/BOARD_STUFFS.js").exists());
    assert_eq!(
        fs::read_to_string(root.join("src/BOARD_STUFFS.js")).unwrap(),
        "// BOARD_STUFFS constant file\n"
    );
}

/// S6: `--dry` reports occurrences found but mutates nothing on disk.
#[test]
fn scenario_s6_dry_run_reports_without_mutating() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    populate_fixture(root);

    let before = fs::read_to_string(root.join("src/spaces/space-repository.js")).unwrap();

    let mut prompter = AcceptAllPrompter;
    let replaced = run(RunOptions {
        root,
        glob: "**/*.js",
        needle: "space",
        replacement: "board",
        ignore_pattern: "",
        prompter: &mut prompter,
        write: &noop_write,
        rename: &noop_rename,
    })
    .unwrap();

    assert!(replaced > 0);
    assert!(root.join("src/spaces/space-repository.js").exists());
    assert!(!root.join("src/boards").exists());
    assert_eq!(
        fs::read_to_string(root.join("src/spaces/space-repository.js")).unwrap(),
        before
    );
}

#[test]
fn ignore_pattern_skips_matching_files() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    populate_fixture(root);

    let mut prompter = AcceptAllPrompter;
    let replaced = run(RunOptions {
        root,
        glob: "**/*.js",
        needle: "space",
        replacement: "board",
        ignore_pattern: "SPACE_STUFFS",
        prompter: &mut prompter,
        write: &real_write,
        rename: &real_rename,
    })
    .unwrap();

    assert!(replaced > 0);
    assert!(root.join("src/SPACE_STUFFS.js").exists());
    assert_eq!(
        fs::read_to_string(root.join("src/SPACE_STUFFS.js")).unwrap(),
        "// SPACE_STUFFS constant file\n"
    );
}
