use std::io::IsTerminal;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use swapcase_core::{noop_rename, noop_write, real_rename, real_write, run, RunOptions, SwapcaseError};

mod cli;
mod prompt;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    match run_cli(cli) {
        Ok(replaced) => {
            println!("{replaced} occurrence(s) replaced");
        },
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = if e.downcast_ref::<SwapcaseError>().is_some_and(|e| matches!(e, SwapcaseError::UsageError(_))) {
                2
            } else {
                1
            };
            process::exit(code);
        },
    }
}

fn run_cli(cli: Cli) -> Result<usize> {
    if cli.needle.is_empty() || cli.replacement.is_empty() {
        return Err(SwapcaseError::UsageError(
            "needle and replacement must not be empty".to_string(),
        )
        .into());
    }

    let root = match cli.root {
        Some(ref path) => path.clone(),
        None => std::env::current_dir().context("failed to resolve current directory")?,
    };

    let use_color = !cli.no_color && std::io::stdout().is_terminal();

    let mut accept_all = swapcase_core::AcceptAllPrompter;
    let mut terminal = prompt::TerminalPrompter::new(use_color);

    let prompter: &mut dyn swapcase_core::Prompter = if cli.force {
        &mut accept_all
    } else {
        &mut terminal
    };

    let write: &swapcase_core::WriteFn = if cli.dry { &noop_write } else { &real_write };
    let rename: &swapcase_core::RenameFn = if cli.dry { &noop_rename } else { &real_rename };

    let replaced = run(RunOptions {
        root: &root,
        glob: &cli.glob,
        needle: &cli.needle,
        replacement: &cli.replacement,
        ignore_pattern: &cli.ignore,
        prompter,
        write,
        rename,
    })?;

    Ok(replaced)
}
