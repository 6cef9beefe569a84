//! The terminal `Prompter` implementation: renders each occurrence with
//! its surrounding lines, asks y/N, and clears its own output before the
//! next prompt. ANSI clearing and newline accounting are grounded on the
//! original tool's terminal wrapper; coloring follows the teacher's
//! `nu-ansi-term` usage in its preview rendering.

use std::io::{self, BufRead, IsTerminal, Write};

use nu_ansi_term::{Color as AnsiColor, Style};
use swapcase_core::error::SwapcaseError;
use swapcase_core::prompt::Prompter;
use swapcase_core::scanner::{GroupKind, Occurrence, OccurrenceGroup};
use swapcase_core::Result;

pub struct TerminalPrompter {
    use_color: bool,
    is_tty: bool,
    lines_printed: usize,
}

impl TerminalPrompter {
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            is_tty: io::stdout().is_terminal(),
            lines_printed: 0,
        }
    }

    /// Erases whatever this prompter last printed, one line at a time,
    /// so the next prompt replaces it in place instead of scrolling. On a
    /// non-TTY stdout, ANSI codes would just be noise in the captured
    /// output, so clearing degrades to a blank line (§6.3), matching
    /// `examples/original_source/cli/cli.go`'s `Wrapper.Clear()`, which
    /// branches the same way instead of emitting escapes unconditionally.
    fn clear(&mut self) {
        if !self.is_tty {
            if self.lines_printed > 0 {
                println!();
            }
            self.lines_printed = 0;
            return;
        }

        let mut out = io::stdout();
        for _ in 0..self.lines_printed {
            let _ = write!(out, "\x1b[2K\x1b[1A");
        }
        let _ = write!(out, "\x1b[2K\r");
        let _ = out.flush();
        self.lines_printed = 0;
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.use_color {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn render(&self, group: &OccurrenceGroup, occurrence: &Occurrence) -> String {
        let mut out = String::new();

        let header = match group.kind {
            GroupKind::Content => format!("{}:{}", group.path.display(), occurrence.line_number + 1),
            GroupKind::Path => format!("{} (rename)", group.path.display()),
        };
        out.push_str(&self.paint(AnsiColor::Cyan.bold(), &header));
        out.push('\n');

        // `surrounding_before` is nearest-line-first; print oldest-first so
        // the block reads top-to-bottom like the source file.
        for line in occurrence.surrounding_before.iter().rev() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }

        // `line_start_index` is a code-point offset (§3), so slicing must
        // walk chars rather than bytes to stay correct on non-ASCII lines.
        let chars: Vec<char> = occurrence.line.chars().collect();
        let match_len = occurrence.matched.chars().count();
        let start = occurrence.line_start_index.min(chars.len());
        let end = (start + match_len).min(chars.len());
        let before: String = chars[..start].iter().collect();
        let after: String = chars[end..].iter().collect();
        out.push_str("> ");
        out.push_str(&before);
        out.push_str(&self.paint(
            Style::new().on(AnsiColor::Yellow).fg(AnsiColor::Black),
            &occurrence.matched,
        ));
        out.push_str(after);
        out.push('\n');

        for line in &occurrence.surrounding_after {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }

        out.push_str(&format!("replace this {:?} occurrence? [y/N] ", occurrence.casing));
        out
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, group: &OccurrenceGroup, occurrence: &Occurrence) -> Result<bool> {
        self.clear();

        let rendered = self.render(group, occurrence);
        self.lines_printed = rendered.matches('\n').count();
        print!("{rendered}");
        io::stdout().flush().map_err(|source| SwapcaseError::PromptError { source })?;

        let stdin = io::stdin();
        let mut line = String::new();
        stdin
            .lock()
            .read_line(&mut line)
            .map_err(|source| SwapcaseError::PromptError { source })?;

        Ok(matches!(line.trim(), "y" | "Y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use swapcase_core::casing::Casing;

    #[test]
    fn render_includes_path_and_match() {
        let prompter = TerminalPrompter::new(false);
        let group = OccurrenceGroup {
            path: PathBuf::from("src/space.js"),
            kind: GroupKind::Content,
            occurrences: Vec::new(),
        };
        let occurrence = Occurrence {
            casing: Casing::LowerCase,
            matched: "space".to_string(),
            start_index: 0,
            line_start_index: 0,
            line: "space is great".to_string(),
            line_number: 0,
            surrounding_before: Vec::new(),
            surrounding_after: Vec::new(),
        };
        let rendered = prompter.render(&group, &occurrence);
        assert!(rendered.contains("src/space.js"));
        assert!(rendered.contains("space is great"));
    }
}
