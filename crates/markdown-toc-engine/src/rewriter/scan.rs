use std::io;

use crate::io::LineSink;
use crate::models::Outline;
use crate::parsing::{LineClass, LineClassifier, Marker};

use super::Mode;

/// What a single pass over a run of lines leaves behind.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Headings seen before the ToC heading, outside marker blocks.
    pub outline: Outline,
    /// `#` count of the ToC heading that stopped the pass, if any.
    pub toc_level: Option<usize>,
    /// Every line after the ToC heading, untouched.
    pub pending: Vec<String>,
}

/// One pass of the line state machine.
///
/// Lines are passed through to the sink until the first ToC heading; from
/// then on they are captured verbatim for the next pass.
pub struct Scanner {
    mode: Mode,
    classifier: LineClassifier,
    inside_marker: bool,
    /// Drop empty lines until the first non-empty line has been emitted.
    skip_leading_blanks: bool,
    outcome: ScanOutcome,
}

impl Scanner {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            classifier: LineClassifier,
            inside_marker: false,
            skip_leading_blanks: false,
            outcome: ScanOutcome::default(),
        }
    }

    /// A scanner for the lines that follow a regenerated block. The block
    /// already ends with an empty line, so leading empty output is dropped.
    pub fn after_block(mode: Mode) -> Self {
        Self {
            skip_leading_blanks: true,
            ..Self::new(mode)
        }
    }

    pub fn feed<S: LineSink + ?Sized>(&mut self, line: String, sink: &mut S) -> io::Result<()> {
        if self.outcome.toc_level.is_some() {
            self.outcome.pending.push(line);
            return Ok(());
        }

        match self.classifier.classify(&line) {
            LineClass::TocHeading(heading) => {
                self.outcome.toc_level = Some(heading.level);
            }
            LineClass::Marker(Marker::Start) => self.inside_marker = true,
            LineClass::Marker(Marker::End) => self.inside_marker = false,
            LineClass::Heading(heading) => {
                if !self.inside_marker {
                    self.outcome.outline.push(heading.into());
                    self.emit(&line, sink)?;
                }
            }
            LineClass::Blank | LineClass::Text => {
                if !self.inside_marker {
                    self.emit(&line, sink)?;
                }
            }
        }
        Ok(())
    }

    pub fn finish(self) -> ScanOutcome {
        self.outcome
    }

    fn emit<S: LineSink + ?Sized>(&mut self, line: &str, sink: &mut S) -> io::Result<()> {
        if self.mode == Mode::TocOnly {
            return Ok(());
        }
        if self.skip_leading_blanks {
            if line.is_empty() {
                return Ok(());
            }
            self.skip_leading_blanks = false;
        }
        sink.emit(line)
    }
}

/// Readies captured lines for the next pass: leading empty lines are
/// removed and runs of empty lines shrink to one.
pub fn prepare_pending(lines: Vec<String>) -> Vec<String> {
    let mut prepared: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines.into_iter().skip_while(|line| line.is_empty()) {
        if line.is_empty() && prepared.last().is_some_and(|last| last.is_empty()) {
            continue;
        }
        prepared.push(line);
    }
    prepared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HeadingEntry;
    use pretty_assertions::assert_eq;

    fn scan(scanner: &mut Scanner, lines: &[&str]) -> Vec<String> {
        let mut out = Vec::new();
        for line in lines {
            scanner.feed(line.to_string(), &mut out).unwrap();
        }
        out
    }

    #[test]
    fn test_passes_text_through_before_toc() {
        let mut scanner = Scanner::new(Mode::Full);
        let out = scan(&mut scanner, &["# Title", "", "some text"]);

        assert_eq!(out, vec!["# Title", "", "some text"]);
        let outcome = scanner.finish();
        assert_eq!(outcome.toc_level, None);
        assert_eq!(
            outcome.outline.iter().cloned().collect::<Vec<_>>(),
            vec![HeadingEntry::new(0, "Title")]
        );
    }

    #[test]
    fn test_toc_heading_diverts_remaining_lines() {
        let mut scanner = Scanner::new(Mode::Full);
        let out = scan(
            &mut scanner,
            &["# Title", "## TOC", "## Section", "text", "## TOC"],
        );

        assert_eq!(out, vec!["# Title"]);
        let outcome = scanner.finish();
        assert_eq!(outcome.toc_level, Some(2));
        assert_eq!(outcome.outline.len(), 1);
        assert_eq!(outcome.pending, vec!["## Section", "text", "## TOC"]);
    }

    #[test]
    fn test_marker_block_is_suppressed() {
        let mut scanner = Scanner::new(Mode::Full);
        let out = scan(
            &mut scanner,
            &[
                "before",
                Marker::START,
                "1. [Old](#old)",
                "# Not A Real Heading",
                Marker::END,
                "after",
            ],
        );

        assert_eq!(out, vec!["before", "after"]);
        assert!(scanner.finish().outline.is_empty());
    }

    #[test]
    fn test_stray_end_marker_is_dropped() {
        let mut scanner = Scanner::new(Mode::Full);
        let out = scan(&mut scanner, &["a", Marker::END, "b"]);
        assert_eq!(out, vec!["a", "b"]);
    }

    #[test]
    fn test_unterminated_marker_suppresses_to_end() {
        let mut scanner = Scanner::new(Mode::Full);
        let out = scan(&mut scanner, &["a", Marker::START, "b", "## Heading"]);
        assert_eq!(out, vec!["a"]);
    }

    #[test]
    fn test_toc_heading_inside_marker_block_still_detected() {
        let mut scanner = Scanner::new(Mode::Full);
        scan(&mut scanner, &[Marker::START, "# TOC", Marker::END]);
        let outcome = scanner.finish();
        assert_eq!(outcome.toc_level, Some(1));
        assert_eq!(outcome.pending, vec![Marker::END]);
    }

    #[test]
    fn test_toc_only_mode_emits_nothing_but_records_headings() {
        let mut scanner = Scanner::new(Mode::TocOnly);
        let out = scan(&mut scanner, &["# Title", "text", "## Next"]);
        assert!(out.is_empty());
        assert_eq!(scanner.finish().outline.len(), 2);
    }

    #[test]
    fn test_after_block_skips_leading_blank_output() {
        let mut scanner = Scanner::after_block(Mode::Full);
        let out = scan(
            &mut scanner,
            &[Marker::START, "", "1. [A](#a)", Marker::END, "", "## A", "", "text"],
        );
        assert_eq!(out, vec!["## A", "", "text"]);
    }

    #[test]
    fn test_prepare_pending_trims_and_collapses() {
        let lines = ["", "", "a", "", "", "", "b", "", "c", ""]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(prepare_pending(lines), vec!["a", "", "b", "", "c", ""]);
    }

    #[test]
    fn test_prepare_pending_keeps_whitespace_lines() {
        let lines = [" ", "", "", "  "].iter().map(|s| s.to_string()).collect();
        assert_eq!(prepare_pending(lines), vec![" ", "", "  "]);
    }
}
