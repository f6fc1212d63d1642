//! The ToC rewriter: a line state machine that regenerates a table of
//! contents wherever a `TOC` / `Table of Contents` heading appears.
//!
//! A document is handled in passes. The first pass streams everything up to
//! the first ToC heading straight to the sink and captures the rest. Each
//! following pass rescans the captured lines, which may hold another ToC
//! heading and so another capture. Passes run from an explicit queue rather
//! than by recursion, bounded by [`RewriterOptions::max_nesting`].

pub mod scan;

use std::io;

use log::{debug, trace, warn};

use crate::error::RewriteError;
use crate::io::LineSink;
use crate::models::Outline;
use crate::render::{RenderOptions, render_block};

use scan::{ScanOutcome, Scanner, prepare_pending};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// The whole document with every ToC block regenerated in place.
    #[default]
    Full,
    /// Only the rendered list items.
    TocOnly,
}

impl Mode {
    pub fn from_toc_only(toc_only: bool) -> Self {
        if toc_only { Mode::TocOnly } else { Mode::Full }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriterOptions {
    pub render: RenderOptions,
    /// Maximum number of ToC headings handled in one document.
    pub max_nesting: usize,
}

impl RewriterOptions {
    pub const DEFAULT_MAX_NESTING: usize = 32;
}

impl Default for RewriterOptions {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            max_nesting: Self::DEFAULT_MAX_NESTING,
        }
    }
}

/// One scan pass: the lines it emitted (empty for the streamed first pass)
/// and what it found.
struct Pass {
    body: Vec<String>,
    outline: Outline,
    toc_level: Option<usize>,
}

impl Pass {
    fn new(body: Vec<String>, outcome: ScanOutcome) -> (Self, Vec<String>) {
        let pass = Self {
            body,
            outline: outcome.outline,
            toc_level: outcome.toc_level,
        };
        (pass, outcome.pending)
    }
}

/// Rewrites a single document. Consumed by [`TocRewriter::process`], so no
/// state survives from one document to the next.
#[derive(Debug, Clone, Default)]
pub struct TocRewriter {
    mode: Mode,
    options: RewriterOptions,
}

impl TocRewriter {
    pub fn new(mode: Mode) -> Self {
        Self::with_options(mode, RewriterOptions::default())
    }

    pub fn with_options(mode: Mode, options: RewriterOptions) -> Self {
        Self { mode, options }
    }

    /// Reads `lines` to the end and writes the rewritten document to `sink`.
    ///
    /// Lines before the first ToC heading reach the sink as soon as they are
    /// read. Read and write failures abort the run.
    pub fn process<I, S>(self, lines: I, sink: &mut S) -> Result<(), RewriteError>
    where
        I: IntoIterator<Item = io::Result<String>>,
        S: LineSink + ?Sized,
    {
        let mut scanner = Scanner::new(self.mode);
        for line in lines {
            scanner.feed(line?, sink)?;
        }

        let (first, mut pending) = Pass::new(Vec::new(), scanner.finish());
        debug!(
            "pass 0: {} headings, toc level {:?}, {} lines captured",
            first.outline.len(),
            first.toc_level,
            pending.len()
        );
        if first.toc_level.is_none() {
            return Ok(());
        }

        let mut passes = vec![first];
        while passes.last().is_some_and(|pass| pass.toc_level.is_some()) {
            if passes.len() > self.options.max_nesting {
                warn!(
                    "giving up after {} table of contents headings",
                    self.options.max_nesting
                );
                return Err(RewriteError::MalformedDocument {
                    depth: passes.len(),
                    limit: self.options.max_nesting,
                });
            }

            let lines = prepare_pending(std::mem::take(&mut pending));
            trace!("rescanning {} captured lines", lines.len());

            let mut body = Vec::new();
            let mut scanner = Scanner::after_block(self.mode);
            for line in lines {
                scanner.feed(line, &mut body)?;
            }

            let (pass, rest) = Pass::new(body, scanner.finish());
            debug!(
                "pass {}: {} headings, toc level {:?}, {} lines captured",
                passes.len(),
                pass.outline.len(),
                pass.toc_level,
                rest.len()
            );
            pending = rest;
            passes.push(pass);
        }

        self.write_passes(&passes, sink)?;
        Ok(())
    }

    /// In-memory convenience over [`TocRewriter::process`].
    pub fn process_lines<I>(self, lines: I) -> Result<Vec<String>, RewriteError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut out = Vec::new();
        self.process(lines.into_iter().map(|line| Ok(line.into())), &mut out)?;
        Ok(out)
    }

    /// Each ToC block lists the headings of every pass after its own, that is
    /// everything that follows the ToC heading. The first pass's body has
    /// already been streamed.
    fn write_passes<S>(&self, passes: &[Pass], sink: &mut S) -> io::Result<()>
    where
        S: LineSink + ?Sized,
    {
        let mut following = vec![Outline::new(); passes.len()];
        for index in (0..passes.len().saturating_sub(1)).rev() {
            let mut outline = passes[index + 1].outline.clone();
            outline.extend(&following[index + 1]);
            following[index] = outline;
        }

        for (index, pass) in passes.iter().enumerate() {
            if index > 0 {
                for line in &pass.body {
                    sink.emit(line)?;
                }
            }
            if let Some(level) = pass.toc_level {
                let block =
                    render_block(level, &following[index], self.mode, &self.options.render);
                for line in &block {
                    sink.emit(line)?;
                }
            }
        }
        Ok(())
    }
}
