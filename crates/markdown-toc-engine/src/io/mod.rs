use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::RewriteError;
use crate::rewriter::{Mode, RewriterOptions, TocRewriter};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for rewritten lines.
pub trait LineSink {
    fn emit(&mut self, line: &str) -> io::Result<()>;
}

impl LineSink for Vec<String> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Writes each line followed by `\n`.
pub struct WriterSink<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Flushes buffered output and hands back the writer.
    pub fn finish(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")
    }
}

/// Lines of `reader` with `\n` or `\r\n` endings removed.
pub fn read_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.lines()
}

/// Open a markdown document for line-by-line reading.
pub fn open_document(path: &Path) -> Result<BufReader<File>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(IoError::Io)?;
    Ok(BufReader::new(file))
}

/// Rewrite everything readable from `reader` into `writer`.
pub fn rewrite_stream<R, W>(
    reader: R,
    writer: W,
    mode: Mode,
    options: RewriterOptions,
) -> Result<W, RewriteError>
where
    R: BufRead,
    W: Write,
{
    let mut sink = WriterSink::new(writer);
    TocRewriter::with_options(mode, options).process(read_lines(reader), &mut sink)?;
    Ok(sink.finish()?)
}
