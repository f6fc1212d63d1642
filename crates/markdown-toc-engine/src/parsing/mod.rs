pub mod heading;
pub mod marker;

pub use heading::HeadingLine;
pub use marker::Marker;

/// Classification of a single line containing only local facts.
///
/// The rewriter layers its own state (marker block, ToC capture) on top of
/// this; a line is never classified with reference to its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Heading titled `TOC` or `Table of Contents`.
    TocHeading(HeadingLine),
    Heading(HeadingLine),
    Marker(Marker),
    /// Exactly the empty string. Whitespace-only lines are [`LineClass::Text`].
    Blank,
    Text,
}

/// Classifies lines in precedence order: ToC heading, marker, heading, blank, text.
pub struct LineClassifier;

impl LineClassifier {
    pub fn classify(&self, line: &str) -> LineClass {
        if let Some(heading) = HeadingLine::parse(line) {
            return if heading.is_toc_title() {
                LineClass::TocHeading(heading)
            } else {
                LineClass::Heading(heading)
            };
        }
        if let Some(marker) = Marker::parse(line) {
            return LineClass::Marker(marker);
        }
        if line.is_empty() {
            LineClass::Blank
        } else {
            LineClass::Text
        }
    }
}
