use crate::parsing::HeadingLine;

/// One heading recorded while scanning a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingEntry {
    /// `#` count minus one, so a top-level heading has depth 0.
    pub depth: usize,
    pub title: String,
}

impl HeadingEntry {
    pub fn new(depth: usize, title: impl Into<String>) -> Self {
        Self {
            depth,
            title: title.into(),
        }
    }

    pub fn level(&self) -> usize {
        self.depth + 1
    }
}

impl From<HeadingLine> for HeadingEntry {
    fn from(heading: HeadingLine) -> Self {
        Self {
            depth: heading.depth(),
            title: heading.title,
        }
    }
}

/// Headings in document order. Append-only; titles may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    entries: Vec<HeadingEntry>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HeadingEntry) {
        self.entries.push(entry);
    }

    pub fn extend(&mut self, other: &Outline) {
        self.entries.extend(other.entries.iter().cloned());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeadingEntry> {
        self.entries.iter()
    }

    /// Every entry paired with its list depth for a ToC heading with
    /// `toc_level` `#` characters.
    ///
    /// Depth counts from the ToC level, or from the shallowest entry when one
    /// sits above it. An entry is never more than one level deeper than the
    /// entry before it, and the first entry is always at depth 0.
    pub fn nested_under(&self, toc_level: usize) -> impl Iterator<Item = (usize, &HeadingEntry)> {
        let base = self
            .entries
            .iter()
            .map(HeadingEntry::level)
            .min()
            .map_or(toc_level, |shallowest| shallowest.min(toc_level));
        let mut deepest_allowed = 0;
        self.entries.iter().map(move |entry| {
            let depth = (entry.level() - base).min(deepest_allowed);
            deepest_allowed = depth + 1;
            (depth, entry)
        })
    }
}

impl FromIterator<HeadingEntry> for Outline {
    fn from_iter<T: IntoIterator<Item = HeadingEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
