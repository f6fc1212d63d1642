use regex::Regex;
use std::sync::OnceLock;

/// A line of the form `#... title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingLine {
    /// Number of leading `#` characters.
    pub level: usize,
    pub title: String,
}

impl HeadingLine {
    pub const TOC_TITLES: [&'static str; 2] = ["TOC", "Table of Contents"];

    /// Title written when a table of contents heading is regenerated.
    pub const TOC_HEADING_TITLE: &'static str = "Table of Contents";

    pub fn parse(line: &str) -> Option<Self> {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        let heading_regex = HEADING_REGEX
            .get_or_init(|| Regex::new(r"^(#+) (.+)$").expect("Invalid heading regex"));

        let caps = heading_regex.captures(line)?;
        Some(Self {
            level: caps[1].len(),
            title: caps[2].to_string(),
        })
    }

    /// Exact, case-sensitive match against the recognised ToC titles.
    pub fn is_toc_title(&self) -> bool {
        Self::TOC_TITLES.contains(&self.title.as_str())
    }

    pub fn depth(&self) -> usize {
        self.level - 1
    }

    pub fn toc_heading(level: usize) -> String {
        format!("{} {}", "#".repeat(level), Self::TOC_HEADING_TITLE)
    }
}
