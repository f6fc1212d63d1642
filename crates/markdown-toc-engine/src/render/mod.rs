//! Turning an [`Outline`] into the lines of a generated ToC block.

pub mod slug;

pub use slug::{SlugStyle, slug};

use crate::models::Outline;
use crate::parsing::{HeadingLine, Marker};
use crate::rewriter::Mode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix repeated once per nesting level in front of each list item.
    pub indent: String,
    pub slug_style: SlugStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            slug_style: SlugStyle::default(),
        }
    }
}

/// A single list entry. Numbering is always `1.` and left to the markdown renderer.
pub fn list_item(depth: usize, title: &str, options: &RenderOptions) -> String {
    format!(
        "{}1. [{}](#{})",
        options.indent.repeat(depth),
        title,
        slug(title, options.slug_style)
    )
}

/// Renders the block that replaces a ToC heading.
///
/// In [`Mode::Full`] the list is wrapped in the regenerated heading and the
/// sentinel markers; in [`Mode::TocOnly`] only the list items are produced.
pub fn render_block(
    toc_level: usize,
    outline: &Outline,
    mode: Mode,
    options: &RenderOptions,
) -> Vec<String> {
    let items = outline
        .nested_under(toc_level)
        .map(|(depth, entry)| list_item(depth, &entry.title, options));

    if mode == Mode::TocOnly {
        return items.collect();
    }

    let mut lines = vec![
        HeadingLine::toc_heading(toc_level),
        String::new(),
        Marker::Start.as_str().to_string(),
        String::new(),
    ];
    lines.extend(items);
    lines.extend([String::new(), Marker::End.as_str().to_string(), String::new()]);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HeadingEntry;
    use pretty_assertions::assert_eq;

    fn outline() -> Outline {
        [
            HeadingEntry::new(1, "Section One"),
            HeadingEntry::new(2, "Sub A"),
            HeadingEntry::new(1, "Section Two"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_list_item_indents_by_depth() {
        let options = RenderOptions::default();
        assert_eq!(list_item(0, "Intro", &options), "1. [Intro](#intro)");
        assert_eq!(
            list_item(2, "Deep Dive", &options),
            "\t\t1. [Deep Dive](#deep-dive)"
        );
    }

    #[test]
    fn test_list_item_custom_indent() {
        let options = RenderOptions {
            indent: "  ".to_string(),
            ..RenderOptions::default()
        };
        assert_eq!(list_item(1, "Sub A", &options), "  1. [Sub A](#sub-a)");
    }

    #[test]
    fn test_render_block_full_mode() {
        let lines = render_block(2, &outline(), Mode::Full, &RenderOptions::default());
        assert_eq!(
            lines,
            vec![
                "## Table of Contents",
                "",
                "[//]: # (TOC:START)",
                "",
                "1. [Section One](#section-one)",
                "\t1. [Sub A](#sub-a)",
                "1. [Section Two](#section-two)",
                "",
                "[//]: # (TOC:END)",
                "",
            ]
        );
    }

    #[test]
    fn test_render_block_toc_only_mode() {
        let lines = render_block(2, &outline(), Mode::TocOnly, &RenderOptions::default());
        assert_eq!(
            lines,
            vec![
                "1. [Section One](#section-one)",
                "\t1. [Sub A](#sub-a)",
                "1. [Section Two](#section-two)",
            ]
        );
    }

    #[test]
    fn test_render_block_empty_outline() {
        let lines = render_block(1, &Outline::new(), Mode::Full, &RenderOptions::default());
        assert_eq!(
            lines,
            vec![
                "# Table of Contents",
                "",
                "[//]: # (TOC:START)",
                "",
                "",
                "[//]: # (TOC:END)",
                "",
            ]
        );
        assert!(render_block(1, &Outline::new(), Mode::TocOnly, &RenderOptions::default()).is_empty());
    }
}
