/// Which characters survive when a heading title becomes a link fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlugStyle {
    /// ASCII letters and digits, `_`, `-` and space. Anything else, including
    /// non-ASCII letters, is removed.
    #[default]
    Ascii,
    /// Any Unicode alphanumeric character, `_`, `-` and space.
    Unicode,
}

impl SlugStyle {
    fn keeps(self, ch: char) -> bool {
        if matches!(ch, '_' | '-' | ' ') {
            return true;
        }
        match self {
            SlugStyle::Ascii => ch.is_ascii_alphanumeric(),
            SlugStyle::Unicode => ch.is_alphanumeric(),
        }
    }
}

/// Lowercases `title`, strips unsupported characters and turns every space
/// into `-`. Runs of hyphens are left as they are.
pub fn slug(title: &str, style: SlugStyle) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|&ch| style.keeps(ch))
        .map(|ch| if ch == ' ' { '-' } else { ch })
        .collect()
}
