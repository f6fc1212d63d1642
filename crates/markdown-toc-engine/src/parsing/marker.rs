/// Sentinel lines delimiting a generated table of contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Start,
    End,
}

impl Marker {
    pub const START: &'static str = "[//]: # (TOC:START)";
    pub const END: &'static str = "[//]: # (TOC:END)";

    /// Byte-for-byte match; surrounding whitespace is not tolerated.
    pub fn parse(line: &str) -> Option<Self> {
        match line {
            Self::START => Some(Marker::Start),
            Self::END => Some(Marker::End),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Marker::Start => Self::START,
            Marker::End => Self::END,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_start_marker() {
        assert_eq!(Marker::parse("[//]: # (TOC:START)"), Some(Marker::Start));
    }

    #[test]
    fn detect_end_marker() {
        assert_eq!(Marker::parse("[//]: # (TOC:END)"), Some(Marker::End));
    }

    #[test]
    fn marker_match_is_exact() {
        assert_eq!(Marker::parse("[//]: # (TOC:START) "), None);
        assert_eq!(Marker::parse(" [//]: # (TOC:END)"), None);
        assert_eq!(Marker::parse("[//]: # (toc:start)"), None);
    }

    #[test]
    fn as_str_round_trips() {
        for marker in [Marker::Start, Marker::End] {
            assert_eq!(Marker::parse(marker.as_str()), Some(marker));
        }
    }
}
