//! Styled text segments, the unit of a highlighted rendering.

/// Style categories assigned by the annotator and the match finder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleClass {
    /// Unstyled literal text.
    Plain,
    /// A literal-escaped or unrecognized escape, e.g. `\(` or `\q`.
    EscapedChar,
    /// A character-class shorthand escape, e.g. `\d` or `\w`.
    CharacterClass,
    /// `(` or `)`.
    ParenGroup,
    /// `{`, `}`, `[` or `]`.
    BraceGroup,
    /// `?`, `:`, `.`, `|`, `+` or `*`.
    Operator,
    /// A span of search text covered by a match.
    MatchHighlight,
}

impl StyleClass {
    /// Number of style classes, for theme lookup tables.
    pub const COUNT: usize = 7;

    #[must_use]
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    /// Stable lowercase name for diagnostics and logging.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::EscapedChar => "escaped-char",
            Self::CharacterClass => "character-class",
            Self::ParenGroup => "paren-group",
            Self::BraceGroup => "brace-group",
            Self::Operator => "operator",
            Self::MatchHighlight => "match-highlight",
        }
    }
}

/// A run of text tagged with a style class.
///
/// Segment text is raw: markup escaping happens in the renderer, not here.
/// A full rendering is a sequence of segments regenerated wholesale on
/// every recompute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledSegment {
    pub text: String,
    pub class: StyleClass,
}

impl StyledSegment {
    #[must_use]
    pub fn new(text: impl Into<String>, class: StyleClass) -> Self {
        Self {
            text: text.into(),
            class,
        }
    }

    /// Length of the segment text in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Concatenate the raw text of a segment sequence.
///
/// For annotator output this losslessly reproduces the input pattern.
#[must_use]
pub fn plain_text(segments: &[StyledSegment]) -> String {
    let mut text = String::with_capacity(segments.iter().map(|s| s.text.len()).sum());
    for segment in segments {
        text.push_str(&segment.text);
    }
    text
}
