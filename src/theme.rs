//! Style themes mapping style classes to rendering styles.

use crate::color::Color;
use crate::segment::StyleClass;
use crate::style::Style;

/// A highlighting theme: one optional [`Style`] per [`StyleClass`], with a
/// default style fallback.
///
/// The theme is the crate's configuration surface. The built-in palettes
/// reproduce the tool's historical colors, but every entry is replaceable
/// through the builder setters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    name: String,
    styles: [Option<Style>; StyleClass::COUNT],
    default_style: Style,
}

impl Theme {
    /// Create an empty theme: every class renders as the default style.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            styles: [None; StyleClass::COUNT],
            default_style: Style::NONE,
        }
    }

    /// Theme name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the style for a style class (falls back to the default style).
    #[must_use]
    pub fn style_for(&self, class: StyleClass) -> &Style {
        self.styles[class.as_usize()]
            .as_ref()
            .unwrap_or(&self.default_style)
    }

    /// Theme default style.
    #[must_use]
    pub const fn default_style(&self) -> Style {
        self.default_style
    }

    /// Set a style for a style class.
    pub fn set_style(&mut self, class: StyleClass, style: Style) -> &mut Self {
        self.styles[class.as_usize()] = Some(style);
        self
    }

    /// Builder-style style setter.
    #[must_use]
    pub fn with_style(mut self, class: StyleClass, style: Style) -> Self {
        self.set_style(class, style);
        self
    }

    /// Builder-style default style setter.
    #[must_use]
    pub fn with_default_style(mut self, style: Style) -> Self {
        self.default_style = style;
        self
    }

    /// The standard palette.
    #[must_use]
    pub fn standard() -> Self {
        Self::palette("Standard", "#ade7a5")
    }

    /// The earlier single-match variant's palette: identical to
    /// [`Theme::standard`] except for a brighter match highlight.
    #[must_use]
    pub fn classic() -> Self {
        Self::palette("Classic", "#62e55f")
    }

    fn palette(name: &str, highlight_hex: &str) -> Self {
        Self::new(name)
            .with_style(StyleClass::CharacterClass, Self::fg_hex("#b22222"))
            .with_style(StyleClass::EscapedChar, Self::fg_hex("#008b8b"))
            .with_style(StyleClass::ParenGroup, Self::fg_hex("#c54b78"))
            .with_style(StyleClass::BraceGroup, Self::fg_hex("#871f78"))
            .with_style(StyleClass::Operator, Self::fg_hex("#0000ff"))
            .with_style(StyleClass::MatchHighlight, Self::bg_hex(highlight_hex))
    }

    fn fg_hex(hex: &str) -> Style {
        Style::fg(Color::from_hex(hex).unwrap_or(Color::BLACK))
    }

    fn bg_hex(hex: &str) -> Style {
        Style::bg(Color::from_hex(hex).unwrap_or(Color::WHITE))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}
