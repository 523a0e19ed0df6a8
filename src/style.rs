//! Text styling with attributes and colors.
//!
//! A [`Style`] carries optional foreground/background colors and a small
//! set of [`TextAttributes`], and knows how to express itself as inline
//! CSS declarations for the rendered markup document.

use crate::color::Color;
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes expressible in inline markup.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased weight.
        const BOLD      = 0x01;
        /// Italic.
        const ITALIC    = 0x02;
        /// Underlined text.
        const UNDERLINE = 0x04;
    }
}

/// Complete text style: colors plus attributes.
///
/// `None` for a color means "inherit from the document", so an all-default
/// style produces no markup span at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color (None = inherit).
    pub fg: Option<Color>,
    /// Background color (None = inherit).
    pub bg: Option<Color>,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Empty style with no colors or attributes.
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
    };

    /// Create a style with only a foreground color.
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a style with only a background color.
    #[must_use]
    pub const fn bg(color: Color) -> Self {
        Self {
            fg: None,
            bg: Some(color),
            attributes: TextAttributes::empty(),
        }
    }

    #[must_use]
    pub const fn with_bold(mut self) -> Self {
        self.attributes = self.attributes.union(TextAttributes::BOLD);
        self
    }

    #[must_use]
    pub const fn with_italic(mut self) -> Self {
        self.attributes = self.attributes.union(TextAttributes::ITALIC);
        self
    }

    #[must_use]
    pub const fn with_underline(mut self) -> Self {
        self.attributes = self.attributes.union(TextAttributes::UNDERLINE);
        self
    }

    /// True if this style renders identically to unstyled text.
    #[must_use]
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Inline CSS declarations for this style.
    ///
    /// Declaration order is fixed (color, background, weight, style,
    /// decoration) so rendered output is byte-stable.
    #[must_use]
    pub fn css(&self) -> String {
        let mut css = String::new();
        if let Some(fg) = self.fg {
            css.push_str(&format!("color:{};", fg.to_css()));
        }
        if let Some(bg) = self.bg {
            css.push_str(&format!("background-color:{};", bg.to_css()));
        }
        if self.attributes.contains(TextAttributes::BOLD) {
            css.push_str("font-weight:bold;");
        }
        if self.attributes.contains(TextAttributes::ITALIC) {
            css.push_str("font-style:italic;");
        }
        if self.attributes.contains(TextAttributes::UNDERLINE) {
            css.push_str("text-decoration:underline;");
        }
        css
    }
}
