//! Markup rendering of styled segments.
//!
//! Output is a minimal HTML document: a fixed wrapper establishing the
//! base font, then one inline-styled span per styled segment. All literal
//! text goes through [`escape_markup`] before insertion, match text
//! included, so user input can never corrupt the document structure.

use crate::segment::StyledSegment;
use crate::theme::Theme;

/// Opening wrapper of every rendered document.
pub const DOC_OPEN: &str = "<!DOCTYPE html><html><body><div style=\"font-size:11pt;\">";
/// Closing wrapper of every rendered document.
pub const DOC_CLOSE: &str = "</div></body></html>";

/// Escape text for insertion into the rendered document.
///
/// Ampersands, angle brackets and double quotes become entities; newlines
/// become explicit `<br />` line breaks.
#[must_use]
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\n' => escaped.push_str("<br />"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render a segment sequence as a complete markup document.
///
/// Segments whose theme style is all-default are emitted as bare escaped
/// text; everything else gets an inline-styled span.
#[must_use]
pub fn render_document(segments: &[StyledSegment], theme: &Theme) -> String {
    let mut html = String::from(DOC_OPEN);
    for segment in segments {
        let style = theme.style_for(segment.class);
        let text = escape_markup(&segment.text);
        if style.is_none() {
            html.push_str(&text);
        } else {
            html.push_str(&format!("<span style=\"{}\">{}</span>", style.css(), text));
        }
    }
    html.push_str(DOC_CLOSE);
    html
}
