//! Pattern annotator: syntax coloring of the regex source text.
//!
//! A pure character-by-character pass with one piece of state (whether the
//! previous character was an unconsumed backslash). No compilation happens
//! here, so annotation is total: every pattern text, including invalid
//! ones, gets a rendering and every input character lands in exactly one
//! segment.

use crate::segment::{StyleClass, StyledSegment};

/// Characters classified as group parentheses.
const PARENS: [char; 2] = ['(', ')'];
/// Characters classified as brace/bracket delimiters.
const BRACES: [char; 4] = ['{', '}', '[', ']'];
/// Characters classified as operators.
const OPERATORS: [char; 6] = ['?', ':', '.', '|', '+', '*'];
/// Escape letters denoting character-class shorthands.
const CHARACTER_CLASSES: [char; 9] = ['w', 'W', 'b', 'd', 'D', 's', 'S', 'A', 'Z'];

/// Tokenize pattern text into styled segments.
///
/// Consecutive plain characters coalesce into a single run; metacharacters
/// and escape pairs each form their own segment. A trailing unconsumed
/// backslash is emitted as a final [`StyleClass::EscapedChar`] segment so
/// no input character is dropped.
#[must_use]
pub fn annotate(pattern: &str) -> Vec<StyledSegment> {
    let mut segments = Vec::new();
    let mut run = String::new();
    let mut escaped = false;

    for c in pattern.chars() {
        if escaped {
            escaped = false;
            flush_run(&mut segments, &mut run);
            let class = if CHARACTER_CLASSES.contains(&c) {
                StyleClass::CharacterClass
            } else {
                // `\\` and literal escapes render alike
                StyleClass::EscapedChar
            };
            segments.push(StyledSegment::new(format!("\\{c}"), class));
        } else if c == '\\' {
            escaped = true;
        } else if PARENS.contains(&c) {
            flush_run(&mut segments, &mut run);
            segments.push(StyledSegment::new(c.to_string(), StyleClass::ParenGroup));
        } else if BRACES.contains(&c) {
            flush_run(&mut segments, &mut run);
            segments.push(StyledSegment::new(c.to_string(), StyleClass::BraceGroup));
        } else if OPERATORS.contains(&c) {
            flush_run(&mut segments, &mut run);
            segments.push(StyledSegment::new(c.to_string(), StyleClass::Operator));
        } else {
            run.push(c);
        }
    }

    flush_run(&mut segments, &mut run);

    // A backslash entered at the end of the pattern has nothing to consume.
    if escaped {
        segments.push(StyledSegment::new("\\", StyleClass::EscapedChar));
    }

    segments
}

fn flush_run(segments: &mut Vec<StyledSegment>, run: &mut String) {
    if !run.is_empty() {
        segments.push(StyledSegment::new(std::mem::take(run), StyleClass::Plain));
    }
}
