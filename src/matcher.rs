//! Match finder: scans search text with a compiled pattern.
//!
//! Produces both a highlighted rendering (plain gaps interleaved with
//! match segments) and the match/group records the inspector panel lists.
//! Compilation and matching are delegated to the `regex` crate; this
//! module owns mode selection, segment assembly, and byte-to-char offset
//! conversion.

use regex::Regex;
use ropey::Rope;

use crate::error::{Error, Result};
use crate::segment::{StyleClass, StyledSegment};
use crate::span::Span;

/// How many matches to report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// Stop after the first match.
    #[default]
    FirstOnly,
    /// Enumerate every non-overlapping match, leftmost first.
    AllNonOverlapping,
}

/// One capture group within a match.
///
/// `index` is the zero-based pattern-order position of the group (regex
/// group 1 becomes index 0). Groups that did not participate in the match
/// are omitted without renumbering the rest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupRecord {
    pub index: usize,
    pub span: Span,
    pub text: String,
}

/// One successful match against the search text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    pub span: Span,
    pub text: String,
    pub groups: Vec<GroupRecord>,
}

/// Result of a search-text recompute: the rendering and the inspector list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    pub segments: Vec<StyledSegment>,
    pub matches: Vec<MatchRecord>,
}

/// Run `pattern` over `text`, producing highlight segments and match records.
///
/// An empty pattern short-circuits to the identity rendering with zero
/// matches rather than compiling (the empty regex matches everywhere,
/// which would drown the rendering in empty highlights). A pattern that
/// fails to compile returns [`Error::Pattern`]; the caller is expected to
/// keep its previous rendering in that case.
///
/// All spans are character offsets into `text`. Empty-width matches are
/// recorded but produce no highlight segment; the underlying iterator
/// advances past them, so scanning always terminates.
pub fn find_matches(pattern: &str, text: &str, mode: MatchMode) -> Result<MatchOutcome> {
    let mut outcome = MatchOutcome::default();

    if pattern.is_empty() {
        push_segment(&mut outcome.segments, text, StyleClass::Plain);
        return Ok(outcome);
    }

    let re = Regex::new(pattern).map_err(|err| Error::Pattern(err.to_string()))?;

    // Char-offset conversion for spans; the rendering itself slices bytes.
    let rope = Rope::from_str(text);

    let mut last_end = 0usize;
    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        push_segment(
            &mut outcome.segments,
            &text[last_end..whole.start()],
            StyleClass::Plain,
        );
        push_segment(&mut outcome.segments, whole.as_str(), StyleClass::MatchHighlight);
        last_end = whole.end();

        let span = Span::new(rope.byte_to_char(whole.start()), rope.byte_to_char(whole.end()));
        let groups = caps
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(i, group)| {
                group.map(|g| GroupRecord {
                    index: i - 1,
                    span: Span::new(rope.byte_to_char(g.start()), rope.byte_to_char(g.end())),
                    text: g.as_str().to_string(),
                })
            })
            .collect();

        outcome.matches.push(MatchRecord {
            span,
            text: whole.as_str().to_string(),
            groups,
        });

        if mode == MatchMode::FirstOnly {
            break;
        }
    }

    push_segment(&mut outcome.segments, &text[last_end..], StyleClass::Plain);

    Ok(outcome)
}

/// Flatten match records into the inspector panel's row listing.
#[must_use]
pub fn inspector_rows(matches: &[MatchRecord]) -> Vec<String> {
    let mut rows = Vec::new();
    for (ordinal, record) in matches.iter().enumerate() {
        rows.push(format!(
            "match {ordinal} {}: {:?}",
            record.span, record.text
        ));
        for group in &record.groups {
            rows.push(format!(
                "  group {} {}: {:?}",
                group.index, group.span, group.text
            ));
        }
    }
    rows
}

fn push_segment(segments: &mut Vec<StyledSegment>, text: &str, class: StyleClass) {
    if !text.is_empty() {
        segments.push(StyledSegment::new(text, class));
    }
}

#[cfg(test)]
mod tests {
    use super::{MatchMode, find_matches, inspector_rows};
    use crate::error::Error;
    use crate::segment::{StyleClass, StyledSegment, plain_text};
    use crate::span::Span;

    #[test]
    fn repeated_match_span_and_text() {
        let outcome = find_matches("a+", "baaab", MatchMode::AllNonOverlapping).unwrap();
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].span, Span::new(1, 4));
        assert_eq!(outcome.matches[0].text, "aaa");
        assert!(outcome.matches[0].groups.is_empty());
        assert_eq!(
            outcome.segments,
            vec![
                StyledSegment::new("b", StyleClass::Plain),
                StyledSegment::new("aaa", StyleClass::MatchHighlight),
                StyledSegment::new("b", StyleClass::Plain),
            ]
        );
    }

    #[test]
    fn capture_groups_use_engine_offsets() {
        let outcome = find_matches("(a)(b)", "ab", MatchMode::FirstOnly).unwrap();
        assert_eq!(outcome.matches.len(), 1);
        let record = &outcome.matches[0];
        assert_eq!(record.span, Span::new(0, 2));
        assert_eq!(record.text, "ab");
        assert_eq!(record.groups.len(), 2);
        assert_eq!(record.groups[0].index, 0);
        assert_eq!(record.groups[0].text, "a");
        assert_eq!(record.groups[0].span, Span::new(0, 1));
        assert_eq!(record.groups[1].index, 1);
        assert_eq!(record.groups[1].text, "b");
        assert_eq!(record.groups[1].span, Span::new(1, 2));
    }

    #[test]
    fn groups_separated_by_literal_text() {
        // The accumulate-lengths shortcut would misplace group 1 here;
        // engine offsets do not.
        let outcome = find_matches("(a)-(b)", "x a-b y", MatchMode::FirstOnly).unwrap();
        let record = &outcome.matches[0];
        assert_eq!(record.span, Span::new(2, 5));
        assert_eq!(record.groups[0].span, Span::new(2, 3));
        assert_eq!(record.groups[1].span, Span::new(4, 5));
    }

    #[test]
    fn nested_groups_keep_pattern_order() {
        let outcome = find_matches("((a)b)", "ab", MatchMode::FirstOnly).unwrap();
        let record = &outcome.matches[0];
        assert_eq!(record.groups.len(), 2);
        assert_eq!(record.groups[0].index, 0);
        assert_eq!(record.groups[0].text, "ab");
        assert_eq!(record.groups[1].index, 1);
        assert_eq!(record.groups[1].text, "a");
    }

    #[test]
    fn non_participating_group_keeps_index() {
        let outcome = find_matches("(a)|(b)", "b", MatchMode::FirstOnly).unwrap();
        let record = &outcome.matches[0];
        assert_eq!(record.groups.len(), 1);
        assert_eq!(record.groups[0].index, 1);
        assert_eq!(record.groups[0].text, "b");
    }

    #[test]
    fn quantified_class_match() {
        let outcome = find_matches("\\d{2}", "x42y", MatchMode::FirstOnly).unwrap();
        assert_eq!(outcome.matches[0].span, Span::new(1, 3));
        assert_eq!(outcome.matches[0].text, "42");
    }

    #[test]
    fn first_only_stops_early() {
        let all = find_matches("a", "aaa", MatchMode::AllNonOverlapping).unwrap();
        let first = find_matches("a", "aaa", MatchMode::FirstOnly).unwrap();
        assert_eq!(all.matches.len(), 3);
        assert_eq!(first.matches.len(), 1);
        assert_eq!(first.matches[0], all.matches[0]);
        // Unmatched tail is still rendered
        assert_eq!(plain_text(&first.segments), "aaa");
    }

    #[test]
    fn empty_pattern_is_identity() {
        let outcome = find_matches("", "some <text>", MatchMode::AllNonOverlapping).unwrap();
        assert!(outcome.matches.is_empty());
        assert_eq!(
            outcome.segments,
            vec![StyledSegment::new("some <text>", StyleClass::Plain)]
        );
    }

    #[test]
    fn empty_pattern_empty_text() {
        let outcome = find_matches("", "", MatchMode::FirstOnly).unwrap();
        assert!(outcome.matches.is_empty());
        assert!(outcome.segments.is_empty());
    }

    #[test]
    fn invalid_pattern_reports_error() {
        let err = find_matches("(", "abc", MatchMode::FirstOnly).unwrap_err();
        assert!(matches!(err, Error::Pattern(_)));
        assert!(!err.message().is_empty());
    }

    #[test]
    fn empty_width_matches_terminate_and_advance() {
        let outcome = find_matches("a*", "bb", MatchMode::AllNonOverlapping).unwrap();
        // One empty match per position, all zero-width, strictly advancing
        assert_eq!(outcome.matches.len(), 3);
        let starts: Vec<usize> = outcome.matches.iter().map(|m| m.span.start).collect();
        assert_eq!(starts, vec![0, 1, 2]);
        assert!(outcome.matches.iter().all(|m| m.span.is_empty()));
        // No empty highlight segments, and no text lost
        assert_eq!(plain_text(&outcome.segments), "bb");
    }

    #[test]
    fn spans_are_char_offsets() {
        let outcome = find_matches("a", "λλa", MatchMode::FirstOnly).unwrap();
        assert_eq!(outcome.matches[0].span, Span::new(2, 3));
    }

    #[test]
    fn matches_never_overlap_and_are_sorted() {
        let outcome = find_matches("aa", "aaaaa", MatchMode::AllNonOverlapping).unwrap();
        assert_eq!(outcome.matches.len(), 2);
        for pair in outcome.matches.windows(2) {
            assert!(pair[0].span.end <= pair[1].span.start);
        }
    }

    #[test]
    fn inspector_listing_flattens_groups() {
        let outcome = find_matches("(a)(b)", "ab", MatchMode::FirstOnly).unwrap();
        let rows = inspector_rows(&outcome.matches);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("match 0 [0, 2)"));
        assert!(rows[1].contains("group 0"));
        assert!(rows[2].contains("group 1"));
    }
}
