//! The highlight session: two surfaces and the recompute pipeline.
//!
//! A [`Session`] owns the pattern and search-text surfaces and runs the
//! two-stage pipeline: a pattern change re-annotates the pattern buffer
//! and then re-runs the match finder; a search-text change re-runs the
//! match finder only. All work is synchronous on the caller's thread.
//!
//! Recompute results are applied through [`RewriteGuard`], so applying a
//! rendering never re-triggers the notification that drives the pipeline.
//! A pattern that fails to compile abandons the search recompute: the
//! previous rendering and match list stay in place (stale but valid) and
//! the diagnostic lands on the status line and in the log.

use tracing::{debug, warn};

use crate::annotate::annotate;
use crate::error::Error;
use crate::matcher::{self, MatchMode, MatchRecord, find_matches};
use crate::render::render_document;
use crate::surface::{HandlerId, MemorySurface, RewriteGuard};
use crate::theme::Theme;

/// Which buffer a notification refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BufferKind {
    Pattern,
    Search,
}

/// An interactive highlighting session.
pub struct Session {
    pattern: MemorySurface,
    search: MemorySurface,
    mode: MatchMode,
    theme: Theme,
    matches: Vec<MatchRecord>,
    status: Option<String>,
    // Held so the surfaces raise notifications; released on drop with the
    // surfaces themselves.
    #[allow(dead_code)]
    pattern_handler: HandlerId,
    #[allow(dead_code)]
    search_handler: HandlerId,
}

impl Session {
    /// Create a session with the standard theme and `FirstOnly` mode.
    #[must_use]
    pub fn new() -> Self {
        Self::with_theme(Theme::standard())
    }

    /// Create a session with a specific theme.
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        let mut pattern = MemorySurface::new();
        let mut search = MemorySurface::new();
        let pattern_handler = pattern.subscribe();
        let search_handler = search.subscribe();

        let mut session = Self {
            pattern,
            search,
            mode: MatchMode::default(),
            theme,
            matches: Vec::new(),
            status: None,
            pattern_handler,
            search_handler,
        };
        // Establish the initial (empty) renderings
        session.recompute(BufferKind::Pattern);
        session.recompute(BufferKind::Search);
        session
    }

    /// Apply a user edit to the pattern buffer, then recompute.
    pub fn edit_pattern(&mut self, edit: impl FnOnce(&mut MemorySurface)) {
        edit(&mut self.pattern);
        self.pump();
    }

    /// Apply a user edit to the search-text buffer, then recompute.
    pub fn edit_search(&mut self, edit: impl FnOnce(&mut MemorySurface)) {
        edit(&mut self.search);
        self.pump();
    }

    /// Select the match mode. Re-triggers the search recompute only.
    pub fn set_mode(&mut self, mode: MatchMode) {
        if self.mode != mode {
            self.mode = mode;
            self.recompute(BufferKind::Search);
        }
    }

    /// Replace the theme and re-render both buffers.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.recompute(BufferKind::Pattern);
        self.recompute(BufferKind::Search);
    }

    /// Drain pending change notifications and run the pipeline.
    ///
    /// The pattern buffer drains first: its recompute feeds the search
    /// recompute, so the ordering is part of the contract.
    pub fn pump(&mut self) {
        if self.pattern.take_dirty() {
            self.recompute(BufferKind::Pattern);
        }
        if self.search.take_dirty() {
            self.recompute(BufferKind::Search);
        }
    }

    #[must_use]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn pattern_text(&self) -> String {
        self.pattern.plain_text()
    }

    #[must_use]
    pub fn search_text(&self) -> String {
        self.search.plain_text()
    }

    /// Rendered markup document for the pattern buffer.
    #[must_use]
    pub fn pattern_rendered(&self) -> &str {
        self.pattern.rendered()
    }

    /// Rendered markup document for the search-text buffer.
    #[must_use]
    pub fn search_rendered(&self) -> &str {
        self.search.rendered()
    }

    /// Match records from the last successful search recompute.
    #[must_use]
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Flattened match/group rows for the inspector panel.
    #[must_use]
    pub fn inspector_rows(&self) -> Vec<String> {
        matcher::inspector_rows(&self.matches)
    }

    /// Diagnostic from the last failed pattern compile, if the failure is
    /// still current.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Direct access to the pattern surface (caret inspection, tests).
    #[must_use]
    pub fn pattern_surface(&self) -> &MemorySurface {
        &self.pattern
    }

    /// Direct access to the search surface (caret inspection, tests).
    #[must_use]
    pub fn search_surface(&self) -> &MemorySurface {
        &self.search
    }

    fn recompute(&mut self, buffer: BufferKind) {
        match buffer {
            BufferKind::Pattern => {
                self.rehighlight_pattern();
                // The search rendering depends on the pattern text
                self.rehighlight_search();
            }
            BufferKind::Search => self.rehighlight_search(),
        }
    }

    fn rehighlight_pattern(&mut self) {
        let text = self.pattern.plain_text();
        let segments = annotate(&text);
        let rendered = render_document(&segments, &self.theme);
        debug!(chars = text.chars().count(), segments = segments.len(), "pattern annotated");

        if let Some(mut guard) = RewriteGuard::begin(&mut self.pattern) {
            guard.apply(&text, rendered);
        }
        if self.pattern.take_pending_rewrite() {
            self.rehighlight_pattern();
        }
    }

    fn rehighlight_search(&mut self) {
        let pattern = self.pattern.plain_text();
        let text = self.search.plain_text();

        match find_matches(&pattern, &text, self.mode) {
            Ok(outcome) => {
                let rendered = render_document(&outcome.segments, &self.theme);
                debug!(matches = outcome.matches.len(), "search text rehighlighted");

                if let Some(mut guard) = RewriteGuard::begin(&mut self.search) {
                    guard.apply(&text, rendered);
                    self.matches = outcome.matches;
                    self.status = None;
                }
                if self.search.take_pending_rewrite() {
                    self.rehighlight_search();
                }
            }
            Err(Error::Pattern(message)) => {
                // Abandon the recompute; the previous rendering stays up.
                warn!(%message, "pattern failed to compile");
                self.status = Some(message);
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::matcher::MatchMode;
    use crate::render::{DOC_CLOSE, DOC_OPEN};
    use crate::span::Span;

    #[test]
    fn fresh_session_renders_empty_documents() {
        let session = Session::new();
        let empty = format!("{DOC_OPEN}{DOC_CLOSE}");
        assert_eq!(session.pattern_rendered(), empty);
        assert_eq!(session.search_rendered(), empty);
        assert!(session.matches().is_empty());
        assert!(session.status().is_none());
        assert_eq!(session.mode(), MatchMode::FirstOnly);
    }

    #[test]
    fn pattern_edit_recomputes_both_buffers() {
        let mut session = Session::new();
        session.edit_search(|buf| buf.set_text("baaab"));
        session.edit_pattern(|buf| buf.set_text("a+"));

        assert!(session.pattern_rendered().contains("color:#0000ff;")); // the +
        assert!(session.search_rendered().contains("background-color:#ade7a5;"));
        assert_eq!(session.matches().len(), 1);
        assert_eq!(session.matches()[0].span, Span::new(1, 4));
    }

    #[test]
    fn search_edit_recomputes_search_only() {
        let mut session = Session::new();
        session.edit_pattern(|buf| buf.set_text("b"));
        let pattern_rendered = session.pattern_rendered().to_string();

        session.edit_search(|buf| buf.set_text("abc"));
        assert_eq!(session.pattern_rendered(), pattern_rendered);
        assert_eq!(session.matches().len(), 1);
    }

    #[test]
    fn mode_toggle_retriggers_search_recompute() {
        let mut session = Session::new();
        session.edit_pattern(|buf| buf.set_text("a"));
        session.edit_search(|buf| buf.set_text("aaa"));
        assert_eq!(session.matches().len(), 1);

        session.set_mode(MatchMode::AllNonOverlapping);
        assert_eq!(session.matches().len(), 3);

        session.set_mode(MatchMode::FirstOnly);
        assert_eq!(session.matches().len(), 1);
    }

    #[test]
    fn invalid_pattern_keeps_previous_rendering() {
        let mut session = Session::new();
        session.edit_pattern(|buf| buf.set_text("a+"));
        session.edit_search(|buf| buf.set_text("baaab"));
        let rendered_before = session.search_rendered().to_string();
        let matches_before = session.matches().to_vec();

        session.edit_pattern(|buf| buf.insert(0, "("));
        assert!(session.status().is_some());
        assert_eq!(session.search_rendered(), rendered_before);
        assert_eq!(session.matches(), matches_before.as_slice());

        // The pattern buffer itself still re-annotates
        assert!(session.pattern_rendered().contains("color:#c54b78;"));
    }

    #[test]
    fn status_clears_after_successful_recompute() {
        let mut session = Session::new();
        session.edit_search(|buf| buf.set_text("ab"));
        session.edit_pattern(|buf| buf.set_text("("));
        assert!(session.status().is_some());

        session.edit_pattern(|buf| buf.insert(1, "a)"));
        assert!(session.status().is_none());
        assert_eq!(session.matches().len(), 1);
    }

    #[test]
    fn caret_survives_recompute() {
        let mut session = Session::new();
        session.edit_search(|buf| buf.set_text("hello"));
        session.edit_search(|buf| buf.set_caret(2));
        session.edit_pattern(|buf| buf.set_text("l"));
        assert_eq!(session.search_surface().caret(), 2);
    }

    #[test]
    fn rewrite_does_not_feed_back_into_pipeline() {
        let mut session = Session::new();
        session.edit_pattern(|buf| buf.set_text("a"));
        session.edit_search(|buf| buf.set_text("a"));

        // If a rewrite re-raised the notification, pump would recompute
        // forever; a drained session must stay quiet.
        session.pump();
        assert!(!session.pattern.take_dirty());
        assert!(!session.search.take_dirty());
    }

    #[test]
    fn inspector_rows_follow_matches() {
        let mut session = Session::new();
        session.edit_pattern(|buf| buf.set_text("(a)(b)"));
        session.edit_search(|buf| buf.set_text("ab"));
        let rows = session.inspector_rows();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("match 0"));
    }

    #[test]
    fn theme_change_rerenders_both() {
        let mut session = Session::new();
        session.edit_pattern(|buf| buf.set_text("a+"));
        session.edit_search(|buf| buf.set_text("aa"));
        assert!(session.search_rendered().contains("#ade7a5"));

        session.set_theme(crate::theme::Theme::classic());
        assert!(session.search_rendered().contains("#62e55f"));
    }
}
