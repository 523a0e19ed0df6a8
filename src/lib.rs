//! `regexpane` - live regex highlighting engine.
//!
//! The core of an interactive regex tester: one buffer holds a regular
//! expression, another holds sample text, and every edit recomputes a
//! syntax-colored rendering of the pattern, a match-highlighted rendering
//! of the search text, and a flattened match/group inspector list.
//!
//! The engine is deliberately UI-free. Window chrome, toolbars, and text
//! widgets live outside the crate; they talk to a [`Session`] through plain
//! edits and read back rendered markup documents. The one genuinely subtle
//! piece is the feedback guard: applying a rendering back to a buffer must
//! not re-trigger the change notification that drives recomputation, and
//! the caret must survive the rewrite. See [`surface::RewriteGuard`].
//!
//! # Examples
//!
//! ```
//! use regexpane::{MatchMode, Session};
//!
//! let mut session = Session::new();
//! session.edit_pattern(|buf| buf.set_text("a+"));
//! session.edit_search(|buf| buf.set_text("baaab"));
//! session.set_mode(MatchMode::AllNonOverlapping);
//!
//! assert_eq!(session.matches().len(), 1);
//! assert_eq!(session.matches()[0].text, "aaa");
//! ```

#![allow(clippy::module_name_repetitions)] // StyleClass, StyledSegment etc
#![allow(clippy::missing_errors_doc)] // Error conditions documented on the error type
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::format_push_string)] // format! with push_str is fine

pub mod annotate;
pub mod color;
pub mod error;
pub mod matcher;
pub mod render;
pub mod segment;
pub mod session;
pub mod span;
pub mod style;
pub mod surface;
pub mod theme;

// Re-export core types at crate root
pub use annotate::annotate;
pub use color::Color;
pub use error::{Error, Result};
pub use matcher::{GroupRecord, MatchMode, MatchOutcome, MatchRecord, find_matches, inspector_rows};
pub use render::{DOC_CLOSE, DOC_OPEN, escape_markup, render_document};
pub use segment::{StyleClass, StyledSegment, plain_text};
pub use session::Session;
pub use span::Span;
pub use style::{Style, TextAttributes};
pub use surface::{HandlerId, MemorySurface, RewriteGuard};
pub use theme::Theme;
