//! In-process editing surface and the rewrite feedback guard.
//!
//! A [`MemorySurface`] stands in for the external text widget: it holds
//! plain text (a rope), a caret, the last applied rendered document, and a
//! set of subscribable content-changed handlers. Handlers do not run code;
//! a raised notification sets a dirty flag that the session drains. That
//! keeps the surface single-threaded and borrow-friendly while preserving
//! the semantics that matter: notifications fire only while a handler is
//! attached.
//!
//! [`RewriteGuard`] is the re-entrancy guard around a programmatic
//! rewrite. It detaches every attached handler and saves the caret on
//! entry; on drop it restores the caret (clamped to the new content
//! length), reattaches exactly the handlers it detached, and returns the
//! surface to idle. Drop runs on every exit path, so a failed rewrite can
//! never leave the surface deaf to future edits.

use ropey::Rope;

/// Identifier for a subscribed content-changed handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(u32);

/// Rewrite state of a surface. A recompute request that arrives while
/// `Rewriting` is coalesced into a single pending retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum GuardState {
    #[default]
    Idle,
    Rewriting,
}

#[derive(Clone, Debug)]
struct Handler {
    id: HandlerId,
    attached: bool,
}

/// An editable plain-text buffer with change notification.
///
/// Edits raise the content-changed notification only while at least one
/// handler is attached. Content is plain text only; rendered markup is
/// stored alongside, never parsed back.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    rope: Rope,
    caret: usize,
    rendered: String,
    handlers: Vec<Handler>,
    next_handler: u32,
    state: GuardState,
    dirty: bool,
    pending_rewrite: bool,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            ..Self::default()
        }
    }

    /// Current plain-text content.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.rope.to_string()
    }

    /// Content length in characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Caret position as a character offset.
    #[must_use]
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Move the caret, clamped to the content length.
    pub fn set_caret(&mut self, offset: usize) {
        self.caret = offset.min(self.len_chars());
    }

    /// Last rendered document applied to this surface.
    #[must_use]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Replace the entire content, placing the caret at the end.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.caret = self.len_chars();
        self.notify();
    }

    /// Insert text at a character offset (clamped), moving the caret past it.
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        let idx = char_idx.min(self.len_chars());
        self.rope.insert(idx, text);
        self.caret = idx + text.chars().count();
        self.notify();
    }

    /// Remove a character range (clamped), leaving the caret at its start.
    pub fn remove(&mut self, range: std::ops::Range<usize>) {
        let end = range.end.min(self.len_chars());
        let start = range.start.min(end);
        self.rope.remove(start..end);
        self.caret = start;
        self.notify();
    }

    /// Subscribe a content-changed handler.
    pub fn subscribe(&mut self) -> HandlerId {
        let id = HandlerId(self.next_handler);
        self.next_handler += 1;
        self.handlers.push(Handler { id, attached: true });
        id
    }

    /// Unsubscribe a handler entirely. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: HandlerId) {
        self.handlers.retain(|h| h.id != id);
    }

    /// True if any handler is currently attached.
    #[must_use]
    pub fn has_attached_handlers(&self) -> bool {
        self.handlers.iter().any(|h| h.attached)
    }

    /// True while a rewrite guard holds this surface.
    #[must_use]
    pub fn is_rewriting(&self) -> bool {
        self.state == GuardState::Rewriting
    }

    /// Drain the pending content-changed notification.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Drain the coalesced recompute request recorded during a rewrite.
    pub fn take_pending_rewrite(&mut self) -> bool {
        std::mem::take(&mut self.pending_rewrite)
    }

    fn notify(&mut self) {
        if self.has_attached_handlers() {
            self.dirty = true;
        }
    }

    fn detach_all(&mut self) -> Vec<HandlerId> {
        let mut detached = Vec::new();
        for handler in &mut self.handlers {
            if handler.attached {
                handler.attached = false;
                detached.push(handler.id);
            }
        }
        detached
    }

    fn reattach(&mut self, id: HandlerId) {
        if let Some(handler) = self.handlers.iter_mut().find(|h| h.id == id) {
            handler.attached = true;
        }
    }
}

/// Scoped guard for programmatically rewriting a surface.
///
/// While the guard lives, the surface's handlers are detached and its
/// state is `Rewriting`; applying content therefore raises no
/// notification. Dropping the guard restores the caret and the handlers.
#[must_use = "dropping the guard immediately makes the rewrite a no-op window"]
pub struct RewriteGuard<'a> {
    surface: &'a mut MemorySurface,
    saved_caret: usize,
    detached: Vec<HandlerId>,
}

impl<'a> RewriteGuard<'a> {
    /// Begin a rewrite. Returns `None` if the surface is already being
    /// rewritten; in that case a single pending retry is recorded for the
    /// caller to replay once the active rewrite finishes.
    pub fn begin(surface: &'a mut MemorySurface) -> Option<Self> {
        if surface.state == GuardState::Rewriting {
            surface.pending_rewrite = true;
            return None;
        }
        surface.state = GuardState::Rewriting;
        let saved_caret = surface.caret;
        let detached = surface.detach_all();
        Some(Self {
            surface,
            saved_caret,
            detached,
        })
    }

    /// Overwrite the surface with new plain text and its rendered document.
    ///
    /// Goes through the normal edit path; the raised notification is
    /// suppressed because the handlers are detached.
    pub fn apply(&mut self, plain: &str, rendered: String) {
        self.surface.set_text(plain);
        self.surface.rendered = rendered;
    }

    /// The surface being rewritten.
    #[must_use]
    pub fn surface(&mut self) -> &mut MemorySurface {
        self.surface
    }
}

impl Drop for RewriteGuard<'_> {
    fn drop(&mut self) {
        let caret = self.saved_caret.min(self.surface.len_chars());
        self.surface.caret = caret;
        for id in self.detached.drain(..) {
            self.surface.reattach(id);
        }
        self.surface.state = GuardState::Idle;
    }
}
