//! Unsaved-changes tracking and discard confirmation

/// Action held back until the user confirms discarding their edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardAction {
    /// Close the whole dialog
    Close,
    /// Return to the type selection step
    Back,
}

impl DiscardAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Close => "close this dialog",
            Self::Back => "go back to type selection",
        }
    }
}

/// Discard prompt currently shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDiscard {
    pub action: DiscardAction,
    /// Whether "Discard" (rather than "Cancel") is highlighted
    pub discard_selected: bool,
}

/// Tracks whether the form has unsaved changes and which discard prompt is open
#[derive(Debug, Clone, Default)]
pub struct DirtyStateGuard {
    is_dirty: bool,
    pending: Option<PendingDiscard>,
}

impl DirtyStateGuard {
    pub fn mark_dirty(&mut self) {
        self.is_dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn pending(&self) -> Option<&PendingDiscard> {
        self.pending.as_ref()
    }

    /// Ask to perform `action`.
    ///
    /// Returns the action when it can run right away. With unsaved changes the
    /// prompt is opened instead and `None` is returned; a prompt that is
    /// already open is left as is.
    pub fn request(&mut self, action: DiscardAction) -> Option<DiscardAction> {
        if !self.is_dirty {
            return Some(action);
        }
        if self.pending.is_none() {
            self.pending = Some(PendingDiscard {
                action,
                discard_selected: false,
            });
        }
        None
    }

    /// Accept the prompt: returns the held action and forgets the edits
    pub fn confirm(&mut self) -> Option<DiscardAction> {
        let pending = self.pending.take()?;
        self.is_dirty = false;
        Some(pending.action)
    }

    /// Dismiss the prompt, keeping the edits
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn toggle_selection(&mut self) {
        if let Some(pending) = self.pending.as_mut() {
            pending.discard_selected = !pending.discard_selected;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
