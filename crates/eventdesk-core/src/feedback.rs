// ── User feedback hooks ──
//
// The controller never draws anything itself. Front-ends implement these
// traits to show the loading indicator, toasts and confirmation prompts.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient user notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// Loading indicator and toast sink.
pub trait Feedback: Send + Sync {
    /// Show (`true`) or hide (`false`) the global loading indicator.
    fn set_loading(&self, active: bool);

    fn toast(&self, toast: &Toast);
}

/// Yes/no prompt shown before destructive operations.
pub trait Confirm: Send + Sync {
    /// `false` means "do nothing".
    fn confirm(&self, prompt: &str) -> bool;
}

/// Feedback sink that discards everything.
#[derive(Debug, Default)]
pub struct Silent;

impl Feedback for Silent {
    fn set_loading(&self, _active: bool) {}
    fn toast(&self, _toast: &Toast) {}
}

/// Confirmation that always answers the same way.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

// ── Loading indicator ──────────────────────────────────────────────

/// Reference-counted loading indicator.
///
/// The indicator is shown while at least one [`LoadingGuard`] is alive,
/// so overlapping requests keep it up until the last one finishes.
pub(crate) struct LoadingIndicator {
    depth: AtomicUsize,
    feedback: Arc<dyn Feedback>,
}

impl LoadingIndicator {
    pub(crate) fn new(feedback: Arc<dyn Feedback>) -> Self {
        Self {
            depth: AtomicUsize::new(0),
            feedback,
        }
    }

    pub(crate) fn begin(&self) -> LoadingGuard<'_> {
        if self.depth.fetch_add(1, Ordering::AcqRel) == 0 {
            self.feedback.set_loading(true);
        }
        LoadingGuard { indicator: self }
    }
}

/// Clears the indicator on drop, including on early return and error.
pub(crate) struct LoadingGuard<'a> {
    indicator: &'a LoadingIndicator,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.indicator.depth.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.indicator.feedback.set_loading(false);
        }
    }
}
