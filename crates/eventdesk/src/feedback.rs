//! Terminal implementations of the core feedback and confirmation seams.

use std::io::{self, IsTerminal};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use eventdesk_core::{Confirm, Feedback, Toast, ToastKind};

// ── Spinner + toasts ────────────────────────────────────────────────

/// Spinner on stderr while requests are in flight; toasts as stderr lines.
///
/// Error toasts are only echoed at `-v` and above, since the final miette
/// report already carries the failure.
pub struct TerminalFeedback {
    spinner: Mutex<Option<ProgressBar>>,
    show_spinner: bool,
    quiet: bool,
    verbose: u8,
    color: bool,
}

impl TerminalFeedback {
    pub fn new(quiet: bool, verbose: u8, color: bool) -> Self {
        Self {
            spinner: Mutex::new(None),
            show_spinner: !quiet && io::stderr().is_terminal(),
            quiet,
            verbose,
            color,
        }
    }

    fn create_spinner() -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/", "-"])
            .template("{spinner} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message("読み込み中...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }
}

impl Feedback for TerminalFeedback {
    fn set_loading(&self, active: bool) {
        if !self.show_spinner {
            return;
        }
        let mut slot = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        if active {
            if slot.is_none() {
                *slot = Some(Self::create_spinner());
            }
        } else if let Some(spinner) = slot.take() {
            spinner.finish_and_clear();
        }
    }

    fn toast(&self, toast: &Toast) {
        match toast.kind {
            ToastKind::Success if !self.quiet => {
                if self.color {
                    eprintln!("{} {}", "✓".green(), toast.message);
                } else {
                    eprintln!("✓ {}", toast.message);
                }
            }
            ToastKind::Error if self.verbose > 0 => {
                if self.color {
                    eprintln!("{} {}", "✗".red(), toast.message.red());
                } else {
                    eprintln!("✗ {}", toast.message);
                }
            }
            _ => {}
        }
    }
}

// ── Confirmation ────────────────────────────────────────────────────

/// Prompt on the terminal, auto-approving when `--yes` was passed.
///
/// Without a terminal on stdin there is nobody to ask, so the answer is no.
pub struct PromptConfirm {
    yes: bool,
}

impl PromptConfirm {
    pub fn new(yes: bool) -> Self {
        Self { yes }
    }
}

impl Confirm for PromptConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if self.yes {
            return true;
        }
        if !io::stdin().is_terminal() {
            tracing::debug!("stdin is not a terminal, declining: {prompt}");
            return false;
        }
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}
