//! Multi-step operations built from single requests.
//!
//! A [`Process`] moves `NotStarted -> InProgress -> Completed`, or into
//! `Failed` when the server refuses a step. Each call performs one step and
//! at most one request. Nothing is retried automatically: after a transient
//! failure the caller decides whether to [`repeat`](Process::repeat).

#[allow(
    redundant_imports,
    reason = "Future needed for RPITIT despite being in Edition 2024 prelude"
)]
use std::future::Future;
use std::fmt;

pub mod cancel;
pub mod external_payment;

pub use cancel::{CancelHandle, Cancellable};
pub use external_payment::ExternalPaymentProcess;

use crate::error::Result;

/// Lifecycle of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProcessState {
    /// No step has completed yet.
    #[default]
    NotStarted,
    /// At least one step completed; more are needed.
    InProgress,
    /// The process finished successfully.
    Completed,
    /// The server refused a step; the process cannot continue.
    Failed,
}

impl ProcessState {
    /// Whether no further step is possible.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// A multi-step operation.
///
/// Step futures borrow the process mutably, so at most one step is in flight.
/// State changes only when a step finishes; a dropped or cancelled step leaves
/// the state and the stored responses as they were. A started step is still
/// remembered as the one [`repeat`](Self::repeat) re-attempts.
pub trait Process: Send {
    /// Current state.
    fn state(&self) -> ProcessState;

    /// Performs the next step. Resolves to `true` once the process is completed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`](crate::error::Error::InvalidState) if
    /// the process is already completed or failed, and the step's own error
    /// otherwise.
    fn proceed(&mut self) -> impl Future<Output = Result<bool>> + Send + '_;

    /// Re-attempts the most recently started step, whether it succeeded or failed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`](crate::error::Error::InvalidState) if
    /// no step has been attempted yet or the process is terminal.
    fn repeat(&mut self) -> impl Future<Output = Result<bool>> + Send + '_;

    /// Cancellable form of [`proceed`](Self::proceed).
    fn proceed_cancellable(&mut self) -> (Cancellable<'_, bool>, CancelHandle) {
        Cancellable::new(self.proceed())
    }

    /// Cancellable form of [`repeat`](Self::repeat).
    fn repeat_cancellable(&mut self) -> (Cancellable<'_, bool>, CancelHandle) {
        Cancellable::new(self.repeat())
    }
}
