//! Cancellable process steps.

use std::{
    fmt,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use futures::{
    FutureExt,
    future::{AbortHandle, Abortable, BoxFuture, abortable},
};

use crate::error::{Error, Result};

/// A process step that can be cancelled through its [`CancelHandle`].
///
/// Resolves to [`Error::Cancelled`] if cancelled before the step finished.
/// A cancelled step is dropped at its current await point, so none of its
/// effects on the process are applied.
#[must_use = "futures do nothing unless polled"]
pub struct Cancellable<'a, T> {
    inner: Abortable<BoxFuture<'a, Result<T>>>,
}

impl<'a, T> Cancellable<'a, T> {
    /// Wraps `future` and returns it with its cancel handle.
    pub fn new<F>(future: F) -> (Self, CancelHandle)
    where
        F: Future<Output = Result<T>> + Send + 'a,
    {
        let (inner, handle) = abortable(future.boxed());
        (Self { inner }, CancelHandle { handle })
    }
}

impl<T> Future for Cancellable<'_, T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(cx).map(|outcome| match outcome {
            Ok(result) => result,
            Err(_aborted) => Err(Error::Cancelled),
        })
    }
}

impl<T> fmt::Debug for Cancellable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cancellable").field("cancelled", &self.inner.is_aborted()).finish()
    }
}

/// Cancels a [`Cancellable`] step.
///
/// Cancelling is idempotent, and cancelling a step that already finished has
/// no effect.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    handle: AbortHandle,
}

impl CancelHandle {
    /// Requests cancellation.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}
