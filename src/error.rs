//! Error types used by the eventgate dispatch layer and executors.
//!
//! This module defines two main error enums:
//!
//! - [`EventError`] - the error descriptor carried inside a failed event.
//! - [`SubmitError`] - rejection of a job by an executor.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for
//! logging/metrics.
//!
//! `EventError` is part of the event payload itself: an upstream source that
//! fails emits `Err(EventError)` through the same delivery path as values,
//! and the dispatch layer forwards it untouched. Interpreting the error is
//! entirely up to the receiving handler.

use thiserror::Error;

/// # Error descriptor carried by a failed event.
///
/// An event payload is either a value or one of these. The dispatch layer
/// never inspects the descriptor; it reaches the handler exactly as the
/// upstream source produced it.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// Upstream source produced an error instead of a value.
    #[error("upstream failed: {error}")]
    Failed {
        /// The underlying error message.
        error: String,
    },

    /// Upstream source shut down before producing a value.
    #[error("upstream source cancelled")]
    Cancelled,
}

impl EventError {
    /// Creates a [`EventError::Failed`] from any message-like value.
    ///
    /// # Example
    /// ```
    /// use eventgate::EventError;
    ///
    /// let err = EventError::failed("connection refused");
    /// assert_eq!(err.as_message(), "error: connection refused");
    /// ```
    pub fn failed(error: impl Into<String>) -> Self {
        EventError::Failed {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventgate::EventError;
    ///
    /// let err = EventError::failed("boom");
    /// assert_eq!(err.as_label(), "event_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EventError::Failed { .. } => "event_failed",
            EventError::Cancelled => "event_cancelled",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EventError::Failed { error } => format!("error: {error}"),
            EventError::Cancelled => "cancelled".to_string(),
        }
    }
}

/// # Rejection of a submitted job by an executor.
///
/// Executors accept jobs without blocking, so the only failure modes are a
/// full queue and a closed executor. Callers decide whether a rejection is
/// worth surfacing; the dispatch layer logs and drops.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The executor's queue is at capacity.
    #[error("queue is full")]
    QueueFull,

    /// The executor no longer accepts jobs (shut down or cancelled).
    #[error("executor is closed")]
    Closed,
}

impl SubmitError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventgate::SubmitError;
    ///
    /// assert_eq!(SubmitError::QueueFull.as_label(), "submit_queue_full");
    /// assert_eq!(SubmitError::Closed.as_label(), "submit_closed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SubmitError::QueueFull => "submit_queue_full",
            SubmitError::Closed => "submit_closed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_helper_builds_failed_variant() {
        let err = EventError::failed("boom");
        assert_eq!(
            err,
            EventError::Failed {
                error: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_event_error_labels_are_stable() {
        assert_eq!(EventError::failed("x").as_label(), "event_failed");
        assert_eq!(EventError::Cancelled.as_label(), "event_cancelled");
    }

    #[test]
    fn test_event_error_display_includes_message() {
        let err = EventError::failed("connection refused");
        assert_eq!(err.to_string(), "upstream failed: connection refused");
        assert_eq!(EventError::Cancelled.to_string(), "upstream source cancelled");
    }

    #[test]
    fn test_submit_error_display() {
        assert_eq!(SubmitError::QueueFull.to_string(), "queue is full");
        assert_eq!(SubmitError::Closed.to_string(), "executor is closed");
    }
}
