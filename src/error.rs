//! Error types used by the hub and by event handlers.
//!
//! This module defines two error enums:
//!
//! - [`HandlerError`] — errors returned by individual handlers.
//! - [`PublishError`] — the error surfaced by [`EventHub::publish`](crate::EventHub::publish)
//!   when a handler fails and dispatch is interrupted.
//!
//! Query and removal operations on the hub never fail; a missing match is a
//! negative result, not an error.

use thiserror::Error;

/// Result type returned by every handler invocation.
pub type HandlerResult = Result<(), HandlerError>;

/// # Errors produced by event handlers.
///
/// The hub does not catch these: the first handler error stops delivery for the
/// current publish and is returned to the publisher inside [`PublishError`].
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Handler failed with a plain message.
    #[error("handler failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Handler failed with an arbitrary error value.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl HandlerError {
    /// Builds a [`HandlerError::Fail`] from anything printable.
    pub fn fail(error: impl Into<String>) -> Self {
        HandlerError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use vent::HandlerError;
    ///
    /// let err = HandlerError::fail("boom");
    /// assert_eq!(err.as_label(), "handler_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            HandlerError::Fail { .. } => "handler_failed",
            HandlerError::Other(_) => "handler_error",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            HandlerError::Fail { error } => format!("error: {error}"),
            HandlerError::Other(source) => format!("error: {source}"),
        }
    }
}

impl From<String> for HandlerError {
    fn from(error: String) -> Self {
        HandlerError::Fail { error }
    }
}

impl From<&str> for HandlerError {
    fn from(error: &str) -> Self {
        HandlerError::fail(error)
    }
}

/// # Errors produced by [`EventHub::publish`](crate::EventHub::publish).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum PublishError {
    /// A handler returned an error; subscribers after it were not invoked.
    #[error("handler {handler:?} failed on event {event:?} at position {position}: {source}")]
    Handler {
        /// Event being published.
        event: String,
        /// Zero-based position of the failing subscription in the dispatch snapshot.
        position: usize,
        /// Name reported by the failing handler.
        handler: &'static str,
        /// The handler's error.
        #[source]
        source: HandlerError,
    },
}

impl PublishError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use vent::{HandlerError, PublishError};
    ///
    /// let err = PublishError::Handler {
    ///     event: "saved".into(),
    ///     position: 0,
    ///     handler: "audit",
    ///     source: HandlerError::fail("disk full"),
    /// };
    /// assert_eq!(err.as_label(), "publish_handler_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            PublishError::Handler { .. } => "publish_handler_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            PublishError::Handler {
                event,
                position,
                handler,
                source,
            } => format!(
                "event={event} handler={handler} position={position} {}",
                source.as_message()
            ),
        }
    }

    /// Returns the handler error that interrupted dispatch.
    pub fn handler_error(&self) -> &HandlerError {
        match self {
            PublishError::Handler { source, .. } => source,
        }
    }
}
