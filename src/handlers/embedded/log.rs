//! # LogWriter — delivery logger
//!
//! A minimal handler that records every delivery through `tracing` at INFO level.
//! Use it for tests, demos, or to trace which events an object emits.
//!
//! ## Example output (fmt subscriber)
//! ```text
//! INFO vent: event delivered hub="ui" event="clicked" bind=Owner args=("ok", 2)
//! ```

use std::fmt::Debug;
use std::sync::Arc;

use tracing::info;

use crate::error::HandlerResult;
use crate::handlers::{Context, HandlerRef, Subscribe};

/// Delivery logging handler.
#[derive(Debug, Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns a fresh shared handle ready to subscribe.
    ///
    /// Every call yields a distinct handler identity.
    #[must_use]
    pub fn handler<A: Debug>() -> HandlerRef<A> {
        Arc::new(Self)
    }
}

impl<A: Debug> Subscribe<A> for LogWriter {
    fn on_event(&self, ctx: &Context<'_, A>, args: &A) -> HandlerResult {
        info!(
            hub = %ctx.hub().config().label(),
            event = ctx.event(),
            bind = ?ctx.bind(),
            args = ?args,
            "event delivered"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
