//! # Event handler trait.
//!
//! Provides [`Subscribe`], the extension point for code that wants to be told
//! about published events, and [`Context`], the view of the dispatch a handler
//! receives.
//!
//! ## Rules
//! - Handlers run synchronously on the publisher's thread, in registration order.
//! - An `Err` return is **not** caught: it stops the current dispatch and is
//!   returned by `publish`.
//! - Handlers may call back into the hub through [`Context::hub`]; the registry
//!   is not locked while they run.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use vent::{Context, EventHub, HandlerRef, HandlerResult, Subscribe};
//!
//! #[derive(Default)]
//! struct Counter {
//!     seen: AtomicU64,
//! }
//!
//! impl Subscribe<u64> for Counter {
//!     fn on_event(&self, _ctx: &Context<'_, u64>, amount: &u64) -> HandlerResult {
//!         self.seen.fetch_add(*amount, Ordering::Relaxed);
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &'static str { "counter" }
//! }
//!
//! let counter = Arc::new(Counter::default());
//! let handler: HandlerRef<u64> = counter.clone();
//!
//! let hub = EventHub::new();
//! hub.subscribe("bytes", &handler, None);
//! hub.publish("bytes", &512).unwrap();
//! hub.publish("bytes", &512).unwrap();
//!
//! assert_eq!(counter.seen.load(Ordering::Relaxed), 1024);
//! ```

use std::any::Any;

use crate::error::HandlerResult;
use crate::hub::{Bind, EventHub};

/// Handler for published events.
///
/// ### Implementation requirements
/// - Return quickly; every later subscriber waits for this one.
/// - Return `Err` only when the publisher should see the failure; the error
///   interrupts delivery to the remaining subscribers.
pub trait Subscribe<A>: Send + Sync {
    /// Handles one delivery of an event.
    fn on_event(&self, ctx: &Context<'_, A>, args: &A) -> HandlerResult;

    /// Returns the handler name used in logs and in [`PublishError`](crate::PublishError).
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Dispatch context passed to every handler invocation.
pub struct Context<'a, A> {
    hub: &'a EventHub<A>,
    event: &'a str,
    bind: &'a Bind,
}

impl<'a, A> Context<'a, A> {
    pub(crate) fn new(hub: &'a EventHub<A>, event: &'a str, bind: &'a Bind) -> Self {
        Self { hub, event, bind }
    }

    /// The hub performing the dispatch.
    pub fn hub(&self) -> &'a EventHub<A> {
        self.hub
    }

    /// Name of the event being published.
    pub fn event(&self) -> &'a str {
        self.event
    }

    /// The receiver this subscription was bound to.
    pub fn bind(&self) -> &'a Bind {
        self.bind
    }

    /// Borrows the explicit receiver as `T`.
    ///
    /// `None` when the subscription is bound to the owner or to another type.
    pub fn receiver<T: Any>(&self) -> Option<&'a T> {
        self.bind.downcast_ref::<T>()
    }
}
