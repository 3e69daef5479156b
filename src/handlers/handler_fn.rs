//! # Function-backed handler (`HandlerFn`)
//!
//! [`HandlerFn`] wraps a closure `F: Fn(&Context<'_, A>, &A) -> HandlerResult`
//! with a stable name. Shared state captured by the closure must be wrapped
//! explicitly (`Arc<...>`, atomics, a `Mutex`).
//!
//! Identity is the allocation: the hub compares [`HandlerRef`]s with
//! `Arc::ptr_eq`, so keep the `HandlerRef` you subscribed with if you intend to
//! unsubscribe later. Wrapping the same closure twice gives two handlers.
//!
//! ## Example
//! ```rust
//! use vent::{Context, HandlerFn, HandlerRef, Subscribe};
//!
//! let h: HandlerRef<String> = HandlerFn::arc("greeter", |_ctx: &Context<'_, String>, who: &String| {
//!     println!("hello, {who}");
//!     Ok(())
//! });
//!
//! assert_eq!(h.name(), "greeter");
//! ```

use std::sync::Arc;

use crate::error::HandlerResult;
use crate::handlers::subscribe::{Context, Subscribe};

/// Shared handle to a handler (`Arc<dyn Subscribe<A>>`).
pub type HandlerRef<A> = Arc<dyn Subscribe<A>>;

/// Function-backed handler implementation.
#[derive(Debug)]
pub struct HandlerFn<F> {
    name: &'static str,
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new function-backed handler.
    ///
    /// Prefer [`HandlerFn::arc`] when you immediately need a [`HandlerRef`].
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }

    /// Creates the handler and returns it as a shared handle.
    ///
    /// ## Example
    /// ```rust
    /// use vent::{Context, EventHub, HandlerFn, HandlerRef};
    ///
    /// let h: HandlerRef<u8> = HandlerFn::arc("noop", |_ctx: &Context<'_, u8>, _v: &u8| Ok(()));
    /// let hub = EventHub::new();
    /// hub.subscribe("tick", &h, None);
    /// assert!(hub.is_subscribed("tick", &h, None));
    /// ```
    pub fn arc<A>(name: &'static str, f: F) -> HandlerRef<A>
    where
        F: Fn(&Context<'_, A>, &A) -> HandlerResult + Send + Sync + 'static,
    {
        Arc::new(Self::new(name, f))
    }
}

impl<A, F> Subscribe<A> for HandlerFn<F>
where
    F: Fn(&Context<'_, A>, &A) -> HandlerResult + Send + Sync + 'static,
{
    fn on_event(&self, ctx: &Context<'_, A>, args: &A) -> HandlerResult {
        (self.f)(ctx, args)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
