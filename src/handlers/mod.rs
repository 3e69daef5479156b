//! # Event handlers.
//!
//! This module provides the [`Subscribe`] trait, the dispatch [`Context`] and a
//! closure-backed implementation, [`HandlerFn`].
//!
//! ## Architecture
//! ```text
//! publish(name, args)
//!     │  snapshot of name's subscriptions
//!     ├──► sub 1 ──► handler.on_event(&Context { hub, event, bind }, &args)
//!     ├──► sub 2 ──► handler.on_event(...)
//!     └──► sub N ──► handler.on_event(...)
//!                        │
//!                        └─► Err → dispatch stops, PublishError returned
//! ```
//!
//! ## Handler kinds
//! - **Closures** wrapped in [`HandlerFn`] for one-off reactions
//! - **Types** implementing [`Subscribe`] when the handler carries state
//! - **Built-in** [`LogWriter`] (feature `logging`) for tracing deliveries

#[cfg(feature = "logging")]
mod embedded;
mod handler_fn;
mod subscribe;

#[cfg(feature = "logging")]
pub use embedded::LogWriter;
pub use handler_fn::{HandlerFn, HandlerRef};
pub use subscribe::{Context, Subscribe};
