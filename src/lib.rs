//! # vent
//!
//! **vent** is a minimal publish/subscribe event hub for Rust.
//!
//! It lets independent pieces of code register interest in named events and be
//! called, with arguments, when those events are published. A hub can be owned
//! outright ([`EventHub`]) or grafted onto an existing type ([`Emitter`],
//! [`graft!`]) so that the type *is* an emitter.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   subscribe("saved", h1)      subscribe_once("saved", h2, bind)
//!            │                               │
//!            ▼                               ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  EventHub<A>                                                      │
//! │  - HubConfig (label, capacity)                                    │
//! │  - RwLock<HashMap<name, Vec<Subscription<A>>>>                    │
//! │      "saved" ─► [ {h1, Owner, once=false}, {h2, bind, once=true} ]│
//! └───────────────────────────────┬───────────────────────────────────┘
//!                                 │ publish("saved", &args)
//!                                 ▼
//!                      snapshot (registration order)
//!                  ┌──────────────┴──────────────┐
//!                  ▼                             ▼
//!          h1.on_event(ctx, args)        h2.on_event(ctx, args)
//!                                                │
//!                                                └─► one-shot: removed after dispatch
//! ```
//!
//! ### Dispatch
//! ```text
//! publish(name, args)
//!   ├─► unknown name ─► Ok(()) (no-op)
//!   ├─► for each subscription in the snapshot:
//!   │       ├─ one-shot taken by another dispatch ─► skip
//!   │       ├─ Ok  ─► continue
//!   │       └─ Err ─► stop, PublishError::Handler
//!   └─► drop one-shot subscriptions that completed
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                         |
//! |-------------------|---------------------------------------------------------------|--------------------------------------------|
//! | **Hub**           | Subscribe, unsubscribe, query and publish named events.       | [`EventHub`], [`Subscription`], [`Bind`]   |
//! | **Handlers**      | Closures or types receiving events with a dispatch context.   | [`Subscribe`], [`HandlerFn`], [`Context`]  |
//! | **Grafting**      | Give any type emitter behaviour with lazily created storage.  | [`Emitter`], [`HubSlot`], [`graft!`]       |
//! | **Errors**        | Typed handler and publish errors.                             | [`HandlerError`], [`PublishError`]         |
//! | **Configuration** | Per-hub settings and a builder.                               | [`HubConfig`], [`HubBuilder`]              |
//!
//! ## Optional features
//! - `logging` (default): exports the built-in [`LogWriter`] handler _(demo/reference only)_.
//!
//! The hub itself logs through [`tracing`] (registry changes at TRACE, dispatch
//! at DEBUG, handler failures at WARN); install any subscriber to see them.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use vent::{Bind, Context, EventHub, HandlerFn, HandlerRef};
//!
//! type Words = Vec<&'static str>;
//!
//! struct Player {
//!     name: &'static str,
//! }
//!
//! let greetings = Arc::new(AtomicUsize::new(0));
//! let count = Arc::clone(&greetings);
//! let greet: HandlerRef<Words> = HandlerFn::arc("greet", move |ctx: &Context<'_, Words>, words: &Words| {
//!     let who = ctx.receiver::<Player>().map_or("hub", |p| p.name);
//!     println!("{who} hears {}", words.join(" "));
//!     count.fetch_add(1, Ordering::Relaxed);
//!     Ok(())
//! });
//!
//! let hub = EventHub::new();
//! let alice = Bind::object(Arc::new(Player { name: "alice" }));
//!
//! hub.subscribe("chat", &greet, None);
//! hub.subscribe_once("chat", &greet, Some(&alice));
//!
//! hub.publish("chat", &vec!["Hello", "World"])?;
//! hub.publish("chat", &vec!["Bye"])?;
//!
//! assert_eq!(greetings.load(Ordering::Relaxed), 3);
//! assert!(!hub.is_subscribed("chat", &greet, Some(&alice)));
//! # Ok::<(), vent::PublishError>(())
//! ```
mod error;
mod graft;
mod handlers;
mod hub;

// ---- Public re-exports ----

pub use error::{HandlerError, HandlerResult, PublishError};
pub use graft::{Emitter, HubSlot};
pub use handlers::{Context, HandlerFn, HandlerRef, Subscribe};
pub use hub::{Bind, EventHub, HubBuilder, HubConfig, Subscription};

// Optional: expose a simple built-in logging handler (demo/reference).
// Enabled by default with the `logging` feature.
#[cfg(feature = "logging")]
pub use handlers::LogWriter;
