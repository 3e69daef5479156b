//! Event hub: registry, subscriptions and configuration.
//!
//! ## Contents
//! - [`EventHub`] registry of named events and synchronous dispatch
//! - [`Subscription`], [`Bind`] registered interests and their receivers
//! - [`HubConfig`] per-hub settings
//! - [`HubBuilder`] hub construction with pre-registered handlers
//!
//! ## Quick reference
//! ```text
//! EventHub
//!   └─ HashMap<event name, Vec<Subscription>>
//!                            └─ { handler: HandlerRef, bind: Bind, once }
//! ```

mod builder;
mod config;
mod registry;
mod subscription;

pub use builder::HubBuilder;
pub use config::HubConfig;
pub use registry::EventHub;
pub use subscription::{Bind, Subscription};
