//! # Hub builder.
//!
//! [`HubBuilder`] collects a [`HubConfig`] and a list of subscriptions, then
//! creates the [`EventHub`] and registers them in the order they were added.
//!
//! ```text
//! HubBuilder::new(cfg)
//!   .with_subscription(..) / .with_bound_subscription(..) / .with_subscription_once(..)
//!   .build() ──► EventHub::with_config(cfg) ──► subscribe / subscribe_once (in order)
//! ```

use crate::handlers::HandlerRef;
use crate::hub::config::HubConfig;
use crate::hub::registry::EventHub;
use crate::hub::subscription::Bind;

struct Pending<A> {
    name: String,
    handler: HandlerRef<A>,
    bind: Option<Bind>,
    once: bool,
}

/// Builder for constructing an [`EventHub`] with pre-registered handlers.
///
/// # Example
/// ```
/// use vent::{Context, EventHub, HandlerFn, HandlerRef, HubConfig};
///
/// let ready: HandlerRef<()> = HandlerFn::arc("ready", |_ctx: &Context<'_, ()>, _: &()| Ok(()));
/// let hub = EventHub::builder()
///     .with_config(HubConfig::default().with_label("ui"))
///     .with_subscription_once("ready", &ready)
///     .build();
///
/// assert_eq!(hub.config().label(), "ui");
/// assert!(hub.retrieve_subscription("ready", &ready, None).is_some_and(|s| s.is_once()));
/// ```
pub struct HubBuilder<A> {
    cfg: HubConfig,
    pending: Vec<Pending<A>>,
}

impl<A> HubBuilder<A> {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: HubConfig) -> Self {
        Self {
            cfg,
            pending: Vec::new(),
        }
    }

    /// Replaces the hub configuration.
    pub fn with_config(mut self, cfg: HubConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Registers a persistent subscription bound to the hub.
    pub fn with_subscription(self, name: impl Into<String>, handler: &HandlerRef<A>) -> Self {
        self.push(name.into(), handler, None, false)
    }

    /// Registers a persistent subscription bound to `bind`.
    pub fn with_bound_subscription(
        self,
        name: impl Into<String>,
        handler: &HandlerRef<A>,
        bind: Bind,
    ) -> Self {
        self.push(name.into(), handler, Some(bind), false)
    }

    /// Registers a one-shot subscription bound to the hub.
    pub fn with_subscription_once(self, name: impl Into<String>, handler: &HandlerRef<A>) -> Self {
        self.push(name.into(), handler, None, true)
    }

    /// Builds the hub and applies registrations in the order they were given.
    ///
    /// Duplicates collapse exactly as repeated `subscribe` calls would.
    pub fn build(self) -> EventHub<A> {
        let hub = EventHub::with_config(self.cfg);
        for p in self.pending {
            if p.once {
                hub.subscribe_once(&p.name, &p.handler, p.bind.as_ref());
            } else {
                hub.subscribe(&p.name, &p.handler, p.bind.as_ref());
            }
        }
        hub
    }

    fn push(mut self, name: String, handler: &HandlerRef<A>, bind: Option<Bind>, once: bool) -> Self {
        self.pending.push(Pending {
            name,
            handler: std::sync::Arc::clone(handler),
            bind,
            once,
        });
        self
    }
}
