//! # Grafting hub behaviour onto other types.
//!
//! Instead of holding a hub and forwarding to it by hand, a type can *be* an
//! emitter: give it a [`HubSlot`] field and implement [`Emitter`] (or let
//! [`graft!`](crate::graft!) write the impl). The slot creates its hub on first
//! use, so constructing the type stays cheap and every instance owns its own
//! registry.
//!
//! ## Wiring
//! ```text
//! struct Widget { events: HubSlot<Args>, .. }
//!          │
//!          └─ graft!(Widget, events, Args)
//!                 └─► impl Emitter for Widget
//!                        subscribe / subscribe_once / unsubscribe /
//!                        is_subscribed / retrieve_subscription / publish
//!                        └─► self.events.hub() (created on first subscribe)
//! ```
//!
//! ## Example
//! ```rust
//! use vent::{graft, Context, Emitter, HandlerFn, HandlerRef, HubSlot};
//!
//! #[derive(Default)]
//! struct Button {
//!     caption: String,
//!     events: HubSlot<String>,
//! }
//!
//! graft!(Button, events, String);
//!
//! let ok = Button { caption: "Ok".into(), ..Default::default() };
//! let cancel = Button { caption: "Cancel".into(), ..Default::default() };
//! let h: HandlerRef<String> = HandlerFn::arc("click", |_ctx: &Context<'_, String>, _: &String| Ok(()));
//!
//! ok.subscribe("click", &h, None);
//! assert!(ok.is_subscribed("click", &h, None));
//! assert!(!cancel.is_subscribed("click", &h, None));
//! assert!(!cancel.events.is_initialized());
//! # let _ = (&ok.caption, &cancel.caption);
//! ```

use std::fmt;
use std::sync::OnceLock;

use crate::error::PublishError;
use crate::handlers::HandlerRef;
use crate::hub::{Bind, EventHub, HubConfig, Subscription};

/// Lazily initialised hub storage for a grafted type.
pub struct HubSlot<A> {
    cfg: HubConfig,
    cell: OnceLock<EventHub<A>>,
}

impl<A> HubSlot<A> {
    /// Creates an empty slot; the hub is built with the default config on first use.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HubConfig::default())
    }

    /// Creates an empty slot whose hub will use `cfg`.
    #[must_use]
    pub fn with_config(cfg: HubConfig) -> Self {
        Self {
            cfg,
            cell: OnceLock::new(),
        }
    }

    /// Returns the hub, creating it if this is the first use.
    pub fn hub(&self) -> &EventHub<A> {
        self.cell
            .get_or_init(|| EventHub::with_config(self.cfg.clone()))
    }

    /// Returns the hub if it has been created.
    pub fn get(&self) -> Option<&EventHub<A>> {
        self.cell.get()
    }

    /// True once something has been subscribed through this slot.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<A> Default for HubSlot<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for HubSlot<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubSlot")
            .field("label", &self.cfg.label)
            .field("hub", &self.cell.get())
            .finish()
    }
}

/// Event-emitter behaviour for any type that owns a [`HubSlot`].
///
/// Only [`Emitter::hub_slot`] is required; every other method forwards to the
/// slot's hub. Queries, removals and publishes never create the hub.
pub trait Emitter {
    /// Argument type carried by this emitter's events.
    type Args;

    /// The slot holding this value's registry.
    fn hub_slot(&self) -> &HubSlot<Self::Args>;

    /// See [`EventHub::subscribe`].
    fn subscribe(
        &self,
        name: &str,
        handler: &HandlerRef<Self::Args>,
        bind: Option<&Bind>,
    ) -> Subscription<Self::Args> {
        self.hub_slot().hub().subscribe(name, handler, bind)
    }

    /// See [`EventHub::subscribe_once`].
    fn subscribe_once(
        &self,
        name: &str,
        handler: &HandlerRef<Self::Args>,
        bind: Option<&Bind>,
    ) -> Subscription<Self::Args> {
        self.hub_slot().hub().subscribe_once(name, handler, bind)
    }

    /// See [`EventHub::unsubscribe`].
    fn unsubscribe(&self, name: &str, handler: &HandlerRef<Self::Args>, bind: Option<&Bind>) -> bool {
        self.hub_slot()
            .get()
            .is_some_and(|hub| hub.unsubscribe(name, handler, bind))
    }

    /// See [`EventHub::is_subscribed`].
    fn is_subscribed(&self, name: &str, handler: &HandlerRef<Self::Args>, bind: Option<&Bind>) -> bool {
        self.hub_slot()
            .get()
            .is_some_and(|hub| hub.is_subscribed(name, handler, bind))
    }

    /// See [`EventHub::retrieve_subscription`].
    fn retrieve_subscription(
        &self,
        name: &str,
        handler: &HandlerRef<Self::Args>,
        bind: Option<&Bind>,
    ) -> Option<Subscription<Self::Args>> {
        self.hub_slot()
            .get()?
            .retrieve_subscription(name, handler, bind)
    }

    /// See [`EventHub::publish`].
    ///
    /// # Errors
    /// Propagates the first handler failure as [`PublishError`].
    fn publish(&self, name: &str, args: &Self::Args) -> Result<(), PublishError> {
        match self.hub_slot().get() {
            Some(hub) => hub.publish(name, args),
            None => Ok(()),
        }
    }
}

/// Implements [`Emitter`] for a type through one of its [`HubSlot`] fields.
///
/// `graft!(Type, field, Args)` expands to an `impl Emitter for Type` whose
/// registry lives in `self.field`.
#[macro_export]
macro_rules! graft {
    ($target:ty, $field:ident, $args:ty) => {
        impl $crate::Emitter for $target {
            type Args = $args;

            fn hub_slot(&self) -> &$crate::HubSlot<$args> {
                &self.$field
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{Context, HandlerFn};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Door {
        events: HubSlot<bool>,
    }

    crate::graft!(Door, events, bool);

    struct Sensor {
        name: &'static str,
        slot: HubSlot<bool>,
    }

    impl Emitter for Sensor {
        type Args = bool;

        fn hub_slot(&self) -> &HubSlot<bool> {
            &self.slot
        }
    }

    fn counter() -> (HandlerRef<bool>, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&hits);
        let h = HandlerFn::arc("counter", move |_ctx: &Context<'_, bool>, _open: &bool| {
            sink.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        (h, hits)
    }

    #[test]
    fn test_grafted_targets_do_not_share_state() {
        let front = Door::default();
        let back = Door::default();
        let (h, hits) = counter();

        front.subscribe("opened", &h, None);

        assert!(front.is_subscribed("opened", &h, None));
        assert!(!back.is_subscribed("opened", &h, None));

        back.publish("opened", &true).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        front.publish("opened", &true).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_slot_initialized_on_first_subscribe() {
        let door = Door::default();
        let (h, _) = counter();

        assert!(!door.unsubscribe("opened", &h, None));
        assert!(door.retrieve_subscription("opened", &h, None).is_none());
        assert!(door.publish("opened", &false).is_ok());
        assert!(!door.events.is_initialized());

        door.subscribe_once("opened", &h, None);
        assert!(door.events.is_initialized());
    }

    #[test]
    fn test_manual_impl_full_surface() {
        let sensor = Sensor {
            name: "porch",
            slot: HubSlot::with_config(HubConfig::default().with_label("porch")),
        };
        let (h, hits) = counter();

        let sub = sensor.subscribe_once("motion", &h, None);
        let found = sensor.retrieve_subscription("motion", &h, None).unwrap();
        assert!(found.ptr_eq(&sub));
        assert!(found.is_once());

        sensor.publish("motion", &true).unwrap();
        sensor.publish("motion", &true).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!sensor.is_subscribed("motion", &h, None));

        sensor.subscribe("motion", &h, None);
        assert!(sensor.unsubscribe("motion", &h, None));
        assert_eq!(sensor.hub_slot().hub().config().label(), sensor.name);
    }

    #[test]
    fn test_handler_context_points_at_slot_hub() {
        let door = Door::default();
        let (late, late_hits) = counter();
        let hook = Arc::clone(&late);
        let adder = HandlerFn::arc("adder", move |ctx: &Context<'_, bool>, _open: &bool| {
            ctx.hub().subscribe("closed", &hook, None);
            Ok(())
        });

        door.subscribe("opened", &adder, None);
        door.publish("opened", &true).unwrap();
        door.publish("closed", &false).unwrap();

        assert!(door.is_subscribed("closed", &late, None));
        assert_eq!(late_hits.load(Ordering::SeqCst), 1);
    }
}
