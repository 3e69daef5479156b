//! # Event hub - subscription registry and synchronous dispatch.
//!
//! [`EventHub`] maps event names to ordered lists of [`Subscription`]s and
//! dispatches published events to them on the caller's thread.
//!
//! ## Architecture
//! ```text
//! subscribe / subscribe_once ──► write lock ──► append (or reuse) record
//! unsubscribe                ──► write lock ──► remove exact match
//!
//! publish(name, args)
//!   ├─► read lock  ──► clone name's list (snapshot) ──► unlock
//!   ├─► for sub in snapshot (registration order):
//!   │       one-shot already claimed ─► skip
//!   │       handler.on_event(ctx, args)
//!   │       ├─ Ok  ─► remember sub if one-shot
//!   │       └─ Err ─► release claim, stop, keep error
//!   ├─► write lock ──► drop remembered one-shot records (order kept)
//!   └─► return Ok(()) or PublishError
//! ```
//!
//! ## Rules
//! - Dispatch order is registration order.
//! - Subscriptions added while a publish runs are first seen by the next publish.
//! - A one-shot subscription is delivered at most once, across nested and
//!   concurrent publishes.
//! - Unknown names are harmless: queries answer negatively, publish is a no-op.
//! - The lock is never held across a handler call or while a removed record is
//!   dropped, so handlers and receivers may re-enter the hub.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace, warn};

use crate::error::PublishError;
use crate::handlers::{Context, HandlerRef};
use crate::hub::builder::HubBuilder;
use crate::hub::config::HubConfig;
use crate::hub::subscription::{Bind, Subscription};

type Table<A> = HashMap<String, Vec<Subscription<A>>>;

/// Publish/subscribe hub carrying event arguments of type `A`.
///
/// Every method takes `&self`; the registry sits behind a lock so the hub can be
/// shared (`Arc<EventHub<A>>`) and re-entered from inside handlers.
///
/// `bind` parameters are optional: `None` means [`Bind::Owner`], the hub itself.
///
/// # Example
/// ```
/// use std::sync::{Arc, Mutex};
/// use vent::{Context, EventHub, HandlerFn, HandlerRef};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let on_save: HandlerRef<String> = HandlerFn::arc("on_save", move |_ctx: &Context<'_, String>, path: &String| {
///     sink.lock().unwrap().push(path.clone());
///     Ok(())
/// });
///
/// let hub = EventHub::new();
/// hub.subscribe("saved", &on_save, None);
/// hub.publish("saved", &"notes.txt".to_string()).unwrap();
/// hub.publish("deleted", &"notes.txt".to_string()).unwrap(); // nobody listens
///
/// assert_eq!(*seen.lock().unwrap(), vec!["notes.txt".to_string()]);
/// ```
pub struct EventHub<A> {
    cfg: HubConfig,
    table: RwLock<Table<A>>,
}

impl<A> EventHub<A> {
    /// Creates an empty hub with the default [`HubConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HubConfig::default())
    }

    /// Creates an empty hub with the given configuration.
    #[must_use]
    pub fn with_config(cfg: HubConfig) -> Self {
        let table = HashMap::with_capacity(cfg.events_capacity);
        Self {
            cfg,
            table: RwLock::new(table),
        }
    }

    /// Returns a builder for a hub with pre-registered handlers.
    #[must_use]
    pub fn builder() -> HubBuilder<A> {
        HubBuilder::new(HubConfig::default())
    }

    /// The configuration this hub was created with.
    pub fn config(&self) -> &HubConfig {
        &self.cfg
    }

    /// Subscribes `handler` to `name`.
    ///
    /// Idempotent: if the same `(handler, bind)` pair is already subscribed to
    /// `name`, the existing subscription is returned unchanged.
    pub fn subscribe(
        &self,
        name: &str,
        handler: &HandlerRef<A>,
        bind: Option<&Bind>,
    ) -> Subscription<A> {
        self.insert(name, handler, bind, false)
    }

    /// Subscribes `handler` to `name` for a single successful delivery.
    ///
    /// If the pair is already subscribed as persistent, that subscription is
    /// promoted to one-shot in place and returned; no second entry is created.
    pub fn subscribe_once(
        &self,
        name: &str,
        handler: &HandlerRef<A>,
        bind: Option<&Bind>,
    ) -> Subscription<A> {
        self.insert(name, handler, bind, true)
    }

    /// True if `(handler, bind)` is subscribed to `name`.
    pub fn is_subscribed(&self, name: &str, handler: &HandlerRef<A>, bind: Option<&Bind>) -> bool {
        self.read()
            .get(name)
            .is_some_and(|list| list.iter().any(|sub| sub.matches(handler, bind)))
    }

    /// Returns the subscription matching `(name, handler, bind)`, if any.
    pub fn retrieve_subscription(
        &self,
        name: &str,
        handler: &HandlerRef<A>,
        bind: Option<&Bind>,
    ) -> Option<Subscription<A>> {
        self.read()
            .get(name)?
            .iter()
            .find(|sub| sub.matches(handler, bind))
            .cloned()
    }

    /// Removes the subscription matching `(name, handler, bind)`.
    ///
    /// Returns `false` (and does nothing) when there is no match.
    pub fn unsubscribe(&self, name: &str, handler: &HandlerRef<A>, bind: Option<&Bind>) -> bool {
        let removed = {
            let mut table = self.write();
            let Some(list) = table.get_mut(name) else {
                return false;
            };
            let Some(pos) = list.iter().position(|sub| sub.matches(handler, bind)) else {
                return false;
            };

            let removed = list.remove(pos);
            if list.is_empty() {
                table.remove(name);
            }
            removed
        };
        trace!(
            hub = %self.cfg.label,
            event = name,
            handler = handler.name(),
            "subscription removed"
        );
        // Released outside the lock: a receiver's `Drop` may call back into the hub.
        drop(removed);
        true
    }

    /// Publishes `args` to every subscriber of `name`.
    ///
    /// Subscribers are invoked in registration order against the list as it was
    /// when dispatch began. One-shot subscriptions that completed are removed
    /// afterwards in one batch. A one-shot runs at most once even when the same
    /// event is published again from a handler or from another thread.
    ///
    /// # Errors
    /// The first handler error stops dispatch; later subscribers are skipped and
    /// the error is returned as [`PublishError::Handler`]. One-shot
    /// subscriptions that completed before the failure are still removed.
    pub fn publish(&self, name: &str, args: &A) -> Result<(), PublishError> {
        let snapshot = match self.read().get(name) {
            Some(list) => list.clone(),
            None => {
                trace!(hub = %self.cfg.label, event = name, "no subscribers");
                return Ok(());
            }
        };

        debug!(
            hub = %self.cfg.label,
            event = name,
            subscribers = snapshot.len(),
            "dispatching event"
        );

        let mut spent = Vec::new();
        let mut failure = None;

        for (position, sub) in snapshot.iter().enumerate() {
            // A one-shot is delivered by whichever dispatch claims it first,
            // including a nested publish or one on another thread.
            let claimed = sub.is_once();
            if claimed && !sub.claim() {
                trace!(
                    hub = %self.cfg.label,
                    event = name,
                    handler = sub.handler().name(),
                    "one-shot already taken"
                );
                continue;
            }

            let ctx = Context::new(self, name, sub.bind());
            if let Err(source) = sub.handler().on_event(&ctx, args) {
                if claimed {
                    sub.release();
                }
                warn!(
                    hub = %self.cfg.label,
                    event = name,
                    handler = sub.handler().name(),
                    position,
                    error = %source,
                    "handler failed; dispatch interrupted"
                );
                failure = Some(PublishError::Handler {
                    event: name.to_owned(),
                    position,
                    handler: sub.handler().name(),
                    source,
                });
                break;
            }
            // Promoted by a handler mid-dispatch: claim now, unless another
            // dispatch already delivered it.
            if sub.is_once() && (claimed || sub.claim()) {
                spent.push(sub);
            }
        }

        self.remove_spent(name, &spent);

        match failure {
            Some(err) => Err(err),
            None => {
                debug!(hub = %self.cfg.label, event = name, "event dispatched");
                Ok(())
            }
        }
    }

    /// Number of subscriptions registered for `name`.
    pub fn subscription_count(&self, name: &str) -> usize {
        self.read().get(name).map_or(0, Vec::len)
    }

    /// Handles to the subscriptions of `name`, in dispatch order.
    pub fn subscriptions(&self, name: &str) -> Vec<Subscription<A>> {
        self.read().get(name).cloned().unwrap_or_default()
    }

    /// Names with at least one subscription (sorted).
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// True if no event has any subscription.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn insert(
        &self,
        name: &str,
        handler: &HandlerRef<A>,
        bind: Option<&Bind>,
        once: bool,
    ) -> Subscription<A> {
        let mut table = self.write();
        let list = table.entry(name.to_owned()).or_default();

        if let Some(existing) = list.iter().find(|sub| sub.matches(handler, bind)) {
            if once {
                existing.mark_once();
            }
            trace!(
                hub = %self.cfg.label,
                event = name,
                handler = handler.name(),
                once = existing.is_once(),
                "already subscribed"
            );
            return existing.clone();
        }

        let sub = Subscription::new(Arc::clone(handler), bind.cloned().unwrap_or_default(), once);
        list.push(sub.clone());
        trace!(
            hub = %self.cfg.label,
            event = name,
            handler = handler.name(),
            once,
            position = list.len() - 1,
            "subscription added"
        );
        sub
    }

    fn remove_spent(&self, name: &str, spent: &[&Subscription<A>]) {
        if spent.is_empty() {
            return;
        }

        let removed = {
            let mut table = self.write();
            let Some(list) = table.get_mut(name) else {
                return;
            };
            let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(list)
                .into_iter()
                .partition(|sub| spent.iter().any(|done| done.ptr_eq(sub)));
            *list = kept;
            if list.is_empty() {
                table.remove(name);
            }
            removed
        };
        trace!(
            hub = %self.cfg.label,
            event = name,
            removed = removed.len(),
            "one-shot subscriptions removed"
        );
        drop(removed);
    }

    fn read(&self) -> RwLockReadGuard<'_, Table<A>> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Table<A>> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A> Default for EventHub<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for EventHub<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHub")
            .field("label", &self.cfg.label)
            .field("events", &self.read().len())
            .finish()
    }
}
