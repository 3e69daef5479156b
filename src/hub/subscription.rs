//! # Subscription records and receiver binding.
//!
//! A [`Subscription`] is one registered interest: a handler, the receiver it is
//! bound to ([`Bind`]) and a one-shot flag.
//!
//! ## Identity
//! ```text
//! same subscription  ⇔  same event name
//!                     ∧ Arc::ptr_eq(handler)
//!                     ∧ bind identity (Owner == Owner, Object by pointer)
//! ```
//! Values are never compared structurally: two receivers holding equal data are
//! still two receivers.
//!
//! Subscriptions are shared handles. Cloning one yields another handle to the
//! same record, so promoting a record to one-shot is visible through every
//! handle a caller kept.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::handlers::HandlerRef;

/// Receiver context a handler is invoked against.
///
/// - [`Bind::Owner`] (default) stands for the hub or grafted target that owns
///   the registry.
/// - [`Bind::Object`] is an explicit receiver, compared by pointer identity.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use vent::Bind;
///
/// let widget = Arc::new(String::from("widget"));
/// let a = Bind::object(Arc::clone(&widget));
/// let b = Bind::from(widget);
/// let other = Bind::object(Arc::new(String::from("widget")));
///
/// assert_eq!(a, b);
/// assert_ne!(a, other);
/// assert_eq!(Bind::default(), Bind::Owner);
/// ```
#[derive(Clone, Default)]
pub enum Bind {
    /// The owner of the registry.
    #[default]
    Owner,
    /// An explicit receiver.
    Object(Arc<dyn Any + Send + Sync>),
}

impl Bind {
    /// Wraps a shared receiver.
    pub fn object<T: Any + Send + Sync>(receiver: Arc<T>) -> Self {
        Bind::Object(receiver)
    }

    /// True for [`Bind::Owner`].
    #[inline]
    pub fn is_owner(&self) -> bool {
        matches!(self, Bind::Owner)
    }

    /// Borrows an explicit receiver as `T`.
    ///
    /// Returns `None` for [`Bind::Owner`] or when the receiver is not a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Bind::Owner => None,
            Bind::Object(receiver) => receiver.downcast_ref::<T>(),
        }
    }

    /// Compares against an optional bind where `None` means [`Bind::Owner`].
    pub(crate) fn matches(&self, wanted: Option<&Bind>) -> bool {
        match wanted {
            None => self.is_owner(),
            Some(bind) => self == bind,
        }
    }
}

impl PartialEq for Bind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Bind::Owner, Bind::Owner) => true,
            (Bind::Object(a), Bind::Object(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl Eq for Bind {}

impl<T: Any + Send + Sync> From<Arc<T>> for Bind {
    fn from(receiver: Arc<T>) -> Self {
        Bind::Object(receiver)
    }
}

impl fmt::Debug for Bind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bind::Owner => f.write_str("Owner"),
            Bind::Object(receiver) => f
                .debug_tuple("Object")
                .field(&Arc::as_ptr(receiver).cast::<()>())
                .finish(),
        }
    }
}

struct Record<A> {
    handler: HandlerRef<A>,
    bind: Bind,
    once: AtomicBool,
    // Set while a dispatch owns the single delivery of a one-shot record.
    fired: AtomicBool,
}

/// Shared handle to one registered interest.
pub struct Subscription<A> {
    inner: Arc<Record<A>>,
}

impl<A> Subscription<A> {
    pub(crate) fn new(handler: HandlerRef<A>, bind: Bind, once: bool) -> Self {
        Self {
            inner: Arc::new(Record {
                handler,
                bind,
                once: AtomicBool::new(once),
                fired: AtomicBool::new(false),
            }),
        }
    }

    /// The handler invoked on dispatch.
    pub fn handler(&self) -> &HandlerRef<A> {
        &self.inner.handler
    }

    /// The receiver the handler is bound to.
    pub fn bind(&self) -> &Bind {
        &self.inner.bind
    }

    /// True if the subscription is removed after its next successful dispatch.
    pub fn is_once(&self) -> bool {
        self.inner.once.load(Ordering::Acquire)
    }

    /// True if both handles refer to the same record.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn mark_once(&self) {
        self.inner.once.store(true, Ordering::Release);
    }

    /// Takes the one-shot delivery; `false` if another dispatch already holds it.
    pub(crate) fn claim(&self) -> bool {
        !self.inner.fired.swap(true, Ordering::AcqRel)
    }

    /// Gives a claimed delivery back after the handler failed.
    pub(crate) fn release(&self) {
        self.inner.fired.store(false, Ordering::Release);
    }

    /// Identity match against `(handler, bind)`; `None` bind means [`Bind::Owner`].
    pub(crate) fn matches(&self, handler: &HandlerRef<A>, bind: Option<&Bind>) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.inner.handler), Arc::as_ptr(handler))
            && self.inner.bind.matches(bind)
    }
}

impl<A> Clone for Subscription<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> fmt::Debug for Subscription<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("handler", &self.inner.handler.name())
            .field("bind", &self.inner.bind)
            .field("once", &self.is_once())
            .finish()
    }
}
