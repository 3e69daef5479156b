//! # Hub configuration.
//!
//! Provides [`HubConfig`] settings for a single [`EventHub`](crate::EventHub).
//!
//! Config is used in three ways:
//! 1. **Direct creation**: `EventHub::with_config(config)`
//! 2. **Builder**: `EventHub::builder().with_config(config)`
//! 3. **Grafting**: `HubSlot::with_config(config)` for lazily created hubs
//!
//! ## Sentinel values
//! - `events_capacity = 0` → no pre-allocation of the registry

use std::borrow::Cow;

/// Configuration for one event hub.
///
/// ## Field semantics
/// - `label`: name attached to every log record emitted by the hub
/// - `events_capacity`: number of distinct event names to pre-allocate for
#[derive(Clone, Debug)]
pub struct HubConfig {
    /// Name reported in the `hub` field of log records.
    pub label: Cow<'static, str>,

    /// Number of distinct event names the registry is pre-sized for.
    ///
    /// `0` allocates lazily on the first subscription.
    pub events_capacity: usize,
}

impl HubConfig {
    /// Returns the hub label used in logs.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns a copy of this config with another label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }
}

impl Default for HubConfig {
    /// Default configuration:
    ///
    /// - `label = "hub"`
    /// - `events_capacity = 0` (allocate on demand)
    fn default() -> Self {
        Self {
            label: Cow::Borrowed("hub"),
            events_capacity: 0,
        }
    }
}
