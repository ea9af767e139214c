//! Delivery coordinators and the boundary they expose to the host.

pub mod config_update;
pub mod setpoint;

use std::future::Future;

use reflex_domain::category::ConfigCategory;
use reflex_domain::error::DeliveryError;

pub use config_update::ConfigUpdateDelivery;
pub use setpoint::SetPointDelivery;

/// What a delivery attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The side effect was performed.
    Delivered,
    /// The delivery is disabled; nothing was parsed and nothing was sent.
    /// The outer boundary reports this as a `false` signal, not an error.
    Disabled,
}

impl DeliveryOutcome {
    /// True when the side effect was performed.
    #[must_use]
    pub fn is_delivered(self) -> bool {
        matches!(self, Self::Delivered)
    }
}

/// The boundary the host drives: deliver one notification, or apply a new
/// configuration category.
///
/// Both delivery coordinators implement this trait; the composition root
/// picks one per deployment.
pub trait DeliveryHandler: Send + Sync {
    /// Deliver one notification.
    ///
    /// `trigger_reason` is the raw JSON payload describing why the
    /// notification fired; `message` is the host's custom message, accepted
    /// for interface compatibility and not interpreted here.
    fn deliver(
        &self,
        notification: &str,
        trigger_reason: &str,
        message: &str,
    ) -> impl Future<Output = Result<DeliveryOutcome, DeliveryError>> + Send;

    /// Replace the delivery configuration from a category snapshot.
    ///
    /// Items absent from the snapshot keep their current values.
    fn reconfigure(&self, category: ConfigCategory) -> impl Future<Output = ()> + Send;
}

impl<T: DeliveryHandler + Send + Sync> DeliveryHandler for std::sync::Arc<T> {
    fn deliver(
        &self,
        notification: &str,
        trigger_reason: &str,
        message: &str,
    ) -> impl Future<Output = Result<DeliveryOutcome, DeliveryError>> + Send {
        (**self).deliver(notification, trigger_reason, message)
    }

    fn reconfigure(&self, category: ConfigCategory) -> impl Future<Output = ()> + Send {
        (**self).reconfigure(category)
    }
}
