//! Control transport port — deliver a setpoint payload to a service.

use std::future::Future;

use reflex_domain::error::DeliveryError;
use reflex_domain::service::ServiceRecord;

/// Sends one setpoint command to a located service.
///
/// Implementations issue a single request and report success or failure;
/// no retries happen at this boundary.
pub trait SetPointTransport {
    /// Deliver `payload` to the service at `target`.
    fn send(
        &self,
        target: &ServiceRecord,
        payload: &str,
    ) -> impl Future<Output = Result<(), DeliveryError>> + Send;
}

impl<T: SetPointTransport + Send + Sync> SetPointTransport for std::sync::Arc<T> {
    fn send(
        &self,
        target: &ServiceRecord,
        payload: &str,
    ) -> impl Future<Output = Result<(), DeliveryError>> + Send {
        (**self).send(target, payload)
    }
}
