//! Service discovery port — resolve a service name to a network address.

use std::future::Future;

use reflex_domain::error::DeliveryError;
use reflex_domain::service::ServiceRecord;

/// Looks up the network location of a named service.
pub trait ServiceDiscovery {
    /// Resolve `name` to a service record, or `None` when the service is
    /// not registered. Transport-level failures are errors; an absent
    /// service is not.
    fn get_service(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<ServiceRecord>, DeliveryError>> + Send;
}

impl<T: ServiceDiscovery + Send + Sync> ServiceDiscovery for std::sync::Arc<T> {
    fn get_service(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<ServiceRecord>, DeliveryError>> + Send {
        (**self).get_service(name)
    }
}
