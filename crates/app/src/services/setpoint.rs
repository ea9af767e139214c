//! Setpoint coordinator — delivers by forwarding a command to a service.

use tokio::sync::Mutex;

use reflex_domain::category::ConfigCategory;
use reflex_domain::config::SetPointConfig;
use reflex_domain::error::DeliveryError;
use reflex_domain::reason::TriggerReason;
use reflex_domain::template::substitute;

use crate::ports::{ServiceDiscovery, SetPointTransport};
use crate::services::{DeliveryHandler, DeliveryOutcome};

/// Delivery coordinator for the forwarding variant.
///
/// On a trigger/clear event it selects the configured payload, splices any
/// delivered readings into it, resolves the target service's address and
/// hands the result to the transport. The configuration guard is released
/// before discovery or transport IO happens.
pub struct SetPointDelivery<D, T> {
    config: Mutex<SetPointConfig>,
    discovery: D,
    transport: T,
}

impl<D, T> SetPointDelivery<D, T>
where
    D: ServiceDiscovery + Send + Sync,
    T: SetPointTransport + Send + Sync,
{
    /// Create a coordinator, applying `initial` over the disabled defaults.
    pub fn new(discovery: D, transport: T, initial: &ConfigCategory) -> Self {
        let mut config = SetPointConfig::default();
        config.apply(initial);
        Self {
            config: Mutex::new(config),
            discovery,
            transport,
        }
    }
}

impl<D, T> DeliveryHandler for SetPointDelivery<D, T>
where
    D: ServiceDiscovery + Send + Sync,
    T: SetPointTransport + Send + Sync,
{
    async fn deliver(
        &self,
        notification: &str,
        trigger_reason: &str,
        message: &str,
    ) -> Result<DeliveryOutcome, DeliveryError> {
        tracing::debug!(
            notification,
            reason = trigger_reason,
            custom_message = message,
            "deliver called"
        );

        let config = self.config.lock().await.clone();
        if !config.enable {
            return Ok(DeliveryOutcome::Disabled);
        }

        let reason = TriggerReason::parse(trigger_reason)?;
        let mut value = config.value_for(reason.kind).to_string();

        if let Some(data) = &reason.data {
            let result = substitute(&value, data);
            for diagnostic in &result.diagnostics {
                tracing::warn!(template = %value, %diagnostic, "template substitution");
            }
            value = result.text;
        }

        let record = self
            .discovery
            .get_service(&config.service)
            .await?
            .ok_or_else(|| DeliveryError::ServiceNotFound {
                service: config.service.clone(),
            })?;

        self.transport.send(&record, &value).await?;

        tracing::info!(
            notification,
            service = %config.service,
            target = %record.address_and_port(),
            "setpoint delivered"
        );
        Ok(DeliveryOutcome::Delivered)
    }

    async fn reconfigure(&self, category: ConfigCategory) {
        self.config.lock().await.apply(&category);
    }
}
