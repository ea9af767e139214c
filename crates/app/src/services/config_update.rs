//! Config-update coordinator — delivers by rewriting a configuration item.

use tokio::sync::Mutex;

use reflex_domain::category::ConfigCategory;
use reflex_domain::config::ConfigUpdateConfig;
use reflex_domain::error::DeliveryError;
use reflex_domain::json::{JsonPath, mutate_document};
use reflex_domain::reason::TriggerReason;

use crate::ports::ConfigStore;
use crate::services::{DeliveryHandler, DeliveryOutcome};

/// Delivery coordinator for the config-mutation variant.
///
/// On a trigger/clear event it fetches the configured category from the
/// store, rewrites one property inside the targeted JSON item (preserving
/// the property's type), and writes the item back. The configuration is
/// read under a single guard; a snapshot is taken so the guard is never
/// held across store IO.
pub struct ConfigUpdateDelivery<S> {
    config: Mutex<ConfigUpdateConfig>,
    store: S,
}

impl<S: ConfigStore + Send + Sync> ConfigUpdateDelivery<S> {
    /// Create a coordinator, applying `initial` over the disabled defaults.
    pub fn new(store: S, initial: &ConfigCategory) -> Self {
        let mut config = ConfigUpdateConfig::default();
        config.apply(initial);
        Self {
            config: Mutex::new(config),
            store,
        }
    }

    async fn snapshot(&self) -> ConfigUpdateConfig {
        self.config.lock().await.clone()
    }
}

impl<S: ConfigStore + Send + Sync> DeliveryHandler for ConfigUpdateDelivery<S> {
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

        let config = self.snapshot().await;
        if !config.enable {
            return Ok(DeliveryOutcome::Disabled);
        }

        let reason = TriggerReason::parse(trigger_reason)?;
        let value = config.value_for(reason.kind);

        let category = self.store.get_category(&config.category).await?;
        if !category.item_exists(&config.item) {
            return Err(DeliveryError::ItemMissing {
                category: config.category.clone(),
                item: config.item.clone(),
            });
        }
        if !category.is_json(&config.item) {
            tracing::error!(
                category = %config.category,
                item = %config.item,
                "configuration item is not a JSON item"
            );
            return Err(DeliveryError::ItemNotJson {
                category: config.category.clone(),
                item: config.item.clone(),
            });
        }
        let json = category
            .value(&config.item)
            .ok_or_else(|| DeliveryError::ItemMissing {
                category: config.category.clone(),
                item: config.item.clone(),
            })?;

        let path = JsonPath::parse(&config.path)?;
        let updated = mutate_document(&json, &path, &config.property, value)?;

        self.store
            .set_category_item_value(&config.category, &config.item, &updated)
            .await?;

        tracing::info!(
            notification,
            category = %config.category,
            item = %config.item,
            property = %config.property,
            "configuration item updated"
        );
        Ok(DeliveryOutcome::Delivered)
    }

    async fn reconfigure(&self, category: ConfigCategory) {
        self.config.lock().await.apply(&category);
    }
}
