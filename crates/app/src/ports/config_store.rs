//! Configuration store port — category snapshots and item writes.

use std::future::Future;

use reflex_domain::category::ConfigCategory;
use reflex_domain::error::DeliveryError;

/// Access to the platform's configuration store.
///
/// The store owns the persistent configuration; this side only ever reads a
/// category snapshot, rewrites one item's value, and hands it back.
pub trait ConfigStore {
    /// Fetch a snapshot of the named category.
    fn get_category(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<ConfigCategory, DeliveryError>> + Send;

    /// Overwrite the value of one item within a category.
    fn set_category_item_value(
        &self,
        category: &str,
        item: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), DeliveryError>> + Send;
}

impl<T: ConfigStore + Send + Sync> ConfigStore for std::sync::Arc<T> {
    fn get_category(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<ConfigCategory, DeliveryError>> + Send {
        (**self).get_category(name)
    }

    fn set_category_item_value(
        &self,
        category: &str,
        item: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), DeliveryError>> + Send {
        (**self).set_category_item_value(category, item, value)
    }
}
