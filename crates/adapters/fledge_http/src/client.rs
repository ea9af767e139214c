//! Core management API client — configuration store and service discovery.

use serde::Deserialize;
use serde_json::Value;

use reflex_app::ports::{ConfigStore, ServiceDiscovery};
use reflex_domain::category::ConfigCategory;
use reflex_domain::error::DeliveryError;
use reflex_domain::service::ServiceRecord;

use crate::error::ManagementError;

/// HTTP client for the platform's core management API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct FledgeClient {
    base_url: String,
    http: reqwest::Client,
}

impl FledgeClient {
    /// Create a client for the management API at `base_url`
    /// (e.g. `http://127.0.0.1:8081`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn category_url(&self, name: &str) -> String {
        format!("{}/fledge/service/category/{name}", self.base_url)
    }

    fn item_url(&self, category: &str, item: &str) -> String {
        format!(
            "{}/fledge/service/category/{category}/{item}",
            self.base_url
        )
    }

    fn service_query_url(&self) -> String {
        format!("{}/fledge/service", self.base_url)
    }
}

/// Shape of the management API's service listing.
#[derive(Debug, Deserialize)]
struct ServicesResponse {
    services: Vec<ServiceEntry>,
}

#[derive(Debug, Deserialize)]
struct ServiceEntry {
    name: String,
    address: String,
    service_port: u16,
}

impl ServicesResponse {
    /// Pick the entry matching `name`, if any.
    fn find(self, name: &str) -> Option<ServiceRecord> {
        self.services
            .into_iter()
            .find(|entry| entry.name == name)
            .map(|entry| ServiceRecord {
                name: entry.name,
                address: entry.address,
                port: entry.service_port,
            })
    }
}

impl ConfigStore for FledgeClient {
    async fn get_category(&self, name: &str) -> Result<ConfigCategory, DeliveryError> {
        let url = self.category_url(name);
        tracing::debug!(%url, "fetching category");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ManagementError::from)?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ManagementError::UnexpectedStatus {
                status,
                resource: format!("category {name}"),
            }
            .into());
        }
        let items: Value = response.json().await.map_err(ManagementError::from)?;
        Ok(ConfigCategory::from_value(name, items)?)
    }

    async fn set_category_item_value(
        &self,
        category: &str,
        item: &str,
        value: &str,
    ) -> Result<(), DeliveryError> {
        let url = self.item_url(category, item);
        tracing::debug!(%url, "writing category item");
        let response = self
            .http
            .put(url)
            .json(&serde_json::json!({ "value": value }))
            .send()
            .await
            .map_err(ManagementError::from)?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ManagementError::UnexpectedStatus {
                status,
                resource: format!("category item {category}/{item}"),
            }
            .into());
        }
        Ok(())
    }
}

impl ServiceDiscovery for FledgeClient {
    async fn get_service(&self, name: &str) -> Result<Option<ServiceRecord>, DeliveryError> {
        let url = self.service_query_url();
        tracing::debug!(%url, service = name, "looking up service");
        let response = self
            .http
            .get(url)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(ManagementError::from)?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if status != reqwest::StatusCode::OK {
            return Err(ManagementError::UnexpectedStatus {
                status,
                resource: format!("service {name}"),
            }
            .into());
        }
        let listing: ServicesResponse = response.json().await.map_err(ManagementError::from)?;
        Ok(listing.find(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_strip_trailing_slashes_from_base_url() {
        let client = FledgeClient::new("http://core:8081//");
        assert_eq!(
            client.category_url("pump"),
            "http://core:8081/fledge/service/category/pump"
        );
    }

    #[test]
    fn should_build_item_url() {
        let client = FledgeClient::new("http://core:8081");
        assert_eq!(
            client.item_url("pump", "settings"),
            "http://core:8081/fledge/service/category/pump/settings"
        );
    }

    #[test]
    fn should_pick_matching_service_from_listing() {
        let listing: ServicesResponse = serde_json::from_value(json!({
            "services": [
                {"name": "boiler-south", "address": "10.0.0.6", "service_port": 6682},
                {"name": "pump-south", "address": "10.0.0.7", "service_port": 6683}
            ]
        }))
        .unwrap();
        let record = listing.find("pump-south").unwrap();
        assert_eq!(record.address, "10.0.0.7");
        assert_eq!(record.port, 6683);
    }

    #[test]
    fn should_return_none_when_listing_has_no_match() {
        let listing: ServicesResponse =
            serde_json::from_value(json!({"services": []})).unwrap();
        assert!(listing.find("pump-south").is_none());
    }
}
