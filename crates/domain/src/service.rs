//! Discovered service records.

use serde::{Deserialize, Serialize};

/// The network location of a discovered service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// The service name the record was looked up by.
    pub name: String,
    /// Host name or IP address.
    pub address: String,
    /// TCP port of the service's control API.
    pub port: u16,
}

impl ServiceRecord {
    /// Return the `address:port` pair.
    #[must_use]
    pub fn address_and_port(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_address_and_port() {
        let record = ServiceRecord {
            name: "pump-south".to_string(),
            address: "10.0.0.7".to_string(),
            port: 6683,
        };
        assert_eq!(record.address_and_port(), "10.0.0.7:6683");
    }
}
