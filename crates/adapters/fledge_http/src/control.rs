//! Setpoint control client — one PUT to a south service.

use reflex_app::ports::SetPointTransport;
use reflex_domain::error::DeliveryError;
use reflex_domain::service::ServiceRecord;

use crate::error::ControlError;

/// The control path every south service exposes for setpoint operations.
pub const SETPOINT_PATH: &str = "/fledge/south/setpoint";

/// HTTP transport delivering setpoint commands.
#[derive(Debug, Clone, Default)]
pub struct SetPointClient {
    http: reqwest::Client,
}

impl SetPointClient {
    /// Create a transport with a fresh connection pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn url(target: &ServiceRecord) -> String {
        format!("http://{}{SETPOINT_PATH}", target.address_and_port())
    }
}

impl SetPointTransport for SetPointClient {
    async fn send(&self, target: &ServiceRecord, payload: &str) -> Result<(), DeliveryError> {
        let url = Self::url(target);
        tracing::debug!(%url, "sending setpoint");
        let response = self
            .http
            .put(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload.to_string())
            .send()
            .await
            .map_err(ControlError::from)?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ControlError::UnexpectedStatus {
                status,
                target: target.address_and_port(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_setpoint_url_from_record() {
        let record = ServiceRecord {
            name: "pump-south".to_string(),
            address: "10.0.0.7".to_string(),
            port: 6683,
        };
        assert_eq!(
            SetPointClient::url(&record),
            "http://10.0.0.7:6683/fledge/south/setpoint"
        );
    }
}
