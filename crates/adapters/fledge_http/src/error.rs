//! Adapter error types.

use reflex_domain::error::DeliveryError;

/// Errors talking to the core management API.
#[derive(Debug, thiserror::Error)]
pub enum ManagementError {
    /// The request could not be sent or the response body not decoded.
    #[error("management API request failed")]
    Http(#[from] reqwest::Error),

    /// The management API answered with an unexpected status code.
    #[error("management API returned {status} for {resource}")]
    UnexpectedStatus {
        /// HTTP status received.
        status: reqwest::StatusCode,
        /// What was being fetched or written.
        resource: String,
    },
}

impl From<ManagementError> for DeliveryError {
    fn from(err: ManagementError) -> Self {
        DeliveryError::Store(Box::new(err))
    }
}

/// Errors delivering a setpoint command to a south service.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    /// The request could not be sent.
    #[error("setpoint request failed")]
    Http(#[from] reqwest::Error),

    /// The service answered with anything other than 200.
    #[error("setpoint request to {target} returned {status}")]
    UnexpectedStatus {
        /// HTTP status received.
        status: reqwest::StatusCode,
        /// The `address:port` the request went to.
        target: String,
    },
}

impl From<ControlError> for DeliveryError {
    fn from(err: ControlError) -> Self {
        DeliveryError::Transport(Box::new(err))
    }
}
