//! Common error types used across the workspace.
//!
//! Each module defines its own typed error next to the code that produces it
//! (`ReasonError`, `PathParseError`, `MutateError`, `CategoryError`) and
//! converts into [`DeliveryError`] via `#[from]`. Adapter crates convert
//! their own errors into the boxed `Store` / `Transport` variants at the
//! port boundary.

use crate::category::CategoryError;
use crate::json::mutate::MutateError;
use crate::json::path::PathParseError;
use crate::reason::ReasonError;

/// Top-level error for a delivery attempt.
///
/// No variant is retried internally; the coordinator reports the error to
/// its caller, which maps it to a failure signal at the outer boundary.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The trigger payload could not be parsed or classified.
    #[error("malformed trigger payload")]
    Reason(#[from] ReasonError),

    /// The configured path expression is not syntactically valid.
    #[error("invalid path expression")]
    Path(#[from] PathParseError),

    /// The configuration item could not be mutated.
    #[error("configuration item mutation failed")]
    Mutate(#[from] MutateError),

    /// A configuration category snapshot could not be parsed.
    #[error("malformed configuration category")]
    Category(#[from] CategoryError),

    /// The targeted item does not exist in its category.
    #[error("configuration item {category}/{item} does not exist")]
    ItemMissing {
        /// Category name.
        category: String,
        /// Item name within the category.
        item: String,
    },

    /// The targeted item exists but its declared type is not JSON.
    #[error("configuration item {category}/{item} is not a JSON item")]
    ItemNotJson {
        /// Category name.
        category: String,
        /// Item name within the category.
        item: String,
    },

    /// Service discovery returned no record for the configured service.
    #[error("unable to find service '{service}'")]
    ServiceNotFound {
        /// The service name that was looked up.
        service: String,
    },

    /// The configuration store collaborator failed.
    #[error("configuration store error")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The control transport collaborator failed.
    #[error("control transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}
