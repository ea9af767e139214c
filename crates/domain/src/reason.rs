//! Trigger payload parsing and trigger/clear classification.
//!
//! The notification pipeline hands the delivery side a small JSON document
//! describing why it fired. Only two facts matter here: whether the
//! monitored condition became true (`"reason": "triggered"`) or returned to
//! normal (anything else), and the optional `data` object carrying the
//! reading snapshot used for template substitution.

use serde_json::{Map, Value};

/// The two delivery-relevant states of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonKind {
    /// The monitored condition became true.
    Triggered,
    /// The monitored condition returned to normal.
    Cleared,
}

/// A parsed and classified trigger payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerReason {
    /// Triggered or cleared.
    pub kind: ReasonKind,
    /// The `data` member, when present and an object. Maps asset name to an
    /// object of datapoint readings.
    pub data: Option<Map<String, Value>>,
}

impl TriggerReason {
    /// Parse a trigger payload.
    ///
    /// The `reason` member must exist and be a string; `"triggered"` maps to
    /// [`ReasonKind::Triggered`] and every other string to
    /// [`ReasonKind::Cleared`]. A `data` member is captured only when it is
    /// an object.
    ///
    /// # Errors
    ///
    /// Returns [`ReasonError`] when the payload is not valid JSON, lacks a
    /// `reason` member, or carries a non-string `reason`.
    pub fn parse(payload: &str) -> Result<Self, ReasonError> {
        let document: Value = serde_json::from_str(payload)?;
        let reason = document.get("reason").ok_or(ReasonError::MissingReason)?;
        let reason = reason.as_str().ok_or(ReasonError::NotAString)?;

        let kind = if reason == "triggered" {
            ReasonKind::Triggered
        } else {
            ReasonKind::Cleared
        };

        let data = document
            .get("data")
            .and_then(Value::as_object)
            .cloned();

        Ok(Self { kind, data })
    }
}

/// Errors raised while parsing a trigger payload.
#[derive(Debug, thiserror::Error)]
pub enum ReasonError {
    /// The payload is not valid JSON.
    #[error("trigger payload is not valid JSON")]
    InvalidJson(#[from] serde_json::Error),

    /// The payload has no `reason` member.
    #[error("trigger payload has no 'reason' member")]
    MissingReason,

    /// The `reason` member is not a string.
    #[error("trigger payload 'reason' member is not a string")]
    NotAString,
}
