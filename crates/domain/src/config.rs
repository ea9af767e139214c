//! Per-variant delivery configuration.
//!
//! Both variants start disabled and are reconfigured in place from category
//! snapshots. `apply` only overwrites fields whose items are present in the
//! incoming category, so a partial reconfiguration preserves everything it
//! does not mention.

use crate::category::ConfigCategory;
use crate::reason::ReasonKind;

/// Configuration of the config-mutation variant: which configuration item
/// to rewrite, where inside its JSON value, and with what.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigUpdateConfig {
    /// Master switch; nothing is delivered while false.
    pub enable: bool,
    /// The configuration category holding the target item.
    pub category: String,
    /// The JSON-typed item whose value is rewritten.
    pub item: String,
    /// Path expression addressing the object node inside the item's value.
    pub path: String,
    /// The property of the addressed node to replace.
    pub property: String,
    /// Replacement value used when the notification triggers.
    pub trigger_value: String,
    /// Replacement value used when the notification clears.
    pub clear_value: String,
}

impl ConfigUpdateConfig {
    /// Overwrite fields from the items present in `category`.
    pub fn apply(&mut self, category: &ConfigCategory) {
        if let Some(value) = category.value("category") {
            self.category = value;
        }
        if let Some(value) = category.value("item") {
            self.item = value;
        }
        if let Some(value) = category.value("path") {
            self.path = value;
        }
        if let Some(value) = category.value("property") {
            self.property = value;
        }
        if let Some(value) = category.value("triggerValue") {
            self.trigger_value = value;
        }
        if let Some(value) = category.value("clearValue") {
            self.clear_value = value;
        }
        if category.item_exists("enable") {
            self.enable = category.bool_value("enable");
        }
    }

    /// Select the configured value for a trigger/clear state.
    #[must_use]
    pub fn value_for(&self, kind: ReasonKind) -> &str {
        match kind {
            ReasonKind::Triggered => &self.trigger_value,
            ReasonKind::Cleared => &self.clear_value,
        }
    }
}

/// Configuration of the forwarding variant: which south service receives
/// the setpoint command and with what payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetPointConfig {
    /// Master switch; nothing is delivered while false.
    pub enable: bool,
    /// Name of the south service to control.
    pub service: String,
    /// Payload sent when the notification triggers.
    pub trigger_value: String,
    /// Payload sent when the notification clears.
    pub clear_value: String,
}

impl SetPointConfig {
    /// Overwrite fields from the items present in `category`.
    pub fn apply(&mut self, category: &ConfigCategory) {
        if let Some(value) = category.value("service") {
            self.service = value;
        }
        if let Some(value) = category.value("triggerValue") {
            self.trigger_value = value;
        }
        if let Some(value) = category.value("clearValue") {
            self.clear_value = value;
        }
        if category.item_exists("enable") {
            self.enable = category.bool_value("enable");
        }
    }

    /// Select the configured value for a trigger/clear state.
    #[must_use]
    pub fn value_for(&self, kind: ReasonKind) -> &str {
        match kind {
            ReasonKind::Triggered => &self.trigger_value,
            ReasonKind::Cleared => &self.clear_value,
        }
    }
}
