//! # reflex-domain
//!
//! Pure domain model for the reflex notification delivery service.
//!
//! ## Responsibilities
//! - Classify trigger/clear payloads ([`reason`])
//! - Resolve path expressions inside JSON documents ([`json::path`])
//! - Replace a property of an addressed node while preserving its JSON type
//!   ([`json::mutate`])
//! - Splice live readings into message templates ([`template`])
//! - Model configuration category snapshots and the per-variant delivery
//!   configuration ([`category`], [`config`])
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod category;
pub mod config;
pub mod json;
pub mod reason;
pub mod service;
pub mod template;
