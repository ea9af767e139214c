//! # reflex-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ConfigStore` — category snapshots and item writes
//!   - `ServiceDiscovery` — locate a service's network address
//!   - `SetPointTransport` — deliver a setpoint payload to a located service
//! - Define the **driving/inbound port**: the [`services::DeliveryHandler`]
//!   trait, implemented by the two delivery coordinators:
//!   - `ConfigUpdateDelivery` — rewrites a JSON configuration item in place
//!   - `SetPointDelivery` — forwards a setpoint command to a south service
//! - Orchestrate domain objects without knowing *how* the store or the
//!   network are reached
//!
//! ## Dependency rule
//! Depends on `reflex-domain` only (plus `tokio::sync` for the configuration
//! guard). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod ports;
pub mod services;
