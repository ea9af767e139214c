//! # reflex-adapter-fledge-http
//!
//! Outbound HTTP adapter for a Fledge-style platform.
//!
//! Implements the application ports against real network endpoints:
//! - [`FledgeClient`] — configuration store reads/writes and service
//!   discovery through the core management API
//! - [`SetPointClient`] — the single `PUT` carrying a setpoint command to a
//!   discovered south service
//!
//! ## Dependency rule
//! Depends on `reflex-app` (for the port traits) and `reflex-domain`.

pub mod client;
pub mod control;
pub mod error;

pub use client::FledgeClient;
pub use control::SetPointClient;
