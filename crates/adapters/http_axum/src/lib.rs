//! # reflex-adapter-http-axum
//!
//! Inbound HTTP adapter — the delivery boundary as a small REST API.
//!
//! The notification pipeline drives a delivery through three routes:
//! - `POST /notify` — deliver one notification
//! - `PUT /configuration` — replace the delivery configuration
//! - `GET /health` — liveness
//!
//! ## Dependency rule
//! Depends on `reflex-app` (for the [`DeliveryHandler`] boundary) and
//! `reflex-domain`. Never on other adapters.
//!
//! [`DeliveryHandler`]: reflex_app::services::DeliveryHandler

#[allow(clippy::missing_errors_doc)]
pub mod api;
pub mod error;
pub mod router;
pub mod state;
