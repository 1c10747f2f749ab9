//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the client.
//!
//! Service operations carry `#[instrument]` spans with the resource
//! and id as structured fields, and every request logs a `debug!` line
//! at the transport boundary. Levels are controlled through `RUST_LOG`,
//! e.g. `RUST_LOG=info` for compact operational logs, `RUST_LOG=debug`
//! to see request payloads, or
//! `RUST_LOG=inventory_client::services=debug` to filter to the
//! service layer.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Spans already name the resource
        .compact()
        .init();
}
