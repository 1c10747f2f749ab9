//! Navigation shell and application wiring.
//!
//! This module contains the infrastructure that turns the individual
//! screen controllers into one application:
//!
//! - **Wiring**: Building services over a single transport
//! - **Routing**: Mapping logical routes to the active screen
//! - **Transitions**: Driving navigation from screen outcomes
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`App`] - The shell owning one controller per screen
//! - [`Route`] - The addressable screens
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod shell;
pub mod tracing;

pub use self::shell::*;
pub use self::tracing::setup_tracing;
