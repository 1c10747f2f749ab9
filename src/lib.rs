//! # Inventory Client
//!
//! > **A typed async client core for a small inventory and
//! > user-management system.**
//!
//! This crate models the client side of a product CRUD screen and a
//! user registration form against a REST API: typed entity services,
//! form drafts with client-side validation, a refetch-after-mutation
//! list, and a small navigation shell. Everything runs against an
//! injectable transport, so the whole application is testable without
//! a server.
//!
//! ## Design Philosophy
//!
//! ### Why typed services over a generic core?
//!
//! Every resource the API exposes follows the same CRUD contract over
//! the same path shape, so the request building, decoding, logging,
//! and error mapping are written once in
//! [`ResourceService`](services::ResourceService) and specialized per
//! resource through the [`ApiResource`](services::ApiResource) trait.
//! A `ResourceService<Product>` only accepts a `ProductPayload`; the
//! compiler rejects a mixed-up body entirely.
//!
//! ### Correctness over latency
//!
//! After every mutation the visible collection is refetched wholesale
//! rather than patched in place. The list therefore always shows
//! exactly what the server returned last, at the cost of one extra
//! round-trip per mutation. This is deliberate and load-bearing.
//!
//! ### Mocking: testing without a server
//!
//! The network edge is one object-safe trait,
//! [`HttpTransport`](http::HttpTransport). Tests inject a scripted
//! [`MockTransport`](http::mock::MockTransport) and assert on the
//! exact requests sent; see the [`http::mock`] module.
//!
//! ## Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each layer defines its own error type implementing
//! `std::error::Error`: [`TransportError`](http::TransportError) at
//! the wire, [`ServiceError`](services::ServiceError) with fixed
//! per-endpoint messages, and
//! [`ValidationError`](ui::ValidationError) for client-side checks.
//! Controllers convert every failure into a visible banner; nothing
//! escapes to a global handler.
//!
//! ### 2. Concurrency Model
//! Single-threaded cooperative async. Each operation issues exactly
//! one in-flight request; screen controllers take `&mut self`, so
//! operations on one screen are serialized structurally, and results
//! can never land on a screen that was navigated away from mid-call.
//!
//! ### 3. Observability
//! `tracing` everywhere with structured fields: services carry
//! `#[instrument]` spans naming the resource and id, the transport
//! logs each round-trip, and controllers log state transitions. See
//! [`app::tracing`].
//!
//! ## Module Tour
//!
//! ### 1. The Edge ([`http`])
//! The transport seam: the [`HttpTransport`](http::HttpTransport)
//! trait, the `reqwest`-backed [`RestTransport`](http::RestTransport),
//! and the scripted [`MockTransport`](http::mock::MockTransport).
//!
//! ### 2. The Data ([`domain`])
//! Plain DTOs exchanged with the API: [`Product`](domain::Product),
//! [`ProductPayload`](domain::ProductPayload),
//! [`RegistrationPayload`](domain::RegistrationPayload).
//!
//! ### 3. The Interface ([`services`])
//! Typed facades over the transport:
//! [`ProductService`](services::ProductService) and
//! [`UserService`](services::UserService), built on the generic
//! [`ResourceService`](services::ResourceService).
//!
//! ### 4. The Screens ([`ui`])
//! Controller state for the two screens: form drafts and validation
//! ([`ui::form`]), the refetch-driven list
//! ([`ProductsScreen`](ui::ProductsScreen)), the registration flow
//! ([`RegisterScreen`](ui::RegisterScreen)), and the single-slot
//! [`Banner`](ui::Banner).
//!
//! ### 5. The Shell ([`app`])
//! [`App`](app::App) wires services to one transport, maps
//! [`Route`](app::Route)s to screens, and drives transitions from
//! screen outcomes.
//!
//! ## Quick Start
//!
//! ```ignore
//! use inventory_client::app::{setup_tracing, App, Route};
//! use inventory_client::config::ApiConfig;
//!
//! setup_tracing();
//! let mut app = App::new(&ApiConfig::from_env());
//! app.navigate(Route::Products).await;
//! for product in app.products_screen().products() {
//!     println!("{}: {}", product.name, product.price);
//! }
//! ```

pub mod app;
pub mod config;
pub mod domain;
pub mod http;
pub mod services;
pub mod ui;
