//! Screen controllers: form state, list state, and transient banners.
//!
//! Nothing here renders. These types hold exactly the state a view
//! layer would bind to, so every user-visible behavior is testable
//! without a UI toolkit.

pub mod banner;
pub mod form;
pub mod products;
pub mod register;

pub use banner::*;
pub use form::*;
pub use products::*;
pub use register::*;
