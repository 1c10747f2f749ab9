//! Pure data structures (DTOs) exchanged with the REST API.

pub mod product;
pub mod user;

pub use product::*;
pub use user::*;
