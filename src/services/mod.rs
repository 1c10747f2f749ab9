//! Typed service facades over the [`HttpTransport`](crate::http::HttpTransport).

pub mod error;
pub mod product;
pub mod resource;
pub mod user;

pub use error::*;
pub use product::*;
pub use resource::*;
pub use user::*;
