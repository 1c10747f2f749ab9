//! Error types for the entity services.

use thiserror::Error;

/// Errors surfaced by the entity services.
///
/// Each variant carries the fixed human-readable message for the
/// failing endpoint. The server's own error body is never shown to
/// the user, matching the ok/not-ok contract of the API. The inner
/// string is the resource noun ("products", "product", "user").
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// A GET (collection or single resource) failed. Not-found is
    /// folded in here: the API does not distinguish status codes
    /// beyond ok/not-ok at this layer.
    #[error("Failed to fetch {0}")]
    FetchFailed(&'static str),

    /// A POST failed. Creates are never retried, since a retry could
    /// double-create.
    #[error("Failed to create {0}")]
    CreateFailed(&'static str),

    /// A PUT failed.
    #[error("Failed to update {0}")]
    UpdateFailed(&'static str),

    /// A DELETE failed.
    #[error("Failed to delete {0}")]
    DeleteFailed(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_api_contract() {
        assert_eq!(
            ServiceError::FetchFailed("products").to_string(),
            "Failed to fetch products"
        );
        assert_eq!(
            ServiceError::CreateFailed("product").to_string(),
            "Failed to create product"
        );
    }
}
