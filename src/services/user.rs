//! One-off user registration service.
//!
//! Users are write-only from this client, so this service does not sit
//! on [`ResourceService`](crate::services::ResourceService): there is
//! exactly one call, and the response body (a User echo or nothing) is
//! deliberately ignored.

use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::domain::RegistrationPayload;
use crate::http::{HttpTransport, Method};
use crate::services::ServiceError;

/// Client-side service for the `/users` endpoint.
#[derive(Clone)]
pub struct UserService {
    transport: Arc<dyn HttpTransport>,
}

impl UserService {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Registers a new user. Success is unit whether or not the server
    /// echoes the created record.
    #[instrument(skip(self, payload))]
    pub async fn register(&self, payload: &RegistrationPayload) -> Result<(), ServiceError> {
        debug!(name = %payload.name, role = ?payload.role, "Sending request");
        let body = serde_json::to_value(payload)
            .map_err(|_| ServiceError::CreateFailed("user"))?;
        self.transport
            .request(Method::Post, "users", Some(body))
            .await
            .map_err(|e| {
                warn!(error = %e, "Registration failed");
                ServiceError::CreateFailed("user")
            })?;
        Ok(())
    }
}
