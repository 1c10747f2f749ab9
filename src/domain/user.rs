//! User registration payload.
//!
//! Users are write-only from this client: a registration is submitted
//! once and never read back, updated, or deleted. The password travels
//! in the payload and is dropped with it after submission.

use serde::{Deserialize, Serialize};

/// Role assigned to a newly registered user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Body of a user registration request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}
