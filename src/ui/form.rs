//! Form drafts and client-side validation.
//!
//! Drafts hold display strings exactly as typed; numeric conversion
//! happens once, at validation, and a string that does not parse is a
//! validation failure, never a panic or a network call. Fields are
//! named struct members rather than a string-keyed map so a typo in a
//! field name is a compile error.

use thiserror::Error;

use crate::domain::{Product, ProductId, ProductPayload, RegistrationPayload, Role};

/// Client-side validation failure listing the offending fields.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid value for {}", .fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

/// Whether a product form creates a new record or edits an existing
/// one. Edit mode carries the identity; the id itself is never part of
/// the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

/// Draft state for the product create/edit dialog.
///
/// All fields are display strings; `price` and `stock` are converted
/// to numbers by [`ProductForm::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub mode: FormMode,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
}

impl ProductForm {
    /// Empty draft in Create mode.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            stock: String::new(),
        }
    }

    /// Draft seeded from an existing product, in Edit mode with that
    /// product's identity.
    pub fn edit(product: &Product) -> Self {
        Self {
            mode: FormMode::Edit(product.id.clone()),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
        }
    }

    /// Checks every field and converts the draft into a wire payload.
    ///
    /// All four fields are required. `price` must parse as a
    /// non-negative number and `stock` as a non-negative integer.
    pub fn validate(&self) -> Result<ProductPayload, ValidationError> {
        let mut fields = Vec::new();

        if self.name.trim().is_empty() {
            fields.push("name");
        }
        if self.description.trim().is_empty() {
            fields.push("description");
        }

        let price = match self.price.trim().parse::<f64>() {
            Ok(price) if price >= 0.0 && price.is_finite() => Some(price),
            _ => {
                fields.push("price");
                None
            }
        };
        let stock = match self.stock.trim().parse::<u32>() {
            Ok(stock) => Some(stock),
            Err(_) => {
                fields.push("stock");
                None
            }
        };

        if !fields.is_empty() {
            return Err(ValidationError { fields });
        }

        Ok(ProductPayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: price.unwrap_or_default(),
            stock: stock.unwrap_or_default(),
        })
    }
}

/// Draft state for the registration form.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::default(),
        }
    }

    /// Discards the draft, restoring empty fields and the default role.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Requires the three text fields non-empty. Email format is left
    /// to the input widget and, ultimately, the server.
    pub fn validate(&self) -> Result<RegistrationPayload, ValidationError> {
        let mut fields = Vec::new();
        if self.name.trim().is_empty() {
            fields.push("name");
        }
        if self.email.trim().is_empty() {
            fields.push("email");
        }
        if self.password.is_empty() {
            fields.push("password");
        }
        if !fields.is_empty() {
            return Err(ValidationError { fields });
        }

        Ok(RegistrationPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
        })
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}
