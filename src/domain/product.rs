//! Product entity and its create/update payload.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque, server-assigned product identifier.
///
/// The API serves ids as JSON integers in some deployments and as
/// strings in others, so deserialization accepts both and keeps the
/// canonical string form. The client never interprets the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = ProductId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string or integer id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ProductId, E> {
                Ok(ProductId::new(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ProductId, E> {
                Ok(ProductId::new(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ProductId, E> {
                Ok(ProductId::new(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// A product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub stock: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the server)
    /// * `name` - Product name
    /// * `description` - Free-form description, may be empty
    /// * `price` - Product price
    /// * `stock` - Available stock quantity
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            stock,
        }
    }
}

/// Body of a product create/update request. Numeric fields are JSON
/// numbers on the wire, never strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
}
