//! # Generic Resource Service
//!
//! This module defines the generic building block behind the typed
//! services.
//!
//! ## Key Types
//!
//! - [`ApiResource`]: The trait a resource type implements to be served
//!   over the REST edge.
//! - [`ResourceService`]: The generic CRUD service, one instance per
//!   resource type.
//!
//! ## Architecture Note
//! Why a trait plus a generic service?
//! Every resource the API exposes follows the same five-operation
//! contract (list, get, create, update, delete) over the same path
//! shape (`{collection}` and `{collection}/{id}`). By defining that
//! contract once against [`ApiResource`], the request building, JSON
//! decoding, logging, and error mapping are written a single time and
//! shared by every resource. Associated types keep it safe: a
//! `ResourceService<Product>` only accepts a `ProductPayload`; the
//! compiler rejects a mixed-up body entirely.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt::{Debug, Display};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::http::{HttpTransport, Method};
use crate::services::ServiceError;

/// Contract a resource type satisfies to be served by
/// [`ResourceService`].
pub trait ApiResource: DeserializeOwned + Clone + Send + Sync + 'static {
    /// The unique identifier for this resource.
    type Id: Display + Clone + Send + Sync;

    /// The body sent on create and update.
    type Payload: Serialize + Debug + Send + Sync;

    /// Collection path segment and plural noun ("products").
    const COLLECTION: &'static str;

    /// Singular noun used in error messages ("product").
    const NAME: &'static str;
}

/// Generic CRUD service over one resource type.
///
/// Holds only the transport handle; all state lives on the server.
/// Every operation is a single request with no retry, and every
/// failure maps to the fixed per-endpoint [`ServiceError`] message.
pub struct ResourceService<R: ApiResource> {
    transport: Arc<dyn HttpTransport>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: ApiResource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: ApiResource> ResourceService<R> {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            _resource: PhantomData,
        }
    }

    fn item_path(id: &R::Id) -> String {
        format!("{}/{}", R::COLLECTION, id)
    }

    fn decode<T: DeserializeOwned>(value: Value, error: ServiceError) -> Result<T, ServiceError> {
        serde_json::from_value(value).map_err(|e| {
            warn!(resource = R::NAME, error = %e, "Undecodable response body");
            error
        })
    }

    /// Fetches the whole collection in server order.
    #[instrument(skip(self), fields(resource = R::COLLECTION))]
    pub async fn list(&self) -> Result<Vec<R>, ServiceError> {
        debug!("Sending request");
        let body = self
            .transport
            .request(Method::Get, R::COLLECTION, None)
            .await
            .map_err(|e| {
                warn!(error = %e, "List failed");
                ServiceError::FetchFailed(R::COLLECTION)
            })?;
        Self::decode(body, ServiceError::FetchFailed(R::COLLECTION))
    }

    /// Fetches a single resource. A missing id surfaces the same way
    /// as any other failed fetch.
    #[instrument(skip(self), fields(resource = R::NAME, id = %id))]
    pub async fn get(&self, id: &R::Id) -> Result<R, ServiceError> {
        debug!("Sending request");
        let body = self
            .transport
            .request(Method::Get, &Self::item_path(id), None)
            .await
            .map_err(|e| {
                warn!(error = %e, "Get failed");
                ServiceError::FetchFailed(R::NAME)
            })?;
        Self::decode(body, ServiceError::FetchFailed(R::NAME))
    }

    /// Creates a resource; the server assigns the id. Never retried.
    #[instrument(skip(self, payload), fields(resource = R::NAME))]
    pub async fn create(&self, payload: &R::Payload) -> Result<R, ServiceError> {
        debug!(?payload, "Sending request");
        let body = serde_json::to_value(payload)
            .map_err(|_| ServiceError::CreateFailed(R::NAME))?;
        let response = self
            .transport
            .request(Method::Post, R::COLLECTION, Some(body))
            .await
            .map_err(|e| {
                warn!(error = %e, "Create failed");
                ServiceError::CreateFailed(R::NAME)
            })?;
        Self::decode(response, ServiceError::CreateFailed(R::NAME))
    }

    /// Replaces the resource identified by `id`.
    #[instrument(skip(self, payload), fields(resource = R::NAME, id = %id))]
    pub async fn update(&self, id: &R::Id, payload: &R::Payload) -> Result<R, ServiceError> {
        debug!(?payload, "Sending request");
        let body = serde_json::to_value(payload)
            .map_err(|_| ServiceError::UpdateFailed(R::NAME))?;
        let response = self
            .transport
            .request(Method::Put, &Self::item_path(id), Some(body))
            .await
            .map_err(|e| {
                warn!(error = %e, "Update failed");
                ServiceError::UpdateFailed(R::NAME)
            })?;
        Self::decode(response, ServiceError::UpdateFailed(R::NAME))
    }

    /// Deletes the resource identified by `id`. Success is unit; the
    /// response body, if any, is not parsed.
    #[instrument(skip(self), fields(resource = R::NAME, id = %id))]
    pub async fn delete(&self, id: &R::Id) -> Result<(), ServiceError> {
        debug!("Sending request");
        self.transport
            .request(Method::Delete, &Self::item_path(id), None)
            .await
            .map_err(|e| {
                warn!(error = %e, "Delete failed");
                ServiceError::DeleteFailed(R::NAME)
            })?;
        Ok(())
    }
}
