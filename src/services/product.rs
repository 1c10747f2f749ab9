//! Typed facade for the product resource.

use std::sync::Arc;

use crate::domain::{Product, ProductId, ProductPayload};
use crate::http::HttpTransport;
use crate::services::{ApiResource, ResourceService, ServiceError};

impl ApiResource for Product {
    type Id = ProductId;
    type Payload = ProductPayload;

    const COLLECTION: &'static str = "products";
    const NAME: &'static str = "product";
}

/// Client-side service for the `/products` endpoints.
#[derive(Clone)]
pub struct ProductService {
    inner: ResourceService<Product>,
}

impl ProductService {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            inner: ResourceService::new(transport),
        }
    }

    pub async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        self.inner.list().await
    }

    pub async fn get(&self, id: &ProductId) -> Result<Product, ServiceError> {
        self.inner.get(id).await
    }

    pub async fn create(&self, payload: &ProductPayload) -> Result<Product, ServiceError> {
        self.inner.create(payload).await
    }

    pub async fn update(
        &self,
        id: &ProductId,
        payload: &ProductPayload,
    ) -> Result<Product, ServiceError> {
        self.inner.update(id, payload).await
    }

    pub async fn delete(&self, id: &ProductId) -> Result<(), ServiceError> {
        self.inner.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mock::MockTransport;
    use crate::http::Method;
    use serde_json::json;

    fn service(mock: &MockTransport) -> ProductService {
        ProductService::new(Arc::new(mock.clone()))
    }

    #[tokio::test]
    async fn list_preserves_server_order() {
        let mock = MockTransport::new();
        mock.expect(Method::Get, "products").return_json(json!([
            {"id": 2, "name": "B", "description": "", "price": 2.0, "stock": 1},
            {"id": 1, "name": "A", "description": "", "price": 1.0, "stock": 5}
        ]));

        let products = service(&mock).list().await.unwrap();
        assert_eq!(products[0].name, "B");
        assert_eq!(products[1].name, "A");
        mock.verify();
    }

    #[tokio::test]
    async fn list_failure_uses_fixed_message() {
        let mock = MockTransport::new();
        mock.expect(Method::Get, "products").return_status(500);

        let err = service(&mock).list().await.unwrap_err();
        assert_eq!(err, ServiceError::FetchFailed("products"));
        assert_eq!(err.to_string(), "Failed to fetch products");
    }

    #[tokio::test]
    async fn get_not_found_folds_into_fetch_failed() {
        let mock = MockTransport::new();
        mock.expect(Method::Get, "products/42").return_status(404);

        let err = service(&mock).get(&"42".into()).await.unwrap_err();
        assert_eq!(err, ServiceError::FetchFailed("product"));
    }

    #[tokio::test]
    async fn create_posts_payload_and_parses_assigned_id() {
        let mock = MockTransport::new();
        mock.expect(Method::Post, "products").return_json(json!(
            {"id": 7, "name": "Widget", "description": "A widget", "price": 9.99, "stock": 10}
        ));

        let payload = ProductPayload {
            name: "Widget".into(),
            description: "A widget".into(),
            price: 9.99,
            stock: 10,
        };
        let created = service(&mock).create(&payload).await.unwrap();
        assert_eq!(created.id, ProductId::new("7"));

        let sent = &mock.requests()[0];
        assert_eq!(sent.body.as_ref().unwrap()["price"], json!(9.99));
        assert_eq!(sent.body.as_ref().unwrap()["stock"], json!(10));
    }

    #[tokio::test]
    async fn delete_ignores_the_response_body() {
        let mock = MockTransport::new();
        mock.expect(Method::Delete, "products/7").return_empty();

        service(&mock).delete(&"7".into()).await.unwrap();
        mock.verify();
    }

    #[tokio::test]
    async fn network_error_maps_like_a_bad_status() {
        let mock = MockTransport::new();
        mock.expect(Method::Put, "products/7").return_network_error();

        let payload = ProductPayload {
            name: "Widget".into(),
            description: String::new(),
            price: 1.0,
            stock: 1,
        };
        let err = service(&mock).update(&"7".into(), &payload).await.unwrap_err();
        assert_eq!(err, ServiceError::UpdateFailed("product"));
    }
}
