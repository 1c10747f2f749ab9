//! List view controller for the products screen.

use tracing::{info, instrument};

use crate::domain::{Product, ProductId};
use crate::services::ProductService;
use crate::ui::{Banner, FormMode, ProductForm};

/// Outcome of the delete confirmation gate. Declining is a full no-op:
/// no request is sent and no state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// The products screen: the authoritative visible collection, the
/// optional open form dialog, and the banner slots.
///
/// The collection is replaced wholesale by every refetch and is never
/// patched incrementally: after any mutation the server is re-asked
/// for the full list, so the screen always shows exactly what the
/// server returned last. Every service failure is converted to a
/// banner here; nothing propagates to the caller.
pub struct ProductsScreen {
    service: ProductService,
    products: Vec<Product>,
    form: Option<ProductForm>,
    banner: Banner,
    busy: bool,
}

impl ProductsScreen {
    pub fn new(service: ProductService) -> Self {
        Self {
            service,
            products: Vec::new(),
            form: None,
            banner: Banner::new(),
            busy: false,
        }
    }

    /// The collection in the order the server last returned it.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    pub fn form(&self) -> Option<&ProductForm> {
        self.form.as_ref()
    }

    /// Mutable access to the open draft for field-by-field edits.
    pub fn form_mut(&mut self) -> Option<&mut ProductForm> {
        self.form.as_mut()
    }

    /// Whether a request is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Opens an empty create dialog.
    pub fn open_create(&mut self) {
        self.form = Some(ProductForm::create());
    }

    /// Opens the edit dialog seeded from an existing product.
    pub fn open_edit(&mut self, product: &Product) {
        self.form = Some(ProductForm::edit(product));
    }

    /// Discards the draft without submitting.
    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Refetches the collection. On failure the previous collection is
    /// left untouched and the error banner is raised.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) {
        if self.busy {
            return;
        }
        self.busy = true;
        self.fetch_list().await;
        self.busy = false;
    }

    /// Validates and submits the open form.
    ///
    /// Validation failure raises the error banner, keeps the dialog
    /// open, and sends nothing. A service failure also keeps the
    /// dialog open (mode unchanged) so the user can correct and
    /// resubmit. Success closes the dialog, raises the success banner,
    /// and unconditionally refetches the collection.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) {
        if self.busy {
            return;
        }
        let Some(form) = &self.form else {
            return;
        };

        self.banner.clear();
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(err) => {
                self.banner.set_error(err.to_string());
                return;
            }
        };

        self.busy = true;
        let result = match &form.mode {
            FormMode::Create => self
                .service
                .create(&payload)
                .await
                .map(|_| "Product created successfully"),
            FormMode::Edit(id) => self
                .service
                .update(id, &payload)
                .await
                .map(|_| "Product updated successfully"),
        };

        match result {
            Ok(message) => {
                info!(message, "Mutation applied");
                self.banner.set_success(message);
                self.form = None;
                self.fetch_list().await;
            }
            Err(err) => self.banner.set_error(err.to_string()),
        }
        self.busy = false;
    }

    /// Deletes a product behind an explicit yes/no gate. Declining
    /// performs no network call.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn request_delete(&mut self, id: &ProductId, confirmation: Confirmation) {
        if confirmation == Confirmation::Declined || self.busy {
            return;
        }

        self.banner.clear();
        self.busy = true;
        match self.service.delete(id).await {
            Ok(()) => {
                info!("Product deleted");
                self.banner.set_success("Product deleted successfully");
                self.fetch_list().await;
            }
            Err(err) => self.banner.set_error(err.to_string()),
        }
        self.busy = false;
    }

    async fn fetch_list(&mut self) {
        match self.service.list().await {
            Ok(products) => self.products = products,
            Err(_) => self.banner.set_error("Error fetching products"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mock::MockTransport;
    use crate::http::Method;
    use serde_json::json;
    use std::sync::Arc;

    fn widget_row(id: u32, name: &str) -> serde_json::Value {
        json!({"id": id, "name": name, "description": "", "price": 1.0, "stock": 1})
    }

    fn screen(mock: &MockTransport) -> ProductsScreen {
        ProductsScreen::new(ProductService::new(Arc::new(mock.clone())))
    }

    #[tokio::test]
    async fn refresh_replaces_the_collection_wholesale() {
        let mock = MockTransport::new();
        mock.expect(Method::Get, "products")
            .return_json(json!([widget_row(1, "A"), widget_row(2, "B")]));
        mock.expect(Method::Get, "products")
            .return_json(json!([widget_row(2, "B")]));

        let mut screen = screen(&mock);
        screen.refresh().await;
        assert_eq!(screen.products().len(), 2);

        screen.refresh().await;
        assert_eq!(screen.products().len(), 1);
        assert_eq!(screen.products()[0].name, "B");
    }

    #[tokio::test]
    async fn failed_refresh_keeps_the_previous_collection() {
        let mock = MockTransport::new();
        mock.expect(Method::Get, "products")
            .return_json(json!([widget_row(1, "A")]));
        mock.expect(Method::Get, "products").return_status(500);

        let mut screen = screen(&mock);
        screen.refresh().await;
        screen.refresh().await;

        assert_eq!(screen.products().len(), 1);
        assert_eq!(screen.banner().error(), Some("Error fetching products"));
    }

    #[tokio::test]
    async fn first_load_failure_shows_banner_over_an_empty_list() {
        let mock = MockTransport::new();
        mock.expect(Method::Get, "products").return_network_error();

        let mut screen = screen(&mock);
        screen.refresh().await;

        assert!(screen.products().is_empty());
        assert_eq!(screen.banner().error(), Some("Error fetching products"));
    }

    #[tokio::test]
    async fn create_submit_posts_once_then_refetches() {
        let mock = MockTransport::new();
        mock.expect(Method::Post, "products")
            .return_json(widget_row(7, "Widget"));
        mock.expect(Method::Get, "products")
            .return_json(json!([widget_row(7, "Widget")]));

        let mut screen = screen(&mock);
        screen.open_create();
        {
            let form = screen.form_mut().unwrap();
            form.name = "Widget".into();
            form.description = "A widget".into();
            form.price = "9.99".into();
            form.stock = "10".into();
        }
        screen.submit().await;

        assert_eq!(screen.banner().success(), Some("Product created successfully"));
        assert!(screen.form().is_none());
        assert_eq!(screen.products().len(), 1);

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        let body = requests[0].body.as_ref().unwrap();
        assert_eq!(body["price"], json!(9.99));
        assert_eq!(body["stock"], json!(10));
        mock.verify();
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_network() {
        let mock = MockTransport::new();
        let mut screen = screen(&mock);

        screen.open_create();
        screen.form_mut().unwrap().price = "abc".into();
        screen.submit().await;

        assert!(mock.requests().is_empty());
        assert!(screen.banner().error().is_some());
        assert!(screen.form().is_some(), "dialog stays open for correction");
    }

    #[tokio::test]
    async fn edit_submit_puts_by_id() {
        let mock = MockTransport::new();
        mock.expect(Method::Put, "products/42")
            .return_json(widget_row(42, "Widget"));
        mock.expect(Method::Get, "products")
            .return_json(json!([widget_row(42, "Widget")]));

        let product = Product::new("42", "Widget", "A widget", 9.99, 10);
        let mut screen = screen(&mock);
        screen.open_edit(&product);
        screen.form_mut().unwrap().price = "12.50".into();
        screen.submit().await;

        assert_eq!(screen.banner().success(), Some("Product updated successfully"));
        assert_eq!(mock.requests()[0].body.as_ref().unwrap()["price"], json!(12.5));
        mock.verify();
    }

    #[tokio::test]
    async fn negative_price_blocks_an_edit_before_any_put() {
        let mock = MockTransport::new();
        let product = Product::new("42", "Widget", "A widget", 9.99, 10);

        let mut screen = screen(&mock);
        screen.open_edit(&product);
        screen.form_mut().unwrap().price = "-1".into();
        screen.submit().await;

        assert!(mock.requests().is_empty());
        assert_eq!(screen.form().unwrap().mode, FormMode::Edit(product.id.clone()));
    }

    #[tokio::test]
    async fn failed_create_leaves_the_form_open() {
        let mock = MockTransport::new();
        mock.expect(Method::Post, "products").return_status(500);

        let mut screen = screen(&mock);
        screen.open_create();
        {
            let form = screen.form_mut().unwrap();
            form.name = "Widget".into();
            form.description = "A widget".into();
            form.price = "9.99".into();
            form.stock = "10".into();
        }
        screen.submit().await;

        assert_eq!(screen.banner().error(), Some("Failed to create product"));
        assert_eq!(screen.form().unwrap().mode, FormMode::Create);
        assert_eq!(mock.requests().len(), 1, "no refetch after a failed create");
    }

    #[tokio::test]
    async fn declined_delete_is_a_full_no_op() {
        let mock = MockTransport::new();
        let mut screen = screen(&mock);

        screen
            .request_delete(&"42".into(), Confirmation::Declined)
            .await;

        assert!(mock.requests().is_empty());
        assert_eq!(screen.banner(), &Banner::new());
    }

    #[tokio::test]
    async fn confirmed_delete_removes_then_refetches() {
        let mock = MockTransport::new();
        mock.expect(Method::Get, "products")
            .return_json(json!([widget_row(42, "Widget")]));
        mock.expect(Method::Delete, "products/42").return_empty();
        mock.expect(Method::Get, "products").return_json(json!([]));

        let mut screen = screen(&mock);
        screen.refresh().await;
        assert_eq!(screen.products().len(), 1);

        screen
            .request_delete(&"42".into(), Confirmation::Confirmed)
            .await;

        assert_eq!(screen.banner().success(), Some("Product deleted successfully"));
        assert!(screen.products().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn a_new_action_clears_the_prior_banner() {
        let mock = MockTransport::new();
        mock.expect(Method::Get, "products").return_status(500);
        mock.expect(Method::Delete, "products/1").return_empty();
        mock.expect(Method::Get, "products").return_json(json!([]));

        let mut screen = screen(&mock);
        screen.refresh().await;
        assert!(screen.banner().error().is_some());

        screen
            .request_delete(&"1".into(), Confirmation::Confirmed)
            .await;
        assert_eq!(screen.banner().success(), Some("Product deleted successfully"));
        assert_eq!(screen.banner().error(), None);
    }
}
