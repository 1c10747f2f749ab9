//! # Navigation Shell
//!
//! [`App`] wires the transport, services, and screens together and
//! maps logical routes to the active screen.
//!
//! ## Architecture
//!
//! The shell owns one instance of each screen controller:
//! - **Register screen**: the entry route, a write-only registration.
//! - **Products screen**: the CRUD table over `/products`.
//!
//! Screens never talk to each other; the shell drives transitions from
//! the values they return. Because every screen operation runs to
//! completion inside that screen's own `&mut` method before the shell
//! regains control, a response can never be applied to a screen the
//! user has already navigated away from.

use std::sync::Arc;
use tracing::info;

use crate::config::ApiConfig;
use crate::http::{HttpTransport, RestTransport};
use crate::services::{ProductService, UserService};
use crate::ui::{ProductsScreen, RegisterScreen, RegistrationOutcome};

/// Logical screens addressable by path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Register,
    Products,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Register => "/register",
            Route::Products => "/products",
        }
    }

    /// Maps a path to a route. The root path redirects to the entry
    /// screen.
    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/" | "/register" => Some(Route::Register),
            "/products" => Some(Route::Products),
            _ => None,
        }
    }
}

/// The application shell: services wired to one transport, one
/// controller per screen, and the active route.
pub struct App {
    route: Route,
    register: RegisterScreen,
    products: ProductsScreen,
}

impl App {
    /// Builds the app against the real REST transport.
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_transport(Arc::new(RestTransport::new(config)))
    }

    /// Builds the app against any transport. Tests inject a
    /// [`MockTransport`](crate::http::mock::MockTransport) here.
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            route: Route::default(),
            register: RegisterScreen::new(UserService::new(transport.clone())),
            products: ProductsScreen::new(ProductService::new(transport)),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn register_screen(&self) -> &RegisterScreen {
        &self.register
    }

    pub fn register_screen_mut(&mut self) -> &mut RegisterScreen {
        &mut self.register
    }

    pub fn products_screen(&self) -> &ProductsScreen {
        &self.products
    }

    pub fn products_screen_mut(&mut self) -> &mut ProductsScreen {
        &mut self.products
    }

    /// Switches the active route. Entering the products screen
    /// triggers a refetch, so the list is fresh on mount. Screen state
    /// otherwise survives navigation.
    pub async fn navigate(&mut self, route: Route) {
        if self.route != route {
            info!(from = self.route.path(), to = route.path(), "Navigating");
        }
        self.route = route;
        if route == Route::Products {
            self.products.refresh().await;
        }
    }

    /// Submits the registration form and, on success, transitions to
    /// the products screen. The transition is driven by the submit
    /// result, never by a timer.
    pub async fn submit_registration(&mut self) -> RegistrationOutcome {
        let outcome = self.register.submit().await;
        if outcome == RegistrationOutcome::Registered {
            self.navigate(Route::Products).await;
        }
        outcome
    }

    /// Clears the registration draft and returns to the entry route.
    /// No request is sent, because there is no server-side session.
    pub async fn log_out(&mut self) {
        self.register.reset();
        self.navigate(Route::Register).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_round_trip_through_paths() {
        assert_eq!(Route::from_path("/register"), Some(Route::Register));
        assert_eq!(Route::from_path("/products"), Some(Route::Products));
        assert_eq!(Route::from_path(Route::Products.path()), Some(Route::Products));
        assert_eq!(Route::from_path("/admin"), None);
    }

    #[test]
    fn root_redirects_to_the_entry_screen() {
        assert_eq!(Route::from_path("/"), Some(Route::Register));
        assert_eq!(Route::default(), Route::Register);
    }
}
