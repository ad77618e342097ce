//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogError};
use crate::config::StorefrontConfig;
use crate::payments::{self, PaymentGateway};
use crate::services::auth::{AuthError, AuthService};

/// Error building the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("catalog failed validation: {0}")]
    Catalog(#[from] CatalogError),
    #[error("user directory failed to build: {0}")]
    Auth(#[from] AuthError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the catalog, user directory, and payment gateway.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    payments: Arc<dyn PaymentGateway>,
    auth: AuthService,
}

impl AppState {
    /// Build the application state from configuration.
    ///
    /// Loads and validates the catalog, seeds the user directory, and
    /// selects the payment gateway.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog fails validation or the user
    /// directory cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, StateError> {
        let catalog = Catalog::load()?;
        let auth = AuthService::with_demo_users()?;
        let payments = payments::from_config(&config);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                payments,
                auth,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the payment gateway.
    #[must_use]
    pub fn payments(&self) -> &Arc<dyn PaymentGateway> {
        &self.inner.payments
    }

    /// Get a reference to the authentication service.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }
}
