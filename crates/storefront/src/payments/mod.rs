//! Payment session creation.
//!
//! One trait, two strategies: a live gateway that asks the payment provider
//! for a hosted checkout session, and a demo gateway that fabricates a local
//! redirect. The strategy is selected once at startup from configuration;
//! call sites never branch on payment mode.

pub mod demo;
pub mod stripe;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::checkout::CheckoutLineItem;
use crate::config::StorefrontConfig;

pub use demo::DemoGateway;
pub use stripe::StripeGateway;

/// Which strategy produced a checkout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    /// Locally fabricated redirect, no external call.
    Demo,
    /// Hosted session created by the payment provider.
    Live,
}

/// An ephemeral checkout session: where to send the browser next.
///
/// Constructed once per checkout request and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    /// URL the browser should navigate to.
    pub redirect_url: String,
    /// Strategy that produced the session.
    pub mode: SessionMode,
}

/// Errors from payment session creation.
///
/// Detail in these variants is for server logs only; the HTTP layer maps
/// every one of them to the same generic client message.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The outbound request failed (network, timeout, TLS).
    #[error("payment provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("payment provider rejected the session (HTTP {status})")]
    Provider {
        /// HTTP status the provider returned.
        status: u16,
    },

    /// The provider answered 2xx but the body was unusable.
    #[error("payment provider returned an unusable response: {0}")]
    InvalidResponse(String),
}

/// Strategy for turning validated line items into a checkout session.
///
/// Implementations only ever receive the output of
/// [`crate::checkout::validate_batch`]; unvalidated data cannot reach a
/// gateway by construction.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a checkout session for the given items.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError` when the provider call fails or its response
    /// is unusable. The demo gateway never fails.
    async fn create_session(
        &self,
        items: &[CheckoutLineItem],
    ) -> Result<CheckoutSession, PaymentError>;

    /// Which mode this gateway serves.
    fn mode(&self) -> SessionMode;
}

/// Select the payment gateway once at startup.
///
/// Live checkout requires a key that passes the provider-key gate
/// (`sk_` prefix, realistic length); anything else selects the demo gateway.
#[must_use]
pub fn from_config(config: &StorefrontConfig) -> Arc<dyn PaymentGateway> {
    config.live_payment_key().map_or_else(
        || {
            tracing::info!("No payment provider configured, demo checkout enabled");
            Arc::new(DemoGateway::new(config.base_url.clone())) as Arc<dyn PaymentGateway>
        },
        |key| {
            tracing::info!("Payment provider configured, live checkout enabled");
            Arc::new(StripeGateway::new(key.clone(), config.base_url.clone()))
        },
    )
}
