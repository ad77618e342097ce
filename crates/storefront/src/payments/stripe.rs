//! Live checkout via the Stripe Checkout Sessions API.
//!
//! Talks to the provider's REST endpoint directly with form-encoded
//! parameters. Provider error detail is logged server-side only; callers
//! get an opaque [`PaymentError`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::instrument;

use crate::checkout::CheckoutLineItem;

use super::{CheckoutSession, PaymentError, PaymentGateway, SessionMode};

const CHECKOUT_SESSIONS_URL: &str = "https://api.stripe.com/v1/checkout/sessions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Kopecks per ruble; the provider wants amounts in the currency's minor unit.
const MINOR_UNITS_PER_RUBLE: f64 = 100.0;
/// Countries offered in the provider's shipping address form.
const ALLOWED_SHIPPING_COUNTRIES: [&str; 6] = ["RU", "BY", "KZ", "UZ", "GE", "AM"];
const MAX_LOGGED_BODY_CHARS: usize = 500;

/// Gateway that creates hosted checkout sessions at the payment provider.
///
/// Cheap to clone; the HTTP client and credentials live behind an `Arc`.
#[derive(Clone)]
pub struct StripeGateway {
    inner: Arc<StripeGatewayInner>,
}

struct StripeGatewayInner {
    client: reqwest::Client,
    secret_key: SecretString,
    base_url: String,
}

/// Subset of the provider's session object we consume.
#[derive(Debug, Deserialize)]
struct SessionResponse {
    id: String,
    /// Hosted checkout URL; the provider may omit it for some session states.
    url: Option<String>,
}

impl StripeGateway {
    /// Create a gateway using the given secret key and public base URL.
    #[must_use]
    pub fn new(secret_key: SecretString, base_url: String) -> Self {
        Self {
            inner: Arc::new(StripeGatewayInner {
                client: reqwest::Client::new(),
                secret_key,
                base_url,
            }),
        }
    }

    /// Build the form-encoded parameter list for a session creation call.
    ///
    /// The provider's nested-object wire format uses bracketed keys
    /// (`line_items[0][price_data][currency]`).
    fn session_params(&self, items: &[CheckoutLineItem]) -> Vec<(String, String)> {
        let base = &self.inner.base_url;
        let mut params = vec![
            ("mode".to_string(), "payment".to_string()),
            ("locale".to_string(), "ru".to_string()),
            ("payment_method_types[0]".to_string(), "card".to_string()),
            (
                "success_url".to_string(),
                format!("{base}/checkout/success?session_id={{CHECKOUT_SESSION_ID}}"),
            ),
            ("cancel_url".to_string(), format!("{base}/cart")),
        ];

        for (i, country) in ALLOWED_SHIPPING_COUNTRIES.iter().enumerate() {
            params.push((
                format!("shipping_address_collection[allowed_countries][{i}]"),
                (*country).to_string(),
            ));
        }

        for (i, item) in items.iter().enumerate() {
            let price_data = format!("line_items[{i}][price_data]");
            params.push((
                format!("line_items[{i}][quantity]"),
                item.quantity().to_string(),
            ));
            params.push((format!("{price_data}[currency]"), "rub".to_string()));
            params.push((
                format!("{price_data}[unit_amount]"),
                minor_units(item.price()).to_string(),
            ));
            params.push((
                format!("{price_data}[product_data][name]"),
                item.name().to_string(),
            ));
            params.push((
                format!("{price_data}[product_data][description]"),
                format!("Размер: EU {}", format_size(item.size())),
            ));
            params.push((
                format!("{price_data}[product_data][images][0]"),
                absolute_image_url(base, item.image()),
            ));
        }

        params
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    #[instrument(skip(self, items), fields(item_count = items.len()))]
    async fn create_session(
        &self,
        items: &[CheckoutLineItem],
    ) -> Result<CheckoutSession, PaymentError> {
        let params = self.session_params(items);

        let response = self
            .inner
            .client
            .post(CHECKOUT_SESSIONS_URL)
            .basic_auth(self.inner.secret_key.expose_secret(), None::<&str>)
            .form(&params)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(MAX_LOGGED_BODY_CHARS).collect::<String>(),
                "Payment provider rejected session creation"
            );
            return Err(PaymentError::Provider {
                status: status.as_u16(),
            });
        }

        let session: SessionResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse payment provider response");
            PaymentError::InvalidResponse(e.to_string())
        })?;

        let Some(url) = session.url else {
            tracing::error!(session_id = %session.id, "Session response carried no redirect URL");
            return Err(PaymentError::InvalidResponse(
                "session response carried no redirect url".to_string(),
            ));
        };

        tracing::info!(session_id = %session.id, "Created live checkout session");
        Ok(CheckoutSession {
            redirect_url: url,
            mode: SessionMode::Live,
        })
    }

    fn mode(&self) -> SessionMode {
        SessionMode::Live
    }
}

/// Convert a ruble price to integer kopecks.
fn minor_units(price: f64) -> i64 {
    // Prices reaching this point are validated finite and below one million,
    // so the product fits in i64.
    #[allow(clippy::cast_possible_truncation)]
    {
        (price * MINOR_UNITS_PER_RUBLE).round() as i64
    }
}

/// Render a size for the order description: whole sizes without a decimal
/// point ("42"), half sizes with one ("42.5").
fn format_size(size: f64) -> String {
    if size.fract() == 0.0 {
        format!("{size:.0}")
    } else {
        size.to_string()
    }
}

/// Provider image URLs must be absolute; catalog images are host-relative.
fn absolute_image_url(base_url: &str, image: &str) -> String {
    if image.starts_with("http") {
        image.to_string()
    } else {
        format!("{base_url}{image}")
    }
}
