//! Demo checkout gateway.
//!
//! Used whenever no live payment key is configured. Fabricates a session
//! identifier locally and redirects straight to the success page, so the
//! full checkout flow stays walkable without provider credentials.

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use rand::distr::Alphanumeric;

use crate::checkout::CheckoutLineItem;

use super::{CheckoutSession, PaymentError, PaymentGateway, SessionMode};

/// Random characters appended to a demo session identifier.
const SESSION_ENTROPY_CHARS: usize = 10;

/// Gateway that fabricates checkout sessions without any external call.
#[derive(Debug, Clone)]
pub struct DemoGateway {
    base_url: String,
}

impl DemoGateway {
    /// Create a demo gateway redirecting onto the given public base URL.
    #[must_use]
    pub const fn new(base_url: String) -> Self {
        Self { base_url }
    }
}

#[async_trait]
impl PaymentGateway for DemoGateway {
    async fn create_session(
        &self,
        items: &[CheckoutLineItem],
    ) -> Result<CheckoutSession, PaymentError> {
        let session_id = demo_session_id();
        tracing::info!(
            items = items.len(),
            session_id = %session_id,
            "Created demo checkout session"
        );
        Ok(CheckoutSession {
            redirect_url: format!(
                "{}/checkout/success?session_id={session_id}",
                self.base_url
            ),
            mode: SessionMode::Demo,
        })
    }

    fn mode(&self) -> SessionMode {
        SessionMode::Demo
    }
}

/// Build a unique demo session identifier.
///
/// Format: `demo_{unix_millis}_{10 alphanumeric chars}`. The timestamp makes
/// identifiers sortable in logs, the random suffix keeps concurrent requests
/// distinct.
fn demo_session_id() -> String {
    let timestamp = Utc::now().timestamp_millis();
    let entropy: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(SESSION_ENTROPY_CHARS)
        .map(char::from)
        .collect();
    format!("demo_{timestamp}_{entropy}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_session_id_format() {
        let id = demo_session_id();
        let parts: Vec<&str> = id.split('_').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts.first().copied().unwrap(), "demo");

        let timestamp: i64 = parts.get(1).unwrap().parse().unwrap();
        assert!(timestamp > 1_600_000_000_000, "expected unix millis");

        let entropy = parts.get(2).unwrap();
        assert_eq!(entropy.chars().count(), SESSION_ENTROPY_CHARS);
        assert!(entropy.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_demo_session_ids_are_unique() {
        let ids: Vec<String> = (0..5).map(|_| demo_session_id()).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in ids.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[tokio::test]
    async fn test_create_session_redirects_to_success_page() {
        let gateway = DemoGateway::new("http://localhost:3000".to_string());
        let session = gateway.create_session(&[]).await.unwrap();

        assert_eq!(session.mode, SessionMode::Demo);
        assert!(
            session
                .redirect_url
                .starts_with("http://localhost:3000/checkout/success?session_id=demo_")
        );
    }
}
