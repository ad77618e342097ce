//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SNKRS_HOST` - Bind address (default: 127.0.0.1)
//! - `SNKRS_PORT` - Listen port (default: 3000)
//! - `SNKRS_BASE_URL` - Public URL for the storefront (default: <http://localhost:3000>)
//! - `STRIPE_SECRET_KEY` - Payment provider secret key; live checkout is
//!   enabled only when this looks like a real key (`sk_` prefix, longer than
//!   20 characters). Absent or malformed keys select demo checkout.
//! - `CORS_ALLOWED_ORIGIN` - Origin allowed to call the JSON API cross-site
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry traces sample rate (default: 1.0)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Minimum length of a live-looking payment provider key.
const MIN_LIVE_KEY_LENGTH: usize = 21;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront (redirect targets, image URLs)
    pub base_url: String,
    /// Payment provider secret key, if configured
    pub stripe_secret_key: Option<SecretString>,
    /// Origin allowed to call the JSON API cross-site
    pub cors_allowed_origin: Option<String>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable fails to parse, or if a
    /// live-looking payment key fails validation (placeholder detection,
    /// entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SNKRS_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SNKRS_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SNKRS_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SNKRS_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("SNKRS_BASE_URL", "http://localhost:3000");

        let stripe_secret_key = get_payment_key("STRIPE_SECRET_KEY")?;

        let cors_allowed_origin = get_optional_env("CORS_ALLOWED_ORIGIN");
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            host,
            port,
            base_url,
            stripe_secret_key,
            cors_allowed_origin,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns the payment key when it passes the live-mode gate.
    ///
    /// A key counts as live only when it has the provider's `sk_` prefix and
    /// is longer than 20 characters. Anything else (absent, truncated, wrong
    /// prefix) selects the demo checkout path.
    #[must_use]
    pub fn live_payment_key(&self) -> Option<&SecretString> {
        self.stripe_secret_key
            .as_ref()
            .filter(|key| is_live_key(key.expose_secret()))
    }

    /// Whether session cookies should carry the `Secure` attribute.
    ///
    /// Follows the public base URL scheme so local HTTP development keeps
    /// working while HTTPS deployments get secure cookies.
    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

/// Whether a payment key looks like a real provider secret key.
fn is_live_key(key: &str) -> bool {
    key.starts_with("sk_") && key.len() >= MIN_LIVE_KEY_LENGTH
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Load the optional payment provider key.
///
/// Keys that fail the live gate are kept as-is (they select demo mode
/// downstream), but a live-looking key must not be a placeholder: failing the
/// strength check at startup beats failing the first real checkout.
fn get_payment_key(key: &str) -> Result<Option<SecretString>, ConfigError> {
    let Some(value) = get_optional_env(key) else {
        return Ok(None);
    };
    if is_live_key(&value) {
        validate_secret_strength(&value, key)?;
    }
    Ok(Some(SecretString::from(value)))
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    // Check blocklist
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // Check entropy (real secrets like API keys have high entropy)
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use a randomly generated secret."
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config(base_url: &str, stripe_key: Option<&str>) -> StorefrontConfig {
        StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: base_url.to_string(),
            stripe_secret_key: stripe_key.map(SecretString::from),
            cors_allowed_origin: None,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        }
    }

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_single_char() {
        // All same character = 0 entropy
        assert!((shannon_entropy("aaaaaaa") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_high() {
        // Random-looking string should have high entropy
        let entropy = shannon_entropy("aB3$xY9!mK2@nL5#");
        assert!(entropy > 3.3);
    }

    #[test]
    fn test_validate_secret_strength_placeholder() {
        let result = validate_secret_strength("sk_your-api-key-here-12345", "TEST_VAR");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InsecureSecret(_, _)
        ));
    }

    #[test]
    fn test_validate_secret_strength_low_entropy() {
        let result = validate_secret_strength("sk_aaaaaaaaaaaaaaaaaaaaaaaaaaaa", "TEST_VAR");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_secret_strength_valid() {
        // High-entropy random string
        let result = validate_secret_strength("sk_aB3$xY9!mK2@nL5#pQ7&rT0*uW4", "TEST_VAR");
        assert!(result.is_ok());
    }

    #[test]
    fn test_is_live_key_requires_prefix_and_length() {
        assert!(is_live_key("sk_test_aB3xY9mK2nL5pQ7rT0"));
        assert!(!is_live_key("sk_short"));
        assert!(!is_live_key("pk_test_aB3xY9mK2nL5pQ7rT0"));
        assert!(!is_live_key(""));
    }

    #[test]
    fn test_live_payment_key_rejects_short_key() {
        let config = test_config("http://localhost:3000", Some("sk_short"));
        assert!(config.live_payment_key().is_none());
    }

    #[test]
    fn test_live_payment_key_accepts_real_looking_key() {
        let config = test_config("http://localhost:3000", Some("sk_test_aB3xY9mK2nL5pQ7rT0"));
        assert!(config.live_payment_key().is_some());
    }

    #[test]
    fn test_live_payment_key_absent() {
        let config = test_config("http://localhost:3000", None);
        assert!(config.live_payment_key().is_none());
    }

    #[test]
    fn test_secure_cookies_follows_scheme() {
        assert!(!test_config("http://localhost:3000", None).secure_cookies());
        assert!(test_config("https://snkrs.ru", None).secure_cookies());
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config("http://localhost:3000", None);
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
