//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, one hub per request)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (correlate logs, Sentry, and the response header)
//! 4. CORS (only when a frontend origin is configured)
//! 5. Session layer (tower-sessions with in-memory store)
//! 6. Security headers
//! 7. Rate limiting (governor, on the serving route tree only)

pub mod auth;
pub mod rate_limit;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{OptionalAuth, clear_principal, set_principal};
pub use rate_limit::{api_rate_limiter, auth_rate_limiter};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
