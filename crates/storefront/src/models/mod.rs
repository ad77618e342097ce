//! Domain models for storefront.

pub mod session;

pub use session::{Principal, keys as session_keys};
