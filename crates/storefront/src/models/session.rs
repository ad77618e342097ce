//! Session-related types.
//!
//! Types stored in the session for authentication and cart state.

use serde::{Deserialize, Serialize};

use snkrs_core::{Email, Role, UserId};

/// Safe projection of an authenticated principal.
///
/// This is the only identity shape that crosses out of the auth gate: id,
/// display name, email, and role. Credential material never appears here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    /// Directory ID of the principal.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
    /// Granted role.
    pub role: Role,
}

/// Session keys for storefront data.
pub mod keys {
    /// Key for the serialized cart aggregate.
    ///
    /// Kept stable: the frontend treats this as the application-scoped
    /// storage name for cart state.
    pub const CART: &str = "snkrs-cart";

    /// Key for storing the current logged-in principal.
    pub const PRINCIPAL: &str = "principal";
}
