//! Password hashing for the user directory.
//!
//! # Usage
//!
//! ```bash
//! snkrs-cli hash-password demo123
//! ```

use snkrs_storefront::services::auth::{self, AuthError};

/// Hash a password and print the PHC string.
///
/// The output is suitable for seeding the user directory.
#[allow(clippy::print_stdout)]
pub fn hash(password: &str) -> Result<(), AuthError> {
    let hash = auth::hash_password(password)?;
    println!("{hash}");
    Ok(())
}
