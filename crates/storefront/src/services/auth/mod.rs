//! Authentication service.
//!
//! Validates credentials against a fixed in-process user directory. The demo
//! deployment ships two accounts; passwords live in the directory as Argon2id
//! hashes built at startup, never as plaintext.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use snkrs_core::{Email, Role, UserId};

use crate::models::Principal;

/// A directory entry: the public principal plus its password hash.
struct DirectoryUser {
    principal: Principal,
    password_hash: String,
}

/// A seeded account before hashing.
struct SeedUser {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    role: Role,
    password: &'static str,
}

/// Demo accounts available without registration.
const DEMO_USERS: &[SeedUser] = &[
    SeedUser {
        id: "1",
        name: "Демо Пользователь",
        email: "demo@snkrs.ru",
        role: Role::User,
        password: "demo123",
    },
    SeedUser {
        id: "admin",
        name: "Администратор",
        email: "admin@snkrs.ru",
        role: Role::Admin,
        password: "admin123",
    },
];

/// Authentication service backed by a fixed user directory.
pub struct AuthService {
    users: Vec<DirectoryUser>,
    /// Hash verified for unknown emails so lookup timing does not reveal
    /// whether an account exists.
    dummy_hash: String,
}

impl AuthService {
    /// Build the service over the demo user directory.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if a seeded email fails to parse or hashing a
    /// seeded password fails.
    pub fn with_demo_users() -> Result<Self, AuthError> {
        Self::from_seed(DEMO_USERS)
    }

    fn from_seed(seed: &[SeedUser]) -> Result<Self, AuthError> {
        let users = seed
            .iter()
            .map(|user| {
                Ok(DirectoryUser {
                    principal: Principal {
                        id: UserId::new(user.id),
                        name: user.name.to_string(),
                        email: Email::parse(user.email)?,
                        role: user.role,
                    },
                    password_hash: hash_password(user.password)?,
                })
            })
            .collect::<Result<Vec<_>, AuthError>>()?;
        let dummy_hash = hash_password("directory-timing-pad")?;

        Ok(Self { users, dummy_hash })
    }

    // =========================================================================
    // Password Authentication
    // =========================================================================

    /// Validate credentials, returning the authenticated principal.
    ///
    /// Email lookup is an exact match. Unknown emails still verify the
    /// password against a dummy hash so both outcomes take the same time.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for every wrong email/password
    /// combination; the caller cannot distinguish which part was wrong.
    pub fn login(&self, email: &str, password: &str) -> Result<Principal, AuthError> {
        let user = self
            .users
            .iter()
            .find(|u| u.principal.email.as_str() == email);

        let hash = user.map_or(self.dummy_hash.as_str(), |u| u.password_hash.as_str());
        let verified = verify_password(password, hash).is_ok();

        match user {
            Some(user) if verified => Ok(user.principal.clone()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}

/// Hash a password using Argon2id.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
