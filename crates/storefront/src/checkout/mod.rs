//! Checkout request validation.
//!
//! This is the trust boundary of the shop: raw JSON from the browser comes
//! in, a batch of [`CheckoutLineItem`]s comes out, or the whole batch is
//! rejected. Nothing downstream of this module ever sees an unsanitized
//! field.

mod validate;

pub use validate::validate_batch;

use thiserror::Error;

/// Upper bound on candidate items in one checkout batch.
///
/// Checked before any per-item work happens, so an oversized request is
/// rejected cheaply.
pub const MAX_BATCH_SIZE: usize = 50;

/// Why a checkout batch was rejected.
///
/// Display strings are the localized client-facing messages. The invalid-data
/// variant deliberately carries no field or index detail: which item failed
/// stays server-side.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutRejection {
    /// The batch is missing, not an array, or empty.
    #[error("Корзина пуста")]
    EmptyCart,
    /// The batch has more candidates than one order may carry.
    #[error("Максимум {} товаров в одном заказе", MAX_BATCH_SIZE)]
    TooManyItems,
    /// At least one candidate failed bounds validation.
    #[error("Некорректные данные товаров")]
    InvalidItemData,
}

/// A sanitized, bounds-checked checkout line.
///
/// Structurally distinct from `CartItem`: the cart trusts its own store,
/// while this type exists only on the far side of [`validate_batch`]. Fields
/// are private so the only way to obtain one is through validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutLineItem {
    name: String,
    price: f64,
    quantity: u32,
    image: String,
    size: f64,
}

impl CheckoutLineItem {
    pub(crate) const fn new(name: String, price: f64, quantity: u32, image: String, size: f64) -> Self {
        Self {
            name,
            price,
            quantity,
            image,
            size,
        }
    }

    /// Product name, 1-200 characters, free of `<` and `>`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price in rubles, within (0, 1_000_000).
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Quantity, within 1..=99.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Image path or URL, 1-500 characters, free of `<` and `>`.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// EU size, within 30..=60. May be fractional (42.5).
    #[must_use]
    pub const fn size(&self) -> f64 {
        self.size
    }
}
