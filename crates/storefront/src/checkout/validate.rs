//! Batch sanitization and validation.
//!
//! The algorithm is fixed and order-sensitive: shape check, batch size
//! check, then per-item sanitize-and-validate. Validation is all-or-nothing
//! across the batch; there is no partial checkout.

use serde_json::Value;

use super::{CheckoutLineItem, CheckoutRejection, MAX_BATCH_SIZE};

const MAX_NAME_CHARS: usize = 200;
const MAX_IMAGE_CHARS: usize = 500;
const MAX_PRICE: f64 = 1_000_000.0;
const MAX_QUANTITY: f64 = 99.0;
const MIN_CHECKOUT_SIZE: f64 = 30.0;
const MAX_CHECKOUT_SIZE: f64 = 60.0;

/// Validate a raw checkout batch into trusted line items.
///
/// `raw_items` is the `items` value from the request body, if any. Every
/// malformed shape (absent, `null`, not an array, wrong-typed fields,
/// extra keys) is normalized into a rejection; this function never panics
/// on untrusted input.
///
/// On success the returned items preserve input order, one per candidate.
///
/// # Errors
///
/// - [`CheckoutRejection::EmptyCart`] when `raw_items` is missing, not an
///   array, or empty.
/// - [`CheckoutRejection::TooManyItems`] when the batch exceeds
///   [`MAX_BATCH_SIZE`].
/// - [`CheckoutRejection::InvalidItemData`] when any candidate fails bounds
///   validation. Which one stays server-side.
pub fn validate_batch(raw_items: Option<&Value>) -> Result<Vec<CheckoutLineItem>, CheckoutRejection> {
    let Some(Value::Array(items)) = raw_items else {
        return Err(CheckoutRejection::EmptyCart);
    };

    if items.is_empty() {
        return Err(CheckoutRejection::EmptyCart);
    }

    if items.len() > MAX_BATCH_SIZE {
        return Err(CheckoutRejection::TooManyItems);
    }

    let mut line_items = Vec::with_capacity(items.len());
    for raw in items {
        match sanitize_candidate(raw).into_line_item() {
            Some(line_item) => line_items.push(line_item),
            // All-or-nothing: one bad candidate rejects the whole batch.
            None => return Err(CheckoutRejection::InvalidItemData),
        }
    }

    Ok(line_items)
}

/// A candidate's fields after sanitization, before bounds validation.
struct Candidate {
    name: String,
    price: f64,
    quantity: f64,
    image: String,
    size: f64,
}

impl Candidate {
    /// Apply the bounds checks and promote to a trusted line item.
    ///
    /// Bounds: name and image non-empty, `0 < price < 1_000_000`, quantity a
    /// whole number in 1..=99, size in 30..=60. All numeric checks require
    /// finite values, which also catches coercion failures (NaN).
    fn into_line_item(self) -> Option<CheckoutLineItem> {
        let name_ok = !self.name.is_empty();
        let price_ok = self.price.is_finite() && self.price > 0.0 && self.price < MAX_PRICE;
        let quantity_ok = self.quantity.is_finite()
            && self.quantity.fract() == 0.0
            && (1.0..=MAX_QUANTITY).contains(&self.quantity);
        let image_ok = !self.image.is_empty();
        let size_ok =
            self.size.is_finite() && (MIN_CHECKOUT_SIZE..=MAX_CHECKOUT_SIZE).contains(&self.size);

        if !(name_ok && price_ok && quantity_ok && image_ok && size_ok) {
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // Validated above: a whole number in 1..=99.
        let quantity = self.quantity as u32;

        Some(CheckoutLineItem::new(
            self.name,
            self.price,
            quantity,
            self.image,
            self.size,
        ))
    }
}

/// Derive the sanitized fields of one raw candidate.
///
/// Only the enumerated fields are read; extra keys (including
/// prototype-pollution-style ones) are never inspected, so they cannot
/// influence the batch. A non-object candidate yields empty/NaN fields and
/// fails validation downstream.
fn sanitize_candidate(raw: &Value) -> Candidate {
    Candidate {
        name: sanitize_text(raw.get("name"), MAX_NAME_CHARS),
        price: coerce_number(raw.get("price")),
        quantity: coerce_number(raw.get("quantity")),
        image: sanitize_text(raw.get("image"), MAX_IMAGE_CHARS),
        size: coerce_number(raw.get("size")),
    }
}

/// Coerce a text field: non-strings become empty, the rest is truncated to
/// `max_chars` characters and stripped of every literal `<` and `>`.
///
/// The angle-bracket strip is deliberately simple (no entity or Unicode
/// canonicalization); callers depend on these exact semantics. Sanitization
/// is idempotent: running it on already-sanitized text is a no-op.
fn sanitize_text(value: Option<&Value>, max_chars: usize) -> String {
    let raw = value.and_then(Value::as_str).unwrap_or("");
    let truncated: String = raw.chars().take(max_chars).collect();
    truncated.replace(['<', '>'], "")
}

/// Coerce a numeric field: numbers pass through, strings are parsed, and
/// everything else becomes NaN for the bounds check to catch.
fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_item() -> Value {
        json!({
            "id": "1",
            "name": "Nike Air Max 90",
            "slug": "nike-air-max-90",
            "brand": "Nike",
            "price": 14990,
            "image": "/products/nike-air-max-90.jpg",
            "size": 42,
            "quantity": 1,
        })
    }

    fn batch_with(field: &str, value: Value) -> Option<Value> {
        let mut item = valid_item();
        item.as_object_mut()
            .unwrap()
            .insert(field.to_string(), value);
        Some(json!({ "items": [item] }))
    }

    fn validate(body: Option<Value>) -> Result<Vec<CheckoutLineItem>, CheckoutRejection> {
        validate_batch(body.as_ref().and_then(|b| b.get("items")))
    }

    // ===== Shape =====

    #[test]
    fn test_missing_items_is_empty_cart() {
        assert_eq!(
            validate(Some(json!({}))),
            Err(CheckoutRejection::EmptyCart)
        );
    }

    #[test]
    fn test_null_items_is_empty_cart() {
        assert_eq!(
            validate(Some(json!({ "items": null }))),
            Err(CheckoutRejection::EmptyCart)
        );
    }

    #[test]
    fn test_non_array_items_is_empty_cart() {
        for items in [json!("xxx"), json!(42), json!({ "0": {} }), json!(true)] {
            assert_eq!(
                validate(Some(json!({ "items": items }))),
                Err(CheckoutRejection::EmptyCart),
                "items = {items}"
            );
        }
    }

    #[test]
    fn test_empty_array_is_empty_cart() {
        assert_eq!(
            validate(Some(json!({ "items": [] }))),
            Err(CheckoutRejection::EmptyCart)
        );
    }

    // ===== Batch size =====

    #[test]
    fn test_over_fifty_items_rejected_with_limit_in_message() {
        let items: Vec<Value> = (0..51).map(|_| valid_item()).collect();
        let result = validate(Some(json!({ "items": items })));
        let rejection = result.unwrap_err();
        assert_eq!(rejection, CheckoutRejection::TooManyItems);
        assert!(rejection.to_string().contains("50"));
    }

    #[test]
    fn test_exactly_fifty_items_accepted() {
        let items: Vec<Value> = (0..50).map(|_| valid_item()).collect();
        let validated = validate(Some(json!({ "items": items }))).unwrap();
        assert_eq!(validated.len(), 50);
    }

    #[test]
    fn test_valid_batch_preserves_count_and_order() {
        let mut second = valid_item();
        second
            .as_object_mut()
            .unwrap()
            .insert("name".to_string(), json!("Adidas Ultraboost 23"));
        let validated = validate(Some(json!({ "items": [valid_item(), second] }))).unwrap();

        assert_eq!(validated.len(), 2);
        assert_eq!(validated.first().unwrap().name(), "Nike Air Max 90");
        assert_eq!(validated.get(1).unwrap().name(), "Adidas Ultraboost 23");
    }

    // ===== Price bounds =====

    #[test]
    fn test_bad_prices_reject_whole_batch() {
        for price in [json!(-100), json!(0), json!(1_000_000), json!(2_000_000)] {
            assert_eq!(
                validate(batch_with("price", price.clone())),
                Err(CheckoutRejection::InvalidItemData),
                "price = {price}"
            );
        }
    }

    #[test]
    fn test_non_numeric_price_rejected() {
        assert_eq!(
            validate(batch_with("price", json!("not-a-number"))),
            Err(CheckoutRejection::InvalidItemData)
        );
    }

    #[test]
    fn test_numeric_string_price_accepted() {
        let validated = validate(batch_with("price", json!("14990"))).unwrap();
        assert!((validated.first().unwrap().price() - 14990.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_price_below_upper_bound_accepted() {
        let validated = validate(batch_with("price", json!(999_999.99))).unwrap();
        assert_eq!(validated.len(), 1);
    }

    // ===== Quantity bounds =====

    #[test]
    fn test_bad_quantities_reject_whole_batch() {
        for quantity in [json!(0), json!(-5), json!(100), json!(1.5)] {
            assert_eq!(
                validate(batch_with("quantity", quantity.clone())),
                Err(CheckoutRejection::InvalidItemData),
                "quantity = {quantity}"
            );
        }
    }

    #[test]
    fn test_quantity_bounds_are_inclusive() {
        assert!(validate(batch_with("quantity", json!(1))).is_ok());
        assert!(validate(batch_with("quantity", json!(99))).is_ok());
    }

    // ===== Size bounds =====

    #[test]
    fn test_out_of_range_sizes_rejected() {
        for size in [json!(5), json!(100), json!(29.9), json!(60.1)] {
            assert_eq!(
                validate(batch_with("size", size.clone())),
                Err(CheckoutRejection::InvalidItemData),
                "size = {size}"
            );
        }
    }

    #[test]
    fn test_checkout_size_bounds_are_looser_than_catalog() {
        // Catalog stocks 35-50, but checkout accepts 30-60 by contract.
        for size in [json!(30), json!(42.5), json!(60)] {
            assert!(validate(batch_with("size", size.clone())).is_ok(), "size = {size}");
        }
    }

    // ===== Sanitization =====

    #[test]
    fn test_script_tags_stripped_from_name() {
        let validated =
            validate(batch_with("name", json!("<script>alert(\"xss\")</script>"))).unwrap();
        let name = validated.first().unwrap().name().to_string();
        assert!(!name.contains('<'));
        assert!(!name.contains('>'));
        assert!(!name.is_empty());
    }

    #[test]
    fn test_html_attribute_injection_stripped() {
        let validated =
            validate(batch_with("name", json!("<img src=x onerror=\"alert(1)\">"))).unwrap();
        assert!(!validated.first().unwrap().name().contains('<'));
    }

    #[test]
    fn test_oversized_name_truncated_not_rejected() {
        let validated = validate(batch_with("name", json!("A".repeat(10_000)))).unwrap();
        assert_eq!(validated.first().unwrap().name().chars().count(), 200);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let validated = validate(batch_with("name", json!("Ы".repeat(10_000)))).unwrap();
        assert_eq!(validated.first().unwrap().name().chars().count(), 200);
    }

    #[test]
    fn test_name_of_only_markup_becomes_empty_and_rejects() {
        assert_eq!(
            validate(batch_with("name", json!("<><><>"))),
            Err(CheckoutRejection::InvalidItemData)
        );
    }

    #[test]
    fn test_non_string_name_treated_as_empty() {
        for name in [json!(123), json!(null), json!(["Nike"])] {
            assert_eq!(
                validate(batch_with("name", name.clone())),
                Err(CheckoutRejection::InvalidItemData),
                "name = {name}"
            );
        }
    }

    #[test]
    fn test_sanitize_text_is_idempotent() {
        for raw in ["Nike Air Max 90", "<b>bold</b>", &"A".repeat(10_000)] {
            let once = sanitize_text(Some(&json!(raw)), MAX_NAME_CHARS);
            let twice = sanitize_text(Some(&json!(once.clone())), MAX_NAME_CHARS);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_image_sanitized_but_scheme_not_policed() {
        // The sanitizer strips markup; it does not judge URL schemes.
        let validated = validate(batch_with("image", json!("javascript:alert(\"xss\")"))).unwrap();
        assert_eq!(validated.len(), 1);
    }

    #[test]
    fn test_empty_image_rejected() {
        assert_eq!(
            validate(batch_with("image", json!(""))),
            Err(CheckoutRejection::InvalidItemData)
        );
    }

    // ===== Hostile shapes =====

    #[test]
    fn test_extra_keys_on_item_are_ignored() {
        let mut item = valid_item();
        let obj = item.as_object_mut().unwrap();
        obj.insert("__proto__".to_string(), json!({ "isAdmin": true }));
        obj.insert("constructor".to_string(), json!("boom"));
        obj.insert("unrelated".to_string(), json!([1, 2, 3]));

        let validated = validate(Some(json!({ "items": [item] }))).unwrap();
        assert_eq!(validated.len(), 1);
    }

    #[test]
    fn test_non_object_candidate_rejects_batch() {
        for candidate in [json!("just a string"), json!(42), json!([1, 2])] {
            assert_eq!(
                validate(Some(json!({ "items": [valid_item(), candidate.clone()] }))),
                Err(CheckoutRejection::InvalidItemData),
                "candidate = {candidate}"
            );
        }
    }

    #[test]
    fn test_missing_fields_reject_batch() {
        for field in ["name", "price", "quantity", "image", "size"] {
            let mut item = valid_item();
            item.as_object_mut().unwrap().remove(field);
            assert_eq!(
                validate(Some(json!({ "items": [item] }))),
                Err(CheckoutRejection::InvalidItemData),
                "missing {field}"
            );
        }
    }

    // ===== Coercion =====

    #[test]
    fn test_coerce_number_handles_all_value_shapes() {
        assert!((coerce_number(Some(&json!(42))) - 42.0).abs() < f64::EPSILON);
        assert!((coerce_number(Some(&json!("42.5"))) - 42.5).abs() < f64::EPSILON);
        assert!((coerce_number(Some(&json!(" 7 "))) - 7.0).abs() < f64::EPSILON);
        assert!(coerce_number(Some(&json!("abc"))).is_nan());
        assert!(coerce_number(Some(&json!(null))).is_nan());
        assert!(coerce_number(Some(&json!(true))).is_nan());
        assert!(coerce_number(Some(&json!({}))).is_nan());
        assert!(coerce_number(None).is_nan());
    }

    #[test]
    fn test_infinite_values_caught_by_bounds() {
        assert_eq!(
            validate(batch_with("price", json!("inf"))),
            Err(CheckoutRejection::InvalidItemData)
        );
        assert_eq!(
            validate(batch_with("size", json!("NaN"))),
            Err(CheckoutRejection::InvalidItemData)
        );
    }
}
