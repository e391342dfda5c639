//! Field validation for client-supplied product payloads.
//!
//! Two entry points, one per write operation:
//!
//! - [`validate_new`] — create semantics: all four fields must be present,
//!   then each must satisfy its constraint.
//! - [`validate_patch`] — update semantics: missing fields keep the stored
//!   value, supplied fields must satisfy their constraints.
//!
//! String fields are trimmed before storage; a value that is empty after
//! trimming counts as not provided at all.

use crate::core::error::CatalogError;
use crate::core::product::{ProductFields, ProductPayload};

/// Validate a create payload into complete product fields.
///
/// Any absent field rejects the whole payload with
/// [`CatalogError::MissingFields`] before individual constraints are checked.
pub fn validate_new(payload: ProductPayload) -> Result<ProductFields, CatalogError> {
    let (Some(name), Some(price), Some(category), Some(in_stock)) =
        (payload.name, payload.price, payload.category, payload.in_stock)
    else {
        return Err(CatalogError::MissingFields);
    };

    Ok(ProductFields {
        name: valid_name(name)?,
        price: valid_price(price)?,
        category: valid_category(category)?,
        in_stock,
    })
}

/// Merge an update payload onto the stored fields.
///
/// Fields the payload leaves out keep their current value; fields it supplies
/// are validated and replace the current value. The result is always a
/// complete, valid field set.
pub fn validate_patch(
    current: ProductFields,
    patch: ProductPayload,
) -> Result<ProductFields, CatalogError> {
    Ok(ProductFields {
        name: match patch.name {
            Some(name) => valid_name(name)?,
            None => current.name,
        },
        price: match patch.price {
            Some(price) => valid_price(price)?,
            None => current.price,
        },
        category: match patch.category {
            Some(category) => valid_category(category)?,
            None => current.category,
        },
        in_stock: patch.in_stock.unwrap_or(current.in_stock),
    })
}

fn valid_name(name: String) -> Result<String, CatalogError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::Invalid("Product name is required".to_string()));
    }
    Ok(trimmed.to_string())
}

fn valid_category(category: String) -> Result<String, CatalogError> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::Invalid(
            "Product category is required".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn valid_price(price: f64) -> Result<f64, CatalogError> {
    if !price.is_finite() {
        return Err(CatalogError::Invalid("Price must be a number".to_string()));
    }
    if price < 0.0 {
        return Err(CatalogError::Invalid("Price cannot be negative".to_string()));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> ProductPayload {
        ProductPayload::full("Ceramic Coffee Mug", 12.99, "Kitchen", true)
    }

    fn stored_fields() -> ProductFields {
        ProductFields {
            name: "Ceramic Coffee Mug".to_string(),
            price: 12.99,
            category: "Kitchen".to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn accepts_a_complete_payload() {
        let fields = validate_new(full_payload()).unwrap();
        assert_eq!(fields.name, "Ceramic Coffee Mug");
        assert_eq!(fields.price, 12.99);
        assert_eq!(fields.category, "Kitchen");
        assert!(fields.in_stock);
    }

    #[test]
    fn rejects_when_any_field_is_missing() {
        for strip in 0..4 {
            let mut payload = full_payload();
            match strip {
                0 => payload.name = None,
                1 => payload.price = None,
                2 => payload.category = None,
                _ => payload.in_stock = None,
            }
            assert!(
                matches!(validate_new(payload), Err(CatalogError::MissingFields)),
                "field {strip} should be required"
            );
        }
    }

    #[test]
    fn trims_name_and_category() {
        let payload = ProductPayload::full("  Mug  ", 5.0, "\tKitchen\n", false);
        let fields = validate_new(payload).unwrap();
        assert_eq!(fields.name, "Mug");
        assert_eq!(fields.category, "Kitchen");
    }

    #[test]
    fn rejects_blank_name() {
        let payload = ProductPayload::full("   ", 5.0, "Kitchen", true);
        match validate_new(payload) {
            Err(CatalogError::Invalid(reason)) => {
                assert_eq!(reason, "Product name is required")
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_price() {
        let payload = ProductPayload::full("Mug", -0.01, "Kitchen", true);
        match validate_new(payload) {
            Err(CatalogError::Invalid(reason)) => {
                assert_eq!(reason, "Price cannot be negative")
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn accepts_zero_price() {
        let payload = ProductPayload::full("Freebie", 0.0, "Other", true);
        let fields = validate_new(payload).unwrap();
        assert_eq!(fields.price, 0.0);
    }

    #[test]
    fn rejects_non_finite_price() {
        let payload = ProductPayload::full("Mug", f64::NAN, "Kitchen", true);
        assert!(matches!(
            validate_new(payload),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn patch_keeps_missing_fields() {
        let patch = ProductPayload {
            price: Some(150.0),
            ..ProductPayload::default()
        };
        let fields = validate_patch(stored_fields(), patch).unwrap();
        assert_eq!(fields.price, 150.0);
        assert_eq!(fields.name, "Ceramic Coffee Mug");
        assert_eq!(fields.category, "Kitchen");
        assert!(fields.in_stock);
    }

    #[test]
    fn patch_validates_supplied_fields() {
        let patch = ProductPayload {
            price: Some(-1.0),
            ..ProductPayload::default()
        };
        assert!(matches!(
            validate_patch(stored_fields(), patch),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn empty_patch_is_a_no_op_merge() {
        let fields = validate_patch(stored_fields(), ProductPayload::default()).unwrap();
        assert_eq!(fields, stored_fields());
    }

    #[test]
    fn patch_can_flip_stock_alone() {
        let patch = ProductPayload {
            in_stock: Some(false),
            ..ProductPayload::default()
        };
        let fields = validate_patch(stored_fields(), patch).unwrap();
        assert!(!fields.in_stock);
        assert_eq!(fields.name, "Ceramic Coffee Mug");
    }
}
