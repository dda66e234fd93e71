//! Product write payload.
//!
//! Explicit request shape for `POST /product` and `PUT /product/{productId}`.
//! Validation runs in the contract's category order: core fields, then the
//! price sub-document, then details, then shipping, short-circuiting on the
//! first failed category.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use tradewithus_core::{
    Price, PriceRange, Product, ProductDetails, ProductId, ProfileId, ShippingDetails,
};

/// Incoming product document.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    #[validate(required, length(min = 1))]
    pub product_id: Option<String>,
    #[validate(required, length(min = 1))]
    pub product_name: Option<String>,
    #[validate(required)]
    pub images: Option<Vec<String>>,
    #[validate(required, length(min = 1))]
    pub seller_id: Option<String>,
    #[validate(required, nested)]
    pub price: Option<PriceData>,
    #[validate(required, nested)]
    pub details: Option<DetailsData>,
    #[validate(required, nested)]
    pub shipping: Option<ShippingData>,
}

/// Incoming price sub-document.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct PriceData {
    #[validate(required)]
    pub current: Option<Decimal>,
    #[validate(required, nested)]
    pub range: Option<PriceRangeData>,
}

/// Incoming price range sub-document.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct PriceRangeData {
    #[validate(required)]
    pub min: Option<Decimal>,
    #[validate(required)]
    pub max: Option<Decimal>,
}

/// Incoming details sub-document.
#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DetailsData {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub product: Option<String>,
    #[validate(required, length(min = 1))]
    pub origin: Option<String>,
    #[validate(required, length(min = 1))]
    pub production_capacity: Option<String>,
    #[validate(required, length(min = 1))]
    pub export_volume: Option<String>,
    #[validate(required, length(min = 1))]
    pub form_and_cut: Option<String>,
    #[validate(required, length(min = 1))]
    pub color: Option<String>,
    #[validate(required, length(min = 1))]
    pub cultivation_type: Option<String>,
    pub moisture: Option<String>,
    pub forecast: Option<String>,
}

/// Incoming shipping sub-document.
#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShippingData {
    #[validate(required, length(min = 1))]
    pub hs_code: Option<String>,
    #[validate(required, length(min = 1))]
    pub min_quantity: Option<String>,
    #[validate(required, length(min = 1))]
    pub packaging: Option<String>,
    #[validate(required, length(min = 1))]
    pub transport_mode: Option<String>,
    #[validate(required, length(min = 1))]
    pub incoterms: Option<String>,
    #[validate(required, length(min = 1))]
    pub shelf_life: Option<String>,
}

impl ProductData {
    /// Convert a validated payload into the domain document.
    ///
    /// Returns `None` if a required field is absent or a business key fails
    /// to parse; callers validate first, so `None` here means a malformed key.
    #[must_use]
    pub fn into_product(self) -> Option<Product> {
        let price = self.price?;
        let range = price.range?;
        let details = self.details?;
        let shipping = self.shipping?;

        Some(Product {
            product_id: ProductId::parse(&self.product_id?).ok()?,
            product_name: self.product_name?,
            images: self.images?,
            seller_id: ProfileId::parse(&self.seller_id?).ok()?,
            price: Price {
                current: price.current?,
                range: PriceRange {
                    min: range.min?,
                    max: range.max?,
                },
            },
            details: ProductDetails {
                name: details.name?,
                product: details.product?,
                origin: details.origin?,
                production_capacity: details.production_capacity?,
                export_volume: details.export_volume?,
                form_and_cut: details.form_and_cut?,
                color: details.color?,
                cultivation_type: details.cultivation_type?,
                moisture: details.moisture,
                forecast: details.forecast,
            },
            shipping: ShippingDetails {
                hs_code: shipping.hs_code?,
                min_quantity: shipping.min_quantity?,
                packaging: shipping.packaging?,
                transport_mode: shipping.transport_mode?,
                incoterms: shipping.incoterms?,
                shelf_life: shipping.shelf_life?,
            },
        })
    }
}

/// Top-level fields whose absence means the core field list failed.
const PRODUCT_CORE_FIELDS: [&str; 7] = [
    "product_id",
    "product_name",
    "images",
    "seller_id",
    "price",
    "details",
    "shipping",
];

/// Violation message for a failed product payload, in category order.
///
/// Core field presence is reported first; otherwise the first failed
/// sub-document (price, then details, then shipping) wins.
#[must_use]
pub fn product_violation_message(errors: &ValidationErrors) -> &'static str {
    let map = errors.errors();

    for field in PRODUCT_CORE_FIELDS {
        if matches!(map.get(field), Some(ValidationErrorsKind::Field(_))) {
            return "Missing required product fields";
        }
    }
    if map.contains_key("price") {
        return "Invalid price data";
    }
    if map.contains_key("details") {
        return "Invalid product details";
    }
    if map.contains_key("shipping") {
        return "Invalid shipping details";
    }
    "Missing required product fields"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_payload() -> ProductData {
        serde_json::from_str(
            r#"{
                "productId": "mango-kent-001",
                "productName": "Kent Mango",
                "images": ["m1.jpg", "m2.jpg"],
                "sellerId": "acme-trading",
                "price": {"current": 2.5, "range": {"min": 2.0, "max": 3.25}},
                "details": {
                    "name": "Kent Mango",
                    "product": "Mango",
                    "origin": "Kenya",
                    "productionCapacity": "200 tons/month",
                    "exportVolume": "80 tons/month",
                    "formAndCut": "Whole",
                    "color": "Red-green",
                    "cultivationType": "Conventional"
                },
                "shipping": {
                    "hsCode": "080450",
                    "minQuantity": "1 ton",
                    "packaging": "4kg cartons",
                    "transportMode": "Sea / Air",
                    "incoterms": "FOB",
                    "shelfLife": "21 days"
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_payload_passes_and_converts() {
        let payload = valid_payload();
        assert!(payload.validate().is_ok());

        let product = payload.into_product().unwrap();
        assert_eq!(product.product_id.as_str(), "mango-kent-001");
        assert_eq!(product.images.len(), 2);
        assert_eq!(product.price.range.max, Decimal::new(325, 2));
    }

    #[test]
    fn test_missing_core_field_reports_core_message() {
        let mut payload = valid_payload();
        payload.seller_id = None;
        let errors = payload.validate().unwrap_err();
        assert_eq!(
            product_violation_message(&errors),
            "Missing required product fields"
        );
    }

    #[test]
    fn test_missing_price_entirely_reports_core_message() {
        let mut payload = valid_payload();
        payload.price = None;
        let errors = payload.validate().unwrap_err();
        assert_eq!(
            product_violation_message(&errors),
            "Missing required product fields"
        );
    }

    #[test]
    fn test_invalid_price_subfield_reports_price_message() {
        let mut payload = valid_payload();
        payload.price.as_mut().unwrap().current = None;
        let errors = payload.validate().unwrap_err();
        assert_eq!(product_violation_message(&errors), "Invalid price data");
    }

    #[test]
    fn test_invalid_details_subfield_reports_details_message() {
        let mut payload = valid_payload();
        payload.details.as_mut().unwrap().color = None;
        let errors = payload.validate().unwrap_err();
        assert_eq!(product_violation_message(&errors), "Invalid product details");
    }

    #[test]
    fn test_invalid_shipping_subfield_reports_shipping_message() {
        let mut payload = valid_payload();
        payload.shipping.as_mut().unwrap().incoterms = None;
        let errors = payload.validate().unwrap_err();
        assert_eq!(
            product_violation_message(&errors),
            "Invalid shipping details"
        );
    }

    #[test]
    fn test_price_category_wins_over_shipping() {
        // Both price and shipping sub-documents invalid: price reported first
        let mut payload = valid_payload();
        payload.price.as_mut().unwrap().current = None;
        payload.shipping.as_mut().unwrap().incoterms = None;
        let errors = payload.validate().unwrap_err();
        assert_eq!(product_violation_message(&errors), "Invalid price data");
    }

    #[test]
    fn test_optional_details_fields_are_optional() {
        let payload = valid_payload();
        assert!(payload.details.as_ref().unwrap().moisture.is_none());
        assert!(payload.validate().is_ok());
    }
}
