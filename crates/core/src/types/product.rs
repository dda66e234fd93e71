//! Product listing domain types.
//!
//! A product is a tradable listing addressed by its [`ProductId`] business
//! key and referencing the seller's [`ProfileId`]. The reference is not
//! enforced by the store; consumers must tolerate orphaned listings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::key::{ProductId, ProfileId};

/// A tradable product listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique business key, immutable after creation.
    pub product_id: ProductId,
    pub product_name: String,
    /// Image URLs in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Business key of the selling profile (not enforced).
    pub seller_id: ProfileId,
    pub price: Price,
    pub details: ProductDetails,
    pub shipping: ShippingDetails,
}

/// Current asking price plus the negotiable range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Price {
    pub current: Decimal,
    pub range: PriceRange,
}

/// Inclusive min/max bounds of the negotiable price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

/// Commodity-level attributes of the listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub name: String,
    pub product: String,
    pub origin: String,
    pub production_capacity: String,
    pub export_volume: String,
    pub form_and_cut: String,
    pub color: String,
    pub cultivation_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moisture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast: Option<String>,
}

/// Logistics attributes of the listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub hs_code: String,
    pub min_quantity: String,
    pub packaging: String,
    pub transport_mode: String,
    pub incoterms: String,
    pub shelf_life: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_product_wire_format() {
        let json = r#"{
            "productId": "mango-kent-001",
            "productName": "Kent Mango",
            "images": ["https://cdn.example.com/m1.jpg"],
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
                "cultivationType": "Conventional",
                "moisture": "82%"
            },
            "shipping": {
                "hsCode": "080450",
                "minQuantity": "1 ton",
                "packaging": "4kg cartons",
                "transportMode": "Sea / Air",
                "incoterms": "FOB",
                "shelfLife": "21 days"
            }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.product_id.as_str(), "mango-kent-001");
        assert_eq!(product.seller_id.as_str(), "acme-trading");
        assert_eq!(product.price.current, Decimal::new(25, 1));
        assert_eq!(product.price.range.max, Decimal::new(325, 2));
        assert_eq!(product.details.moisture.as_deref(), Some("82%"));
        assert!(product.details.forecast.is_none());
        assert_eq!(product.shipping.hs_code, "080450");
    }

    #[test]
    fn test_serialize_uses_camel_case_keys() {
        let product = Product {
            product_id: ProductId::parse("p1").unwrap(),
            product_name: "Avocado".to_owned(),
            images: vec![],
            seller_id: ProfileId::parse("s1").unwrap(),
            price: Price {
                current: Decimal::ONE,
                range: PriceRange {
                    min: Decimal::ONE,
                    max: Decimal::TWO,
                },
            },
            details: ProductDetails {
                name: "Avocado".to_owned(),
                product: "Avocado".to_owned(),
                origin: "Peru".to_owned(),
                production_capacity: "x".to_owned(),
                export_volume: "y".to_owned(),
                form_and_cut: "Whole".to_owned(),
                color: "Green".to_owned(),
                cultivation_type: "Organic".to_owned(),
                moisture: None,
                forecast: None,
            },
            shipping: ShippingDetails {
                hs_code: "080440".to_owned(),
                min_quantity: "500 kg".to_owned(),
                packaging: "Crates".to_owned(),
                transport_mode: "Sea".to_owned(),
                incoterms: "CIF".to_owned(),
                shelf_life: "30 days".to_owned(),
            },
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["productId"], "p1");
        assert_eq!(json["sellerId"], "s1");
        assert!(json["details"].get("productionCapacity").is_some());
        assert!(json["shipping"].get("hsCode").is_some());
        // Absent optionals are omitted
        assert!(json["details"].get("moisture").is_none());
    }
}
