//! Receipt Data Model
//!
//! Wire shapes for submitted receipts. Field names follow the JSON payload
//! (`purchaseDate`, `shortDescription`, ...). Numeric, date and time fields
//! are kept as the text received and only interpreted by the scorer, so the
//! field policy decides what an unparseable value means.

use serde::{Deserialize, Serialize};

/// A purchase receipt as submitted for scoring
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    /// Calendar date, YYYY-MM-DD
    pub purchase_date: String,
    /// Time of day, 24-hour HH:MM
    pub purchase_time: String,
    pub items: Vec<Item>,
    /// Decimal amount encoded as text, e.g. "35.35"
    pub total: String,
}

/// A single purchased item
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_payload() {
        let json = r#"{
            "retailer": "Walgreens",
            "purchaseDate": "2022-01-02",
            "purchaseTime": "08:13",
            "total": "2.65",
            "items": [
                {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
                {"shortDescription": "Dasani", "price": "1.40"}
            ]
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Walgreens");
        assert_eq!(receipt.purchase_date, "2022-01-02");
        assert_eq!(receipt.purchase_time, "08:13");
        assert_eq!(receipt.total, "2.65");
        assert_eq!(receipt.items.len(), 2);
        assert_eq!(receipt.items[1], Item::new("Dasani", "1.40"));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        // No "total"
        let json = r#"{
            "retailer": "Walgreens",
            "purchaseDate": "2022-01-02",
            "purchaseTime": "08:13",
            "items": []
        }"#;
        assert!(serde_json::from_str::<Receipt>(json).is_err());
    }

    #[test]
    fn test_snake_case_names_are_not_accepted() {
        let json = r#"{
            "retailer": "Walgreens",
            "purchase_date": "2022-01-02",
            "purchase_time": "08:13",
            "items": [],
            "total": "1.00"
        }"#;
        assert!(serde_json::from_str::<Receipt>(json).is_err());
    }
}
