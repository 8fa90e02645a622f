use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::error::CatalogError;
use crate::model::{Item, ItemId};

/// Reason an individual catalog entry was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` has the wrong type")]
    WrongType(&'static str),

    #[error("name is empty")]
    EmptyName,

    #[error("no usable identifier")]
    MissingId,
}

/// Parses the `{ "data": [...] }` catalog envelope.
///
/// Entries are validated one at a time: an invalid entry is logged and
/// dropped, the rest of the catalog still goes through. Only a missing or
/// mistyped `data` array fails the whole parse.
pub fn parse_catalog(body: &Value) -> Result<Vec<Item>, CatalogError> {
    let data = body
        .get("data")
        .and_then(|d| d.as_array())
        .ok_or(CatalogError::Envelope("no `data` array in response"))?;

    let mut items = Vec::with_capacity(data.len());
    for entry in data {
        match parse_item(entry) {
            Ok(item) => items.push(item),
            Err(err) => warn!(%err, "dropping invalid catalog entry"),
        }
    }

    Ok(items)
}

/// Parses one catalog entry. Unknown fields are ignored.
///
/// Identifier contract: `documentId` is canonical; older payloads carry a
/// numeric `id` instead, accepted as fallback.
pub fn parse_item(entry: &Value) -> Result<Item, ValidationError> {
    let id = item_id(entry).ok_or(ValidationError::MissingId)?;

    let name = entry
        .get("name")
        .ok_or(ValidationError::MissingField("name"))?
        .as_str()
        .ok_or(ValidationError::WrongType("name"))?;
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let price = entry
        .get("price")
        .ok_or(ValidationError::MissingField("price"))?
        .as_f64()
        .ok_or(ValidationError::WrongType("price"))?;

    Ok(Item {
        id,
        name: name.to_string(),
        price,
        discount_price: entry
            .get("discount_price")
            .and_then(Value::as_f64)
            .unwrap_or(0.0),
        unit: entry
            .get("unit")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
        stock_quantity: entry
            .get("stock_quantity")
            .and_then(Value::as_u64)
            .unwrap_or(0) as u32,
        featured: entry
            .get("feature")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    })
}

fn item_id(entry: &Value) -> Option<ItemId> {
    if let Some(doc) = entry.get("documentId").and_then(Value::as_str) {
        if !doc.is_empty() {
            return Some(doc.to_string());
        }
    }
    entry.get("id").and_then(Value::as_i64).map(|n| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_item_full() {
        let entry = json!({
            "id": 2,
            "documentId": "p1",
            "name": "Potato",
            "price": 3.00,
            "discount_price": 1.50,
            "unit": "kg",
            "stock_quantity": 50,
            "feature": true
        });

        let item = parse_item(&entry).unwrap();
        assert_eq!(item.id, "p1");
        assert_eq!(item.name, "Potato");
        assert_eq!(item.price, 3.0);
        assert_eq!(item.discount_price, 1.5);
        assert_eq!(item.unit, "kg");
        assert_eq!(item.stock_quantity, 50);
        assert!(item.featured);
    }

    #[test]
    fn test_parse_item_numeric_id_fallback() {
        let entry = json!({
            "id": 7,
            "name": "Carrot",
            "price": 2.00
        });

        let item = parse_item(&entry).unwrap();
        assert_eq!(item.id, "7");
        assert_eq!(item.discount_price, 0.0);
        assert_eq!(item.unit, "");
        assert_eq!(item.stock_quantity, 0);
        assert!(!item.featured);
    }

    #[test]
    fn test_parse_item_missing_name() {
        let entry = json!({ "id": 3, "price": 1.00 });
        assert_eq!(
            parse_item(&entry).unwrap_err(),
            ValidationError::MissingField("name")
        );
    }

    #[test]
    fn test_parse_item_missing_price() {
        let entry = json!({ "id": 3, "name": "Leek" });
        assert_eq!(
            parse_item(&entry).unwrap_err(),
            ValidationError::MissingField("price")
        );
    }

    #[test]
    fn test_parse_item_without_identifier() {
        let entry = json!({ "name": "Leek", "price": 1.00 });
        assert_eq!(parse_item(&entry).unwrap_err(), ValidationError::MissingId);
    }

    #[test]
    fn test_parse_item_negative_stock_coerced() {
        let entry = json!({ "id": 4, "name": "Kale", "price": 2.5, "stock_quantity": -3 });
        assert_eq!(parse_item(&entry).unwrap().stock_quantity, 0);
    }

    #[test]
    fn test_parse_catalog_drops_invalid_entries() {
        let body = json!({
            "data": [
                { "id": 1, "name": "Carrot", "price": 2.00 },
                { "id": 2, "price": 1.00 },
                { "id": 3, "name": "Leek", "price": "free" },
                { "id": 4, "name": "Kale", "price": 2.50 }
            ]
        });

        let items = parse_catalog(&body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Carrot");
        assert_eq!(items[1].name, "Kale");
    }

    #[test]
    fn test_parse_catalog_missing_data() {
        let body = json!({ "error": { "message": "Not Found" } });
        assert!(matches!(
            parse_catalog(&body),
            Err(CatalogError::Envelope(_))
        ));
    }

    #[test]
    fn test_parse_catalog_empty() {
        let body = json!({ "data": [] });
        assert!(parse_catalog(&body).unwrap().is_empty());
    }
}
