use serde::{Deserialize, Serialize};

/// Stable identifier for items within one fetch result.
pub type ItemId = String;

/// Quantity at or below which an item counts as low on stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// One produce entry as parsed from the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// List price.
    pub price: f64,
    /// Sale price; `0` means no discount is running.
    pub discount_price: f64,
    /// Sale unit, e.g. "kg" or "bunch".
    pub unit: String,
    pub stock_quantity: u32,
    /// Promotional flag.
    pub featured: bool,
}

/// Stock-level classification shown next to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Plentiful,
    Low,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::Plentiful => write!(f, "plentiful"),
            StockStatus::Low => write!(f, "low"),
        }
    }
}

/// Display fields computed from an [`Item`]. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Derived {
    /// The price actually charged: the discount price when one is running,
    /// otherwise the list price.
    pub effective_price: f64,
    pub has_discount: bool,
    pub stock_status: StockStatus,
}

impl Derived {
    /// Derives the display fields for one item.
    ///
    /// Pure and total: a negative discount counts as no discount, and
    /// non-finite prices collapse to `0` instead of propagating.
    pub fn of(item: &Item) -> Self {
        let price = sanitize(item.price);
        let discount = sanitize(item.discount_price);

        Derived {
            effective_price: if discount > 0.0 { discount } else { price },
            has_discount: discount > 0.0,
            stock_status: if item.stock_quantity > LOW_STOCK_THRESHOLD {
                StockStatus::Plentiful
            } else {
                StockStatus::Low
            },
        }
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// An item together with its derived fields, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayItem {
    #[serde(flatten)]
    pub item: Item,
    #[serde(flatten)]
    pub derived: Derived,
}

impl DisplayItem {
    pub fn new(item: Item) -> Self {
        let derived = Derived::of(&item);
        DisplayItem { item, derived }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, discount_price: f64, stock_quantity: u32) -> Item {
        Item {
            id: "it-1".to_string(),
            name: "Carrot".to_string(),
            price,
            discount_price,
            unit: "kg".to_string(),
            stock_quantity,
            featured: false,
        }
    }

    #[test]
    fn test_list_price_when_no_discount() {
        let derived = Derived::of(&item(2.0, 0.0, 5));
        assert_eq!(derived.effective_price, 2.0);
        assert!(!derived.has_discount);
    }

    #[test]
    fn test_discount_price_when_discounted() {
        let derived = Derived::of(&item(3.0, 1.5, 50));
        assert_eq!(derived.effective_price, 1.5);
        assert!(derived.has_discount);
        assert!(derived.effective_price <= 3.0);
    }

    #[test]
    fn test_negative_discount_treated_as_none() {
        let derived = Derived::of(&item(2.0, -1.0, 5));
        assert_eq!(derived.effective_price, 2.0);
        assert!(!derived.has_discount);
    }

    #[test]
    fn test_non_finite_prices_collapse_to_zero() {
        let derived = Derived::of(&item(f64::NAN, f64::INFINITY, 5));
        assert_eq!(derived.effective_price, 0.0);
        assert!(!derived.has_discount);
    }

    #[test]
    fn test_stock_status_threshold() {
        assert_eq!(Derived::of(&item(1.0, 0.0, 11)).stock_status, StockStatus::Plentiful);
        assert_eq!(Derived::of(&item(1.0, 0.0, 10)).stock_status, StockStatus::Low);
        assert_eq!(Derived::of(&item(1.0, 0.0, 0)).stock_status, StockStatus::Low);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let it = item(3.0, 1.5, 10);
        assert_eq!(Derived::of(&it), Derived::of(&it));
    }
}
