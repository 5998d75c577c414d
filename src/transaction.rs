//! The sales transaction record model.

use crate::money::Money;
use serde::Deserialize;
use std::fmt;

/// One sales transaction row.
///
/// Fields appear in the same order as the columns of the input file, so the
/// record deserializes positionally. The total value is derived on demand and
/// never stored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// Transaction date as written in the file
    pub date: String,

    /// City the store is located in
    pub city: String,

    /// Store name
    pub store: String,

    /// Product category
    pub category: String,

    /// Product name
    pub item: String,

    /// Price of a single unit
    pub unit_price: Money,

    /// Number of units sold
    pub quantity: u32,
}

impl Transaction {
    /// Total value of the transaction: `unit_price * quantity`.
    ///
    /// Computed with exact decimal arithmetic, e.g. `19.99 * 3 == 59.97`.
    pub fn total_value(&self) -> Money {
        self.unit_price * self.quantity
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}/{} [{}] {}: {} x {} = {}",
            self.date,
            self.city,
            self.store,
            self.category,
            self.item,
            self.quantity,
            self.unit_price,
            self.total_value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample() -> Transaction {
        Transaction {
            date: "2024-01-01".to_string(),
            city: "Warszawa".to_string(),
            store: "SklepA".to_string(),
            category: "Spożywka".to_string(),
            item: "Chleb".to_string(),
            unit_price: Money::from_str("4.50").unwrap(),
            quantity: 2,
        }
    }

    #[test]
    fn test_total_value_is_price_times_quantity() {
        let tx = sample();
        assert_eq!(tx.total_value().to_string(), "9.00");
    }

    #[test]
    fn test_total_value_is_exact() {
        let tx = Transaction {
            unit_price: Money::from_str("19.99").unwrap(),
            quantity: 3,
            ..sample()
        };
        assert_eq!(tx.total_value().to_string(), "59.97");
    }

    #[test]
    fn test_display_renders_one_line() {
        let tx = sample();
        assert_eq!(
            tx.to_string(),
            "2024-01-01 Warszawa/SklepA [Spożywka] Chleb: 2 x 4.50 = 9.00"
        );
    }
}
