//! crates/basket_core/src/reconcile.rs
//!
//! Name-based matching applied when a client submits a replacement product
//! list. The replacement is a full overwrite; reconciliation only decides
//! whether each incoming entry keeps its paid status.

use tracing::debug;

use crate::domain::Product;

/// Matches each incoming entry against the existing list by name (first
/// match wins). If the matched entry's quantity differs, the incoming
/// entry's `is_paid` is forced to false: the chargeable amount changed, so
/// the item is no longer considered settled. Entries with no match pass
/// through unchanged. Price changes deliberately do not reset `is_paid`.
pub fn reconcile(existing: &[Product], mut incoming: Vec<Product>) -> Vec<Product> {
    for entry in &mut incoming {
        match existing.iter().find(|p| p.name == entry.name) {
            Some(previous) => {
                if previous.quantity != entry.quantity {
                    entry.is_paid = false;
                }
            }
            None => {
                debug!(name = %entry.name, "no existing product to reconcile against");
            }
        }
    }
    incoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn product(name: &str, quantity: f64, price: f64, bought: bool, paid: bool) -> Product {
        Product {
            name: name.to_string(),
            quantity,
            price,
            is_bought: bought,
            is_paid: paid,
            extra: Map::new(),
        }
    }

    #[test]
    fn quantity_change_resets_paid_status() {
        let existing = vec![product("X", 2.0, 5.0, true, true)];
        let incoming = vec![product("X", 3.0, 5.0, true, true)];
        let result = reconcile(&existing, incoming);
        assert!(!result[0].is_paid);
    }

    #[test]
    fn unchanged_quantity_keeps_paid_status() {
        let existing = vec![product("X", 2.0, 5.0, true, true)];
        let incoming = vec![product("X", 2.0, 9.0, true, true)];
        let result = reconcile(&existing, incoming);
        // Price moved but quantity did not; the entry stays settled.
        assert!(result[0].is_paid);
    }

    #[test]
    fn unmatched_entries_pass_through_unchanged() {
        let existing = vec![product("X", 2.0, 5.0, true, true)];
        let incoming = vec![product("New", 1.0, 4.0, true, true)];
        let result = reconcile(&existing, incoming);
        assert!(result[0].is_paid);
        assert_eq!(result[0].name, "New");
    }

    #[test]
    fn replacement_is_a_full_overwrite() {
        let existing = vec![
            product("Kept", 1.0, 1.0, false, false),
            product("Dropped", 1.0, 1.0, false, false),
        ];
        let incoming = vec![product("Kept", 1.0, 1.0, false, false)];
        let result = reconcile(&existing, incoming);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Kept");
    }
}
