//! crates/basket_core/src/payment.rs
//!
//! Balance computation and the payment allocator.
//!
//! A payment is spread greedily over the account's bought, unpaid products
//! in stored order. Items are settled whole or not at all; a partial
//! payment never attaches to an item.

use crate::domain::{Balance, Product};

/// The result of one allocation pass over a product list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaymentOutcome {
    /// At least one item was settled by this call.
    Applied {
        /// The amount actually consumed from the submitted payment.
        paid_now: f64,
    },
    /// Every bought item was already paid before this call.
    AlreadySettled,
    /// Items were outstanding but the amount covered none of them.
    Insufficient,
}

/// Sums `quantity * price` over bought products into `total`, and over
/// bought-and-paid products into `paid`.
pub fn compute_balance(products: &[Product]) -> Balance {
    let mut total = 0.0;
    let mut paid = 0.0;
    for product in products.iter().filter(|p| p.is_bought) {
        let line = product.line_total();
        total += line;
        if product.is_paid {
            paid += line;
        }
    }
    Balance {
        total,
        paid,
        remaining: total - paid,
    }
}

/// Walks the products in listing order and marks bought, unpaid entries as
/// paid while `amount` still covers their price. A zero or negative price
/// settles for free. An entry the amount cannot cover is skipped, not
/// split; the walk continues to the next bought item.
pub fn apply_payment(products: &mut [Product], mut amount: f64) -> PaymentOutcome {
    let mut outstanding = false;
    let mut settled_this_call = 0usize;
    let mut paid_now = 0.0;

    for product in products.iter_mut() {
        if !product.is_bought || product.is_paid {
            continue;
        }
        outstanding = true;
        if product.price <= 0.0 {
            product.is_paid = true;
            settled_this_call += 1;
            continue;
        }
        if amount >= product.price {
            product.is_paid = true;
            amount -= product.price;
            paid_now += product.price;
            settled_this_call += 1;
        }
    }

    if !outstanding {
        PaymentOutcome::AlreadySettled
    } else if settled_this_call == 0 {
        PaymentOutcome::Insufficient
    } else {
        PaymentOutcome::Applied { paid_now }
    }
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
    fn balance_ignores_unbought_products() {
        let products = vec![
            product("X", 2.0, 5.0, true, false),
            product("Y", 3.0, 4.0, false, false),
        ];
        let balance = compute_balance(&products);
        assert_eq!(balance.total, 10.0);
        assert_eq!(balance.paid, 0.0);
        assert_eq!(balance.remaining, 10.0);
    }

    #[test]
    fn balance_remaining_is_total_minus_paid() {
        let products = vec![
            product("X", 2.0, 5.0, true, true),
            product("Y", 1.0, 7.0, true, false),
        ];
        let balance = compute_balance(&products);
        assert_eq!(balance.total, 17.0);
        assert_eq!(balance.paid, 10.0);
        assert_eq!(balance.remaining, balance.total - balance.paid);
        assert!(balance.total >= balance.paid && balance.paid >= 0.0);
    }

    #[test]
    fn exact_amount_settles_single_item() {
        let mut products = vec![product("X", 2.0, 5.0, true, false)];
        let outcome = apply_payment(&mut products, 5.0);
        assert_eq!(outcome, PaymentOutcome::Applied { paid_now: 5.0 });
        assert!(products[0].is_paid);
    }

    #[test]
    fn insufficient_amount_settles_nothing() {
        let mut products = vec![product("X", 2.0, 5.0, true, false)];
        let outcome = apply_payment(&mut products, 3.0);
        assert_eq!(outcome, PaymentOutcome::Insufficient);
        assert!(!products[0].is_paid);
    }

    #[test]
    fn fully_paid_list_reports_already_settled() {
        let mut products = vec![product("X", 2.0, 5.0, true, true)];
        let outcome = apply_payment(&mut products, 5.0);
        assert_eq!(outcome, PaymentOutcome::AlreadySettled);
    }

    #[test]
    fn allocation_is_first_bought_first_paid() {
        // 4 covers A(3) but then not B(3); C(1) is still reachable.
        let mut products = vec![
            product("A", 1.0, 3.0, true, false),
            product("B", 1.0, 3.0, true, false),
            product("C", 1.0, 1.0, true, false),
        ];
        let outcome = apply_payment(&mut products, 4.0);
        assert_eq!(outcome, PaymentOutcome::Applied { paid_now: 4.0 });
        assert!(products[0].is_paid);
        assert!(!products[1].is_paid);
        assert!(products[2].is_paid);
    }

    #[test]
    fn zero_priced_bought_item_settles_for_free() {
        let mut products = vec![product("Freebie", 1.0, 0.0, true, false)];
        let outcome = apply_payment(&mut products, 2.0);
        assert_eq!(outcome, PaymentOutcome::Applied { paid_now: 0.0 });
        assert!(products[0].is_paid);
    }

    #[test]
    fn paid_now_never_exceeds_matched_prices() {
        let mut products = vec![
            product("A", 1.0, 2.0, true, false),
            product("B", 1.0, 2.0, true, false),
        ];
        let outcome = apply_payment(&mut products, 100.0);
        assert_eq!(outcome, PaymentOutcome::Applied { paid_now: 4.0 });
    }

    #[test]
    fn non_bought_items_are_never_touched() {
        let mut products = vec![product("X", 1.0, 2.0, false, false)];
        let outcome = apply_payment(&mut products, 10.0);
        assert_eq!(outcome, PaymentOutcome::AlreadySettled);
        assert!(!products[0].is_paid);
    }
}
