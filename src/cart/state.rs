use serde::{Deserialize, Serialize};

use crate::cart::item::LineItem;

/// An ordered collection of line items representing one order.
///
/// Insertion order is preserved; it affects display only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Restaurant name shared by all items, if the cart has any.
    pub fn restaurant_name(&self) -> Option<&str> {
        self.items.first().map(|item| item.restaurant_name.as_str())
    }

    /// Return a new cart where the addressed item's quantity is
    /// `max(0, quantity + delta)` and every other item is unchanged.
    ///
    /// An id that matches no item leaves the cart value-equal; that is a
    /// defined no-op, not an error. Quantity never underflows: decrementing
    /// at zero stays at zero and the item remains in the cart.
    pub fn with_quantity(&self, id: &str, delta: i64) -> Self {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    let quantity = i64::from(item.quantity)
                        .saturating_add(delta)
                        .clamp(0, i64::from(u32::MAX)) as u32;
                    LineItem { quantity, ..item.clone() }
                } else {
                    item.clone()
                }
            })
            .collect();
        Self { items }
    }

    /// Total price over all items: `Σ price × quantity`.
    ///
    /// Derived on demand, never cached. Zero-quantity items stay in the
    /// cart and contribute zero.
    pub fn total(&self) -> u64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Cart {
        Cart::new(vec![LineItem::new(
            "1",
            "Chicken Schezwan Fried Rice & Chilli Chicken Sauce",
            "The Red Box",
            309,
            1,
        )])
    }

    #[test]
    fn total_of_seed_cart() {
        assert_eq!(seed().total(), 309);
    }

    #[test]
    fn increment_updates_total() {
        let cart = seed().with_quantity("1", 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total(), 618);
    }

    #[test]
    fn decrement_to_zero_keeps_item() {
        let cart = seed().with_quantity("1", -1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 0);
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn decrement_at_zero_clamps() {
        let cart = seed().with_quantity("1", -1).with_quantity("1", -1);
        assert_eq!(cart.items()[0].quantity, 0);
    }

    #[test]
    fn unknown_id_is_noop() {
        let cart = seed();
        assert_eq!(cart.with_quantity("missing", 1), cart);
    }

    #[test]
    fn zero_delta_is_noop() {
        let cart = seed();
        assert_eq!(cart.with_quantity("1", 0), cart);
    }

    #[test]
    fn update_does_not_touch_price_or_names() {
        let cart = seed().with_quantity("1", 1);
        let item = &cart.items()[0];
        assert_eq!(item.price, 309);
        assert_eq!(item.restaurant_name, "The Red Box");
    }
}
