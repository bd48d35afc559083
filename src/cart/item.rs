use serde::{Deserialize, Serialize};

/// A single dish entry in the cart.
///
/// Field order is the canonical schema for the share token: `id`,
/// `itemName`, `restaurantName`, `price`, `quantity`. Reordering fields
/// changes the wire format and breaks companion decoders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Unique identifier, stable for the item's lifetime.
    pub id: String,
    /// Display name of the dish.
    pub item_name: String,
    /// Restaurant the dish belongs to. Every item in a cart shares the
    /// same restaurant (single-vendor order).
    pub restaurant_name: String,
    /// Unit price in currency minor units. Fixed at creation.
    pub price: u64,
    /// Order quantity. Clamped at zero on decrement, never negative.
    pub quantity: u32,
}

impl LineItem {
    pub fn new(
        id: impl Into<String>,
        item_name: impl Into<String>,
        restaurant_name: impl Into<String>,
        price: u64,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            item_name: item_name.into(),
            restaurant_name: restaurant_name.into(),
            price,
            quantity,
        }
    }

    /// Line subtotal: unit price times quantity.
    pub fn subtotal(&self) -> u64 {
        self.price * u64::from(self.quantity)
    }
}
