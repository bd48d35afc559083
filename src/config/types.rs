use serde::{Deserialize, Serialize};

use crate::cart::{Cart, LineItem};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub share: ShareConfig,
    /// Seed cart contents. Reload resets to this state; there is no
    /// persistence of in-session edits.
    #[serde(default = "default_items", rename = "item")]
    pub items: Vec<SeedItem>,
}

/// Share-link settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Origin (scheme + host) prefixed to generated share links.
    #[serde(default = "default_origin")]
    pub origin: String,
}

/// One seed line item as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedItem {
    pub id: String,
    pub name: String,
    pub restaurant: String,
    pub price: u64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_origin() -> String {
    "https://food.example.com".to_string()
}

fn default_quantity() -> u32 {
    1
}

fn default_items() -> Vec<SeedItem> {
    vec![SeedItem {
        id: "1".to_string(),
        name: "Chicken Schezwan Fried Rice & Chilli Chicken Sauce".to_string(),
        restaurant: "The Red Box".to_string(),
        price: 309,
        quantity: 1,
    }]
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            share: ShareConfig::default(),
            items: default_items(),
        }
    }
}

impl Config {
    /// Build the initial cart from the configured seed items.
    pub fn seed_cart(&self) -> Cart {
        let items = self
            .items
            .iter()
            .map(|item| {
                LineItem::new(
                    item.id.clone(),
                    item.name.clone(),
                    item.restaurant.clone(),
                    item.price,
                    item.quantity,
                )
            })
            .collect();
        Cart::new(items)
    }
}
