use crate::cart::Cart;
use crate::ui::mvi::UiState;

/// State of the checkout screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartScreenState {
    /// The order being edited. Replaced wholesale on every mutation.
    pub cart: Cart,
    /// Index of the focused line item. Quantity keys act on this item.
    pub focused: usize,
    /// Transient share link. `Some` while the share surface is open;
    /// cleared once the link is copied or the surface dismissed.
    pub share_link: Option<String>,
}

impl UiState for CartScreenState {}

impl CartScreenState {
    pub fn with_cart(cart: Cart) -> Self {
        Self {
            cart,
            focused: 0,
            share_link: None,
        }
    }

    /// Id of the focused item, if the cart is non-empty.
    pub fn focused_id(&self) -> Option<&str> {
        self.cart
            .items()
            .get(self.focused)
            .map(|item| item.id.as_str())
    }

    pub fn share_open(&self) -> bool {
        self.share_link.is_some()
    }
}
