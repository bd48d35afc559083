use crate::clipboard::ClipboardHandler;
use crate::config::Config;
use crate::share;
use crate::ui::cart::{CartIntent, CartReducer, CartScreenState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Coordinator for the checkout screen.
///
/// Owns the screen state and mediates the external resources the pure
/// reducer cannot touch: the configured origin and the system clipboard.
pub struct App {
    should_quit: bool,
    config: Config,
    /// Checkout screen state (MVI pattern).
    screen: CartScreenState,
    /// Clipboard handle (resource, managed outside MVI). `None` on
    /// headless environments; copying then only clears the share surface.
    clipboard: Option<ClipboardHandler>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let screen = CartScreenState::with_cart(config.seed_cart());
        let clipboard = match ClipboardHandler::new() {
            Ok(handler) => Some(handler),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard unavailable");
                None
            }
        };
        Self {
            should_quit: false,
            config,
            screen,
            clipboard,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Get the current checkout screen state.
    pub fn screen(&self) -> &CartScreenState {
        &self.screen
    }

    /// Dispatch an intent to the cart reducer.
    pub fn dispatch(&mut self, intent: CartIntent) {
        dispatch_mvi!(self, screen, CartReducer, intent);
    }

    pub fn move_focus_up(&mut self) {
        self.dispatch(CartIntent::MoveUp);
    }

    pub fn move_focus_down(&mut self) {
        self.dispatch(CartIntent::MoveDown);
    }

    /// Bump the focused item's quantity by ±1.
    pub fn change_focused_quantity(&mut self, delta: i64) {
        let Some(id) = self.screen.focused_id().map(str::to_string) else {
            return;
        };
        self.dispatch(CartIntent::ChangeQuantity { id, delta });
    }

    /// Generate a share link for the current cart and open the share
    /// surface. On encoding failure the surface stays closed and no
    /// partial link is surfaced.
    pub fn generate_share_link(&mut self) {
        match share::share_link(&self.config.share.origin, &self.screen.cart) {
            Ok(link) => self.dispatch(CartIntent::ShareLinkReady { link }),
            Err(err) => {
                tracing::warn!(error = %err, "share link generation failed");
            }
        }
    }

    /// Copy the open share link to the clipboard and close the surface.
    ///
    /// The clipboard write is fire-and-forget: a failure is logged but the
    /// transient link is cleared either way.
    pub fn copy_share_link(&mut self) {
        let Some(link) = self.screen.share_link.clone() else {
            return;
        };
        if let Some(clipboard) = &mut self.clipboard {
            if let Err(err) = clipboard.set_text(&link) {
                tracing::warn!(error = %err, "clipboard write failed");
            }
        }
        self.dispatch(CartIntent::ClearShareLink);
    }

    /// Close the share surface without copying.
    pub fn dismiss_share(&mut self) {
        self.dispatch(CartIntent::ClearShareLink);
    }
}
