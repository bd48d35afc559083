//! Cart domain model: line items, quantity updates, total price.
//!
//! All state transitions are pure — each operation returns a new value and
//! leaves the input untouched, so the UI layer can hold the cart as
//! replaceable immutable state.

mod item;
mod state;

pub use item::LineItem;
pub use state::Cart;
