use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CartIntent {
    /// Move focus to the previous line item, wrapping at the top.
    MoveUp,
    /// Move focus to the next line item, wrapping at the bottom.
    MoveDown,
    /// Adjust the addressed item's quantity by `delta`, clamped at zero.
    /// An id matching no item is a no-op.
    ChangeQuantity { id: String, delta: i64 },
    /// A share link was generated; open the share surface with it.
    ShareLinkReady { link: String },
    /// Clear the transient share link. Used both when the link has been
    /// copied and when the share surface is dismissed.
    ClearShareLink,
}

impl Intent for CartIntent {}
