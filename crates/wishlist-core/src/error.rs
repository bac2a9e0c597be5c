//! Wishlist Errors
//!
//! Reasons a command is rejected. The command methods on the store turn
//! these into silent no-ops; the `try_*` variants hand them back.

use thiserror::Error;

use crate::item::ItemId;

/// Common result type for store operations
pub type WishlistResult<T> = Result<T, WishlistError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WishlistError {
    #[error("item name is empty")]
    EmptyName,
    #[error("no item with id {0}")]
    UnknownItem(ItemId),
    #[error("no item is being edited")]
    NotEditing,
    #[error("no item ids left")]
    IdsExhausted,
    #[error("cannot move from index {from} to {to} in a list of {len}")]
    IndexOutOfRange { from: usize, to: usize, len: usize },
}
