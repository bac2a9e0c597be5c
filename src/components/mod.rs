//! UI Components
//!
//! Leptos components for the wishlist card.

mod wishlist_form;
mod wishlist_list;
mod wishlist_row;

pub use wishlist_form::WishlistForm;
pub use wishlist_list::WishlistList;
pub use wishlist_row::WishlistRow;
