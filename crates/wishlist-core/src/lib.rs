//! Wishlist Core
//!
//! Ordered wishlist state with stable item identity.
//! This crate has NO UI dependencies; the presentation layer drives it
//! through the command methods on [`WishlistStore`].

mod config;
mod draft;
mod error;
mod item;
mod price;
mod store;


pub use config::WishlistConfig;
pub use draft::Draft;
pub use error::{WishlistError, WishlistResult};
pub use item::{ItemId, WishlistItem};
pub use price::Price;
pub use store::WishlistStore;
