//! Wishlist Configuration
//!
//! Display settings for prices.

use serde::{Deserialize, Serialize};

/// Price display settings; missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WishlistConfig {
    /// Prefix put in front of formatted amounts
    pub currency_symbol: String,
    /// Text shown when an item has no price
    pub not_available_label: String,
}

impl Default for WishlistConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            not_available_label: "N/A".to_string(),
        }
    }
}
