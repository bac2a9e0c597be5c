//! Wishlist Item
//!
//! A single entry of the wishlist. Identity is the [`ItemId`]; everything
//! else may be rewritten by an edit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::price::Price;

/// Stable handle for an item, minted by the store and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    /// Raw numeric value, e.g. for keying rendered rows
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<ItemId> for u32 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistItem {
    id: ItemId,
    /// Display name, never empty
    pub name: String,
    /// Optional URL
    pub link: Option<String>,
    pub price: Price,
}

impl WishlistItem {
    pub(crate) fn new(id: ItemId, name: String, link: Option<String>, price: Price) -> Self {
        Self { id, name, link, price }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }
}

/// Trimmed name, or `None` if nothing is left
pub(crate) fn normalize_name(name: &str) -> Option<String> {
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Empty link text means no link
pub(crate) fn normalize_link(link: Option<&str>) -> Option<String> {
    link.map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::from(7).to_string(), "item-7");
        assert_eq!(u32::from(ItemId::from(7)), 7);
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Bike "), Some("Bike".to_string()));
        assert_eq!(normalize_name(" \t "), None);
    }

    #[test]
    fn test_normalize_link() {
        assert_eq!(normalize_link(None), None);
        assert_eq!(normalize_link(Some("")), None);
        assert_eq!(
            normalize_link(Some(" https://example.com ")),
            Some("https://example.com".to_string())
        );
    }
}
