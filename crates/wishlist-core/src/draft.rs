//! Draft Input
//!
//! What the user is currently typing into the form.

use serde::{Deserialize, Serialize};

use crate::item::WishlistItem;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub link: String,
    pub price: String,
}

impl Draft {
    /// Draft pre-filled from an existing item
    pub fn from_item(item: &WishlistItem) -> Self {
        Self {
            name: item.name.clone(),
            link: item.link.clone().unwrap_or_default(),
            price: item.price.input_text(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.link.is_empty() && self.price.is_empty()
    }
}
