//! Wishlist Store
//!
//! Owns the ordered item list, the form draft and the edit target.
//! Rank is position: `items[0]` is rank 1.
//!
//! Every command either fully applies or leaves the store untouched.
//! The plain command methods swallow rejections (logging them at debug
//! level); the `try_*` variants return the [`WishlistError`] instead.

use crate::config::WishlistConfig;
use crate::draft::Draft;
use crate::error::{WishlistError, WishlistResult};
use crate::item::{normalize_link, normalize_name, ItemId, WishlistItem};
use crate::price::Price;

#[derive(Debug, Clone, PartialEq)]
pub struct WishlistStore {
    items: Vec<WishlistItem>,
    draft: Draft,
    /// Item bound to the form; `None` is add mode
    editing: Option<ItemId>,
    next_id: u32,
    config: WishlistConfig,
}

impl Default for WishlistStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a rejected command into a no-op
fn or_noop<T>(op: &str, result: WishlistResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("{} ignored: {}", op, e);
            None
        }
    }
}

impl WishlistStore {
    pub fn new() -> Self {
        Self::with_config(WishlistConfig::default())
    }

    pub fn with_config(config: WishlistConfig) -> Self {
        Self {
            items: Vec::new(),
            draft: Draft::default(),
            editing: None,
            next_id: 1,
            config,
        }
    }

    // ========================
    // Queries
    // ========================

    /// Items in rank order
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&WishlistItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// 1-based display rank
    pub fn rank_of(&self, id: ItemId) -> Option<usize> {
        self.position_of(id).map(|index| index + 1)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn editing(&self) -> Option<ItemId> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn config(&self) -> &WishlistConfig {
        &self.config
    }

    /// Price text as it should be displayed
    pub fn display_price(&self, price: &Price) -> String {
        price.format_with(&self.config)
    }

    // ========================
    // Draft Input
    // ========================

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_draft_link(&mut self, link: impl Into<String>) {
        self.draft.link = link.into();
    }

    pub fn set_draft_price(&mut self, price: impl Into<String>) {
        self.draft.price = price.into();
    }

    /// Replace the whole draft, e.g. with the form's input buffer
    pub fn set_draft(&mut self, draft: Draft) {
        self.draft = draft;
    }

    /// Commit the draft: add a new item, or save the one being edited
    pub fn submit_draft(&mut self) -> Option<&WishlistItem> {
        if self.is_editing() {
            self.save_edit()
        } else {
            let draft = self.draft.clone();
            self.add_item(&draft.name, Some(&draft.link), Some(&draft.price))
        }
    }

    // ========================
    // Commands
    // ========================

    /// Append a new item. Blank names are ignored.
    pub fn add_item(
        &mut self,
        name: &str,
        link: Option<&str>,
        price_text: Option<&str>,
    ) -> Option<&WishlistItem> {
        or_noop("add_item", self.try_add_item(name, link, price_text))
    }

    pub fn try_add_item(
        &mut self,
        name: &str,
        link: Option<&str>,
        price_text: Option<&str>,
    ) -> WishlistResult<&WishlistItem> {
        let name = normalize_name(name).ok_or(WishlistError::EmptyName)?;
        let next_id = self.next_id.checked_add(1).ok_or(WishlistError::IdsExhausted)?;
        let id = ItemId::from(self.next_id);
        self.next_id = next_id;

        let item = WishlistItem::new(id, name, normalize_link(link), Price::from_input(price_text));
        log::debug!("add {} at rank {}", id, self.items.len() + 1);
        self.items.push(item);
        self.reset_form();
        Ok(&self.items[self.items.len() - 1])
    }

    /// Bind the form to an existing item and load its fields into the draft
    pub fn begin_edit(&mut self, id: ItemId) -> Option<&Draft> {
        or_noop("begin_edit", self.try_begin_edit(id))
    }

    pub fn try_begin_edit(&mut self, id: ItemId) -> WishlistResult<&Draft> {
        let item = self.get(id).ok_or(WishlistError::UnknownItem(id))?;
        self.draft = Draft::from_item(item);
        self.editing = Some(id);
        log::debug!("editing {}", id);
        Ok(&self.draft)
    }

    /// Write the draft back into the item being edited, keeping its id and rank
    pub fn save_edit(&mut self) -> Option<&WishlistItem> {
        or_noop("save_edit", self.try_save_edit())
    }

    pub fn try_save_edit(&mut self) -> WishlistResult<&WishlistItem> {
        let id = self.editing.ok_or(WishlistError::NotEditing)?;
        let index = self.position_of(id).ok_or(WishlistError::UnknownItem(id))?;
        let name = normalize_name(&self.draft.name).ok_or(WishlistError::EmptyName)?;

        let link = normalize_link(Some(&self.draft.link));
        let price = Price::parse(&self.draft.price);
        let item = &mut self.items[index];
        item.name = name;
        item.link = link;
        item.price = price;
        log::debug!("saved {} at rank {}", id, index + 1);

        self.reset_form();
        Ok(&self.items[index])
    }

    /// Leave edit mode without touching any item
    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<WishlistItem> {
        or_noop("remove_item", self.try_remove_item(id))
    }

    pub fn try_remove_item(&mut self, id: ItemId) -> WishlistResult<WishlistItem> {
        let index = self.position_of(id).ok_or(WishlistError::UnknownItem(id))?;
        let removed = self.items.remove(index);
        if self.editing == Some(id) {
            self.reset_form();
        }
        log::debug!("removed {} from rank {}", id, index + 1);
        Ok(removed)
    }

    /// Move the item at `from` so that it ends up at index `to`.
    ///
    /// `to` is an index into the list after the item has been taken out,
    /// so both indices must be below `len()`.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        or_noop("reorder", self.try_reorder(from, to)).is_some()
    }

    pub fn try_reorder(&mut self, from: usize, to: usize) -> WishlistResult<()> {
        let len = self.items.len();
        if from >= len || to >= len {
            return Err(WishlistError::IndexOutOfRange { from, to, len });
        }
        if from != to {
            let item = self.items.remove(from);
            self.items.insert(to, item);
            log::debug!("moved rank {} to rank {}", from + 1, to + 1);
        }
        Ok(())
    }

    /// Move an item, addressed by id, to index `to`
    pub fn move_item(&mut self, id: ItemId, to: usize) -> bool {
        match self.position_of(id) {
            Some(from) => self.reorder(from, to),
            None => {
                log::debug!("move_item ignored: {}", WishlistError::UnknownItem(id));
                false
            }
        }
    }

    /// Drop `dragged` onto the row of `target`: it takes the target's index
    pub fn drop_on_item(&mut self, dragged: ItemId, target: ItemId) -> bool {
        match self.position_of(target) {
            Some(to) => self.move_item(dragged, to),
            None => {
                log::debug!("drop_on_item ignored: {}", WishlistError::UnknownItem(target));
                false
            }
        }
    }

    /// Drop `dragged` into gap `slot`, see [`WishlistStore::move_to_slot`]
    pub fn drop_in_slot(&mut self, dragged: ItemId, slot: usize) -> bool {
        match self.position_of(dragged) {
            Some(from) => self.move_to_slot(from, slot),
            None => {
                log::debug!("drop_in_slot ignored: {}", WishlistError::UnknownItem(dragged));
                false
            }
        }
    }

    /// Move the item at `from` into gap `slot`.
    ///
    /// Gap `n` sits directly above row `n`; gap `len()` is below the last row.
    pub fn move_to_slot(&mut self, from: usize, slot: usize) -> bool {
        if slot > self.items.len() {
            log::debug!("move_to_slot ignored: no gap {}", slot);
            return false;
        }
        let to = if slot > from { slot - 1 } else { slot };
        self.reorder(from, to)
    }

    fn reset_form(&mut self) {
        self.draft.clear();
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(store: &WishlistStore) -> Vec<&str> {
        store.items().iter().map(|i| i.name.as_str()).collect()
    }

    fn abc() -> WishlistStore {
        let mut store = WishlistStore::new();
        store.add_item("A", None, None);
        store.add_item("B", None, None);
        store.add_item("C", None, None);
        store
    }

    #[test]
    fn test_try_add_blank_name() {
        let mut store = WishlistStore::new();
        assert_eq!(store.try_add_item("  ", None, None).unwrap_err(), WishlistError::EmptyName);
        assert!(store.is_empty());
    }

    #[test]
    fn test_try_reorder_out_of_range() {
        let mut store = abc();
        let err = store.try_reorder(0, 3).unwrap_err();
        assert_eq!(err, WishlistError::IndexOutOfRange { from: 0, to: 3, len: 3 });
        assert_eq!(names(&store), ["A", "B", "C"]);
    }

    #[test]
    fn test_reorder_same_index() {
        let mut store = abc();
        assert!(store.reorder(1, 1));
        assert_eq!(names(&store), ["A", "B", "C"]);
    }

    #[test]
    fn test_move_to_slot() {
        // Gap below the last row
        let mut store = abc();
        assert!(store.move_to_slot(0, 3));
        assert_eq!(names(&store), ["B", "C", "A"]);

        // Gap above the first row
        let mut store = abc();
        assert!(store.move_to_slot(2, 0));
        assert_eq!(names(&store), ["C", "A", "B"]);

        // Gaps directly around the dragged row leave it in place
        let mut store = abc();
        assert!(store.move_to_slot(1, 1));
        assert!(store.move_to_slot(1, 2));
        assert_eq!(names(&store), ["A", "B", "C"]);

        let mut store = abc();
        assert!(!store.move_to_slot(0, 4));
        assert!(!store.move_to_slot(5, 1));
        assert_eq!(names(&store), ["A", "B", "C"]);
    }

    #[test]
    fn test_move_item_by_id() {
        let mut store = abc();
        let c = store.items()[2].id();
        assert!(store.move_item(c, 0));
        assert_eq!(names(&store), ["C", "A", "B"]);
        assert_eq!(store.rank_of(c), Some(1));
    }

    #[test]
    fn test_add_when_ids_exhausted() {
        let mut store = abc();
        store.next_id = u32::MAX;
        let before = store.clone();

        assert_eq!(store.try_add_item("D", None, None).unwrap_err(), WishlistError::IdsExhausted);
        assert!(store.add_item("D", None, None).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn test_last_id_before_overflow() {
        let mut store = WishlistStore::new();
        store.next_id = u32::MAX - 1;

        let id = store.add_item("Z", None, None).unwrap().id();
        assert_eq!(id.get(), u32::MAX - 1);
        assert!(store.add_item("Y", None, None).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_try_save_without_edit() {
        let mut store = abc();
        assert_eq!(store.try_save_edit().unwrap_err(), WishlistError::NotEditing);
    }
}
