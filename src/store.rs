//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use wishlist_core::{Draft, ItemId, WishlistStore};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The wishlist: items, committed draft and edit target
    pub wishlist: WishlistStore,
    /// Form input buffer; typing only touches this field
    pub draft: Draft,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Read the wishlist (tracked when called inside a reactive closure)
pub fn with_wishlist<R>(store: &AppStore, f: impl FnOnce(&WishlistStore) -> R) -> R {
    f(&store.wishlist().read())
}

/// Read the wishlist without subscribing, for event handlers
pub fn with_wishlist_untracked<R>(store: &AppStore, f: impl FnOnce(&WishlistStore) -> R) -> R {
    f(&store.wishlist().read_untracked())
}

/// Mutate the wishlist and notify subscribers
pub fn update_wishlist<R>(store: &AppStore, f: impl FnOnce(&mut WishlistStore) -> R) -> R {
    f(&mut store.wishlist().write())
}

/// Run a wishlist command, then mirror the core's draft into the form buffer
pub fn run_command<R>(store: &AppStore, f: impl FnOnce(&mut WishlistStore) -> R) -> R {
    let result = update_wishlist(store, f);
    let draft = with_wishlist_untracked(store, |w| w.draft().clone());
    if *store.draft().read_untracked() != draft {
        *store.draft().write() = draft;
    }
    result
}

/// Read the form buffer (tracked)
pub fn with_draft<R>(store: &AppStore, f: impl FnOnce(&Draft) -> R) -> R {
    f(&store.draft().read())
}

/// Edit the form buffer; the wishlist field is not notified
pub fn update_draft(store: &AppStore, f: impl FnOnce(&mut Draft)) {
    f(&mut store.draft().write());
}

/// Load the form buffer into the core and commit it (add or save)
pub fn submit_draft(store: &AppStore) -> Option<ItemId> {
    let draft = store.draft().get_untracked();
    run_command(store, |w| {
        w.set_draft(draft);
        w.submit_draft().map(|item| item.id())
    })
}
