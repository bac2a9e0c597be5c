//! WishWhisper Frontend App
//!
//! Single card: the item form on top, the ranked wishlist below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{WishlistForm, WishlistList};
use crate::store::{AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // The wishlist lives for the page session only
    let store: AppStore = Store::new(AppState::default());
    provide_context(store);

    view! {
        <div class="wishlist-card">
            <header class="wishlist-header">
                <h1>"🎁 WishWhisper"</h1>
            </header>

            <main class="wishlist-content">
                <WishlistForm />
                <WishlistList />
            </main>

            <footer class="wishlist-footer">
                "Drag to reorder, click edit to modify items"
            </footer>
        </div>
    }
}
