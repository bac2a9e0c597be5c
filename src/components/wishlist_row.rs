//! Wishlist Row Component
//!
//! One ranked entry: grip, rank, name, optional link, price, and the
//! edit/delete buttons.

use leptos::prelude::*;
use wishlist_core::WishlistItem;

use crate::store::{run_command, use_app_store};

#[component]
pub fn WishlistRow(
    item: WishlistItem,
    /// 1-based position in the list
    rank: usize,
    /// Price as it should be displayed
    price: String,
) -> impl IntoView {
    let store = use_app_store();

    let id = item.id();
    let name = item.name.clone();
    let link = item.link.clone();

    view! {
        <div class="wishlist-row">
            <span class="drag-handle" title="Drag to reorder">"⋮⋮"</span>

            <div class="wishlist-row-body">
                <div class="item-title">
                    <span class="item-rank">{format!("#{}", rank)}</span>
                    <span class="item-name">{name}</span>
                </div>
                {link.map(|href| view! {
                    <a class="item-link" href=href target="_blank" rel="noopener noreferrer">
                        "View Link"
                    </a>
                })}
                <div class="item-price">{price}</div>
            </div>

            <div class="row-actions">
                <button
                    class="edit-btn"
                    title="Edit"
                    on:click=move |_| run_command(&store, |w| { w.begin_edit(id); })
                >
                    "✎"
                </button>
                <button
                    class="delete-btn"
                    title="Delete"
                    on:click=move |_| run_command(&store, |w| { w.remove_item(id); })
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
