//! Wishlist Form Component
//!
//! Name, link and price inputs bound to the form buffer. The same form
//! adds new items and saves the item being edited.

use leptos::prelude::*;

use crate::store::{
    run_command, submit_draft, update_draft, use_app_store, with_draft, with_wishlist,
    with_wishlist_untracked,
};

#[component]
pub fn WishlistForm() -> impl IntoView {
    let store = use_app_store();

    let is_editing = move || with_wishlist(&store, |w| w.is_editing());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let editing = with_wishlist_untracked(&store, |w| w.is_editing());
        match submit_draft(&store) {
            Some(id) if editing => log::debug!(target: "form", "Saved {}", id),
            Some(id) => log::debug!(target: "form", "Added {}", id),
            None => {}
        }
    };

    view! {
        <form class="wishlist-form" on:submit=submit>
            <input
                type="text"
                placeholder="Item Name"
                prop:value=move || with_draft(&store, |d| d.name.clone())
                on:input=move |ev| update_draft(&store, |d| d.name = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Item Link (Optional)"
                prop:value=move || with_draft(&store, |d| d.link.clone())
                on:input=move |ev| update_draft(&store, |d| d.link = event_target_value(&ev))
            />
            <input
                type="number"
                placeholder="Price (Optional)"
                prop:value=move || with_draft(&store, |d| d.price.clone())
                on:input=move |ev| update_draft(&store, |d| d.price = event_target_value(&ev))
            />

            <Show
                when=is_editing
                fallback=|| view! { <button type="submit" class="add-btn">"Add to Wishlist"</button> }
            >
                <div class="edit-actions">
                    <button type="submit" class="save-btn">"Save Changes"</button>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| run_command(&store, |w| w.cancel_edit())
                    >
                        "Cancel"
                    </button>
                </div>
            </Show>
        </form>
    }
}
