//! Wishlist List Component
//!
//! Ranked rows with drag-and-drop reordering.
//! Uses leptos-dragdrop with explicit drop zones between rows.

use leptos::prelude::*;
use wishlist_core::ItemId;

use crate::components::WishlistRow;
use crate::store::{update_wishlist, use_app_store, with_wishlist};

use leptos_dragdrop::*;

/// Wishlist rows with DnD support; hidden while the list is empty
#[component]
pub fn WishlistList() -> impl IntoView {
    let store = use_app_store();

    let dnd = create_dnd_signals();

    // Releasing outside any row or zone never reaches the store
    bind_global_mouseup(dnd, move |dragged_id, target| {
        let dragged = ItemId::from(dragged_id);
        let moved = update_wishlist(&store, |w| match target {
            DropTarget::Item(target_id) => w.drop_on_item(dragged, ItemId::from(target_id)),
            DropTarget::Slot(slot) => w.drop_in_slot(dragged, slot),
        });
        log::debug!(target: "dnd", "Drop on {:?}: dragged={}, moved={}", target, dragged, moved);
    });

    let has_items = move || with_wishlist(&store, |w| !w.is_empty());

    let rows = move || {
        with_wishlist(&store, |w| {
            w.items()
                .iter()
                .enumerate()
                .map(|(index, item)| (index, item.clone(), w.display_price(&item.price)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show when=has_items>
            <div class="wishlist-items">
                // Gap above the first row
                {leptos::component::component_view(&DropZone, DropZoneProps { dnd, slot: 0 })}

                <For
                    each=rows
                    key=|(index, item, price)| {
                        (item.id(), *index, item.name.clone(), item.link.clone(), price.clone())
                    }
                    children=move |(index, item, price)| {
                        let item_id = item.id();
                        let id = item_id.get();

                        let on_mousedown = make_on_mousedown(dnd, id);
                        let on_mouseenter = make_on_item_mouseenter(dnd, id);
                        let on_mouseleave = make_on_mouseleave(dnd);

                        let is_drop_target = move || {
                            matches!(dnd.drop_target_read.get(), Some(DropTarget::Item(tid)) if tid == id)
                        };
                        let is_editing = move || with_wishlist(&store, |w| w.editing() == Some(item_id));

                        let row_class = move || {
                            let mut c = String::from("wishlist-row-wrapper");
                            if dnd.is_dragging(id) { c.push_str(" dragging"); }
                            if is_drop_target() { c.push_str(" drop-target"); }
                            if is_editing() { c.push_str(" editing"); }
                            c
                        };

                        view! {
                            <div
                                class=row_class
                                on:mousedown=on_mousedown
                                on:mouseenter=on_mouseenter
                                on:mouseleave=on_mouseleave
                            >
                                <WishlistRow item=item rank={index + 1} price=price />
                            </div>

                            // Gap below this row
                            {leptos::component::component_view(&DropZone, DropZoneProps { dnd, slot: index + 1 })}
                        }
                    }
                />
            </div>
        </Show>
    }
}

/// Drop zone component - the gap above row `slot`
#[component]
pub fn DropZone(
    dnd: DndSignals,
    slot: usize,
) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_active = move || matches!(dnd.drop_target_read.get(), Some(DropTarget::Slot(s)) if s == slot);

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !dnd.is_active() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
