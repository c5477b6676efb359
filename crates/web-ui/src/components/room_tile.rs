//! Floor-plan canvas pieces

use dioxus::prelude::*;

use crate::editor::Point;
use crate::models::{RoomStatus, RoomTile};

/// Props for the RoomTileView component
#[derive(Props, Clone, PartialEq)]
pub struct RoomTileViewProps {
    pub tile: RoomTile,
    /// Whether this tile is the one being dragged
    pub dragging: bool,
    /// Tile id and the client-space pointer position where the drag started
    pub ongrab: EventHandler<(i64, Point)>,
}

/// One absolutely positioned room on the canvas
#[component]
pub fn RoomTileView(props: RoomTileViewProps) -> Element {
    let tile = &props.tile;
    let (x, y) = tile.display_position();
    let width = tile.effective_width();
    let height = tile.effective_height();
    let color = tile.status.tile_class();
    let lifted = if props.dragging {
        "cursor-grabbing opacity-80 shadow-xl z-10"
    } else {
        "cursor-grab shadow"
    };
    let tile_id = tile.id;
    let type_name = tile.short_type_name();

    rsx! {
        div {
            class: "absolute flex flex-col items-center justify-center rounded text-white select-none {color} {lifted}",
            style: "left: {x}px; top: {y}px; width: {width}px; height: {height}px;",
            onmousedown: move |evt| {
                evt.prevent_default();
                let pointer = evt.client_coordinates();
                props.ongrab.call((tile_id, Point::new(pointer.x, pointer.y)));
            },
            span { class: "font-bold text-sm", "{tile.room_number}" }
            span { class: "text-xs opacity-90", "{type_name}" }
            if tile.is_blockchain_enabled {
                span { class: "text-xs", title: "Blockchain enabled", "⛓" }
            }
        }
    }
}

/// Status colors shown under the canvas
#[component]
pub fn StatusLegend() -> Element {
    let entries = [
        RoomStatus::Available,
        RoomStatus::Occupied,
        RoomStatus::Maintenance,
        RoomStatus::OutOfOrder,
    ];

    rsx! {
        div { class: "flex flex-wrap gap-4 text-sm text-gray-700",
            for status in entries {
                div { class: "flex items-center gap-2",
                    span { class: "inline-block h-4 w-4 rounded {status.tile_class()}" }
                    span { "{status}" }
                }
            }
            div { class: "flex items-center gap-2",
                span { "⛓" }
                span { "Blockchain enabled" }
            }
        }
    }
}
