//! Cinema-style auto-arrange
//!
//! Every tile gets a fixed 100x70 cell, whatever size it had before.

use crate::models::{DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH, LayoutUpdate, RoomTile, UiError, UiResult};

pub const LEFT_MARGIN: i32 = 50;
pub const TOP_MARGIN: i32 = 50;
pub const HORIZONTAL_GAP: i32 = 15;
pub const VERTICAL_GAP: i32 = 20;
/// Column count offered in the prompt
pub const DEFAULT_COLUMNS: u32 = 8;

/// `(row, column)` of list index `index`
pub fn cell_of(index: usize, columns: u32) -> (usize, usize) {
    let columns = columns as usize;
    (index / columns, index % columns)
}

/// Top-left corner of list index `index`
pub fn cell_origin(index: usize, columns: u32) -> (i32, i32) {
    let (row, col) = cell_of(index, columns);
    let x = LEFT_MARGIN + col as i32 * (DEFAULT_TILE_WIDTH + HORIZONTAL_GAP);
    let y = TOP_MARGIN + row as i32 * (DEFAULT_TILE_HEIGHT + VERTICAL_GAP);
    (x, y)
}

/// Batch placing `tiles` row by row in list order
pub fn arrange(tiles: &[RoomTile], columns: u32) -> UiResult<Vec<LayoutUpdate>> {
    if columns == 0 {
        return Err(UiError::validation_field("columns", "Columns must be at least 1"));
    }
    if tiles.is_empty() {
        return Err(UiError::validation("There are no rooms to arrange"));
    }

    Ok(tiles
        .iter()
        .enumerate()
        .map(|(index, tile)| {
            let (x, y) = cell_origin(index, columns);
            LayoutUpdate {
                room_id: tile.id,
                layout_x: Some(x),
                layout_y: Some(y),
                layout_width: DEFAULT_TILE_WIDTH,
                layout_height: DEFAULT_TILE_HEIGHT,
            }
        })
        .collect())
}

#[cfg(test)]
pub(crate) fn sample_tiles(count: usize) -> Vec<RoomTile> {
    use crate::models::RoomStatus;

    (0..count)
        .map(|i| RoomTile {
            id: i as i64 + 1,
            room_number: format!("{}", 101 + i),
            room_type_id: 1,
            room_type_name: "Meeting Room".to_string(),
            floor: 1,
            status: RoomStatus::Available,
            layout_x: Some(400 - i as i32),
            layout_y: None,
            layout_width: 140,
            layout_height: 90,
            is_blockchain_enabled: i % 2 == 0,
        })
        .collect()
}
