//! Layout editor state and its pure transitions
//!
//! Nothing here performs I/O. The controller drives network calls around
//! these transitions, and the canvas page feeds pointer events into them.

use crate::editor::geometry::{CanvasBounds, GridSettings, Point, place_tile};
use crate::models::{LayoutUpdate, RoomTile, RoomType};

/// Pointer interaction with the canvas
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// `offset` is the pointer position minus the tile's top-left at drag start
    Dragging { tile_id: i64, offset: Point },
}

impl DragState {
    pub fn dragged_tile(&self) -> Option<i64> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { tile_id, .. } => Some(*tile_id),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorState {
    pub floors: Vec<i32>,
    pub selected_floor: Option<i32>,
    pub room_types: Vec<RoomType>,
    pub room_type_filter: Option<i64>,
    pub tiles: Vec<RoomTile>,
    pub grid: GridSettings,
    pub canvas: CanvasBounds,
    drag: DragState,
    dirty: bool,
    /// Bumped on every local edit
    revision: u64,
    /// Revision captured by the save in flight
    saved_revision: Option<u64>,
    saving: bool,
    loading: bool,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// Unsaved position changes exist
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// A save, arrange or reset request is in flight
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_save(&self) -> bool {
        self.dirty && !self.saving
    }

    pub fn tile(&self, tile_id: i64) -> Option<&RoomTile> {
        self.tiles.iter().find(|t| t.id == tile_id)
    }

    /// Replace the floor list, keeping the selection if it still exists
    pub fn set_floors(&mut self, floors: Vec<i32>) {
        let keep = self
            .selected_floor
            .is_some_and(|floor| floors.contains(&floor));
        if !keep {
            self.selected_floor = floors.first().copied();
        }
        self.floors = floors;
    }

    pub fn select_floor(&mut self, floor: i32) {
        self.selected_floor = Some(floor);
    }

    pub fn set_room_types(&mut self, room_types: Vec<RoomType>) {
        self.room_types = room_types;
    }

    pub fn set_room_type_filter(&mut self, room_type_id: Option<i64>) {
        self.room_type_filter = room_type_id;
    }

    pub fn set_canvas(&mut self, canvas: CanvasBounds) {
        self.canvas = canvas;
    }

    /// Grid size, clamped to the allowed range
    pub fn set_grid_size(&mut self, size: i32) {
        self.grid.set_size(size);
    }

    pub fn set_show_grid(&mut self, show_grid: bool) {
        self.grid.show_grid = show_grid;
    }

    pub fn set_snap_to_grid(&mut self, snap_to_grid: bool) {
        self.grid.snap_to_grid = snap_to_grid;
    }

    /// Tiles that have a stored position
    pub fn placed_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_placed()).count()
    }

    /// `(floor, room type filter)` to load, once a floor is selected
    pub fn load_query(&self) -> Option<(i32, Option<i64>)> {
        self.selected_floor
            .map(|floor| (floor, self.room_type_filter))
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Install freshly loaded tiles; local edits and any drag are discarded
    pub fn finish_load(&mut self, tiles: Vec<RoomTile>) {
        self.tiles = tiles;
        self.drag = DragState::Idle;
        self.dirty = false;
        self.loading = false;
    }

    /// Start dragging `tile_id` grabbed at `pointer`
    ///
    /// Returns `false` if the tile is not on the canvas.
    pub fn begin_drag(&mut self, tile_id: i64, pointer: Point) -> bool {
        let Some(tile) = self.tile(tile_id) else {
            return false;
        };
        let (x, y) = tile.display_position();
        let offset = pointer - Point::new(f64::from(x), f64::from(y));
        self.drag = DragState::Dragging { tile_id, offset };
        true
    }

    /// Move the dragged tile so its grab point follows `pointer`
    ///
    /// Returns `false` when no drag is active.
    pub fn continue_drag(&mut self, pointer: Point) -> bool {
        let DragState::Dragging { tile_id, offset } = self.drag else {
            return false;
        };
        let grid = self.grid;
        let canvas = self.canvas;
        let Some(tile) = self.tiles.iter_mut().find(|t| t.id == tile_id) else {
            self.drag = DragState::Idle;
            return false;
        };

        let size = (tile.effective_width(), tile.effective_height());
        let (x, y) = place_tile(pointer - offset, size, canvas, &grid);
        tile.layout_x = Some(x);
        tile.layout_y = Some(y);
        tile.layout_width = size.0;
        tile.layout_height = size.1;
        self.dirty = true;
        self.revision += 1;
        true
    }

    /// Drop the tile where it is; saving is a separate action
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Batch to send if a save may start now; marks the save as in flight
    pub fn begin_save(&mut self) -> Option<Vec<LayoutUpdate>> {
        if !self.can_save() {
            return None;
        }
        self.saving = true;
        self.saved_revision = Some(self.revision);
        Some(self.tiles.iter().map(RoomTile::to_update).collect())
    }

    /// A failed save keeps the dirty flag and every local position
    ///
    /// Edits made while the request was in flight were not in the batch, so
    /// they keep the state dirty even when the save succeeds.
    pub fn finish_save(&mut self, succeeded: bool) {
        self.saving = false;
        let sent = self.saved_revision.take();
        if succeeded && sent == Some(self.revision) {
            self.dirty = false;
        }
    }

    /// Mark an arrange or reset request as in flight
    pub fn begin_bulk_update(&mut self) {
        self.saving = true;
    }

    pub fn finish_bulk_update(&mut self) {
        self.saving = false;
    }
}
