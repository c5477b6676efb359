//! Layout editor actions that talk to the server
//!
//! [`LayoutEditor`] never holds a borrow of the state across an `.await`:
//! each action snapshots what it needs, awaits the request, then applies the
//! result in a second short update.

use std::cell::RefCell;
use std::rc::Rc;

use crate::editor::arrange::{DEFAULT_COLUMNS, arrange};
use crate::editor::geometry::{CanvasBounds, Point};
use crate::editor::state::EditorState;
use crate::models::UiError;
use crate::services::{Dialogs, LayoutApi};
use crate::utils::validation::parse_columns;

pub const SAVE_SUCCESS_MESSAGE: &str = "Layout saved successfully!";
pub const SAVE_FAILURE_MESSAGE: &str = "Failed to save layout";
pub const RESET_CONFIRM_MESSAGE: &str = "Are you sure you want to reset all room positions?";
pub const RESET_SUCCESS_MESSAGE: &str = "Layout reset successfully!";
pub const RESET_FAILURE_MESSAGE: &str = "Failed to reset layout";
pub const ARRANGE_FAILURE_MESSAGE: &str = "Failed to auto-arrange rooms";

/// Somewhere the editor state lives
///
/// Implemented for a plain `Rc<RefCell<_>>` and for the Dioxus signal the
/// room layout page owns.
pub trait EditorStore: Clone {
    fn with_state<R>(&self, f: impl FnOnce(&EditorState) -> R) -> R;
    fn update_state<R>(&self, f: impl FnOnce(&mut EditorState) -> R) -> R;
}

impl EditorStore for Rc<RefCell<EditorState>> {
    fn with_state<R>(&self, f: impl FnOnce(&EditorState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut EditorState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// What an editor action ended up doing
#[derive(Clone, Debug, PartialEq)]
pub enum ActionOutcome {
    /// Nothing to do, or the operator cancelled
    Skipped,
    Completed,
    Failed(UiError),
}

impl ActionOutcome {
    /// The server rejected the session; the page should send the user to login
    pub fn needs_login(&self) -> bool {
        matches!(self, ActionOutcome::Failed(error) if error.is_auth_error())
    }
}

#[derive(Clone)]
pub struct LayoutEditor<S: EditorStore> {
    api: LayoutApi,
    store: S,
    dialogs: Rc<dyn Dialogs>,
}

impl<S: EditorStore> LayoutEditor<S> {
    pub fn new(api: LayoutApi, store: S, dialogs: Rc<dyn Dialogs>) -> Self {
        Self { api, store, dialogs }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn hotel_id(&self) -> i64 {
        self.api.hotel_id()
    }

    /// Room types, floors, then the first floor's rooms
    pub async fn initialize(&self) {
        self.load_room_types().await;
        self.load_floors().await;
        self.load_rooms().await;
    }

    pub async fn load_floors(&self) {
        match self.api.floors().await {
            Ok(floors) => self.store.update_state(|s| s.set_floors(floors)),
            Err(e) => tracing::error!(hotel_id = self.hotel_id(), "failed to load floors: {e}"),
        }
    }

    pub async fn load_room_types(&self) {
        match self.api.room_types().await {
            Ok(types) => self.store.update_state(|s| s.set_room_types(types)),
            Err(e) => tracing::error!(hotel_id = self.hotel_id(), "failed to load room types: {e}"),
        }
    }

    /// Reload the selected floor; a failed load shows an empty canvas
    ///
    /// Skipped while a save is in flight, since a reload would discard the
    /// edits being sent.
    pub async fn load_rooms(&self) {
        if self.store.with_state(EditorState::is_saving) {
            tracing::debug!("reload skipped while saving");
            return;
        }
        let Some((floor, room_type)) = self.store.with_state(EditorState::load_query) else {
            return;
        };

        self.store.update_state(EditorState::begin_load);
        let tiles = match self.api.floor_rooms(floor, room_type).await {
            Ok(tiles) => tiles,
            Err(e) => {
                tracing::error!(floor, "failed to load rooms: {e}");
                Vec::new()
            }
        };
        tracing::debug!(floor, count = tiles.len(), "rooms loaded");
        self.store.update_state(|s| s.finish_load(tiles));
    }

    pub async fn show_floor(&self, floor: i32) {
        if self.store.with_state(EditorState::is_saving) {
            return;
        }
        self.store.update_state(|s| s.select_floor(floor));
        self.load_rooms().await;
    }

    pub async fn filter_room_type(&self, room_type_id: Option<i64>) {
        if self.store.with_state(EditorState::is_saving) {
            return;
        }
        self.store.update_state(|s| s.set_room_type_filter(room_type_id));
        self.load_rooms().await;
    }

    /// Persist every tile on the canvas
    pub async fn save_layout(&self) -> ActionOutcome {
        let Some(updates) = self.store.update_state(EditorState::begin_save) else {
            return ActionOutcome::Skipped;
        };

        let result = self.api.update_layout(updates).await;
        self.store.update_state(|s| s.finish_save(result.is_ok()));
        match result {
            Ok(count) => {
                tracing::info!(count, "layout saved");
                self.dialogs.alert(SAVE_SUCCESS_MESSAGE);
                ActionOutcome::Completed
            }
            Err(e) => {
                tracing::error!("failed to save layout: {e}");
                self.dialogs
                    .alert(&format!("{SAVE_FAILURE_MESSAGE}: {}", e.user_message()));
                ActionOutcome::Failed(e)
            }
        }
    }

    /// Place every tile on a `columns`-wide grid, persist, then reload
    pub async fn auto_arrange(&self, columns: u32) -> ActionOutcome {
        let updates = match self.store.with_state(|s| arrange(&s.tiles, columns)) {
            Ok(updates) => updates,
            Err(e) => {
                self.dialogs.alert(&e.user_message());
                return ActionOutcome::Failed(e);
            }
        };

        self.store.update_state(EditorState::begin_bulk_update);
        let result = self.api.update_layout(updates).await;
        self.store.update_state(EditorState::finish_bulk_update);
        match result {
            Ok(count) => {
                tracing::info!(count, columns, "layout auto-arranged");
                self.dialogs
                    .alert(&format!("Arranged {count} rooms in {columns} columns"));
                self.load_rooms().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                tracing::error!(columns, "failed to auto-arrange: {e}");
                self.dialogs
                    .alert(&format!("{ARRANGE_FAILURE_MESSAGE}: {}", e.user_message()));
                ActionOutcome::Failed(e)
            }
        }
    }

    /// Ask for a column count, then auto-arrange
    pub async fn prompt_auto_arrange(&self) -> ActionOutcome {
        if self.store.with_state(|s| s.tiles.is_empty()) {
            let error = UiError::validation("There are no rooms to arrange");
            self.dialogs.alert(&error.user_message());
            return ActionOutcome::Failed(error);
        }

        let Some(answer) = self.dialogs.prompt(
            "How many rooms per row?",
            &DEFAULT_COLUMNS.to_string(),
        ) else {
            return ActionOutcome::Skipped;
        };

        match parse_columns(&answer) {
            Ok(columns) => self.auto_arrange(columns).await,
            Err(e) => {
                self.dialogs.alert(&e.user_message());
                ActionOutcome::Failed(e)
            }
        }
    }

    /// Clear every stored position for the hotel after confirmation
    pub async fn reset_layout(&self) -> ActionOutcome {
        if !self.dialogs.confirm(RESET_CONFIRM_MESSAGE) {
            return ActionOutcome::Skipped;
        }

        self.store.update_state(EditorState::begin_bulk_update);
        let result = self.api.reset_layout().await;
        self.store.update_state(EditorState::finish_bulk_update);
        match result {
            Ok(()) => {
                tracing::info!(hotel_id = self.hotel_id(), "layout reset");
                self.dialogs.alert(RESET_SUCCESS_MESSAGE);
                self.load_rooms().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                tracing::error!("failed to reset layout: {e}");
                self.dialogs
                    .alert(&format!("{RESET_FAILURE_MESSAGE}: {}", e.user_message()));
                ActionOutcome::Failed(e)
            }
        }
    }

    pub fn begin_drag(&self, tile_id: i64, pointer: Point) -> bool {
        self.store.update_state(|s| s.begin_drag(tile_id, pointer))
    }

    pub fn continue_drag(&self, pointer: Point) -> bool {
        // Cheap check first so idle pointer moves don't write the store
        if self.store.with_state(|s| s.drag().dragged_tile().is_none()) {
            return false;
        }
        self.store.update_state(|s| s.continue_drag(pointer))
    }

    pub fn end_drag(&self) {
        if self.store.with_state(|s| s.drag().dragged_tile().is_some()) {
            self.store.update_state(EditorState::end_drag);
        }
    }

    pub fn set_canvas(&self, canvas: CanvasBounds) {
        if self.store.with_state(|s| s.canvas != canvas) {
            self.store.update_state(|s| s.set_canvas(canvas));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::arrange::sample_tiles;
    use crate::services::api_client::testing::{MockTransport, admin_client};
    use crate::services::dialogs::testing::ScriptedDialogs;
    use crate::services::transport::HttpMethod;
    use serde_json::json;

    type Store = Rc<RefCell<EditorState>>;

    fn editor(dialogs: ScriptedDialogs) -> (LayoutEditor<Store>, MockTransport, Rc<ScriptedDialogs>) {
        let (client, transport) = admin_client();
        let dialogs = Rc::new(dialogs);
        let mut state = EditorState::new();
        state.set_floors(vec![1]);
        state.finish_load(sample_tiles(3));
        let editor = LayoutEditor::new(
            LayoutApi::new(client, 4),
            Rc::new(RefCell::new(state)),
            dialogs.clone(),
        );
        (editor, transport, dialogs)
    }

    fn floor_rooms(rooms: serde_json::Value) -> serde_json::Value {
        json!({ "floor": 1, "rooms": rooms })
    }

    fn drag_first_tile(editor: &LayoutEditor<Store>) {
        editor.begin_drag(1, Point::new(400.0, 0.0));
        editor.continue_drag(Point::new(120.0, 60.0));
        editor.end_drag();
    }

    #[tokio::test]
    async fn test_save_without_changes_sends_nothing() {
        let (editor, transport, dialogs) = editor(ScriptedDialogs::default());
        assert_eq!(editor.save_layout().await, ActionOutcome::Skipped);
        assert_eq!(transport.sent_count(), 0);
        assert!(dialogs.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_save_after_drag() {
        let (editor, transport, dialogs) = editor(ScriptedDialogs::default());
        drag_first_tile(&editor);
        assert!(editor.store().with_state(EditorState::is_dirty));

        transport.respond(200, json!({ "updated_count": 3 }));
        assert_eq!(editor.save_layout().await, ActionOutcome::Completed);

        let sent = transport.sent();
        assert_eq!(sent[0].method, HttpMethod::Put);
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["updates"].as_array().unwrap().len(), 3);
        assert_eq!(body["updates"][0]["layout_x"], 120);
        assert_eq!(body["updates"][0]["layout_y"], 60);

        assert!(!editor.store().with_state(EditorState::is_dirty));
        assert_eq!(dialogs.alerts(), vec![SAVE_SUCCESS_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_local_edits() {
        let (editor, transport, dialogs) = editor(ScriptedDialogs::default());
        drag_first_tile(&editor);

        transport.respond(500, json!({ "error": "database unavailable" }));
        let outcome = editor.save_layout().await;
        assert!(matches!(outcome, ActionOutcome::Failed(_)));

        editor.store().with_state(|s| {
            assert!(s.is_dirty());
            assert!(!s.is_saving());
            assert_eq!(s.tile(1).unwrap().layout_x, Some(120));
        });
        assert!(dialogs.alerts()[0].starts_with(SAVE_FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn test_expired_session_asks_for_login() {
        let (editor, transport, _dialogs) = editor(ScriptedDialogs::default());
        drag_first_tile(&editor);
        transport.respond(401, json!({ "error": "token expired" }));
        assert!(editor.save_layout().await.needs_login());
    }

    #[tokio::test]
    async fn test_auto_arrange_persists_and_reloads() {
        let (editor, transport, dialogs) = editor(ScriptedDialogs::default());
        transport
            .respond(200, json!({ "updated_count": 3 }))
            .respond(
                200,
                floor_rooms(json!([
                    { "id": 1, "room_number": "101", "floor": 1, "status": "AVAILABLE", "layout_x": 50, "layout_y": 50 },
                    { "id": 2, "room_number": "102", "floor": 1, "status": "AVAILABLE", "layout_x": 165, "layout_y": 50 },
                    { "id": 3, "room_number": "103", "floor": 1, "status": "AVAILABLE", "layout_x": 50, "layout_y": 140 }
                ])),
            );

        assert_eq!(editor.auto_arrange(2).await, ActionOutcome::Completed);

        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["updates"][2]["layout_x"], 50);
        assert_eq!(body["updates"][2]["layout_y"], 140);
        assert_eq!(body["updates"][2]["layout_width"], 100);
        assert_eq!(sent[1].method, HttpMethod::Get);

        assert_eq!(editor.store().with_state(|s| s.tile(2).unwrap().layout_x), Some(165));
        assert_eq!(dialogs.alerts(), vec!["Arranged 3 rooms in 2 columns".to_string()]);
    }

    #[tokio::test]
    async fn test_prompt_cancel_is_noop() {
        let (editor, transport, dialogs) = editor(ScriptedDialogs::prompting(None));
        assert_eq!(editor.prompt_auto_arrange().await, ActionOutcome::Skipped);
        assert_eq!(transport.sent_count(), 0);
        assert!(dialogs.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_prompt_rejects_bad_column_count() {
        for answer in ["0", "-3", "abc", ""] {
            let (editor, transport, dialogs) = editor(ScriptedDialogs::prompting(Some(answer)));
            let outcome = editor.prompt_auto_arrange().await;
            assert!(
                matches!(&outcome, ActionOutcome::Failed(e) if e.is_validation_error()),
                "answer {answer:?} gave {outcome:?}"
            );
            assert_eq!(transport.sent_count(), 0);
            assert_eq!(dialogs.alerts().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_prompt_with_no_rooms() {
        let (editor, transport, dialogs) = editor(ScriptedDialogs::prompting(Some("4")));
        editor.store().update_state(|s| s.finish_load(Vec::new()));
        assert!(matches!(editor.prompt_auto_arrange().await, ActionOutcome::Failed(_)));
        assert_eq!(transport.sent_count(), 0);
        assert_eq!(dialogs.alerts().len(), 1);
    }

    #[tokio::test]
    async fn test_reset_declined() {
        let (editor, transport, _dialogs) = editor(ScriptedDialogs::confirming(false));
        assert_eq!(editor.reset_layout().await, ActionOutcome::Skipped);
        assert_eq!(transport.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_reset_then_reload_shows_unplaced_rooms() {
        let (editor, transport, dialogs) = editor(ScriptedDialogs::confirming(true));
        transport
            .respond(200, json!({ "message": "Layout reset" }))
            .respond(
                200,
                floor_rooms(json!([
                    { "id": 1, "room_number": "101", "floor": 1, "status": "AVAILABLE" },
                    { "id": 2, "room_number": "102", "floor": 1, "status": "OCCUPIED" }
                ])),
            );

        assert_eq!(editor.reset_layout().await, ActionOutcome::Completed);
        assert_eq!(transport.sent()[0].method, HttpMethod::Delete);
        editor.store().with_state(|s| {
            assert_eq!(s.tiles.len(), 2);
            assert!(s.tiles.iter().all(|t| !t.is_placed()));
            assert!(s.tiles.iter().all(|t| t.display_position() == (0, 0)));
        });
        assert_eq!(dialogs.alerts(), vec![RESET_SUCCESS_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn test_failed_load_shows_empty_canvas() {
        let (editor, transport, dialogs) = editor(ScriptedDialogs::default());
        transport.fail(UiError::network("connection refused"));
        editor.load_rooms().await;
        editor.store().with_state(|s| {
            assert!(s.tiles.is_empty());
            assert!(!s.is_loading());
        });
        assert!(dialogs.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_show_floor_queries_selected_floor_and_type() {
        let (editor, transport, _dialogs) = editor(ScriptedDialogs::default());
        transport
            .respond(200, floor_rooms(json!([])))
            .respond(200, floor_rooms(json!([])));

        editor.show_floor(3).await;
        editor.filter_room_type(Some(2)).await;

        let sent = transport.sent();
        assert_eq!(sent[0].url, "http://localhost:8080/api/v1/hotels/4/layout/3");
        assert_eq!(
            sent[1].url,
            "http://localhost:8080/api/v1/hotels/4/layout/3?room_type_id=2"
        );
    }

    #[tokio::test]
    async fn test_no_reload_while_saving() {
        let (editor, transport, _dialogs) = editor(ScriptedDialogs::default());
        drag_first_tile(&editor);
        assert!(editor.store().update_state(EditorState::begin_save).is_some());

        editor.load_rooms().await;
        editor.show_floor(2).await;
        editor.filter_room_type(Some(5)).await;

        assert_eq!(transport.sent_count(), 0);
        editor.store().with_state(|s| {
            assert_eq!(s.selected_floor, Some(1));
            assert_eq!(s.room_type_filter, None);
            assert!(s.is_dirty());
            assert_eq!(s.tile(1).unwrap().layout_x, Some(120));
        });
    }

    #[tokio::test]
    async fn test_initialize_selects_first_floor() {
        let (client, transport) = admin_client();
        let editor = LayoutEditor::new(
            LayoutApi::new(client, 4),
            Rc::new(RefCell::new(EditorState::new())),
            Rc::new(ScriptedDialogs::default()),
        );
        transport
            .respond(200, json!({ "roomTypes": [{ "id": 2, "type_name": "Ballroom" }] }))
            .respond(
                200,
                json!({ "rooms": [
                    { "id": 1, "room_number": "201", "floor": 2 },
                    { "id": 2, "room_number": "101", "floor": 1 }
                ]}),
            )
            .respond(200, floor_rooms(json!([{ "id": 2, "room_number": "101", "floor": 1, "status": "AVAILABLE" }])));

        editor.initialize().await;
        editor.store().with_state(|s| {
            assert_eq!(s.floors, vec![1, 2]);
            assert_eq!(s.selected_floor, Some(1));
            assert_eq!(s.room_types.len(), 1);
            assert_eq!(s.tiles.len(), 1);
        });
    }
}
