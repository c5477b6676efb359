//! Hotel admin floor-plan editor

use dioxus::prelude::*;
use dioxus::router::Navigator;
use std::future::Future;

use crate::app::Route;
use crate::components::{
    Button, Checkbox, EmptyState, ErrorMessage, RoomTileView, Select, Spinner, StatusLegend,
};
use crate::editor::{ActionOutcome, CanvasBounds, GridSettings, Point};
use crate::hooks::{EditorHandle, SessionContext, use_layout_editor, use_require_role, use_session};
use crate::models::UserRole;
use crate::utils::parse_grid_size;

pub(crate) const STAFF_ROLES: &[UserRole] = &[UserRole::HotelAdmin, UserRole::HotelSuperAdmin];

/// Canvas background drawing the grid lines
pub fn grid_background(grid: &GridSettings) -> String {
    if !grid.show_grid {
        return String::new();
    }
    let size = grid.size();
    format!(
        "background-image: linear-gradient(to right, #e5e7eb 1px, transparent 1px), \
         linear-gradient(to bottom, #e5e7eb 1px, transparent 1px); \
         background-size: {size}px {size}px;"
    )
}

/// Run an editor action in the background, sending the user to login if the
/// server rejected their session
fn spawn_action<F, Fut>(editor: &EditorHandle, context: &SessionContext, navigator: Navigator, action: F)
where
    F: FnOnce(EditorHandle) -> Fut + 'static,
    Fut: Future<Output = ActionOutcome> + 'static,
{
    let editor = editor.clone();
    let mut context = context.clone();
    spawn(async move {
        if action(editor).await.needs_login() {
            context.logout();
            navigator.replace(Route::LoginPage {});
        }
    });
}

#[component]
pub fn RoomLayoutPage() -> Element {
    let Some(user) = use_require_role(STAFF_ROLES) else {
        return rsx! { Spinner { message: Some("Checking access...".to_string()) } };
    };
    let Some(hotel_id) = user.hotel_id else {
        return rsx! {
            ErrorMessage { message: "Your account is not linked to a hotel".to_string() }
        };
    };

    rsx! { LayoutEditorView { hotel_id } }
}

#[component]
fn LayoutEditorView(hotel_id: i64) -> Element {
    let context = use_session();
    let navigator = use_navigator();
    let editor = use_layout_editor(hotel_id);
    let mut state = *editor.store();
    let mut canvas_origin = use_signal(Point::default);

    let view = state.read().clone();
    let dragged = view.drag().dragged_tile();
    let floor_value = view.selected_floor.map(|f| f.to_string()).unwrap_or_default();
    let type_value = view.room_type_filter.map(|t| t.to_string()).unwrap_or_default();
    let floor_options: Vec<(String, String)> = view
        .floors
        .iter()
        .map(|f| (f.to_string(), format!("Floor {f}")))
        .collect();
    let type_options: Vec<(String, String)> = std::iter::once((String::new(), "All types".to_string()))
        .chain(view.room_types.iter().map(|t| (t.id.to_string(), t.type_name.clone())))
        .collect();
    let background = grid_background(&view.grid);
    let canvas_height = view.canvas.height;
    let grid_size = view.grid.size();
    let summary = format!(
        "{} rooms shown, {} placed. Drag a room to move it, then save.",
        view.tiles.len(),
        view.placed_count()
    );

    let on_floor = {
        let (editor, context) = (editor.clone(), context.clone());
        move |value: String| {
            if let Ok(floor) = value.parse::<i32>() {
                spawn_action(&editor, &context, navigator, move |e| async move {
                    e.show_floor(floor).await;
                    ActionOutcome::Completed
                });
            }
        }
    };
    let on_room_type = {
        let (editor, context) = (editor.clone(), context.clone());
        move |value: String| {
            let room_type = value.parse::<i64>().ok();
            spawn_action(&editor, &context, navigator, move |e| async move {
                e.filter_room_type(room_type).await;
                ActionOutcome::Completed
            });
        }
    };
    let on_save = {
        let (editor, context) = (editor.clone(), context.clone());
        move |_| spawn_action(&editor, &context, navigator, |e| async move { e.save_layout().await })
    };
    let on_arrange = {
        let (editor, context) = (editor.clone(), context.clone());
        move |_| spawn_action(&editor, &context, navigator, |e| async move { e.prompt_auto_arrange().await })
    };
    let on_reset = {
        let (editor, context) = (editor.clone(), context.clone());
        move |_| spawn_action(&editor, &context, navigator, |e| async move { e.reset_layout().await })
    };
    let on_refresh = {
        let (editor, context) = (editor.clone(), context.clone());
        move |_| {
            spawn_action(&editor, &context, navigator, |e| async move {
                e.load_rooms().await;
                ActionOutcome::Completed
            })
        }
    };

    let on_mounted = {
        let editor = editor.clone();
        move |element: Event<MountedData>| {
            let editor = editor.clone();
            async move {
                match element.get_client_rect().await {
                    Ok(rect) => {
                        canvas_origin.set(Point::new(rect.origin.x, rect.origin.y));
                        editor.set_canvas(CanvasBounds::new(rect.width(), rect.height()));
                    }
                    Err(e) => tracing::warn!("could not measure canvas: {e:?}"),
                }
            }
        }
    };
    let on_move = {
        let editor = editor.clone();
        move |evt: MouseEvent| {
            let pointer = evt.client_coordinates();
            editor.continue_drag(Point::new(pointer.x, pointer.y) - canvas_origin());
        }
    };
    let on_release = {
        let editor = editor.clone();
        move |_| editor.end_drag()
    };
    let on_leave = {
        let editor = editor.clone();
        move |_| editor.end_drag()
    };
    let on_grab = {
        let editor = editor.clone();
        move |(tile_id, pointer): (i64, Point)| {
            editor.begin_drag(tile_id, pointer - canvas_origin());
        }
    };

    let canvas = if view.is_loading() {
        rsx! { Spinner { message: Some("Loading rooms...".to_string()) } }
    } else if view.floors.is_empty() {
        rsx! { EmptyState { message: "This hotel has no rooms yet".to_string() } }
    } else {
        rsx! {
            div {
                class: "relative w-full overflow-hidden rounded-lg border-2 border-gray-300 bg-white select-none",
                style: "height: {canvas_height}px; {background}",
                onmounted: on_mounted,
                onmousemove: on_move,
                onmouseup: on_release,
                onmouseleave: on_leave,
                if view.tiles.is_empty() {
                    EmptyState { message: "No rooms on this floor".to_string() }
                }
                for tile in view.tiles.iter().cloned() {
                    RoomTileView {
                        key: "{tile.id}",
                        dragging: dragged == Some(tile.id),
                        tile,
                        ongrab: on_grab.clone(),
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "space-y-4",
            div { class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold text-gray-900", "Room Layout" }
                if view.is_dirty() {
                    span { class: "rounded-full bg-yellow-100 px-3 py-1 text-sm text-yellow-800",
                        "● Unsaved changes"
                    }
                }
            }

            div { class: "flex flex-wrap items-end gap-4 rounded-lg bg-white p-4 shadow",
                Select {
                    label: "Floor".to_string(),
                    value: floor_value,
                    options: floor_options,
                    disabled: view.is_saving(),
                    onchange: on_floor,
                }
                Select {
                    label: "Room type".to_string(),
                    value: type_value,
                    options: type_options,
                    disabled: view.is_saving(),
                    onchange: on_room_type,
                }
                label { class: "flex flex-col text-sm font-medium text-gray-700",
                    "Grid size"
                    input {
                        r#type: "number",
                        class: "mt-1 w-24 rounded-md border border-gray-300 px-3 py-2 text-sm",
                        min: "5",
                        max: "50",
                        value: "{grid_size}",
                        onchange: move |evt| state.write().set_grid_size(parse_grid_size(&evt.value()))
                    }
                }
                Checkbox {
                    label: "Show grid".to_string(),
                    checked: view.grid.show_grid,
                    onchange: move |checked| state.write().set_show_grid(checked),
                }
                Checkbox {
                    label: "Snap to grid".to_string(),
                    checked: view.grid.snap_to_grid,
                    onchange: move |checked| state.write().set_snap_to_grid(checked),
                }
                div { class: "ml-auto flex gap-2",
                    Button { disabled: !view.can_save(), onclick: on_save,
                        if view.is_saving() { "Saving..." } else { "Save Layout" }
                    }
                    Button {
                        variant: "success".to_string(),
                        disabled: view.is_saving() || view.tiles.is_empty(),
                        onclick: on_arrange,
                        "Auto Arrange"
                    }
                    Button {
                        variant: "danger".to_string(),
                        disabled: view.is_saving(),
                        onclick: on_reset,
                        "Reset"
                    }
                    Button {
                        variant: "secondary".to_string(),
                        disabled: view.is_saving(),
                        onclick: on_refresh,
                        "Refresh"
                    }
                }
            }

            p { class: "text-sm text-gray-600", "{summary}" }
            {canvas}
            StatusLegend {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_background_follows_settings() {
        let grid = GridSettings::default().with_size(25);
        assert!(grid_background(&grid).contains("background-size: 25px 25px;"));

        let mut hidden = grid;
        hidden.show_grid = false;
        assert_eq!(grid_background(&hidden), "");
    }
}
