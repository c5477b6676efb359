//! Hotel back office: rooms and room types

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{
    Button, Checkbox, EmptyState, ErrorMessage, NotificationStack, Select, Spinner, TextArea,
    TextInput,
};
use crate::hooks::{Notifications, use_notifications, use_require_role, use_session};
use crate::models::{
    EDITABLE_ROOM_STATUSES, HotelRoomSummary, RoomForm, RoomStatus, RoomType, RoomTypeForm,
    room_type_name,
};
use crate::pages::room_layout::STAFF_ROLES;
use crate::services::{
    BrowserDialogs, Dialogs, HotelAdminApi, ROOM_DELETED_MESSAGE, ROOM_TYPE_DELETED_MESSAGE,
};
use crate::utils::format_rupiah;

const DELETE_ROOM_CONFIRM: &str = "Are you sure you want to delete this room?";
const DELETE_ROOM_TYPE_CONFIRM: &str = "Are you sure you want to delete this room type?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AdminTab {
    Rooms,
    RoomTypes,
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "bg-blue-600 text-white"
    } else {
        "bg-gray-100 text-gray-700 hover:bg-gray-200"
    }
}

#[component]
pub fn HotelAdminPage() -> Element {
    let Some(user) = use_require_role(STAFF_ROLES) else {
        return rsx! { Spinner { message: Some("Checking access...".to_string()) } };
    };
    let Some(hotel_id) = user.hotel_id else {
        return rsx! {
            ErrorMessage { message: "Your account is not linked to a hotel".to_string() }
        };
    };

    rsx! { HotelAdminView { hotel_id } }
}

#[component]
fn HotelAdminView(hotel_id: i64) -> Element {
    let context = use_session();
    let notifications = use_notifications();
    let mut tab = use_signal(|| AdminTab::Rooms);
    let api = use_hook(|| HotelAdminApi::new(context.client(), hotel_id));

    let panel = match tab() {
        AdminTab::Rooms => rsx! { RoomsPanel { api: api.clone(), notifications } },
        AdminTab::RoomTypes => rsx! { RoomTypesPanel { api: api.clone(), notifications } },
    };
    let rooms_class = tab_class(tab() == AdminTab::Rooms);
    let types_class = tab_class(tab() == AdminTab::RoomTypes);

    rsx! {
        div { class: "space-y-6",
            div { class: "flex flex-wrap items-center justify-between gap-4",
                h1 { class: "text-2xl font-bold text-gray-900", "Hotel Management" }
                div { class: "flex gap-2",
                    button {
                        class: "px-4 py-2 rounded-md text-sm font-medium {rooms_class}",
                        onclick: move |_| tab.set(AdminTab::Rooms),
                        "Rooms"
                    }
                    button {
                        class: "px-4 py-2 rounded-md text-sm font-medium {types_class}",
                        onclick: move |_| tab.set(AdminTab::RoomTypes),
                        "Room Types"
                    }
                    Link {
                        to: Route::RoomLayoutPage {},
                        class: "px-4 py-2 rounded-md text-sm font-medium bg-gray-100 text-gray-700 hover:bg-gray-200",
                        "Room Layout"
                    }
                }
            }
            {panel}
            NotificationStack { notifications }
        }
    }
}

#[component]
fn RoomsPanel(api: HotelAdminApi, notifications: Notifications) -> Element {
    let mut editing = use_signal(|| None::<RoomForm>);
    let mut rooms = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.rooms().await }
        }
    });
    let room_types = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                match api.room_types().await {
                    Ok(types) => types,
                    Err(e) => {
                        tracing::error!(hotel_id = api.hotel_id(), "failed to load room types: {e}");
                        Vec::new()
                    }
                }
            }
        }
    });
    let types: Vec<RoomType> = room_types.read().clone().unwrap_or_default();

    let on_add = {
        let types = types.clone();
        move |_| editing.set(Some(RoomForm::new(&types)))
    };
    let on_edit = move |room: HotelRoomSummary| editing.set(Some(RoomForm::edit(&room)));
    let on_delete = {
        let api = api.clone();
        move |room_id: i64| {
            if !BrowserDialogs.confirm(DELETE_ROOM_CONFIRM) {
                return;
            }
            let api = api.clone();
            let mut notifications = notifications;
            spawn(async move {
                match api.delete_room(room_id).await {
                    Ok(()) => {
                        notifications.success(ROOM_DELETED_MESSAGE);
                        rooms.restart();
                    }
                    Err(e) => notifications.error(&e),
                }
            });
        }
    };

    let editor = editing().map(|form| {
        let key = form.editing.map(|id| id.to_string()).unwrap_or_else(|| "new".to_string());
        rsx! {
            RoomEditor {
                key: "{key}",
                api: api.clone(),
                initial: form,
                room_types: types.clone(),
                onsaved: move |message: String| {
                    let mut notifications = notifications;
                    notifications.success(message);
                    editing.set(None);
                    rooms.restart();
                },
                oncancel: move |_| editing.set(None),
            }
        }
    });

    let table = match &*rooms.read() {
        None => rsx! { Spinner { message: Some("Loading rooms...".to_string()) } },
        Some(Err(e)) => rsx! { ErrorMessage { message: e.user_message() } },
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState { message: "No rooms found. Click \"Add Room\" to create your first room.".to_string() }
        },
        Some(Ok(list)) => rsx! {
            div { class: "overflow-x-auto rounded-lg bg-white shadow",
                table { class: "min-w-full text-sm",
                    thead { class: "bg-gray-50 text-left text-xs uppercase text-gray-500",
                        tr {
                            th { class: "px-4 py-2", "Room Number" }
                            th { class: "px-4 py-2", "Floor" }
                            th { class: "px-4 py-2", "Type" }
                            th { class: "px-4 py-2", "Blockchain" }
                            th { class: "px-4 py-2", "Status" }
                            th { class: "px-4 py-2 text-right", "Actions" }
                        }
                    }
                    tbody {
                        for room in list.iter().cloned() {
                            RoomRow {
                                key: "{room.id}",
                                type_name: room_type_name(&types, room.room_type_id).to_string(),
                                room,
                                onedit: on_edit,
                                ondelete: on_delete.clone(),
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "space-y-4",
            div { class: "flex items-center justify-between",
                h2 { class: "text-xl font-semibold text-gray-900", "Room Management" }
                Button { onclick: on_add, "+ Add Room" }
            }
            {editor}
            {table}
        }
    }
}

/// Badge colors on the rooms table
fn room_status_badge(status: &RoomStatus) -> &'static str {
    match status {
        RoomStatus::Available => "bg-green-100 text-green-800",
        RoomStatus::Occupied => "bg-red-100 text-red-800",
        _ => "bg-yellow-100 text-yellow-800",
    }
}

#[component]
fn RoomRow(
    room: HotelRoomSummary,
    type_name: String,
    onedit: EventHandler<HotelRoomSummary>,
    ondelete: EventHandler<i64>,
) -> Element {
    let status_class = room_status_badge(&room.status);
    let (chain_class, chain_label) = if room.is_blockchain_enabled {
        ("bg-green-100 text-green-800", "Enabled")
    } else {
        ("bg-gray-100 text-gray-800", "Disabled")
    };
    let room_id = room.id;
    let edited = room.clone();

    rsx! {
        tr { class: "border-t hover:bg-gray-50",
            td { class: "px-4 py-2 font-medium text-gray-900", "{room.room_number}" }
            td { class: "px-4 py-2 text-gray-600", "Floor {room.floor}" }
            td { class: "px-4 py-2 text-gray-600", "{type_name}" }
            td { class: "px-4 py-2",
                span { class: "rounded-full px-2 py-1 text-xs font-medium {chain_class}", "{chain_label}" }
            }
            td { class: "px-4 py-2",
                span { class: "rounded-full px-2 py-1 text-xs font-medium {status_class}", "{room.status}" }
            }
            td { class: "px-4 py-2 text-right",
                button {
                    class: "mr-4 text-blue-600 hover:text-blue-800",
                    onclick: move |_| onedit.call(edited.clone()),
                    "Edit"
                }
                button {
                    class: "text-red-600 hover:text-red-800",
                    onclick: move |_| ondelete.call(room_id),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn RoomEditor(
    api: HotelAdminApi,
    initial: RoomForm,
    room_types: Vec<RoomType>,
    onsaved: EventHandler<String>,
    oncancel: EventHandler<()>,
) -> Element {
    let mut form = use_signal(|| initial.clone());
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let on_submit = move |_| {
        if saving() {
            return;
        }
        let (room_id, draft) = {
            let form = form.read();
            (form.editing, form.validate())
        };
        let draft = match draft {
            Ok(draft) => draft,
            Err(e) => {
                error.set(Some(e.user_message()));
                return;
            }
        };

        let api = api.clone();
        saving.set(true);
        error.set(None);
        spawn(async move {
            let result = api.save_room(room_id, &draft).await;
            saving.set(false);
            match result {
                Ok(message) => onsaved.call(message),
                Err(e) => {
                    tracing::warn!(code = e.error_code(), "failed to save room");
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let current = form.read().clone();
    let title = if current.is_editing() { "Edit Room" } else { "Add New Room" };
    let type_options: Vec<(String, String)> = room_types
        .iter()
        .map(|t| (t.id.to_string(), t.type_name.clone()))
        .collect();
    let status_options: Vec<(String, String)> = EDITABLE_ROOM_STATUSES
        .iter()
        .map(|s| (s.as_str().to_string(), s.to_string()))
        .collect();
    let submit_label = match (saving(), current.is_editing()) {
        (true, _) => "Saving...",
        (false, true) => "Update Room",
        (false, false) => "Add Room",
    };

    rsx! {
        div { class: "space-y-4 rounded-lg bg-white p-6 shadow",
            h3 { class: "text-lg font-semibold", "{title}" }
            if let Some(message) = error() {
                ErrorMessage { message }
            }
            div { class: "grid grid-cols-2 gap-4",
                TextInput {
                    label: "Room Number *".to_string(),
                    value: current.room_number.clone(),
                    placeholder: "e.g. 101, 102A".to_string(),
                    required: true,
                    oninput: move |value| form.write().room_number = value,
                }
                TextInput {
                    label: "Floor *".to_string(),
                    value: current.floor.clone(),
                    input_type: "number".to_string(),
                    required: true,
                    oninput: move |value| form.write().floor = value,
                }
            }
            Select {
                label: "Room Type *".to_string(),
                value: current.room_type_id.clone(),
                options: type_options,
                onchange: move |value| form.write().room_type_id = value,
            }
            if current.is_editing() {
                Select {
                    label: "Status".to_string(),
                    value: current.status.as_str().to_string(),
                    options: status_options,
                    onchange: move |value: String| form.write().status = RoomStatus::from(value),
                }
            }
            Checkbox {
                label: "Enable Blockchain (recommended for secure reservations)".to_string(),
                checked: current.is_blockchain_enabled,
                onchange: move |checked| form.write().is_blockchain_enabled = checked,
            }
            div { class: "flex gap-4 pt-2",
                Button { disabled: saving(), onclick: on_submit, "{submit_label}" }
                Button {
                    variant: "secondary".to_string(),
                    onclick: move |_| oncancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

#[component]
fn RoomTypesPanel(api: HotelAdminApi, notifications: Notifications) -> Element {
    let mut editing = use_signal(|| None::<RoomTypeForm>);
    let mut room_types = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.room_types().await }
        }
    });

    let on_delete = {
        let api = api.clone();
        move |room_type_id: i64| {
            if !BrowserDialogs.confirm(DELETE_ROOM_TYPE_CONFIRM) {
                return;
            }
            let api = api.clone();
            let mut notifications = notifications;
            spawn(async move {
                match api.delete_room_type(room_type_id).await {
                    Ok(()) => {
                        notifications.success(ROOM_TYPE_DELETED_MESSAGE);
                        room_types.restart();
                    }
                    Err(e) => notifications.error(&e),
                }
            });
        }
    };

    let editor = editing().map(|form| {
        let key = form.editing.map(|id| id.to_string()).unwrap_or_else(|| "new".to_string());
        rsx! {
            RoomTypeEditor {
                key: "{key}",
                api: api.clone(),
                initial: form,
                onsaved: move |message: String| {
                    let mut notifications = notifications;
                    notifications.success(message);
                    editing.set(None);
                    room_types.restart();
                },
                oncancel: move |_| editing.set(None),
            }
        }
    });

    let table = match &*room_types.read() {
        None => rsx! { Spinner { message: Some("Loading room types...".to_string()) } },
        Some(Err(e)) => rsx! { ErrorMessage { message: e.user_message() } },
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState {
                message: "No room types found. Click \"Add Room Type\" to create your first room type.".to_string()
            }
        },
        Some(Ok(list)) => rsx! {
            div { class: "overflow-x-auto rounded-lg bg-white shadow",
                table { class: "min-w-full text-sm",
                    thead { class: "bg-gray-50 text-left text-xs uppercase text-gray-500",
                        tr {
                            th { class: "px-4 py-2", "Type Name" }
                            th { class: "px-4 py-2", "Price/Person" }
                            th { class: "px-4 py-2", "Capacity" }
                            th { class: "px-4 py-2", "Total Rooms" }
                            th { class: "px-4 py-2", "Blockchain" }
                            th { class: "px-4 py-2 text-right", "Actions" }
                        }
                    }
                    tbody {
                        for room_type in list.iter().cloned() {
                            RoomTypeRow {
                                key: "{room_type.id}",
                                room_type,
                                onedit: move |room_type: RoomType| editing.set(Some(RoomTypeForm::edit(&room_type))),
                                ondelete: on_delete.clone(),
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "space-y-4",
            div { class: "flex items-center justify-between",
                h2 { class: "text-xl font-semibold text-gray-900", "Room Type Management" }
                Button { onclick: move |_| editing.set(Some(RoomTypeForm::default())), "+ Add Room Type" }
            }
            {editor}
            {table}
        }
    }
}

#[component]
fn RoomTypeRow(room_type: RoomType, onedit: EventHandler<RoomType>, ondelete: EventHandler<i64>) -> Element {
    let price = format_rupiah(room_type.price_per_person);
    let capacity = room_type.capacity_label();
    let chain_class = if room_type.blockchain_reserved_rooms > 0 {
        "bg-green-100 text-green-800"
    } else {
        "bg-gray-100 text-gray-800"
    };
    let type_id = room_type.id;
    let edited = room_type.clone();

    rsx! {
        tr { class: "border-t hover:bg-gray-50",
            td { class: "px-4 py-2",
                p { class: "font-medium text-gray-900", "{room_type.type_name}" }
                p { class: "text-gray-500", "{room_type.description}" }
            }
            td { class: "px-4 py-2 text-gray-600", "{price}" }
            td { class: "px-4 py-2 text-gray-600", "{capacity}" }
            td { class: "px-4 py-2 text-gray-600", "{room_type.total_rooms} rooms" }
            td { class: "px-4 py-2",
                span { class: "rounded-full px-2 py-1 text-xs font-medium {chain_class}",
                    "{room_type.blockchain_reserved_rooms} rooms"
                }
            }
            td { class: "px-4 py-2 text-right",
                button {
                    class: "mr-4 text-blue-600 hover:text-blue-800",
                    onclick: move |_| onedit.call(edited.clone()),
                    "Edit"
                }
                button {
                    class: "text-red-600 hover:text-red-800",
                    onclick: move |_| ondelete.call(type_id),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn RoomTypeEditor(
    api: HotelAdminApi,
    initial: RoomTypeForm,
    onsaved: EventHandler<String>,
    oncancel: EventHandler<()>,
) -> Element {
    let mut form = use_signal(|| initial.clone());
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let on_submit = move |_| {
        if saving() {
            return;
        }
        let (room_type_id, draft) = {
            let form = form.read();
            (form.editing, form.validate())
        };
        let draft = match draft {
            Ok(draft) => draft,
            Err(e) => {
                error.set(Some(e.user_message()));
                return;
            }
        };

        let api = api.clone();
        saving.set(true);
        error.set(None);
        spawn(async move {
            let result = api.save_room_type(room_type_id, &draft).await;
            saving.set(false);
            match result {
                Ok(message) => onsaved.call(message),
                Err(e) => {
                    tracing::warn!(code = e.error_code(), "failed to save room type");
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let current = form.read().clone();
    let title = if current.is_editing() { "Edit Room Type" } else { "Add New Room Type" };
    let submit_label = match (saving(), current.is_editing()) {
        (true, _) => "Saving...",
        (false, true) => "Update Room Type",
        (false, false) => "Add Room Type",
    };

    rsx! {
        div { class: "space-y-4 rounded-lg bg-white p-6 shadow",
            h3 { class: "text-lg font-semibold", "{title}" }
            if let Some(message) = error() {
                ErrorMessage { message }
            }
            div { class: "grid grid-cols-2 gap-4",
                TextInput {
                    label: "Type Name *".to_string(),
                    value: current.type_name.clone(),
                    placeholder: "e.g. Deluxe Room, Standard Room".to_string(),
                    required: true,
                    oninput: move |value| form.write().type_name = value,
                }
                TextInput {
                    label: "Price per Person *".to_string(),
                    value: current.price_per_person.clone(),
                    input_type: "number".to_string(),
                    required: true,
                    oninput: move |value| form.write().price_per_person = value,
                }
            }
            TextArea {
                label: "Description".to_string(),
                value: current.description.clone(),
                placeholder: "Describe this room type...".to_string(),
                oninput: move |value| form.write().description = value,
            }
            div { class: "grid grid-cols-2 gap-4",
                TextInput {
                    label: "Min Capacity *".to_string(),
                    value: current.min_capacity.clone(),
                    input_type: "number".to_string(),
                    required: true,
                    oninput: move |value| form.write().min_capacity = value,
                }
                TextInput {
                    label: "Max Capacity *".to_string(),
                    value: current.max_capacity.clone(),
                    input_type: "number".to_string(),
                    required: true,
                    oninput: move |value| form.write().max_capacity = value,
                }
            }
            p { class: "rounded-md border border-blue-200 bg-blue-50 p-3 text-sm text-blue-800",
                "Total rooms and blockchain counts are calculated from the Rooms tab."
            }
            TextArea {
                label: "Amenities".to_string(),
                value: current.amenities.clone(),
                rows: 4,
                placeholder: "One amenity per line".to_string(),
                oninput: move |value| form.write().amenities = value,
            }
            div { class: "flex gap-4 pt-2",
                Button { disabled: saving(), onclick: on_submit, "{submit_label}" }
                Button {
                    variant: "secondary".to_string(),
                    onclick: move |_| oncancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_status_badges() {
        assert_eq!(room_status_badge(&RoomStatus::Available), "bg-green-100 text-green-800");
        assert_eq!(room_status_badge(&RoomStatus::Occupied), "bg-red-100 text-red-800");
        assert_eq!(room_status_badge(&RoomStatus::OutOfOrder), "bg-yellow-100 text-yellow-800");
        assert_ne!(tab_class(true), tab_class(false));
    }
}
