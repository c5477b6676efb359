//! Hotel detail with room availability for a stay

use dioxus::prelude::*;

use crate::components::{EmptyState, ErrorMessage, NotificationStack, Select, Spinner};
use crate::hooks::{use_notifications, use_session};
use crate::models::{BookableRoom, MeetingPackage};
use crate::services::HotelApi;
use crate::utils::{default_stay, format_rupiah, validate_stay};

const PACKAGE_OPTIONS: [(&str, &str); 3] = [
    ("hourly", "Hourly"),
    ("half_day", "Half day"),
    ("full_day", "Full day"),
];

fn package_from_value(value: &str) -> Option<MeetingPackage> {
    match value {
        "hourly" => Some(MeetingPackage::Hourly),
        "half_day" => Some(MeetingPackage::HalfDay),
        "full_day" => Some(MeetingPackage::FullDay),
        _ => None,
    }
}

#[component]
pub fn HotelDetailPage(id: i64) -> Element {
    let context = use_session();
    let notifications = use_notifications();
    let (today, tomorrow) = use_hook(|| default_stay(chrono::Local::now().date_naive()));
    let mut check_in = use_signal(|| today);
    let mut check_out = use_signal(|| tomorrow);
    let mut package = use_signal(|| "hourly".to_string());

    let hotel = use_resource({
        let context = context.clone();
        move || {
            let api = HotelApi::new(context.client());
            async move { api.hotel(id).await }
        }
    });

    let rooms = use_resource(move || {
        let api = HotelApi::new(context.client());
        let (arrive, leave) = (check_in(), check_out());
        let mut notifications = notifications;
        async move {
            validate_stay(&arrive, &leave)?;
            let result = api.rooms_with_status(id, &arrive, &leave).await;
            if let Err(e) = &result {
                notifications.error(e);
            }
            result
        }
    });

    let header = match &*hotel.read() {
        None => rsx! { Spinner { message: Some("Loading hotel...".to_string()) } },
        Some(Err(e)) => rsx! { ErrorMessage { message: e.user_message() } },
        Some(Ok(hotel)) => {
            let image = hotel.image_or_fallback().to_string();
            rsx! {
                div { class: "mb-6 overflow-hidden rounded-lg bg-white shadow",
                    img { class: "h-64 w-full object-cover", src: "{image}", alt: "{hotel.name}" }
                    div { class: "p-6",
                        h1 { class: "text-2xl font-bold text-gray-900", "{hotel.name}" }
                        p { class: "text-gray-600", "{hotel.address}, {hotel.city}" }
                        p { class: "mt-3 text-gray-700", "{hotel.description}" }
                    }
                }
            }
        }
    };

    let selected_package = package_from_value(&package());
    let room_list = match &*rooms.read() {
        None => rsx! { Spinner { message: Some("Checking availability...".to_string()) } },
        Some(Err(e)) => rsx! { ErrorMessage { message: e.user_message() } },
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState { message: "No rooms available for these dates".to_string() }
        },
        Some(Ok(list)) => rsx! {
            div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                for room in list.iter().cloned() {
                    RoomCard { key: "{room.id}", room, package: selected_package }
                }
            }
        },
    };

    rsx! {
        div {
            {header}
            div { class: "mb-6 flex flex-wrap items-end gap-4 rounded-lg bg-white p-4 shadow",
                label { class: "flex flex-col text-sm font-medium text-gray-700",
                    "Check-in"
                    input {
                        r#type: "date",
                        class: "mt-1 rounded-md border border-gray-300 px-3 py-2 text-sm",
                        value: "{check_in}",
                        oninput: move |evt| check_in.set(evt.value())
                    }
                }
                label { class: "flex flex-col text-sm font-medium text-gray-700",
                    "Check-out"
                    input {
                        r#type: "date",
                        class: "mt-1 rounded-md border border-gray-300 px-3 py-2 text-sm",
                        value: "{check_out}",
                        oninput: move |evt| check_out.set(evt.value())
                    }
                }
                Select {
                    label: "Meeting package".to_string(),
                    value: package(),
                    options: PACKAGE_OPTIONS
                        .iter()
                        .map(|(value, label)| (value.to_string(), label.to_string()))
                        .collect::<Vec<_>>(),
                    onchange: move |value| package.set(value),
                }
            }
            h2 { class: "text-xl font-semibold text-gray-900 mb-4", "Rooms" }
            {room_list}
            NotificationStack { notifications }
        }
    }
}

#[component]
fn RoomCard(room: BookableRoom, #[props(!optional)] package: Option<MeetingPackage>) -> Element {
    let price = format_rupiah(room.category.price_for(package));
    let label = room.category.price_label();
    let kind = if room.category.is_meeting_room() {
        "Meeting room"
    } else {
        "Hotel room"
    };
    let (badge_class, badge) = if room.is_selectable() {
        ("bg-green-100 text-green-800", "Available")
    } else if room.is_booked {
        ("bg-red-100 text-red-800", "Booked")
    } else {
        ("bg-gray-100 text-gray-700", "Unavailable")
    };

    rsx! {
        div {
            class: "rounded-lg bg-white p-4 shadow",
            class: if !room.is_selectable() { "opacity-60" },
            div { class: "flex items-center justify-between",
                h3 { class: "font-semibold text-gray-900", "Room {room.room_number}" }
                span { class: "rounded px-2 py-1 text-xs {badge_class}", "{badge}" }
            }
            p { class: "text-sm text-gray-600", "{room.type_name} · {kind}" }
            p { class: "text-sm text-gray-500", "Floor {room.floor} · up to {room.max_capacity} people" }
            p { class: "mt-2 text-lg font-bold text-blue-600",
                "{price}"
                span { class: "text-sm font-normal text-gray-500", "{label}" }
            }
        }
    }
}
