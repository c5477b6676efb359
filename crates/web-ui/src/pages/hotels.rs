//! Hotel list with city filter and search

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{EmptyState, ErrorMessage, NotificationStack, Select, Spinner};
use crate::hooks::{use_notifications, use_session};
use crate::models::{Hotel, city_options, filter_hotels};
use crate::services::HotelApi;

#[component]
pub fn HotelsPage() -> Element {
    let context = use_session();
    let notifications = use_notifications();
    let mut city = use_signal(|| "All".to_string());
    let mut query = use_signal(String::new);

    let hotels = use_resource(move || {
        let api = HotelApi::new(context.client());
        let mut notifications = notifications;
        async move {
            let result = api.list_hotels().await;
            if let Err(e) = &result {
                notifications.error(e);
            }
            result
        }
    });

    let content = match &*hotels.read() {
        None => rsx! { Spinner { message: Some("Loading hotels...".to_string()) } },
        Some(Err(e)) => rsx! { ErrorMessage { message: e.user_message() } },
        Some(Ok(list)) => {
            let cities: Vec<(String, String)> = city_options(list)
                .into_iter()
                .map(|c| (c.clone(), c))
                .collect();
            let shown: Vec<Hotel> = filter_hotels(list, &city(), &query())
                .into_iter()
                .cloned()
                .collect();

            rsx! {
                div { class: "flex flex-wrap items-end gap-4 mb-6",
                    Select {
                        label: "City".to_string(),
                        value: city(),
                        options: cities,
                        onchange: move |value| city.set(value),
                    }
                    label { class: "flex flex-col flex-1 text-sm font-medium text-gray-700",
                        "Search"
                        input {
                            r#type: "search",
                            class: "mt-1 rounded-md border border-gray-300 px-3 py-2 text-sm",
                            placeholder: "Hotel name, city or address",
                            value: "{query}",
                            oninput: move |evt| query.set(evt.value())
                        }
                    }
                }
                if shown.is_empty() {
                    EmptyState { message: "No hotels match your search".to_string() }
                } else {
                    div { class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for hotel in shown {
                            HotelCard { key: "{hotel.id}", hotel }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Hotels" }
            {content}
            NotificationStack { notifications }
        }
    }
}

#[component]
fn HotelCard(hotel: Hotel) -> Element {
    let image = hotel.image_or_fallback().to_string();
    let rating = format!("{:.1}", hotel.rating);

    rsx! {
        Link {
            to: Route::HotelDetailPage { id: hotel.id },
            class: "block overflow-hidden rounded-lg bg-white shadow hover:shadow-lg transition",
            img { class: "h-48 w-full object-cover", src: "{image}", alt: "{hotel.name}" }
            div { class: "p-4",
                div { class: "flex items-center justify-between",
                    h2 { class: "text-lg font-semibold text-gray-900", "{hotel.name}" }
                    span { class: "text-sm text-yellow-600", "★ {rating}" }
                }
                p { class: "text-sm text-gray-600", "{hotel.city}" }
                p { class: "mt-1 text-xs text-gray-500", "{hotel.address}" }
            }
        }
    }
}
