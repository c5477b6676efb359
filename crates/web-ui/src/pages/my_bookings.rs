//! The logged-in guest's reservations

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{EmptyState, ErrorMessage, Spinner};
use crate::hooks::{use_require_login, use_session};
use crate::models::{BookingFilter, Reservation, filter_bookings, format_long_date};
use crate::services::ReservationApi;
use crate::utils::format_rupiah;

#[component]
pub fn MyBookingsPage() -> Element {
    if use_require_login().is_none() {
        return rsx! { Spinner { message: Some("Checking access...".to_string()) } };
    }

    rsx! { BookingsView {} }
}

#[component]
fn BookingsView() -> Element {
    let context = use_session();
    let mut filter = use_signal(BookingFilter::default);
    let today = use_hook(|| chrono::Local::now().date_naive());

    let bookings = use_resource(move || {
        let api = ReservationApi::new(context.client());
        async move { api.my_bookings().await }
    });

    let content = match &*bookings.read() {
        None => rsx! { Spinner { message: Some("Loading your bookings...".to_string()) } },
        Some(Err(e)) => rsx! { ErrorMessage { message: e.user_message() } },
        Some(Ok(list)) => {
            let shown: Vec<Reservation> = filter_bookings(list, filter(), today)
                .into_iter()
                .cloned()
                .collect();
            let total = list.len();

            rsx! {
                div { class: "flex flex-wrap gap-2 rounded-lg bg-white p-4 shadow",
                    for option in BookingFilter::ALL {
                        FilterTab {
                            filter: option,
                            active: filter() == option,
                            count: (option == BookingFilter::All).then_some(total),
                            onselect: move |selected| filter.set(selected),
                        }
                    }
                }
                if shown.is_empty() {
                    EmptyState { message: filter().empty_message() }
                    Link {
                        to: Route::HotelsPage {},
                        class: "text-blue-600 hover:text-blue-700",
                        "Browse Hotels"
                    }
                } else {
                    div { class: "space-y-4",
                        for reservation in shown {
                            BookingCard { key: "{reservation.id}", reservation }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "space-y-6",
            div {
                h1 { class: "text-2xl font-bold text-gray-900", "My Bookings" }
                p { class: "text-gray-600", "Manage and track your hotel reservations" }
            }
            {content}
        }
    }
}

#[component]
fn FilterTab(
    filter: BookingFilter,
    active: bool,
    count: Option<usize>,
    onselect: EventHandler<BookingFilter>,
) -> Element {
    let class = if active {
        "bg-blue-600 text-white"
    } else {
        "bg-gray-100 text-gray-700 hover:bg-gray-200"
    };
    let label = match count {
        Some(count) => format!("{} ({count})", filter.label()),
        None => filter.label().to_string(),
    };

    rsx! {
        button {
            class: "px-4 py-2 rounded-md text-sm font-medium {class}",
            onclick: move |_| onselect.call(filter),
            "{label}"
        }
    }
}

#[component]
fn BookingCard(reservation: Reservation) -> Element {
    let hotel = reservation.hotel.clone().unwrap_or_default();
    let rating = format!("{:.1}", hotel.rating);
    let check_in = format_long_date(&reservation.check_in);
    let check_out = format_long_date(&reservation.check_out);
    let total = format_rupiah(reservation.total_price);
    let badge = reservation.status.badge_class();
    let package = reservation.package_name().to_string();
    let detail = Route::ReservationDetailPage {
        id: reservation.reservation_id.clone(),
    };

    rsx! {
        div { class: "rounded-lg bg-white p-6 shadow",
            div { class: "flex flex-col gap-4 lg:flex-row lg:justify-between",
                div { class: "flex-1 space-y-2",
                    div { class: "flex items-start justify-between",
                        div {
                            h3 { class: "text-xl font-bold text-gray-900", "{hotel.name}" }
                            p { class: "text-sm text-gray-600", "{hotel.city} • ★ {rating}" }
                        }
                        span { class: "rounded-full px-3 py-1 text-sm font-semibold {badge}", "{reservation.status}" }
                    }
                    p { class: "text-sm font-medium text-gray-700", "{package}" }
                    div { class: "grid grid-cols-1 gap-4 text-sm md:grid-cols-3",
                        div {
                            p { class: "text-xs text-gray-500", "Check-in" }
                            p { class: "font-medium", "{check_in}" }
                        }
                        div {
                            p { class: "text-xs text-gray-500", "Check-out" }
                            p { class: "font-medium", "{check_out}" }
                        }
                        div {
                            p { class: "text-xs text-gray-500", "Guests" }
                            p { class: "font-medium", "{reservation.guest_count} people" }
                        }
                    }
                }
                div { class: "lg:text-right",
                    p { class: "text-sm text-gray-600", "Total Amount" }
                    p { class: "text-2xl font-bold text-blue-600", "{total}" }
                    p { class: "mt-1 text-xs text-gray-500", "Booking ID: {reservation.reservation_id}" }
                }
            }
            div { class: "mt-4 border-t pt-4",
                Link { to: detail, class: "text-blue-600 hover:text-blue-700 font-medium", "View Details" }
            }
        }
    }
}
