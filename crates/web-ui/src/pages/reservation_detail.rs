//! Booking confirmation for one reservation

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{ErrorMessage, Spinner};
use crate::hooks::use_session;
use crate::models::{Reservation, format_long_date, format_timestamp};
use crate::services::ReservationApi;
use crate::utils::format_rupiah;

#[component]
pub fn ReservationDetailPage(id: String) -> Element {
    let context = use_session();

    let reservation = use_resource(use_reactive!(|id| {
        let api = ReservationApi::new(context.client());
        async move { api.reservation(&id).await }
    }));

    match &*reservation.read() {
        None => rsx! { Spinner { message: Some("Loading reservation details...".to_string()) } },
        Some(Err(e)) => rsx! {
            div { class: "space-y-4 text-center",
                ErrorMessage { message: e.user_message() }
                Link { to: Route::HotelsPage {}, class: "text-blue-600 hover:text-blue-700", "Back to Hotels" }
            }
        },
        Some(Ok(reservation)) => rsx! { ReservationSummary { reservation: reservation.clone() } },
    }
}

#[component]
fn DetailItem(label: String, value: String) -> Element {
    rsx! {
        div {
            p { class: "text-sm text-gray-600", "{label}" }
            p { class: "font-semibold text-gray-900", "{value}" }
        }
    }
}

#[component]
fn ReservationSummary(reservation: Reservation) -> Element {
    let badge = reservation.status.badge_class();
    let hotel = reservation.hotel.clone();
    let package = reservation.room_type.clone();
    let event = [
        ("Check-in", format_long_date(&reservation.check_in)),
        ("Check-out", format_long_date(&reservation.check_out)),
        ("Number of Guests", format!("{} guests", reservation.guest_count)),
        ("Event Type", reservation.event_type.clone()),
    ];
    let mut contact = vec![
        ("Full Name", reservation.customer_name.clone()),
        ("Email", reservation.customer_email.clone()),
        ("Phone Number", reservation.customer_phone.clone()),
    ];
    if !reservation.customer_ref.is_empty() {
        contact.push(("Company/Organization", reservation.customer_ref.clone()));
    }
    let price_per_person = format_rupiah(reservation.price_per_person);
    let total = format_rupiah(reservation.total_price);
    let created = format_timestamp(&reservation.created_at);

    rsx! {
        div { class: "mx-auto max-w-3xl space-y-6",
            div { class: "rounded-lg bg-green-600 p-6 text-white shadow",
                h1 { class: "text-2xl font-bold", "Booking Confirmed!" }
                p { class: "mt-2", "Your reservation has been recorded on the blockchain ledger." }
                p { class: "mt-2 font-mono font-semibold", "{reservation.reservation_id}" }
            }

            div { class: "flex items-center justify-between rounded-lg bg-white p-6 shadow",
                h2 { class: "text-xl font-bold text-gray-900", "Reservation Status" }
                span { class: "rounded-full px-3 py-1 text-sm font-semibold {badge}", "{reservation.status}" }
            }

            div { class: "space-y-4 rounded-lg bg-white p-6 shadow",
                h2 { class: "text-xl font-bold text-gray-900", "Booking Details" }
                if let Some(hotel) = hotel {
                    DetailItem { label: "Hotel".to_string(), value: format!("{} ({})", hotel.name, hotel.city) }
                }
                if let Some(package) = package {
                    DetailItem { label: "Meeting Package".to_string(), value: package.type_name.clone() }
                    p { class: "text-sm text-gray-600", "{package.description}" }
                }
            }

            div { class: "space-y-4 rounded-lg bg-white p-6 shadow",
                h2 { class: "text-xl font-bold text-gray-900", "Event Information" }
                div { class: "grid grid-cols-1 gap-4 md:grid-cols-2",
                    for (label, value) in event {
                        DetailItem { label: label.to_string(), value }
                    }
                }
                if !reservation.event_description.is_empty() {
                    DetailItem {
                        label: "Event Description".to_string(),
                        value: reservation.event_description.clone(),
                    }
                }
            }

            div { class: "space-y-4 rounded-lg bg-white p-6 shadow",
                h2 { class: "text-xl font-bold text-gray-900", "Contact Information" }
                div { class: "grid grid-cols-1 gap-4 md:grid-cols-2",
                    for (label, value) in contact {
                        DetailItem { label: label.to_string(), value }
                    }
                }
            }

            div { class: "space-y-2 rounded-lg bg-white p-6 shadow",
                h2 { class: "text-xl font-bold text-gray-900", "Payment Details" }
                div { class: "flex justify-between",
                    span { class: "text-gray-600", "Price per person:" }
                    span { class: "font-medium", "{price_per_person}" }
                }
                div { class: "flex justify-between",
                    span { class: "text-gray-600", "Number of guests:" }
                    span { class: "font-medium", "{reservation.guest_count}" }
                }
                div { class: "flex justify-between border-t pt-2",
                    span { class: "text-lg font-bold text-gray-900", "Total Amount:" }
                    span { class: "text-lg font-bold text-blue-600", "{total}" }
                }
            }

            div { class: "rounded-lg bg-gray-800 p-6 text-sm text-white shadow",
                p { class: "font-bold", "Blockchain Security" }
                p { "Reservation ID: {reservation.reservation_id}" }
                p { "Created: {created}" }
            }

            div { class: "flex gap-4",
                Link {
                    to: Route::HotelsPage {},
                    class: "px-4 py-2 rounded-md text-sm font-medium bg-blue-600 text-white hover:bg-blue-700",
                    "Book Another Hotel"
                }
                Link {
                    to: Route::MyBookingsPage {},
                    class: "px-4 py-2 rounded-md text-sm font-medium bg-gray-200 text-gray-800 hover:bg-gray-300",
                    "My Bookings"
                }
            }
        }
    }
}
