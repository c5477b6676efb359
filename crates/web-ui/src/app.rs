//! Main application component and routes

use dioxus::prelude::*;

use crate::components::{AppLayout, EmptyState};
use crate::hooks::use_session_provider;
use crate::pages::{
    BlockchainPage, HomePage, HotelAdminPage, HotelDetailPage, HotelsPage, LoginPage,
    MyBookingsPage, ReservationDetailPage, RoomLayoutPage,
};

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        HomePage {},
        #[route("/login")]
        LoginPage {},
        #[route("/hotels")]
        HotelsPage {},
        #[route("/hotels/:id")]
        HotelDetailPage { id: i64 },
        #[route("/blockchain")]
        BlockchainPage {},
        #[route("/my-bookings")]
        MyBookingsPage {},
        #[route("/reservations/:id")]
        ReservationDetailPage { id: String },
        #[route("/hotel-admin")]
        HotelAdminPage {},
        #[route("/hotel-admin/room-layout")]
        RoomLayoutPage {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        EmptyState { message: format!("Page not found: /{path}") }
    }
}

#[component]
pub fn App() -> Element {
    use_session_provider();

    rsx! {
        Router::<Route> {}
    }
}
