//! Page chrome shared by every route

use dioxus::prelude::*;

use crate::app::Route;
use crate::hooks::use_session;

/// Top navigation bar above the routed page
#[component]
pub fn AppLayout() -> Element {
    let mut context = use_session();
    let navigator = use_navigator();
    let user = context.current_user();
    let is_staff = user.as_ref().is_some_and(|u| u.role.is_hotel_staff());

    rsx! {
        div { class: "min-h-screen bg-gray-100",
            nav { class: "bg-white shadow",
                div { class: "container mx-auto flex items-center justify-between px-4 py-3",
                    Link { to: Route::HotelsPage {}, class: "text-xl font-bold text-blue-600", "BuatEvent" }
                    div { class: "flex items-center gap-4 text-sm",
                        Link { to: Route::HotelsPage {}, class: "text-gray-700 hover:text-blue-600", "Hotels" }
                        Link { to: Route::BlockchainPage {}, class: "text-gray-700 hover:text-blue-600", "Blockchain" }
                        if user.is_some() {
                            Link { to: Route::MyBookingsPage {}, class: "text-gray-700 hover:text-blue-600", "My Bookings" }
                        }
                        if is_staff {
                            Link { to: Route::HotelAdminPage {}, class: "text-gray-700 hover:text-blue-600", "Manage Hotel" }
                            Link { to: Route::RoomLayoutPage {}, class: "text-gray-700 hover:text-blue-600", "Room Layout" }
                        }
                        if let Some(user) = user {
                            span { class: "text-gray-500", "{user.name}" }
                            button {
                                class: "text-red-600 hover:text-red-700",
                                onclick: move |_| {
                                    context.logout();
                                    navigator.replace(Route::LoginPage {});
                                },
                                "Logout"
                            }
                        } else {
                            Link { to: Route::LoginPage {}, class: "text-blue-600 hover:text-blue-700", "Login" }
                        }
                    }
                }
            }
            main { class: "container mx-auto px-4 py-6",
                Outlet::<Route> {}
            }
        }
    }
}
