//! Page components

pub mod blockchain;
pub mod home;
pub mod hotel_admin;
pub mod hotel_detail;
pub mod hotels;
pub mod login;
pub mod my_bookings;
pub mod reservation_detail;
pub mod room_layout;

pub use blockchain::BlockchainPage;
pub use home::HomePage;
pub use hotel_admin::HotelAdminPage;
pub use hotel_detail::HotelDetailPage;
pub use hotels::HotelsPage;
pub use login::LoginPage;
pub use my_bookings::MyBookingsPage;
pub use reservation_detail::ReservationDetailPage;
pub use room_layout::RoomLayoutPage;
