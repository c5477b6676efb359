//! API services module

pub mod api_client;
pub mod auth;
pub mod blockchain_api;
pub mod config;
pub mod dialogs;
pub mod hotel_admin_api;
pub mod hotel_api;
pub mod layout_api;
pub mod reservation_api;
pub mod session;
pub mod transport;

pub use api_client::*;
pub use auth::*;
pub use blockchain_api::*;
pub use config::{ApiConfig, endpoints};
pub use dialogs::{BrowserDialogs, Dialogs};
pub use hotel_admin_api::*;
pub use hotel_api::*;
pub use layout_api::*;
pub use reservation_api::*;
pub use session::*;
pub use transport::*;
