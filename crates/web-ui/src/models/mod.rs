//! Data models for the BuatEvent frontend

pub mod auth;
pub mod availability;
pub mod blockchain;
pub mod error;
pub mod hotel;
pub mod inventory;
pub mod reservation;
pub mod room;

pub use auth::*;
pub use availability::*;
pub use blockchain::*;
pub use error::*;
pub use hotel::*;
pub use inventory::*;
pub use reservation::*;
pub use room::*;
