//! BuatEvent web frontend
//!
//! Hotel browsing, the blockchain ledger viewer and the hotel admin floor-plan
//! editor. Built with Dioxus and compiled to WebAssembly.

pub mod app;
pub mod components;
pub mod editor;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod services;
pub mod utils;

pub use app::App;
