//! Custom hooks module

pub mod use_layout_editor;
pub mod use_notifications;
pub mod use_session;

pub use use_layout_editor::*;
pub use use_notifications::*;
pub use use_session::*;
