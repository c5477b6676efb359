//! UI Components module

pub mod feedback;
pub mod forms;
pub mod layout;
pub mod loading;
pub mod room_tile;

pub use feedback::{EmptyState, ErrorMessage, NotificationStack, Toast};
pub use forms::{Button, Checkbox, Select, TextArea, TextInput};
pub use layout::AppLayout;
pub use loading::{InlineLoader, Spinner};
pub use room_tile::{RoomTileView, StatusLegend};
