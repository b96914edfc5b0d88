pub mod controller;
pub mod draw;
pub mod input;
pub mod layout;
pub mod model;
pub mod projection;
pub mod theme;
pub mod transition;

pub use controller::{MenuController, Phase, StatusBarStyle};
pub use layout::{Anchor, DeviceClass, Insets, Rect, Size, Viewport};
pub use model::{Alignment, Entry, EntryId, Icon, MenuGroup, MenuItem};
pub use theme::Theme;
