/// Widget-based rendering infrastructure for TUI
///
/// Widgets are small, focused leaves of the element tree. Each one renders
/// itself directly into a ratatui Buffer using the applied palette, so it can
/// be tested by rendering into a test buffer.
pub mod header;
pub use header::Header;

pub mod notification_stack;
pub use notification_stack::NotificationStack;

pub mod player;
pub use player::PlayerWidget;

pub mod settings_modal;
pub use settings_modal::SettingsModal;

pub mod status_bar;
pub use status_bar::StatusBar;

pub mod tile_grid;
pub use tile_grid::TileGrid;
