// Component library exports

pub mod app;
pub mod overlays;

pub use app::App;
pub use overlays::{SettingsModalOverlay, ToastOverlay};
