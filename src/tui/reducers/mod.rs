pub mod modal;
pub mod notifications;
pub mod player;
pub mod settings;
pub mod tiles;

pub use modal::reduce_modal;
pub use notifications::reduce_notifications;
pub use player::reduce_player;
pub use settings::reduce_settings;
pub use tiles::reduce_tiles;
