pub mod commands;
pub mod config;
pub mod settings;
pub mod tui;

#[cfg(any(test, feature = "development"))]
pub mod dev;
