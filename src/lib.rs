pub mod cli;
pub mod draw;
pub mod hotkey;
pub mod logging;
pub mod settings;
pub mod settings_store;
