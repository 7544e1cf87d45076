pub mod binder;
pub mod config;
pub mod editor;
pub mod error;
pub mod game_info;
pub mod launch;
pub mod ui;
pub mod widget;

pub use editor::ConfigEditor;
pub use error::{ConfigToolError, Result};
