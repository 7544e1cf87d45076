mod app;
mod forms;

pub use app::ConfigToolApp;
