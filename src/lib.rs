pub mod app;
pub use app::run;

pub mod config;
pub mod engine;
pub mod host;
pub mod model;
pub mod notify;
pub mod presentation;
pub mod queue;
pub mod target;
pub mod utils;

// Platform abstraction layer
pub mod platform;

pub mod ui {
    pub mod icon;
    pub mod menu;

    #[cfg(target_os = "windows")]
    pub mod tray;
}

#[cfg(test)]
mod testing;
