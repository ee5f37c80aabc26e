//! Finding, classifying and controlling the supervised target.

pub mod classifier;
pub mod controller;
pub mod locator;

pub use classifier::classify;
pub use controller::ProcessController;
pub use locator::locate;
