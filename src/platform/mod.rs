//! Platform abstraction layer
//!
//! This module provides platform-specific implementations for:
//! - Window enumeration and visibility control
//! - Program launch and process termination
//! - User-facing notices

#[cfg(target_os = "windows")]
pub mod windows;

// Re-export the current platform's modules
#[cfg(target_os = "windows")]
pub use windows as current;
