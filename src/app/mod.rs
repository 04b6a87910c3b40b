//! Tray lifecycle and platform integration.
//!
//! - `tray`: tray icon setup and menu (re)building
//! - `events`: tray icon and menu event handlers

pub mod events;
pub mod tray;
