//! GPUI frontend for the Nazar Maxram student portal.
//!
//! This crate provides the native user interface:
//! - PortalWindow for window management
//! - PortalShell, the root view that mirrors the portal store
//! - One renderer per portal view
//! - Theme and key bindings driven by `nazar.toml`

pub mod actions;
pub mod keymap;
pub mod theme;
pub mod views;
pub mod window;

pub use keymap::{config_bindings, default_bindings, KeyHandler, PendingBinding};
pub use theme::{Appearance, Theme, ThemeExt, ThemeSettings};
pub use views::{PortalShell, PortalShellEvent};
pub use window::{run_portal, PortalWindow};
