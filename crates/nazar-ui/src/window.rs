//! Window management for the portal.
//!
//! `PortalWindow` owns the window handle and keeps the shell alive as a GPUI
//! global for the lifetime of the app.

use std::sync::Arc;

use gpui::{
    px, size, App, AppContext, Bounds, SharedString, TitlebarOptions, WindowBounds, WindowHandle,
    WindowOptions,
};
use nazar_core::Catalog;
use nazar_portal::PortalStore;

use crate::keymap::{apply_keybindings, PendingBinding};
use crate::theme::{Theme, ThemeSettings};
use crate::views::{PortalShell, PortalShellEvent};

// =============================================================================
// Window Configuration
// =============================================================================

/// Default window dimensions.
pub const DEFAULT_WIDTH: f32 = 1180.0;
pub const DEFAULT_HEIGHT: f32 = 780.0;

pub const WINDOW_TITLE: &str = "Nazar Maxram";

/// Window options without bounds; bounds need the App context.
fn create_window_options() -> WindowOptions {
    WindowOptions {
        window_bounds: None,
        titlebar: Some(TitlebarOptions {
            title: Some(SharedString::from(WINDOW_TITLE)),
            ..Default::default()
        }),
        focus: true,
        show: true,
        is_movable: true,
        ..Default::default()
    }
}

// =============================================================================
// Portal Window
// =============================================================================

/// The main portal window.
pub struct PortalWindow {
    window_handle: WindowHandle<PortalShell>,
}

impl PortalWindow {
    /// Open the window with a `PortalShell` as its root view.
    ///
    /// Returns `None` if the window couldn't be created.
    pub fn new(
        store: Arc<PortalStore>,
        catalog: Arc<Catalog>,
        theme: ThemeSettings,
        cx: &mut App,
    ) -> Option<Self> {
        let window_size = size(px(DEFAULT_WIDTH), px(DEFAULT_HEIGHT));
        let bounds = Bounds::centered(None, window_size, cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..create_window_options()
        };

        let window_handle = cx
            .open_window(options, |window, cx| {
                let system_is_dark = matches!(
                    window.appearance(),
                    gpui::WindowAppearance::Dark | gpui::WindowAppearance::VibrantDark
                );
                cx.set_global(Theme::from_settings(&theme, system_is_dark));
                cx.set_global(theme);

                let shell = cx.new(|cx| PortalShell::new(store, catalog, cx));
                cx.subscribe(&shell, |_, event: &PortalShellEvent, _cx| match event {
                    PortalShellEvent::ViewChanged(view) => {
                        tracing::debug!("Window view changed to {}", view);
                    }
                })
                .detach();
                shell
            })
            .map_err(|e| tracing::error!("Failed to open window: {:?}", e))
            .ok()?;

        Some(Self { window_handle })
    }

    /// Focus the shell and activate the window.
    pub fn show(&self, cx: &mut App) {
        let _ = self.window_handle.update(cx, |shell, window, cx| {
            shell.focus(window, cx);
            window.activate_window();
        });
    }
}

// =============================================================================
// App Entry Point
// =============================================================================

/// Initialize and run the portal application.
///
/// 1. Creates the GPUI application
/// 2. Registers key bindings (defaults, then config)
/// 3. Opens the portal window
/// 4. Runs the main loop
pub fn run_portal(
    store: Arc<PortalStore>,
    catalog: Arc<Catalog>,
    theme: ThemeSettings,
    bindings: Vec<PendingBinding>,
) {
    gpui::Application::new().run(move |cx| {
        gpui_component::init(cx);

        apply_keybindings(bindings, cx);

        let Some(portal) = PortalWindow::new(store, catalog, theme, cx) else {
            tracing::error!("Failed to create portal window");
            cx.quit();
            return;
        };

        portal.show(cx);
        cx.activate(true);

        // Keep the window alive by storing it as a global
        cx.set_global(portal);
    });
}

impl gpui::Global for PortalWindow {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_options() {
        let options = create_window_options();
        assert!(options.window_bounds.is_none());
        assert!(options.show);
        assert!(options.focus);
        let title = options.titlebar.and_then(|t| t.title);
        assert_eq!(title.as_deref(), Some(WINDOW_TITLE));
    }
}
