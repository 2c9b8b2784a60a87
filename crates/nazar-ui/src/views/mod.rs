//! UI views for the portal.
//!
//! `PortalShell` is the only stateful view. The other modules are plain
//! renderers: they read props, build elements and attach click listeners
//! that emit the view's typed events back into the shell.

mod admin;
mod auth;
mod catalog;
mod chrome;
mod contact;
mod home;
mod portal_shell;
mod profile;

pub use portal_shell::{PortalShell, PortalShellEvent};

use gpui::{div, prelude::*, px, Div, ElementId, SharedString, Stateful};

use crate::theme::Theme;

// =============================================================================
// Shared Building Blocks
// =============================================================================

/// Padded page column.
fn page(id: &'static str, theme: &Theme) -> Stateful<Div> {
    div()
        .id(id)
        .w_full()
        .px(theme.spacing * 6.0)
        .py(theme.spacing * 4.0)
        .flex()
        .flex_col()
        .gap(theme.spacing * 2.0)
}

fn heading(text: impl Into<SharedString>, theme: &Theme) -> Div {
    div()
        .text_size(theme.font_size_large)
        .font_weight(gpui::FontWeight::BOLD)
        .text_color(theme.text)
        .child(text.into())
}

fn muted(text: impl Into<SharedString>, theme: &Theme) -> Div {
    div()
        .text_sm()
        .text_color(theme.text_muted)
        .child(text.into())
}

/// Clickable pill button; the caller attaches `on_click`.
fn button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    primary: bool,
    theme: &Theme,
) -> Stateful<Div> {
    let base = div()
        .id(ElementId::Name(id.into()))
        .px_4()
        .py_2()
        .rounded(px(999.0))
        .cursor_pointer()
        .text_sm()
        .font_weight(gpui::FontWeight::SEMIBOLD)
        .child(label.into());

    if primary {
        base.bg(theme.accent)
            .text_color(theme.on_accent)
            .hover(|style| style.opacity(0.9))
    } else {
        let hover = theme.surface_hover;
        base.border_1()
            .border_color(theme.border)
            .text_color(theme.text)
            .hover(move |style| style.bg(hover))
    }
}

/// Bordered surface card.
fn card(theme: &Theme) -> Div {
    div()
        .p_4()
        .flex()
        .flex_col()
        .gap_2()
        .bg(theme.surface)
        .border_1()
        .border_color(theme.border)
        .rounded(theme.radius)
}

/// Label over value.
fn stat(label: impl Into<SharedString>, value: impl Into<SharedString>, theme: &Theme) -> Div {
    card(theme)
        .flex_1()
        .child(muted(label, theme))
        .child(
            div()
                .text_lg()
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .text_color(theme.text)
                .child(value.into()),
        )
}
