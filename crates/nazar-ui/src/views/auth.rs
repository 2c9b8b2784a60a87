//! Mock login screen.
//!
//! No credentials are collected; the two buttons ask the store to log in as
//! a student or as an admin.

use gpui::{div, prelude::*, AnyElement, Context};
use nazar_core::LoginKind;
use nazar_portal::AuthEvent;

use super::{button, card, heading, muted, page, PortalShell};
use crate::theme::ThemeExt;

pub(super) fn render(cx: &Context<PortalShell>) -> AnyElement {
    let theme = cx.theme();

    page("auth", theme)
        .items_center()
        .child(
            card(theme)
                .w(theme.card_height * 3.0)
                .gap_4()
                .child(heading("Kirish", theme))
                .child(muted(
                    "Talaba sifatida kiring va ustoz hamda kursni tanlang.",
                    theme,
                ))
                .child(
                    div()
                        .flex()
                        .gap_2()
                        .child(
                            button("login-student", "Talaba sifatida kirish", true, theme)
                                .on_click(PortalShell::emit(
                                    AuthEvent::Login(LoginKind::Student),
                                    cx,
                                )),
                        )
                        .child(
                            button("login-admin", "Admin", false, theme).on_click(
                                PortalShell::emit(AuthEvent::Login(LoginKind::Admin), cx),
                            ),
                        ),
                ),
        )
        .into_any_element()
}
