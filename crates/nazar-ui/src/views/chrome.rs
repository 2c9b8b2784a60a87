//! Nav bar and footer.

use gpui::{div, prelude::*, AnyElement, Context, ElementId, SharedString};
use nazar_core::PUBLIC_NAV;
use nazar_portal::{NavBar, NavEvent};

use super::{button, muted, PortalShell};
use crate::theme::ThemeExt;

pub(super) fn render_nav_bar(bar: &NavBar, cx: &Context<PortalShell>) -> AnyElement {
    let theme = cx.theme();

    let mut links = div().flex().items_center().gap_1();
    for entry in &bar.entries {
        let hover = theme.surface_hover;
        let link = div()
            .id(ElementId::Name(SharedString::from(format!(
                "nav-{}",
                entry.item.view
            ))))
            .px_3()
            .py_1()
            .rounded(theme.radius)
            .cursor_pointer()
            .text_sm()
            .text_color(if entry.active {
                theme.accent
            } else {
                theme.text_muted
            })
            .when(entry.active, |this| {
                this.font_weight(gpui::FontWeight::SEMIBOLD)
            })
            .hover(move |style| style.bg(hover))
            .child(entry.item.label)
            .on_click(PortalShell::emit(NavEvent::Navigate(entry.item.view), cx));
        links = links.child(link);
    }

    let account = button(
        "nav-account",
        bar.account.label(),
        true,
        theme,
    )
    .on_click(PortalShell::emit(
        NavEvent::Navigate(bar.account.target()),
        cx,
    ));

    div()
        .id("nav-bar")
        .w_full()
        .h(theme.nav_height)
        .px_6()
        .flex()
        .items_center()
        .justify_between()
        .bg(theme.chrome)
        .border_b_1()
        .border_color(theme.border)
        .child(
            div()
                .id("nav-logo")
                .cursor_pointer()
                .font_weight(gpui::FontWeight::BOLD)
                .text_color(theme.accent)
                .child("NAZAR MAXRAM")
                .on_click(PortalShell::emit(NavEvent::Navigate(PUBLIC_NAV[0].view), cx)),
        )
        .child(links)
        .child(account)
        .into_any_element()
}

pub(super) fn render_footer(cx: &Context<PortalShell>) -> AnyElement {
    let theme = cx.theme();

    let mut links = div().flex().gap_4();
    for item in PUBLIC_NAV {
        links = links.child(
            div()
                .id(ElementId::Name(SharedString::from(format!(
                    "footer-{}",
                    item.view
                ))))
                .cursor_pointer()
                .text_sm()
                .text_color(theme.text_muted)
                .child(item.label)
                .on_click(PortalShell::emit(NavEvent::Navigate(item.view), cx)),
        );
    }

    div()
        .id("footer")
        .w_full()
        .px_6()
        .py_4()
        .flex()
        .items_center()
        .justify_between()
        .bg(theme.chrome)
        .border_t_1()
        .border_color(theme.border)
        .child(muted("© Nazar Maxram o'quv markazi", theme))
        .child(links)
        .into_any_element()
}
