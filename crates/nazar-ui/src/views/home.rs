//! Landing page.

use gpui::{div, prelude::*, AnyElement, Context};
use nazar_core::View;
use nazar_portal::HomeEvent;

use super::{button, heading, muted, page, PortalShell};
use crate::theme::ThemeExt;

pub(super) fn render(cx: &Context<PortalShell>) -> AnyElement {
    let theme = cx.theme();

    page("home", theme)
        .items_start()
        .child(heading("Kelajagingizni biz bilan quring", theme))
        .child(muted(
            "Tajribali ustozlar, zamonaviy kurslar va shaxsiy kabinet.",
            theme,
        ))
        .child(
            div()
                .flex()
                .gap_2()
                .child(
                    button("home-courses", "Kurslarni ko'rish", true, theme)
                        .on_click(PortalShell::emit(HomeEvent::Navigate(View::Courses), cx)),
                )
                .child(
                    button("home-teachers", "Ustozlar", false, theme)
                        .on_click(PortalShell::emit(HomeEvent::Navigate(View::Teachers), cx)),
                )
                .child(
                    button("home-contact", "Bog'lanish", false, theme)
                        .on_click(PortalShell::emit(HomeEvent::Navigate(View::Contact), cx)),
                ),
        )
        .into_any_element()
}
