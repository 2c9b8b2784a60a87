//! Admin panel. Full-screen: the shell hides the nav bar and footer.

use gpui::{div, prelude::*, AnyElement, Context};
use nazar_core::AdminStats;
use nazar_portal::AdminEvent;

use super::{button, heading, muted, page, stat, PortalShell};
use crate::theme::ThemeExt;

pub(super) fn render(stats: &AdminStats, cx: &Context<PortalShell>) -> AnyElement {
    let theme = cx.theme();

    page("admin", theme)
        .size_full()
        .bg(theme.surface)
        .child(
            div()
                .flex()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .gap_1()
                        .child(heading("Admin panel", theme))
                        .child(muted("Nazar Maxram boshqaruv paneli", theme)),
                )
                .child(
                    button("admin-logout", "Chiqish", false, theme)
                        .on_click(PortalShell::emit(AdminEvent::Logout, cx)),
                ),
        )
        .child(
            div()
                .flex()
                .gap_2()
                .child(stat("Jami talabalar", stats.total_students.to_string(), theme))
                .child(stat("Daromad", stats.total_revenue.clone(), theme))
                .child(stat("Faol kurslar", stats.active_courses.to_string(), theme))
                .child(stat(
                    "Yangi ro'yxatdan o'tganlar",
                    stats.new_registrations.to_string(),
                    theme,
                )),
        )
        .into_any_element()
}
