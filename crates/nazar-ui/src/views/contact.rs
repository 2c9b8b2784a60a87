//! Contact page. Static; emits nothing.

use gpui::{div, prelude::*, AnyElement, Context};

use super::{card, heading, muted, page, PortalShell};
use crate::theme::ThemeExt;

const CONTACTS: [(&str, &str); 3] = [
    ("Manzil", "Toshkent sh., Chilonzor tumani"),
    ("Telefon", "+998 90 123 45 67"),
    ("Ish vaqti", "Du-Sha, 09:00 - 20:00"),
];

pub(super) fn render(cx: &Context<PortalShell>) -> AnyElement {
    let theme = cx.theme();

    let mut rows = card(theme);
    for (label, value) in CONTACTS {
        rows = rows.child(
            div()
                .flex()
                .justify_between()
                .child(muted(label, theme))
                .child(div().text_color(theme.text).child(value)),
        );
    }

    page("contact", theme)
        .child(heading("Aloqa", theme))
        .child(rows)
        .into_any_element()
}
