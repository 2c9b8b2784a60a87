//! Course and teacher catalogs.
//!
//! Both lists render through `v_virtual_list` with fixed-height cards. In
//! selection mode (onboarding active) every card gets a select button; outside
//! it courses offer "register" and teachers are read-only.

use std::rc::Rc;

use gpui::{div, prelude::*, px, size, AnyElement, Context, Pixels, SharedString, Size};
use gpui_component::v_virtual_list;
use nazar_core::{Catalog, CourseItem, TeacherItem};
use nazar_portal::{CoursesEvent, TeachersEvent};

use super::{button, card, heading, muted, page, PortalShell};
use crate::theme::{Theme, ThemeExt};

// =============================================================================
// Courses
// =============================================================================

pub(super) fn render_courses(
    shell: &PortalShell,
    selection_mode: bool,
    cx: &Context<PortalShell>,
) -> AnyElement {
    let theme = cx.theme();

    let hint = selection_mode.then(|| {
        let teacher = teacher_label(&shell.catalog, shell.state.onboarding.selected_teacher());
        step_hint(format!("2-qadam: kursni tanlang. Ustoz: {teacher}"), theme)
    });

    let sizes = card_sizes(shell.catalog.courses.len(), theme);
    let list = v_virtual_list(
        cx.entity().clone(),
        "course-list",
        sizes,
        move |this, range, _window, cx| {
            let theme = cx.theme().clone();
            range
                .filter_map(|ix| this.catalog.courses.get(ix).cloned())
                .map(|course| course_card(course, selection_mode, &theme, cx))
                .collect()
        },
    )
    .track_scroll(&shell.scroll_handle)
    .w_full()
    .flex_1();

    page("courses", theme)
        .size_full()
        .child(heading("Kurslar", theme))
        .children(hint)
        .child(list)
        .into_any_element()
}

fn course_card(
    course: CourseItem,
    selection_mode: bool,
    theme: &Theme,
    cx: &Context<PortalShell>,
) -> AnyElement {
    let action = if selection_mode {
        button(format!("course-select-{}", course.id), "Tanlash", true, theme).on_click(
            PortalShell::emit(
                CoursesEvent::Select {
                    title: course.title.clone(),
                    price: course.price.clone(),
                },
                cx,
            ),
        )
    } else {
        button(
            format!("course-register-{}", course.id),
            "Ro'yxatdan o'tish",
            false,
            theme,
        )
        .on_click(PortalShell::emit(CoursesEvent::Register, cx))
    };

    let features = course.features.join(" · ");

    card_row(theme)
        .child(
            div()
                .flex_1()
                .flex()
                .flex_col()
                .gap_1()
                .child(title_line(course.title, course.level, theme))
                .child(muted(course.description, theme))
                .child(muted(
                    format!("{} · {} dars · {}", course.duration, course.lessons, features),
                    theme,
                )),
        )
        .child(
            div()
                .flex()
                .flex_col()
                .items_end()
                .gap_2()
                .child(
                    div()
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .text_color(theme.accent)
                        .child(course.price),
                )
                .child(action),
        )
        .into_any_element()
}

// =============================================================================
// Teachers
// =============================================================================

pub(super) fn render_teachers(
    shell: &PortalShell,
    selection_mode: bool,
    cx: &Context<PortalShell>,
) -> AnyElement {
    let theme = cx.theme();

    let hint = selection_mode.then(|| step_hint("1-qadam: ustozingizni tanlang", theme));

    let sizes = card_sizes(shell.catalog.teachers.len(), theme);
    let list = v_virtual_list(
        cx.entity().clone(),
        "teacher-list",
        sizes,
        move |this, range, _window, cx| {
            let theme = cx.theme().clone();
            range
                .filter_map(|ix| this.catalog.teachers.get(ix).cloned())
                .map(|teacher| teacher_card(teacher, selection_mode, &theme, cx))
                .collect()
        },
    )
    .track_scroll(&shell.scroll_handle)
    .w_full()
    .flex_1();

    page("teachers", theme)
        .size_full()
        .child(heading("Ustozlar", theme))
        .children(hint)
        .child(list)
        .into_any_element()
}

fn teacher_card(
    teacher: TeacherItem,
    selection_mode: bool,
    theme: &Theme,
    cx: &Context<PortalShell>,
) -> AnyElement {
    let stats = teacher
        .stats
        .iter()
        .map(|s| format!("{} {}", s.value, s.label))
        .collect::<Vec<_>>()
        .join(" · ");

    let mut side = div().flex().flex_col().items_end().gap_2();
    if let Some(badge) = teacher.badge.clone() {
        side = side.child(
            div()
                .px_2()
                .rounded(px(999.0))
                .bg(theme.accent.opacity(0.15))
                .text_xs()
                .text_color(theme.accent)
                .child(badge),
        );
    }
    if selection_mode {
        side = side.child(
            button(format!("teacher-select-{}", teacher.id), "Tanlash", true, theme)
                .on_click(PortalShell::emit(TeachersEvent::Select(teacher.name.clone()), cx)),
        );
    }

    card_row(theme)
        .child(
            div()
                .flex_1()
                .flex()
                .flex_col()
                .gap_1()
                .child(title_line(teacher.name, teacher.role, theme))
                .child(muted(teacher.short_description, theme))
                .child(muted(
                    format!("{} · {}", teacher.experience, teacher.skills.join(", ")),
                    theme,
                ))
                .child(muted(stats, theme)),
        )
        .child(side)
        .into_any_element()
}

// =============================================================================
// Helpers
// =============================================================================

/// Selected teacher with their role when the catalog knows them.
fn teacher_label(catalog: &Catalog, selected: Option<&str>) -> String {
    let Some(name) = selected else {
        return "tanlanmagan".to_string();
    };
    match catalog.teacher(name) {
        Some(teacher) => format!("{} ({})", teacher.name, teacher.role),
        None => name.to_string(),
    }
}

fn card_sizes(count: usize, theme: &Theme) -> Rc<Vec<Size<Pixels>>> {
    Rc::new(vec![size(px(0.0), theme.card_height); count])
}

/// Fixed-height card laid out as a row; the bottom margin keeps the row
/// within `card_height`.
fn card_row(theme: &Theme) -> gpui::Div {
    card(theme)
        .w_full()
        .h(theme.card_height - theme.spacing)
        .mb(theme.spacing)
        .flex_row()
        .items_center()
        .justify_between()
        .gap_4()
}

fn title_line(
    title: impl Into<SharedString>,
    tag: impl Into<SharedString>,
    theme: &Theme,
) -> gpui::Div {
    div()
        .flex()
        .items_center()
        .gap_2()
        .child(
            div()
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .text_color(theme.text)
                .child(title.into()),
        )
        .child(muted(tag, theme))
}

fn step_hint(text: impl Into<SharedString>, theme: &Theme) -> gpui::Div {
    div()
        .px_3()
        .py_2()
        .rounded(theme.radius)
        .bg(theme.accent.opacity(0.12))
        .text_sm()
        .text_color(theme.accent)
        .child(text.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_label() {
        let catalog = Catalog::builtin().unwrap();
        let role = &catalog.teachers[0].role;
        let name = catalog.teachers[0].name.clone();

        assert_eq!(teacher_label(&catalog, None), "tanlanmagan");
        assert_eq!(
            teacher_label(&catalog, Some(&name)),
            format!("{name} ({role})")
        );
        assert_eq!(teacher_label(&catalog, Some("Noma'lum")), "Noma'lum");
    }

    #[test]
    fn test_card_sizes() {
        let theme = Theme::dark();
        let sizes = card_sizes(3, &theme);
        assert_eq!(sizes.len(), 3);
        assert!(sizes.iter().all(|s| s.height == theme.card_height));
    }
}
