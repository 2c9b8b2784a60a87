//! Student dashboard.

use gpui::{div, prelude::*, AnyElement, Context, Hsla, SharedString};
use nazar_core::{AssignmentStatus, CourseItem, PaymentStatus, StudentProfile, StudentStatus};
use nazar_portal::ProfileEvent;

use super::{button, card, heading, muted, page, stat, PortalShell};
use crate::theme::{Theme, ThemeExt};

/// `course` is the catalog entry for the enrolled course, if any.
pub(super) fn render(
    user: &StudentProfile,
    course: Option<&CourseItem>,
    cx: &Context<PortalShell>,
) -> AnyElement {
    let theme = cx.theme();

    let header = div()
        .flex()
        .items_center()
        .justify_between()
        .child(
            div()
                .flex()
                .flex_col()
                .gap_1()
                .child(heading(user.name.clone(), theme))
                .child(
                    div()
                        .flex()
                        .gap_2()
                        .child(muted(format!("ID: {}", user.id), theme))
                        .child(badge(
                            student_status_label(user.status),
                            student_status_color(user.status, theme),
                        )),
                ),
        )
        .child(
            button("profile-logout", "Chiqish", false, theme)
                .on_click(PortalShell::emit(ProfileEvent::Logout, cx)),
        );

    let overview = div()
        .flex()
        .gap_2()
        .child(stat("Kurs", course_label(&user.current_course, course), theme))
        .child(stat("Ustoz", user.teacher.clone(), theme))
        .child(stat("Davomat", format!("{}%", user.attendance), theme))
        .child(stat("O'rtacha ball", format!("{:.1}", user.average_score), theme))
        .child(stat("Reyting", format!("#{}", user.rank), theme));

    let billing = div()
        .flex()
        .gap_2()
        .child(stat("Balans", user.balance.clone(), theme))
        .child(stat("Keyingi to'lov", user.next_payment_date.clone(), theme))
        .child(stat(
            "Kutilayotgan to'lovlar",
            user.outstanding_payments().count().to_string(),
            theme,
        ));

    page("profile", theme)
        .child(header)
        .child(overview)
        .child(billing)
        .child(
            div()
                .flex()
                .gap_2()
                .items_start()
                .child(payments(user, theme))
                .child(assignments(user, theme))
                .child(schedule(user, theme)),
        )
        .into_any_element()
}

// -----------------------------------------------------------------------------
// Sections
// -----------------------------------------------------------------------------

fn payments(user: &StudentProfile, theme: &Theme) -> gpui::Div {
    let mut section = card(theme).flex_1().child(section_title("To'lovlar", theme));
    if user.payments.is_empty() {
        return section.child(muted("To'lovlar yo'q", theme));
    }
    for payment in &user.payments {
        section = section.child(
            row(theme)
                .child(muted(payment.date.clone(), theme))
                .child(div().child(payment.amount.clone()))
                .child(muted(payment.method.clone(), theme))
                .child(badge(
                    payment_status_label(payment.status),
                    payment_status_color(payment.status, theme),
                )),
        );
    }
    section
}

fn assignments(user: &StudentProfile, theme: &Theme) -> gpui::Div {
    let open = user.open_assignments().count();
    let mut section = card(theme)
        .flex_1()
        .child(section_title(format!("Vazifalar ({open} ochiq)"), theme));
    for assignment in &user.assignments {
        let grade = assignment.grade.clone().unwrap_or_else(|| "-".to_string());
        section = section.child(
            row(theme)
                .child(div().flex_1().child(assignment.title.clone()))
                .child(muted(assignment.deadline.clone(), theme))
                .child(muted(grade, theme))
                .child(badge(
                    assignment_status_label(assignment.status),
                    assignment_status_color(assignment.status, theme),
                )),
        );
    }
    section
}

fn schedule(user: &StudentProfile, theme: &Theme) -> gpui::Div {
    let mut section = card(theme).flex_1().child(section_title("Dars jadvali", theme));
    for item in &user.schedule {
        section = section.child(
            row(theme)
                .child(div().w_16().child(item.day.clone()))
                .child(muted(item.time.clone(), theme))
                .child(div().flex_1().child(item.subject.clone()))
                .child(muted(item.room.clone(), theme)),
        );
    }
    section
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn course_label(title: &str, course: Option<&CourseItem>) -> String {
    match course {
        _ if title.is_empty() => "-".to_string(),
        Some(course) => format!("{} ({}, {} dars)", title, course.duration, course.lessons),
        None => title.to_string(),
    }
}

fn section_title(text: impl Into<SharedString>, theme: &Theme) -> gpui::Div {
    div()
        .font_weight(gpui::FontWeight::SEMIBOLD)
        .text_color(theme.text)
        .child(text.into())
}

fn row(theme: &Theme) -> gpui::Div {
    div()
        .w_full()
        .flex()
        .items_center()
        .justify_between()
        .gap_2()
        .py_1()
        .border_b_1()
        .border_color(theme.border)
        .text_sm()
}

fn badge(label: &'static str, color: Hsla) -> gpui::Div {
    div()
        .px_2()
        .rounded_md()
        .text_xs()
        .bg(color.opacity(0.15))
        .text_color(color)
        .child(label)
}

fn student_status_label(status: StudentStatus) -> &'static str {
    match status {
        StudentStatus::Active => "Faol",
        StudentStatus::Warning => "Ogohlantirish",
        StudentStatus::Inactive => "Nofaol",
    }
}

fn student_status_color(status: StudentStatus, theme: &Theme) -> Hsla {
    match status {
        StudentStatus::Active => theme.success,
        StudentStatus::Warning => theme.warning,
        StudentStatus::Inactive => theme.text_muted,
    }
}

fn payment_status_label(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Paid => "To'langan",
        PaymentStatus::Pending => "Kutilmoqda",
        PaymentStatus::Overdue => "Muddati o'tgan",
    }
}

fn payment_status_color(status: PaymentStatus, theme: &Theme) -> Hsla {
    match status {
        PaymentStatus::Paid => theme.success,
        PaymentStatus::Pending => theme.warning,
        PaymentStatus::Overdue => theme.error,
    }
}

fn assignment_status_label(status: AssignmentStatus) -> &'static str {
    match status {
        AssignmentStatus::Pending => "Bajarilmagan",
        AssignmentStatus::Submitted => "Topshirilgan",
        AssignmentStatus::Graded => "Baholangan",
    }
}

fn assignment_status_color(status: AssignmentStatus, theme: &Theme) -> Hsla {
    match status {
        AssignmentStatus::Pending => theme.warning,
        AssignmentStatus::Submitted => theme.accent,
        AssignmentStatus::Graded => theme.success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nazar_core::Catalog;

    #[test]
    fn test_course_label() {
        let catalog = Catalog::builtin().unwrap();
        let course = catalog.course("Matematika Pro");
        let expected = course
            .map(|c| format!("Matematika Pro ({}, {} dars)", c.duration, c.lessons))
            .unwrap();

        assert_eq!(course_label("", None), "-");
        assert_eq!(course_label("Matematika Pro", course), expected);
        assert_eq!(course_label("Kimyo", None), "Kimyo");
    }

    #[test]
    fn test_status_colors() {
        let theme = Theme::dark();
        assert_eq!(payment_status_color(PaymentStatus::Overdue, &theme), theme.error);
        assert_eq!(student_status_color(StudentStatus::Active, &theme), theme.success);
        assert_eq!(payment_status_label(PaymentStatus::Pending), "Kutilmoqda");
    }
}
