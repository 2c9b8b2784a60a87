//! Student profile records.

use serde::{Deserialize, Serialize};

/// Enrollment status shown on the profile dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    #[default]
    Active,
    Warning,
    Inactive,
}

/// Payment state of a single invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

/// Homework state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Pending,
    Submitted,
    Graded,
}

/// One payment in the student's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: u32,
    /// Display date.
    pub date: String,
    /// Amount label, without currency.
    pub amount: String,
    pub status: PaymentStatus,
    /// Payment method label.
    pub method: String,
}

/// A homework assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: u32,
    pub title: String,
    pub deadline: String,
    pub status: AssignmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

/// A weekly lesson slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub day: String,
    /// Time window, e.g. `"14:00 - 16:00"`.
    pub time: String,
    pub subject: String,
    pub room: String,
}

/// The authenticated student's dashboard data.
///
/// Created at the end of onboarding from [`StudentProfile::demo_template`],
/// owned by the portal state for the session and dropped on logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    pub id: String,
    /// Avatar image URL.
    pub avatar: String,
    pub status: StudentStatus,
    pub current_course: String,
    pub teacher: String,
    /// Attendance percentage, 0-100.
    pub attendance: u8,
    pub average_score: f32,
    pub balance: String,
    pub next_payment_date: String,
    /// Position in the center's ranking.
    pub rank: u32,
    pub payments: Vec<PaymentRecord>,
    pub assignments: Vec<Assignment>,
    pub schedule: Vec<ScheduleItem>,
}

impl StudentProfile {
    /// The mock student every onboarding starts from.
    ///
    /// Course, teacher and payments are left empty for onboarding to fill in.
    pub fn demo_template() -> Self {
        Self {
            name: "Azizbek Rahimov".to_string(),
            id: "NZ-2024-892".to_string(),
            avatar: "https://images.unsplash.com/photo-1539571696357-5a69c17a67c6?q=80&w=2662&auto=format&fit=crop".to_string(),
            status: StudentStatus::Active,
            current_course: String::new(),
            teacher: String::new(),
            attendance: 0,
            average_score: 0.0,
            balance: "0".to_string(),
            next_payment_date: "-".to_string(),
            rank: 15,
            payments: Vec::new(),
            assignments: vec![
                Assignment {
                    id: 1,
                    title: "Funksiya hosilasi".to_string(),
                    deadline: "12.05.2024".to_string(),
                    status: AssignmentStatus::Pending,
                    grade: None,
                },
                Assignment {
                    id: 2,
                    title: "Trigonometriya asoslari".to_string(),
                    deadline: "05.05.2024".to_string(),
                    status: AssignmentStatus::Graded,
                    grade: Some("5".to_string()),
                },
            ],
            schedule: ["Dushanba", "Chorshanba", "Juma"]
                .into_iter()
                .map(|day| ScheduleItem {
                    day: day.to_string(),
                    time: "14:00 - 16:00".to_string(),
                    subject: "Matematika".to_string(),
                    room: "204-xona".to_string(),
                })
                .collect(),
        }
    }

    /// Payments that still need action.
    pub fn outstanding_payments(&self) -> impl Iterator<Item = &PaymentRecord> {
        self.payments
            .iter()
            .filter(|p| matches!(p.status, PaymentStatus::Pending | PaymentStatus::Overdue))
    }

    /// Assignments not yet handed in.
    pub fn open_assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.status == AssignmentStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_template_is_blank_for_onboarding() {
        let profile = StudentProfile::demo_template();
        assert!(profile.current_course.is_empty());
        assert!(profile.teacher.is_empty());
        assert!(profile.payments.is_empty());
        assert_eq!(profile.balance, "0");
        assert_eq!(profile.rank, 15);
    }

    #[test]
    fn test_demo_template_schedule_and_assignments() {
        let profile = StudentProfile::demo_template();
        assert_eq!(profile.schedule.len(), 3);
        assert!(profile.schedule.iter().all(|s| s.room == "204-xona"));

        assert_eq!(profile.assignments.len(), 2);
        assert_eq!(profile.assignments[1].grade.as_deref(), Some("5"));
        assert_eq!(profile.open_assignments().count(), 1);
    }

    #[test]
    fn test_outstanding_payments() {
        let mut profile = StudentProfile::demo_template();
        for (id, status) in [
            (1, PaymentStatus::Paid),
            (2, PaymentStatus::Pending),
            (3, PaymentStatus::Overdue),
        ] {
            profile.payments.push(PaymentRecord {
                id,
                date: "01.01.2024".to_string(),
                amount: "100".to_string(),
                status,
                method: "Naqd".to_string(),
            });
        }

        let ids: Vec<_> = profile.outstanding_payments().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_assignment_grade_skipped_when_absent() {
        let json = serde_json::to_value(&StudentProfile::demo_template().assignments[0]).unwrap();
        assert!(json.get("grade").is_none());
        assert_eq!(json["status"], "pending");
    }
}
