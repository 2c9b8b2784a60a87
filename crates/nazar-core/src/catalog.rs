//! Course and teacher catalog.
//!
//! The built-in catalog is mock data embedded at compile time.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::CatalogError;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// A course offered by the center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseItem {
    pub id: u32,
    pub title: String,
    pub level: String,
    pub description: String,
    pub duration: String,
    pub lessons: u32,
    /// Display price, e.g. `"500000 so'm"`.
    pub price: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// A label/value pair shown on a teacher card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatItem {
    pub label: String,
    pub value: String,
}

/// A teacher of the center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherItem {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub experience: String,
    pub short_description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default)]
    pub stats: Vec<StatItem>,
}

/// Headline numbers for the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_students: u32,
    pub total_revenue: String,
    pub active_courses: u32,
    pub new_registrations: u32,
}

/// Courses and teachers shown in the catalogs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub courses: Vec<CourseItem>,
    pub teachers: Vec<TeacherItem>,
}

impl Catalog {
    /// Load the embedded catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a catalog from JSON and check that ids are unique.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        check_unique("course", catalog.courses.iter().map(|c| c.id))?;
        check_unique("teacher", catalog.teachers.iter().map(|t| t.id))?;
        Ok(catalog)
    }

    /// Find a course by its title.
    pub fn course(&self, title: &str) -> Option<&CourseItem> {
        self.courses.iter().find(|c| c.title == title)
    }

    /// Find a teacher by name.
    pub fn teacher(&self, name: &str) -> Option<&TeacherItem> {
        self.teachers.iter().find(|t| t.name == name)
    }

    /// Admin panel figures. Only the course count is derived; the rest is demo data.
    pub fn admin_stats(&self) -> AdminStats {
        AdminStats {
            total_students: 1240,
            total_revenue: "86 400 000 so'm".to_string(),
            active_courses: self.courses.len() as u32,
            new_registrations: 37,
        }
    }
}

fn check_unique(
    kind: &'static str,
    ids: impl Iterator<Item = u32>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::parse_price_amount;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.courses.is_empty());
        assert!(!catalog.teachers.is_empty());
    }

    #[test]
    fn test_builtin_catalog_has_default_teacher() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.teacher(crate::DEFAULT_TEACHER).is_some());
    }

    #[test]
    fn test_builtin_prices_parse() {
        let catalog = Catalog::builtin().unwrap();
        for course in &catalog.courses {
            assert!(
                parse_price_amount(&course.price).is_ok(),
                "bad price label on '{}': {}",
                course.title,
                course.price
            );
        }
        assert_eq!(
            catalog.course("Matematika Pro").map(|c| c.price.as_str()),
            Some("500000 so'm")
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{
            "courses": [],
            "teachers": [
                {"id": 1, "name": "A", "role": "r", "experience": "1", "short_description": "d"},
                {"id": 1, "name": "B", "role": "r", "experience": "1", "short_description": "d"}
            ]
        }"#;

        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateId {
                kind: "teacher",
                id: 1
            }
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_admin_stats_counts_courses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.admin_stats().active_courses as usize,
            catalog.courses.len()
        );
    }
}
