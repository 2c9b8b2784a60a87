//! Core types for the Nazar Maxram student portal.
//!
//! This crate contains the plain data structures shared by the portal crates:
//! - Views and navigation items
//! - Student profile records and the demo student template
//! - Course and teacher catalog
//! - Price label parsing
//! - Configuration types
//! - Error types

mod catalog;
mod config;
mod error;
mod price;
mod profile;
mod view;

pub use catalog::{AdminStats, Catalog, CourseItem, StatItem, TeacherItem};
pub use config::{
    config_dir, config_path, load_config, AppConfig, AppearanceConfig, InvalidPricePolicy,
    OnboardingConfig, ThemeMode, DEFAULT_TEACHER, PENDING_PAYMENT_METHOD,
};
pub use error::{CatalogError, ConfigError, ParseViewError, PriceError};
pub use price::parse_price_amount;
pub use profile::{
    Assignment, AssignmentStatus, PaymentRecord, PaymentStatus, ScheduleItem, StudentProfile,
    StudentStatus,
};
pub use view::{LoginKind, NavItem, View, PUBLIC_NAV};
