//! # daterule
//!
//! Timezone-safe calendar dates and a layered constraint engine for date
//! pickers.
//!
//! The engine compiles a plain-data configuration (absolute bounds, date and
//! weekday whitelists/blacklists, month and year filters, period-scoped
//! override rules) into lookup structures once, then answers
//! `is this date disabled?` queries in amortized O(1). A range validator,
//! disabled-reason reporting, and whole-month/whole-year variants share the
//! same rule machinery.
//!
//! ## Quick start
//!
//! ```rust
//! use daterule::{CalendarDate, DateConstraint, DateConstraintOptions};
//!
//! let options: DateConstraintOptions = serde_json::from_str(
//!     r#"{"minDate":"2025-06-10","disabledDaysOfWeek":[0,6]}"#,
//! ).unwrap();
//! let constraint = DateConstraint::new(&options);
//!
//! let monday = CalendarDate::from_iso("2025-06-16").unwrap();
//! assert!(!constraint.is_disabled(monday));
//!
//! let sunday = CalendarDate::from_iso("2025-06-15").unwrap();
//! assert!(constraint.is_disabled(sunday));
//! ```
//!
//! ## Modules
//!
//! - [`date`] — `CalendarDate` value type (integer-based, DST-proof)
//! - [`options`] — constraint configuration model (the camelCase JSON wire form)
//! - [`compile`] — one-time precomputation of lookup sets and rule periods
//! - [`constraint`] — the layered day-level evaluator
//! - [`reason`] — human-readable disabled reasons
//! - [`range`] — span-length validation for range selection
//! - [`view`] — whole-month / whole-year disabling for navigation
//! - [`error`] — error types

pub mod compile;
pub mod constraint;
pub mod date;
pub mod error;
pub mod options;
pub mod range;
pub mod reason;
pub mod view;

pub use constraint::DateConstraint;
pub use date::CalendarDate;
pub use error::DateRuleError;
pub use options::{DateConstraintOptions, DateConstraintProperties, DateConstraintRule};
pub use range::RangeValidator;
pub use reason::{DisabledReasons, ReasonMessages};
pub use view::{MonthConstraint, YearConstraint};
