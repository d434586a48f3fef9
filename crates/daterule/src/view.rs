//! Whole-month and whole-year disabling for view-level navigation.
//!
//! The same layering idea as day-level constraints, applied at coarser
//! granularity so a picker can grey out an entire month or year button.
//! Only the global configuration participates here; period rules are a
//! day-level concept.

use crate::compile::CompiledProperties;
use crate::date::CalendarDate;
use crate::options::DateConstraintOptions;

/// Decides whether a whole (year, month) unit is disabled for navigation.
///
/// A month is disabled when it lies entirely outside the `min_date`/
/// `max_date` bounds (its last day before the minimum, or its first day
/// after the maximum), or when its year or month number fails the
/// corresponding whitelist/blacklist. No per-day granularity: a month with
/// every individual day disabled but a valid year/month number is still
/// navigable.
pub struct MonthConstraint {
    props: CompiledProperties,
}

impl MonthConstraint {
    pub fn new(options: &DateConstraintOptions) -> Self {
        Self {
            props: CompiledProperties::compile(&options.global),
        }
    }

    pub fn is_disabled(&self, year: i32, month: u32) -> bool {
        let first = CalendarDate::new(year, month as i32, 1);
        let last = first.end_of_month();

        if let Some(min) = &self.props.min_date {
            if last.is_before(*min) {
                return true;
            }
        }
        if let Some(max) = &self.props.max_date {
            if first.is_after(*max) {
                return true;
            }
        }

        if let Some(years) = &self.props.enabled_years {
            if !years.contains(&year) {
                return true;
            }
        }
        if let Some(years) = &self.props.disabled_years {
            if years.contains(&year) {
                return true;
            }
        }

        if let Some(months) = &self.props.enabled_months {
            if !months.contains(&month) {
                return true;
            }
        }
        if let Some(months) = &self.props.disabled_months {
            if months.contains(&month) {
                return true;
            }
        }

        false
    }
}

/// Decides whether a whole year is disabled for navigation. Same boundary
/// logic as [`MonthConstraint`] at year granularity.
pub struct YearConstraint {
    props: CompiledProperties,
}

impl YearConstraint {
    pub fn new(options: &DateConstraintOptions) -> Self {
        Self {
            props: CompiledProperties::compile(&options.global),
        }
    }

    pub fn is_disabled(&self, year: i32) -> bool {
        let first = CalendarDate::new(year, 1, 1);
        let last = CalendarDate::new(year, 12, 31);

        if let Some(min) = &self.props.min_date {
            if last.is_before(*min) {
                return true;
            }
        }
        if let Some(max) = &self.props.max_date {
            if first.is_after(*max) {
                return true;
            }
        }

        if let Some(years) = &self.props.enabled_years {
            if !years.contains(&year) {
                return true;
            }
        }
        if let Some(years) = &self.props.disabled_years {
            if years.contains(&year) {
                return true;
            }
        }

        false
    }
}
