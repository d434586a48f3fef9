//! Span-length validation for range selection.

use crate::constraint::DateConstraint;
use crate::date::CalendarDate;
use crate::options::DateConstraintOptions;

/// Validates the length of a selected `[start, end]` span against the
/// effective `min_range`/`max_range` limits.
///
/// Rule matching uses the start date only, not a union of every rule the
/// span touches. Length is counted inclusively: start and end on the same
/// day is a 1-day span.
pub struct RangeValidator {
    constraint: DateConstraint,
    has_limits: bool,
}

impl RangeValidator {
    pub fn new(options: &DateConstraintOptions) -> Self {
        let constraint = DateConstraint::new(options);
        let global = constraint.global_props();
        let has_limits = global.min_range.is_some()
            || global.max_range.is_some()
            || constraint
                .compiled_rules()
                .iter()
                .any(|rule| rule.props.min_range.is_some() || rule.props.max_range.is_some());
        Self {
            constraint,
            has_limits,
        }
    }

    /// Whether the inclusive span `[start, end]` has an acceptable length.
    ///
    /// When no `min_range`/`max_range` exists anywhere (global or any rule),
    /// this returns `true` before any rule lookup happens, so a malformed
    /// rule cannot affect the outcome in that configuration.
    pub fn is_valid(&self, start: CalendarDate, end: CalendarDate) -> bool {
        if !self.has_limits {
            return true;
        }

        let rule = self.constraint.matched_rule(start);
        let length = start.diff_days(end) + 1;

        if let Some(min) = self.constraint.effective(rule, |p| p.min_range.as_ref()) {
            if length < *min {
                return false;
            }
        }
        if let Some(max) = self.constraint.effective(rule, |p| p.max_range.as_ref()) {
            if length > *max {
                return false;
            }
        }

        true
    }
}
