//! Human-readable disabled reasons.
//!
//! Mirrors the precedence order of the boolean evaluator exactly, but
//! reports *why* a date is disabled instead of just that it is. The
//! absolute-bound and whitelist/blacklist steps for years and months are
//! exclusive early returns; the weekday and specific-date steps may each
//! independently contribute, so a date can carry several reasons at once
//! only among those.

use serde::{Deserialize, Serialize};

use crate::constraint::DateConstraint;
use crate::date::CalendarDate;
use crate::options::DateConstraintOptions;

/// One message per violation kind, individually overridable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReasonMessages {
    pub before_min_date: String,
    pub after_max_date: String,
    pub year_not_allowed: String,
    pub month_not_allowed: String,
    pub day_of_week_not_allowed: String,
    pub date_disabled: String,
    pub day_of_week_disabled: String,
}

impl Default for ReasonMessages {
    fn default() -> Self {
        Self {
            before_min_date: "Date is before the earliest allowed date".to_string(),
            after_max_date: "Date is after the latest allowed date".to_string(),
            year_not_allowed: "Year is not allowed".to_string(),
            month_not_allowed: "Month is not allowed".to_string(),
            day_of_week_not_allowed: "Day of week is not allowed".to_string(),
            date_disabled: "Date is disabled".to_string(),
            day_of_week_disabled: "Day of week is disabled".to_string(),
        }
    }
}

/// Reason-reporting variant of [`DateConstraint`].
///
/// An empty result means the date is enabled.
pub struct DisabledReasons {
    constraint: DateConstraint,
    messages: ReasonMessages,
}

impl DisabledReasons {
    pub fn new(options: &DateConstraintOptions) -> Self {
        Self::with_messages(options, ReasonMessages::default())
    }

    pub fn with_messages(options: &DateConstraintOptions, messages: ReasonMessages) -> Self {
        Self {
            constraint: DateConstraint::new(options),
            messages,
        }
    }

    /// All reasons `date` is disabled, in precedence order. Empty when the
    /// date is enabled.
    pub fn reasons(&self, date: CalendarDate) -> Vec<String> {
        let c = &self.constraint;
        let rule = c.matched_rule(date);
        let mut reasons = Vec::new();

        // Absolute bounds: exclusive early returns.
        if let Some(min) = c.effective(rule, |p| p.min_date.as_ref()) {
            if date.is_before(*min) {
                reasons.push(self.messages.before_min_date.clone());
                return reasons;
            }
        }
        if let Some(max) = c.effective(rule, |p| p.max_date.as_ref()) {
            if date.is_after(*max) {
                reasons.push(self.messages.after_max_date.clone());
                return reasons;
            }
        }

        // Force-enable bypasses everything below.
        if let Some(enabled) = c.effective(rule, |p| p.enabled_keys.as_ref()) {
            if enabled.contains(&date.to_key()) {
                return reasons;
            }
        }

        // Year and month violations: exclusive early returns.
        if let Some(years) = c.effective(rule, |p| p.enabled_years.as_ref()) {
            if !years.contains(&date.year()) {
                reasons.push(self.messages.year_not_allowed.clone());
                return reasons;
            }
        }
        if let Some(years) = c.effective(rule, |p| p.disabled_years.as_ref()) {
            if years.contains(&date.year()) {
                reasons.push(self.messages.year_not_allowed.clone());
                return reasons;
            }
        }
        if let Some(months) = c.effective(rule, |p| p.enabled_months.as_ref()) {
            if !months.contains(&date.month()) {
                reasons.push(self.messages.month_not_allowed.clone());
                return reasons;
            }
        }
        if let Some(months) = c.effective(rule, |p| p.disabled_months.as_ref()) {
            if months.contains(&date.month()) {
                reasons.push(self.messages.month_not_allowed.clone());
                return reasons;
            }
        }

        // Weekday and specific-date violations accumulate.
        if let Some(days) = c.effective(rule, |p| p.enabled_days.as_ref()) {
            if !days.contains(&date.weekday()) {
                reasons.push(self.messages.day_of_week_not_allowed.clone());
            }
        }
        if let Some(keys) = c.effective(rule, |p| p.disabled_keys.as_ref()) {
            if keys.contains(&date.to_key()) {
                reasons.push(self.messages.date_disabled.clone());
            }
        }
        if let Some(days) = c.effective(rule, |p| p.disabled_days.as_ref()) {
            if days.contains(&date.weekday()) {
                reasons.push(self.messages.day_of_week_disabled.clone());
            }
        }

        reasons
    }
}
