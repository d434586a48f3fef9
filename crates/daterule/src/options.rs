//! Constraint configuration model.
//!
//! Plain, externally-constructed data: a global set of optional constraint
//! fields plus an ordered list of period-scoped rules that override the
//! global fields per field (not per object). In the browser this arrives as
//! camelCase JSON from the UI layer; the serde derives define that wire
//! form.
//!
//! Every field is independently optional, and absence is significant: an
//! absent whitelist imposes no constraint, while a present-but-empty
//! whitelist excludes everything.

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::{DateRuleError, Result};

/// Optional constraint fields, all independently toggleable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateConstraintProperties {
    /// Inclusive lower bound. Never bypassed, not even by `enabled_dates`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date: Option<CalendarDate>,
    /// Inclusive upper bound. Never bypassed, not even by `enabled_dates`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date: Option<CalendarDate>,
    /// Explicit date blacklist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_dates: Option<Vec<CalendarDate>>,
    /// Force-enable whitelist: listed dates bypass every check except the
    /// min/max bounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_dates: Option<Vec<CalendarDate>>,
    /// Weekday blacklist, 0 = Sunday .. 6 = Saturday.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_days_of_week: Option<Vec<u32>>,
    /// Weekday whitelist, 0 = Sunday .. 6 = Saturday.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_days_of_week: Option<Vec<u32>>,
    /// Month-number blacklist, 1 = January .. 12 = December.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_months: Option<Vec<u32>>,
    /// Month-number whitelist, 1 = January .. 12 = December.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_months: Option<Vec<u32>>,
    /// Year blacklist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_years: Option<Vec<i32>>,
    /// Year whitelist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_years: Option<Vec<i32>>,
    /// Inclusive minimum span length in days (range selection only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_range: Option<i64>,
    /// Inclusive maximum span length in days (range selection only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_range: Option<i64>,
}

/// A constraint override scoped to a period: either an explicit inclusive
/// `[from, to]` interval, or a recurring set of `months` that applies every
/// year. Fields the rule does not set inherit from the global configuration.
///
/// A rule with neither selector never matches any date and is silently
/// skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateConstraintRule {
    /// Interval start (inclusive). Only effective together with `to`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<CalendarDate>,
    /// Interval end (inclusive). Only effective together with `from`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<CalendarDate>,
    /// Recurring month numbers (1..12) this rule applies to, every year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months: Option<Vec<u32>>,
    /// The overriding constraint fields.
    #[serde(flatten)]
    pub properties: DateConstraintProperties,
}

/// Global constraint fields plus an ordered rule list.
///
/// Rules are evaluated in array order and the first rule whose period
/// contains the queried date wins; there is no merging across multiple
/// matching rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateConstraintOptions {
    /// The global constraint fields.
    #[serde(flatten)]
    pub global: DateConstraintProperties,
    /// Period-scoped overrides, first match wins.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<DateConstraintRule>,
}

impl DateConstraintOptions {
    /// Reject configurations where a single rule defines both an explicit
    /// `from`/`to` interval and a recurring `months` set. The evaluators
    /// accept such a rule (the interval wins), but the combination is
    /// unsupported and boundaries should fail loudly instead.
    ///
    /// # Errors
    /// Returns `DateRuleError::AmbiguousRulePeriod` with the offending rule's
    /// index.
    pub fn validate(&self) -> Result<()> {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.from.is_some() && rule.to.is_some() && rule.months.is_some() {
                return Err(DateRuleError::AmbiguousRulePeriod { index });
            }
        }
        Ok(())
    }
}
