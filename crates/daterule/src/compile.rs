//! One-time rule precomputation.
//!
//! Converts raw option lists into indexed lookup structures so that every
//! subsequent query is a set-membership test. Compilation happens exactly
//! once per evaluator construction (and once per rule), never per queried
//! date: a configuration with N rules and M disabled dates answers each
//! query with O(N) period tests and O(1) set lookups, not O(N·M) scans.

use std::collections::HashSet;

use crate::date::CalendarDate;
use crate::options::{DateConstraintProperties, DateConstraintRule};

/// Lookup-ready form of [`DateConstraintProperties`].
///
/// `None` means the source field was absent and imposes no constraint; a
/// present-but-empty set came from an explicit empty list and, for the
/// whitelist fields, excludes everything. The distinction is preserved
/// end to end.
#[derive(Debug, Clone, Default)]
pub struct CompiledProperties {
    pub min_date: Option<CalendarDate>,
    pub max_date: Option<CalendarDate>,
    pub disabled_keys: Option<HashSet<String>>,
    pub enabled_keys: Option<HashSet<String>>,
    pub disabled_days: Option<HashSet<u32>>,
    pub enabled_days: Option<HashSet<u32>>,
    pub disabled_months: Option<HashSet<u32>>,
    pub enabled_months: Option<HashSet<u32>>,
    pub disabled_years: Option<HashSet<i32>>,
    pub enabled_years: Option<HashSet<i32>>,
    pub min_range: Option<i64>,
    pub max_range: Option<i64>,
}

fn key_set(dates: &Option<Vec<CalendarDate>>) -> Option<HashSet<String>> {
    dates
        .as_ref()
        .map(|list| list.iter().map(|d| d.to_key()).collect())
}

fn int_set<T: Copy + Eq + std::hash::Hash>(values: &Option<Vec<T>>) -> Option<HashSet<T>> {
    values.as_ref().map(|list| list.iter().copied().collect())
}

impl CompiledProperties {
    pub fn compile(props: &DateConstraintProperties) -> Self {
        Self {
            min_date: props.min_date,
            max_date: props.max_date,
            disabled_keys: key_set(&props.disabled_dates),
            enabled_keys: key_set(&props.enabled_dates),
            disabled_days: int_set(&props.disabled_days_of_week),
            enabled_days: int_set(&props.enabled_days_of_week),
            disabled_months: int_set(&props.disabled_months),
            enabled_months: int_set(&props.enabled_months),
            disabled_years: int_set(&props.disabled_years),
            enabled_years: int_set(&props.enabled_years),
            min_range: props.min_range,
            max_range: props.max_range,
        }
    }
}

/// How a rule decides whether it applies to a date. The two matching
/// strategies of the configuration model are normalized into one tagged
/// type at compile time.
#[derive(Debug, Clone)]
pub enum RulePeriod {
    /// Explicit inclusive date interval.
    Interval { from: CalendarDate, to: CalendarDate },
    /// Recurring month numbers (1..12), applied regardless of year.
    Months(HashSet<u32>),
    /// The rule defined no usable period; it matches nothing and is
    /// silently skipped.
    Never,
}

/// A period selector plus lookup-ready override fields.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub period: RulePeriod,
    pub props: CompiledProperties,
}

impl CompiledRule {
    /// An explicit interval takes precedence over a recurring month set when
    /// a rule happens to define both; `DateConstraintOptions::validate`
    /// flags that combination for boundaries that want to reject it.
    pub fn compile(rule: &DateConstraintRule) -> Self {
        let period = match (rule.from, rule.to, &rule.months) {
            (Some(from), Some(to), _) => RulePeriod::Interval { from, to },
            (_, _, Some(months)) => RulePeriod::Months(months.iter().copied().collect()),
            _ => RulePeriod::Never,
        };
        Self {
            period,
            props: CompiledProperties::compile(&rule.properties),
        }
    }

    /// Whether this rule's period contains `date`.
    pub fn matches(&self, date: CalendarDate) -> bool {
        match &self.period {
            RulePeriod::Interval { from, to } => date.is_between(*from, *to),
            RulePeriod::Months(months) => months.contains(&date.month()),
            RulePeriod::Never => false,
        }
    }
}
