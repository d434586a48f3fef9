//! The layered date constraint evaluator.
//!
//! Given a date, a global configuration, and an ordered list of period
//! rules, decides whether the date is disabled. The decision walks a fixed
//! precedence order and short-circuits on the first applicable condition;
//! that order is the load-bearing contract and determines every edge-case
//! outcome:
//!
//! 1. Absolute `min_date`/`max_date` bounds — unconditional, never bypassed.
//! 2. `enabled_dates` force-enable escape hatch.
//! 3. Year whitelist, then year blacklist.
//! 4. Month whitelist, then month blacklist.
//! 5. Weekday whitelist.
//! 6. Specific-date blacklist.
//! 7. Weekday blacklist.
//! 8. Otherwise enabled.

use crate::compile::{CompiledProperties, CompiledRule};
use crate::date::CalendarDate;
use crate::options::DateConstraintOptions;

/// Compile-once, query-many evaluator for day-level disabling.
///
/// Construction precomputes the lookup sets for the global configuration and
/// every rule; `is_disabled` is then a pure O(1)-per-lookup query, safe to
/// call from many sites at once (e.g., once per rendered grid cell). The
/// configuration is closed over at construction time; build a new evaluator
/// if it changes.
pub struct DateConstraint {
    global: CompiledProperties,
    rules: Vec<CompiledRule>,
}

impl DateConstraint {
    pub fn new(options: &DateConstraintOptions) -> Self {
        Self {
            global: CompiledProperties::compile(&options.global),
            rules: options.rules.iter().map(CompiledRule::compile).collect(),
        }
    }

    /// First rule in configuration order whose period contains `date`.
    pub(crate) fn matched_rule(&self, date: CalendarDate) -> Option<&CompiledRule> {
        self.rules.iter().find(|rule| rule.matches(date))
    }

    /// Per-field effective configuration: the matched rule's field where the
    /// rule explicitly set it, else the global field.
    pub(crate) fn effective<'a, T>(
        &'a self,
        rule: Option<&'a CompiledRule>,
        get: fn(&CompiledProperties) -> Option<&T>,
    ) -> Option<&'a T> {
        rule.and_then(|r| get(&r.props)).or_else(|| get(&self.global))
    }

    pub(crate) fn global_props(&self) -> &CompiledProperties {
        &self.global
    }

    pub(crate) fn compiled_rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Whether `date` is disabled under the effective configuration.
    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        let rule = self.matched_rule(date);

        // 1. Absolute bounds. Not overridable by any enable-list.
        if let Some(min) = self.effective(rule, |p| p.min_date.as_ref()) {
            if date.is_before(*min) {
                return true;
            }
        }
        if let Some(max) = self.effective(rule, |p| p.max_date.as_ref()) {
            if date.is_after(*max) {
                return true;
            }
        }

        // 2. Force-enable escape hatch.
        if let Some(enabled) = self.effective(rule, |p| p.enabled_keys.as_ref()) {
            if enabled.contains(&date.to_key()) {
                return false;
            }
        }

        // 3. Year whitelist, then blacklist. An empty whitelist excludes
        // every year; an absent one imposes no constraint.
        if let Some(years) = self.effective(rule, |p| p.enabled_years.as_ref()) {
            if !years.contains(&date.year()) {
                return true;
            }
        }
        if let Some(years) = self.effective(rule, |p| p.disabled_years.as_ref()) {
            if years.contains(&date.year()) {
                return true;
            }
        }

        // 4. Month whitelist, then blacklist.
        if let Some(months) = self.effective(rule, |p| p.enabled_months.as_ref()) {
            if !months.contains(&date.month()) {
                return true;
            }
        }
        if let Some(months) = self.effective(rule, |p| p.disabled_months.as_ref()) {
            if months.contains(&date.month()) {
                return true;
            }
        }

        // 5. Weekday whitelist.
        if let Some(days) = self.effective(rule, |p| p.enabled_days.as_ref()) {
            if !days.contains(&date.weekday()) {
                return true;
            }
        }

        // 6. Specific-date blacklist.
        if let Some(keys) = self.effective(rule, |p| p.disabled_keys.as_ref()) {
            if keys.contains(&date.to_key()) {
                return true;
            }
        }

        // 7. Weekday blacklist.
        if let Some(days) = self.effective(rule, |p| p.disabled_days.as_ref()) {
            if days.contains(&date.weekday()) {
                return true;
            }
        }

        false
    }
}
