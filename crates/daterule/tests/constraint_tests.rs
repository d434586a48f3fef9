//! Tests for the layered day-level constraint evaluator.
//!
//! Weekday facts used throughout: 2025-06-14 is a Saturday, 2025-06-15 a
//! Sunday, 2025-06-16 a Monday.

use daterule::{CalendarDate, DateConstraint, DateConstraintOptions, DateRuleError};

fn date(s: &str) -> CalendarDate {
    CalendarDate::from_iso(s).expect("test date should be canonical")
}

fn constraint(json: &str) -> DateConstraint {
    let options: DateConstraintOptions =
        serde_json::from_str(json).expect("test options should deserialize");
    DateConstraint::new(&options)
}

// ---------------------------------------------------------------------------
// Absolute bounds
// ---------------------------------------------------------------------------

#[test]
fn min_date_is_an_inclusive_lower_bound() {
    let c = constraint(r#"{"minDate":"2025-06-10"}"#);
    assert!(c.is_disabled(date("2025-06-09")));
    assert!(!c.is_disabled(date("2025-06-10")));
    assert!(!c.is_disabled(date("2025-06-11")));
}

#[test]
fn max_date_is_an_inclusive_upper_bound() {
    let c = constraint(r#"{"maxDate":"2025-06-10"}"#);
    assert!(!c.is_disabled(date("2025-06-10")));
    assert!(c.is_disabled(date("2025-06-11")));
}

#[test]
fn enabled_dates_never_bypass_the_bounds() {
    let c = constraint(r#"{"minDate":"2025-06-10","enabledDates":["2025-06-01"]}"#);
    assert!(c.is_disabled(date("2025-06-01")));

    let c = constraint(r#"{"maxDate":"2025-06-10","enabledDates":["2025-06-20"]}"#);
    assert!(c.is_disabled(date("2025-06-20")));
}

// ---------------------------------------------------------------------------
// Force-enable escape hatch
// ---------------------------------------------------------------------------

#[test]
fn enabled_dates_bypass_weekday_blacklists() {
    let c = constraint(r#"{"disabledDaysOfWeek":[0,6],"enabledDates":["2025-06-14"]}"#);
    assert!(!c.is_disabled(date("2025-06-14"))); // Saturday, force-enabled
    assert!(c.is_disabled(date("2025-06-15"))); // Sunday, still disabled
}

#[test]
fn enabled_dates_bypass_month_and_year_filters() {
    let c = constraint(r#"{"disabledMonths":[6],"disabledYears":[2025],"enabledDates":["2025-06-14"]}"#);
    assert!(!c.is_disabled(date("2025-06-14")));
    assert!(c.is_disabled(date("2025-06-13")));
}

#[test]
fn absence_from_enabled_dates_does_not_disable_on_its_own() {
    // enabledDates is a force-enable list, not an exhaustive whitelist.
    let c = constraint(r#"{"enabledDates":["2025-06-14"]}"#);
    assert!(!c.is_disabled(date("2025-06-13")));
}

// ---------------------------------------------------------------------------
// Whitelists: present-but-empty excludes all, absent imposes nothing
// ---------------------------------------------------------------------------

#[test]
fn empty_enabled_days_of_week_disables_every_date() {
    let c = constraint(r#"{"enabledDaysOfWeek":[]}"#);
    for day in 9..=15 {
        assert!(c.is_disabled(CalendarDate::new(2025, 6, day)));
    }
}

#[test]
fn absent_enabled_days_of_week_disables_nothing() {
    let c = constraint(r#"{}"#);
    for day in 9..=15 {
        assert!(!c.is_disabled(CalendarDate::new(2025, 6, day)));
    }
}

#[test]
fn empty_enabled_months_and_years_disable_every_date() {
    let c = constraint(r#"{"enabledMonths":[]}"#);
    assert!(c.is_disabled(date("2025-06-14")));

    let c = constraint(r#"{"enabledYears":[]}"#);
    assert!(c.is_disabled(date("2025-06-14")));
}

#[test]
fn enabled_days_of_week_whitelist() {
    // Weekdays only.
    let c = constraint(r#"{"enabledDaysOfWeek":[1,2,3,4,5]}"#);
    assert!(!c.is_disabled(date("2025-06-16"))); // Monday
    assert!(c.is_disabled(date("2025-06-14"))); // Saturday
    assert!(c.is_disabled(date("2025-06-15"))); // Sunday
}

// ---------------------------------------------------------------------------
// Blacklists
// ---------------------------------------------------------------------------

#[test]
fn disabled_dates_blacklist() {
    let c = constraint(r#"{"disabledDates":["2025-06-14","2025-06-16"]}"#);
    assert!(c.is_disabled(date("2025-06-14")));
    assert!(!c.is_disabled(date("2025-06-15")));
    assert!(c.is_disabled(date("2025-06-16")));
}

#[test]
fn disabled_months_blacklist() {
    let c = constraint(r#"{"disabledMonths":[6,7]}"#);
    assert!(c.is_disabled(date("2025-06-14")));
    assert!(c.is_disabled(date("2026-07-01")));
    assert!(!c.is_disabled(date("2025-05-14")));
}

#[test]
fn year_whitelist_and_blacklist() {
    let c = constraint(r#"{"enabledYears":[2025]}"#);
    assert!(!c.is_disabled(date("2025-06-14")));
    assert!(c.is_disabled(date("2026-06-14")));

    let c = constraint(r#"{"disabledYears":[2026]}"#);
    assert!(!c.is_disabled(date("2025-06-14")));
    assert!(c.is_disabled(date("2026-06-14")));
}

// ---------------------------------------------------------------------------
// Period rules
// ---------------------------------------------------------------------------

#[test]
fn first_matching_rule_wins_in_array_order() {
    // Both rules cover 2025-06-16 (a Monday). The first disables Mondays,
    // the second explicitly allows everything; only the first applies.
    let c = constraint(
        r#"{
            "rules": [
                {"from":"2025-06-01","to":"2025-06-30","disabledDaysOfWeek":[1]},
                {"from":"2025-06-15","to":"2025-07-15","disabledDaysOfWeek":[]}
            ]
        }"#,
    );
    assert!(c.is_disabled(date("2025-06-16")));
    // Outside the first rule's interval the second rule applies: Monday
    // 2025-07-07 is enabled.
    assert!(!c.is_disabled(date("2025-07-07")));
}

#[test]
fn recurring_month_rule_applies_every_year() {
    // Summer weekends off, regardless of year.
    let c = constraint(r#"{"rules":[{"months":[6,7,8],"disabledDaysOfWeek":[0,6]}]}"#);
    assert!(c.is_disabled(date("2025-06-14"))); // Saturday in June
    assert!(c.is_disabled(date("2026-06-13"))); // Saturday in June, next year
    assert!(!c.is_disabled(date("2025-05-10"))); // Saturday in May: no rule, global allows
    assert!(!c.is_disabled(date("2025-06-16"))); // Monday in June
}

#[test]
fn rule_fields_inherit_from_global_per_field() {
    // The rule overrides only minDate; the global weekday blacklist still
    // applies inside the rule's period.
    let c = constraint(
        r#"{
            "disabledDaysOfWeek":[0],
            "rules":[{"months":[6],"minDate":"2025-06-10"}]
        }"#,
    );
    assert!(c.is_disabled(date("2025-06-15"))); // Sunday in June: inherited blacklist
    assert!(c.is_disabled(date("2025-06-09"))); // before the rule's minDate
    assert!(!c.is_disabled(date("2025-06-16"))); // Monday after minDate
    assert!(!c.is_disabled(date("2025-05-05"))); // Monday in May: no rule, no global minDate
}

#[test]
fn rule_overrides_replace_global_fields_where_set() {
    // Globally weekends are off; in June the rule replaces the blacklist
    // with an empty one, re-enabling weekends for that month only.
    let c = constraint(
        r#"{
            "disabledDaysOfWeek":[0,6],
            "rules":[{"months":[6],"disabledDaysOfWeek":[]}]
        }"#,
    );
    assert!(!c.is_disabled(date("2025-06-14"))); // June Saturday
    assert!(c.is_disabled(date("2025-05-10"))); // May Saturday
}

#[test]
fn rule_without_a_period_never_matches() {
    // Malformed by configuration: neither from/to nor months. Silently
    // skipped, falls through to the next rule or the global config.
    let c = constraint(
        r#"{
            "rules":[
                {"disabledDaysOfWeek":[1,2,3,4,5,6,0]},
                {"months":[6],"disabledDaysOfWeek":[6]}
            ]
        }"#,
    );
    assert!(c.is_disabled(date("2025-06-14"))); // second rule applies
    assert!(!c.is_disabled(date("2025-06-16"))); // Monday allowed
    assert!(!c.is_disabled(date("2025-05-10"))); // no rule, global allows
}

#[test]
fn explicit_interval_takes_precedence_over_months_on_one_rule() {
    // Unsupported combination, but the evaluator's behavior is pinned: the
    // interval is authoritative and the months set is ignored.
    let c = constraint(
        r#"{
            "rules":[{"from":"2025-06-01","to":"2025-06-30","months":[12],"disabledDaysOfWeek":[6]}]
        }"#,
    );
    assert!(c.is_disabled(date("2025-06-14"))); // Saturday inside the interval
    assert!(!c.is_disabled(date("2025-12-06"))); // Saturday in December: months ignored
}

#[test]
fn validate_flags_a_rule_with_both_interval_and_months() {
    let options: DateConstraintOptions = serde_json::from_str(
        r#"{"rules":[{"months":[6]},{"from":"2025-06-01","to":"2025-06-30","months":[12]}]}"#,
    )
    .unwrap();
    match options.validate() {
        Err(DateRuleError::AmbiguousRulePeriod { index }) => assert_eq!(index, 1),
        other => panic!("expected AmbiguousRulePeriod, got {:?}", other.err()),
    }
}

#[test]
fn rule_scoped_bounds_override_global_bounds() {
    let c = constraint(
        r#"{
            "minDate":"2025-01-01",
            "rules":[{"from":"2025-06-01","to":"2025-06-30","minDate":"2025-06-10"}]
        }"#,
    );
    assert!(c.is_disabled(date("2025-06-05"))); // rule's minDate applies
    assert!(!c.is_disabled(date("2025-03-05"))); // global minDate applies
    assert!(c.is_disabled(date("2024-12-31")));
}

// ---------------------------------------------------------------------------
// Precedence interactions
// ---------------------------------------------------------------------------

#[test]
fn year_whitelist_is_checked_before_month_and_weekday() {
    // A date failing the year whitelist is disabled no matter what the
    // later steps would say.
    let c = constraint(r#"{"enabledYears":[2025],"enabledDaysOfWeek":[0,1,2,3,4,5,6]}"#);
    assert!(c.is_disabled(date("2026-06-16")));
}

#[test]
fn force_enable_beats_every_list_based_check() {
    let c = constraint(
        r#"{
            "enabledDates":["2026-06-14"],
            "enabledYears":[2025],
            "disabledMonths":[6],
            "disabledDaysOfWeek":[0],
            "disabledDates":["2026-06-14"]
        }"#,
    );
    // 2026-06-14: wrong year, disabled month, a Sunday, and blacklisted
    // explicitly. The force-enable list still wins.
    assert!(!c.is_disabled(date("2026-06-14")));
}

#[test]
fn options_default_is_fully_permissive() {
    let c = DateConstraint::new(&DateConstraintOptions::default());
    assert!(!c.is_disabled(date("2025-06-14")));
    assert!(!c.is_disabled(date("1999-01-01")));
}
