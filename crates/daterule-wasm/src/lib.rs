//! WASM bindings for daterule.
//!
//! Exposes the constraint evaluators, range validator, and disabled-reason
//! reporting to JavaScript via `wasm-bindgen`. Configuration crosses the
//! boundary as a JSON string (the camelCase form the picker UI already
//! holds); dates cross as canonical `YYYY-MM-DD` strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p daterule-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/daterule-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/daterule_wasm.wasm
//! ```

use daterule::{CalendarDate, DateConstraintOptions, ReasonMessages};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: parse boundary strings with contextual errors
//
// The helpers report errors as plain strings so they stay testable on the
// host target; conversion to JsValue happens only in the exported methods
// (wasm-bindgen's non-wasm JsValue stub aborts instead of unwinding).
// ---------------------------------------------------------------------------

/// Parse a canonical `YYYY-MM-DD` date argument.
fn parse_date(s: &str) -> Result<CalendarDate, String> {
    CalendarDate::from_iso(s)
        .ok_or_else(|| format!("Invalid date '{}': expected YYYY-MM-DD", s))
}

/// Parse and validate a constraint options JSON string.
///
/// Rejects a rule that sets both a from/to interval and a recurring months
/// set, so the ambiguity surfaces here instead of silently picking one.
fn parse_options(json: &str) -> Result<DateConstraintOptions, String> {
    let options: DateConstraintOptions =
        serde_json::from_str(json).map_err(|e| format!("Invalid options JSON: {}", e))?;
    options.validate().map_err(|e| e.to_string())?;
    Ok(options)
}

/// Parse an optional reason-message overrides JSON object.
fn parse_messages(json: Option<&str>) -> Result<ReasonMessages, String> {
    match json {
        Some(json) => serde_json::from_str::<ReasonMessages>(json)
            .map_err(|e| format!("Invalid messages JSON: {}", e)),
        None => Ok(ReasonMessages::default()),
    }
}

fn to_js_error(message: String) -> JsValue {
    JsValue::from_str(&message)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Day-level constraint evaluator. Construct once per configuration, query
/// once per grid cell or selection attempt.
#[wasm_bindgen]
pub struct DateConstraint {
    inner: daterule::DateConstraint,
}

#[wasm_bindgen]
impl DateConstraint {
    /// Build an evaluator from a constraint options JSON string.
    #[wasm_bindgen(constructor)]
    pub fn new(options_json: &str) -> Result<DateConstraint, JsValue> {
        let options = parse_options(options_json).map_err(to_js_error)?;
        Ok(Self {
            inner: daterule::DateConstraint::new(&options),
        })
    }

    /// Whether the given `YYYY-MM-DD` date is disabled.
    #[wasm_bindgen(js_name = "isDisabled")]
    pub fn is_disabled(&self, date: &str) -> Result<bool, JsValue> {
        Ok(self.inner.is_disabled(parse_date(date).map_err(to_js_error)?))
    }
}

/// Reason-reporting evaluator. Returns the reasons a date is disabled as a
/// JSON array of strings; an empty array means enabled.
#[wasm_bindgen]
pub struct DisabledReasons {
    inner: daterule::DisabledReasons,
}

#[wasm_bindgen]
impl DisabledReasons {
    /// Build from options JSON and, optionally, a JSON object overriding
    /// any of the default English messages (camelCase keys, e.g.
    /// `{"beforeMinDate": "Too early"}`).
    #[wasm_bindgen(constructor)]
    pub fn new(options_json: &str, messages_json: Option<String>) -> Result<DisabledReasons, JsValue> {
        let options = parse_options(options_json).map_err(to_js_error)?;
        let messages = parse_messages(messages_json.as_deref()).map_err(to_js_error)?;
        Ok(Self {
            inner: daterule::DisabledReasons::with_messages(&options, messages),
        })
    }

    /// All reasons the given `YYYY-MM-DD` date is disabled, as a JSON array.
    #[wasm_bindgen]
    pub fn reasons(&self, date: &str) -> Result<String, JsValue> {
        let reasons = self.inner.reasons(parse_date(date).map_err(to_js_error)?);
        serde_json::to_string(&reasons)
            .map_err(|e| to_js_error(format!("Serialization error: {}", e)))
    }
}

/// Span-length validator for range selection.
#[wasm_bindgen]
pub struct RangeValidator {
    inner: daterule::RangeValidator,
}

#[wasm_bindgen]
impl RangeValidator {
    #[wasm_bindgen(constructor)]
    pub fn new(options_json: &str) -> Result<RangeValidator, JsValue> {
        let options = parse_options(options_json).map_err(to_js_error)?;
        Ok(Self {
            inner: daterule::RangeValidator::new(&options),
        })
    }

    /// Whether the inclusive `[start, end]` span has an acceptable length.
    #[wasm_bindgen(js_name = "isValid")]
    pub fn is_valid(&self, start: &str, end: &str) -> Result<bool, JsValue> {
        Ok(self.inner.is_valid(
            parse_date(start).map_err(to_js_error)?,
            parse_date(end).map_err(to_js_error)?,
        ))
    }
}

/// Whole-month disabling for view navigation.
#[wasm_bindgen]
pub struct MonthConstraint {
    inner: daterule::MonthConstraint,
}

#[wasm_bindgen]
impl MonthConstraint {
    #[wasm_bindgen(constructor)]
    pub fn new(options_json: &str) -> Result<MonthConstraint, JsValue> {
        let options = parse_options(options_json).map_err(to_js_error)?;
        Ok(Self {
            inner: daterule::MonthConstraint::new(&options),
        })
    }

    /// Whether the whole (year, month) unit is disabled. Month is 1-based.
    #[wasm_bindgen(js_name = "isDisabled")]
    pub fn is_disabled(&self, year: i32, month: u32) -> bool {
        self.inner.is_disabled(year, month)
    }
}

/// Whole-year disabling for view navigation.
#[wasm_bindgen]
pub struct YearConstraint {
    inner: daterule::YearConstraint,
}

#[wasm_bindgen]
impl YearConstraint {
    #[wasm_bindgen(constructor)]
    pub fn new(options_json: &str) -> Result<YearConstraint, JsValue> {
        let options = parse_options(options_json).map_err(to_js_error)?;
        Ok(Self {
            inner: daterule::YearConstraint::new(&options),
        })
    }

    #[wasm_bindgen(js_name = "isDisabled")]
    pub fn is_disabled(&self, year: i32) -> bool {
        self.inner.is_disabled(year)
    }
}

/// Today's date in a named IANA timezone, as canonical `YYYY-MM-DD`.
#[wasm_bindgen(js_name = "todayIn")]
pub fn today_in(timezone: &str) -> Result<String, JsValue> {
    CalendarDate::today_in(timezone)
        .map(CalendarDate::to_iso)
        .map_err(|e| to_js_error(e.to_string()))
}

/// Parse a strict `YYYY-MM-DD` string, returning the canonical form or
/// `null` for any non-matching input.
#[wasm_bindgen(js_name = "parseIso")]
pub fn parse_iso(date: &str) -> Option<String> {
    CalendarDate::from_iso(date).map(CalendarDate::to_iso)
}
