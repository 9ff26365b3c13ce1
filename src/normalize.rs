//! Raw field values → typed meter reading.
//!
//! # Responsibilities
//! - Strip the padding the device puts around values (ASCII whitespace and
//!   non-breaking spaces)
//! - Parse each required value with leading-numeric-prefix semantics
//! - Default the optional state to "UNKNOWN"
//!
//! # Design Decisions
//! - Any non-numeric required field aborts the whole normalization; there
//!   is no partial reading and no silent default for measurements
//! - Prefix parsing accepts a trailing unit suffix ("12.5 W") but rejects
//!   values with no leading digits at all ("N/A")

use thiserror::Error;

use crate::extract::ExtractedFieldSet;

/// Fallback when the page carries no ON/OFF indicator.
pub const STATE_UNKNOWN: &str = "UNKNOWN";

/// A required field's content did not start with a number.
#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("field '{field}' is not numeric: {raw:?}")]
    NotNumeric {
        /// JSON field name of the offending value.
        field: &'static str,
        /// The trimmed raw content that failed to parse.
        raw: String,
    },
}

/// The normalized record: one sample of everything the plug measures.
#[derive(Debug, Clone, PartialEq)]
pub struct MeterReading {
    pub voltage: f64,
    pub current: f64,
    pub active_power: f64,
    pub apparent_power: f64,
    pub reactive_power: f64,
    pub power_factor: f64,
    pub energy_today: f64,
    pub energy_yesterday: f64,
    pub energy_total: f64,
    pub state: String,
}

/// Trim and parse every extracted value into a [`MeterReading`].
pub fn normalize(fields: ExtractedFieldSet) -> Result<MeterReading, NormalizeError> {
    let mut parsed = [0f64; 9];
    for (slot, (name, raw)) in parsed.iter_mut().zip(fields.required_values()) {
        let trimmed = trim_padding(raw);
        *slot = leading_f64(trimmed).ok_or_else(|| NormalizeError::NotNumeric {
            field: name,
            raw: trimmed.to_string(),
        })?;
    }

    let state = fields
        .state
        .as_deref()
        .map(trim_padding)
        .filter(|s| !s.is_empty())
        .unwrap_or(STATE_UNKNOWN)
        .to_string();

    let [voltage, current, active_power, apparent_power, reactive_power, power_factor, energy_today, energy_yesterday, energy_total] =
        parsed;

    Ok(MeterReading {
        voltage,
        current,
        active_power,
        apparent_power,
        reactive_power,
        power_factor,
        energy_today,
        energy_yesterday,
        energy_total,
        state,
    })
}

/// Strip ASCII whitespace and U+00A0 from both ends. Idempotent.
pub fn trim_padding(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\u{00A0}')
}

/// Parse the longest numeric prefix: optional sign, digits, one dot, digits.
/// At least one digit must be consumed; anything after the prefix is ignored.
pub fn leading_f64(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut digits = 0;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if digits == 0 {
        return None;
    }
    s[..end].parse().ok()
}
