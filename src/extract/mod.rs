//! Field extraction from the upstream status page.
//!
//! # Data Flow
//! ```text
//! raw page bytes
//!     → scanner.rs (label → marker → terminator walk per field)
//!     → fields.rs (catalogue of the nine required measurements)
//!     → ExtractedFieldSet (complete, or the whole extraction fails)
//! ```
//!
//! # Design Decisions
//! - Fail-fast: one missing required field aborts extraction; a partial
//!   reading is never produced
//! - The ON/OFF indicator is optional and its absence is not an error
//! - Label-anchored scanning tolerates cell reordering but is pinned to the
//!   device's exact marker strings, which are externally fixed

pub mod fields;
pub mod scanner;

pub use fields::{ExtractedFieldSet, FieldSpec, REQUIRED_FIELDS};

use thiserror::Error;

/// A required field could not be located on the page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// Label, marker, or terminator missing for a required measurement.
    #[error("field '{label}' not found on status page")]
    MissingField {
        /// On-page label of the field that failed.
        label: &'static str,
    },
}

/// Pull all nine required values plus the optional state off the page.
///
/// Fails on the first missing required field. Pure function of the input.
pub fn extract(html: &[u8]) -> Result<ExtractedFieldSet, ExtractError> {
    let mut values: [Option<String>; 9] = Default::default();
    for (slot, spec) in values.iter_mut().zip(REQUIRED_FIELDS.iter()) {
        match scanner::labeled_value(html, spec.label) {
            Ok(v) => *slot = Some(v),
            Err(failure) => {
                tracing::debug!(
                    field = spec.name,
                    label = spec.label,
                    stage = ?failure,
                    "required field missing from status page"
                );
                return Err(ExtractError::MissingField { label: spec.label });
            }
        }
    }

    let state = scanner::state_value(html).ok();

    let [voltage, current, active_power, apparent_power, reactive_power, power_factor, energy_today, energy_yesterday, energy_total] =
        values.map(|v| v.unwrap_or_default());

    Ok(ExtractedFieldSet {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn page(state: Option<&str>) -> Vec<u8> {
        let mut html = String::from("<html><body><table>");
        if let Some(s) = state {
            html.push_str(&format!("<div style='font-size:62px'>{}</div>", s));
        }
        for (spec, value) in REQUIRED_FIELDS.iter().zip([
            "233.4", "0.170", "37", "40", "14", "0.93", "1.234", "2.345", "678.901",
        ]) {
            html.push_str(&format!(
                "<tr><td>{}</td><td style='text-align:left'>{}</td></tr>",
                spec.label, value
            ));
        }
        html.push_str("</table></body></html>");
        html.into_bytes()
    }

    #[test]
    fn test_full_page_extracts_all_fields() {
        let set = extract(&page(Some("ON"))).unwrap();
        assert_eq!(set.voltage, "233.4");
        assert_eq!(set.current, "0.170");
        assert_eq!(set.energy_total, "678.901");
        assert_eq!(set.state.as_deref(), Some("ON"));
    }

    #[test]
    fn test_missing_state_is_not_an_error() {
        let set = extract(&page(None)).unwrap();
        assert_eq!(set.state, None);
    }

    #[test]
    fn test_missing_required_label_fails_whole_extraction() {
        let html = String::from_utf8(page(Some("ON")))
            .unwrap()
            .replace("Power Factor", "Something Else");
        let err = extract(html.as_bytes()).unwrap_err();
        assert_eq!(err, ExtractError::MissingField { label: "Power Factor" });
    }

    #[test]
    fn test_empty_page_fails_on_first_field() {
        let err = extract(b"<html></html>").unwrap_err();
        assert_eq!(err, ExtractError::MissingField { label: "Voltage" });
    }
}
