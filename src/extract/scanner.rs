//! Label-anchored value scanning.
//!
//! # Responsibilities
//! - Locate a measurement's value cell relative to its label text
//! - Locate the page-global power-state indicator
//! - Keep every failure point named so extraction errors are testable
//!
//! # Design Decisions
//! - Byte-level substring search; the device page is not trusted to be
//!   well-formed HTML (or even valid UTF-8)
//! - Scan proceeds label → marker → terminator; first occurrence wins
//! - Over-long value runs are truncated, never rejected

/// Structural fragment that opens a measurement's value cell on the page.
pub const VALUE_MARKER: &[u8] = b"style='text-align:left'>";

/// Structural fragment that opens the large ON/OFF indicator.
pub const STATE_MARKER: &[u8] = b"font-size:62px'>";

/// Longest value run retained for a measurement cell.
pub const VALUE_CAPACITY: usize = 64;

/// Longest value run retained for the state indicator.
pub const STATE_CAPACITY: usize = 32;

/// Where a scan gave up. Each variant is one stage of the
/// label → marker → terminator walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanFailure {
    /// The anchor text (label or page-global marker) does not occur.
    AnchorNotFound,
    /// The value-cell marker does not occur after the anchor.
    MarkerNotFound,
    /// No `<` terminator after the marker.
    TerminatorNotFound,
    /// The terminator immediately follows the marker; the cell is empty.
    EmptyRun,
}

/// Scan for the value cell that follows `label`.
///
/// The search for [`VALUE_MARKER`] starts at the label itself, so a marker
/// earlier in the page never bleeds into a later field.
pub(crate) fn labeled_value(html: &[u8], label: &str) -> Result<String, ScanFailure> {
    let anchor = find(html, label.as_bytes()).ok_or(ScanFailure::AnchorNotFound)?;
    run_after(&html[anchor..], VALUE_MARKER, VALUE_CAPACITY)
}

/// Scan for the page-global ON/OFF indicator. Anchor and marker coincide.
pub(crate) fn state_value(html: &[u8]) -> Result<String, ScanFailure> {
    run_after(html, STATE_MARKER, STATE_CAPACITY)
}

/// marker → terminator stages: take everything between the first `marker`
/// in `hay` and the next `<`, truncated to `capacity` bytes.
fn run_after(hay: &[u8], marker: &[u8], capacity: usize) -> Result<String, ScanFailure> {
    let at = find(hay, marker).ok_or(ScanFailure::MarkerNotFound)?;
    let run = &hay[at + marker.len()..];
    let end = find(run, b"<").ok_or(ScanFailure::TerminatorNotFound)?;
    if end == 0 {
        return Err(ScanFailure::EmptyRun);
    }
    let run = &run[..end.min(capacity)];
    Ok(String::from_utf8_lossy(run).into_owned())
}

/// First occurrence of `needle` in `hay`.
fn find(hay: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || hay.len() < needle.len() {
        return None;
    }
    hay.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_value_happy_path() {
        let html = b"<td>Voltage</td><td style='text-align:left'>233.4</td>";
        assert_eq!(labeled_value(html, "Voltage").unwrap(), "233.4");
    }

    #[test]
    fn test_marker_before_label_is_ignored() {
        // The marker search starts at the label, so an earlier cell must not win.
        let html = b"<td style='text-align:left'>999</td>Voltage<td style='text-align:left'>233</td><";
        assert_eq!(labeled_value(html, "Voltage").unwrap(), "233");
    }

    #[test]
    fn test_missing_label() {
        let html = b"<td style='text-align:left'>233.4</td>";
        assert_eq!(
            labeled_value(html, "Voltage").unwrap_err(),
            ScanFailure::AnchorNotFound
        );
    }

    #[test]
    fn test_missing_marker_after_label() {
        let html = b"Voltage<td>233.4</td>";
        assert_eq!(
            labeled_value(html, "Voltage").unwrap_err(),
            ScanFailure::MarkerNotFound
        );
    }

    #[test]
    fn test_missing_terminator() {
        let html = b"Voltage<td style='text-align:left'>233.4";
        assert_eq!(
            labeled_value(html, "Voltage").unwrap_err(),
            ScanFailure::TerminatorNotFound
        );
    }

    #[test]
    fn test_empty_cell() {
        let html = b"Voltage<td style='text-align:left'><";
        assert_eq!(
            labeled_value(html, "Voltage").unwrap_err(),
            ScanFailure::EmptyRun
        );
    }

    #[test]
    fn test_over_capacity_run_is_truncated() {
        let long = "9".repeat(VALUE_CAPACITY + 20);
        let html = format!("Voltage<td style='text-align:left'>{}<", long);
        let value = labeled_value(html.as_bytes(), "Voltage").unwrap();
        assert_eq!(value.len(), VALUE_CAPACITY);
        assert!(value.chars().all(|c| c == '9'));
    }

    #[test]
    fn test_state_first_occurrence_wins() {
        let html = b"<div style='font-size:62px'>ON</div><div style='font-size:62px'>OFF</div>";
        assert_eq!(state_value(html).unwrap(), "ON");
    }

    #[test]
    fn test_state_absent() {
        let html = b"<td>Voltage</td>";
        assert_eq!(state_value(html).unwrap_err(), ScanFailure::AnchorNotFound);
    }

    #[test]
    fn test_non_utf8_bytes_do_not_break_the_scan() {
        let mut html = Vec::new();
        html.extend_from_slice(&[0xff, 0xfe]);
        html.extend_from_slice(b"Voltage<td style='text-align:left'>230<");
        assert_eq!(labeled_value(&html, "Voltage").unwrap(), "230");
    }
}
