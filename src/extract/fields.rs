//! Field catalogue for the device status page.
//!
//! The nine measurements a Tasmota power-monitoring page always shows, each
//! identified by the literal label text next to its value cell.

/// One required measurement: JSON field name plus on-page label.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Name used in the gateway's JSON output (without unit suffix).
    pub name: &'static str,
    /// Literal label text on the device page.
    pub label: &'static str,
}

/// All nine required measurements, in page order.
pub const REQUIRED_FIELDS: [FieldSpec; 9] = [
    FieldSpec { name: "voltage", label: "Voltage" },
    FieldSpec { name: "current", label: "Current" },
    FieldSpec { name: "active_power", label: "Active Power" },
    FieldSpec { name: "apparent_power", label: "Apparent Power" },
    FieldSpec { name: "reactive_power", label: "Reactive Power" },
    FieldSpec { name: "power_factor", label: "Power Factor" },
    FieldSpec { name: "energy_today", label: "Energy Today" },
    FieldSpec { name: "energy_yesterday", label: "Energy Yesterday" },
    FieldSpec { name: "energy_total", label: "Energy Total" },
];

/// Raw substrings pulled off the page, before any trimming or parsing.
///
/// Construction goes through [`crate::extract::extract`], which guarantees
/// all nine required values are present and non-empty. `state` is the only
/// optional piece; `None` means the indicator was not on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFieldSet {
    pub voltage: String,
    pub current: String,
    pub active_power: String,
    pub apparent_power: String,
    pub reactive_power: String,
    pub power_factor: String,
    pub energy_today: String,
    pub energy_yesterday: String,
    pub energy_total: String,
    pub state: Option<String>,
}

impl ExtractedFieldSet {
    /// The nine required raw values paired with their field names, in
    /// catalogue order. Used by the normalizer so parse errors can name
    /// the offending field.
    pub fn required_values(&self) -> [(&'static str, &str); 9] {
        [
            ("voltage", &self.voltage),
            ("current", &self.current),
            ("active_power", &self.active_power),
            ("apparent_power", &self.apparent_power),
            ("reactive_power", &self.reactive_power),
            ("power_factor", &self.power_factor),
            ("energy_today", &self.energy_today),
            ("energy_yesterday", &self.energy_yesterday),
            ("energy_total", &self.energy_total),
        ]
    }
}
