//! JSON output formatter

use crate::error::Result;
use crate::format::{EncodeReport, OutputFormatter};

/// JSON formatter - outputs the report as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Locator and input coordinates as JSON"
    }

    fn format(&self, report: &EncodeReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coordinates;
    use crate::locator::encode;

    #[test]
    fn test_json_format() {
        let coords = Coordinates::new(48.147, 11.608);
        let report = EncodeReport::new(coords, encode(coords));

        let output = JsonFormatter.format(&report).unwrap();

        // Verify it's valid JSON with the expected fields
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["locator"], "JN58td");
        assert!(parsed["coords"]["lat"].is_number());
        assert!(parsed["coords"]["lng"].is_number());
    }

    #[test]
    fn test_json_formatter_info() {
        let formatter = JsonFormatter;
        assert_eq!(formatter.name(), "json");
        assert!(!formatter.description().is_empty());
    }
}
