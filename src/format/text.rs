//! Plain text output formatter

use crate::error::Result;
use crate::format::{EncodeReport, OutputFormatter};

/// Text formatter - outputs the bare six character locator
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "The bare locator, one line"
    }

    fn format(&self, report: &EncodeReport) -> Result<String> {
        Ok(report.locator.to_string())
    }
}
