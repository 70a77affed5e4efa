//! Output formatters
//!
//! Provides trait-based output formatting for encoding results.

pub mod json;
pub mod text;

use crate::coord::Coordinates;
use crate::error::Result;
use crate::locator::GridLocator;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// One encoding result, paired with the coordinate it came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeReport {
    pub locator: GridLocator,
    pub coords: Coordinates,
}

impl EncodeReport {
    pub fn new(coords: Coordinates, locator: GridLocator) -> Self {
        Self { coords, locator }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format the encoding report
    fn format(&self, report: &EncodeReport) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "text".to_string(),
            description: "The bare locator, one line".to_string(),
        },
        FormatInfo {
            name: "json".to_string(),
            description: "Locator and input coordinates as JSON".to_string(),
        },
    ]
}
