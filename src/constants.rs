//! Centralized constants for the gridsq crate
//!
//! This module consolidates the grid geometry and the encoding alphabets
//! so the encoder and the locator parser agree on a single definition.

/// Grid cell geometry, in degrees
pub mod grid {
    /// Divisions per axis at field level ('A' through 'R')
    pub const FIELD_DIVISIONS: usize = 18;

    /// Width of a field in degrees of longitude
    pub const FIELD_LON_DEG: f64 = 20.0;

    /// Height of a field in degrees of latitude
    pub const FIELD_LAT_DEG: f64 = 10.0;

    /// Width of a square in degrees of longitude
    pub const SQUARE_LON_DEG: f64 = 2.0;

    /// Height of a square in degrees of latitude
    pub const SQUARE_LAT_DEG: f64 = 1.0;

    /// Divisions per axis at subsquare level ('a' through 'x')
    pub const SUBSQUARE_DIVISIONS: usize = 24;

    /// Full longitude span after normalization (0..360)
    pub const LON_SPAN_DEG: f64 = FIELD_LON_DEG * FIELD_DIVISIONS as f64;

    /// Full latitude span after normalization (0..180)
    pub const LAT_SPAN_DEG: f64 = FIELD_LAT_DEG * FIELD_DIVISIONS as f64;
}

/// Encoding alphabets
///
/// Characters are produced by indexed lookup into these tables, never by
/// raw ASCII offset arithmetic.
pub mod alphabet {
    /// Field letters (uppercase, 18 divisions)
    pub const FIELD: &[u8; 18] = b"ABCDEFGHIJKLMNOPQR";

    /// Square digits (10 divisions)
    pub const SQUARE: &[u8; 10] = b"0123456789";

    /// Subsquare letters (lowercase, 24 divisions)
    pub const SUBSQUARE: &[u8; 24] = b"abcdefghijklmnopqrstuvwx";
}
