//! Maidenhead grid locator encoding
//!
//! Converts a longitude/latitude pair into the six character
//! field/square/subsquare form used on the amateur bands, e.g. `JN58td`.
//!
//! The output interleaves the two axes: field pair, square pair,
//! subsquare pair, each pair ordered longitude then latitude.

use crate::constants::{alphabet, grid};
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A six character Maidenhead grid locator
///
/// Always matches `[A-R][A-R][0-9][0-9][a-x][a-x]`, whether produced by
/// [`encode`] or parsed with `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridLocator {
    chars: [u8; 6],
}

impl GridLocator {
    /// View the locator as a string slice
    pub fn as_str(&self) -> &str {
        // chars only ever holds ASCII drawn from the encoding alphabets
        std::str::from_utf8(&self.chars).unwrap_or("")
    }

    /// The field pair (characters 1-2, uppercase letters)
    pub fn field(&self) -> &str {
        &self.as_str()[0..2]
    }

    /// The square pair (characters 3-4, digits)
    pub fn square(&self) -> &str {
        &self.as_str()[2..4]
    }

    /// The subsquare pair (characters 5-6, lowercase letters)
    pub fn subsquare(&self) -> &str {
        &self.as_str()[4..6]
    }
}

impl fmt::Display for GridLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GridLocator {
    type Err = Error;

    /// Parse a six character locator, case-folding the letter pairs to
    /// their canonical form (uppercase field, lowercase subsquare)
    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 6 {
            return Err(Error::InvalidLocator(format!(
                "expected 6 characters, got {}",
                s.chars().count()
            )));
        }

        let mut chars = [0u8; 6];
        for (i, &b) in bytes.iter().enumerate() {
            let (canonical, ok) = match i {
                0 | 1 => {
                    let c = b.to_ascii_uppercase();
                    (c, (b'A'..=b'R').contains(&c))
                }
                2 | 3 => (b, b.is_ascii_digit()),
                _ => {
                    let c = b.to_ascii_lowercase();
                    (c, (b'a'..=b'x').contains(&c))
                }
            };
            if !ok {
                return Err(Error::InvalidLocator(format!(
                    "character '{}' is not valid at position {}",
                    b as char,
                    i + 1
                )));
            }
            chars[i] = canonical;
        }

        Ok(Self { chars })
    }
}

impl Serialize for GridLocator {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GridLocator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Split one normalized axis value into field, square and subsquare
/// cell indices.
///
/// The value is folded into `[0, span)` first: anything below the bottom
/// edge lands in the first cell, anything at or above the top edge lands
/// in the last subsquare. That keeps every index inside its alphabet, so
/// out-of-range coordinates encode to the nearest edge cell instead of
/// producing garbage characters, and the top boundary (longitude 180,
/// latitude 90) consistently belongs to the final cell.
fn axis_cells(value: f64, span: f64, field_deg: f64, square_deg: f64) -> (usize, usize, usize) {
    let folded = value.clamp(0.0, span * (1.0 - f64::EPSILON));

    let field = (folded / field_deg).floor() as usize;
    let rem = folded - field as f64 * field_deg;
    let square = (rem / square_deg).floor() as usize;
    let frac = rem / square_deg - square as f64;
    let sub = (frac * grid::SUBSQUARE_DIVISIONS as f64).floor() as usize;

    (field, square, sub)
}

/// Encode a coordinate as a six character grid locator
///
/// This is the permissive entry point: it never fails. Out-of-range
/// coordinates fold to the nearest edge cell (see [`axis_cells`]); use
/// [`encode_checked`] to reject them instead.
pub fn encode(coords: Coordinates) -> GridLocator {
    let (lon_field, lon_square, lon_sub) = axis_cells(
        coords.lng + 180.0,
        grid::LON_SPAN_DEG,
        grid::FIELD_LON_DEG,
        grid::SQUARE_LON_DEG,
    );
    let (lat_field, lat_square, lat_sub) = axis_cells(
        coords.lat + 90.0,
        grid::LAT_SPAN_DEG,
        grid::FIELD_LAT_DEG,
        grid::SQUARE_LAT_DEG,
    );

    GridLocator {
        chars: [
            alphabet::FIELD[lon_field],
            alphabet::FIELD[lat_field],
            alphabet::SQUARE[lon_square],
            alphabet::SQUARE[lat_square],
            alphabet::SUBSQUARE[lon_sub],
            alphabet::SUBSQUARE[lat_sub],
        ],
    }
}

/// Encode a coordinate, rejecting out-of-range input
pub fn encode_checked(coords: Coordinates) -> Result<GridLocator> {
    coords.validate()?;
    Ok(encode(coords))
}
