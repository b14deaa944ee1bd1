// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire encodings for the color datapoint.
//!
//! A color datapoint carries a fixed-width hex string whose layout is
//! decided once at configuration time. Exactly one encoding is active per
//! light; adding a new encoding requires updating both [`decode`] and
//! [`encode`] together.
//!
//! [`decode`]: ColorEncoding::decode
//! [`encode`]: ColorEncoding::encode
//!
//! # Wire formats
//!
//! - [`ColorEncoding::Rgb`]: `RRGGBB` (6 hex chars)
//! - [`ColorEncoding::Hsv`]: `HHHHSSSSVVVV` (12 hex chars, hue in degrees,
//!   saturation/value scaled by 1000)
//! - [`ColorEncoding::RgbHsv`]: `RRGGBBHHHHSSVV` (14 hex chars, RGB
//!   followed by hue in degrees and saturation/value scaled to 0-255)
//!
//! Encoding emits uppercase hex; decoding is case-insensitive. Decoding
//! returns `None` on invalid characters or insufficient length, and the
//! caller must treat that as "ignore this datapoint update".

use crate::types::{Hsv, Rgb};

/// Layout of the color datapoint wire string.
///
/// # Examples
///
/// ```
/// use dplight::encoding::ColorEncoding;
/// use dplight::types::Rgb;
///
/// let wire = ColorEncoding::Rgb.encode(&Rgb::from_bytes(255, 128, 0));
/// assert_eq!(wire, "FF8000");
///
/// let decoded = ColorEncoding::Rgb.decode(&wire).unwrap();
/// assert_eq!(decoded.to_bytes(), (255, 128, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorEncoding {
    /// Plain 8-bit RGB channels.
    Rgb,
    /// Hue/saturation/value fields, each 4 hex digits.
    Hsv,
    /// Combined RGB prefix plus an HSV trailer.
    RgbHsv,
}

impl ColorEncoding {
    /// Decodes a wire string into a normalized RGB color.
    ///
    /// Returns `None` if the string is too short or contains non-hex
    /// characters in the decoded fields. The combined `RgbHsv` layout
    /// decodes only the RGB prefix; the trailer is recomputed on encode.
    #[must_use]
    pub fn decode(&self, wire: &str) -> Option<Rgb> {
        match self {
            Self::Rgb | Self::RgbHsv => {
                let red = parse_hex_u8(wire, 0)?;
                let green = parse_hex_u8(wire, 2)?;
                let blue = parse_hex_u8(wire, 4)?;
                Some(Rgb::from_bytes(red, green, blue))
            }
            Self::Hsv => {
                let hue = parse_hex_u16(wire, 0)?;
                let saturation = parse_hex_u16(wire, 4)?;
                let value = parse_hex_u16(wire, 8)?;
                let hsv = Hsv {
                    hue: f32::from(hue).min(360.0),
                    saturation: (f32::from(saturation) / 1000.0).min(1.0),
                    value: (f32::from(value) / 1000.0).min(1.0),
                };
                Some(Rgb::from_hsv(&hsv))
            }
        }
    }

    /// Encodes a normalized RGB color into the wire string.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn encode(&self, color: &Rgb) -> String {
        let (red, green, blue) = color.to_bytes();
        match self {
            Self::Rgb => format!("{red:02X}{green:02X}{blue:02X}"),
            Self::Hsv => {
                let hsv = color.to_hsv();
                format!(
                    "{:04X}{:04X}{:04X}",
                    hsv.hue.round() as u16,
                    (hsv.saturation * 1000.0).round() as u16,
                    (hsv.value * 1000.0).round() as u16,
                )
            }
            Self::RgbHsv => {
                let hsv = color.to_hsv();
                format!(
                    "{red:02X}{green:02X}{blue:02X}{:04X}{:02X}{:02X}",
                    hsv.hue.round() as u16,
                    (hsv.saturation * 255.0).round() as u8,
                    (hsv.value * 255.0).round() as u8,
                )
            }
        }
    }
}

/// Parses a fixed-width 2-digit hex field, case-insensitive.
fn parse_hex_u8(s: &str, at: usize) -> Option<u8> {
    let field = hex_field(s, at, 2)?;
    u8::from_str_radix(field, 16).ok()
}

/// Parses a fixed-width 4-digit hex field, case-insensitive.
fn parse_hex_u16(s: &str, at: usize) -> Option<u16> {
    let field = hex_field(s, at, 4)?;
    u16::from_str_radix(field, 16).ok()
}

/// Extracts a fixed-width field of hex digits only. `from_str_radix`
/// tolerates a leading sign, which the wire format never carries.
fn hex_field(s: &str, at: usize, width: usize) -> Option<&str> {
    let field = s.get(at..at + width)?;
    if field.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(field)
    } else {
        None
    }
}
