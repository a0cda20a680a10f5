//! Nine-stop purple and blue gradient derived from a numeric sequence
//!
//! The first five stops shift their blue channel (and, for the first stop, red)
//! with the sequence sum. The last four stops are fixed.

use crate::encoding::NumericSequence;
use std::fmt;

/// Number of stops in every gradient
pub const GRADIENT_STOPS: usize = 9;

/// 8-bit RGB triplet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Red channel
    pub const fn red(self) -> u8 {
        self.0[0]
    }

    /// Green channel
    pub const fn green(self) -> u8 {
        self.0[1]
    }

    /// Blue channel
    pub const fn blue(self) -> u8 {
        self.0[2]
    }

    /// `#RRGGBB` representation
    pub fn hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}",
            self.red(),
            self.green(),
            self.blue()
        )
    }
}

/// Steel blue
pub const STEEL_BLUE: Rgb = Rgb([0x46, 0x82, 0xB4]);
/// Sky blue
pub const SKY_BLUE: Rgb = Rgb([0x87, 0xCE, 0xEB]);
/// Deep navy blue
pub const DEEP_NAVY: Rgb = Rgb([0x00, 0x00, 0x8B]);
/// Lavender
pub const LAVENDER: Rgb = Rgb([0xE6, 0xE6, 0xFA]);

/// Ordered gradient stops for one name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGradient {
    base_color: u8,
    stops: [Rgb; GRADIENT_STOPS],
}

impl ColorGradient {
    /// Build the gradient for a sequence
    ///
    /// Uses the sequence as given; an empty sequence has a base color of 0.
    pub fn from_sequence(sequence: &NumericSequence) -> Self {
        Self::from_base_color((sequence.sum() % 256) as u8)
    }

    /// Build the gradient for an explicit base color
    pub const fn from_base_color(base_color: u8) -> Self {
        let stops = [
            // Deep purple, red at half strength
            Rgb([base_color / 2, 0x00, base_color]),
            // Indigo
            Rgb([0x4B, 0x00, base_color.wrapping_add(80)]),
            // Amethyst
            Rgb([0x6A, 0x0D, base_color.wrapping_add(60)]),
            // Deep violet
            Rgb([0x80, 0x00, base_color.wrapping_add(40)]),
            // Dark blue
            Rgb([0x00, 0x00, base_color.wrapping_add(100)]),
            STEEL_BLUE,
            SKY_BLUE,
            DEEP_NAVY,
            LAVENDER,
        ];

        Self { base_color, stops }
    }

    /// Sum of the sequence modulo 256
    pub const fn base_color(&self) -> u8 {
        self.base_color
    }

    /// Stops in gradient order
    pub const fn stops(&self) -> &[Rgb; GRADIENT_STOPS] {
        &self.stops
    }

    /// `#RRGGBB` codes in gradient order
    ///
    /// Channels that follow the base color print in lower case and fixed channels
    /// in upper case: a base color of 200 gives `#6400c8`, then `#4B0018`.
    pub fn hex_codes(&self) -> Vec<String> {
        self.stops
            .iter()
            .enumerate()
            .map(|(index, &stop)| stop_code(index, stop))
            .collect()
    }
}

fn stop_code(index: usize, stop: Rgb) -> String {
    match index {
        0 => format!("#{:02x}00{:02x}", stop.red(), stop.blue()),
        1..=4 => format!("#{:02X}{:02X}{:02x}", stop.red(), stop.green(), stop.blue()),
        _ => stop.hex(),
    }
}

impl fmt::Display for ColorGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, code) in self.hex_codes().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{code}'")?;
        }
        write!(f, "]")
    }
}
