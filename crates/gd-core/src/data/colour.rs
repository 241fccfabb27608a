//! Colour definitions (the 16 console colours)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Console colour, low-intensity values 0-7 and their bright counterparts 8-15
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Colour {
    #[default]
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGrey = 7,
    DarkGrey = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    Yellow = 14,
    White = 15,
}

/// Colours an ugly thing can be born with
pub const UGLY_THING_COLOURS: [Colour; 6] = [
    Colour::Red,
    Colour::Brown,
    Colour::Green,
    Colour::Cyan,
    Colour::Magenta,
    Colour::LightGrey,
];

impl Colour {
    /// Colour for an index; out of range values wrap into 0-15
    pub const fn from_index(index: u8) -> Self {
        match index & 0x0f {
            0 => Colour::Black,
            1 => Colour::Blue,
            2 => Colour::Green,
            3 => Colour::Cyan,
            4 => Colour::Red,
            5 => Colour::Magenta,
            6 => Colour::Brown,
            7 => Colour::LightGrey,
            8 => Colour::DarkGrey,
            9 => Colour::LightBlue,
            10 => Colour::LightGreen,
            11 => Colour::LightCyan,
            12 => Colour::LightRed,
            13 => Colour::LightMagenta,
            14 => Colour::Yellow,
            _ => Colour::White,
        }
    }

    pub const fn is_high_intensity(&self) -> bool {
        (*self as u8) >= 8
    }

    /// Dim counterpart (Yellow -> Brown, White -> LightGrey)
    pub const fn make_low(self) -> Self {
        if self.is_high_intensity() {
            Self::from_index(self as u8 - 8)
        } else {
            self
        }
    }

    /// Bright counterpart (Brown -> Yellow, LightGrey -> White)
    pub const fn make_high(self) -> Self {
        if self.is_high_intensity() {
            self
        } else {
            Self::from_index(self as u8 + 8)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_index_round_trips() {
        for colour in Colour::iter() {
            assert_eq!(Colour::from_index(colour as u8), colour);
        }
    }

    #[test]
    fn test_intensity_pairs() {
        assert_eq!(Colour::Red.make_high(), Colour::LightRed);
        assert_eq!(Colour::Brown.make_high(), Colour::Yellow);
        assert_eq!(Colour::LightGrey.make_high(), Colour::White);
        assert_eq!(Colour::Yellow.make_low(), Colour::Brown);
        assert_eq!(Colour::White.make_low(), Colour::LightGrey);
        assert_eq!(Colour::Green.make_low(), Colour::Green);
    }

    #[test]
    fn test_ugly_colours_are_dim() {
        for colour in UGLY_THING_COLOURS {
            assert!(!colour.is_high_intensity());
            assert_eq!(colour.make_high().make_low(), colour);
        }
    }
}
