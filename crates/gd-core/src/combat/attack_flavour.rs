//! Attack flavours
//!
//! These define WHAT extra effect a melee hit carries.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::data::Colour;

/// Attack flavour - the side effect of a hit
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum AttackFlavour {
    /// No side effect
    #[default]
    Plain = 0,
    Fire = 1,
    /// Sticky flame, the very ugly fire attack
    Napalm = 2,
    Acid = 3,
    PoisonNasty = 4,
    PoisonMedium = 5,
    Elec = 6,
    Disease = 7,
    Rot = 8,
    Cold = 9,
}

impl AttackFlavour {
    /// Flavour matching an ugly thing's body colour
    pub const fn from_ugly_colour(colour: Colour) -> Self {
        match colour {
            Colour::Red => AttackFlavour::Fire,
            Colour::Brown => AttackFlavour::Acid,
            Colour::Green => AttackFlavour::PoisonNasty,
            Colour::Cyan => AttackFlavour::Elec,
            Colour::Magenta => AttackFlavour::Disease,
            Colour::LightGrey => AttackFlavour::Cold,
            _ => AttackFlavour::Plain,
        }
    }

    /// Stronger flavour for a very ugly thing; unlisted flavours stay put
    pub const fn very_ugly_upgrade(self) -> Self {
        match self {
            AttackFlavour::Fire => AttackFlavour::Napalm,
            AttackFlavour::PoisonNasty => AttackFlavour::PoisonMedium,
            AttackFlavour::Disease => AttackFlavour::Rot,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_colour_mapping() {
        assert_eq!(AttackFlavour::from_ugly_colour(Colour::Red), AttackFlavour::Fire);
        assert_eq!(AttackFlavour::from_ugly_colour(Colour::Brown), AttackFlavour::Acid);
        assert_eq!(
            AttackFlavour::from_ugly_colour(Colour::Green),
            AttackFlavour::PoisonNasty
        );
        assert_eq!(AttackFlavour::from_ugly_colour(Colour::Cyan), AttackFlavour::Elec);
        assert_eq!(
            AttackFlavour::from_ugly_colour(Colour::Magenta),
            AttackFlavour::Disease
        );
        assert_eq!(AttackFlavour::from_ugly_colour(Colour::LightGrey), AttackFlavour::Cold);
        assert_eq!(AttackFlavour::from_ugly_colour(Colour::Blue), AttackFlavour::Plain);
        assert_eq!(AttackFlavour::from_ugly_colour(Colour::LightRed), AttackFlavour::Plain);
    }

    #[test]
    fn test_upgrade_is_settled_after_one_step() {
        for flavour in AttackFlavour::iter() {
            let once = flavour.very_ugly_upgrade();
            assert_eq!(once.very_ugly_upgrade(), once);
        }
        assert_eq!(AttackFlavour::Acid.very_ugly_upgrade(), AttackFlavour::Acid);
    }
}
