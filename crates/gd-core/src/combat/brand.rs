//! Weapon brands
//!
//! Player ghosts inherit the brand of their weapon; demon lords roll one
//! from the brands that make sense on a bare-handed demon.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::player::Species;

/// Weapon brand
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum WeaponBrand {
    #[default]
    Normal = 0,
    Flaming = 1,
    Freezing = 2,
    HolyWrath = 3,
    Electrocution = 4,
    OrcSlaying = 5,
    DragonSlaying = 6,
    Venom = 7,
    Protection = 8,
    Draining = 9,
    Speed = 10,
    Vorpal = 11,
    /// Launcher-only fire brand
    Flame = 12,
    /// Launcher-only cold brand
    Frost = 13,
    Vampiricism = 14,
    Pain = 15,
    Distortion = 16,
    Reaching = 17,
    Returning = 18,
    Chaos = 19,
    Confuse = 20,
    Penetration = 21,
    Reaping = 22,
}

impl WeaponBrand {
    /// Demon lord brands are drawn from ids below this value; stored
    /// statlines may carry any brand up to and including it.
    pub const PAN_LORD_LIMIT: u8 = WeaponBrand::Reaping as u8;

    /// Whether the brand lies in the demon lord brand range
    pub const fn in_pan_lord_range(&self) -> bool {
        (*self as u8) <= Self::PAN_LORD_LIMIT
    }

    /// Whether a demon lord facing `viewer` may roll this brand
    pub fn allowed_for_pan_lord(&self, viewer: Species) -> bool {
        match self {
            WeaponBrand::HolyWrath
            | WeaponBrand::Protection
            | WeaponBrand::Flame
            | WeaponBrand::Frost => false,
            WeaponBrand::OrcSlaying => viewer.is_orc(),
            WeaponBrand::DragonSlaying => viewer.is_draconian(),
            _ => (*self as u8) < Self::PAN_LORD_LIMIT,
        }
    }

    /// All brands a demon lord facing `viewer` may roll, in id order
    pub fn pan_lord_brands(viewer: Species) -> Vec<WeaponBrand> {
        WeaponBrand::iter()
            .filter(|brand| brand.allowed_for_pan_lord(viewer))
            .collect()
    }
}
