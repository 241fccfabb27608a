//! Player species, background and religion definitions

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Player species
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Species {
    Human = 0,
    HighElf = 1,
    DeepElf = 2,
    SludgeElf = 3,
    MountainDwarf = 4,
    Halfling = 5,
    HillOrc = 6,
    Kobold = 7,
    Mummy = 8,
    Naga = 9,
    Ogre = 10,
    Troll = 11,
    RedDraconian = 12,
    WhiteDraconian = 13,
    GreenDraconian = 14,
    YellowDraconian = 15,
    GreyDraconian = 16,
    BlackDraconian = 17,
    PurpleDraconian = 18,
    MottledDraconian = 19,
    PaleDraconian = 20,
    BaseDraconian = 21,
    Centaur = 22,
    Demigod = 23,
    Spriggan = 24,
    Minotaur = 25,
    Demonspawn = 26,
    Ghoul = 27,
    Kenku = 28,
    Merfolk = 29,
    Vampire = 30,
    DeepDwarf = 31,
    /// Not derived from a player (demon lords, ugly things)
    #[default]
    Unknown = 255,
}

impl Species {
    pub const fn is_draconian(&self) -> bool {
        (*self as u8) >= Species::RedDraconian as u8 && (*self as u8) <= Species::BaseDraconian as u8
    }

    /// Orc-kin, for the purpose of orc slaying
    pub const fn is_orc(&self) -> bool {
        matches!(self, Species::HillOrc)
    }

    /// Species that are undead by nature
    pub const fn is_undead(&self) -> bool {
        matches!(self, Species::Mummy | Species::Ghoul | Species::Vampire)
    }

    /// Movement speed before mutations and equipment
    pub const fn base_movement_speed(&self) -> i32 {
        match self {
            Species::Naga => 8,
            _ => 10,
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Species::Unknown)
    }
}

/// Player background
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Job {
    Fighter = 0,
    Wizard = 1,
    Priest = 2,
    Thief = 3,
    Gladiator = 4,
    Necromancer = 5,
    Paladin = 6,
    Assassin = 7,
    Berserker = 8,
    Hunter = 9,
    Conjurer = 10,
    Enchanter = 11,
    FireElementalist = 12,
    IceElementalist = 13,
    Summoner = 14,
    AirElementalist = 15,
    EarthElementalist = 16,
    Crusader = 17,
    DeathKnight = 18,
    VenomMage = 19,
    ChaosKnight = 20,
    Transmuter = 21,
    Healer = 22,
    Reaver = 23,
    Stalker = 24,
    Monk = 25,
    Warper = 26,
    Wanderer = 27,
    Artificer = 28,
    #[default]
    Unknown = 255,
}

impl Job {
    pub const fn is_known(&self) -> bool {
        !matches!(self, Job::Unknown)
    }
}

/// Deity
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum God {
    #[default]
    NoGod = 0,
    Zin = 1,
    ShiningOne = 2,
    Kikubaaqudgha = 3,
    Yredelemnul = 4,
    Xom = 5,
    Vehumet = 6,
    Okawaru = 7,
    Makhleb = 8,
    SifMuna = 9,
    Trog = 10,
    Nemelex = 11,
    Elyvilon = 12,
    Lugonu = 13,
    Beogh = 14,
    Jiyva = 15,
    Fedhas = 16,
    Cheibriados = 17,
}

impl God {
    /// Good gods; a ghost never keeps their worship
    pub const fn is_good(&self) -> bool {
        matches!(self, God::Zin | God::ShiningOne | God::Elyvilon)
    }
}
