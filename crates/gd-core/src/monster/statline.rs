//! The ghost/demon statline record

use core::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::combat::{AttackFlavour, AttackType, MonsterResists, WeaponBrand};
use crate::consts::NUM_MONSTER_SPELL_SLOTS;
use crate::data::Colour;
use crate::magic::SpellType;
use crate::player::{God, Job, SkillType, Species};

/// Which routine populated a statline
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum GhostKind {
    #[default]
    PlayerGhost = 0,
    /// Randomly generated Pandemonium demon lord
    PandemonLord = 1,
    UglyThing = 2,
    VeryUglyThing = 3,
}

impl GhostKind {
    pub const fn is_ugly_thing(&self) -> bool {
        matches!(self, GhostKind::UglyThing | GhostKind::VeryUglyThing)
    }
}

/// Flight mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Flight {
    #[default]
    None = 0,
    Levitate = 1,
    Fly = 2,
}

/// Role of each monster spell slot
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum SlotRole {
    /// Main attack spell
    Offense1 = 0,
    /// Second attack spell, never the same as the first for a ghost
    Offense2 = 1,
    /// Summoning or self-enchantment
    Summon = 2,
    Utility1 = 3,
    /// Second utility spell; Dig always lands here
    Utility2 = 4,
    /// Blink or Teleport Self
    Emergency = 5,
}

impl SlotRole {
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

/// Spell slots of a monster, indexed by role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SpellSlots([SpellType; NUM_MONSTER_SPELL_SLOTS]);

impl SpellSlots {
    /// All slots empty
    pub const fn empty() -> Self {
        Self([SpellType::NoSpell; NUM_MONSTER_SPELL_SLOTS])
    }

    pub fn iter(&self) -> impl Iterator<Item = SpellType> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(SpellType::is_none)
    }

    /// Apply `f` to every slot in place
    pub fn map_in_place(&mut self, f: impl Fn(SpellType) -> SpellType) {
        for spell in &mut self.0 {
            *spell = f(*spell);
        }
    }
}

impl Index<SlotRole> for SpellSlots {
    type Output = SpellType;

    fn index(&self, role: SlotRole) -> &SpellType {
        &self.0[role.index()]
    }
}

impl IndexMut<SlotRole> for SpellSlots {
    fn index_mut(&mut self, role: SlotRole) -> &mut SpellType {
        &mut self.0[role.index()]
    }
}

/// Generated statline of a player ghost, demon lord or ugly thing.
///
/// A fresh record holds neutral defaults; one of the `init_*` routines
/// fills it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GhostDemon {
    pub kind: GhostKind,
    pub name: String,

    pub species: Species,
    pub job: Job,
    pub religion: God,
    pub best_skill: SkillType,
    pub best_skill_level: i32,
    /// Experience level, also the monster's hit dice
    pub xl: i32,

    pub max_hp: i32,
    pub ev: i32,
    pub ac: i32,
    pub damage: i32,
    pub speed: i32,

    pub see_invis: bool,
    pub brand: WeaponBrand,
    pub att_type: AttackType,
    pub att_flav: AttackFlavour,
    pub resists: MonsterResists,

    pub spellcaster: bool,
    pub spells: SpellSlots,

    pub cycle_colours: bool,
    pub colour: Colour,
    pub fly: Flight,
}

impl Default for GhostDemon {
    fn default() -> Self {
        Self::new()
    }
}

impl GhostDemon {
    pub fn new() -> Self {
        Self {
            kind: GhostKind::PlayerGhost,
            name: String::new(),
            species: Species::Unknown,
            job: Job::Unknown,
            religion: God::NoGod,
            best_skill: SkillType::Fighting,
            best_skill_level: 0,
            xl: 0,
            max_hp: 0,
            ev: 0,
            ac: 0,
            damage: 0,
            speed: 10,
            see_invis: false,
            brand: WeaponBrand::Normal,
            att_type: AttackType::Hit,
            att_flav: AttackFlavour::Plain,
            resists: MonsterResists::default(),
            spellcaster: false,
            spells: SpellSlots::empty(),
            cycle_colours: false,
            colour: Colour::Black,
            fly: Flight::None,
        }
    }

    /// Back to the neutral defaults
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
