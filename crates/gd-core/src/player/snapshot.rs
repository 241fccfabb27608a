//! Immutable snapshot of the player a ghost is made from

use bitflags::bitflags;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use super::{God, Job, SkillType, Skills, Species};
use crate::combat::WeaponBrand;
use crate::dungeon::LevelId;
use crate::magic::SpellType;

bitflags! {
    /// Boolean player state that ghost generation cares about
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct PlayerTraits: u8 {
        const SEE_INVISIBLE = 0x01;
        const UNDEAD = 0x02;
        /// Wearing boots of running
        const RUNNING_BOOTS = 0x04;
    }
}

// Manual serde for PlayerTraits
impl Serialize for PlayerTraits {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PlayerTraits {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(PlayerTraits::from_bits_truncate(bits))
    }
}

/// Broad class of a wielded item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemClass {
    #[default]
    Weapon,
    Staff,
    /// Anything else held in the hands
    Other,
}

/// What the player is holding in their weapon hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WieldedItem {
    pub class: ItemClass,
    /// Base damage of the item type
    pub damage: i32,
    /// Skill the item trains
    pub skill: SkillType,
    pub brand: WeaponBrand,
}

impl WieldedItem {
    pub const fn weapon(damage: i32, skill: SkillType, brand: WeaponBrand) -> Self {
        Self {
            class: ItemClass::Weapon,
            damage,
            skill,
            brand,
        }
    }

    pub const fn staff(damage: i32) -> Self {
        Self {
            class: ItemClass::Staff,
            damage,
            skill: SkillType::Staves,
            brand: WeaponBrand::Normal,
        }
    }

    /// Weapons and staves hit with their own damage
    pub const fn is_melee_weapon(&self) -> bool {
        matches!(self.class, ItemClass::Weapon | ItemClass::Staff)
    }
}

/// Everything ghost generation reads from the player, taken at one moment.
///
/// Resistances and defences are the player's effective values at the time
/// of the snapshot, equipment and mutations included.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSnapshot {
    pub name: String,
    pub species: Species,
    pub job: Job,
    pub religion: God,
    pub experience_level: i32,
    pub hp_max: i32,
    pub evasion: i32,
    pub armour_class: i32,
    pub strength: i32,
    pub res_fire: i8,
    pub res_cold: i8,
    pub res_elec: i8,
    pub traits: PlayerTraits,
    /// Level of the "fast" mutation, 0 when absent
    pub fast_mutation: u8,
    pub weapon: Option<WieldedItem>,
    pub skills: Skills,
    pub spells: HashSet<SpellType>,
    /// Where the player currently is
    pub place: LevelId,
}

impl PlayerSnapshot {
    pub fn new(name: impl Into<String>, species: Species, job: Job) -> Self {
        let mut traits = PlayerTraits::empty();
        traits.set(PlayerTraits::UNDEAD, species.is_undead());
        Self {
            name: name.into(),
            species,
            job,
            experience_level: 1,
            traits,
            ..Default::default()
        }
    }

    pub fn knows_spell(&self, spell: SpellType) -> bool {
        self.spells.contains(&spell)
    }

    pub fn is_undead(&self) -> bool {
        self.traits.contains(PlayerTraits::UNDEAD)
    }

    pub fn can_see_invisible(&self) -> bool {
        self.traits.contains(PlayerTraits::SEE_INVISIBLE)
    }

    pub fn skill(&self, skill: SkillType) -> i32 {
        self.skills.level(skill)
    }
}
