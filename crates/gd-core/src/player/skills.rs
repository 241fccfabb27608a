//! Player skills

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Skill types, in skill-screen order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum SkillType {
    #[default]
    Fighting = 0,
    ShortBlades = 1,
    LongBlades = 2,
    Axes = 3,
    MacesFlails = 4,
    Polearms = 5,
    Staves = 6,
    Slings = 7,
    Bows = 8,
    Crossbows = 9,
    Darts = 10,
    Throwing = 11,
    Armour = 12,
    Dodging = 13,
    Stealth = 14,
    Stabbing = 15,
    Shields = 16,
    Traps = 17,
    UnarmedCombat = 18,
    Spellcasting = 19,
    Conjurations = 20,
    Enchantments = 21,
    Summonings = 22,
    Necromancy = 23,
    Translocations = 24,
    Transmutations = 25,
    FireMagic = 26,
    IceMagic = 27,
    AirMagic = 28,
    EarthMagic = 29,
    PoisonMagic = 30,
    Invocations = 31,
    Evocations = 32,
}

impl SkillType {
    pub const COUNT: usize = 33;

    pub const fn index(&self) -> usize {
        *self as usize
    }
}

/// Trained levels for every skill (0-27)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skills {
    levels: [u8; SkillType::COUNT],
}

// Serialized as a plain list, one level per skill in enum order
impl Serialize for Skills {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.levels.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Skills {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let list = Vec::<u8>::deserialize(deserializer)?;
        let levels: [u8; SkillType::COUNT] = list.try_into().map_err(|list: Vec<u8>| {
            serde::de::Error::invalid_length(list.len(), &"one level per skill")
        })?;
        Ok(Skills { levels })
    }
}

impl Default for Skills {
    fn default() -> Self {
        Self {
            levels: [0; SkillType::COUNT],
        }
    }
}

impl Skills {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self, skill: SkillType) -> i32 {
        i32::from(self.levels[skill.index()])
    }

    pub fn set_level(&mut self, skill: SkillType, level: u8) {
        self.levels[skill.index()] = level;
    }

    /// Builder-style setter
    pub fn with(mut self, skill: SkillType, level: u8) -> Self {
        self.set_level(skill, level);
        self
    }

    /// Highest trained skill, skipping `exclude`.
    ///
    /// Ties go to the skill listed first; with nothing trained the answer
    /// is Fighting.
    pub fn best_skill(&self, exclude: Option<SkillType>) -> SkillType {
        let mut best = SkillType::Fighting;
        let mut best_level = 0;

        for skill in SkillType::iter() {
            if Some(skill) == exclude {
                continue;
            }
            let level = self.level(skill);
            if level > best_level {
                best = skill;
                best_level = level;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_count_matches_enum() {
        assert_eq!(SkillType::iter().count(), SkillType::COUNT);
        assert_eq!(SkillType::Evocations.index(), SkillType::COUNT - 1);
    }

    #[test]
    fn test_best_skill_untrained_is_fighting() {
        assert_eq!(Skills::new().best_skill(None), SkillType::Fighting);
    }

    #[test]
    fn test_best_skill_ties_prefer_lower_index() {
        let skills = Skills::new()
            .with(SkillType::Conjurations, 12)
            .with(SkillType::LongBlades, 12)
            .with(SkillType::Dodging, 5);
        assert_eq!(skills.best_skill(None), SkillType::LongBlades);
    }

    #[test]
    fn test_best_skill_exclusion() {
        let skills = Skills::new()
            .with(SkillType::Fighting, 20)
            .with(SkillType::Axes, 9);
        assert_eq!(skills.best_skill(Some(SkillType::Fighting)), SkillType::Axes);
    }
}
