//! Spell identifiers

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Spell identifier, shared by player and monster spellbooks.
///
/// `NoSpell` marks an empty slot and terminates the search tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum SpellType {
    #[default]
    NoSpell = 0,

    // Conjurations and other offense
    LehudibsCrystalSpear,
    FireStorm,
    IceStorm,
    BoltOfDraining,
    Agony,
    Disintegrate,
    LightningBolt,
    Airstrike,
    StickyFlame,
    IskenderunsMysticBlast,
    BoltOfMagma,
    FlingIcicle,
    BoltOfFire,
    BoltOfCold,
    Fireball,
    DelayedFireball,
    VenomBolt,
    IronShot,
    StoneArrow,
    ThrowFlame,
    ThrowFrost,
    Pain,
    Sting,
    Shock,
    Sandblast,
    MagicDart,
    Sleep,
    Backlight,

    // Summonings and self-enchantments
    SymbolOfTorment,
    SummonGreaterDemon,
    SummonHorribleThings,
    Haunt,
    SummonDemon,
    DemonicHorde,
    Haste,
    SummonUglyThing,
    SummonIceBeast,
    AnimateDead,
    Invisibility,
    SummonScorpions,
    CallImp,
    SummonSmallMammals,
    ControlledBlink,
    Blink,
    TeleportSelf,

    // Enchantments and utility
    Banishment,
    FreezingCloud,
    DispelUndead,
    Paralyse,
    Confuse,
    MephiticCloud,
    Slow,
    PolymorphOther,
    TeleportOther,
    Dig,
    Petrify,

    // Monster-only spells
    HellfireBurst,
    MetalSplinters,
    EnergyBolt,
    SteamBall,
    Hellfire,
    Smiting,
}

impl SpellType {
    pub const fn is_none(&self) -> bool {
        matches!(self, SpellType::NoSpell)
    }

    /// Whether a monster can hold this spell as-is, i.e. it needs no
    /// translation from the player spell list.
    pub fn is_monster_spell(&self) -> bool {
        translate_spell(*self) == *self
    }
}

/// Monster equivalent of a player spell.
///
/// Spells without a listed substitute are returned unchanged.
pub const fn translate_spell(spell: SpellType) -> SpellType {
    match spell {
        SpellType::ControlledBlink => SpellType::Blink,
        SpellType::DemonicHorde => SpellType::CallImp,
        // Agony is upgraded all the way to Torment
        SpellType::Agony | SpellType::SymbolOfTorment => SpellType::SymbolOfTorment,
        SpellType::DelayedFireball => SpellType::Fireball,
        SpellType::Petrify => SpellType::Paralyse,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_translation_table() {
        assert_eq!(translate_spell(SpellType::ControlledBlink), SpellType::Blink);
        assert_eq!(translate_spell(SpellType::DemonicHorde), SpellType::CallImp);
        assert_eq!(translate_spell(SpellType::Agony), SpellType::SymbolOfTorment);
        assert_eq!(
            translate_spell(SpellType::SymbolOfTorment),
            SpellType::SymbolOfTorment
        );
        assert_eq!(translate_spell(SpellType::DelayedFireball), SpellType::Fireball);
        assert_eq!(translate_spell(SpellType::Petrify), SpellType::Paralyse);
    }

    #[test]
    fn test_unlisted_spells_pass_through() {
        assert_eq!(translate_spell(SpellType::NoSpell), SpellType::NoSpell);
        assert_eq!(translate_spell(SpellType::Dig), SpellType::Dig);
        assert_eq!(translate_spell(SpellType::Hellfire), SpellType::Hellfire);
    }

    #[test]
    fn test_player_only_spells() {
        let player_only: Vec<SpellType> =
            SpellType::iter().filter(|s| !s.is_monster_spell()).collect();
        assert_eq!(
            player_only,
            vec![
                SpellType::Agony,
                SpellType::DelayedFireball,
                SpellType::DemonicHorde,
                SpellType::ControlledBlink,
                SpellType::Petrify,
            ]
        );
    }

    fn any_spell() -> impl Strategy<Value = SpellType> {
        let all: Vec<SpellType> = SpellType::iter().collect();
        proptest::sample::select(all)
    }

    proptest! {
        #[test]
        fn prop_translation_is_idempotent(spell in any_spell()) {
            let once = translate_spell(spell);
            prop_assert_eq!(translate_spell(once), once);
        }
    }
}
