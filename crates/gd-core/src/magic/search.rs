//! Spell search tables
//!
//! Priority lists used to fill a ghost's spell slots from what the player
//! knew, and to roll a demon lord's spells. Each list ends with the
//! `NoSpell` sentinel; a demon lord's random pick may land on it.

use super::SpellType;

/// Conjurations for the two offense slots
pub const SEARCH_ORDER_CONJ: [SpellType; 29] = [
    SpellType::LehudibsCrystalSpear,
    SpellType::FireStorm,
    SpellType::IceStorm,
    SpellType::BoltOfDraining,
    SpellType::Agony,
    SpellType::Disintegrate,
    SpellType::LightningBolt,
    SpellType::Airstrike,
    SpellType::StickyFlame,
    SpellType::IskenderunsMysticBlast,
    SpellType::BoltOfMagma,
    SpellType::FlingIcicle,
    SpellType::BoltOfFire,
    SpellType::BoltOfCold,
    SpellType::Fireball,
    SpellType::DelayedFireball,
    SpellType::VenomBolt,
    SpellType::IronShot,
    SpellType::StoneArrow,
    SpellType::ThrowFlame,
    SpellType::ThrowFrost,
    SpellType::Pain,
    SpellType::Sting,
    SpellType::Shock,
    SpellType::Sandblast,
    SpellType::MagicDart,
    SpellType::Sleep,
    SpellType::Backlight,
    SpellType::NoSpell,
];

/// Summonings and self-enchantments for the summon slot
pub const SEARCH_ORDER_THIRD: [SpellType; 17] = [
    SpellType::SymbolOfTorment,
    SpellType::SummonGreaterDemon,
    SpellType::SummonHorribleThings,
    SpellType::Haunt,
    SpellType::SummonDemon,
    SpellType::DemonicHorde,
    SpellType::Haste,
    SpellType::SummonUglyThing,
    SpellType::SummonIceBeast,
    SpellType::AnimateDead,
    SpellType::Invisibility,
    SpellType::SummonScorpions,
    SpellType::CallImp,
    SpellType::SummonSmallMammals,
    SpellType::ControlledBlink,
    SpellType::Blink,
    SpellType::NoSpell,
];

/// Enchantments for the two utility slots. Dig only ever lands in the
/// second utility slot.
pub const SEARCH_ORDER_MISC: [SpellType; 13] = [
    SpellType::Agony,
    SpellType::Banishment,
    SpellType::FreezingCloud,
    SpellType::DispelUndead,
    SpellType::Paralyse,
    SpellType::Confuse,
    SpellType::MephiticCloud,
    SpellType::Slow,
    SpellType::PolymorphOther,
    SpellType::TeleportOther,
    SpellType::Dig,
    SpellType::Backlight,
    SpellType::NoSpell,
];

/// First spell in `table` the caster knows, skipping `ignore`.
///
/// Stops at the sentinel; returns `NoSpell` when nothing matches.
pub fn search_list<F>(table: &[SpellType], ignore: SpellType, knows: F) -> SpellType
where
    F: Fn(SpellType) -> bool,
{
    table
        .iter()
        .copied()
        .take_while(|spell| !spell.is_none())
        .filter(|spell| *spell != ignore)
        .find(|spell| knows(*spell))
        .unwrap_or(SpellType::NoSpell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_end_with_sentinel() {
        for table in [&SEARCH_ORDER_CONJ[..], &SEARCH_ORDER_THIRD[..], &SEARCH_ORDER_MISC[..]] {
            assert_eq!(table.last(), Some(&SpellType::NoSpell));
            assert_eq!(table.iter().filter(|s| s.is_none()).count(), 1);
        }
    }

    #[test]
    fn test_search_respects_priority() {
        let known = [SpellType::MagicDart, SpellType::BoltOfFire];
        let found = search_list(&SEARCH_ORDER_CONJ, SpellType::NoSpell, |s| known.contains(&s));
        assert_eq!(found, SpellType::BoltOfFire);
    }

    #[test]
    fn test_search_skips_ignored() {
        let known = [SpellType::MagicDart, SpellType::BoltOfFire];
        let found = search_list(&SEARCH_ORDER_CONJ, SpellType::BoltOfFire, |s| known.contains(&s));
        assert_eq!(found, SpellType::MagicDart);
    }

    #[test]
    fn test_search_nothing_known() {
        let found = search_list(&SEARCH_ORDER_MISC, SpellType::NoSpell, |_| false);
        assert_eq!(found, SpellType::NoSpell);
    }

    #[test]
    fn test_search_never_returns_sentinel_as_match() {
        let found = search_list(&SEARCH_ORDER_THIRD, SpellType::Blink, |_| true);
        assert_eq!(found, SpellType::SymbolOfTorment);
        let found = search_list(&SEARCH_ORDER_THIRD[15..], SpellType::Blink, |_| true);
        assert_eq!(found, SpellType::NoSpell);
    }
}
