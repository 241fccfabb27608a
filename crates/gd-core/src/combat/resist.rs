//! Monster resistance set

use serde::{Deserialize, Serialize};

use super::AttackFlavour;

/// Elemental resistances carried by a statline.
///
/// Levels are signed: negative values are vulnerabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MonsterResists {
    pub elec: i8,
    pub poison: i8,
    pub fire: i8,
    pub sticky_flame: bool,
    pub cold: i8,
    pub acid: i8,
    pub rotting: bool,
}

impl MonsterResists {
    /// The single resistance an ugly thing gets for its attack flavour.
    ///
    /// Levels are 1, or 2 for a very ugly thing; rot immunity is not leveled.
    pub const fn for_ugly_flavour(flavour: AttackFlavour, very_ugly: bool) -> Self {
        let level = if very_ugly { 2 } else { 1 };
        let mut resists = MonsterResists {
            elec: 0,
            poison: 0,
            fire: 0,
            sticky_flame: false,
            cold: 0,
            acid: 0,
            rotting: false,
        };

        match flavour {
            AttackFlavour::Fire | AttackFlavour::Napalm => {
                resists.fire = level;
                resists.sticky_flame = true;
            }
            AttackFlavour::Acid => resists.acid = level,
            AttackFlavour::PoisonNasty | AttackFlavour::PoisonMedium => resists.poison = level,
            AttackFlavour::Elec => resists.elec = level,
            AttackFlavour::Disease | AttackFlavour::Rot => resists.rotting = true,
            AttackFlavour::Cold => resists.cold = level,
            AttackFlavour::Plain => {}
        }

        resists
    }

    /// Number of resistance entries that differ from the baseline.
    ///
    /// Fire plus sticky flame immunity count as one entry.
    pub fn granted_count(&self) -> usize {
        [
            self.elec != 0,
            self.poison != 0,
            self.fire != 0 || self.sticky_flame,
            self.cold != 0,
            self.acid != 0,
            self.rotting,
        ]
        .iter()
        .filter(|granted| **granted)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_fire_grants_sticky_flame() {
        let r = MonsterResists::for_ugly_flavour(AttackFlavour::Fire, false);
        assert_eq!(r.fire, 1);
        assert!(r.sticky_flame);

        let r = MonsterResists::for_ugly_flavour(AttackFlavour::Napalm, true);
        assert_eq!(r.fire, 2);
        assert!(r.sticky_flame);
    }

    #[test]
    fn test_rot_is_not_leveled() {
        let r = MonsterResists::for_ugly_flavour(AttackFlavour::Rot, true);
        assert!(r.rotting);
        assert_eq!(r.granted_count(), 1);
    }

    #[test]
    fn test_plain_grants_nothing() {
        let r = MonsterResists::for_ugly_flavour(AttackFlavour::Plain, true);
        assert_eq!(r, MonsterResists::default());
    }

    fn any_flavour() -> impl Strategy<Value = AttackFlavour> {
        let all: Vec<AttackFlavour> = AttackFlavour::iter().collect();
        proptest::sample::select(all)
    }

    proptest! {
        #[test]
        fn prop_exactly_one_resistance(flavour in any_flavour(), very in any::<bool>()) {
            let r = MonsterResists::for_ugly_flavour(flavour, very);
            let expected = usize::from(flavour != AttackFlavour::Plain);
            prop_assert_eq!(r.granted_count(), expected);
        }
    }
}
