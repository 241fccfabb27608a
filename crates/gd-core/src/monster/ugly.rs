//! Ugly things and very ugly things
//!
//! Every ugly thing gets a colour, and the colour decides its attack
//! flavour and its single resistance. Mutating an ugly thing re-rolls it
//! into a different colour while keeping its hit dice.

use super::statline::{GhostDemon, GhostKind};
use crate::combat::{AttackFlavour, MonsterResists, UGLY_THING_ATTACKS};
use crate::data::{Colour, UGLY_THING_COLOURS};
use crate::rng::GameRng;

/// Rolled hit points for `hit_dice` dice of `min_hp + 0..=rand_hp` each
pub fn hit_points(rng: &mut GameRng, hit_dice: i32, min_hp: i32, rand_hp: i32) -> i32 {
    (0..hit_dice.max(0))
        .map(|_| min_hp + rng.rn2(rand_hp + 1))
        .sum()
}

impl GhostDemon {
    /// A freshly made ugly thing, or a very ugly thing
    pub fn ugly_thing(rng: &mut GameRng, very_ugly: bool, force_colour: Option<Colour>) -> Self {
        let mut ugly = GhostDemon::new();
        ugly.init_ugly_thing(rng, very_ugly, false, force_colour);
        ugly
    }

    /// Roll an ugly thing's statline.
    ///
    /// With `only_mutate` the experience level and hit points stay as they
    /// are and the new colour differs from the old one, unless a colour is
    /// forced.
    pub fn init_ugly_thing(
        &mut self,
        rng: &mut GameRng,
        very_ugly: bool,
        only_mutate: bool,
        force_colour: Option<Colour>,
    ) {
        self.kind = GhostKind::UglyThing;

        // Midpoint: 10.
        self.speed = 9 + rng.rn2(3);
        // Midpoint: 10.
        self.ev = 9 + rng.rn2(3);
        // Midpoint: 3.
        self.ac = 2 + rng.rn2(3);
        // Midpoint: 12.
        self.damage = 11 + rng.rn2(3);

        if !only_mutate {
            self.xl = 8;
            self.max_hp = hit_points(rng, self.xl, 3, 5);
        }

        if let Some(att_type) = rng.choose(&UGLY_THING_ATTACKS) {
            self.att_type = *att_type;
        }

        let previous = only_mutate.then(|| self.colour.make_low());
        self.colour = ugly_thing_assign_colour(rng, force_colour.map(Colour::make_low), previous);

        self.att_flav = AttackFlavour::from_ugly_colour(self.colour);
        self.ugly_thing_add_resistance(false, self.att_flav);

        if very_ugly {
            self.ugly_thing_to_very_ugly_thing(rng);
        }
    }

    /// Upgrade an ugly thing into a very ugly thing in place
    pub fn ugly_thing_to_very_ugly_thing(&mut self, rng: &mut GameRng) {
        self.kind = GhostKind::VeryUglyThing;

        // Midpoint once added: 4.
        self.ac += 1;
        // Midpoint once added: 17.
        self.damage += 5;
        // 12 once added.
        self.xl += 4;
        self.max_hp += hit_points(rng, 4, 3, 5);

        self.colour = self.colour.make_high();
        self.att_flav = self.att_flav.very_ugly_upgrade();
        self.ugly_thing_add_resistance(true, self.att_flav);
    }

    /// Replace every elemental resistance with the one matching `flavour`
    pub fn ugly_thing_add_resistance(&mut self, very_ugly: bool, flavour: AttackFlavour) {
        self.resists = MonsterResists::for_ugly_flavour(flavour, very_ugly);
    }
}

/// A forced colour wins (black counts as none); otherwise a random ugly
/// colour other than `exclude`.
fn ugly_thing_assign_colour(
    rng: &mut GameRng,
    force: Option<Colour>,
    exclude: Option<Colour>,
) -> Colour {
    if let Some(colour) = force.filter(|c| *c != Colour::Black) {
        return colour;
    }

    let candidates: Vec<Colour> = UGLY_THING_COLOURS
        .iter()
        .copied()
        .filter(|c| Some(*c) != exclude)
        .collect();

    rng.choose(&candidates).copied().unwrap_or(Colour::Red)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::AttackType;

    #[test]
    fn test_hit_points_range() {
        let mut rng = GameRng::new(1);
        for _ in 0..1000 {
            let hp = hit_points(&mut rng, 8, 3, 5);
            assert!((24..=64).contains(&hp));
        }
        assert_eq!(hit_points(&mut rng, 0, 3, 5), 0);
        assert_eq!(hit_points(&mut rng, 4, 3, 0), 12);
    }

    #[test]
    fn test_fresh_ugly_thing() {
        let mut rng = GameRng::new(2);
        for _ in 0..500 {
            let ugly = GhostDemon::ugly_thing(&mut rng, false, None);
            assert_eq!(ugly.kind, GhostKind::UglyThing);
            assert_eq!(ugly.xl, 8);
            assert!((24..=64).contains(&ugly.max_hp));
            assert!((9..=11).contains(&ugly.speed));
            assert!((9..=11).contains(&ugly.ev));
            assert!((2..=4).contains(&ugly.ac));
            assert!((11..=13).contains(&ugly.damage));
            assert_ne!(ugly.att_type, AttackType::Hit);
            assert!(UGLY_THING_COLOURS.contains(&ugly.colour));
            assert_eq!(ugly.att_flav, AttackFlavour::from_ugly_colour(ugly.colour));
            assert_eq!(ugly.resists.granted_count(), 1);
        }
    }

    #[test]
    fn test_forced_red() {
        let mut rng = GameRng::new(3);
        let mut ugly = GhostDemon::ugly_thing(&mut rng, false, Some(Colour::Red));
        assert_eq!(ugly.colour, Colour::Red);
        assert_eq!(ugly.att_flav, AttackFlavour::Fire);
        assert!(ugly.resists.fire >= 1);
        assert!(ugly.resists.sticky_flame);

        ugly.ugly_thing_to_very_ugly_thing(&mut rng);
        assert_eq!(ugly.att_flav, AttackFlavour::Napalm);
        assert_eq!(ugly.resists.fire, 2);
        assert_eq!(ugly.colour, Colour::LightRed);
    }

    #[test]
    fn test_forced_bright_colour_is_dimmed() {
        let mut rng = GameRng::new(4);
        let ugly = GhostDemon::ugly_thing(&mut rng, false, Some(Colour::Yellow));
        assert_eq!(ugly.colour, Colour::Brown);
        assert_eq!(ugly.att_flav, AttackFlavour::Acid);
        assert_eq!(ugly.resists.acid, 1);
    }

    #[test]
    fn test_forced_colour_without_flavour() {
        let mut rng = GameRng::new(4);
        let ugly = GhostDemon::ugly_thing(&mut rng, false, Some(Colour::Blue));
        assert_eq!(ugly.att_flav, AttackFlavour::Plain);
        assert_eq!(ugly.resists, MonsterResists::default());
    }

    #[test]
    fn test_upgrade_deltas() {
        let mut rng = GameRng::new(5);
        for _ in 0..200 {
            let before = GhostDemon::ugly_thing(&mut rng, false, None);
            let mut after = before.clone();
            after.ugly_thing_to_very_ugly_thing(&mut rng);

            assert_eq!(after.kind, GhostKind::VeryUglyThing);
            assert_eq!(after.ac, before.ac + 1);
            assert_eq!(after.damage, before.damage + 5);
            assert_eq!(after.xl, before.xl + 4);
            assert!((before.max_hp + 12..=before.max_hp + 32).contains(&after.max_hp));
            assert!(after.colour.is_high_intensity());
            assert_eq!(after.colour.make_low(), before.colour);
            assert_eq!(after.att_flav, before.att_flav.very_ugly_upgrade());
        }
    }

    #[test]
    fn test_very_ugly_resist_levels() {
        let mut rng = GameRng::new(6);
        let green = GhostDemon::ugly_thing(&mut rng, true, Some(Colour::Green));
        assert_eq!(green.att_flav, AttackFlavour::PoisonMedium);
        assert_eq!(green.resists.poison, 2);

        let magenta = GhostDemon::ugly_thing(&mut rng, true, Some(Colour::Magenta));
        assert_eq!(magenta.att_flav, AttackFlavour::Rot);
        assert!(magenta.resists.rotting);

        let grey = GhostDemon::ugly_thing(&mut rng, true, Some(Colour::LightGrey));
        assert_eq!(grey.colour, Colour::White);
        assert_eq!(grey.resists.cold, 2);
        assert_eq!(grey.xl, 12);
    }

    #[test]
    fn test_mutation_changes_colour_and_keeps_hit_dice() {
        let mut rng = GameRng::new(7);
        for _ in 0..200 {
            let mut ugly = GhostDemon::ugly_thing(&mut rng, false, None);
            let old_colour = ugly.colour;
            let old_hp = ugly.max_hp;

            ugly.init_ugly_thing(&mut rng, false, true, None);
            assert_ne!(ugly.colour, old_colour);
            assert_eq!(ugly.max_hp, old_hp);
            assert_eq!(ugly.xl, 8);
        }
    }

    #[test]
    fn test_mutating_very_ugly_thing_excludes_dim_colour() {
        let mut rng = GameRng::new(8);
        for _ in 0..100 {
            let mut ugly = GhostDemon::ugly_thing(&mut rng, true, Some(Colour::Cyan));
            ugly.init_ugly_thing(&mut rng, false, true, None);
            assert_ne!(ugly.colour, Colour::Cyan);
            assert_eq!(ugly.kind, GhostKind::UglyThing);
        }
    }
}
