//! Player ghosts and Pandemonium demon lords
//!
//! A player ghost mirrors the character that died: its defences, its
//! weapon and the best of its spells. A demon lord is rolled from scratch.

use super::statline::{Flight, GhostDemon, GhostKind, SlotRole, SpellSlots};
use crate::combat::WeaponBrand;
use crate::consts::{
    MAX_GHOST_DAMAGE, MAX_GHOST_EVASION, MAX_GHOST_HP, MAX_GHOST_SPEED, MIN_GHOST_SPEED,
};
use crate::data::Colour;
use crate::magic::{
    SEARCH_ORDER_CONJ, SEARCH_ORDER_MISC, SEARCH_ORDER_THIRD, SpellType, search_list,
    translate_spell,
};
use crate::player::{God, ItemClass, PlayerSnapshot, PlayerTraits, SkillType, Species};
use crate::rng::GameRng;
use crate::world::NameGenerator;

/// Monster-only spells a demon lord may pick up, per slot, in the order
/// they are rolled. A later success overwrites an earlier one.
const DEMON_SPELL_OVERRIDES: [(SlotRole, i32, SpellType); 14] = [
    (SlotRole::Offense1, 25, SpellType::HellfireBurst),
    (SlotRole::Offense1, 25, SpellType::FireStorm),
    (SlotRole::Offense1, 25, SpellType::IceStorm),
    (SlotRole::Offense1, 25, SpellType::MetalSplinters),
    // Eye of devastation
    (SlotRole::Offense1, 25, SpellType::EnergyBolt),
    (SlotRole::Offense2, 25, SpellType::SteamBall),
    (SlotRole::Offense2, 25, SpellType::IskenderunsMysticBlast),
    (SlotRole::Offense2, 25, SpellType::Hellfire),
    (SlotRole::Summon, 25, SpellType::Smiting),
    (SlotRole::Summon, 25, SpellType::HellfireBurst),
    (SlotRole::Summon, 12, SpellType::SummonGreaterDemon),
    (SlotRole::Summon, 12, SpellType::SummonDemon),
    (SlotRole::Utility1, 20, SpellType::SummonGreaterDemon),
    (SlotRole::Utility1, 20, SpellType::SummonDemon),
];

impl GhostDemon {
    /// Roll a new demon lord as seen by a player of species `viewer`
    pub fn pandemonium_lord(
        rng: &mut GameRng,
        viewer: Species,
        names: &impl NameGenerator,
    ) -> Self {
        let mut demon = GhostDemon::new();
        demon.init_random_demon(rng, viewer, names);
        demon
    }

    /// Ghost of the player in `player`
    pub fn player_ghost(player: &PlayerSnapshot) -> Self {
        let mut ghost = GhostDemon::new();
        ghost.init_player_ghost(player);
        ghost
    }

    pub fn init_random_demon(
        &mut self,
        rng: &mut GameRng,
        viewer: Species,
        names: &impl NameGenerator,
    ) {
        self.kind = GhostKind::PandemonLord;
        self.name = names.make_name(rng.random_u32());

        self.max_hp = 100 + rng.roll_dice(3, 50);
        self.ev = 5 + rng.rn2(20);
        self.ac = 5 + rng.rn2(20);

        self.see_invis = !rng.one_in(10);

        self.resists.fire = roll_demon_resist(rng);
        self.resists.cold = roll_demon_resist(rng);
        // Demons, like ghosts, get poison resistance and life protection
        // from their monster type, not from here.
        self.resists.elec = i8::from(rng.one_in(3));

        self.damage = 20 + rng.roll_dice(2, 20);

        self.brand = WeaponBrand::Normal;
        if !rng.one_in(3) {
            let brands = WeaponBrand::pan_lord_brands(viewer);
            if let Some(brand) = rng.choose(&brands) {
                self.brand = *brand;
            }
        }

        self.spellcaster = !rng.one_in(10);

        self.fly = if rng.one_in(3) {
            Flight::None
        } else if rng.one_in(5) {
            Flight::Levitate
        } else {
            Flight::Fly
        };

        self.xl = 10 + rng.roll_dice(2, 10);
        self.cycle_colours = rng.one_in(10);
        self.colour = rng.random_colour();

        self.spells = SpellSlots::empty();
        if self.spellcaster {
            self.roll_demon_spells(rng);
        }
    }

    fn roll_demon_spells(&mut self, rng: &mut GameRng) {
        let spells = &mut self.spells;

        if rng.coinflip() {
            spells[SlotRole::Offense1] = random_spell(rng, &SEARCH_ORDER_CONJ);
        }
        // May duplicate the first offense spell.
        if rng.coinflip() {
            spells[SlotRole::Offense2] = random_spell(rng, &SEARCH_ORDER_CONJ);
        }
        if !rng.one_in(4) {
            spells[SlotRole::Summon] = random_spell(rng, &SEARCH_ORDER_THIRD);
        }
        if rng.coinflip() {
            spells[SlotRole::Utility1] = random_spell(rng, &SEARCH_ORDER_MISC);
            if spells[SlotRole::Utility1] == SpellType::Dig {
                spells[SlotRole::Utility1] = SpellType::NoSpell;
            }
        }
        if rng.coinflip() {
            spells[SlotRole::Utility2] = random_spell(rng, &SEARCH_ORDER_MISC);
        }
        if rng.coinflip() {
            spells[SlotRole::Emergency] = SpellType::Blink;
        }
        if rng.coinflip() {
            spells[SlotRole::Emergency] = SpellType::TeleportSelf;
        }

        spells.map_in_place(translate_spell);

        for (role, odds, spell) in DEMON_SPELL_OVERRIDES {
            if rng.one_in(odds) {
                spells[role] = spell;
            }
        }

        // At least they can summon demons.
        if spells[SlotRole::Utility1].is_none() {
            spells[SlotRole::Utility1] = SpellType::SummonDemon;
        }

        if rng.one_in(15) {
            spells[SlotRole::Utility2] = SpellType::Dig;
        }
    }

    pub fn init_player_ghost(&mut self, player: &PlayerSnapshot) {
        self.kind = GhostKind::PlayerGhost;
        self.name = player.name.clone();
        self.max_hp = player.hp_max.min(MAX_GHOST_HP);
        self.ev = player.evasion.min(MAX_GHOST_EVASION);
        self.ac = player.armour_class;

        self.see_invis = player.can_see_invisible();
        self.resists.fire = player.res_fire;
        self.resists.cold = player.res_cold;
        self.resists.elec = player.res_elec;
        self.speed = player_ghost_base_movement_speed(player);

        let (damage, brand) = player_ghost_damage(player);
        self.damage = damage;
        self.brand = brand;

        self.species = player.species;
        self.job = player.job;

        // Ghosts can't worship good gods.
        self.religion = if player.religion.is_good() {
            God::NoGod
        } else {
            player.religion
        };

        self.best_skill = player.skills.best_skill(None);
        self.best_skill_level = player.skill(self.best_skill);
        self.xl = player.experience_level;

        self.colour = Colour::White;
        self.fly = Flight::Levitate;

        self.add_spells(player);
    }

    /// Fill the spell slots from the spells the player knew.
    ///
    /// Death is a traumatic experience, so ghosts only remember a few.
    pub fn add_spells(&mut self, player: &PlayerSnapshot) {
        let knows = |spell: SpellType| player.knows_spell(spell);
        let spells = &mut self.spells;
        *spells = SpellSlots::empty();

        spells[SlotRole::Offense1] = search_list(&SEARCH_ORDER_CONJ, SpellType::NoSpell, knows);
        spells[SlotRole::Offense2] =
            search_list(&SEARCH_ORDER_CONJ, spells[SlotRole::Offense1], knows);
        spells[SlotRole::Summon] = search_list(&SEARCH_ORDER_THIRD, SpellType::NoSpell, knows);

        spells[SlotRole::Utility1] = search_list(&SEARCH_ORDER_MISC, SpellType::Dig, knows);
        if spells[SlotRole::Utility1].is_none() {
            spells[SlotRole::Utility1] =
                search_list(&SEARCH_ORDER_CONJ, SpellType::NoSpell, knows);
        }

        spells[SlotRole::Utility2] =
            search_list(&SEARCH_ORDER_MISC, spells[SlotRole::Utility1], knows);
        if spells[SlotRole::Utility2].is_none() {
            spells[SlotRole::Utility2] =
                search_list(&SEARCH_ORDER_CONJ, spells[SlotRole::Utility1], knows);
        }

        if knows(SpellType::Dig) {
            spells[SlotRole::Utility2] = SpellType::Dig;
        }

        if knows(SpellType::ControlledBlink) || knows(SpellType::Blink) {
            spells[SlotRole::Emergency] = SpellType::ControlledBlink;
        }
        if knows(SpellType::TeleportSelf) {
            spells[SlotRole::Emergency] = SpellType::TeleportSelf;
        }

        spells.map_in_place(translate_spell);
    }
}

/// 2/3: resistance 1 or 2; otherwise none, with a 1/10 vulnerability
fn roll_demon_resist(rng: &mut GameRng) -> i8 {
    if !rng.one_in(3) {
        rng.random_range(1, 2) as i8
    } else if rng.one_in(10) {
        -1
    } else {
        0
    }
}

/// Uniform pick over a whole search table, sentinel included
fn random_spell(rng: &mut GameRng, table: &[SpellType]) -> SpellType {
    rng.choose(table).copied().unwrap_or(SpellType::NoSpell)
}

/// Movement speed of a player ghost. This is a real speed, not a movement
/// cost, so higher is faster.
pub fn player_ghost_base_movement_speed(player: &PlayerSnapshot) -> i32 {
    let mut speed = player.species.base_movement_speed();

    if player.fast_mutation > 0 {
        speed += i32::from(player.fast_mutation) + 1;
    }

    if player.traits.contains(PlayerTraits::RUNNING_BOOTS) {
        speed += 2;
    }

    speed.clamp(MIN_GHOST_SPEED, MAX_GHOST_SPEED)
}

/// Melee damage and brand a player ghost hits with
fn player_ghost_damage(player: &PlayerSnapshot) -> (i32, WeaponBrand) {
    let mut damage = 4;
    let mut brand = WeaponBrand::Normal;

    match &player.weapon {
        Some(weapon) if weapon.is_melee_weapon() => {
            damage = weapon.damage * (25 + player.skill(weapon.skill)) / 25;

            if weapon.class == ItemClass::Weapon {
                // Ghosts can't get holy wrath, but they get to keep the
                // weapon.
                brand = match weapon.brand {
                    WeaponBrand::HolyWrath => WeaponBrand::Normal,
                    other => other,
                };
            }
        }
        Some(_) => {}
        None => {
            if player.species == Species::Troll {
                damage += player.experience_level;
            }
            damage += player.skill(SkillType::UnarmedCombat);
        }
    }

    damage = damage * (30 + player.skill(SkillType::Fighting)) / 30;
    damage += player.strength / 4;

    (damage.min(MAX_GHOST_DAMAGE), brand)
}
