//! Integrity checks over stored statlines
//!
//! Player ghosts are held to the limits a real character can reach. Demon
//! lords and ugly things are rolled by the game itself, so the checks
//! widen to cover what their generators produce.

use super::errors::GhostCheckError;
use super::names::validate_player_name;
use crate::combat::{AttackFlavour, AttackType, WeaponBrand};
use crate::consts::{
    MAX_DEMON_DAMAGE, MAX_DEMON_HP, MAX_DEMON_XL, MAX_EXP_LEVEL, MAX_GHOST_DAMAGE,
    MAX_GHOST_EVASION, MAX_GHOST_HP, MAX_GHOST_SPEED, MAX_SKILL_LEVEL, MIN_GHOST_SPEED, NAME_LEN,
};
use crate::monster::{GhostDemon, GhostKind};

/// Upper bounds that depend on who made the statline
struct KindLimits {
    damage: i32,
    max_hp: i32,
    xl: i32,
    resist: i32,
}

impl KindLimits {
    const fn for_kind(kind: GhostKind) -> Self {
        match kind {
            GhostKind::PandemonLord => Self {
                damage: MAX_DEMON_DAMAGE,
                max_hp: MAX_DEMON_HP,
                xl: MAX_DEMON_XL,
                resist: 3,
            },
            GhostKind::UglyThing | GhostKind::VeryUglyThing => Self {
                damage: MAX_GHOST_DAMAGE,
                max_hp: MAX_GHOST_HP,
                xl: MAX_EXP_LEVEL,
                resist: 2,
            },
            GhostKind::PlayerGhost => Self {
                damage: MAX_GHOST_DAMAGE,
                max_hp: MAX_GHOST_HP,
                xl: MAX_EXP_LEVEL,
                resist: 3,
            },
        }
    }
}

fn in_range(field: &'static str, value: i32, min: i32, max: i32) -> Result<(), GhostCheckError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(GhostCheckError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Check one statline, reporting the first failed check
pub fn check_ghost(ghost: &GhostDemon) -> Result<(), GhostCheckError> {
    let limits = KindLimits::for_kind(ghost.kind);

    in_range("damage", ghost.damage, 0, limits.damage)?;
    in_range("max_hp", ghost.max_hp, 1, limits.max_hp)?;
    in_range("xl", ghost.xl, 1, limits.xl)?;
    in_range("ev", ghost.ev, i32::MIN, MAX_GHOST_EVASION)?;
    in_range("speed", ghost.speed, MIN_GHOST_SPEED, MAX_GHOST_SPEED)?;

    let resist = limits.resist;
    in_range("res_fire", ghost.resists.fire.into(), -resist, resist)?;
    in_range("res_cold", ghost.resists.cold.into(), -resist, resist)?;
    in_range("res_elec", ghost.resists.elec.into(), 0, resist)?;

    if !ghost.brand.in_pan_lord_range() || ghost.brand == WeaponBrand::HolyWrath {
        return Err(GhostCheckError::Brand(ghost.brand));
    }

    if ghost.kind == GhostKind::PlayerGhost {
        if !ghost.species.is_known() {
            return Err(GhostCheckError::UnknownOrigin { field: "species" });
        }
        if !ghost.job.is_known() {
            return Err(GhostCheckError::UnknownOrigin { field: "job" });
        }
    }

    in_range("best_skill_level", ghost.best_skill_level, 0, MAX_SKILL_LEVEL)?;

    if ghost.religion.is_good() {
        return Err(GhostCheckError::GoodGod(ghost.religion));
    }

    if !ghost.kind.is_ugly_thing()
        && (ghost.att_type != AttackType::Hit || ghost.att_flav != AttackFlavour::Plain)
    {
        return Err(GhostCheckError::SpecialAttack {
            kind: ghost.kind,
            att_type: ghost.att_type,
            att_flav: ghost.att_flav,
        });
    }

    if ghost.cycle_colours && ghost.kind != GhostKind::PandemonLord {
        return Err(GhostCheckError::CyclesColours(ghost.kind));
    }

    if !(ghost.kind.is_ugly_thing() && ghost.name.is_empty()) {
        check_name(&ghost.name)?;
    }

    for (slot, spell) in ghost.spells.iter().enumerate() {
        if !spell.is_none() && !spell.is_monster_spell() {
            return Err(GhostCheckError::Spell { slot, spell });
        }
    }

    Ok(())
}

fn check_name(name: &str) -> Result<(), GhostCheckError> {
    let ok = !name.is_empty()
        && name.chars().count() < NAME_LEN
        && validate_player_name(name)
        && name.trim() == name;
    if ok {
        Ok(())
    } else {
        Err(GhostCheckError::Name(name.to_string()))
    }
}

/// Sweep a set of statlines; fails on the first bad record
pub fn debug_check_ghosts(ghosts: &[GhostDemon]) -> bool {
    ghosts.iter().all(|ghost| check_ghost(ghost).is_ok())
}
