//! Error types
//!
//! Generation itself cannot fail. These cover the integrity check over
//! stored statlines and loading options.

use thiserror::Error;

use crate::combat::{AttackFlavour, AttackType, WeaponBrand};
use crate::magic::SpellType;
use crate::monster::GhostKind;
use crate::player::God;

/// The first integrity check a statline failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GhostCheckError {
    #[error("{field} {value} outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("brand {0} not allowed on a ghost")]
    Brand(WeaponBrand),

    #[error("ghost worships the good god {0}")]
    GoodGod(God),

    #[error("{field} is unknown on a player ghost")]
    UnknownOrigin { field: &'static str },

    #[error("{kind:?} has special attack {att_type}/{att_flav}")]
    SpecialAttack {
        kind: GhostKind,
        att_type: AttackType,
        att_flav: AttackFlavour,
    },

    #[error("{0:?} cycles colours")]
    CyclesColours(GhostKind),

    #[error("invalid name {0:?}")]
    Name(String),

    #[error("slot {slot} holds player spell {spell}")]
    Spell { slot: usize, spell: SpellType },
}

/// Failure to read ghost options
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("could not read options file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed options: {0}")]
    Parse(#[from] serde_json::Error),
}
