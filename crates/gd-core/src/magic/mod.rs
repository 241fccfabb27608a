//! Spells a ghost or demon lord can be given
//!
//! Contains the spell identifiers, the player-to-monster translation and
//! the priority tables used to fill spell slots.

mod search;
mod spell;

pub use search::{
    SEARCH_ORDER_CONJ, SEARCH_ORDER_MISC, SEARCH_ORDER_THIRD, search_list,
};
pub use spell::{SpellType, translate_spell};
