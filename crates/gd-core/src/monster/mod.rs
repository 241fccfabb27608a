//! Ghost and demon statlines
//!
//! The statline record, the three generators that fill it in, and the
//! roster of ghosts saved with a level.

mod ghost;
mod roster;
mod statline;
mod ugly;

pub use ghost::player_ghost_base_movement_speed;
pub use roster::{
    GhostAnnouncer, LogAnnouncer, Monster, MonsterType, RosterContext, TransitLists, find_ghosts,
    n_extra_ghosts,
};
pub use statline::{Flight, GhostDemon, GhostKind, SlotRole, SpellSlots};
pub use ugly::hit_points;
