//! Player-side inputs
//!
//! Species, backgrounds, gods and skills, plus the immutable snapshot of a
//! player that ghost generation reads from.

mod role;
mod skills;
mod snapshot;

pub use role::{God, Job, Species};
pub use skills::{SkillType, Skills};
pub use snapshot::{ItemClass, PlayerSnapshot, PlayerTraits, WieldedItem};
