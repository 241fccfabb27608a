//! Dungeon places
//!
//! Only level identity lives here: which branch, how deep, and what kind
//! of level. Ghost quotas are computed from it.

mod place;

pub use place::{Branch, LevelId, LevelType};
