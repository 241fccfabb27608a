//! gd-core: ghost and demon statline generation
//!
//! Builds the attribute records of player ghosts, Pandemonium demon lords
//! and ugly things, picks the spells they carry, and collects the ghosts
//! saved with a level when the player dies.
//!
//! Everything here is pure given a [`GameRng`]; no I/O happens outside
//! loading [`world::GhostOptions`] from a file.

pub mod combat;
pub mod data;
pub mod dungeon;
pub mod magic;
pub mod monster;
pub mod player;
pub mod world;

mod consts;
mod rng;

pub use consts::*;
pub use rng::GameRng;
