//! World-facing services around statlines
//!
//! Names, options, errors and the integrity checks run over stored
//! ghosts.

mod errors;
mod names;
mod options;
mod validate;

pub use errors::{GhostCheckError, OptionsError};
pub use names::{NameGenerator, SyllableNames, validate_player_name};
pub use options::GhostOptions;
pub use validate::{check_ghost, debug_check_ghosts};
