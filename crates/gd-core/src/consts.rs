//! Balance caps and sizes shared by generation and validation.

/// Player ghost melee damage cap
pub const MAX_GHOST_DAMAGE: i32 = 50;
/// Player ghost hit point cap
pub const MAX_GHOST_HP: i32 = 400;
/// Player ghost evasion cap
pub const MAX_GHOST_EVASION: i32 = 60;
/// Movement speed bounds for ghosts (real speed, higher is faster)
pub const MIN_GHOST_SPEED: i32 = 6;
pub const MAX_GHOST_SPEED: i32 = 13;

/// Highest experience level and skill level a player can reach
pub const MAX_EXP_LEVEL: i32 = 27;
pub const MAX_SKILL_LEVEL: i32 = 27;

/// Number of spell slots a monster carries
pub const NUM_MONSTER_SPELL_SLOTS: usize = 6;

/// Maximum number of ghosts saved with one level
pub const MAX_GHOSTS: i32 = 10;

/// Size of a player name buffer, terminator included
pub const NAME_LEN: usize = 30;

/// Demon lord roll ranges (100 + 3d50, 20 + 2d20, 10 + 2d10)
pub const MAX_DEMON_HP: i32 = 250;
pub const MAX_DEMON_DAMAGE: i32 = 60;
pub const MAX_DEMON_XL: i32 = 30;
