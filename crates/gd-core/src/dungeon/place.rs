//! Level identifier

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Dungeon branch
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Branch {
    #[default]
    MainDungeon = 0,
    EcumenicalTemple = 1,
    OrcishMines = 2,
    ElvenHalls = 3,
    Lair = 4,
    Swamp = 5,
    Shoals = 6,
    SnakePit = 7,
    SlimePits = 8,
    HallOfBlades = 9,
    Vaults = 10,
    Crypt = 11,
    Tomb = 12,
    HallOfZot = 13,
    Vestibule = 14,
    Dis = 15,
    Gehenna = 16,
    Cocytus = 17,
    Tartarus = 18,
}

impl Branch {
    /// Absolute depth of the first level of the branch.
    ///
    /// Entry depths vary between games; these are the nominal values.
    pub const fn start_depth(&self) -> i32 {
        match self {
            Branch::MainDungeon => 1,
            Branch::EcumenicalTemple => 5,
            Branch::OrcishMines => 7,
            Branch::ElvenHalls => 11,
            Branch::Lair => 10,
            Branch::Swamp => 14,
            Branch::Shoals => 14,
            Branch::SnakePit => 15,
            Branch::SlimePits => 15,
            Branch::HallOfBlades => 15,
            Branch::Vaults => 14,
            Branch::Crypt => 19,
            Branch::Tomb => 22,
            Branch::HallOfZot => 27,
            Branch::Vestibule => 28,
            Branch::Dis => 28,
            Branch::Gehenna => 28,
            Branch::Cocytus => 28,
            Branch::Tartarus => 28,
        }
    }

    /// The four hells below the Vestibule
    pub const fn is_hell(&self) -> bool {
        matches!(
            self,
            Branch::Dis | Branch::Gehenna | Branch::Cocytus | Branch::Tartarus
        )
    }
}

/// Kind of level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum LevelType {
    #[default]
    Dungeon = 0,
    Labyrinth = 1,
    Abyss = 2,
    Pandemonium = 3,
    Portal = 4,
}

/// Level identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelId {
    pub branch: Branch,
    /// Level number within the branch, starting at 1
    pub depth: i32,
    pub level_type: LevelType,
}

impl Default for LevelId {
    fn default() -> Self {
        Self::dungeon(Branch::MainDungeon, 1)
    }
}

impl LevelId {
    /// A regular dungeon level in `branch`
    pub const fn dungeon(branch: Branch, depth: i32) -> Self {
        Self {
            branch,
            depth,
            level_type: LevelType::Dungeon,
        }
    }

    /// A level outside the branch structure (Abyss, Pandemonium, portals)
    pub const fn special(level_type: LevelType) -> Self {
        Self {
            branch: Branch::MainDungeon,
            depth: 1,
            level_type,
        }
    }

    /// Absolute depth from the surface, starting at 1
    pub const fn absdepth(&self) -> i32 {
        self.branch.start_depth() + self.depth - 1
    }

    pub const fn is_dungeon(&self) -> bool {
        matches!(self.level_type, LevelType::Dungeon)
    }
}

impl core::fmt::Display for LevelId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.level_type {
            LevelType::Dungeon => write!(f, "{}:{}", self.branch, self.depth),
            other => write!(f, "{other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absdepth() {
        assert_eq!(LevelId::dungeon(Branch::MainDungeon, 9).absdepth(), 9);
        assert_eq!(LevelId::dungeon(Branch::Lair, 1).absdepth(), 10);
        assert_eq!(LevelId::dungeon(Branch::Lair, 3).absdepth(), 12);
    }

    #[test]
    fn test_hells() {
        assert!(Branch::Gehenna.is_hell());
        assert!(!Branch::Vestibule.is_hell());
        assert!(!Branch::Crypt.is_hell());
    }

    #[test]
    fn test_display() {
        assert_eq!(LevelId::dungeon(Branch::Lair, 4).to_string(), "Lair:4");
        assert_eq!(LevelId::special(LevelType::Abyss).to_string(), "Abyss");
    }
}
