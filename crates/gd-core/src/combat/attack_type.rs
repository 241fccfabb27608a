//! Attack types
//!
//! These define HOW a melee attack is delivered.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Attack type - how the attack is delivered
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum AttackType {
    /// Plain weapon or fist hit
    #[default]
    Hit = 0,
    Bite = 1,
    Sting = 2,
    Claw = 3,
    Peck = 4,
    Headbutt = 5,
    Punch = 6,
    Kick = 7,
    TentacleSlap = 8,
    TailSlap = 9,
    Gore = 10,
}

/// Natural attacks an ugly thing may be generated with
pub const UGLY_THING_ATTACKS: [AttackType; 10] = [
    AttackType::Bite,
    AttackType::Sting,
    AttackType::Claw,
    AttackType::Peck,
    AttackType::Headbutt,
    AttackType::Punch,
    AttackType::Kick,
    AttackType::TentacleSlap,
    AttackType::TailSlap,
    AttackType::Gore,
];
