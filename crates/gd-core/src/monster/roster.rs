//! Ghost roster
//!
//! Collects the ghosts that get saved with a level when the player dies:
//! the player's own ghost plus ghosts already on the level or on their way
//! to it, up to the level's quota.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::statline::GhostDemon;
use crate::dungeon::{Branch, LevelId, LevelType};
use crate::player::PlayerSnapshot;
use crate::rng::GameRng;
use crate::world::{GhostOptions, check_ghost};

/// Monster species relevant to ghost handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterType {
    PlayerGhost,
    PandemonLord,
    UglyThing,
    VeryUglyThing,
    /// Any other monster, by index
    Other(u16),
}

/// A monster as seen by the roster: its type, whether it lives, and the
/// statline attached to it, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub mtype: MonsterType,
    pub hp: i32,
    pub ghost: Option<Box<GhostDemon>>,
}

impl Monster {
    pub fn new(mtype: MonsterType, hp: i32) -> Self {
        Self {
            mtype,
            hp,
            ghost: None,
        }
    }

    /// A player ghost monster carrying `ghost`
    pub fn with_ghost(ghost: GhostDemon) -> Self {
        Self {
            mtype: MonsterType::PlayerGhost,
            hp: ghost.max_hp,
            ghost: Some(Box::new(ghost)),
        }
    }

    pub fn alive(&self) -> bool {
        self.hp > 0
    }

    /// The statline, when this is a player ghost that has one
    fn player_ghost(&self) -> Option<&GhostDemon> {
        match self.mtype {
            MonsterType::PlayerGhost => self.ghost.as_deref(),
            _ => None,
        }
    }
}

/// Monsters in transit, keyed by the level they are heading to
pub type TransitLists = HashMap<LevelId, Vec<Monster>>;

/// Hook fired for every ghost added to a roster
pub trait GhostAnnouncer {
    fn announce(&mut self, ghost: &GhostDemon);
}

/// Announces ghosts through `tracing` at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAnnouncer;

impl GhostAnnouncer for LogAnnouncer {
    fn announce(&mut self, ghost: &GhostDemon) {
        tracing::debug!(name = %ghost.name, xl = ghost.xl, "Saving ghost");
    }
}

impl<F> GhostAnnouncer for F
where
    F: FnMut(&GhostDemon),
{
    fn announce(&mut self, ghost: &GhostDemon) {
        self(ghost)
    }
}

/// Everything the roster reads from the world
#[derive(Debug, Clone, Copy)]
pub struct RosterContext<'a> {
    pub player: &'a PlayerSnapshot,
    /// Active monsters on the current level
    pub monsters: &'a [Monster],
    pub transit: &'a TransitLists,
}

struct Roster<'o, A> {
    ghosts: Vec<GhostDemon>,
    options: &'o GhostOptions,
    announcer: A,
}

impl<A: GhostAnnouncer> Roster<'_, A> {
    fn push(&mut self, ghost: GhostDemon) {
        if self.options.announce_ghosts {
            self.announcer.announce(&ghost);
        }
        self.ghosts.push(ghost);
    }

    /// Take player ghosts from `monsters` until `n` reaches zero
    fn take_from<'m>(&mut self, monsters: impl IntoIterator<Item = &'m Monster>, n: &mut i32) {
        for monster in monsters {
            if *n <= 0 {
                break;
            }
            if let Some(ghost) = monster.player_ghost() {
                self.push(ghost.clone());
                *n -= 1;
            }
        }
    }
}

/// Build the set of ghosts to save for the current level.
///
/// The player's own ghost comes first unless the player is undead, in
/// which case the quota gets one more slot for other ghosts.
pub fn find_ghosts(
    ctx: RosterContext<'_>,
    rng: &mut GameRng,
    options: &GhostOptions,
    announcer: impl GhostAnnouncer,
) -> Vec<GhostDemon> {
    let mut roster = Roster {
        ghosts: Vec::new(),
        options,
        announcer,
    };

    if !ctx.player.is_undead() {
        roster.push(GhostDemon::player_ghost(ctx.player));
    }

    let quota = n_extra_ghosts(&ctx.player.place, rng, options.max_ghosts);
    let wanted = quota + 1 - roster.ghosts.len() as i32;
    find_extra_ghosts(&mut roster, ctx, wanted);

    if options.check_roster {
        for (index, ghost) in roster.ghosts.iter().enumerate() {
            if let Err(err) = check_ghost(ghost) {
                tracing::warn!(index, name = %ghost.name, %err, "Ghost roster failed integrity check");
                break;
            }
        }
    }

    roster.ghosts
}

fn find_extra_ghosts<A: GhostAnnouncer>(roster: &mut Roster<'_, A>, ctx: RosterContext<'_>, n: i32) {
    let mut n = n;
    roster.take_from(ctx.monsters.iter().filter(|m| m.alive()), &mut n);
    find_transiting_ghosts(roster, ctx, n);
}

fn find_transiting_ghosts<A: GhostAnnouncer>(
    roster: &mut Roster<'_, A>,
    ctx: RosterContext<'_>,
    n: i32,
) {
    if n <= 0 {
        return;
    }
    let mut n = n;
    if let Some(list) = ctx.transit.get(&ctx.player.place) {
        roster.take_from(list, &mut n);
    }
}

/// Number of ghosts besides the player's own that a level may hold.
///
/// Dangerous places get the full quota, the Temple and the early levels
/// of the Dungeon, Lair and Mines get none.
pub fn n_extra_ghosts(place: &LevelId, rng: &mut GameRng, max_ghosts: i32) -> i32 {
    let lev = place.absdepth();
    let subdepth = place.depth;
    let branch = place.branch;

    let dangerous_branch = place.is_dungeon()
        && (matches!(branch, Branch::Crypt | Branch::Tomb | Branch::HallOfZot)
            || branch.is_hell());

    if matches!(place.level_type, LevelType::Pandemonium | LevelType::Abyss)
        || dangerous_branch
        || lev > 22
    {
        return max_ghosts - 1;
    }

    if branch == Branch::EcumenicalTemple {
        return 0;
    }

    // No multiple ghosts until level 9 of the main dungeon.
    if (lev < 9 && branch == Branch::MainDungeon)
        || (subdepth < 2 && matches!(branch, Branch::Lair | Branch::OrcishMines))
    {
        return 0;
    }

    if matches!(branch, Branch::Lair | Branch::OrcishMines)
        || (branch == Branch::MainDungeon && lev < 15)
    {
        return 1;
    }

    1 + i32::from(rng.x_in_y(lev, 20)) + i32::from(rng.x_in_y(lev, 40))
}
