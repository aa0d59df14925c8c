//! Ludo ring with four private goal lanes.
//!
//! ## Layout
//!
//! - Ring tiles `1..=52`, cyclic.
//! - Each color enters the ring at its own entry tile, one quadrant apart:
//!   BLUE 1, RED 14, GREEN 27, YELLOW 40.
//! - Each color owns a 6-tile goal lane. The ring tile just before the
//!   color's entry point diverts that color (and only that color) into
//!   its lane. Lane ids follow the ring: BLUE 53-58, RED 59-64,
//!   GREEN 65-70, YELLOW 71-76.
//!
//! Arena index is `id - 1` for every tile.

use crate::core::{EngineError, LudoColor, Result};

use super::tile::{LaneLink, Tile, TileId};
use super::MovementGraph;

/// Tiles on the shared ring.
pub const RING_SIZE: u32 = 52;

/// Tiles in each goal lane.
pub const LANE_LENGTH: u32 = 6;

/// Roll needed to bring a piece out of home.
pub const ENTRY_ROLL: i32 = 6;

const QUADRANT: u32 = RING_SIZE / 4;

/// Fixed per-color coordinates on the path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaneSpec {
    pub color: LudoColor,
    /// Ring tile where pieces enter from home.
    pub entry: TileId,
    /// Ring tile whose successor, for this color, is the goal lane.
    pub diversion: TileId,
    /// First goal-lane tile.
    pub goal_base: TileId,
    /// Last goal-lane tile; reaching it finishes the piece.
    pub final_goal: TileId,
}

impl LaneSpec {
    const fn for_color(color: LudoColor) -> Self {
        let quadrant = color.index() as u32;
        let entry = 1 + quadrant * QUADRANT;
        let diversion = if entry == 1 { RING_SIZE } else { entry - 1 };
        let goal_base = RING_SIZE + 1 + quadrant * LANE_LENGTH;
        Self {
            color,
            entry: TileId(entry),
            diversion: TileId(diversion),
            goal_base: TileId(goal_base),
            final_goal: TileId(goal_base + LANE_LENGTH - 1),
        }
    }

    /// Whether `tile` lies in this color's goal lane.
    #[must_use]
    pub const fn owns_goal(&self, tile: TileId) -> bool {
        tile.0 >= self.goal_base.0 && tile.0 <= self.final_goal.0
    }
}

/// Lane coordinates, indexed by `LudoColor::index()`.
pub static LANES: [LaneSpec; 4] = [
    LaneSpec::for_color(LudoColor::Blue),
    LaneSpec::for_color(LudoColor::Red),
    LaneSpec::for_color(LudoColor::Green),
    LaneSpec::for_color(LudoColor::Yellow),
];

/// Lane coordinates for one color.
#[must_use]
pub fn lane(color: LudoColor) -> &'static LaneSpec {
    &LANES[color.index()]
}

/// Arena slot before links are wired.
enum Slot {
    Ring(u32),
    Goal(LudoColor, u32),
}

/// The ring-and-lanes movement graph.
///
/// ```
/// use board_race::board::{LudoPath, TileId};
/// use board_race::core::LudoColor;
///
/// let path = LudoPath::new();
/// // Leaving home needs a six.
/// assert_eq!(path.next_tile(None, 6, LudoColor::Red).unwrap(), Some(TileId(14)));
/// assert_eq!(path.next_tile(None, 5, LudoColor::Red).unwrap(), None);
/// // Blue turns into its lane after tile 52.
/// assert_eq!(path.next_tile(Some(TileId(51)), 3, LudoColor::Blue).unwrap(), Some(TileId(54)));
/// ```
#[derive(Clone, Debug)]
pub struct LudoPath {
    tiles: Vec<Tile>,
}

impl Default for LudoPath {
    fn default() -> Self {
        Self::new()
    }
}

impl LudoPath {
    /// Build the fixed topology.
    #[must_use]
    pub fn new() -> Self {
        // Pass 1: allocate every slot.
        let mut slots: Vec<Slot> = (1..=RING_SIZE).map(Slot::Ring).collect();
        for spec in &LANES {
            slots.extend((0..LANE_LENGTH).map(|k| Slot::Goal(spec.color, k)));
        }

        // Pass 2: wire successors by arena index.
        let tiles = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                let id = TileId(index as u32 + 1);
                match slot {
                    Slot::Ring(n) => Tile::Ring {
                        id,
                        next: (n % RING_SIZE) as usize,
                        lane: LANES.iter().find(|s| s.diversion.0 == n).map(|s| LaneLink {
                            color: s.color,
                            first: (s.goal_base.0 - 1) as usize,
                        }),
                    },
                    Slot::Goal(color, k) => Tile::Goal {
                        id,
                        color,
                        next: (k + 1 < LANE_LENGTH).then_some(index + 1),
                    },
                }
            })
            .collect();

        Self { tiles }
    }

    /// Resolve where a `color` piece ends up after rolling `steps`.
    ///
    /// - From home (`None`): only [`ENTRY_ROLL`] enters, landing on the
    ///   color's entry tile; any other roll returns `Ok(None)`.
    /// - On the ring: hops successor links, turning into the color's goal
    ///   lane after its diversion tile.
    /// - In the lane: hops stop at the final goal tile.
    pub fn next_tile(
        &self,
        tile: Option<TileId>,
        steps: i32,
        color: LudoColor,
    ) -> Result<Option<TileId>> {
        if steps < 0 {
            return Err(EngineError::InvalidArgument(format!(
                "step count must not be negative, got {steps}"
            )));
        }

        let Some(tile) = tile else {
            return Ok((steps == ENTRY_ROLL).then_some(lane(color).entry));
        };

        let mut index = self.checked_index(tile, color)?;
        for _ in 0..steps {
            index = match self.tiles[index] {
                Tile::Ring {
                    lane: Some(link), ..
                } if link.color == color => link.first,
                Tile::Ring { next, .. } => next,
                Tile::Goal { next: Some(next), .. } => next,
                Tile::Goal { next: None, .. } | Tile::Linear { .. } => break,
            };
        }

        Ok(Some(self.tiles[index].id()))
    }

    /// Walk `steps` ring hops from a ring tile, never diverting.
    pub fn advance_ring(&self, tile: TileId, steps: u32) -> Result<TileId> {
        let mut index = match self.tile(tile) {
            Some(Tile::Ring { .. }) => self.index_of(tile),
            _ => None,
        }
        .ok_or_else(|| EngineError::InvalidArgument(format!("{tile} is not a ring tile")))?;

        for _ in 0..steps {
            if let Tile::Ring { next, .. } = self.tiles[index] {
                index = next;
            }
        }
        Ok(self.tiles[index].id())
    }

    /// Whether `tile` is a goal-lane tile of any color.
    #[must_use]
    pub fn is_goal(&self, tile: TileId) -> bool {
        self.tile(tile).is_some_and(Tile::is_goal)
    }

    /// Whether `tile` is on the shared ring.
    #[must_use]
    pub fn is_ring(&self, tile: TileId) -> bool {
        self.tile(tile).is_some_and(Tile::is_ring)
    }

    fn index_of(&self, tile: TileId) -> Option<usize> {
        let index = (tile.raw() as usize).checked_sub(1)?;
        (index < self.tiles.len()).then_some(index)
    }

    /// Arena index of `tile`, rejecting tiles a `color` piece can never hold.
    fn checked_index(&self, tile: TileId, color: LudoColor) -> Result<usize> {
        let index = self
            .index_of(tile)
            .ok_or_else(|| EngineError::InvalidArgument(format!("{tile} is not on the path")))?;
        match self.tiles[index] {
            Tile::Goal { color: owner, .. } if owner != color => Err(EngineError::InvalidArgument(
                format!("{tile} belongs to the {owner} lane, not {color}"),
            )),
            _ => Ok(index),
        }
    }
}

impl MovementGraph for LudoPath {
    fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    fn tile(&self, id: TileId) -> Option<&Tile> {
        self.index_of(id).map(|i| &self.tiles[i])
    }

    /// Ludo pieces start at home, off the graph.
    fn start(&self) -> Option<TileId> {
        None
    }
}
