//! Tiles and tile identifiers.
//!
//! Tiles live in an arena owned by their board and link to each other by
//! arena index. Boards allocate every tile before wiring successors, and
//! never hand out a tile until the whole arena is linked.

use serde::{Deserialize, Serialize};

use crate::core::LudoColor;

/// Player-visible tile identifier.
///
/// Linear boards number tiles `0..=size`; the ludo ring uses `1..=52` and
/// goal lanes follow after the ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Ring tile's side door into one color's goal lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneLink {
    pub color: LudoColor,
    /// Arena index of the lane's first tile.
    pub first: usize,
}

/// A position in a movement graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    /// Step on a linear board. The terminal tile has no successor.
    Linear { id: TileId, next: Option<usize> },

    /// Shared ring tile. Always has a successor; `lane` is set on the tile
    /// just before a color's entry point.
    Ring {
        id: TileId,
        next: usize,
        lane: Option<LaneLink>,
    },

    /// Private goal-lane tile. The final tile of each lane has no successor.
    Goal {
        id: TileId,
        color: LudoColor,
        next: Option<usize>,
    },
}

impl Tile {
    #[must_use]
    pub const fn id(&self) -> TileId {
        match *self {
            Tile::Linear { id, .. } | Tile::Ring { id, .. } | Tile::Goal { id, .. } => id,
        }
    }

    /// Ordinary successor, ignoring any goal-lane diversion.
    #[must_use]
    pub const fn next(&self) -> Option<usize> {
        match *self {
            Tile::Linear { next, .. } | Tile::Goal { next, .. } => next,
            Tile::Ring { next, .. } => Some(next),
        }
    }

    /// No successor: the end of the board or of a goal lane.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.next().is_none()
    }

    /// Goal-lane tiles are never contested.
    #[must_use]
    pub const fn is_goal(&self) -> bool {
        matches!(self, Tile::Goal { .. })
    }

    #[must_use]
    pub const fn is_ring(&self) -> bool {
        matches!(self, Tile::Ring { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_id() {
        let id = TileId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Tile(7)");
        assert!(TileId::new(3) < TileId::new(4));
    }

    #[test]
    fn test_variant_queries() {
        let end = Tile::Linear { id: TileId(9), next: None };
        assert!(end.is_terminal());
        assert!(!end.is_goal());

        let ring = Tile::Ring { id: TileId(52), next: 0, lane: None };
        assert!(!ring.is_terminal());
        assert!(ring.is_ring());
        assert_eq!(ring.next(), Some(0));

        let goal = Tile::Goal { id: TileId(53), color: LudoColor::Blue, next: Some(53) };
        assert!(goal.is_goal());
        assert_eq!(goal.id(), TileId(53));
    }
}
