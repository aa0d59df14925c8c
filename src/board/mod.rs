//! Movement graphs: where pieces may stand and how they advance.
//!
//! Pure data, no game rules. Two topologies share the [`Tile`] variant:
//!
//! - [`LinearBoard`]: a chain ending in one terminal tile
//! - [`LudoPath`]: a cyclic ring with four color-private goal lanes
//!
//! Presentation layers read either board through [`MovementGraph`].

pub mod tile;
pub mod linear;
pub mod ludo;

pub use tile::{LaneLink, Tile, TileId};
pub use linear::LinearBoard;
pub use ludo::{lane, LaneSpec, LudoPath, ENTRY_ROLL, LANES, LANE_LENGTH, RING_SIZE};

/// Read-only view of a movement graph.
pub trait MovementGraph {
    /// Every tile, in arena order.
    fn tiles(&self) -> &[Tile];

    /// Look up a tile by id.
    fn tile(&self, id: TileId) -> Option<&Tile>;

    /// Where pieces start. `None` when pieces start at home, off the graph.
    fn start(&self) -> Option<TileId>;

    /// True iff `id` is on this graph and has no successor.
    fn is_end(&self, id: TileId) -> bool {
        self.tile(id).is_some_and(Tile::is_terminal)
    }
}
