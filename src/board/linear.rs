//! Linear chain board.

use crate::core::{EngineError, Result, MAX_BOARD_SIZE};

use super::tile::{Tile, TileId};
use super::MovementGraph;

/// Ordered chain of `size + 1` tiles, ids `0..=size`.
///
/// Tile 0 is the start; tile `size` is terminal. Immutable once built.
///
/// ```
/// use board_race::board::{LinearBoard, MovementGraph, TileId};
///
/// let board = LinearBoard::new(10).unwrap();
/// assert_eq!(board.advance(TileId(8), 5).unwrap(), TileId(10));
/// assert!(board.is_end(TileId(10)));
/// ```
#[derive(Clone, Debug)]
pub struct LinearBoard {
    tiles: Vec<Tile>,
}

impl LinearBoard {
    /// Build a board whose terminal tile is `size`.
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(EngineError::Configuration(
                "linear board needs at least one step".into(),
            ));
        }
        if size > MAX_BOARD_SIZE {
            return Err(EngineError::Configuration(format!(
                "linear board is capped at {MAX_BOARD_SIZE} steps, got {size}"
            )));
        }

        let last = size as usize;
        let tiles = (0..=last)
            .map(|i| Tile::Linear {
                id: TileId(i as u32),
                next: (i < last).then_some(i + 1),
            })
            .collect();

        Ok(Self { tiles })
    }

    /// Id of the terminal tile.
    #[must_use]
    pub fn size(&self) -> u32 {
        (self.tiles.len() - 1) as u32
    }

    /// The terminal tile.
    #[must_use]
    pub fn end(&self) -> TileId {
        TileId(self.size())
    }

    /// Walk `steps` successor links from `tile`, stopping at the terminal
    /// tile. Never overshoots.
    pub fn advance(&self, tile: TileId, steps: i32) -> Result<TileId> {
        if steps < 0 {
            return Err(EngineError::InvalidArgument(format!(
                "step count must not be negative, got {steps}"
            )));
        }

        let mut index = self.index_of(tile).ok_or_else(|| {
            EngineError::InvalidArgument(format!("{tile} is not on this board"))
        })?;

        for _ in 0..steps {
            match self.tiles[index].next() {
                Some(next) => index = next,
                None => break,
            }
        }

        Ok(self.tiles[index].id())
    }

    fn index_of(&self, tile: TileId) -> Option<usize> {
        let index = tile.raw() as usize;
        (index < self.tiles.len()).then_some(index)
    }
}

impl MovementGraph for LinearBoard {
    fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    fn tile(&self, id: TileId) -> Option<&Tile> {
        self.index_of(id).map(|i| &self.tiles[i])
    }

    fn start(&self) -> Option<TileId> {
        Some(TileId(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_layout() {
        let board = LinearBoard::new(5).unwrap();
        assert_eq!(board.tiles().len(), 6);
        assert_eq!(board.size(), 5);
        assert_eq!(board.end(), TileId(5));
        assert_eq!(board.start(), Some(TileId(0)));

        for (i, tile) in board.tiles().iter().enumerate() {
            assert_eq!(tile.id(), TileId(i as u32));
        }
        assert!(board.is_end(TileId(5)));
        assert!(!board.is_end(TileId(4)));
        assert!(!board.is_end(TileId(99)));
    }

    #[test]
    fn test_advance_exact_and_clamped() {
        let board = LinearBoard::new(5).unwrap();
        assert_eq!(board.advance(TileId(0), 3).unwrap(), TileId(3));
        assert_eq!(board.advance(TileId(2), 3).unwrap(), TileId(5));
        assert_eq!(board.advance(TileId(2), 40).unwrap(), TileId(5));
        assert_eq!(board.advance(TileId(5), 1).unwrap(), TileId(5));
        assert_eq!(board.advance(TileId(4), 0).unwrap(), TileId(4));
    }

    #[test]
    fn test_advance_rejects_bad_arguments() {
        let board = LinearBoard::new(5).unwrap();
        assert!(matches!(
            board.advance(TileId(1), -1),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(matches!(
            board.advance(TileId(6), 1),
            Err(EngineError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_size_bounds() {
        assert!(matches!(
            LinearBoard::new(0),
            Err(EngineError::Configuration(_))
        ));
        assert!(matches!(
            LinearBoard::new(MAX_BOARD_SIZE + 1),
            Err(EngineError::Configuration(_))
        ));
        assert_eq!(LinearBoard::new(MAX_BOARD_SIZE).unwrap().end(), TileId(MAX_BOARD_SIZE));
    }
}
