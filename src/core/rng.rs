//! Seedable randomness behind the dice.
//!
//! A session seeded with `GameSession::with_seed` rolls the same faces
//! every time. The generator can be checkpointed mid-game and resumed.
//!
//! ```
//! use board_race::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll_die(6), b.roll_die(6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8 stream plus the seed it came from.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Draw a fresh seed from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One face in `1..=sides`.
    pub fn roll_die(&mut self, sides: u8) -> u8 {
        assert!(sides > 0, "Die must have at least 1 face");
        self.stream.gen_range(1..=sides)
    }

    /// Where the stream is now.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
        }
    }

    /// Continue a stream saved with [`state`](Self::state).
    #[must_use]
    pub fn from_state(saved: &GameRngState) -> Self {
        let mut rng = Self::new(saved.seed);
        rng.stream.set_word_pos(saved.word_pos);
        rng
    }
}

/// Saved generator position: the seed and how far the stream has run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faces(rng: &mut GameRng, n: usize) -> Vec<u8> {
        (0..n).map(|_| rng.roll_die(6)).collect()
    }

    #[test]
    fn test_same_seed_same_faces() {
        let mut a = GameRng::new(2024);
        let mut b = GameRng::new(2024);
        assert_eq!(faces(&mut a, 64), faces(&mut b, 64));
        assert_eq!(a.seed(), 2024);
    }

    #[test]
    fn test_seeds_diverge() {
        assert_ne!(faces(&mut GameRng::new(1), 32), faces(&mut GameRng::new(2), 32));
    }

    #[test]
    fn test_every_face_shows_up() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 6];
        for face in faces(&mut rng, 600) {
            seen[usize::from(face) - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_resume_mid_game() {
        let mut rng = GameRng::new(42);
        faces(&mut rng, 37);

        let saved = rng.state();
        let bytes = bincode::serialize(&saved).unwrap();
        let mut resumed = GameRng::from_state(&bincode::deserialize(&bytes).unwrap());

        assert_eq!(faces(&mut rng, 12), faces(&mut resumed, 12));
    }

    #[test]
    #[should_panic(expected = "Die must have at least 1 face")]
    fn test_faceless_die() {
        GameRng::new(0).roll_die(0);
    }
}
