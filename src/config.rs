use thiserror::Error;

pub const DEFAULT_BOARD_SIZE: usize = 6;
pub const MIN_BOARD_SIZE: usize = 6;
pub const MAX_BOARD_SIZE: usize = 9;

/// Ship lengths placed on every board, in placement order.
pub const FLEET: [usize; FLEET_SIZE] = [3, 2, 2, 1, 1, 1, 1];
pub const FLEET_SIZE: usize = 7;

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Random placement tries allowed for one whole fleet before the board is
/// thrown away.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {size} is not supported (expected {min}..={max})")]
    BoardSize { size: usize, min: usize, max: usize },
}

/// Settings for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    board_size: usize,
    seed: Option<u64>,
}

impl GameConfig {
    pub fn new(board_size: usize) -> Result<Self, ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(ConfigError::BoardSize {
                size: board_size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self {
            board_size,
            seed: None,
        })
    }

    /// Fix the RNG seed so boards and automated shots are reproducible.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// RNG for the session: seeded when a seed is set, otherwise drawn from
    /// the thread RNG.
    #[cfg(feature = "std")]
    pub fn rng(&self) -> rand::rngs::SmallRng {
        use rand::SeedableRng;
        match self.seed {
            Some(s) => rand::rngs::SmallRng::seed_from_u64(s),
            None => {
                let mut seed_rng = rand::rng();
                rand::rngs::SmallRng::from_rng(&mut seed_rng)
            }
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            seed: None,
        }
    }
}
