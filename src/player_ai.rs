use log::trace;
use rand::{rngs::SmallRng, Rng};

use crate::common::Coordinate;
use crate::player::Player;

/// Automated opponent firing at uniformly random cells.
///
/// It keeps no record of earlier shots; repeats are refused by the board and
/// the move loop simply asks again.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, board_size: usize) -> Option<Coordinate> {
        let target = Coordinate::new(
            rng.random_range(0..board_size as i32),
            rng.random_range(0..board_size as i32),
        );
        trace!("automated player aims at {}", target);
        Some(target)
    }
}
