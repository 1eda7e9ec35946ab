use log::debug;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, Coordinate, ShotResult},
};

/// Interface implemented by the decision makers of a game.
///
/// A player only picks targets. Applying them to the opponent's board and
/// retrying rejected shots is shared by every player type in [`make_move`].
pub trait Player {
    /// Choose the next target on a `board_size×board_size` grid.
    ///
    /// `None` means the player can no longer act (e.g. its input closed).
    fn select_target(&mut self, rng: &mut SmallRng, board_size: usize) -> Option<Coordinate>;

    /// Inform the player that the board refused its last target.
    fn handle_rejected(&mut self, _target: Coordinate, _err: &BoardError) {}

    /// Inform the player of the result of its last accepted shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _result: ShotResult) {}
}

/// A shot the enemy board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub target: Coordinate,
    pub result: ShotResult,
}

impl Shot {
    /// Returns `true` when the same player moves again.
    pub fn grants_extra_turn(&self) -> bool {
        self.result.grants_extra_turn()
    }
}

/// Ask `player` for targets until `enemy` accepts one.
///
/// Off-board and repeated targets are reported back to the player and never
/// end the move. Returns `None` only if the player gives up.
pub fn make_move(player: &mut dyn Player, enemy: &mut Board, rng: &mut SmallRng) -> Option<Shot> {
    loop {
        let target = player.select_target(rng, enemy.size())?;
        match enemy.apply_shot(target) {
            Ok(result) => {
                player.handle_shot_result(target, result);
                return Some(Shot { target, result });
            }
            Err(err) => {
                debug!("shot at {} rejected: {}", target, err);
                player.handle_rejected(target, &err);
            }
        }
    }
}
