use alloc::boxed::Box;
use core::fmt;
use log::info;
use rand::rngs::SmallRng;
use thiserror::Error;

use crate::{
    board::Board,
    common::{BoardError, Coordinate, ShotResult},
    config::GameConfig,
    placement::random_board,
    player::{make_move, Player},
};

/// The two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Side {
    User,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::User => Side::Computer,
            Side::Computer => Side::User,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::User => write!(f, "user"),
            Side::Computer => write!(f, "automated opponent"),
        }
    }
}

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Boards are placed, nobody has fired yet.
    Setup,
    UserTurn,
    AiTurn,
    /// The game is over; carries the winner.
    Finished(Side),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A player stopped producing targets.
    #[error("the {0} left the game")]
    Abandoned(Side),
    #[error("the game is already over")]
    Finished,
}

/// One accepted shot and who fired it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub side: Side,
    pub target: Coordinate,
    pub result: ShotResult,
}

/// A board together with the player that owns it.
struct Seat {
    board: Board,
    player: Box<dyn Player>,
}

/// Two boards, two players and the turn order between them.
///
/// Each player may only fire at the other seat's board; its own board is
/// exposed read-only for rendering.
pub struct Game {
    user: Seat,
    computer: Seat,
    rng: SmallRng,
    phase: GamePhase,
    turns: usize,
}

impl Game {
    /// Place a random fleet for both sides. The computer's ships are hidden.
    pub fn new(
        config: &GameConfig,
        user: Box<dyn Player>,
        computer: Box<dyn Player>,
        mut rng: SmallRng,
    ) -> Result<Self, BoardError> {
        let user_board = random_board(&mut rng, config.board_size())?;
        let computer_board = random_board(&mut rng, config.board_size())?.hidden();
        Ok(Self::with_boards(user_board, computer_board, user, computer, rng))
    }

    /// Start a game on boards that are already populated.
    pub fn with_boards(
        user_board: Board,
        computer_board: Board,
        user: Box<dyn Player>,
        computer: Box<dyn Player>,
        rng: SmallRng,
    ) -> Self {
        Self {
            user: Seat {
                board: user_board,
                player: user,
            },
            computer: Seat {
                board: computer_board,
                player: computer,
            },
            rng,
            phase: GamePhase::Setup,
            turns: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Side about to move, `None` once the game is over.
    pub fn current_side(&self) -> Option<Side> {
        match self.phase {
            GamePhase::Setup | GamePhase::UserTurn => Some(Side::User),
            GamePhase::AiTurn => Some(Side::Computer),
            GamePhase::Finished(_) => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            GamePhase::Finished(side) => Some(side),
            _ => None,
        }
    }

    pub fn user_board(&self) -> &Board {
        &self.user.board
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer.board
    }

    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::User => &self.user.board,
            Side::Computer => &self.computer.board,
        }
    }

    /// Number of accepted shots so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Let the side to move fire one accepted shot and advance the phase.
    ///
    /// A hit keeps the turn, a miss or a sink passes it. The game finishes as
    /// soon as either fleet is fully sunk.
    pub fn step(&mut self) -> Result<Move, GameError> {
        let side = self.current_side().ok_or(GameError::Finished)?;
        let (attacker, defender) = match side {
            Side::User => (&mut self.user, &mut self.computer),
            Side::Computer => (&mut self.computer, &mut self.user),
        };
        let shot = make_move(attacker.player.as_mut(), &mut defender.board, &mut self.rng)
            .ok_or(GameError::Abandoned(side))?;
        self.turns += 1;

        self.phase = match self.check_winner() {
            Some(winner) => {
                info!("{} wins after {} shots", winner, self.turns);
                GamePhase::Finished(winner)
            }
            None => {
                let next = if shot.grants_extra_turn() {
                    side
                } else {
                    side.opponent()
                };
                match next {
                    Side::User => GamePhase::UserTurn,
                    Side::Computer => GamePhase::AiTurn,
                }
            }
        };
        Ok(Move {
            side,
            target: shot.target,
            result: shot.result,
        })
    }

    /// Play until someone wins.
    pub fn run(&mut self) -> Result<Side, GameError> {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            self.step()?;
        }
    }

    /// The winner is the side whose opponent has no ships left.
    fn check_winner(&self) -> Option<Side> {
        if self.computer.board.all_sunk() {
            Some(Side::User)
        } else if self.user.board.all_sunk() {
            Some(Side::Computer)
        } else {
            None
        }
    }
}
