use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    AiPlayer, Board, BoardError, Coordinate, Game, GameConfig, GameError, GamePhase, Orientation,
    Player, Ship, ShotResult, Side, FLEET_SIZE,
};

/// Player firing a fixed list of targets, recording every rejection.
struct Scripted {
    targets: VecDeque<Coordinate>,
    rejected: Rc<RefCell<Vec<BoardError>>>,
}

impl Scripted {
    fn new(targets: &[(i32, i32)]) -> (Self, Rc<RefCell<Vec<BoardError>>>) {
        let rejected = Rc::new(RefCell::new(Vec::new()));
        let player = Scripted {
            targets: targets.iter().map(|&(r, c)| Coordinate::new(r, c)).collect(),
            rejected: Rc::clone(&rejected),
        };
        (player, rejected)
    }
}

impl Player for Scripted {
    fn select_target(&mut self, _rng: &mut SmallRng, _board_size: usize) -> Option<Coordinate> {
        self.targets.pop_front()
    }

    fn handle_rejected(&mut self, _target: Coordinate, err: &BoardError) {
        self.rejected.borrow_mut().push(*err);
    }
}

fn board(ships: &[((i32, i32), usize, Orientation)]) -> Board {
    let mut board = Board::new(6).unwrap();
    for &((r, c), len, o) in ships {
        board.place_ship(Ship::new(Coordinate::new(r, c), len, o)).unwrap();
    }
    board.reset_targeting_memory();
    board
}

fn ai_game(seed: u64) -> Game {
    let config = GameConfig::default().with_seed(Some(seed));
    Game::new(
        &config,
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
        config.rng(),
    )
    .unwrap()
}

#[test]
fn test_ai_vs_ai_game() {
    let mut game = ai_game(123);
    assert_eq!(game.phase(), GamePhase::Setup);
    assert!(game.user_board().reveals_ships());
    assert!(!game.computer_board().reveals_ships());

    let winner = game.run().unwrap();
    assert_eq!(game.winner(), Some(winner));
    assert_eq!(game.phase(), GamePhase::Finished(winner));

    let loser_board = game.board(winner.opponent());
    assert_eq!(loser_board.sunk_count(), FLEET_SIZE);
    assert!(game.board(winner).sunk_count() < FLEET_SIZE);
    assert!(game.turns() <= 2 * 36);

    assert_eq!(game.step().unwrap_err(), GameError::Finished);
}

#[test]
fn test_seeded_games_are_reproducible() {
    for seed in [1, 7, 99] {
        let mut a = ai_game(seed);
        let mut b = ai_game(seed);
        assert_eq!(a.user_board().ships(), b.user_board().ships());
        assert_eq!(a.computer_board().ships(), b.computer_board().ships());
        assert_eq!(a.run().unwrap(), b.run().unwrap());
        assert_eq!(a.turns(), b.turns());
    }
}

#[test]
fn test_hit_keeps_turn_miss_passes_it() {
    let (user, rejected) = Scripted::new(&[(0, 0), (3, 3), (0, 0), (0, 1)]);
    let (computer, _) = Scripted::new(&[(4, 4)]);
    let mut game = Game::with_boards(
        board(&[((5, 5), 1, Orientation::Horizontal)]),
        board(&[((0, 0), 2, Orientation::Horizontal)]),
        Box::new(user),
        Box::new(computer),
        SmallRng::seed_from_u64(0),
    );

    let mv = game.step().unwrap();
    assert_eq!((mv.side, mv.result), (Side::User, ShotResult::Hit));
    assert_eq!(game.phase(), GamePhase::UserTurn);

    let mv = game.step().unwrap();
    assert_eq!((mv.side, mv.result), (Side::User, ShotResult::Miss));
    assert_eq!(game.phase(), GamePhase::AiTurn);

    let mv = game.step().unwrap();
    assert_eq!((mv.side, mv.result), (Side::Computer, ShotResult::Miss));
    assert_eq!(mv.target, Coordinate::new(4, 4));
    assert_eq!(game.phase(), GamePhase::UserTurn);

    // the repeated (0, 0) is refused and the player simply aims again
    let mv = game.step().unwrap();
    assert_eq!(mv.result, ShotResult::Sunk);
    assert_eq!(
        rejected.borrow().as_slice(),
        &[BoardError::AlreadyTargeted(Coordinate::new(0, 0))]
    );
    assert_eq!(game.phase(), GamePhase::Finished(Side::User));
    assert_eq!(game.winner(), Some(Side::User));
    assert_eq!(game.turns(), 4);
}

#[test]
fn test_sink_passes_turn() {
    let (user, _) = Scripted::new(&[(0, 0)]);
    let (computer, _) = Scripted::new(&[]);
    let mut game = Game::with_boards(
        board(&[((5, 5), 1, Orientation::Horizontal)]),
        board(&[
            ((0, 0), 1, Orientation::Horizontal),
            ((0, 5), 1, Orientation::Horizontal),
        ]),
        Box::new(user),
        Box::new(computer),
        SmallRng::seed_from_u64(0),
    );

    let mv = game.step().unwrap();
    assert_eq!(mv.result, ShotResult::Sunk);
    assert_eq!(game.phase(), GamePhase::AiTurn);
    assert_eq!(game.computer_board().sunk_count(), 1);
    assert_eq!(game.winner(), None);

    // the scripted computer has nothing left to fire
    assert_eq!(game.step().unwrap_err(), GameError::Abandoned(Side::Computer));
}

#[test]
fn test_computer_wins_when_user_fleet_sunk() {
    let (user, _) = Scripted::new(&[(2, 2)]);
    let (computer, rejected) = Scripted::new(&[(9, 9), (5, 5)]);
    let mut game = Game::with_boards(
        board(&[((5, 5), 1, Orientation::Horizontal)]),
        board(&[((0, 0), 1, Orientation::Horizontal)]),
        Box::new(user),
        Box::new(computer),
        SmallRng::seed_from_u64(0),
    );

    assert_eq!(game.step().unwrap().result, ShotResult::Miss);
    assert_eq!(game.step().unwrap().result, ShotResult::Sunk);
    assert_eq!(
        rejected.borrow().as_slice(),
        &[BoardError::OutOfBounds(Coordinate::new(9, 9))]
    );
    assert_eq!(game.winner(), Some(Side::Computer));
}

#[test]
fn test_side_names() {
    assert_eq!(Side::User.to_string(), "user");
    assert_eq!(Side::Computer.to_string(), "automated opponent");
    assert_eq!(Side::User.opponent(), Side::Computer);
}
