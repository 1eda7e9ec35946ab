use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::placement::place_fleet_with;
use seabattle::{
    place_fleet, random_board, BitBoardError, BoardError, ConfigError, GameConfig,
    PlacementError, DEFAULT_BOARD_SIZE, FLEET_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};

#[test]
fn test_exhausted_budget_discards_board() {
    let mut rng = SmallRng::seed_from_u64(5);
    // four full-width ships cannot fit on six rows with a buffer between them
    let err = place_fleet_with(&mut rng, 6, &[6, 6, 6, 6], 50).unwrap_err();
    assert_eq!(err, PlacementError::AttemptsExhausted { attempts: 50 });
}

#[test]
fn test_place_fleet_ready_for_play() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut placed = 0;
    for _ in 0..20 {
        match place_fleet(&mut rng, 6) {
            Ok(board) => {
                placed += 1;
                assert_eq!(board.ships().len(), FLEET_SIZE);
                assert_eq!(board.sunk_count(), 0);
                for r in 0..6 {
                    for c in 0..6 {
                        assert!(!board.is_targeted(seabattle::Coordinate::new(r, c)));
                    }
                }
            }
            Err(e) => assert!(matches!(e, PlacementError::AttemptsExhausted { .. })),
        }
    }
    assert!(placed > 0);
}

#[test]
fn test_random_board_always_completes() {
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = random_board(&mut rng, MIN_BOARD_SIZE).unwrap();
        assert_eq!(board.ships().len(), FLEET_SIZE);
    }
}

#[test]
fn test_bad_board_sizes_surface() {
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(
        random_board(&mut rng, 0).unwrap_err(),
        BoardError::BitBoard(BitBoardError::ZeroSize)
    );
    assert!(matches!(
        place_fleet(&mut rng, 12).unwrap_err(),
        PlacementError::Board(BoardError::BitBoard(BitBoardError::SizeTooLarge { .. }))
    ));
}

#[test]
fn test_game_config_sizes() {
    assert_eq!(GameConfig::default().board_size(), DEFAULT_BOARD_SIZE);
    assert_eq!(GameConfig::default().seed(), None);
    assert!(GameConfig::new(MIN_BOARD_SIZE).is_ok());
    assert!(GameConfig::new(MAX_BOARD_SIZE).is_ok());
    assert_eq!(
        GameConfig::new(5).unwrap_err(),
        ConfigError::BoardSize { size: 5, min: MIN_BOARD_SIZE, max: MAX_BOARD_SIZE }
    );
    assert!(GameConfig::new(MAX_BOARD_SIZE + 1).is_err());

    let config = GameConfig::new(7).unwrap().with_seed(Some(3));
    assert_eq!(config.seed(), Some(3));
    assert_eq!(config.board_size(), 7);
}
