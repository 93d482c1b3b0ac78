use rand::rngs::SmallRng;
use rand::SeedableRng;
use twenty48::{Board, Direction};

#[test]
fn test_slide_left_merges_pairs_once() {
    let mut board = Board::from([
        [2, 2, 4, 4],
        [2, 2, 2, 2],
        [2, 2, 2, 0],
        [2, 4, 2, 4],
    ]);
    let outcome = board.slide(Direction::Left);
    assert!(outcome.changed);
    assert_eq!(
        board.grid().rows(),
        &[[4, 8, 0, 0], [4, 4, 0, 0], [4, 2, 0, 0], [2, 4, 2, 4]]
    );
    assert_eq!(outcome.score, 12 + 8 + 4);
    assert_eq!(outcome.highest_merge, 8);
}

#[test]
fn test_slide_right() {
    let mut board = Board::from([
        [2, 2, 4, 4],
        [0, 2, 2, 2],
        [4, 0, 0, 4],
        [0, 0, 0, 0],
    ]);
    let outcome = board.slide(Direction::Right);
    assert!(outcome.changed);
    assert_eq!(
        board.grid().rows(),
        &[[0, 0, 4, 8], [0, 0, 2, 4], [0, 0, 0, 8], [0, 0, 0, 0]]
    );
}

#[test]
fn test_slide_up_and_down() {
    let mut board = Board::from([
        [2, 0, 4, 0],
        [2, 2, 0, 0],
        [4, 2, 4, 0],
        [4, 0, 0, 2],
    ]);
    let outcome = board.slide(Direction::Up);
    assert!(outcome.changed);
    assert_eq!(
        board.grid().rows(),
        &[[4, 4, 8, 2], [8, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
    );

    let mut board = Board::from([
        [2, 0, 4, 0],
        [2, 2, 0, 0],
        [4, 2, 4, 0],
        [4, 0, 0, 2],
    ]);
    let outcome = board.slide(Direction::Down);
    assert!(outcome.changed);
    assert_eq!(
        board.grid().rows(),
        &[[0, 0, 0, 0], [0, 0, 0, 0], [4, 0, 0, 0], [8, 4, 8, 2]]
    );
}

#[test]
fn test_slide_reports_unchanged() {
    let mut board = Board::from([
        [2, 4, 8, 16],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);
    let outcome = board.slide(Direction::Left);
    assert!(!outcome.changed);
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.highest_merge, 0);
}

#[test]
fn test_spawn_fills_board_then_returns_none() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..16 {
        let (_, _, value) = board.spawn_random(&mut rng).unwrap();
        assert!(value == 2 || value == 4);
    }
    assert!(board.grid().is_full());
    assert_eq!(board.spawn_random(&mut rng), None);
}

#[test]
fn test_spawn_reproducible_with_fixed_seed() {
    let mut rng1 = SmallRng::seed_from_u64(12345);
    let mut rng2 = SmallRng::seed_from_u64(12345);
    let mut board1 = Board::new();
    let mut board2 = Board::new();
    for _ in 0..8 {
        assert_eq!(board1.spawn_random(&mut rng1), board2.spawn_random(&mut rng2));
    }
    assert_eq!(board1, board2);
}

#[test]
fn test_has_moves() {
    // Any empty cell means a move exists.
    let board = Board::from([[2, 4, 8, 16], [4, 8, 16, 2], [8, 16, 2, 4], [16, 2, 4, 0]]);
    assert!(board.has_moves());

    // Full board with an adjacent equal pair.
    let board = Board::from([[2, 4, 8, 16], [4, 8, 16, 2], [8, 16, 2, 4], [16, 16, 4, 8]]);
    assert!(board.has_moves());

    // Full board, no adjacent equal pair anywhere.
    let board = Board::from([[2, 4, 8, 16], [4, 8, 16, 2], [8, 16, 2, 4], [16, 2, 4, 8]]);
    assert!(!board.has_moves());
}

#[test]
fn test_highest_tile_and_sum() {
    let board = Board::from([[2, 0, 4, 0], [0, 128, 0, 0], [0, 0, 0, 2], [0, 0, 0, 0]]);
    assert_eq!(board.highest_tile(), 128);
    assert_eq!(board.tile_sum(), 136);
}
