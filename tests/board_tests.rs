use broadside::{resolve_shot, Coord, Fleet, Orientation, ShotBoard, ShotResult, TriedCell};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn at(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

fn carrier_only() -> Fleet {
    Fleet::new().place(at(0, 0), Orientation::Horizontal).unwrap()
}

#[test]
fn test_hit_miss_and_sink() {
    let fleet = carrier_only();
    let mut board = ShotBoard::new();

    for c in 0..4 {
        let (next, result) = resolve_shot(&board, &fleet, at(0, c));
        assert_eq!(result, ShotResult::Hit);
        board = next;
    }
    let (board, result) = resolve_shot(&board, &fleet, at(0, 4));
    assert_eq!(result, ShotResult::Sunk("Carrier"));

    let (board, result) = resolve_shot(&board, &fleet, at(5, 5));
    assert_eq!(result, ShotResult::Miss);
    assert_eq!(board.cell(at(5, 5)), TriedCell { tried: true, hit: false });
    assert_eq!(board.cell(at(0, 2)), TriedCell { tried: true, hit: true });
    assert_eq!(board.cell(at(9, 9)), TriedCell::default());
    assert_eq!(board.hits().count_ones(), 5);
    assert_eq!(board.misses().count_ones(), 1);
}

#[test]
fn test_repeat_reports_recorded_outcome() {
    let fleet = carrier_only();
    let (board, _) = resolve_shot(&ShotBoard::new(), &fleet, at(0, 1));
    let (again, result) = resolve_shot(&board, &fleet, at(0, 1));
    assert_eq!(result, ShotResult::Repeat { hit: true });
    assert!(result.is_hit());
    assert_eq!(again, board);
}

#[test]
fn test_board_exhaustion() {
    let fleet = carrier_only();
    let mut board = ShotBoard::new();
    for c in Coord::all() {
        assert!(!board.is_exhausted());
        board = resolve_shot(&board, &fleet, c).0;
    }
    assert!(board.is_exhausted());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn repeat_shot_is_idempotent(seed in any::<u64>(), row in 0..10usize, col in 0..10usize) {
        let fleet = Fleet::random(&mut SmallRng::seed_from_u64(seed)).unwrap();
        let target = at(row, col);
        let (after, first) = resolve_shot(&ShotBoard::new(), &fleet, target);
        prop_assert_eq!(first.is_hit(), fleet.ship_at(target).is_some());

        let (again, second) = resolve_shot(&after, &fleet, target);
        prop_assert_eq!(again, after);
        prop_assert_eq!(second, ShotResult::Repeat { hit: first.is_hit() });
    }
}
