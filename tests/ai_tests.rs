use broadside::{
    resolve_shot, search_weights, Coord, Direction, Fleet, Orientation, ShotBoard, Strategy,
    Targeting,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn at(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

fn fleet(ships: &[(usize, usize, Orientation)]) -> Fleet {
    ships.iter().fold(Fleet::new(), |f, &(r, c, o)| f.place(at(r, c), o).unwrap())
}

/// Fire `shots` in order against `fleet`, feeding each outcome to a fresh engine.
fn replay(fleet: &Fleet, shots: &[(usize, usize)]) -> (Targeting, ShotBoard) {
    let mut targeting = Targeting::new();
    let mut board = ShotBoard::new();
    for &(r, c) in shots {
        let (next, result) = resolve_shot(&board, fleet, at(r, c));
        board = next;
        targeting.record(at(r, c), result.is_hit(), &board);
    }
    (targeting, board)
}

#[test]
fn test_streak_extends_past_newest_hit() {
    let f = fleet(&[(2, 1, Orientation::Horizontal)]);
    let (targeting, board) = replay(&f, &[(2, 3), (2, 4)]);
    let mut rng = SmallRng::seed_from_u64(1);

    let aim = targeting.next_shot(&board, &mut rng).unwrap();
    assert_eq!(aim.at, at(2, 5));
    assert_eq!(aim.strategy, Strategy::Streak(Direction::Right));
}

#[test]
fn test_streak_falls_back_before_oldest_hit() {
    let f = fleet(&[(2, 0, Orientation::Horizontal)]);
    let (targeting, board) = replay(&f, &[(2, 5), (2, 3), (2, 4)]);
    let mut rng = SmallRng::seed_from_u64(1);

    let aim = targeting.next_shot(&board, &mut rng).unwrap();
    assert_eq!(aim.at, at(2, 2));
    assert_eq!(aim.strategy, Strategy::Streak(Direction::Left));
}

#[test]
fn test_streak_spans_contiguous_run() {
    let f = fleet(&[(1, 4, Orientation::Vertical)]);
    let (targeting, board) = replay(&f, &[(2, 4), (3, 4), (4, 4)]);
    let mut rng = SmallRng::seed_from_u64(1);

    let aim = targeting.next_shot(&board, &mut rng).unwrap();
    assert_eq!(aim.at, at(5, 4));
    assert_eq!(targeting.direction(), Some(Direction::Down));
}

#[test]
fn test_hunt_continues_away_from_adjacent_hit() {
    let f = fleet(&[(5, 5, Orientation::Horizontal)]);
    let (targeting, board) = replay(&f, &[(5, 6), (5, 5)]);
    let mut rng = SmallRng::seed_from_u64(7);

    assert_eq!(targeting.last_hit(), Some(at(5, 5)));
    let aim = targeting.next_shot(&board, &mut rng).unwrap();
    assert_eq!(aim.at, at(5, 4));
}

#[test]
fn test_hunt_uses_hit_outside_streak_window() {
    let f = fleet(&[
        (5, 5, Orientation::Horizontal),
        (0, 0, Orientation::Horizontal),
        (2, 0, Orientation::Vertical),
        (0, 6, Orientation::Vertical),
        (8, 0, Orientation::Horizontal),
    ]);
    // the pair (5,6)/(5,5) is split by four unrelated hits
    let (targeting, board) = replay(&f, &[(5, 6), (0, 0), (2, 0), (0, 6), (8, 0), (5, 5)]);
    let mut rng = SmallRng::seed_from_u64(7);

    let aim = targeting.next_shot(&board, &mut rng).unwrap();
    assert_eq!(aim.at, at(5, 4));
    assert_eq!(aim.strategy, Strategy::Hunt(Direction::Left));

    // with the near side already a miss, step past the neighbouring hit instead
    let (targeting, board) =
        replay(&f, &[(5, 6), (5, 4), (0, 0), (2, 0), (0, 6), (8, 0), (5, 5)]);
    let aim = targeting.next_shot(&board, &mut rng).unwrap();
    assert_eq!(aim.at, at(5, 7));
    assert_eq!(aim.strategy, Strategy::Hunt(Direction::Right));
}

#[test]
fn test_hunt_probes_neighbours_in_fixed_order() {
    let f = fleet(&[(5, 5, Orientation::Horizontal)]);
    let mut rng = SmallRng::seed_from_u64(3);

    let (targeting, board) = replay(&f, &[(5, 5)]);
    let aim = targeting.next_shot(&board, &mut rng).unwrap();
    assert_eq!(aim.at, at(4, 5));
    assert_eq!(aim.strategy, Strategy::Hunt(Direction::Up));

    let (targeting, board) = replay(&f, &[(5, 5), (4, 5)]);
    assert!(targeting.is_hunting());
    let aim = targeting.next_shot(&board, &mut rng).unwrap();
    assert_eq!(aim.at, at(5, 6));
    assert_eq!(aim.strategy, Strategy::Hunt(Direction::Right));
}

#[test]
fn test_hunt_falls_back_to_candidate_stack() {
    let f = fleet(&[
        (5, 5, Orientation::Horizontal),
        (9, 0, Orientation::Horizontal),
        (7, 0, Orientation::Horizontal),
        (0, 9, Orientation::Vertical),
        (0, 0, Orientation::Vertical),
    ]);
    let (targeting, board) = replay(&f, &[(5, 5), (2, 0), (0, 1), (1, 0), (0, 0)]);
    let mut rng = SmallRng::seed_from_u64(3);

    assert!(targeting.candidates().iter().all(|&c| !board.is_tried(c)));
    let aim = targeting.next_shot(&board, &mut rng).unwrap();
    assert_eq!(aim.at, at(1, 1));
    assert_eq!(aim.strategy, Strategy::Candidate);
}

#[test]
fn test_lead_clears_once_candidates_exhausted() {
    let f = fleet(&[(0, 0, Orientation::Horizontal)]);
    let hits = [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)];
    let misses = [(1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (0, 5)];

    let (targeting, _) = replay(&f, &hits);
    assert!(targeting.is_hunting());
    assert_eq!(targeting.direction(), Some(Direction::Right));

    let shots: Vec<_> = hits.iter().chain(misses[..5].iter()).copied().collect();
    let (targeting, _) = replay(&f, &shots);
    assert!(targeting.is_hunting());
    assert_eq!(targeting.candidates(), &[at(0, 5)]);

    let shots: Vec<_> = hits.iter().chain(misses.iter()).copied().collect();
    let (targeting, _) = replay(&f, &shots);
    assert!(!targeting.is_hunting());
    assert_eq!(targeting.last_hit(), None);
    assert_eq!(targeting.direction(), None);
    assert_eq!(targeting.history().len(), 11);
}

#[test]
fn test_search_weights_empty_board() {
    let weights = search_weights(&ShotBoard::new(), false);
    assert_eq!(weights[0][0], 37);
    assert_eq!(weights[0][1], 34);
    assert_eq!(weights[5][5], 37);
    assert_eq!(weights[6][6], 27);
    assert_eq!(weights[9][9], 3);

    let hunting = search_weights(&ShotBoard::new(), true);
    assert_eq!(hunting[0][0], 34);
    assert_eq!(hunting[9][9], 0);
}

#[test]
fn test_search_weights_misses_and_hits() {
    let f = fleet(&[(1, 0, Orientation::Horizontal)]);

    let (_, board) = replay(&f, &[(0, 2)]);
    let weights = search_weights(&board, false);
    assert_eq!(weights[0][2], 0);
    // only the destroyer fits horizontally before the miss
    assert_eq!(weights[0][0], 3 + 2 + 17);

    let (_, board) = replay(&f, &[(1, 0)]);
    let weights = search_weights(&board, true);
    // every horizontal placement from the corner borders the hit below it
    assert_eq!(weights[0][0], 17 + 5 * 2 + 17);
}

#[test]
fn test_first_shot_searches() {
    let mut rng = SmallRng::seed_from_u64(99);
    let aim = Targeting::new().next_shot(&ShotBoard::new(), &mut rng).unwrap();
    assert_eq!(aim.strategy, Strategy::Search);
}

#[test]
fn test_no_shot_on_exhausted_board() {
    let f = fleet(&[(0, 0, Orientation::Horizontal)]);
    let mut board = ShotBoard::new();
    for c in Coord::all() {
        board = resolve_shot(&board, &f, c).0;
    }
    let mut rng = SmallRng::seed_from_u64(5);
    assert_eq!(Targeting::new().next_shot(&board, &mut rng), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn first_shot_comes_from_top_five(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = ShotBoard::new();
        let aim = Targeting::new().next_shot(&board, &mut rng).unwrap();

        // jitter is below 2, so any cell at least 2 heavier always outranks the pick
        let weights = search_weights(&board, false);
        let picked = weights[aim.at.row()][aim.at.col()];
        let heavier = Coord::all()
            .filter(|c| weights[c.row()][c.col()] >= picked + 2)
            .count();
        prop_assert!(heavier < 5);
    }

    #[test]
    fn never_targets_a_tried_cell(seed in any::<u64>(), turns in 1..100usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = Fleet::random(&mut rng).unwrap();
        let mut targeting = Targeting::new();
        let mut board = ShotBoard::new();

        for _ in 0..turns {
            let aim = targeting.next_shot(&board, &mut rng).unwrap();
            prop_assert!(!board.is_tried(aim.at));
            let (next, result) = resolve_shot(&board, &fleet, aim.at);
            board = next;
            targeting.record(aim.at, result.is_hit(), &board);
            prop_assert!(targeting.candidates().iter().all(|&c| !board.is_tried(c)));
        }
        prop_assert_eq!(board.tried().count_ones(), turns);
    }
}
