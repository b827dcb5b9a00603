use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{
    random_board, try_place_fleet, Cell, Coord, FleetError, GameConfig, BOARD_SIZE, FLEET,
    MAX_PLACEMENT_ATTEMPTS,
};

#[test]
fn test_default_fleet_thousand_times() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut successes = 0;
    for _ in 0..1000 {
        match try_place_fleet(BOARD_SIZE, &FLEET, MAX_PLACEMENT_ATTEMPTS, &mut rng) {
            Ok(board) => {
                successes += 1;
                assert_eq!(board.ship_count(), 7);
                let lengths: usize = board.ships().iter().map(|s| s.length()).sum();
                assert_eq!(lengths, 11);
                let n = BOARD_SIZE as i32;
                let drawn = (0..n)
                    .flat_map(|r| (0..n).map(move |c| Coord::new(r, c)))
                    .filter(|&c| board.cell(c) == Some(Cell::Ship))
                    .count();
                assert_eq!(drawn, 11);
                assert!(board.busy().is_empty());
                assert!(board.is_locked());
                assert_eq!(board.sunk_count(), 0);
            }
            Err(FleetError::BudgetExhausted { attempts }) => {
                assert_eq!(attempts, MAX_PLACEMENT_ATTEMPTS)
            }
            Err(e) => panic!("unexpected error: {}", e),
        }
    }
    assert!(successes > 0);
}

#[test]
fn test_ships_never_touch() {
    let mut rng = SmallRng::seed_from_u64(99);
    let board = random_board(&GameConfig::default(), &mut rng).unwrap();
    let ships = board.ships();
    for (i, a) in ships.iter().enumerate() {
        for b in &ships[i + 1..] {
            for x in a.cells() {
                for y in b.cells() {
                    assert!(
                        (x.row - y.row).abs() > 1 || (x.col - y.col).abs() > 1,
                        "{:?} touches {:?}",
                        a,
                        b
                    );
                }
            }
        }
    }
}

#[test]
fn test_budget_exhausted() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        try_place_fleet(6, &[1], 0, &mut rng).unwrap_err(),
        FleetError::BudgetExhausted { attempts: 0 }
    );
    // four full-width ships cannot fit without touching
    assert_eq!(
        try_place_fleet(6, &[6, 6, 6, 6], 500, &mut rng).unwrap_err(),
        FleetError::BudgetExhausted { attempts: 500 }
    );
}

#[test]
fn test_random_board_gives_up() {
    let mut rng = SmallRng::seed_from_u64(2);
    let config = GameConfig {
        fleet: vec![6, 6, 6, 6],
        max_placement_attempts: 50,
        max_board_restarts: 3,
        ..GameConfig::default()
    };
    assert_eq!(
        random_board(&config, &mut rng).unwrap_err(),
        FleetError::RestartsExhausted { restarts: 3 }
    );
}

#[test]
fn test_random_board_oversized() {
    let mut rng = SmallRng::seed_from_u64(3);
    let config = GameConfig::with_size(12);
    assert!(matches!(
        random_board(&config, &mut rng),
        Err(FleetError::Board(_))
    ));
}

#[test]
fn test_reproducible_placement() {
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    let b1 = random_board(&GameConfig::default(), &mut rng1).unwrap();
    let b2 = random_board(&GameConfig::default(), &mut rng2).unwrap();
    assert_eq!(b1.ships(), b2.ships());
}
