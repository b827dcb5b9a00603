use std::cell::RefCell;
use std::rc::Rc;

use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{
    AiPlayer, Board, Coord, Game, GameConfig, Orientation, Player, Ship, ShotError,
    ShotOutcome, Side,
};

/// Fires at a fixed list of targets and records what the board refused.
struct Scripted {
    targets: Vec<Coord>,
    rejected: Rc<RefCell<Vec<ShotError>>>,
}

impl Scripted {
    fn new(targets: &[Coord]) -> (Self, Rc<RefCell<Vec<ShotError>>>) {
        let rejected = Rc::new(RefCell::new(Vec::new()));
        let mut targets = targets.to_vec();
        targets.reverse();
        (
            Self {
                targets,
                rejected: Rc::clone(&rejected),
            },
            rejected,
        )
    }
}

impl Player for Scripted {
    fn select_target(&mut self, _rng: &mut SmallRng, _enemy: &Board) -> anyhow::Result<Coord> {
        self.targets
            .pop()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn handle_rejected_shot(&mut self, _target: Coord, error: ShotError) {
        self.rejected.borrow_mut().push(error);
    }
}

fn board_with(ships: &[Ship]) -> Board {
    let mut board = Board::new(6).unwrap();
    for &s in ships {
        board.place_ship(s).unwrap();
    }
    board.reset_shot_history();
    board
}

fn single(row: i32, col: i32) -> Ship {
    Ship::new(Coord::new(row, col), 1, Orientation::Horizontal)
}

#[test]
fn test_rejected_shots_keep_turn() {
    let mut rng = SmallRng::seed_from_u64(1);
    let (first, rejected) = Scripted::new(&[
        Coord::new(9, 9),
        Coord::new(0, 0),
        Coord::new(0, 0),
        Coord::new(1, 1),
        Coord::new(5, 0),
    ]);
    let boards = [board_with(&[single(5, 5)]), board_with(&[single(0, 0), single(3, 3)])];
    let mut game = Game::from_boards(boards, [Box::new(first), Box::new(AiPlayer::new())]);

    let report = game.step(&mut rng).unwrap();
    assert_eq!(report.shooter, Side::First);
    assert_eq!(report.target, Coord::new(0, 0));
    assert_eq!(report.outcome, ShotOutcome::Sunk);
    assert_eq!(game.turn(), Side::First);

    let report = game.step(&mut rng).unwrap();
    assert_eq!(report.target, Coord::new(5, 0));
    assert_eq!(report.outcome, ShotOutcome::Miss);
    assert_eq!(game.turn(), Side::Second);

    assert_eq!(
        *rejected.borrow(),
        vec![ShotError::OutOfBounds, ShotError::AlreadyShot, ShotError::AlreadyShot]
    );
    assert_eq!(game.shots(Side::First), 2);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_winner_and_game_over() {
    let mut rng = SmallRng::seed_from_u64(2);
    let (first, _) = Scripted::new(&[Coord::new(0, 0), Coord::new(3, 3)]);
    let boards = [board_with(&[single(5, 5)]), board_with(&[single(0, 0), single(3, 3)])];
    let mut game = Game::from_boards(boards, [Box::new(first), Box::new(AiPlayer::new())]);

    game.step(&mut rng).unwrap();
    assert_eq!(game.winner(), None);
    game.step(&mut rng).unwrap();
    assert_eq!(game.winner(), Some(Side::First));
    assert!(game.board(Side::Second).is_defeated());
    assert!(game.step(&mut rng).is_err());
}

#[test]
fn test_player_error_propagates() {
    let mut rng = SmallRng::seed_from_u64(3);
    let (first, _) = Scripted::new(&[]);
    let boards = [board_with(&[single(5, 5)]), board_with(&[single(0, 0)])];
    let mut game = Game::from_boards(boards, [Box::new(first), Box::new(AiPlayer::new())]);
    assert!(game.step(&mut rng).is_err());
    assert_eq!(game.turn(), Side::First);
}

#[test]
fn test_ai_vs_ai_games() {
    for seed in 0..25 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let players: [Box<dyn Player>; 2] = [Box::new(AiPlayer::new()), Box::new(AiPlayer::new())];
        let mut game = Game::new(&GameConfig::default(), players, &mut rng).unwrap();
        let summary = game.run(&mut rng).unwrap();

        let loser = summary.winner.other();
        assert!(game.board(loser).is_defeated());
        assert!(!game.board(summary.winner).is_defeated());
        assert_eq!(game.board(loser).sunk_count(), 7);
        for side in [Side::First, Side::Second] {
            assert!(summary.shots[side as usize] <= 36);
        }
        assert!(summary.shots[summary.winner as usize] >= 11);
        assert!(summary.turns >= 1);
    }
}

#[test]
fn test_invalid_config_rejected() {
    let mut rng = SmallRng::seed_from_u64(4);
    let players: [Box<dyn Player>; 2] = [Box::new(AiPlayer::new()), Box::new(AiPlayer::new())];
    let config = GameConfig {
        fleet: vec![],
        ..GameConfig::default()
    };
    assert!(Game::new(&config, players, &mut rng).is_err());
}

#[test]
fn test_reproducible_match() {
    let play = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let players: [Box<dyn Player>; 2] =
            [Box::new(AiPlayer::new()), Box::new(AiPlayer::new())];
        let mut game = Game::new(&GameConfig::default(), players, &mut rng).unwrap();
        game.run(&mut rng).unwrap()
    };
    assert_eq!(play(77), play(77));
}
