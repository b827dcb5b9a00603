use sea_battle::{
    outcome_message, render_board, render_side_by_side, Board, Coord, Orientation, Ship,
    ShotOutcome,
};

fn sample_board() -> Board {
    let mut board = Board::new(3).unwrap();
    board
        .place_ship(Ship::new(Coord::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    board
        .place_ship(Ship::new(Coord::new(2, 2), 1, Orientation::Horizontal))
        .unwrap();
    board.reset_shot_history();
    board
}

#[test]
fn test_render_revealed() {
    let board = sample_board();
    let expected = "  | 1 | 2 | 3 |\n\
                    1 | ■ | O | O |\n\
                    2 | O | O | O |\n\
                    3 | O | O | ■ |";
    assert_eq!(render_board(&board, false), expected);
}

#[test]
fn test_render_hidden_after_shots() {
    let mut board = sample_board();
    board.fire_at(Coord::new(0, 0)).unwrap();
    board.fire_at(Coord::new(2, 0)).unwrap();
    let expected = "  | 1 | 2 | 3 |\n\
                    1 | X | . | O |\n\
                    2 | . | . | O |\n\
                    3 | . | O | O |";
    assert_eq!(render_board(&board, true), expected);
}

#[test]
fn test_side_by_side() {
    let board = sample_board();
    let out = render_side_by_side(&board, &board, true);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "1 | ■ | O | O |      1 | O | O | O |");
}

#[test]
fn test_outcome_messages() {
    assert_eq!(outcome_message(ShotOutcome::Miss), "Miss!");
    assert!(outcome_message(ShotOutcome::Wounded).contains("wounded"));
    assert!(outcome_message(ShotOutcome::Sunk).contains("destroyed"));
}
