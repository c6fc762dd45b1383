//! Tactical regression positions for the minimax search
//!
//! Each scenario marks the only defensible move with `#`; the search must
//! find it no matter how ties are shuffled.

use gridplay::{FourInARow, Minimax, MinimaxConfig, Player, TicTacToe};
use rand::{SeedableRng, rngs::StdRng};

/// Replace the `#` marker with an empty cell and return the cleaned rows
/// together with the marked flat position.
fn parse_scenario(rows: &[&str]) -> (Vec<String>, usize) {
    let mut target = None;
    let cleaned: Vec<String> = rows
        .iter()
        .enumerate()
        .map(|(row, line)| {
            if let Some(column) = line.find('#') {
                target = Some(row * line.chars().count() + column);
            }
            line.replace('#', ".")
        })
        .collect();
    let target = target.expect("scenario must mark the expected move with '#'");
    (cleaned, target)
}

fn assert_four_in_a_row_choice(rows: &[&str], seed: u64) {
    let (cleaned, target) = parse_scenario(rows);
    let row_refs: Vec<&str> = cleaned.iter().map(String::as_str).collect();
    let mut board = FourInARow::from_rows(&row_refs, Player::X).unwrap();
    let minimax = Minimax::new(MinimaxConfig::depth_limited(8));
    let mut rng = StdRng::seed_from_u64(seed);
    let pos = minimax
        .choose_move(&mut board, Player::X, &mut rng)
        .unwrap();
    assert_eq!(pos, target, "seed {seed}");
}

fn assert_tictactoe_choice(rows: &[&str], seed: u64) {
    let (cleaned, target) = parse_scenario(rows);
    let row_refs: Vec<&str> = cleaned.iter().map(String::as_str).collect();
    let mut board = TicTacToe::from_rows(&row_refs, Player::X).unwrap();
    let minimax = Minimax::new(MinimaxConfig::exhaustive());
    let mut rng = StdRng::seed_from_u64(seed);
    let pos = minimax
        .choose_move(&mut board, Player::X, &mut rng)
        .unwrap();
    assert_eq!(pos, target, "seed {seed}");
}

mod four_in_a_row {
    use super::*;

    #[test]
    fn plays_the_last_cell_of_a_full_board() {
        let rows = [
            "XXXOXX#",
            "OOOXOOO",
            "XXXOXXX",
            "OOOXOOO",
            "XXXOXXX",
            "OOOXOOO",
        ];
        assert_four_in_a_row_choice(&rows, 1);
    }

    #[test]
    fn takes_the_open_horizontal_win() {
        let rows = [
            "-------",
            "-------",
            "-------",
            "-------",
            "-------",
            "OOO#XXX",
        ];
        assert_four_in_a_row_choice(&rows, 1);
        assert_four_in_a_row_choice(&rows, 2);
    }

    #[test]
    fn blocks_the_open_three_instead_of_building_its_own() {
        let rows = [
            "-------",
            "-------",
            "-------",
            "X------",
            "X------",
            "OOO#---",
        ];
        assert_four_in_a_row_choice(&rows, 1);
        assert_four_in_a_row_choice(&rows, 2);
    }

    #[test]
    fn blocks_the_vertical_three() {
        let rows = [
            "-------",
            "-------",
            "#------",
            "O------",
            "O---X--",
            "O--XX--",
        ];
        assert_four_in_a_row_choice(&rows, 1);
    }

    #[test]
    fn blocks_the_vertical_three_in_a_cluttered_position() {
        let rows = [
            "-------",
            "-------",
            "#------",
            "OO-----",
            "OXO----",
            "OXXOXXX",
        ];
        assert_four_in_a_row_choice(&rows, 1);
    }
}

mod tictactoe {
    use super::*;

    #[test]
    fn plays_the_only_remaining_cell() {
        assert_tictactoe_choice(&["#OX", "OXX", "OXO"], 1);
    }

    #[test]
    fn completes_the_left_column() {
        assert_tictactoe_choice(&["#X.", "XOO", "XOO"], 1);
        assert_tictactoe_choice(&["#X.", "XOO", "XOO"], 2);
    }

    #[test]
    fn blocks_the_left_column() {
        assert_tictactoe_choice(&["OX.", "OX.", "#OX"], 1);
    }

    #[test]
    fn completes_the_middle_column() {
        assert_tictactoe_choice(&[".#X", "OX.", "OXO"], 1);
    }

    #[test]
    fn blocks_the_left_column_before_it_closes() {
        assert_tictactoe_choice(&["#.X", "O..", "OX."], 1);
        assert_tictactoe_choice(&["#.X", "O..", "OX."], 2);
    }

    #[test]
    fn blocks_the_rising_diagonal() {
        assert_tictactoe_choice(&["XXO", ".O.", "#OX"], 1);
    }

    #[test]
    fn blocks_the_middle_column() {
        assert_tictactoe_choice(&[".#.", ".O.", ".OX"], 1);
        assert_tictactoe_choice(&[".#.", ".O.", ".OX"], 2);
    }
}
