//! Input parsing and validation for starting configurations.

use crate::engine::{Board, CELL_COUNT};

/// Parses a whitespace-separated list of 16 tile values into a `Board`.
///
/// The input must contain exactly 16 tokens, each an integer between 0 and
/// 15, with no value repeated; 0 marks the empty cell. This is the complete
/// input contract the search engine assumes, so any board accepted here is
/// safe to hand to `solver::search`.
///
/// # Arguments
/// * `input`: the raw configuration line, e.g. as read from the console or
///   a board file. Leading, trailing and repeated whitespace is ignored.
///
/// # Returns
/// * `Ok(Board)` when the input satisfies the contract.
/// * `Err(String)` naming the first violated rule: nothing entered, wrong
///   token count, a non-integer token, a value out of range, or a duplicate
///   value.
///
/// # Examples
/// ```
/// use fifteen_solver::utils::board_from_str;
///
/// let board = board_from_str("1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 0").unwrap();
/// assert!(board.is_solved());
///
/// assert!(board_from_str("1 2 3").is_err());
/// assert!(board_from_str("1 1 3 4 5 6 7 8 9 10 11 12 13 14 15 0").is_err());
/// ```
pub fn board_from_str(input: &str) -> Result<Board, String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    if tokens.is_empty() {
        return Err("Nothing entered".to_string());
    }

    if tokens.len() != CELL_COUNT {
        return Err(format!(
            "There must be {} entries, found {}",
            CELL_COUNT,
            tokens.len()
        ));
    }

    let mut cells = [0u8; CELL_COUNT];
    let mut seen = [false; CELL_COUNT];

    for (i, token) in tokens.iter().enumerate() {
        let value: i32 = token
            .parse()
            .map_err(|_| format!("Invalid number entered: '{}'", token))?;

        if value < 0 || value >= CELL_COUNT as i32 {
            return Err(format!("Number out of range: {}", value));
        }
        if seen[value as usize] {
            return Err(format!("Duplicate entry: {}", value));
        }

        seen[value as usize] = true;
        cells[i] = value as u8;
    }

    Ok(Board::from_cells(cells))
}
