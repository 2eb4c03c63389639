//! Admissible heuristics for the A* search.
//!
//! Both estimates are pure functions of a board: they never overestimate the
//! true number of moves remaining to the goal, which is what lets the search
//! return shortest solutions. A misplaced tile needs at least one move to
//! reach its cell, and no move brings a tile closer to its cell than one
//! Manhattan step, so both bounds hold for every reachable configuration.

use crate::engine::{Board, CELL_COUNT, EMPTY_CELL, GRID_SIZE};
use clap::ValueEnum;
use std::fmt;

/// Selects which admissible estimate the search engine uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Heuristic {
    /// Count of non-empty tiles sitting on the wrong cell.
    MisplacedTiles,
    /// Sum of every tile's row and column distance from its goal cell.
    ManhattanDistance,
}

impl Heuristic {
    /// Evaluates this heuristic for `board` relative to `goal`.
    ///
    /// The Manhattan variant derives each tile's goal cell from the tile
    /// value itself and therefore ignores `goal`; it is still passed so both
    /// variants share one call site in the search engine.
    pub fn evaluate(&self, board: &Board, goal: &Board) -> u32 {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles(board, goal),
            Heuristic::ManhattanDistance => manhattan_distance(board),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heuristic::MisplacedTiles => "Misplaced Tiles",
            Heuristic::ManhattanDistance => "Manhattan Distance",
        };
        write!(f, "{}", name)
    }
}

/// Counts the tiles that are not on their goal cell.
///
/// The empty cell is never counted, even when it is away from its goal
/// position: moving it costs nothing on its own, and counting it would break
/// admissibility.
///
/// # Arguments
/// * `board`: the configuration to evaluate.
/// * `goal`: the configuration the count is taken against.
///
/// # Returns
/// The number of misplaced tiles, between 0 and 15.
pub fn misplaced_tiles(board: &Board, goal: &Board) -> u32 {
    let mut misplaced = 0;
    for i in 0..CELL_COUNT {
        let tile = board.cells()[i];
        if tile != EMPTY_CELL && tile != goal.cells()[i] {
            misplaced += 1;
        }
    }
    misplaced
}

/// Sums every tile's Manhattan distance to its goal cell.
///
/// Tile `t` belongs on flat index `t - 1`, so its goal row and column fall
/// straight out of the tile value. The empty cell is skipped.
///
/// # Arguments
/// * `board`: the configuration to evaluate.
///
/// # Returns
/// The total row-plus-column distance over all fifteen tiles.
pub fn manhattan_distance(board: &Board) -> u32 {
    let mut distance = 0u32;
    for (i, &tile) in board.cells().iter().enumerate() {
        if tile == EMPTY_CELL {
            continue;
        }
        let goal_index = (tile - 1) as usize;
        let vertical = (goal_index / GRID_SIZE).abs_diff(i / GRID_SIZE);
        let horizontal = (goal_index % GRID_SIZE).abs_diff(i % GRID_SIZE);
        distance += (vertical + horizontal) as u32;
    }
    distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Move;

    #[test]
    fn test_both_heuristics_zero_at_goal() {
        let goal = Board::solved();
        assert_eq!(misplaced_tiles(&goal, &goal), 0);
        assert_eq!(manhattan_distance(&goal), 0);
    }

    #[test]
    fn test_misplaced_tiles_counts_wrong_cells_only() {
        let goal = Board::solved();
        // Five tiles (2, 6, 7, 11, 12) are off their cells; the empty cell
        // is also displaced but must not be counted.
        let board = Board::from_cells([1, 0, 3, 4, 5, 2, 6, 8, 9, 10, 7, 11, 13, 14, 15, 12]);
        assert_eq!(misplaced_tiles(&board, &goal), 5);
    }

    #[test]
    fn test_manhattan_distance_known_value() {
        // Each of the five displaced tiles is exactly one step from home.
        let board = Board::from_cells([1, 0, 3, 4, 5, 2, 6, 8, 9, 10, 7, 11, 13, 14, 15, 12]);
        assert_eq!(manhattan_distance(&board), 5);
    }

    #[test]
    fn test_manhattan_distance_far_tile() {
        // Tile 1 in the bottom-right corner is three rows and three columns
        // from its cell; every other tile shifted one cell forward.
        let board = Board::from_cells([2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0, 1]);
        let expected_for_tile_one = 6;
        assert!(manhattan_distance(&board) >= expected_for_tile_one);
    }

    #[test]
    fn test_single_move_costs_at_most_one() {
        // One legal move displaces exactly one tile by one cell, so both
        // estimates on the result are at most 1.
        let goal = Board::solved();
        for direction in Move::ALL {
            if let Some(board) = goal.apply_move(direction) {
                assert!(misplaced_tiles(&board, &goal) <= 1);
                assert!(manhattan_distance(&board) <= 1);
            }
        }
    }

    #[test]
    fn test_evaluate_dispatches_to_both_variants() {
        let goal = Board::solved();
        let board = Board::from_cells([1, 0, 3, 4, 5, 2, 6, 8, 9, 10, 7, 11, 13, 14, 15, 12]);
        assert_eq!(
            Heuristic::MisplacedTiles.evaluate(&board, &goal),
            misplaced_tiles(&board, &goal)
        );
        assert_eq!(
            Heuristic::ManhattanDistance.evaluate(&board, &goal),
            manhattan_distance(&board)
        );
    }

    #[test]
    fn test_heuristic_display_names() {
        assert_eq!(format!("{}", Heuristic::MisplacedTiles), "Misplaced Tiles");
        assert_eq!(format!("{}", Heuristic::ManhattanDistance), "Manhattan Distance");
    }
}
