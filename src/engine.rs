//! Core board engine for the 15-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Move`: the four directions the empty cell can travel.
//! - `Board`: the 4x4 tile arrangement, stored row-major as 16 bytes, with
//!   move legality checks, immutable move application, the solvability
//!   parity test, and seeded scrambling for reproducible puzzle generation.
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Width and height of the puzzle grid. The board is always square.
pub const GRID_SIZE: usize = 4;

/// Number of cells on the board (`GRID_SIZE` squared), including the empty cell.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Cell value that marks the empty space.
pub const EMPTY_CELL: u8 = 0;

/// A direction the empty cell can travel.
///
/// Moves are always described from the empty cell's point of view: `Up`
/// swaps the empty cell with the tile directly above it, `Left` with the
/// tile to its left, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// The empty cell trades places with the tile above it.
    Up,
    /// The empty cell trades places with the tile below it.
    Down,
    /// The empty cell trades places with the tile to its left.
    Left,
    /// The empty cell trades places with the tile to its right.
    Right,
}

impl Move {
    /// All four directions, in the order the search expands them.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Converts the move to its single-letter representation.
    ///
    /// This is the token format the solver binary prints move sequences in.
    ///
    /// # Examples
    ///
    /// ```
    /// use fifteen_solver::engine::Move;
    /// assert_eq!(Move::Up.to_char(), 'U');
    /// assert_eq!(Move::Left.to_char(), 'L');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }

    /// Returns the direction that undoes this one.
    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The 4x4 puzzle board.
///
/// Cells are stored row-major: the tile at row `r`, column `c` lives at flat
/// index `r * GRID_SIZE + c`. A cell value of `EMPTY_CELL` marks the empty
/// space; every other value 1 through 15 appears exactly once.
///
/// A `Board` is never mutated after construction. Applying a move produces a
/// fresh board and leaves the original untouched, so search nodes can keep
/// referring to the states they were created with.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; CELL_COUNT],
}

impl Board {
    /// Creates the goal configuration: tiles 1 through 15 in row-major
    /// order with the empty cell in the bottom-right corner.
    ///
    /// # Examples
    ///
    /// ```
    /// use fifteen_solver::engine::Board;
    /// let goal = Board::solved();
    /// assert_eq!(goal.get_cell(0, 0), 1);
    /// assert_eq!(goal.get_cell(3, 3), 0);
    /// ```
    pub fn solved() -> Self {
        let mut cells = [EMPTY_CELL; CELL_COUNT];
        for (index, cell) in cells.iter_mut().take(CELL_COUNT - 1).enumerate() {
            *cell = (index + 1) as u8;
        }
        Board { cells }
    }

    /// Creates a board from a predefined cell array.
    ///
    /// The caller is responsible for passing a valid configuration (each
    /// value 0 through 15 exactly once); `utils::board_from_str` performs
    /// that validation for external input.
    ///
    /// # Arguments
    /// * `cells`: the 16 tile values in row-major order, 0 for the empty cell.
    pub fn from_cells(cells: [u8; CELL_COUNT]) -> Self {
        Board { cells }
    }

    /// Returns the tile value at the specified row (`r`) and column (`c`).
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the grid (`0 <= r < GRID_SIZE`,
    /// `0 <= c < GRID_SIZE`).
    pub fn get_cell(&self, r: usize, c: usize) -> u8 {
        self.cells[r * GRID_SIZE + c]
    }

    /// Returns an immutable reference to the underlying cell array.
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Returns the flat index of the empty cell.
    pub fn blank_position(&self) -> usize {
        self.cells
            .iter()
            .position(|&value| value == EMPTY_CELL)
            .expect("every valid board holds exactly one empty cell")
    }

    /// Checks whether the empty cell can travel one step in `direction`
    /// without leaving the grid.
    pub fn can_move(&self, direction: Move) -> bool {
        let blank = self.blank_position();
        let row = blank / GRID_SIZE;
        let col = blank % GRID_SIZE;

        match direction {
            Move::Up => row > 0,
            Move::Down => row < GRID_SIZE - 1,
            Move::Left => col > 0,
            Move::Right => col < GRID_SIZE - 1,
        }
    }

    /// Applies a move of the empty cell and returns the resulting board.
    ///
    /// The empty cell trades places with the neighboring tile in the given
    /// direction. This board is left untouched.
    ///
    /// # Arguments
    /// * `direction`: the direction the empty cell should travel.
    ///
    /// # Returns
    /// * `Some(Board)` holding the new configuration.
    /// * `None` if the empty cell sits on the matching edge of the grid,
    ///   making the move illegal.
    ///
    /// # Examples
    ///
    /// ```
    /// use fifteen_solver::engine::{Board, Move};
    /// let goal = Board::solved();
    /// // The empty cell starts in the bottom-right corner.
    /// assert!(goal.apply_move(Move::Down).is_none());
    /// let moved = goal.apply_move(Move::Up).unwrap();
    /// assert_eq!(moved.get_cell(2, 3), 0);
    /// assert_eq!(moved.get_cell(3, 3), 12);
    /// ```
    pub fn apply_move(&self, direction: Move) -> Option<Board> {
        if !self.can_move(direction) {
            return None;
        }

        let blank = self.blank_position();
        let target = match direction {
            Move::Up => blank - GRID_SIZE,
            Move::Down => blank + GRID_SIZE,
            Move::Left => blank - 1,
            Move::Right => blank + 1,
        };

        let mut cells = self.cells;
        cells.swap(blank, target);
        Some(Board { cells })
    }

    /// Checks whether this board equals the goal configuration.
    pub fn is_solved(&self) -> bool {
        *self == Board::solved()
    }

    /// Checks whether this configuration can reach the goal at all.
    ///
    /// For a 4x4 (even-width) board the standard parity rule applies: the
    /// configuration is solvable iff the number of inversions among its
    /// tiles plus the row index of the empty cell is odd. Exactly half of
    /// all permutations pass this test.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.count_inversions();
        let empty_row = self.blank_position() / GRID_SIZE;
        (inversions + empty_row) % 2 == 1
    }

    /// Counts pairs of tiles that appear in the opposite of their goal
    /// order, reading the cells row-major and skipping the empty cell.
    fn count_inversions(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != EMPTY_CELL)
            .map(|(i, &value)| {
                self.cells[i + 1..]
                    .iter()
                    .filter(|&&later| later != EMPTY_CELL && later < value)
                    .count()
            })
            .sum()
    }

    /// Creates a random solvable board by shuffling until the parity test
    /// accepts.
    ///
    /// Generation is deterministic per seed: the same seed always produces
    /// the same board, and different seeds generally produce different ones.
    /// The resulting configuration may sit anywhere in the reachable half of
    /// the state space, so its optimal solution can be long.
    ///
    /// # Arguments
    /// * `seed`: seeds the random number generator.
    pub fn random_solvable(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut cells = Board::solved().cells;

        loop {
            cells.shuffle(&mut rng);
            let board = Board { cells };
            if board.is_solvable() {
                return board;
            }
        }
    }

    /// Creates a board by walking `moves` random legal moves away from the
    /// goal.
    ///
    /// Unlike `random_solvable`, the difficulty is bounded: the optimal
    /// solution is never longer than `moves`. A move that immediately undoes
    /// the previous one is rerolled, so short walks do not collapse straight
    /// back onto the goal. Deterministic per seed.
    ///
    /// # Arguments
    /// * `seed`: seeds the random number generator.
    /// * `moves`: number of legal moves to apply; 0 returns the goal itself.
    pub fn scrambled(seed: u64, moves: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::solved();
        let mut previous: Option<Move> = None;
        let mut applied = 0;

        while applied < moves {
            let direction = Move::ALL[rng.gen_range(0..Move::ALL.len())];
            if previous.map_or(false, |last| direction == last.opposite()) {
                continue;
            }
            if let Some(next) = board.apply_move(direction) {
                board = next;
                previous = Some(direction);
                applied += 1;
            }
        }
        board
    }
}

impl fmt::Display for Board {
    /// Formats the board as a 4x4 grid with two-character-wide cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                write!(f, "{:2} ", self.get_cell(r, c))?;
            }
            if r < GRID_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_board_layout() {
        let goal = Board::solved();
        assert_eq!(
            goal.cells(),
            &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0]
        );
        assert!(goal.is_solved());
        assert_eq!(goal.blank_position(), 15);
    }

    #[test]
    fn test_from_cells_and_get_cell() {
        let board = Board::from_cells([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
        assert_eq!(board.get_cell(0, 0), 0);
        assert_eq!(board.get_cell(0, 3), 3);
        assert_eq!(board.get_cell(3, 3), 15);
        assert_eq!(board.blank_position(), 0);
        assert!(!board.is_solved());
    }

    #[test]
    fn test_move_legality_at_corners() {
        // Empty cell in the top-left corner: only Down and Right are legal.
        let top_left = Board::from_cells([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
        assert!(!top_left.can_move(Move::Up));
        assert!(!top_left.can_move(Move::Left));
        assert!(top_left.can_move(Move::Down));
        assert!(top_left.can_move(Move::Right));

        // Empty cell in the bottom-right corner: only Up and Left are legal.
        let bottom_right = Board::solved();
        assert!(bottom_right.can_move(Move::Up));
        assert!(bottom_right.can_move(Move::Left));
        assert!(!bottom_right.can_move(Move::Down));
        assert!(!bottom_right.can_move(Move::Right));
    }

    #[test]
    fn test_apply_move_swaps_with_neighbor() {
        let goal = Board::solved();

        let up = goal.apply_move(Move::Up).unwrap();
        assert_eq!(up.get_cell(2, 3), 0);
        assert_eq!(up.get_cell(3, 3), 12);

        let left = goal.apply_move(Move::Left).unwrap();
        assert_eq!(left.get_cell(3, 2), 0);
        assert_eq!(left.get_cell(3, 3), 15);
    }

    #[test]
    fn test_apply_move_illegal_returns_none() {
        let goal = Board::solved();
        assert!(goal.apply_move(Move::Down).is_none());
        assert!(goal.apply_move(Move::Right).is_none());
    }

    #[test]
    fn test_apply_move_leaves_original_untouched() {
        let goal = Board::solved();
        let _ = goal.apply_move(Move::Up).unwrap();
        assert!(goal.is_solved(), "applying a move must not mutate the source board");
    }

    #[test]
    fn test_opposite_moves_round_trip() {
        let goal = Board::solved();
        for direction in Move::ALL {
            if let Some(moved) = goal.apply_move(direction) {
                let back = moved.apply_move(direction.opposite()).unwrap();
                assert_eq!(back, goal);
            }
        }
    }

    #[test]
    fn test_move_to_char() {
        assert_eq!(Move::Up.to_char(), 'U');
        assert_eq!(Move::Down.to_char(), 'D');
        assert_eq!(Move::Left.to_char(), 'L');
        assert_eq!(Move::Right.to_char(), 'R');
        assert_eq!(format!("{}", Move::Down), "D");
    }

    #[test]
    fn test_goal_is_solvable() {
        assert!(Board::solved().is_solvable());
    }

    #[test]
    fn test_swapped_tile_pair_is_unsolvable() {
        // Swapping exactly two tiles flips the permutation parity, which is
        // the classic unsolvable variant of the puzzle.
        let board = Board::from_cells([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0]);
        assert!(!board.is_solvable());
    }

    #[test]
    fn test_known_scramble_is_solvable() {
        let board = Board::from_cells([1, 0, 3, 4, 5, 2, 6, 8, 9, 10, 7, 11, 13, 14, 15, 12]);
        assert!(board.is_solvable());
    }

    #[test]
    fn test_random_solvable_determinism() {
        let seed = 123;
        let board1 = Board::random_solvable(seed);
        let board2 = Board::random_solvable(seed);
        assert_eq!(board1, board2, "boards with the same seed must be identical");

        let board3 = Board::random_solvable(seed + 1);
        assert_ne!(board1, board3, "boards with different seeds should differ");
    }

    #[test]
    fn test_random_solvable_is_valid_permutation() {
        let board = Board::random_solvable(7);
        assert!(board.is_solvable());

        let mut sorted = *board.cells();
        sorted.sort_unstable();
        let expected: Vec<u8> = (0..CELL_COUNT as u8).collect();
        assert_eq!(sorted.to_vec(), expected, "each value 0-15 must appear exactly once");
    }

    #[test]
    fn test_scrambled_walk_length_zero_is_goal() {
        assert!(Board::scrambled(42, 0).is_solved());
    }

    #[test]
    fn test_scrambled_walk_stays_solvable() {
        let board = Board::scrambled(42, 25);
        assert!(board.is_solvable(), "legal moves preserve solvability");
        assert!(!board.is_solved(), "a 25-move walk with no backtracking leaves the goal");
    }

    #[test]
    fn test_display_formatting() {
        let rendered = format!("{}", Board::solved());
        assert_eq!(
            rendered,
            " 1  2  3  4 \n 5  6  7  8 \n 9 10 11 12 \n13 14 15  0 "
        );
    }
}
