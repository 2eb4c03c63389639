//! # 15-Puzzle A* Solver Library
//!
//! This library provides the board mechanics for the classic 4x4 sliding
//! tile puzzle and an A* best-first solver that compares two admissible
//! heuristics: misplaced-tile count and Manhattan distance.
//!
//! It is used by two binaries:
//! - `astar_solver`: reads a starting configuration (from a file or the
//!   console), validates it, runs the search once per heuristic, and prints
//!   the move sequence together with node, timing and memory statistics.
//! - `puzzle_generator`: emits random solvable starting configurations in
//!   the exact token format `astar_solver` accepts.
//!
//! ## Modules
//! - `engine`: the board representation (`Board`), the empty-cell move
//!   directions (`Move`), move legality and application, the solvability
//!   parity test, and seeded scrambling.
//! - `heuristics`: the two admissible lower-bound estimates and the
//!   `Heuristic` selector used to pick between them.
//! - `solver`: the `search` entry point and the `SearchReport` it returns.
//! - `utils`: parsing and validation of configuration input.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;
