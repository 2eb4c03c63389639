//! A* best-first search engine for the 15-puzzle.
//!
//! Every node created during a run lives in an arena (a plain `Vec`), and
//! nodes refer to their parent by arena index. The ancestor chain therefore
//! stays walkable for path reconstruction without any node owning another,
//! and the whole run's memory is released at once when the arena drops.
//!
//! Each call to `search` builds its own arena, frontier and visited set;
//! nothing survives between runs, so back-to-back searches over the same
//! input are fully independent and deterministic.

use crate::engine::{Board, Move};
use crate::heuristics::Heuristic;
use std::collections::HashSet;
use std::mem;
use std::time::{Duration, Instant};

/// One state reached during the search.
#[derive(Clone, Debug)]
struct SearchNode {
    /// The board configuration this node represents.
    board: Board,
    /// Arena index of the node this one was generated from; `None` for the root.
    parent: Option<usize>,
    /// The direction the empty cell moved to produce `board` from the
    /// parent's state; `None` for the root, which terminates the path walk.
    generated_by: Option<Move>,
    /// Number of moves from the root to this node (g).
    cost_so_far: u32,
    /// Admissible estimate of the moves remaining (h), evaluated exactly
    /// once when the node is built and never recomputed.
    heuristic_cost: u32,
}

impl SearchNode {
    fn new(
        board: Board,
        parent: Option<usize>,
        generated_by: Option<Move>,
        cost_so_far: u32,
        heuristic_cost: u32,
    ) -> Self {
        SearchNode {
            board,
            parent,
            generated_by,
            cost_so_far,
            heuristic_cost,
        }
    }

    /// Frontier ordering key (f = g + h).
    fn total_cost(&self) -> u32 {
        self.cost_so_far + self.heuristic_cost
    }
}

/// The discovered-but-not-yet-expanded nodes, kept sorted by total cost.
///
/// Holds arena indices rather than nodes. Insertion places the new index
/// immediately before the first entry with a strictly greater total cost,
/// so entries with equal cost keep their insertion order. A binary heap
/// would need an explicit insertion-order key to preserve that FIFO
/// tie-break; at this state-space scale the linear scan is sufficient.
struct Frontier {
    queue: Vec<usize>,
}

impl Frontier {
    fn new() -> Self {
        Frontier { queue: Vec::new() }
    }

    /// Returns the index of the lowest-cost node without removing it.
    fn peek(&self) -> Option<usize> {
        self.queue.first().copied()
    }

    /// Removes and returns the index of the lowest-cost node.
    fn pop_front(&mut self) -> Option<usize> {
        if self.queue.is_empty() {
            None
        } else {
            Some(self.queue.remove(0))
        }
    }

    /// Inserts `index` while keeping the queue sorted by ascending total
    /// cost, after every already-queued node of the same cost.
    fn insert_sorted(&mut self, arena: &[SearchNode], index: usize) {
        let cost = arena[index].total_cost();
        let position = self
            .queue
            .iter()
            .position(|&queued| cost < arena[queued].total_cost())
            .unwrap_or(self.queue.len());
        self.queue.insert(position, index);
    }
}

/// Outcome and statistics of one search run.
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// The move sequence from the initial configuration to the goal, in
    /// order of application. `None` means the frontier emptied without ever
    /// reaching the goal, which for this puzzle only happens when the
    /// initial configuration has the wrong permutation parity.
    pub solution: Option<Vec<Move>>,
    /// Number of nodes examined at the front of the frontier, the final
    /// goal examination included. A search whose initial configuration
    /// already equals the goal reports 1.
    pub nodes_expanded: usize,
    /// Wall-clock time the run took.
    pub elapsed: Duration,
    /// Rough memory footprint: expansion count times the in-memory size of
    /// one search node.
    pub estimated_memory_bytes: usize,
}

/// Runs A* from `initial` toward `goal` with the chosen heuristic.
///
/// Each iteration examines the frontier's lowest estimated-total-cost node:
/// the goal test happens against that front node before it is expanded, so
/// a goal-matching child waits in the frontier until every cheaper node has
/// been ruled out. Together with the admissible heuristics this guarantees
/// the returned move sequence is a shortest one.
///
/// `initial` must satisfy the input contract (each value 0 through 15
/// exactly once); `utils::board_from_str` produces such boards from raw
/// text. Configurations with the wrong parity are legitimate input and
/// yield a report with no solution rather than an error.
///
/// # Arguments
/// * `goal`: the configuration the search is aiming for.
/// * `initial`: the validated starting configuration.
/// * `heuristic`: which admissible estimate to apply to every created node.
///
/// # Returns
/// A `SearchReport` carrying the move sequence (if the goal was reached)
/// and the run's expansion count, elapsed time, and estimated memory use.
///
/// # Examples
///
/// ```
/// use fifteen_solver::engine::Board;
/// use fifteen_solver::heuristics::Heuristic;
/// use fifteen_solver::solver::search;
///
/// let goal = Board::solved();
/// let initial = goal.clone();
/// let report = search(&goal, &initial, Heuristic::ManhattanDistance);
/// assert_eq!(report.solution, Some(vec![]));
/// assert_eq!(report.nodes_expanded, 1);
/// ```
pub fn search(goal: &Board, initial: &Board, heuristic: Heuristic) -> SearchReport {
    let start = Instant::now();

    let mut arena = Vec::new();
    arena.push(SearchNode::new(
        initial.clone(),
        None,
        None,
        0,
        heuristic.evaluate(initial, goal),
    ));

    let mut visited = HashSet::new();
    visited.insert(initial.clone());

    let mut frontier = Frontier::new();
    frontier.insert_sorted(&arena, 0);

    let mut nodes_expanded = 0;
    let mut goal_index = None;

    while let Some(front) = frontier.peek() {
        nodes_expanded += 1;

        if arena[front].board == *goal {
            goal_index = Some(front);
            break;
        }

        expand(front, goal, heuristic, &mut arena, &mut visited, &mut frontier);
        frontier.pop_front();
    }

    SearchReport {
        solution: goal_index.map(|index| path_from_root(&arena, index)),
        nodes_expanded,
        elapsed: start.elapsed(),
        estimated_memory_bytes: nodes_expanded * mem::size_of::<SearchNode>(),
    }
}

/// Generates every legal successor of the node at `parent_index`, skipping
/// configurations already enqueued once, and inserts the rest into the
/// frontier as freshly created nodes.
fn expand(
    parent_index: usize,
    goal: &Board,
    heuristic: Heuristic,
    arena: &mut Vec<SearchNode>,
    visited: &mut HashSet<Board>,
    frontier: &mut Frontier,
) {
    let child_cost = arena[parent_index].cost_so_far + 1;

    for direction in Move::ALL {
        if let Some(next_board) = arena[parent_index].board.apply_move(direction) {
            // A configuration enqueued once was reached at least as cheaply
            // before; `insert` returning false means exactly that.
            if !visited.insert(next_board.clone()) {
                continue;
            }

            let heuristic_cost = heuristic.evaluate(&next_board, goal);
            arena.push(SearchNode::new(
                next_board,
                Some(parent_index),
                Some(direction),
                child_cost,
                heuristic_cost,
            ));
            let child_index = arena.len() - 1;
            frontier.insert_sorted(arena, child_index);
        }
    }
}

/// Walks parent links from the goal node back to the root and returns the
/// recorded moves in root-to-goal order. The root's missing move ends the
/// walk.
fn path_from_root(arena: &[SearchNode], goal_index: usize) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut current = goal_index;

    while let Some(direction) = arena[current].generated_by {
        moves.push(direction);
        current = arena[current]
            .parent
            .expect("a generated node always records its parent");
    }

    moves.reverse();
    moves
}
