//! Minimax search with alpha-beta pruning.
//!
//! Two mutually recursive evaluators, [`maximize`] for X and [`minimize`] for
//! O, each returning a `(value, move)` pair. Every node only carries the one
//! bound its parent can use: the maximizer receives the minimizer's running
//! value as `beta`, the minimizer receives the maximizer's running value as
//! `alpha`. The root call is unconstrained, so its value is always the exact
//! minimax value of the position.
//!
//! Values are utilities from X's perspective (-1, 0, +1). Ties keep the first
//! move in row-major order because a move only replaces the running best on
//! strict improvement.

use crate::rules;
use crate::types::{Board, Move, Player};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bound above any utility.
const POS_INF: i8 = 2;
/// Bound below any utility.
const NEG_INF: i8 = -2;

/// Counters gathered during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, the root included.
    pub nodes: u64,
    /// Times a node stopped early because its bound was reached.
    pub cutoffs: u64,
}

/// Outcome of searching one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct SearchReport {
    value: i8,
    best_move: Option<Move>,
    stats: SearchStats,
}

impl SearchReport {
    /// Exact minimax value of the searched position, from X's perspective.
    pub fn value(&self) -> i8 {
        self.value
    }

    /// The chosen move, `None` when the position is terminal.
    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }

    /// Node and cut-off counts.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Searches `board` for the player to move with a full window.
///
/// Terminal boards report their utility and no move.
#[instrument(skip(board), fields(board = %board.encode()))]
pub fn search(board: &Board) -> SearchReport {
    let mut stats = SearchStats::default();
    let to_move = rules::current_player(board);
    let (value, best_move) = match to_move {
        Player::X => max_node(board, POS_INF, &mut stats),
        Player::O => min_node(board, NEG_INF, &mut stats),
    };

    debug!(
        %to_move,
        value,
        best_move = ?best_move,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "Search complete"
    );
    SearchReport::new(value, best_move, stats)
}

/// Returns the optimal move for the player to move, or `None` if the game is over.
#[instrument(skip(board), fields(board = %board.encode()))]
pub fn minimax(board: &Board) -> Option<Move> {
    if rules::is_terminal(board) {
        return None;
    }
    search(board).best_move()
}

/// Recommended move for an automated player; `None` once the game is over.
pub fn best_move(board: &Board) -> Option<Move> {
    minimax(board)
}

/// X-to-move evaluator.
///
/// Stops as soon as the running best reaches `beta`: the calling minimizer
/// already holds something at least as good for O.
pub fn maximize(board: &Board, beta: i8) -> (i8, Option<Move>) {
    max_node(board, beta, &mut SearchStats::default())
}

/// O-to-move evaluator.
///
/// Stops as soon as `alpha` reaches the running value: the calling maximizer
/// already holds something at least as good for X.
pub fn minimize(board: &Board, alpha: i8) -> (i8, Option<Move>) {
    min_node(board, alpha, &mut SearchStats::default())
}

fn max_node(board: &Board, beta: i8, stats: &mut SearchStats) -> (i8, Option<Move>) {
    stats.nodes += 1;
    if rules::is_terminal(board) {
        return (rules::utility(board), None);
    }

    let mut best = NEG_INF;
    let mut chosen = None;
    for mv in rules::legal_moves(board) {
        if best >= beta {
            stats.cutoffs += 1;
            return (best, chosen);
        }
        let (value, _) = min_node(&rules::place(board, mv), best, stats);
        if value > best {
            best = value;
            chosen = Some(mv);
        }
    }
    (best, chosen)
}

fn min_node(board: &Board, alpha: i8, stats: &mut SearchStats) -> (i8, Option<Move>) {
    stats.nodes += 1;
    if rules::is_terminal(board) {
        return (rules::utility(board), None);
    }

    let mut best = POS_INF;
    let mut chosen = None;
    for mv in rules::legal_moves(board) {
        if alpha >= best {
            stats.cutoffs += 1;
            return (best, chosen);
        }
        let (value, _) = max_node(&rules::place(board, mv), best, stats);
        if value < best {
            best = value;
            chosen = Some(mv);
        }
    }
    (best, chosen)
}

/// Plain minimax value with no pruning.
///
/// Visits the whole subtree; kept as the reference the pruned search must agree with.
#[instrument(skip(board), fields(board = %board.encode()))]
pub fn exhaustive_value(board: &Board) -> i8 {
    fn value(board: &Board) -> i8 {
        if rules::is_terminal(board) {
            return rules::utility(board);
        }
        let children = rules::legal_moves(board)
            .into_iter()
            .map(|mv| value(&rules::place(board, mv)));
        match rules::current_player(board) {
            Player::X => children.max().unwrap_or(NEG_INF),
            Player::O => children.min().unwrap_or(POS_INF),
        }
    }
    value(board)
}

/// Exact value of every legal move, in row-major order.
///
/// Empty when the board is terminal.
#[instrument(skip(board), fields(board = %board.encode()))]
pub fn move_values(board: &Board) -> Vec<(Move, i8)> {
    if rules::is_terminal(board) {
        return Vec::new();
    }
    rules::legal_moves(board)
        .into_iter()
        .map(|mv| (mv, search(&rules::place(board, mv)).value()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = board("XX./OO./...");
        assert_eq!(best_move(&board), Move::new(0, 2));

        let after = rules::apply_move(&board, Move::new(0, 2).unwrap()).unwrap();
        assert!(rules::is_terminal(&after));
        assert_eq!(rules::utility(&after), 1);
    }

    #[test]
    fn test_o_takes_immediate_win() {
        // Both sides threaten a row, but O moves first.
        let board = board("XX./OO./X..");
        assert_eq!(rules::current_player(&board), Player::O);
        assert_eq!(best_move(&board), Move::new(1, 2));
        assert_eq!(search(&board).value(), -1);
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // X threatens the top row; O must block at (0, 2).
        let board = board("XX./.O./...");
        assert_eq!(best_move(&board), Move::new(0, 2));
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let won = board("XXX/OO./...");
        assert_eq!(minimax(&won), None);
        assert_eq!(best_move(&won), None);

        let report = search(&won);
        assert_eq!(report.value(), 1);
        assert_eq!(report.best_move(), None);
        assert_eq!(report.stats().nodes, 1);
        assert!(move_values(&won).is_empty());
    }

    #[test]
    fn test_empty_board_is_a_draw_and_opens_in_the_corner() {
        let report = search(&Board::new());
        assert_eq!(report.value(), 0);
        // Every opening draws; the first in row-major order is kept.
        assert_eq!(report.best_move(), Move::new(0, 0));
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let report = search(&Board::new());
        assert!(report.stats().cutoffs > 0);
        // The full game tree has 549_946 nodes.
        assert!(report.stats().nodes < 549_946);
    }

    #[test]
    fn test_exhaustive_value_of_empty_board() {
        assert_eq!(exhaustive_value(&Board::new()), 0);
    }

    #[test]
    fn test_move_values_mark_losing_moves() {
        // X threatens the top row, so every O reply except the block loses.
        let board = board("XX./.O./...");
        let values = move_values(&board);
        assert_eq!(values.len(), 6);
        assert_eq!(values[0].0, Move::new(0, 2).unwrap());
        for (_, value) in &values[1..] {
            assert_eq!(*value, 1);
        }
        let best = values.iter().map(|(_, v)| *v).min();
        assert_eq!(best, Some(search(&board).value()));
    }

    #[test]
    fn test_root_windows_are_unconstrained() {
        let board = board("XX./OO./...");
        assert_eq!(maximize(&board, POS_INF), (1, Move::new(0, 2)));

        let board = board_after_x_opening();
        let (value, mv) = minimize(&board, NEG_INF);
        assert_eq!(value, 0);
        assert!(mv.is_some());
    }

    fn board_after_x_opening() -> Board {
        rules::apply_move(&Board::new(), Move::new(1, 1).unwrap()).unwrap()
    }

    #[test]
    fn test_maximize_cuts_off_at_beta() {
        // X has an immediate win at (0, 2); with beta = 1 nothing after it is explored.
        let board = board("XX./OO./...");
        let mut stats = SearchStats::default();
        let (value, mv) = max_node(&board, 1, &mut stats);
        assert_eq!((value, mv), (1, Move::new(0, 2)));
        assert_eq!(stats.cutoffs, 1);
        assert_eq!(stats.nodes, 2);
    }
}
