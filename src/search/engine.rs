//! Negamax search with alpha-beta pruning, iterative deepening, and a
//! transposition table.

use std::time::{Duration, Instant};

use tracing::info;

use crate::board::{Board, Color, Move};
use crate::eval::Evaluator;
use crate::hash::ZobristHasher;

use super::tt::{Bound, TranspositionTable};

/// Score (in the engine's centipawn units) assigned to a detected
/// checkmate, before the per-ply adjustment that prefers faster mates.
const MATE_SCORE: i32 = 100_000;

/// Counters describing the most recent search, exposed for diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    pub nodes_searched: u64,
    pub cutoffs: u64,
    pub tt_hits: u64,
    pub time_elapsed: Duration,
}

impl SearchStats {
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.time_elapsed.as_secs_f64();
        if secs > 0.0 {
            self.nodes_searched as f64 / secs
        } else {
            0.0
        }
    }
}

/// Drives the search: evaluator, hasher, transposition table, and the
/// bookkeeping needed for a single time-budgeted call to [`Engine::search`].
pub struct Engine {
    evaluator: Evaluator,
    hasher: ZobristHasher,
    tt: TranspositionTable,
    nodes_searched: u64,
    cutoffs: u64,
    tt_hits: u64,
    start: Instant,
    deadline: Instant,
}

impl Engine {
    pub fn new(tt_size_mb: usize) -> Self {
        Engine {
            evaluator: Evaluator::new(),
            hasher: ZobristHasher::new(),
            tt: TranspositionTable::new(tt_size_mb),
            nodes_searched: 0,
            cutoffs: 0,
            tt_hits: 0,
            start: Instant::now(),
            deadline: Instant::now(),
        }
    }

    pub fn clear_transposition_table(&mut self) {
        self.tt.clear();
    }

    /// Diagnostic counters for the most recently started `search` call,
    /// including wall-clock time elapsed since it began.
    pub fn statistics(&self) -> SearchStats {
        SearchStats {
            nodes_searched: self.nodes_searched,
            cutoffs: self.cutoffs,
            tt_hits: self.tt_hits,
            time_elapsed: self.start.elapsed(),
        }
    }

    /// Iterative deepening from depth 1 up to `max_depth`, stopping early
    /// once `max_time` has elapsed or a forced mate has been found.
    /// Returns the best move found at the deepest completed iteration
    /// (`None` if there are no legal moves at all) and its score.
    pub fn search(
        &mut self,
        board: &Board,
        max_depth: u32,
        max_time: Duration,
    ) -> (Option<Move>, i32) {
        self.nodes_searched = 0;
        self.cutoffs = 0;
        self.tt_hits = 0;
        self.start = Instant::now();
        self.deadline = self.start + max_time;

        let mut best_move = None;
        let mut best_score = i32::MIN;

        for depth in 1..=max_depth {
            if Instant::now() >= self.deadline {
                break;
            }

            let (current_move, current_score) = self.search_root(board, depth);

            if let Some(mv) = current_move {
                best_move = Some(mv);
                best_score = current_score;

                let stats = self.statistics();
                info!(
                    depth,
                    score = current_score,
                    nodes = self.nodes_searched,
                    nps = stats.nodes_per_second() as u64,
                    time_s = stats.time_elapsed.as_secs_f64(),
                    "completed iterative-deepening iteration"
                );
            }

            if current_score.abs() > 90_000 {
                break;
            }
        }

        (best_move, best_score)
    }

    fn search_root(&mut self, board: &Board, depth: u32) -> (Option<Move>, i32) {
        let mut legal_moves = board.generate_moves(board.side_to_move);
        if legal_moves.is_empty() {
            return (None, 0);
        }

        self.order_moves(board, &mut legal_moves, None);

        let mut best_move = None;
        let mut best_score = i32::MIN;
        let mut alpha = i32::MIN + 1;
        let beta = i32::MAX;

        for mv in legal_moves {
            if Instant::now() >= self.deadline {
                break;
            }

            let mut next = board.copy();
            next.make_move(mv);

            let score = -self.alpha_beta(&next, depth - 1, -beta, -alpha, board.side_to_move.opposite());

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        }

        let hash = self.hasher.hash_position(board);
        self.tt.store(hash, depth, best_score, Bound::Exact, best_move);

        (best_move, best_score)
    }

    fn alpha_beta(&mut self, board: &Board, depth: u32, mut alpha: i32, beta: i32, color: Color) -> i32 {
        self.nodes_searched += 1;

        if Instant::now() >= self.deadline {
            return 0;
        }

        let hash = self.hasher.hash_position(board);
        let probed = self.tt.probe(hash, depth, alpha, beta);
        if let Some((Some(score), _)) = probed {
            self.tt_hits += 1;
            return score;
        }

        if depth == 0 {
            let eval = self.evaluator.evaluate(board);
            return if color == Color::White { eval } else { -eval };
        }

        let mut legal_moves = board.generate_moves(color);
        if legal_moves.is_empty() {
            return if board.is_checkmate(color) {
                -MATE_SCORE - depth as i32
            } else {
                0
            };
        }

        let hash_move = probed.and_then(|(_, mv)| mv);
        self.order_moves(board, &mut legal_moves, hash_move);

        let original_alpha = alpha;
        let mut best_score = i32::MIN;
        let mut best_move = None;

        for mv in legal_moves {
            let mut next = board.copy();
            next.make_move(mv);

            let score = -self.alpha_beta(&next, depth - 1, -beta, -alpha, color.opposite());

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }

            alpha = alpha.max(score);
            if alpha >= beta {
                self.cutoffs += 1;
                break;
            }
        }

        let bound = if best_score <= original_alpha {
            Bound::UpperBound
        } else if best_score >= beta {
            Bound::LowerBound
        } else {
            Bound::Exact
        };
        self.tt.store(hash, depth, best_score, bound, best_move);

        best_score
    }

    fn order_moves(&self, board: &Board, moves: &mut [Move], hash_move: Option<Move>) {
        let mut priorities: Vec<(Move, i32)> = moves
            .iter()
            .map(|&mv| {
                let mut priority = self.evaluator.evaluate_move_priority(board, mv);
                if Some(mv) == hash_move {
                    priority += 1_000_000;
                }
                (mv, priority)
            })
            .collect();

        priorities.sort_by(|a, b| b.1.cmp(&a.1));
        for (slot, (mv, _)) in moves.iter_mut().zip(priorities) {
            *slot = mv;
        }
    }
}
