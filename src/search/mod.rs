//! Move search: alpha-beta negamax with iterative deepening, backed by a
//! transposition table.

pub mod engine;
pub mod tt;

pub use engine::{Engine, SearchStats};
pub use tt::{Bound, TranspositionTable};
