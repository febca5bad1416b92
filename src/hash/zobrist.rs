//! The global Zobrist key table and the hasher built on top of it.
//!
//! Keys are generated once, from a fixed seed, and shared by every
//! [`ZobristHasher`] in the process — two hashers always agree on the hash
//! of the same position.

use once_cell::sync::OnceCell;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::board::{Board, Color, PieceType};

/// Fixed seed for the key table. Deliberately not configurable: hash
/// stability across runs (and across processes comparing notes) matters
/// more than key unpredictability here.
const ZOBRIST_SEED: u64 = 42;

const NUM_PIECE_TYPES: usize = 6;
const NUM_COLORS: usize = 2;

struct ZobristKeys {
    piece: [[[[u64; 8]; 8]; NUM_COLORS]; NUM_PIECE_TYPES],
    side_to_move: u64,
    castling: [u64; 4],
    en_passant_file: [u64; 8],
}

impl ZobristKeys {
    fn generate() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

        let mut piece = [[[[0u64; 8]; 8]; NUM_COLORS]; NUM_PIECE_TYPES];
        for type_table in piece.iter_mut() {
            for color_table in type_table.iter_mut() {
                for row in color_table.iter_mut() {
                    for key in row.iter_mut() {
                        *key = rng.random();
                    }
                }
            }
        }

        let side_to_move = rng.random();
        let mut castling = [0u64; 4];
        for key in castling.iter_mut() {
            *key = rng.random();
        }
        let mut en_passant_file = [0u64; 8];
        for key in en_passant_file.iter_mut() {
            *key = rng.random();
        }

        ZobristKeys {
            piece,
            side_to_move,
            castling,
            en_passant_file,
        }
    }
}

fn keys() -> &'static ZobristKeys {
    static KEYS: OnceCell<ZobristKeys> = OnceCell::new();
    KEYS.get_or_init(ZobristKeys::generate)
}

fn piece_type_index(kind: PieceType) -> usize {
    match kind {
        PieceType::Pawn => 0,
        PieceType::Knight => 1,
        PieceType::Bishop => 2,
        PieceType::Rook => 3,
        PieceType::Queen => 4,
        PieceType::King => 5,
    }
}

fn color_index(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => 1,
    }
}

/// Computes Zobrist hashes for board positions. Stateless: every instance
/// reads from the same process-wide key table, so hashes are comparable
/// across instances.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZobristHasher;

impl ZobristHasher {
    pub fn new() -> Self {
        ZobristHasher
    }

    /// Hashes `board` from scratch: every occupied square, the side to
    /// move, the active castling rights, and the en-passant file if any.
    pub fn hash_position(&self, board: &Board) -> u64 {
        let keys = keys();
        let mut hash = 0u64;

        for row in 0..8i32 {
            for col in 0..8i32 {
                if let Some(piece) = board.piece_at(row, col) {
                    hash ^= keys.piece[piece_type_index(piece.kind)][color_index(piece.color)]
                        [row as usize][col as usize];
                }
            }
        }

        if board.side_to_move == Color::Black {
            hash ^= keys.side_to_move;
        }

        for bit in board.castling_rights().active_bits() {
            hash ^= keys.castling[bit];
        }

        if let Some(target) = board.en_passant_target() {
            hash ^= keys.en_passant_file[target.col];
        }

        hash
    }
}
