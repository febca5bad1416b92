//! Pseudo-legal move generation and the legality filter that turns it into
//! fully legal moves.

use super::{Board, Color, Piece, PieceType, Square};
use crate::board::Move;

/// Pseudo-legal moves for `color`, filtered down to those that do not leave
/// `color`'s own king attacked afterward.
pub fn generate_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let pseudo = generate_pseudo_legal_moves(board, color);
    pseudo
        .into_iter()
        .filter(|&mv| {
            let mut copy = board.copy();
            copy.make_move(mv);
            let king = copy.king_square(color);
            !copy.is_square_attacked(king.row as i32, king.col as i32, color.opposite())
        })
        .collect()
}

fn generate_pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in 0..8usize {
        for col in 0..8usize {
            let Some(piece) = board.piece_at(row as i32, col as i32) else {
                continue;
            };
            if piece.color != color {
                continue;
            }
            let from = Square::new(row, col);
            match piece.kind {
                PieceType::Pawn => pawn_moves(board, from, piece, &mut moves),
                PieceType::Knight => knight_moves(board, from, piece, &mut moves),
                PieceType::Bishop => slider_moves(board, from, piece, &DIAGONAL, &mut moves),
                PieceType::Rook => slider_moves(board, from, piece, &ORTHOGONAL, &mut moves),
                PieceType::Queen => slider_moves(board, from, piece, &ALL_DIRECTIONS, &mut moves),
                PieceType::King => king_moves(board, from, piece, &mut moves),
            }
        }
    }
    moves
}

const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const ALL_DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

fn pawn_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let (dir, start_row): (i32, usize) = match piece.color {
        Color::White => (-1, 6),
        Color::Black => (1, 1),
    };
    let row = from.row as i32;
    let col = from.col as i32;

    // Single push.
    let one = row + dir;
    if board.piece_at(one, col).is_none() {
        out.push(Move::new(from, Square::new(one as usize, col as usize)));

        // Double push from the start row, only if both squares are clear.
        if from.row == start_row {
            let two = row + 2 * dir;
            if board.piece_at(two, col).is_none() {
                out.push(Move::new(from, Square::new(two as usize, col as usize)));
            }
        }
    }

    // Captures, including en passant.
    for dcol in [-1, 1] {
        let target_row = row + dir;
        let target_col = col + dcol;
        let Some(target) = in_bounds(target_row, target_col) else {
            continue;
        };
        if let Some(occ) = board.piece_at(target_row, target_col) {
            if occ.color != piece.color {
                out.push(Move::new(from, target));
            }
        } else if board.en_passant_target() == Some(target) {
            out.push(Move::new(from, target));
        }
    }
}

fn knight_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for (dr, dc) in KNIGHT_OFFSETS {
        let r = from.row as i32 + dr;
        let c = from.col as i32 + dc;
        let Some(target) = in_bounds(r, c) else {
            continue;
        };
        if board.piece_at(r, c).is_none_or(|occ| occ.color != piece.color) {
            out.push(Move::new(from, target));
        }
    }
}

fn slider_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i32, i32)],
    out: &mut Vec<Move>,
) {
    for &(dr, dc) in directions {
        let mut r = from.row as i32 + dr;
        let mut c = from.col as i32 + dc;
        while let Some(target) = in_bounds(r, c) {
            match board.piece_at(r, c) {
                None => {
                    out.push(Move::new(from, target));
                }
                Some(occ) => {
                    if occ.color != piece.color {
                        out.push(Move::new(from, target));
                    }
                    break;
                }
            }
            r += dr;
            c += dc;
        }
    }
}

fn king_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for (dr, dc) in ALL_DIRECTIONS {
        let r = from.row as i32 + dr;
        let c = from.col as i32 + dc;
        let Some(target) = in_bounds(r, c) else {
            continue;
        };
        if board.piece_at(r, c).is_none_or(|occ| occ.color != piece.color) {
            out.push(Move::new(from, target));
        }
    }

    castle_moves(board, from, piece, out);
}

fn castle_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    use super::{CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ};

    let row = from.row;
    let enemy = piece.color.opposite();
    let rights = board.castling_rights();

    let (kingside_bit, queenside_bit) = match piece.color {
        Color::White => (CASTLE_WK, CASTLE_WQ),
        Color::Black => (CASTLE_BK, CASTLE_BQ),
    };

    let king_attacked = |b: &Board, c: usize| b.is_square_attacked(row as i32, c as i32, enemy);

    if rights.has(kingside_bit)
        && board.piece_at(row as i32, 5).is_none()
        && board.piece_at(row as i32, 6).is_none()
        && !king_attacked(board, 4)
        && !king_attacked(board, 5)
        && !king_attacked(board, 6)
    {
        out.push(Move::new(from, Square::new(row, 6)));
    }

    if rights.has(queenside_bit)
        && board.piece_at(row as i32, 1).is_none()
        && board.piece_at(row as i32, 2).is_none()
        && board.piece_at(row as i32, 3).is_none()
        && !king_attacked(board, 4)
        && !king_attacked(board, 3)
        && !king_attacked(board, 2)
    {
        out.push(Move::new(from, Square::new(row, 2)));
    }
}

fn in_bounds(row: i32, col: i32) -> Option<Square> {
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some(Square::new(row as usize, col as usize))
    } else {
        None
    }
}
