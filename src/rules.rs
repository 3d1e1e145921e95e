use std::collections::HashSet;

use crate::board::{Board, Color, PieceType};
use crate::position::Position;

/// Axis-aligned sliding directions (rook).
const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal sliding directions (bishop).
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Movement capability of a piece type.
///
/// Each variant computes the pure candidate set for its piece: no
/// self-check filtering, no castling, en passant, or promotion. The queen
/// composes the rook and bishop variants from the same origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRule {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl MoveRule {
    pub const fn for_piece(piece_type: PieceType) -> Self {
        match piece_type {
            PieceType::Pawn => Self::Pawn,
            PieceType::Knight => Self::Knight,
            PieceType::Bishop => Self::Bishop,
            PieceType::Rook => Self::Rook,
            PieceType::Queen => Self::Queen,
            PieceType::King => Self::King,
        }
    }

    /// Squares a piece of this kind and color may move to from `origin`.
    pub fn candidates(self, origin: Position, color: Color, board: &Board) -> HashSet<Position> {
        match self {
            Self::Pawn => pawn_candidates(origin, color, board),
            Self::Knight => step_candidates(origin, color, board, &KNIGHT_DELTAS),
            Self::King => step_candidates(origin, color, board, &KING_DELTAS),
            Self::Rook => slide_candidates(origin, color, board, &ROOK_DIRS),
            Self::Bishop => slide_candidates(origin, color, board, &BISHOP_DIRS),
            Self::Queen => {
                let mut moves = Self::Rook.candidates(origin, color, board);
                moves.extend(Self::Bishop.candidates(origin, color, board));
                moves
            }
        }
    }
}

fn pawn_candidates(origin: Position, color: Color, board: &Board) -> HashSet<Position> {
    let mut moves = HashSet::new();
    let (direction, home_rank) = match color {
        Color::White => (1, 1),
        Color::Black => (-1, 6),
    };

    // The double step requires both squares empty and the home rank.
    if let Some(one) = origin.offset(0, direction) {
        if board.get(one).is_none() {
            moves.insert(one);
            if origin.rank() == home_rank {
                if let Some(two) = origin.offset(0, direction * 2) {
                    if board.get(two).is_none() {
                        moves.insert(two);
                    }
                }
            }
        }
    }

    // Diagonal steps are captures only.
    for file_delta in [-1, 1] {
        if let Some(diagonal) = origin.offset(file_delta, direction) {
            if board.get(diagonal).is_some_and(|target| target.color != color) {
                moves.insert(diagonal);
            }
        }
    }

    moves
}

/// Fixed-offset movement (knight, king): each on-board target is offered
/// unless occupied by a same-color piece.
fn step_candidates(
    origin: Position,
    color: Color,
    board: &Board,
    deltas: &[(i8, i8)],
) -> HashSet<Position> {
    deltas
        .iter()
        .filter_map(|&(file_delta, rank_delta)| origin.offset(file_delta, rank_delta))
        .filter(|&target| board.get(target).is_none_or(|piece| piece.color != color))
        .collect()
}

/// Sliding movement (rook, bishop): walk each direction until the board
/// edge or the first occupied square, offering that square only when it
/// holds an opposing piece.
fn slide_candidates(
    origin: Position,
    color: Color,
    board: &Board,
    directions: &[(i8, i8)],
) -> HashSet<Position> {
    let mut moves = HashSet::new();
    for &(file_delta, rank_delta) in directions {
        let mut cursor = origin.offset(file_delta, rank_delta);
        while let Some(target) = cursor {
            match board.get(target) {
                Some(blocker) => {
                    if blocker.color != color {
                        moves.insert(target);
                    }
                    break;
                }
                None => {
                    moves.insert(target);
                    cursor = target.offset(file_delta, rank_delta);
                }
            }
        }
    }
    moves
}
