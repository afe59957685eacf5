//! Pseudo-legal destination generation.
//!
//! Every generator answers "where may this piece go by its movement
//! pattern" without asking whether the move exposes its own king; that is
//! left to [`super::legality`]. Castling is not produced here either, see
//! [`super::castling`].

use super::pieces::{Color, Piece, PieceKind, PieceSet};
use super::square::Square;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

pub const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];
pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Candidate destinations for `piece` on `pieces`, in generation order.
pub fn pseudo_legal(piece: &Piece, pieces: &PieceSet) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, pieces),
        PieceKind::Knight => step_moves(piece, pieces, &KNIGHT_OFFSETS),
        PieceKind::Bishop => slide_moves(piece, pieces, &DIAGONALS),
        PieceKind::Rook => slide_moves(piece, pieces, &ORTHOGONALS),
        PieceKind::Queen => {
            let mut moves = slide_moves(piece, pieces, &ORTHOGONALS);
            moves.extend(slide_moves(piece, pieces, &DIAGONALS));
            moves
        }
        PieceKind::King => step_moves(piece, pieces, &KING_OFFSETS),
    }
}

/// Squares `piece` threatens.
///
/// Identical to [`pseudo_legal`] except for pawns, which threaten both
/// forward diagonals whether or not anything stands there, and never the
/// squares straight ahead.
pub fn attacks(piece: &Piece, pieces: &PieceSet) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => [-1, 1]
            .into_iter()
            .filter_map(|d_file| piece.square.offset(d_file, piece.color.forward()))
            .collect(),
        _ => pseudo_legal(piece, pieces),
    }
}

/// Whether any piece of `attacker` threatens `square`.
pub fn is_square_attacked(square: Square, attacker: Color, pieces: &PieceSet) -> bool {
    pieces
        .of_color(attacker)
        .any(|(_, piece)| attacks(piece, pieces).contains(&square))
}

fn pawn_moves(pawn: &Piece, pieces: &PieceSet) -> Vec<Square> {
    let mut moves = vec![];
    let dir = pawn.color.forward();

    if let Some(forward) = pawn.square.offset(0, dir) {
        if !pieces.is_occupied(forward) {
            moves.push(forward);

            if pawn.square.rank() == pawn.color.pawn_start_rank() {
                if let Some(double) = pawn.square.offset(0, 2 * dir) {
                    if !pieces.is_occupied(double) {
                        moves.push(double);
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        let Some(diagonal) = pawn.square.offset(d_file, dir) else {
            continue;
        };

        if pieces.is_occupied_by(diagonal, !pawn.color) {
            moves.push(diagonal);
            continue;
        }

        // en passant: the victim sits beside us, we land behind it
        let beside = pawn.square.offset(d_file, 0);
        let victim = beside.and_then(|square| pieces.at(square));
        if !pieces.is_occupied(diagonal)
            && victim.is_some_and(|p| {
                p.color != pawn.color && p.kind == PieceKind::Pawn && p.is_en_passant_eligible()
            })
        {
            moves.push(diagonal);
        }
    }

    moves
}

fn step_moves(piece: &Piece, pieces: &PieceSet, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(d_file, d_rank)| piece.square.offset(d_file, d_rank))
        .filter(|&target| !pieces.is_occupied_by(target, piece.color))
        .collect()
}

fn slide_moves(piece: &Piece, pieces: &PieceSet, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = vec![];

    for &(d_file, d_rank) in directions {
        let mut current = piece.square;

        while let Some(next) = current.offset(d_file, d_rank) {
            match pieces.at(next) {
                None => moves.push(next),
                Some(blocker) if blocker.color != piece.color => {
                    moves.push(next);
                    break;
                }
                Some(_) => break,
            }
            current = next;
        }
    }

    moves
}
