use super::movegen::is_square_attacked;
use super::moving::execute;
use super::pieces::{PieceId, PieceSet};
use super::square::Square;

/// Play the move on a private copy of the position and report whether the
/// mover's king is left unattacked.
pub fn leaves_king_safe(pieces: &PieceSet, id: PieceId, destination: Square) -> bool {
    let Some(color) = pieces.get(id).map(|piece| piece.color) else {
        return false;
    };

    let mut simulated = pieces.clone();
    if execute(&mut simulated, id, destination).is_none() {
        return false;
    }

    match simulated.king(color) {
        Some(king) => !is_square_attacked(king.square, !color, &simulated),
        None => {
            log::error!("no {:?} king on the board while filtering moves", color);
            debug_assert!(false, "missing {:?} king", color);
            true
        }
    }
}

/// Keep the candidates that do not leave the mover in check.
pub fn filter_legal(pieces: &PieceSet, id: PieceId, candidates: Vec<Square>) -> Vec<Square> {
    candidates
        .into_iter()
        .filter(|&destination| leaves_king_safe(pieces, id, destination))
        .collect()
}
