//! Piece placement changes for a single move.
//!
//! This is the part of move execution shared by the real board and by the
//! throwaway positions the legality filter plays moves on: it relocates,
//! captures and sets per-piece flags, nothing more. Turn bookkeeping, the
//! move log and termination belong to [`super::board::Board`].

use super::castling::{CastlePlan, castle_plan};
use super::pieces::{PieceId, PieceKind, PieceSet};
use super::square::Square;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveCategory {
    Castle { rook: PieceId, plan: CastlePlan },
    EnPassant { victim: PieceId },
    Normal { promotes: bool },
}

/// What a move did to the position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    pub category: MoveCategory,
    pub kind: PieceKind,
    pub from: Square,
    /// Where the mover ended up; for castling the king's square, not the rook's.
    pub to: Square,
    pub captured: Option<PieceKind>,
}

impl AppliedMove {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn is_pawn_move(&self) -> bool {
        self.kind == PieceKind::Pawn
    }
}

/// Decide which of the mutually exclusive move shapes `id` to `destination` is.
pub fn classify(pieces: &PieceSet, id: PieceId, destination: Square) -> Option<MoveCategory> {
    let mover = pieces.get(id)?;
    let target = pieces.at(destination);

    match mover.kind {
        PieceKind::King => {
            if let (Some(rook_id), Some(rook)) = (pieces.id_at(destination), target) {
                if !mover.has_moved
                    && rook.kind == PieceKind::Rook
                    && rook.color == mover.color
                    && !rook.has_moved
                {
                    let plan = castle_plan(mover.square, rook.square)?;
                    return Some(MoveCategory::Castle {
                        rook: rook_id,
                        plan,
                    });
                }
            }
            Some(MoveCategory::Normal { promotes: false })
        }
        PieceKind::Pawn => {
            let diagonal = destination.file() != mover.square.file();

            if diagonal && target.is_none() {
                let behind = Square::new(destination.file(), mover.square.rank())?;
                let victim = pieces.id_at(behind)?;
                let victim_piece = pieces.get(victim)?;

                if victim_piece.kind == PieceKind::Pawn
                    && victim_piece.color != mover.color
                    && victim_piece.is_en_passant_eligible()
                {
                    return Some(MoveCategory::EnPassant { victim });
                }
                return None;
            }

            Some(MoveCategory::Normal {
                promotes: destination.rank() == mover.color.promotion_rank(),
            })
        }
        _ => Some(MoveCategory::Normal { promotes: false }),
    }
}

/// Play `id` to `destination` on `pieces`.
///
/// The caller vouches that `destination` came from the piece's destination
/// list; `None` is returned only when the piece does not exist or the move
/// has no valid shape.
pub fn execute(pieces: &mut PieceSet, id: PieceId, destination: Square) -> Option<AppliedMove> {
    let category = classify(pieces, id, destination)?;
    let mover = pieces.get(id)?;
    let (kind, from) = (mover.kind, mover.square);

    let (to, captured) = match category {
        MoveCategory::Castle { rook, plan } => {
            pieces.relocate(id, plan.king_to);
            pieces.relocate(rook, plan.rook_to);
            if let Some(rook) = pieces.get_mut(rook) {
                rook.has_moved = true;
            }
            (plan.king_to, None)
        }
        MoveCategory::EnPassant { victim } => {
            let captured = pieces.remove(victim).map(|p| p.kind);
            pieces.relocate(id, destination);
            (destination, captured)
        }
        MoveCategory::Normal { .. } => {
            let captured = pieces.relocate(id, destination).map(|p| p.kind);
            (destination, captured)
        }
    };

    if let Some(mover) = pieces.get_mut(id) {
        mover.has_moved = true;
        if mover.kind == PieceKind::Pawn {
            let advanced = (to.rank() as i8 - from.rank() as i8).abs();
            mover.en_passant = Some(advanced == 2);
        }
    }

    Some(AppliedMove {
        category,
        kind,
        from,
        to,
        captured,
    })
}
