use super::movegen::is_square_attacked;
use super::pieces::{Piece, PieceKind, PieceSet};
use super::square::Square;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Where king and rook end up when `king_from` castles with the rook on `rook_from`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CastlePlan {
    pub side: CastleSide,
    pub king_to: Square,
    pub rook_to: Square,
}

pub fn castle_plan(king_from: Square, rook_from: Square) -> Option<CastlePlan> {
    let dir: i8 = if rook_from.file() > king_from.file() { 1 } else { -1 };
    let king_to = king_from.offset(2 * dir, 0)?;
    let rook_to = king_to.offset(-dir, 0)?;

    Some(CastlePlan {
        side: if dir > 0 {
            CastleSide::KingSide
        } else {
            CastleSide::QueenSide
        },
        king_to,
        rook_to,
    })
}

/// Castling destinations for `king`, expressed as the partner rook's square.
///
/// A rook qualifies when neither it nor the king has moved, every square
/// between the two is empty, and none of the squares the king stands on,
/// crosses or lands on is attacked.
pub fn castling_moves(king: &Piece, pieces: &PieceSet) -> Vec<Square> {
    if king.kind != PieceKind::King || king.has_moved {
        return vec![];
    }

    let rooks = pieces.of_color(king.color).map(|(_, piece)| piece).filter(|p| {
        p.kind == PieceKind::Rook && !p.has_moved && p.square.rank() == king.square.rank()
    });

    let mut moves = vec![];
    for rook in rooks {
        let dir: i8 = if rook.square.file() > king.square.file() { 1 } else { -1 };

        let Some(adjacent) = king.square.offset(dir, 0) else {
            continue;
        };

        let mut between = (1i8..)
            .map_while(|step| king.square.offset(dir * step, 0))
            .take_while(|&square| square != rook.square);
        if between.any(|square| pieces.is_occupied(square)) {
            continue;
        }

        let Some(plan) = castle_plan(king.square, rook.square) else {
            continue;
        };

        let corridor = [king.square, adjacent, plan.king_to];
        if corridor
            .iter()
            .any(|&square| is_square_attacked(square, !king.color, pieces))
        {
            log::trace!(
                "castling {:?} with {} blocked by an attacked corridor",
                king.color,
                rook.square
            );
            continue;
        }

        moves.push(rook.square);
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::pieces::Color;

    fn sq(s: &str) -> Square {
        Square::parse(s).unwrap()
    }

    fn set_with(pieces: &[(&str, PieceKind, Color)]) -> PieceSet {
        let mut set = PieceSet::new();
        for &(square, kind, color) in pieces {
            set.insert(Piece::new(sq(square), kind, color));
        }
        set
    }

    #[test]
    fn plans_both_wings() {
        let kingside = castle_plan(sq("e1"), sq("h1")).unwrap();
        assert_eq!(kingside.side, CastleSide::KingSide);
        assert_eq!((kingside.king_to, kingside.rook_to), (sq("g1"), sq("f1")));

        let queenside = castle_plan(sq("e8"), sq("a8")).unwrap();
        assert_eq!(queenside.side, CastleSide::QueenSide);
        assert_eq!((queenside.king_to, queenside.rook_to), (sq("c8"), sq("d8")));
    }

    #[test]
    fn both_wings_open() {
        let set = set_with(&[
            ("e1", PieceKind::King, Color::White),
            ("a1", PieceKind::Rook, Color::White),
            ("h1", PieceKind::Rook, Color::White),
            ("e8", PieceKind::King, Color::Black),
        ]);
        let king = set.at(sq("e1")).unwrap();
        let mut moves = castling_moves(king, &set);
        moves.sort();
        assert_eq!(moves, vec![sq("a1"), sq("h1")]);
    }

    #[test]
    fn blocked_path_disables_wing() {
        let set = set_with(&[
            ("e1", PieceKind::King, Color::White),
            ("a1", PieceKind::Rook, Color::White),
            ("b1", PieceKind::Knight, Color::White),
            ("h1", PieceKind::Rook, Color::White),
            ("e8", PieceKind::King, Color::Black),
        ]);
        let king = set.at(sq("e1")).unwrap();
        assert_eq!(castling_moves(king, &set), vec![sq("h1")]);
    }

    #[test]
    fn enemy_piece_between_disables_wing() {
        let set = set_with(&[
            ("e1", PieceKind::King, Color::White),
            ("a1", PieceKind::Rook, Color::White),
            ("d1", PieceKind::Bishop, Color::Black),
            ("h1", PieceKind::Rook, Color::White),
            ("f1", PieceKind::Knight, Color::Black),
            ("a8", PieceKind::King, Color::Black),
        ]);
        let king = set.at(sq("e1")).unwrap();
        assert!(castling_moves(king, &set).is_empty());
    }

    #[test]
    fn attacked_transit_square_disables_wing() {
        let set = set_with(&[
            ("e1", PieceKind::King, Color::White),
            ("h1", PieceKind::Rook, Color::White),
            ("f8", PieceKind::Rook, Color::Black),
            ("a8", PieceKind::King, Color::Black),
        ]);
        let king = set.at(sq("e1")).unwrap();
        assert!(castling_moves(king, &set).is_empty());
    }

    #[test]
    fn pawn_diagonal_threat_counts_on_empty_square() {
        let set = set_with(&[
            ("e1", PieceKind::King, Color::White),
            ("h1", PieceKind::Rook, Color::White),
            ("h2", PieceKind::Pawn, Color::Black),
            ("a8", PieceKind::King, Color::Black),
        ]);
        let king = set.at(sq("e1")).unwrap();
        assert!(castling_moves(king, &set).is_empty());
    }

    #[test]
    fn moved_pieces_cannot_castle() {
        let mut set = set_with(&[
            ("e1", PieceKind::King, Color::White),
            ("h1", PieceKind::Rook, Color::White),
            ("e8", PieceKind::King, Color::Black),
        ]);
        let rook = set.id_at(sq("h1")).unwrap();
        set.get_mut(rook).unwrap().has_moved = true;

        let king = set.at(sq("e1")).unwrap();
        assert!(castling_moves(king, &set).is_empty());
    }

    #[test]
    fn checked_king_cannot_castle() {
        let set = set_with(&[
            ("e1", PieceKind::King, Color::White),
            ("h1", PieceKind::Rook, Color::White),
            ("e8", PieceKind::Rook, Color::Black),
            ("a8", PieceKind::King, Color::Black),
        ]);
        let king = set.at(sq("e1")).unwrap();
        assert!(castling_moves(king, &set).is_empty());
    }
}
