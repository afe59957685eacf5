use super::castling::CastleSide;
use super::pieces::{Color, PieceKind};
use super::square::Square;
use std::fmt;

/// One executed move, as kept in the game log.
///
/// Records are display-only: legality never consults the log, it works
/// from the per-piece `has_moved` and en passant flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub color: Color,
    pub kind: PieceKind,
    pub from: Square,
    /// For castling this is the king's final square.
    pub to: Square,
    pub is_capture: bool,
    pub is_en_passant: bool,
    pub is_check: bool,
    pub castling: Option<CastleSide>,
    pub promotion: Option<PieceKind>,
}

fn piece_letter(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::Pawn => "",
        PieceKind::Knight => "N",
        PieceKind::Bishop => "B",
        PieceKind::Rook => "R",
        PieceKind::Queen => "Q",
        PieceKind::King => "K",
    }
}

/// Long algebraic descriptor of a logged move, e.g. `Ng1f3`, `e4xd5`,
/// `e5xd6 e.p.`, `O-O-O`, `e7e8=Q+`.
pub fn describe(record: &MoveRecord) -> String {
    let mut text = match record.castling {
        Some(CastleSide::KingSide) => "O-O".to_string(),
        Some(CastleSide::QueenSide) => "O-O-O".to_string(),
        None => {
            let mut text = format!("{}{}", piece_letter(record.kind), record.from);
            if record.is_capture {
                text.push('x');
            }
            text.push_str(&record.to.unparse());
            if let Some(kind) = record.promotion {
                text.push('=');
                text.push(kind.to_char().to_ascii_uppercase());
            }
            if record.is_en_passant {
                text.push_str(" e.p.");
            }
            text
        }
    };

    if record.is_check {
        text.push('+');
    }

    text
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", describe(self))
    }
}
