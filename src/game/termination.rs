use super::movegen::is_square_attacked;
use super::pieces::{Color, PieceKind, PieceSet};
use super::rules::Rules;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawReason {
    FiftyMoves,
    InsufficientMaterial,
    Repetition,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Draw(DrawReason),
    Stalemate,
    Win(Color),
}

impl GameResult {
    pub fn is_over(&self) -> bool {
        *self != GameResult::InProgress
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "in progress"),
            GameResult::Draw(DrawReason::FiftyMoves) => write!(f, "draw by the fifty-move rule"),
            GameResult::Draw(DrawReason::InsufficientMaterial) => {
                write!(f, "draw by insufficient material")
            }
            GameResult::Draw(DrawReason::Repetition) => write!(f, "draw by repetition"),
            GameResult::Stalemate => write!(f, "stalemate"),
            GameResult::Win(Color::White) => write!(f, "white wins by checkmate"),
            GameResult::Win(Color::Black) => write!(f, "black wins by checkmate"),
        }
    }
}

/// Everything the evaluator looks at after a move has been finalized.
pub struct Snapshot<'a> {
    pub pieces: &'a PieceSet,
    pub side_to_move: Color,
    pub halfmove_clock: u32,
    pub repetitions: u32,
    pub has_legal_moves: bool,
}

/// Run the draw checks and the mate/stalemate check in order; a later
/// verdict replaces an earlier one.
pub fn evaluate(snapshot: &Snapshot, rules: &Rules) -> GameResult {
    let mut result = GameResult::InProgress;

    if snapshot.halfmove_clock >= rules.fifty_move_limit {
        result = GameResult::Draw(DrawReason::FiftyMoves);
    }

    if rules.insufficient_material && is_insufficient_material(snapshot.pieces) {
        result = GameResult::Draw(DrawReason::InsufficientMaterial);
    }

    if snapshot.repetitions >= rules.repetition_limit {
        result = GameResult::Draw(DrawReason::Repetition);
    }

    if !snapshot.has_legal_moves {
        result = if is_in_check(snapshot.pieces, snapshot.side_to_move) {
            GameResult::Win(!snapshot.side_to_move)
        } else {
            GameResult::Stalemate
        };
    }

    result
}

pub fn is_in_check(pieces: &PieceSet, color: Color) -> bool {
    match pieces.king(color) {
        Some(king) => is_square_attacked(king.square, !color, pieces),
        None => {
            log::error!("no {:?} king on the board", color);
            false
        }
    }
}

/// Non-king material of one side, by kind.
fn material(pieces: &PieceSet, color: Color) -> Vec<PieceKind> {
    pieces
        .of_color(color)
        .map(|(_, piece)| piece.kind)
        .filter(|&kind| kind != PieceKind::King)
        .collect()
}

/// Neither side can force mate: both have a bare king or a king and one
/// minor piece, or one side has two knights against a bare king.
pub fn is_insufficient_material(pieces: &PieceSet) -> bool {
    let white = material(pieces, Color::White);
    let black = material(pieces, Color::Black);

    let weak = |m: &[PieceKind]| m.is_empty() || (m.len() == 1 && m[0].is_minor());
    let two_knights = |m: &[PieceKind]| m.len() == 2 && m.iter().all(|&k| k == PieceKind::Knight);

    (weak(&white) && weak(&black))
        || (two_knights(&white) && black.is_empty())
        || (two_knights(&black) && white.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::pieces::Piece;
    use crate::game::square::Square;

    fn set_with(pieces: &[(&str, PieceKind, Color)]) -> PieceSet {
        let mut set = PieceSet::new();
        for &(square, kind, color) in pieces {
            set.insert(Piece::new(Square::parse(square).unwrap(), kind, color));
        }
        set
    }

    fn kings() -> Vec<(&'static str, PieceKind, Color)> {
        vec![
            ("e1", PieceKind::King, Color::White),
            ("e8", PieceKind::King, Color::Black),
        ]
    }

    #[test]
    fn bare_kings_and_minor_pieces_are_dead() {
        assert!(is_insufficient_material(&set_with(&kings())));

        let mut pieces = kings();
        pieces.push(("c1", PieceKind::Bishop, Color::White));
        assert!(is_insufficient_material(&set_with(&pieces)));

        pieces.push(("b8", PieceKind::Knight, Color::Black));
        assert!(is_insufficient_material(&set_with(&pieces)));
    }

    #[test]
    fn two_knights_only_against_bare_king() {
        let mut pieces = kings();
        pieces.push(("b1", PieceKind::Knight, Color::White));
        pieces.push(("g1", PieceKind::Knight, Color::White));
        assert!(is_insufficient_material(&set_with(&pieces)));

        pieces.push(("a7", PieceKind::Pawn, Color::Black));
        assert!(!is_insufficient_material(&set_with(&pieces)));
    }

    #[test]
    fn mating_material_is_sufficient() {
        for kind in [PieceKind::Pawn, PieceKind::Rook, PieceKind::Queen] {
            let mut pieces = kings();
            pieces.push(("d4", kind, Color::Black));
            assert!(!is_insufficient_material(&set_with(&pieces)), "{:?}", kind);
        }

        let mut pieces = kings();
        pieces.push(("c1", PieceKind::Bishop, Color::White));
        pieces.push(("f1", PieceKind::Bishop, Color::White));
        assert!(!is_insufficient_material(&set_with(&pieces)));
    }

    #[test]
    fn no_moves_and_in_check_is_a_win() {
        let set = set_with(&[
            ("h8", PieceKind::King, Color::Black),
            ("g7", PieceKind::Queen, Color::White),
            ("f6", PieceKind::King, Color::White),
        ]);
        let snapshot = Snapshot {
            pieces: &set,
            side_to_move: Color::Black,
            halfmove_clock: 0,
            repetitions: 1,
            has_legal_moves: false,
        };
        assert_eq!(evaluate(&snapshot, &Rules::default()), GameResult::Win(Color::White));
    }

    #[test]
    fn no_moves_out_of_check_is_stalemate() {
        let set = set_with(&[
            ("h8", PieceKind::King, Color::Black),
            ("g6", PieceKind::Queen, Color::White),
            ("f7", PieceKind::King, Color::White),
        ]);
        let snapshot = Snapshot {
            pieces: &set,
            side_to_move: Color::Black,
            halfmove_clock: 0,
            repetitions: 1,
            has_legal_moves: false,
        };
        assert_eq!(evaluate(&snapshot, &Rules::default()), GameResult::Stalemate);
    }

    #[test]
    fn clock_and_repetition_limits() {
        let set = set_with(&[
            ("e1", PieceKind::King, Color::White),
            ("e8", PieceKind::King, Color::Black),
            ("a1", PieceKind::Rook, Color::White),
        ]);
        let mut snapshot = Snapshot {
            pieces: &set,
            side_to_move: Color::Black,
            halfmove_clock: 49,
            repetitions: 2,
            has_legal_moves: true,
        };
        let rules = Rules::default();
        assert_eq!(evaluate(&snapshot, &rules), GameResult::InProgress);

        snapshot.halfmove_clock = 50;
        assert_eq!(evaluate(&snapshot, &rules), GameResult::Draw(DrawReason::FiftyMoves));

        snapshot.halfmove_clock = 0;
        snapshot.repetitions = 3;
        assert_eq!(evaluate(&snapshot, &rules), GameResult::Draw(DrawReason::Repetition));
    }
}
