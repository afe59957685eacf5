use super::castling::castling_moves;
use super::history::{PositionHistory, position_key};
use super::legality::filter_legal;
use super::movegen::pseudo_legal;
use super::moving::{AppliedMove, MoveCategory, execute};
use super::notation::MoveRecord;
use super::pieces::{Color, Piece, PieceId, PieceKind, PieceSet};
use super::rules::Rules;
use super::square::Square;
use super::termination::{GameResult, Snapshot, evaluate, is_in_check};
use std::fmt;

pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Why a move or promotion request was turned down. The board is left
/// exactly as it was in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    GameOver,
    PromotionPending,
    NoPromotionPending,
    InvalidPromotionKind(PieceKind),
    NoSuchPiece,
    WrongTurn,
    IllegalDestination,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::GameOver => write!(f, "the game is already over"),
            MoveRejection::PromotionPending => write!(f, "a promotion must be resolved first"),
            MoveRejection::NoPromotionPending => write!(f, "no pawn is waiting for promotion"),
            MoveRejection::InvalidPromotionKind(kind) => {
                write!(f, "a pawn cannot promote to {:?}", kind)
            }
            MoveRejection::NoSuchPiece => write!(f, "no such piece"),
            MoveRejection::WrongTurn => write!(f, "it is not that side's turn"),
            MoveRejection::IllegalDestination => write!(f, "that piece cannot move there"),
        }
    }
}

/// A game in progress: the position plus everything derived from it.
///
/// Cloning a board deep-copies pieces, log and repetition table; a clone
/// can be played on freely without affecting its source.
#[derive(Clone, Debug)]
pub struct Board {
    pieces: PieceSet,
    ply: u32, // odd: White to move, even: Black to move
    move_log: Vec<MoveRecord>,
    history: PositionHistory,
    halfmove_clock: u32, // half-moves since the last capture or pawn move
    result: GameResult,
    pending_promotion: Option<PieceId>,
    rules: Rules,
}

/// A fresh game from the standard starting position.
pub fn new_standard_board() -> Board {
    Board::with_rules(Rules::default())
}

impl Board {
    pub fn with_rules(rules: Rules) -> Board {
        match Board::from_placement(STARTING_PLACEMENT, Color::White, rules) {
            Some(board) => board,
            None => unreachable!("the starting placement always parses"),
        }
    }

    /// Build a board from the piece-placement field of a FEN string.
    ///
    /// Pawns off their starting rank, and kings and rooks off their home
    /// squares, count as having moved. Returns `None` for malformed
    /// placements or when a side does not have exactly one king; the
    /// position is otherwise taken on trust.
    pub fn from_placement(placement: &str, to_move: Color, rules: Rules) -> Option<Board> {
        let ranks = placement.split('/').collect::<Vec<_>>();
        if ranks.len() != 8 {
            return None;
        }

        let mut pieces = PieceSet::new();

        for (row, rank_text) in ranks.iter().enumerate() {
            let rank = 7 - row as u8;
            let mut file = 0u8;

            for c in rank_text.chars() {
                // Numbers encode empty spaces
                if let Some(empty) = c.to_digit(10) {
                    file = file.checked_add(empty as u8).filter(|&f| f <= 8)?;
                    continue;
                }

                let kind = PieceKind::from_char(c.to_ascii_lowercase())?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let square = Square::new(file, rank)?;

                let mut piece = Piece::new(square, kind, color);
                piece.has_moved = !is_home_square(kind, color, square);
                pieces.insert(piece);

                file += 1;
            }

            if file != 8 {
                return None;
            }
        }

        for color in [Color::White, Color::Black] {
            let kings = pieces
                .of_color(color)
                .filter(|(_, p)| p.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return None;
            }
        }

        let mut board = Board {
            pieces,
            ply: match to_move {
                Color::White => 1,
                Color::Black => 2,
            },
            move_log: vec![],
            history: PositionHistory::new(),
            halfmove_clock: 0,
            result: GameResult::InProgress,
            pending_promotion: None,
            rules,
        };

        board.finalize_position();

        Some(board)
    }

    pub fn pieces(&self) -> &PieceSet {
        &self.pieces
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    pub fn piece_at(&self, square: Square) -> Option<PieceId> {
        self.pieces.id_at(square)
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn side_to_move(&self) -> Color {
        if self.ply % 2 == 1 {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn move_log(&self) -> &[MoveRecord] {
        &self.move_log
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn pending_promotion(&self) -> Option<PieceId> {
        self.pending_promotion
    }

    /// How often the current placement has occurred so far, this time included.
    pub fn repetitions(&self) -> u32 {
        self.history.occurrences(position_key(&self.pieces))
    }

    pub fn is_check(&self, color: Color) -> bool {
        is_in_check(&self.pieces, color)
    }

    /// Cached legal destinations of `id`; empty for the side not to move,
    /// for captured pieces and while a promotion is pending.
    pub fn legal_destinations(&self, id: PieceId) -> &[Square] {
        self.pieces
            .get(id)
            .map(|piece| piece.legal_destinations())
            .unwrap_or(&[])
    }

    /// Every (piece, destination) pair the side to move may play.
    pub fn legal_moves(&self) -> Vec<(PieceId, Square)> {
        self.pieces
            .iter()
            .flat_map(|(id, piece)| piece.legal_destinations().iter().map(move |&to| (id, to)))
            .collect()
    }

    pub fn play_move(&mut self, id: PieceId, destination: Square) -> bool {
        match self.try_play_move(id, destination) {
            Ok(_) => true,
            Err(rejection) => {
                log::debug!("rejected move to {}: {}", destination, rejection);
                false
            }
        }
    }

    /// Convenience form of [`Board::play_move`] addressing the piece by square.
    pub fn play(&mut self, from: Square, to: Square) -> bool {
        match self.piece_at(from) {
            Some(id) => self.play_move(id, to),
            None => {
                log::debug!("rejected move from empty square {}", from);
                false
            }
        }
    }

    pub fn try_play_move(
        &mut self,
        id: PieceId,
        destination: Square,
    ) -> Result<AppliedMove, MoveRejection> {
        self.validate(id, destination)?;

        let color = self.side_to_move();
        let applied =
            execute(&mut self.pieces, id, destination).ok_or(MoveRejection::IllegalDestination)?;

        // the en passant window closes for everyone but the pawn that just moved
        for (other, piece) in self.pieces.iter_mut_with_ids() {
            if other != id && piece.en_passant.is_some() {
                piece.en_passant = Some(false);
            }
        }

        if applied.is_pawn_move() || applied.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        self.move_log.push(MoveRecord {
            color,
            kind: applied.kind,
            from: applied.from,
            to: applied.to,
            is_capture: applied.is_capture(),
            is_en_passant: matches!(applied.category, MoveCategory::EnPassant { .. }),
            is_check: false,
            castling: match applied.category {
                MoveCategory::Castle { plan, .. } => Some(plan.side),
                _ => None,
            },
            promotion: None,
        });
        self.ply += 1;

        if applied.category == (MoveCategory::Normal { promotes: true }) {
            log::debug!("{:?} pawn on {} awaits promotion", color, applied.to);
            self.pending_promotion = Some(id);
            for piece in self.pieces.iter_mut() {
                piece.legal_destinations.clear();
            }
            return Ok(applied);
        }

        self.finalize_position();

        Ok(applied)
    }

    pub fn promote(&mut self, kind: PieceKind) -> bool {
        match self.try_promote(kind) {
            Ok(()) => true,
            Err(rejection) => {
                log::debug!("rejected promotion: {}", rejection);
                false
            }
        }
    }

    pub fn try_promote(&mut self, kind: PieceKind) -> Result<(), MoveRejection> {
        let id = self
            .pending_promotion
            .ok_or(MoveRejection::NoPromotionPending)?;

        if !kind.is_promotion_target() {
            return Err(MoveRejection::InvalidPromotionKind(kind));
        }

        let pawn = self.pieces.get_mut(id).ok_or(MoveRejection::NoSuchPiece)?;
        pawn.set_kind(kind);

        if let Some(record) = self.move_log.last_mut() {
            record.promotion = Some(kind);
        }

        self.pending_promotion = None;
        self.finalize_position();

        Ok(())
    }

    fn validate(&self, id: PieceId, destination: Square) -> Result<(), MoveRejection> {
        if self.result.is_over() {
            return Err(MoveRejection::GameOver);
        }

        if self.pending_promotion.is_some() {
            return Err(MoveRejection::PromotionPending);
        }

        let piece = self.pieces.get(id).ok_or(MoveRejection::NoSuchPiece)?;

        if piece.color != self.side_to_move() {
            return Err(MoveRejection::WrongTurn);
        }

        if !piece.legal_destinations().contains(&destination) {
            return Err(MoveRejection::IllegalDestination);
        }

        Ok(())
    }

    /// Re-derive everything about the current placement: destinations,
    /// check flag on the last record, repetition count and result.
    fn finalize_position(&mut self) {
        self.recompute_legal_destinations();

        let to_move = self.side_to_move();

        if let Some(record) = self.move_log.last_mut() {
            record.is_check = is_in_check(&self.pieces, to_move);
        }

        let repetitions = self.history.push(position_key(&self.pieces));
        log::trace!("placement seen {} time(s)", repetitions);

        let has_legal_moves = self
            .pieces
            .of_color(to_move)
            .any(|(_, piece)| !piece.legal_destinations().is_empty());

        let snapshot = Snapshot {
            pieces: &self.pieces,
            side_to_move: to_move,
            halfmove_clock: self.halfmove_clock,
            repetitions,
            has_legal_moves,
        };
        self.result = evaluate(&snapshot, &self.rules);

        if self.result.is_over() {
            log::info!("game over at ply {}: {}", self.ply, self.result);
        }
    }

    fn recompute_legal_destinations(&mut self) {
        let to_move = self.side_to_move();

        let updates = self
            .pieces
            .of_color(to_move)
            .map(|(id, piece)| (id, self.compute_legal_destinations(id, piece)))
            .collect::<Vec<_>>();

        for piece in self.pieces.iter_mut() {
            piece.legal_destinations.clear();
        }

        for (id, destinations) in updates {
            if let Some(piece) = self.pieces.get_mut(id) {
                piece.legal_destinations = destinations;
            }
        }
    }

    fn compute_legal_destinations(&self, id: PieceId, piece: &Piece) -> Vec<Square> {
        let mut candidates = pseudo_legal(piece, &self.pieces);
        if piece.kind == PieceKind::King {
            candidates.extend(castling_moves(piece, &self.pieces));
        }

        filter_legal(&self.pieces, id, candidates)
    }
}

fn is_home_square(kind: PieceKind, color: Color, square: Square) -> bool {
    let back_rank = square.rank() == color.back_rank();

    match kind {
        PieceKind::Pawn => square.rank() == color.pawn_start_rank(),
        PieceKind::King => back_rank && square.file() == 4,
        PieceKind::Rook => back_rank && (square.file() == 0 || square.file() == 7),
        _ => true,
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let symbol = Square::new(file, rank)
                    .and_then(|square| self.pieces.at(square))
                    .map_or('.', |piece| piece.symbol());
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
