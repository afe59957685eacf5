use crate::game::{Board, Color, MoveRejection, PieceKind, Rules, Square};
use std::collections::HashSet;

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResultType {
    Success,            // successful move
    InvalidNotation,    // wrong long algebraic notation
    InvalidMove,        // the piece can't go there (or it's not its turn)
    PromotionRequired,  // the move was played, a promotion piece must be chosen
    NoPromotionPending, // promotion requested with no pawn waiting
    GameOver,           // the game has already ended
}

/// Text-notation front for a [`Board`], used by the console binary.
pub struct GameController {
    pub board: Board,
    rules: Rules,
}

fn parse_move(notation: &str) -> Option<(Square, Square, Option<PieceKind>)> {
    let from = Square::parse(notation.get(0..2)?)?;
    let to = Square::parse(notation.get(2..4)?)?;

    let promotion = match notation.get(4..)? {
        "" => None,
        kind => {
            let mut chars = kind.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(PieceKind::from_char(c.to_ascii_lowercase())?),
                _ => return None,
            }
        }
    };

    Some((from, to, promotion))
}

impl GameController {
    pub fn new(rules: Rules) -> Self {
        Self {
            board: Board::with_rules(rules.clone()),
            rules,
        }
    }

    /// Discard the current game and start a fresh one under the same rules.
    pub fn restart(&mut self) {
        self.board = Board::with_rules(self.rules.clone());
    }

    /// Play a move given as `e2e4`; a fifth letter (`e7e8q`) resolves the
    /// promotion in the same call.
    pub fn try_move_piece(&mut self, long_algebraic_notation: &str) -> MoveResultType {
        let Some((from, to, promotion)) = parse_move(long_algebraic_notation) else {
            return MoveResultType::InvalidNotation;
        };

        let Some(id) = self.board.piece_at(from) else {
            return MoveResultType::InvalidMove;
        };

        // validate the promotion letter before anything is played
        if promotion.is_some_and(|kind| !kind.is_promotion_target()) {
            return MoveResultType::InvalidNotation;
        }

        match self.board.try_play_move(id, to) {
            Ok(_) => {}
            Err(MoveRejection::GameOver) => return MoveResultType::GameOver,
            Err(MoveRejection::PromotionPending) => return MoveResultType::PromotionRequired,
            Err(_) => return MoveResultType::InvalidMove,
        }

        match (self.board.pending_promotion(), promotion) {
            (None, _) => MoveResultType::Success,
            (Some(_), None) => MoveResultType::PromotionRequired,
            (Some(_), Some(kind)) => self.promote_to(kind),
        }
    }

    pub fn try_promote(&mut self, kind: &str) -> MoveResultType {
        let mut chars = kind.chars();
        match (chars.next().map(|c| c.to_ascii_lowercase()), chars.next()) {
            (Some(c), None) => match PieceKind::from_char(c) {
                Some(kind) => self.promote_to(kind),
                None => MoveResultType::InvalidNotation,
            },
            _ => MoveResultType::InvalidNotation,
        }
    }

    fn promote_to(&mut self, kind: PieceKind) -> MoveResultType {
        match self.board.try_promote(kind) {
            Ok(()) => MoveResultType::Success,
            Err(MoveRejection::NoPromotionPending) => MoveResultType::NoPromotionPending,
            Err(_) => MoveResultType::InvalidNotation,
        }
    }

    /// Legal destinations of whatever stands on `square`, `None` for bad notation.
    pub fn get_valid_moves(&self, square: &str) -> Option<Vec<Square>> {
        let square = Square::parse(square)?;

        Some(
            self.board
                .piece_at(square)
                .map(|id| self.board.legal_destinations(id).to_vec())
                .unwrap_or_default(),
        )
    }

    /// The move log, numbered the usual way (`1. e2e4 e7e5`).
    pub fn describe_log(&self) -> String {
        let mut lines: Vec<String> = vec![];

        for (i, record) in self.board.move_log().iter().enumerate() {
            let number = i / 2 + 1;
            let answers_white = record.color == Color::Black && i % 2 == 1;

            if answers_white {
                if let Some(line) = lines.last_mut() {
                    line.push_str(&format!(" {}", record));
                    continue;
                }
            }

            match record.color {
                Color::White => lines.push(format!("{}. {}", number, record)),
                Color::Black => lines.push(format!("{}... {}", number, record)),
            }
        }

        lines.join("\n")
    }

    pub fn print_with_moves(&self, possible_moves: &[Square]) {
        const RESET: &str = "\x1b[0m";
        const LIGHT_SQUARE_BG: &str = "\x1b[48;5;172m";
        const DARK_SQUARE_BG: &str = "\x1b[48;5;130m";
        const WHITE_PIECE: &str = "\x1b[1;97m";
        const BLACK_PIECE: &str = "\x1b[1;30m";
        const MOVE_HIGHLIGHT: &str = "\x1b[1;34m";
        const HEADING_BG: &str = "\x1b[48;5;240m"; // Neutral gray background

        let heading_text = if self.board.result().is_over() {
            self.board.result().to_string()
        } else {
            match self.board.side_to_move() {
                Color::White => "White to move".to_string(),
                Color::Black => "Black to move".to_string(),
            }
        };
        let heading_color = match self.board.side_to_move() {
            Color::White => WHITE_PIECE,
            Color::Black => BLACK_PIECE,
        };

        // Board width is 8 squares * 3 chars each = 24 chars
        let board_width: usize = 24;
        let total_padding = board_width.saturating_sub(heading_text.len());
        let padding = total_padding / 2;
        let right_padding = total_padding - padding;

        println!(
            "{}{}{}{}{}{}",
            HEADING_BG,
            " ".repeat(padding),
            heading_color,
            heading_text,
            " ".repeat(right_padding),
            RESET
        );

        let move_squares = possible_moves.iter().copied().collect::<HashSet<_>>();

        for rank in (0..8u8).rev() {
            let mut line = String::new();
            for file in 0..8u8 {
                let Some(square) = Square::new(file, rank) else {
                    continue;
                };

                let is_light_square = (file + rank) % 2 == 1;
                line.push_str(if is_light_square {
                    LIGHT_SQUARE_BG
                } else {
                    DARK_SQUARE_BG
                });

                match self.board.pieces().at(square) {
                    Some(piece) => {
                        let piece_color = match piece.color {
                            Color::White => WHITE_PIECE,
                            Color::Black => BLACK_PIECE,
                        };
                        let marker = if move_squares.contains(&square) {
                            MOVE_HIGHLIGHT
                        } else {
                            piece_color
                        };
                        line.push_str(&format!("{} {} {}", marker, to_emoji(piece.kind), RESET));
                    }
                    None if move_squares.contains(&square) => {
                        line.push_str(&format!("{} ● {}", MOVE_HIGHLIGHT, RESET));
                    }
                    None => line.push_str("   "),
                }

                line.push_str(RESET);
            }
            println!("{}", line);
        }
    }

    pub fn print(&self) {
        self.print_with_moves(&[]);
    }
}

fn to_emoji(kind: PieceKind) -> char {
    // We change the color via Ansi codes
    match kind {
        PieceKind::Pawn => '♟',
        PieceKind::Knight => '♞',
        PieceKind::Bishop => '♝',
        PieceKind::Rook => '♜',
        PieceKind::Queen => '♛',
        PieceKind::King => '♚',
    }
}
