pub mod board;
pub mod castling;
pub mod history;
pub mod legality;
pub mod movegen;
pub mod moving;
pub mod notation;
pub mod perft;
pub mod pieces;
pub mod rules;
pub mod square;
pub mod termination;

pub use board::{Board, MoveRejection, STARTING_PLACEMENT, new_standard_board};
pub use castling::CastleSide;
pub use notation::{MoveRecord, describe};
pub use perft::{perft, perft_divide};
pub use pieces::{Color, Piece, PieceId, PieceKind, PieceSet};
pub use rules::Rules;
pub use square::Square;
pub use termination::{DrawReason, GameResult};
