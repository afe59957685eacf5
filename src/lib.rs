//! Chess rules: legal move generation, move application and game-ending
//! detection (checkmate, stalemate, fifty-move rule, repetition and dead
//! material) for a board evolved from the standard starting position.
//!
//! ```
//! use arbiter::game::{new_standard_board, GameResult, Square};
//!
//! let mut board = new_standard_board();
//! let e2 = Square::parse("e2").unwrap();
//! let e4 = Square::parse("e4").unwrap();
//!
//! assert!(board.play(e2, e4));
//! assert_eq!(board.result(), GameResult::InProgress);
//! ```

pub mod controller;
pub mod game;
pub mod utils;
