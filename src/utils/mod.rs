pub mod cli;
pub mod zobrist;

pub use cli::*;
