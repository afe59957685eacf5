use std::fmt;

/// A square on the board, `file` and `rank` both in `0..8`.
///
/// Files count from the a-file, ranks from White's back rank, so `a1` is
/// `(0, 0)` and `h8` is `(7, 7)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

pub const BOARD_SIZE: i8 = 8;

pub const fn is_position_valid(file: i8, rank: i8) -> bool {
    file >= 0 && file < BOARD_SIZE && rank >= 0 && rank < BOARD_SIZE
}

impl Square {
    /// Returns `None` when either coordinate falls off the board.
    pub const fn new(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    pub const fn file(&self) -> u8 {
        self.file
    }

    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// The square `(file + d_file, rank + d_rank)`, if it is still on the board.
    pub const fn offset(&self, d_file: i8, d_rank: i8) -> Option<Square> {
        let file = self.file as i8 + d_file;
        let rank = self.rank as i8 + d_rank;

        if is_position_valid(file, rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Index into a 64-entry table, a1 = 0, b1 = 1, ..., h8 = 63.
    pub const fn index(&self) -> usize {
        self.file as usize + self.rank as usize * 8
    }

    pub fn parse(string: &str) -> Option<Square> {
        let mut chars = string.chars();

        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => {
                Square::new(file as u8 - b'a', rank as u8 - b'1')
            }
            (_, _, _) => None,
        }
    }

    pub fn unparse(&self) -> String {
        format!(
            "{}{}",
            (self.file + b'a') as char,
            (self.rank + b'1') as char
        )
    }

    pub fn iter() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.unparse())
    }
}
