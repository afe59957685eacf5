use super::pieces::PieceSet;
use crate::utils::zobrist::ZOBRIST;
use fxhash::FxHashMap;

/// Canonical key of a placement: every piece's color, kind and square.
pub fn position_key(pieces: &PieceSet) -> u64 {
    pieces.iter().fold(0u64, |key, (_, piece)| {
        key ^ ZOBRIST.piece_key(piece.color, piece.kind, piece.square)
    })
}

/// Occurrence counts of every placement seen in a game.
#[derive(Clone, Debug, Default)]
pub struct PositionHistory {
    positions: FxHashMap<u64, u32>,
}

impl PositionHistory {
    pub fn new() -> Self {
        Self {
            positions: FxHashMap::default(),
        }
    }

    /// Record one more occurrence of `key`, returning the new count.
    pub fn push(&mut self, key: u64) -> u32 {
        let count = self.positions.entry(key).or_insert(0);
        *count += 1;
        *count
    }

    pub fn occurrences(&self, key: u64) -> u32 {
        self.positions.get(&key).copied().unwrap_or(0)
    }

    pub fn distinct_positions(&self) -> usize {
        self.positions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::pieces::{Color, Piece, PieceKind};
    use crate::game::square::Square;

    #[test]
    fn key_depends_on_placement_only() {
        let sq = |s: &str| Square::parse(s).unwrap();

        let mut first = PieceSet::new();
        first.insert(Piece::new(sq("e1"), PieceKind::King, Color::White));
        first.insert(Piece::new(sq("e8"), PieceKind::King, Color::Black));

        // same placement, inserted in another order with different flags
        let mut second = PieceSet::new();
        second.insert(Piece::new(sq("e8"), PieceKind::King, Color::Black));
        let king = second.insert(Piece::new(sq("e1"), PieceKind::King, Color::White));
        second.get_mut(king).unwrap().has_moved = true;

        assert_eq!(position_key(&first), position_key(&second));

        let mut third = first.clone();
        third.insert(Piece::new(sq("d4"), PieceKind::Knight, Color::White));
        assert_ne!(position_key(&first), position_key(&third));
    }

    #[test]
    fn counts_occurrences() {
        let mut history = PositionHistory::new();
        assert_eq!(history.push(7), 1);
        assert_eq!(history.push(9), 1);
        assert_eq!(history.push(7), 2);
        assert_eq!(history.occurrences(7), 2);
        assert_eq!(history.occurrences(8), 0);
        assert_eq!(history.distinct_positions(), 2);
    }
}
