use super::board::Board;
use super::pieces::{PieceId, PieceKind};
use super::square::Square;
use rayon::prelude::*;

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Boards reachable from `board` by playing `id` to `to`; one per
/// promotion choice when the move promotes.
fn successors(board: &Board, id: PieceId, to: Square) -> Vec<(Option<PieceKind>, Board)> {
    let mut next = board.clone();
    if !next.play_move(id, to) {
        return vec![];
    }

    if next.pending_promotion().is_none() {
        return vec![(None, next)];
    }

    PROMOTION_KINDS
        .iter()
        .filter_map(|&kind| {
            let mut promoted = next.clone();
            promoted.promote(kind).then_some((Some(kind), promoted))
        })
        .collect()
}

/// Number of positions reachable in exactly `depth` plies.
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    if board.result().is_over() {
        return 0;
    }

    let moves = board.legal_moves();

    // Bulk counting
    if depth == 1 && board.pending_promotion().is_none() {
        return moves
            .iter()
            .map(|&(id, to)| match board.piece(id) {
                Some(piece)
                    if piece.kind == PieceKind::Pawn
                        && to.rank() == piece.color.promotion_rank() =>
                {
                    PROMOTION_KINDS.len() as u64
                }
                _ => 1,
            })
            .sum();
    }

    moves
        .iter()
        .flat_map(|&(id, to)| successors(board, id, to))
        .map(|(_, next)| perft(&next, depth - 1))
        .sum()
}

/// Per-root-move breakdown of [`perft`], labelled in long algebraic form
/// (`e2e4`, `b7b8q`). Root moves are counted in parallel.
pub fn perft_divide(board: &Board, depth: usize) -> Vec<(String, u64)> {
    if depth == 0 {
        return vec![];
    }

    let mut breakdown = board
        .legal_moves()
        .par_iter()
        .flat_map_iter(|&(id, to)| {
            let from = board.piece(id).map(|piece| piece.square);
            successors(board, id, to)
                .into_iter()
                .map(move |(promotion, next)| {
                    let label = format!(
                        "{}{}{}",
                        from.map(|s| s.unparse()).unwrap_or_default(),
                        to.unparse(),
                        promotion.map(|k| k.to_char().to_string()).unwrap_or_default()
                    );
                    (label, perft(&next, depth - 1))
                })
        })
        .collect::<Vec<_>>();

    breakdown.sort();
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::new_standard_board;
    use crate::game::pieces::Color;
    use crate::game::rules::Rules;

    #[test]
    fn starting_position_counts() {
        let board = new_standard_board();
        assert_eq!(perft(&board, 1), 20);
        assert_eq!(perft(&board, 2), 400);
        assert_eq!(perft(&board, 3), 8902);
    }

    #[test]
    fn divide_sums_to_total() {
        let board = new_standard_board();
        let breakdown = perft_divide(&board, 2);

        assert_eq!(breakdown.len(), 20);
        assert!(breakdown.iter().all(|(_, count)| *count == 20));
        assert_eq!(breakdown.iter().map(|(_, c)| c).sum::<u64>(), perft(&board, 2));
    }

    #[test]
    fn promotions_branch_four_ways() {
        let board = Board::from_placement("7k/P7/8/8/8/8/8/K7", Color::White, Rules::default())
            .unwrap();

        // a8 promotes (4) plus three king steps
        assert_eq!(perft(&board, 1), 7);

        let labels = perft_divide(&board, 1)
            .into_iter()
            .map(|(label, _)| label)
            .collect::<Vec<_>>();
        assert!(labels.contains(&"a7a8q".to_string()));
        assert!(labels.contains(&"a7a8n".to_string()));
    }
}
