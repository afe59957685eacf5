use crate::game::{Color, PieceKind, Square};
use strum::EnumCount;

pub struct LCG {
    state: u64,
}

impl LCG {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub const fn next_u64(mut self) -> (u64, Self) {
        // https://en.wikipedia.org/wiki/Linear_congruential_generator
        const A: u64 = 6364136223846793005;
        const C: u64 = 1442695040888963407;

        self.state = self.state.wrapping_mul(A).wrapping_add(C);

        // the low bits of a power-of-two LCG are weak, fold the high ones down
        let mut value = self.state;
        value ^= value >> 33;
        value = value.wrapping_mul(0xff51afd7ed558ccd);
        value ^= value >> 33;

        (value, self)
    }
}

/// Random keys for every (color, kind, square) triple.
///
/// Only piece placement is keyed; side to move, castling rights and en
/// passant eligibility are deliberately not part of a position's identity
/// for repetition purposes.
pub struct ZobristKeys {
    pub pieces: [[[u64; 64]; PieceKind::COUNT]; Color::COUNT],
}

impl ZobristKeys {
    pub const fn new() -> Self {
        let mut rng = LCG::new(0xbadc0ffee);

        let mut pieces = [[[0u64; 64]; PieceKind::COUNT]; Color::COUNT];
        let mut color = 0;
        while color < Color::COUNT {
            let mut kind = 0;
            while kind < PieceKind::COUNT {
                let mut square_idx = 0;
                while square_idx < 64 {
                    let (value, new_rng) = rng.next_u64();
                    pieces[color][kind][square_idx] = value;
                    rng = new_rng;
                    square_idx += 1;
                }

                kind += 1;
            }

            color += 1;
        }

        Self { pieces }
    }

    pub fn piece_key(&self, color: Color, kind: PieceKind, square: Square) -> u64 {
        self.pieces[color as usize][kind as usize][square.index()]
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::new();
