use super::square::Square;
use std::ops::Not;
use strum_macros::{EnumCount, EnumIter, FromRepr};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, EnumCount, FromRepr)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, EnumCount, FromRepr)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl Color {
    /// Rank direction this side's pawns advance in.
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl PieceKind {
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn   => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook   => 'r',
            PieceKind::Queen  => 'q',
            PieceKind::King   => 'k',
        }
    }

    /// Kinds a pawn may be replaced with on the last rank.
    pub fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }

    pub fn is_minor(self) -> bool {
        matches!(self, PieceKind::Knight | PieceKind::Bishop)
    }
}

/// Stable handle of a piece inside a board's arena.
///
/// Ids survive moves and promotion; a captured piece's id stops resolving.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) usize);

#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub square: Square,
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
    /// Pawn-only: `Some(true)` for the single ply after a two-square advance.
    pub en_passant: Option<bool>,
    pub(crate) legal_destinations: Vec<Square>,
}

impl Piece {
    pub fn new(square: Square, kind: PieceKind, color: Color) -> Piece {
        Piece {
            square,
            kind,
            color,
            has_moved: false,
            en_passant: match kind {
                PieceKind::Pawn => Some(false),
                _ => None,
            },
            legal_destinations: vec![],
        }
    }

    pub fn is_en_passant_eligible(&self) -> bool {
        self.en_passant == Some(true)
    }

    /// Destinations cached at the last recomputation; empty when it is not
    /// this piece's side to move.
    pub fn legal_destinations(&self) -> &[Square] {
        &self.legal_destinations
    }

    /// Swap the kind in place, keeping square, color and identity.
    pub(crate) fn set_kind(&mut self, kind: PieceKind) {
        self.kind = kind;
        self.en_passant = match kind {
            PieceKind::Pawn => Some(false),
            _ => None,
        };
    }

    /// Letter used on the console board: uppercase for White.
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.to_char().to_ascii_uppercase(),
            Color::Black => self.kind.to_char(),
        }
    }
}

/// Arena of pieces owned by a board.
///
/// Pieces live in slots addressed by [`PieceId`]; a 64-entry mailbox maps
/// squares back to ids. Cloning the set deep-copies every piece, so a clone
/// never shares state with its source.
#[derive(Clone, Debug)]
pub struct PieceSet {
    slots: Vec<Option<Piece>>,
    mailbox: [Option<PieceId>; 64],
}

impl PieceSet {
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(32),
            mailbox: [None; 64],
        }
    }

    /// Place a new piece, replacing (capturing) anything already on its square.
    pub fn insert(&mut self, piece: Piece) -> PieceId {
        if let Some(occupant) = self.id_at(piece.square) {
            self.remove(occupant);
        }

        let id = PieceId(self.slots.len());
        self.mailbox[piece.square.index()] = Some(id);
        self.slots.push(Some(piece));
        id
    }

    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    pub fn id_at(&self, square: Square) -> Option<PieceId> {
        self.mailbox[square.index()]
    }

    pub fn at(&self, square: Square) -> Option<&Piece> {
        self.id_at(square).and_then(|id| self.get(id))
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.mailbox[square.index()].is_some()
    }

    pub fn is_occupied_by(&self, square: Square, color: Color) -> bool {
        self.at(square).is_some_and(|piece| piece.color == color)
    }

    pub fn remove(&mut self, id: PieceId) -> Option<Piece> {
        let piece = self.slots.get_mut(id.0)?.take()?;
        self.mailbox[piece.square.index()] = None;
        Some(piece)
    }

    /// Move a piece to `to`, removing whatever stood there. Returns the
    /// removed piece, if any.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Square) -> Option<Piece> {
        let from = self.get(id)?.square;
        if from == to {
            return None;
        }

        let captured = match self.id_at(to) {
            Some(occupant) => self.remove(occupant),
            None => None,
        };

        self.mailbox[from.index()] = None;
        self.mailbox[to.index()] = Some(id);
        if let Some(piece) = self.get_mut(id) {
            piece.square = to;
        }

        captured
    }

    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|piece| (PieceId(i), piece)))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Piece> {
        self.slots.iter_mut().flatten()
    }

    pub(crate) fn iter_mut_with_ids(&mut self) -> impl Iterator<Item = (PieceId, &mut Piece)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|piece| (PieceId(i), piece)))
    }

    pub fn of_color(&self, color: Color) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.iter().filter(move |(_, piece)| piece.color == color)
    }

    pub fn ids(&self) -> Vec<PieceId> {
        self.iter().map(|(id, _)| id).collect()
    }

    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.of_color(color)
            .map(|(_, piece)| piece)
            .find(|piece| piece.kind == PieceKind::King)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PieceSet {
    fn default() -> Self {
        Self::new()
    }
}
