/// Tunable limits of the draw rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    /// Half-moves without a pawn move or capture after which the game is drawn.
    pub fifty_move_limit: u32,
    /// Occurrences of one placement that end the game in a draw.
    pub repetition_limit: u32,
    /// Whether dead material (lone kings, a single minor piece, two knights
    /// against a bare king) ends the game.
    pub insufficient_material: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            fifty_move_limit: 50,
            repetition_limit: 3,
            insufficient_material: true,
        }
    }
}
