use super::board::Board;
use super::session_rng::SessionRng;
use super::types::{MoveSpec, Variant};

/// Picks a uniformly random legal move. `None` means the bot has nothing to play.
///
/// The legal set is rebuilt on every call; consecutive bot turns see the current board.
pub fn calculate_move(board: &Board, variant: Variant, rng: &mut SessionRng) -> Option<MoveSpec> {
    let available_moves = board.legal_moves(variant);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.pick_index(available_moves.len());
    Some(available_moves[idx])
}
