mod board;
mod bot_controller;
mod game_session;
mod session_rng;
mod session_store;
mod types;
mod win_detector;

pub use board::{Board, BoardView};
pub use bot_controller::calculate_move;
pub use game_session::{GameSession, MoveOutcome, SessionView, TurnRecord};
pub use session_rng::SessionRng;
pub use session_store::SessionStore;
pub use types::{GameStatus, Mark, MoveSpec, Position, Variant, WinningLine};
pub use win_detector::{evaluate, find_winning_line, is_draw};
