use super::board::Board;
use super::bot_controller::calculate_move;
use super::session_rng::SessionRng;
use super::types::{GameStatus, Mark, MoveSpec, Position, Variant, WinningLine};
use super::win_detector::{evaluate, find_winning_line};
use crate::error::{GameError, Result};
use crate::identifiers::{Player, UserId};
use crate::log_debug;

/// Seat A always plays `Mark::PlayerA` and moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Seat {
    A,
    B,
}

impl Seat {
    fn mark(self) -> Mark {
        match self {
            Seat::A => Mark::PlayerA,
            Seat::B => Mark::PlayerB,
        }
    }

    fn other(self) -> Seat {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }
}

/// One placement made while handling a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub player: Player,
    pub mark: Mark,
    pub position: Position,
    /// Board text right after this placement.
    pub board: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The requested move first, followed by any bot replies.
    pub placements: Vec<TurnRecord>,
    pub board: String,
    pub status: GameStatus,
    /// Who moves next; `None` once the game is over.
    pub turn: Option<Player>,
    pub winning_line: Option<WinningLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub variant: Variant,
    pub board: String,
    pub player_a: Player,
    pub player_b: Player,
    pub turn: Player,
    pub status: GameStatus,
    pub occupied: usize,
    /// Bot moves played before the first human turn.
    pub opening: Vec<TurnRecord>,
}

#[derive(Debug)]
pub struct GameSession {
    variant: Variant,
    board: Board,
    player_a: Player,
    player_b: Player,
    current: Seat,
    status: GameStatus,
    rng: SessionRng,
    opening: Vec<TurnRecord>,
}

impl GameSession {
    /// Starts a game with `player_a` to move. If that is the bot, it plays until a human
    /// holds the turn.
    pub fn new(variant: Variant, player_a: Player, player_b: Player, rng: SessionRng) -> Self {
        let mut session = Self {
            variant,
            board: Board::new(variant),
            player_a,
            player_b,
            current: Seat::A,
            status: GameStatus::InProgress,
            rng,
            opening: Vec::new(),
        };

        let mut opening = Vec::new();
        session.play_bot_turns(&mut opening);
        session.opening = opening;
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::A => &self.player_a,
            Seat::B => &self.player_b,
        }
    }

    fn owner(&self, mark: Mark) -> &Player {
        match mark {
            Mark::PlayerA => &self.player_a,
            Mark::PlayerB => &self.player_b,
            Mark::Empty => unreachable!("empty cells never form a line"),
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.status {
            GameStatus::Won(_) => find_winning_line(&self.board, self.variant),
            _ => None,
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            variant: self.variant,
            board: self.board.render().to_string(),
            player_a: self.player_a.clone(),
            player_b: self.player_b.clone(),
            turn: self.current_player().clone(),
            status: self.status.clone(),
            occupied: self.board.occupied_count(),
            opening: self.opening.clone(),
        }
    }

    /// Plays `mv` for `user`, then lets the bot answer if it holds the next turn.
    ///
    /// Every error is returned before the board is touched.
    pub fn apply_move(&mut self, user: &UserId, mv: MoveSpec) -> Result<MoveOutcome> {
        if self.is_terminal() {
            return Err(GameError::NoActiveSession);
        }
        if !self.current_player().is_user(user) {
            return Err(GameError::NotYourTurn);
        }
        if !mv.fits(self.variant) {
            return Err(GameError::MalformedMove(format!(
                "{:?} is not a {} move",
                mv,
                self.variant.display_name()
            )));
        }

        let mut placements = vec![self.place_current(mv)?];
        self.finish_turn();
        self.play_bot_turns(&mut placements);

        Ok(self.outcome(placements))
    }

    fn place_current(&mut self, mv: MoveSpec) -> Result<TurnRecord> {
        let mark = self.current.mark();
        let position = self.board.place(mv, mark)?;
        let player = self.current_player().clone();
        log_debug!("{} placed {:?} at {}", player, mark, position);

        Ok(TurnRecord {
            player,
            mark,
            position,
            board: self.board.render().to_string(),
        })
    }

    /// Post-move step shared by human and bot placements: win, then draw, then hand over.
    fn finish_turn(&mut self) {
        if let Some(mark) = evaluate(&self.board, self.variant) {
            self.status = GameStatus::Won(self.owner(mark).clone());
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current = self.current.other();
        }
    }

    /// Runs bot turns until a human is to move or the game ends.
    ///
    /// Each pass either fills a cell or ends the game, so there are at most
    /// rows * cols passes.
    fn play_bot_turns(&mut self, placements: &mut Vec<TurnRecord>) {
        while !self.is_terminal() && self.current_player().is_bot() {
            let Some(mv) = calculate_move(&self.board, self.variant, &mut self.rng) else {
                self.status = GameStatus::Draw;
                break;
            };

            match self.place_current(mv) {
                Ok(record) => placements.push(record),
                Err(e) => unreachable!("bot picked illegal move {:?}: {}", mv, e),
            }
            self.finish_turn();
        }
    }

    fn outcome(&self, placements: Vec<TurnRecord>) -> MoveOutcome {
        MoveOutcome {
            placements,
            board: self.board.render().to_string(),
            status: self.status.clone(),
            turn: (!self.is_terminal()).then(|| self.current_player().clone()),
            winning_line: self.winning_line(),
        }
    }
}
