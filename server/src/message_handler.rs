use common::games::{GameStatus, MoveOutcome, MoveSpec, SessionStore, SessionView, TurnRecord, Variant};
use common::{log, ChannelKey, GameError, Player, UserId};

use crate::command::{Command, IncomingMessage};

/// Turns chat commands into core calls and core results into reply texts.
pub struct MessageHandler {
    store: SessionStore,
    prefix: String,
}

fn mention(player: &Player) -> String {
    match player {
        Player::Human(id) => format!("@{}", id),
        Player::Bot => "the bot".to_string(),
    }
}

fn board_block(board: &str) -> String {
    format!("```\n{}\n```", board)
}

impl MessageHandler {
    pub fn new(store: SessionStore, prefix: String) -> Self {
        Self { store, prefix }
    }

    /// Returns the replies to post in the message's channel. Plain chat yields none.
    pub async fn handle(&self, message: &IncomingMessage) -> Vec<String> {
        let Some(command) = Command::parse(&self.prefix, &message.text) else {
            return Vec::new();
        };
        let channel = &message.channel;
        let user = &message.user;

        match command {
            Command::Start { opponent } => {
                self.start(channel, Variant::TicTacToe, user, opponent).await
            }
            Command::Connect4 { opponent } => {
                self.start(channel, Variant::ConnectFour, user, opponent).await
            }
            Command::Move { args } => self.play(channel, user, &args).await,
            Command::Stop => vec![self.stop(channel).await],
            Command::Help => vec![self.help()],
        }
    }

    async fn start(
        &self,
        channel: &ChannelKey,
        variant: Variant,
        host: &UserId,
        opponent: Option<UserId>,
    ) -> Vec<String> {
        match self
            .store
            .create_session(channel, variant, host.clone(), opponent)
            .await
        {
            Ok(view) => {
                let mut replies = vec![self.started_text(&view)];
                replies.extend(turn_replies(&view.opening, &view.status, Some(&view.turn)));
                replies
            }
            Err(GameError::SessionAlreadyActive) => vec![format!(
                "A game is already active in this channel. Use {}stop to end it first.",
                self.prefix
            )],
            Err(e) => {
                log!("[channel:{}] Failed to start game: {}", channel, e);
                vec![e.to_string()]
            }
        }
    }

    fn started_text(&self, view: &SessionView) -> String {
        format!(
            "{} game started between {} and {}!\n{}",
            view.variant.display_name(),
            mention(&view.player_a),
            mention(&view.player_b),
            board_block(&view.board)
        )
    }

    async fn play(&self, channel: &ChannelKey, user: &UserId, args: &[String]) -> Vec<String> {
        let Some(view) = self.store.get_session(channel).await else {
            return vec![self.no_game_text()];
        };
        if !view.turn.is_user(user) {
            return vec![format!("It's not your turn, @{}!", user)];
        }

        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let result = match MoveSpec::parse(view.variant, &args) {
            Ok(mv) => self.store.apply_move(channel, user, mv).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(outcome) => outcome_replies(&outcome),
            Err(e) => vec![self.error_text(e, view.variant, user)],
        }
    }

    async fn stop(&self, channel: &ChannelKey) -> String {
        match self.store.stop_session(channel).await {
            Ok(()) => "Game stopped.".to_string(),
            Err(_) => "No game is currently active in this channel.".to_string(),
        }
    }

    fn help(&self) -> String {
        let p = &self.prefix;
        format!(
            "Commands:\n{p}start [@opponent] - play Tic-Tac-Toe (against the bot if no opponent)\n\
             {p}connect4 [@opponent] - play Connect 4\n\
             {p}move <row> <col> | {p}move <col> - make a move\n\
             {p}stop - end the current game"
        )
    }

    fn no_game_text(&self) -> String {
        format!(
            "No game is active. Use {p}start or {p}connect4 to begin.",
            p = self.prefix
        )
    }

    fn error_text(&self, error: GameError, variant: Variant, user: &UserId) -> String {
        match error {
            GameError::NoActiveSession => self.no_game_text(),
            GameError::NotYourTurn => format!("It's not your turn, @{}!", user),
            GameError::OutOfRange => match variant {
                Variant::TicTacToe => format!(
                    "Row and column must be between 0 and {}.",
                    variant.rows().min(variant.cols()) - 1
                ),
                Variant::ConnectFour => {
                    format!("Column must be between 0 and {}.", variant.cols() - 1)
                }
            },
            GameError::CellOccupied => "That spot is already taken.".to_string(),
            GameError::ColumnFull => "This column is full.".to_string(),
            GameError::MalformedMove(hint) => hint,
            GameError::SessionAlreadyActive => {
                "A game is already active in this channel.".to_string()
            }
        }
    }
}

fn outcome_replies(outcome: &MoveOutcome) -> Vec<String> {
    turn_replies(&outcome.placements, &outcome.status, outcome.turn.as_ref())
}

/// One reply per placement: its board plus what happens next.
fn turn_replies(
    placements: &[TurnRecord],
    final_status: &GameStatus,
    final_turn: Option<&Player>,
) -> Vec<String> {
    placements
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let status_line = match placements.get(i + 1) {
                Some(next) => format!("Now {}'s turn!", mention(&next.player)),
                None => match (final_status, final_turn) {
                    (GameStatus::Won(_), _) => format!("{} wins!", mention(&record.player)),
                    (GameStatus::Draw, _) => "It's a draw!".to_string(),
                    (GameStatus::InProgress, Some(turn)) => format!("Now {}'s turn!", mention(turn)),
                    (GameStatus::InProgress, None) => String::new(),
                },
            };
            format!("{}\n{}", board_block(&record.board), status_line)
        })
        .collect()
}
