use common::{ChannelKey, UserId};

/// One chat line as delivered to the adapter: `<channel> <user> <message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub channel: ChannelKey,
    pub user: UserId,
    pub text: String,
}

impl IncomingMessage {
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.trim().splitn(3, char::is_whitespace);
        let channel = parts.next().filter(|s| !s.is_empty())?;
        let user = parts.next().filter(|s| !s.is_empty())?;
        let text = parts.next().unwrap_or("").trim();

        Some(Self {
            channel: ChannelKey::new(channel),
            user: UserId::new(user),
            text: text.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start { opponent: Option<UserId> },
    Connect4 { opponent: Option<UserId> },
    Move { args: Vec<String> },
    Stop,
    Help,
}

impl Command {
    /// `None` for ordinary chat and unknown commands.
    pub fn parse(prefix: &str, text: &str) -> Option<Self> {
        let rest = text.strip_prefix(prefix)?;
        let mut words = rest.split_whitespace();
        let name = words.next()?;

        match name {
            "start" => Some(Command::Start {
                opponent: words.next().and_then(mention_to_user),
            }),
            "connect4" => Some(Command::Connect4 {
                opponent: words.next().and_then(mention_to_user),
            }),
            "move" => Some(Command::Move {
                args: words.map(str::to_string).collect(),
            }),
            "stop" => Some(Command::Stop),
            "help" => Some(Command::Help),
            _ => None,
        }
    }
}

/// A bare `@` names nobody, so the game falls back to the bot.
fn mention_to_user(word: &str) -> Option<UserId> {
    let name = word.trim_start_matches('@');
    (!name.is_empty()).then(|| UserId::new(name))
}
