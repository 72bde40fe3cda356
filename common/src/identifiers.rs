use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelKey(String);

impl ChannelKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ChannelKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ChannelKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for ChannelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the two seats in a session. Only humans carry an identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Player {
    Human(UserId),
    Bot,
}

impl Player {
    pub fn is_bot(&self) -> bool {
        matches!(self, Player::Bot)
    }

    pub fn is_user(&self, user: &UserId) -> bool {
        match self {
            Player::Human(id) => id == user,
            Player::Bot => false,
        }
    }
}

impl From<Option<UserId>> for Player {
    fn from(user: Option<UserId>) -> Self {
        user.map_or(Player::Bot, Player::Human)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human(id) => write!(f, "{}", id),
            Player::Bot => write!(f, "Bot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_opponent_becomes_bot() {
        assert_eq!(Player::from(None), Player::Bot);
        assert_eq!(
            Player::from(Some(UserId::new("bob"))),
            Player::Human(UserId::new("bob"))
        );
    }

    #[test]
    fn test_bot_never_matches_a_user() {
        let bob = UserId::new("bob");

        assert!(!Player::Bot.is_user(&bob));
        assert!(Player::Human(bob.clone()).is_user(&bob));
        assert!(!Player::Human(UserId::new("alice")).is_user(&bob));
    }
}
