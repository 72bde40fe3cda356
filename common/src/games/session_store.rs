use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

use super::game_session::{GameSession, MoveOutcome, SessionView};
use super::session_rng::SessionRng;
use super::types::{MoveSpec, Variant};
use crate::config::{EngineSettings, ExistingSessionPolicy};
use crate::error::{GameError, Result};
use crate::identifiers::{ChannelKey, Player, UserId};
use crate::{log, log_debug};

type SharedSession = Arc<Mutex<GameSession>>;

/// Live games keyed by channel. The map lock is only held for lookups and updates;
/// moves lock their own session, so channels never wait on each other.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<ChannelKey, SharedSession>>>,
    settings: EngineSettings,
    created: Arc<AtomicU64>,
}

impl SessionStore {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            settings,
            created: Arc::new(AtomicU64::new(0)),
        }
    }

    fn next_rng(&self) -> SessionRng {
        let ordinal = self.created.fetch_add(1, Ordering::Relaxed);
        match self.settings.bot_seed {
            Some(seed) => SessionRng::new(seed.wrapping_add(ordinal)),
            None => SessionRng::from_random(),
        }
    }

    /// Starts a game in `key` with `host` as the first player. A missing opponent means the bot.
    pub async fn create_session(
        &self,
        key: &ChannelKey,
        variant: Variant,
        host: UserId,
        opponent: Option<UserId>,
    ) -> Result<SessionView> {
        let rng = self.next_rng();
        log_debug!("[channel:{}] Bot seed {}", key, rng.seed());
        let session = GameSession::new(variant, Player::Human(host), Player::from(opponent), rng);
        let view = session.view();

        let mut sessions = self.sessions.lock().await;
        if sessions.contains_key(key) {
            match self.settings.existing_session_policy {
                ExistingSessionPolicy::Reject => return Err(GameError::SessionAlreadyActive),
                ExistingSessionPolicy::Replace => {
                    log!("[channel:{}] Replacing active game", key);
                }
            }
        }

        if view.status.is_terminal() {
            sessions.remove(key);
        } else {
            sessions.insert(key.clone(), Arc::new(Mutex::new(session)));
        }
        drop(sessions);

        log!(
            "[channel:{}] {} started: {} vs {}",
            key,
            variant.display_name(),
            view.player_a,
            view.player_b
        );
        Ok(view)
    }

    /// Applies a move in `key`. A game that ends here is removed before returning.
    pub async fn apply_move(
        &self,
        key: &ChannelKey,
        user: &UserId,
        mv: MoveSpec,
    ) -> Result<MoveOutcome> {
        let session = self
            .sessions
            .lock()
            .await
            .get(key)
            .cloned()
            .ok_or(GameError::NoActiveSession)?;

        let outcome = session.lock().await.apply_move(user, mv)?;

        if outcome.status.is_terminal() {
            let mut sessions = self.sessions.lock().await;
            if sessions
                .get(key)
                .is_some_and(|current| Arc::ptr_eq(current, &session))
            {
                sessions.remove(key);
            }
            drop(sessions);
            log!("[channel:{}] Game over: {:?}", key, outcome.status);
        }

        Ok(outcome)
    }

    pub async fn stop_session(&self, key: &ChannelKey) -> Result<()> {
        let removed = self.sessions.lock().await.remove(key);
        match removed {
            Some(_) => {
                log!("[channel:{}] Game stopped", key);
                Ok(())
            }
            None => Err(GameError::NoActiveSession),
        }
    }

    pub async fn get_session(&self, key: &ChannelKey) -> Option<SessionView> {
        let session = self.sessions.lock().await.get(key).cloned()?;
        let view = session.lock().await.view();
        Some(view)
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
