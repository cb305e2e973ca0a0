//! Session state management
//!
//! The session store is the single source of truth for authentication state.
//! The session is evidenced by exactly one opaque token persisted in the
//! config file; the authenticated flag is always derived from the token,
//! never stored, so the two cannot drift apart. Observers subscribe to a
//! watch channel and are notified synchronously on every change.

use tokio::sync::watch;

use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Snapshot of the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
}

impl SessionState {
    /// The session token, when authenticated.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// True iff a non-empty token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// Owns the session token and its persistence.
///
/// Mutations are last-writer-wins: concurrent logins are not coordinated,
/// matching the single-logical-writer model of the client.
pub struct SessionStore {
    config_path: Option<String>,
    tx: watch::Sender<SessionState>,
}

impl SessionStore {
    /// Restore the session from the persisted config.
    ///
    /// Any non-empty stored token is trusted as-is; no freshness or
    /// structure validation is performed. A missing config file is an
    /// unauthenticated session, not an error.
    pub fn restore(config_path: Option<&str>) -> Result<Self> {
        let token = match Config::load_at(config_path) {
            Ok(config) => config.user_token.filter(|t| !t.is_empty()),
            Err(Error::Config(ConfigError::NotFound)) => None,
            Err(err) => return Err(err),
        };

        if token.is_some() {
            log::debug!("restored persisted session token");
        }

        let (tx, _rx) = watch::channel(SessionState { token });
        Ok(Self {
            config_path: config_path.map(String::from),
            tx,
        })
    }

    /// Current session snapshot.
    pub fn state(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    /// True iff the session holds a non-empty token.
    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().is_authenticated()
    }

    /// Subscribe to session changes. Each `login`/`logout` publishes the new
    /// state to all receivers before returning.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    /// Persist `token` and mark the session authenticated.
    ///
    /// Precondition: `token` must be non-empty. Callers obtain it from the
    /// auth gateway and persist exactly the value the server issued.
    pub fn login(&self, token: &str) -> Result<()> {
        debug_assert!(!token.is_empty(), "login requires a non-empty token");

        let mut config = self.load_or_default()?;
        config.user_token = Some(token.to_string());
        config.save_at(self.config_path.as_deref())?;

        self.tx.send_replace(SessionState {
            token: Some(token.to_string()),
        });
        Ok(())
    }

    /// Clear the persisted token and mark the session unauthenticated.
    ///
    /// Idempotent: logging out of an already-unauthenticated session leaves
    /// identical observable state.
    pub fn logout(&self) -> Result<()> {
        match Config::load_at(self.config_path.as_deref()) {
            Ok(mut config) => {
                if config.user_token.take().is_some() {
                    config.save_at(self.config_path.as_deref())?;
                }
            }
            Err(Error::Config(ConfigError::NotFound)) => {}
            Err(err) => return Err(err),
        }

        self.tx.send_replace(SessionState::default());
        Ok(())
    }

    fn load_or_default(&self) -> Result<Config> {
        match Config::load_at(self.config_path.as_deref()) {
            Ok(config) => Ok(config),
            Err(Error::Config(ConfigError::NotFound)) => Ok(Config::default()),
            Err(err) => Err(err),
        }
    }
}
