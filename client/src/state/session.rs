//! Auth-session state for the current console user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionGate`] is the single owner of the token and profile. The route
//! guard reads token presence from it; screens read the profile. It is
//! constructed once and passed down, never reached through a global.
//!
//! INVARIANTS
//! ==========
//! - A profile is only ever present alongside a token.
//! - Every transition is all-or-nothing: a failed login leaves the previous
//!   session exactly as it was.
//! - Only the token is persisted. A restored session has no profile until
//!   [`SessionGate::ensure_profile`] is called.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::auth::Authenticator;
use crate::config::{ClientConfig, DEFAULT_AVATAR_URL, DEFAULT_ROLE};
use crate::net::error::ApiError;
use crate::net::types::{LoginUser, Profile};
use crate::util::storage::{Storage, StorageError};

/// Storage key holding the session token.
pub const TOKEN_KEY: &str = "token";

const PLACEHOLDER_USER_ID: u64 = 1;
const PLACEHOLDER_USERNAME: &str = "Admin";

/// Values stamped onto profiles the backend does not fully describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDefaults {
    pub role: String,
    pub avatar_url: String,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self { role: DEFAULT_ROLE.to_owned(), avatar_url: DEFAULT_AVATAR_URL.to_owned() }
    }
}

impl From<&ClientConfig> for ProfileDefaults {
    fn from(config: &ClientConfig) -> Self {
        Self { role: config.default_role.clone(), avatar_url: config.default_avatar_url.clone() }
    }
}

/// Token and profile of the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    profile: Option<Profile>,
}

impl Session {
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Token presence is the whole test; the token itself is never validated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Owns the session and the collaborators that change it.
pub struct SessionGate<A, S> {
    session: Session,
    auth: A,
    storage: S,
    defaults: ProfileDefaults,
}

impl<A, S> std::fmt::Debug for SessionGate<A, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGate")
            .field("authenticated", &self.session.is_authenticated())
            .field("has_profile", &self.session.profile.is_some())
            .finish_non_exhaustive()
    }
}

impl<A: Authenticator, S: Storage> SessionGate<A, S> {
    /// Start a gate, picking up any token left in `storage`.
    ///
    /// The profile is never restored. An unreadable store starts logged out.
    pub fn restore(auth: A, storage: S, defaults: ProfileDefaults) -> Self {
        let token = match storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "token store unreadable, starting logged out");
                None
            }
        };
        tracing::debug!(restored = token.is_some(), "session restored");
        Self { session: Session { token, profile: None }, auth, storage, defaults }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.session.profile()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Give up the gate and hand back its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Exchange credentials for a session.
    ///
    /// Returns `true` once the token is persisted and the profile is set.
    /// Every failure, whether rejected credentials, transport trouble, or an
    /// unwritable store, yields `false` with the previous session untouched.
    pub async fn login(&mut self, username: &str, password: &str) -> bool {
        let response = match self.auth.authenticate(username, password).await {
            Ok(response) => response,
            Err(e) => {
                log_login_failure(username, &e);
                return false;
            }
        };
        if response.token.is_empty() {
            tracing::warn!(%username, "login returned an empty token");
            return false;
        }

        let profile = self.profile_from(&response.user);
        if let Err(e) = self.storage.set(TOKEN_KEY, &response.token) {
            tracing::warn!(%username, error = %e, "login succeeded but token could not be persisted");
            return false;
        }

        self.session = Session { token: Some(response.token), profile: Some(profile) };
        tracing::info!(%username, "login succeeded");
        true
    }

    /// Drop the session locally. No network call is made.
    ///
    /// Memory is cleared before storage is touched, so the in-process session
    /// is gone even when the error path is taken.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the persisted token could not be removed.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.session = Session::default();
        self.storage.remove(TOKEN_KEY)
    }

    /// Fill in a placeholder profile when a token exists without one.
    ///
    /// This never calls the network; the placeholder stands in until a real
    /// profile fetch exists. Without a token nothing is synthesized.
    pub fn ensure_profile(&mut self) -> Option<&Profile> {
        if self.session.token.is_some() && self.session.profile.is_none() {
            self.session.profile = Some(self.placeholder_profile());
        }
        self.session.profile.as_ref()
    }

    fn profile_from(&self, user: &LoginUser) -> Profile {
        let username = if user.name.is_empty() { &user.username } else { &user.name };
        let avatar_url = user
            .avatar
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or(&self.defaults.avatar_url);
        Profile {
            id: user.id.unwrap_or(PLACEHOLDER_USER_ID),
            username: username.clone(),
            avatar_url: avatar_url.to_owned(),
            role: self.defaults.role.clone(),
        }
    }

    fn placeholder_profile(&self) -> Profile {
        Profile {
            id: PLACEHOLDER_USER_ID,
            username: PLACEHOLDER_USERNAME.to_owned(),
            avatar_url: self.defaults.avatar_url.clone(),
            role: self.defaults.role.clone(),
        }
    }
}

fn log_login_failure(username: &str, error: &ApiError) {
    if error.is_rejection() {
        tracing::info!(%username, reason = %error, "login rejected");
    } else {
        tracing::warn!(%username, error = %error, "login could not be completed");
    }
}
