//! Session State
//!
//! The signed-in identity, mirrored to durable browser storage so a reload
//! keeps the user logged in.

/// Storage key for the bearer token
pub const TOKEN_KEY: &str = "access_token";
/// Storage key for the signed-in username
pub const USERNAME_KEY: &str = "current_username";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Identity {
    token: String,
    username: String,
}

/// Token and username, both present or both absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn signed_in(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            identity: Some(Identity {
                token: token.into(),
                username: username.into(),
            }),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.identity.as_ref().map(|id| id.token.as_str())
    }

    pub fn username(&self) -> Option<&str> {
        self.identity.as_ref().map(|id| id.username.as_str())
    }
}

/// Durable string key-value storage
pub trait SessionStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(_) => {
                log::warn!("local storage is unavailable");
                None
            }
        }
    }
}

impl SessionStore for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else { return };
        if storage.set_item(key, value).is_err() {
            log::warn!("failed to persist {key}");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else { return };
        if storage.remove_item(key).is_err() {
            log::warn!("failed to remove {key}");
        }
    }
}

/// Owns the current session and keeps storage in step with it
#[derive(Debug)]
pub struct SessionManager<S> {
    store: S,
    session: Session,
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: Session::default(),
        }
    }

    /// Load a persisted session. The token is not checked against the
    /// server; an expired one surfaces on the first authenticated call.
    pub fn restore(&mut self) -> &Session {
        self.session = match (self.store.load(TOKEN_KEY), self.store.load(USERNAME_KEY)) {
            (Some(token), Some(username)) if !token.is_empty() => {
                log::info!("restored session for {username}");
                Session::signed_in(token, username)
            }
            _ => Session::default(),
        };
        &self.session
    }

    pub fn establish(&mut self, token: &str, username: &str) -> &Session {
        self.store.save(TOKEN_KEY, token);
        self.store.save(USERNAME_KEY, username);
        self.session = Session::signed_in(token, username);
        log::info!("signed in as {username}");
        &self.session
    }

    pub fn clear(&mut self) -> &Session {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USERNAME_KEY);
        if self.session.is_authenticated() {
            log::info!("session cleared");
        }
        self.session = Session::default();
        &self.session
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn token(&self) -> Option<String> {
        self.session.token().map(str::to_string)
    }
}
