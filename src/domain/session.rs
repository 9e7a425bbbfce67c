use serde::{Deserialize, Serialize};

/// The single valid username/password pair, supplied at process start.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Gates access to the booking workflow for the process lifetime.
///
/// Holds one authenticated flag; there is no identity beyond it. A failed
/// login is a terminal result for that attempt, not an error to recover
/// from, so `login` reports plain `bool` and callers surface one generic
/// message without revealing which field was wrong.
#[derive(Debug, Clone)]
pub struct SessionGuard {
    credentials: Credentials,
    authenticated: bool,
}

impl SessionGuard {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            authenticated: false,
        }
    }

    /// Case-sensitive exact match against the configured pair. After a
    /// failed attempt the flag is false, whatever it was before.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        self.authenticated =
            self.credentials.username == username && self.credentials.password == password;
        self.authenticated
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
