// Proxy: stands in front of the real authentication service and only
// releases user data to the user who logged in through it.

use std::collections::HashMap;

use crate::error::{PatternError, Result};
use crate::transcript::Transcript;

pub trait UserAuthentication {
    fn login(&mut self, username: &str, password: &str) -> bool;
    fn get_user_data(&self, username: &str) -> Result<String>;
}

pub struct RealUserAuthentication {
    passwords: HashMap<&'static str, &'static str>,
    user_data: HashMap<&'static str, &'static str>,
}

impl RealUserAuthentication {
    pub fn new() -> Self {
        Self {
            passwords: HashMap::from([("alice", "password123"), ("bob", "pass456")]),
            user_data: HashMap::from([
                ("alice", "Alice's sensitive data"),
                ("bob", "Bob's sensitive data"),
            ]),
        }
    }
}

impl Default for RealUserAuthentication {
    fn default() -> Self {
        Self::new()
    }
}

impl UserAuthentication for RealUserAuthentication {
    fn login(&mut self, username: &str, password: &str) -> bool {
        self.passwords.get(username) == Some(&password)
    }

    fn get_user_data(&self, username: &str) -> Result<String> {
        self.user_data
            .get(username)
            .map(|data| data.to_string())
            .ok_or_else(|| PatternError::UnknownUser {
                user: username.to_string(),
            })
    }
}

pub struct AuthenticationProxy<S> {
    real: S,
    authenticated_user: Option<String>,
}

impl<S: UserAuthentication> AuthenticationProxy<S> {
    pub fn new(real: S) -> Self {
        Self {
            real,
            authenticated_user: None,
        }
    }

    pub fn authenticated_user(&self) -> Option<&str> {
        self.authenticated_user.as_deref()
    }
}

impl<S: UserAuthentication> UserAuthentication for AuthenticationProxy<S> {
    fn login(&mut self, username: &str, password: &str) -> bool {
        let ok = self.real.login(username, password);
        if ok {
            self.authenticated_user = Some(username.to_string());
        } else {
            tracing::warn!(username, "login rejected");
        }
        ok
    }

    fn get_user_data(&self, username: &str) -> Result<String> {
        if self.authenticated_user.as_deref() != Some(username) {
            return Err(PatternError::UnauthorizedAccess {
                user: username.to_string(),
            });
        }
        self.real.get_user_data(username)
    }
}

pub fn demo() -> Transcript {
    let mut proxy = AuthenticationProxy::new(RealUserAuthentication::new());
    proxy.login("alice", "password123");

    ["alice", "bob"]
        .into_iter()
        .map(|user| match proxy.get_user_data(user) {
            Ok(data) => data,
            Err(err) => format!("Error: {err}"),
        })
        .collect()
}
