//! # Session Model
//!
//! Stub login gate. There is no credential check: any non-blank name opens
//! the gate, and the listing stays hidden while no user is logged in.

#[derive(Debug, Clone, Default)]
pub struct SessionModel {
    users: Vec<String>,
}

impl SessionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a user; returns true when this call opened the gate
    pub fn login(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let was_open = self.is_logged_in();
        self.users.push(name.to_string());
        !was_open
    }

    pub fn logout(&mut self) {
        self.users.clear();
    }

    pub fn is_logged_in(&self) -> bool {
        !self.users.is_empty()
    }

    /// Most recently logged in user
    pub fn current_user(&self) -> Option<&str> {
        self.users.last().map(String::as_str)
    }
}
