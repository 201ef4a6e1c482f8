//! # Favorite Set
//!
//! In-memory set of favorite names. Lives for the session only.

use std::collections::HashSet;

/// Names the user marked as favorite
///
/// Keyed by name, so two references sharing a name share one flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    names: HashSet<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `name` and return the new membership
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
