//! Bounded, deduplicated history of generated passwords.

use std::collections::VecDeque;

use tracing::debug;

use crate::pass::Password;

pub const CAPACITY: usize = 3;

/// Oldest first. Never holds more than [`CAPACITY`] entries or any duplicate.
#[derive(Debug, Default)]
pub struct History {
    entries: VecDeque<Password>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(CAPACITY + 1),
        }
    }

    /// Append `password` unless already present, evicting the oldest entry on overflow.
    pub fn record(&mut self, password: &Password) {
        if self.contains(password) {
            return;
        }
        self.entries.push_back(password.clone());
        if self.entries.len() > CAPACITY {
            // dropping the evicted Password wipes it
            self.entries.pop_front();
            debug!(capacity = CAPACITY, "evicted oldest history entry");
        }
    }

    /// Remove `password` if present. Returns whether anything was removed.
    pub fn remove(&mut self, password: &str) -> bool {
        match self.entries.iter().position(|p| p.as_str() == password) {
            Some(index) => self.remove_at(index).is_some(),
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Password> {
        self.entries.remove(index)
    }

    pub fn contains(&self, password: &Password) -> bool {
        self.entries.contains(password)
    }

    pub fn get(&self, index: usize) -> Option<&Password> {
        self.entries.get(index)
    }

    pub fn list(&self) -> impl Iterator<Item = &Password> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
