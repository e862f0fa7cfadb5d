use std::{
    collections::{HashMap, hash_map::Entry},
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::domain::{Color, ColorAssigner, UserName};

/// Color assigner that memoizes the hash-based color of every user it sees.
///
/// The map is never pruned.
#[derive(Default)]
pub struct MemoizedColorAssigner {
    colors: Mutex<HashMap<UserName, Color>>,
}

impl MemoizedColorAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a memoized color.
    pub fn known_users(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<UserName, Color>> {
        self.colors.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ColorAssigner for MemoizedColorAssigner {
    fn assign(&self, user: &UserName) -> Color {
        if let Some(color) = self.lock().get(user) {
            return *color;
        }

        // Hash outside the lock; a concurrent first sighting computes the same color.
        let color = Color::for_user(user);
        match self.lock().entry(user.clone()) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                tracing::debug!("Assigned color '{}' to user '{}'", color, user);
                *entry.insert(color)
            }
        }
    }
}
