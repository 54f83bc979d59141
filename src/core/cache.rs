//! In-memory LRU caches for identity lookups.
//!
//! Teams and players change rarely, and the season-averages fallback needs
//! a player's position right after the roster call already returned it, so
//! both are cached per process. Statistics themselves are never cached.

use lru::LruCache;
use std::{
    collections::HashMap,
    hash::Hash,
    num::NonZeroUsize,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::bdl::types::{Player, Team};
use crate::{PlayerId, TeamId};

/// Thread-safe LRU cache keyed by resource ID.
pub struct LookupCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    entries: Mutex<LruCache<K, V>>,
    capacity: usize,
}

impl<K, V> LookupCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            capacity: capacity.get(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<K, V>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.lock().get(key).cloned()
    }

    pub fn put(&self, key: K, value: V) {
        self.lock().put(key, value);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// `(entries, capacity)`
    pub fn stats(&self) -> (usize, usize) {
        (self.lock().len(), self.capacity)
    }
}

/// Caches shared by the service layer.
pub struct IdentityCache {
    pub teams: LookupCache<TeamId, Team>,
    pub players: LookupCache<PlayerId, Player>,
}

impl IdentityCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            // 30 franchises; a small fixed slice is plenty
            teams: LookupCache::new(capacity.min(64)),
            players: LookupCache::new(capacity),
        }
    }

    pub fn remember_players(&self, players: &[Player]) {
        for player in players {
            self.players.put(player.id, player.clone());
        }
    }

    pub fn clear(&self) {
        self.teams.clear();
        self.players.clear();
    }

    pub fn stats(&self) -> HashMap<&'static str, (usize, usize)> {
        HashMap::from([("teams", self.teams.stats()), ("players", self.players.stats())])
    }
}

impl Default for IdentityCache {
    fn default() -> Self {
        Self::new(256)
    }
}
