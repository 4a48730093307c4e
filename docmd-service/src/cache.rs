//! Rendered results kept for a freshness window.

use std::time::{Duration, SystemTime};

use dashmap::DashMap;
use docmd_converters_core::Rendered;

/// How long a rendered result is served before it is rebuilt.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(5 * 60);

/// A rendered document and when it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResult {
    pub title: String,
    pub content: String,
    pub last_update: SystemTime,
}

impl CachedResult {
    /// Whether this result is younger than `max_age` at `now`.
    ///
    /// Results stamped in the future (clock moved backwards) are stale.
    #[must_use]
    pub fn is_fresh(&self, max_age: Duration, now: SystemTime) -> bool {
        now.duration_since(self.last_update)
            .is_ok_and(|age| age < max_age)
    }

    #[must_use]
    pub fn to_rendered(&self) -> Rendered {
        Rendered {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

/// Concurrent map from document identifier to its last rendered result.
#[derive(Debug)]
pub struct ResultCache {
    entries: DashMap<String, CachedResult>,
    max_age: Duration,
}

impl ResultCache {
    #[must_use]
    pub fn new(max_age: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            max_age,
        }
    }

    #[must_use]
    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// The cached result for `id`, if it is still fresh.
    #[must_use]
    pub fn get_fresh(&self, id: &str) -> Option<CachedResult> {
        let now = SystemTime::now();
        self.entries
            .get(id)
            .filter(|entry| entry.is_fresh(self.max_age, now))
            .map(|entry| entry.value().clone())
    }

    /// The cached result for `id` regardless of age.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<CachedResult> {
        self.entries.get(id).map(|entry| entry.value().clone())
    }

    /// Store `rendered` for `id`, stamped now.
    pub fn insert(&self, id: &str, rendered: &Rendered) {
        self.insert_at(id, rendered, SystemTime::now());
    }

    /// Store `rendered` for `id` with an explicit timestamp.
    pub fn insert_at(&self, id: &str, rendered: &Rendered, last_update: SystemTime) {
        self.entries.insert(
            id.to_string(),
            CachedResult {
                title: rendered.title.clone(),
                content: rendered.content.clone(),
                last_update,
            },
        );
    }

    /// Drop every entry that is no longer fresh, returning how many went.
    pub fn evict_stale(&self) -> usize {
        let now = SystemTime::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_fresh(self.max_age, now));
        before.saturating_sub(self.entries.len())
    }

    /// Drop the entry for `id`, returning it if present.
    pub fn invalidate(&self, id: &str) -> Option<CachedResult> {
        self.entries.remove(id).map(|(_, entry)| entry)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_AGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(content: &str) -> Rendered {
        Rendered {
            title: "Doc".to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn fresh_entries_are_served() {
        let cache = ResultCache::default();
        cache.insert("doc", &rendered("hello"));
        let hit = cache.get_fresh("doc").map(|entry| entry.to_rendered());
        assert_eq!(hit, Some(rendered("hello")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn stale_entries_are_kept_but_not_served() {
        let cache = ResultCache::default();
        let long_ago = SystemTime::now() - Duration::from_secs(10 * 60);
        cache.insert_at("doc", &rendered("old"), long_ago);
        assert!(cache.get_fresh("doc").is_none());
        assert!(cache.get("doc").is_some());
    }

    #[test]
    fn future_timestamps_are_stale() {
        let now = SystemTime::now();
        let entry = CachedResult {
            title: String::new(),
            content: String::new(),
            last_update: now + Duration::from_secs(60),
        };
        assert!(!entry.is_fresh(DEFAULT_MAX_AGE, now));
        assert!(entry.is_fresh(DEFAULT_MAX_AGE, now + Duration::from_secs(61)));
    }

    #[test]
    fn evict_stale_drops_only_expired_entries() {
        let cache = ResultCache::default();
        let long_ago = SystemTime::now() - Duration::from_secs(10 * 60);
        cache.insert_at("old", &rendered("old"), long_ago);
        cache.insert_at("older", &rendered("older"), long_ago - Duration::from_secs(60));
        cache.insert("new", &rendered("new"));

        assert_eq!(cache.evict_stale(), 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("new").is_some());
        assert_eq!(cache.evict_stale(), 0);
    }

    #[test]
    fn invalidate_removes_entry() {
        let cache = ResultCache::default();
        cache.insert("doc", &rendered("x"));
        assert!(cache.invalidate("doc").is_some());
        assert!(cache.invalidate("doc").is_none());
        assert!(cache.is_empty());
    }
}
