//! The monitored-site registry: an owned, insertion-ordered list of sites

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::site::Site;

/// Owns every monitored site. Order is insertion order; removal never
/// reorders the survivors.
#[derive(Debug, Clone, Default)]
pub struct SiteRegistry {
    sites: Vec<Site>,
}

impl SiteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from existing sites, keeping the first of any duplicate ids
    pub fn from_sites(sites: impl IntoIterator<Item = Site>) -> Self {
        let mut seen = HashSet::new();
        let sites = sites
            .into_iter()
            .filter(|site| {
                let fresh = seen.insert(site.id());
                if !fresh {
                    tracing::warn!(id = %site.id(), url = site.url(), "dropping site with duplicate id");
                }
                fresh
            })
            .collect();
        Self { sites }
    }

    /// Register a new site tracked from now.
    ///
    /// A blank url is ignored and yields `None`.
    pub fn add(&mut self, url: &str) -> Option<&Site> {
        self.add_at(url, Utc::now())
    }

    /// Same as [`add`](Self::add) with an explicit creation time
    pub fn add_at(&mut self, url: &str, now: DateTime<Utc>) -> Option<&Site> {
        let url = url.trim();
        if url.is_empty() {
            tracing::debug!("ignoring blank url");
            return None;
        }

        let mut site = Site::new(url, now);
        // ids must stay unique even across a v4 collision
        while self.find(site.id()).is_some() {
            site = Site::new(url, now);
        }

        tracing::info!(id = %site.id(), url, "site added");
        self.sites.push(site);
        self.sites.last()
    }

    /// Remove the site with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        match self.sites.iter().position(|s| s.id() == id) {
            Some(idx) => {
                let site = self.sites.remove(idx);
                tracing::info!(id = %id, url = site.url(), "site removed");
                true
            }
            None => {
                tracing::debug!(id = %id, "remove: no such site");
                false
            }
        }
    }

    /// All sites in insertion order
    pub fn all(&self) -> &[Site] {
        &self.sites
    }

    pub fn find(&self, id: Uuid) -> Option<&Site> {
        self.sites.iter().find(|s| s.id() == id)
    }

    /// Mutable lookup for status updates. Identity fields stay read-only.
    pub fn find_mut(&mut self, id: Uuid) -> Option<&mut Site> {
        self.sites.iter_mut().find(|s| s.id() == id)
    }

    /// Find by id prefix (as shown by `short_id`) or exact url
    pub fn lookup(&self, id_or_url: &str) -> Option<&Site> {
        let needle = id_or_url.trim();
        if needle.is_empty() {
            return None;
        }
        self.sites
            .iter()
            .find(|s| s.url() == needle)
            .or_else(|| {
                let lower = needle.to_lowercase();
                let mut matches = self.sites.iter().filter(|s| s.id().to_string().starts_with(&lower));
                match (matches.next(), matches.next()) {
                    (Some(site), None) => Some(site),
                    _ => None,
                }
            })
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_in_order() {
        let mut registry = SiteRegistry::new();
        registry.add("https://a.com");
        registry.add("https://b.com");
        registry.add("https://c.com");

        let urls: Vec<&str> = registry.all().iter().map(|s| s.url()).collect();
        assert_eq!(urls, vec!["https://a.com", "https://b.com", "https://c.com"]);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut registry = SiteRegistry::new();
        assert!(registry.add("").is_none());
        assert!(registry.add("   ").is_none());
        assert!(registry.add("\t\n").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_ids_are_distinct() {
        let mut registry = SiteRegistry::new();
        for i in 0..50 {
            registry.add(&format!("https://site{}.com", i));
        }
        let ids: HashSet<Uuid> = registry.all().iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(registry.len(), 50);
    }

    #[test]
    fn test_same_url_twice_gets_two_entries() {
        let mut registry = SiteRegistry::new();
        let a = registry.add("https://a.com").unwrap().id();
        let b = registry.add("https://a.com").unwrap().id();
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_remove_keeps_survivor_order() {
        let mut registry = SiteRegistry::new();
        registry.add("https://a.com");
        let b = registry.add("https://b.com").unwrap().id();
        registry.add("https://c.com");

        assert!(registry.remove(b));
        let urls: Vec<&str> = registry.all().iter().map(|s| s.url()).collect();
        assert_eq!(urls, vec!["https://a.com", "https://c.com"]);
    }

    #[test]
    fn test_remove_missing_reports_false() {
        let mut registry = SiteRegistry::new();
        registry.add("https://a.com");
        assert!(!registry.remove(Uuid::new_v4()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_find_and_find_mut() {
        let mut registry = SiteRegistry::new();
        let id = registry.add("https://a.com").unwrap().id();

        registry.find_mut(id).unwrap().is_up = false;
        assert!(!registry.find(id).unwrap().is_up);
        assert!(registry.find(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_lookup_by_url_and_prefix() {
        let mut registry = SiteRegistry::new();
        let id = registry.add("https://a.com").unwrap().id();

        assert_eq!(registry.lookup("https://a.com").map(|s| s.id()), Some(id));
        assert_eq!(registry.lookup(&id.to_string()[..8]).map(|s| s.id()), Some(id));
        assert!(registry.lookup("https://nope.com").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn test_from_sites_drops_duplicate_ids() {
        let site = Site::new("https://a.com", Utc::now());
        let registry = SiteRegistry::from_sites(vec![site.clone(), site]);
        assert_eq!(registry.len(), 1);
    }
}
