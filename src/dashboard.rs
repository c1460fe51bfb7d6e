//! Dashboard controller - the inbound API the presentation layer talks to
//!
//! Owns one [`SiteRegistry`] and one [`ViewState`]. Every operation runs to
//! completion synchronously, and every projection is computed from the
//! current state on each call, so a read after a mutation always sees the
//! post-mutation registry.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::Config;
use crate::registry::SiteRegistry;
use crate::site::Site;
use crate::view::{self, DeleteFlow, DowntimePoint, ViewState};

pub struct Dashboard {
    registry: SiteRegistry,
    view: ViewState,
}

impl Dashboard {
    /// Empty dashboard whose next check is `next_check_at`
    pub fn new(next_check_at: DateTime<Utc>) -> Self {
        Self::with_registry(SiteRegistry::new(), next_check_at)
    }

    pub fn with_registry(registry: SiteRegistry, next_check_at: DateTime<Utc>) -> Self {
        Self {
            registry,
            view: ViewState::new(next_check_at),
        }
    }

    /// Build from config: seed sites plus a next check one interval from `now`
    pub fn from_config(config: &Config, now: DateTime<Utc>) -> Self {
        let sites = config
            .sites
            .iter()
            .cloned()
            .enumerate()
            .filter_map(|(index, seed)| seed.into_site(index));
        let registry = SiteRegistry::from_sites(sites);
        let next_check_at = now
            .checked_add_signed(config.check_interval())
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        tracing::debug!(sites = registry.len(), next_check = %next_check_at, "dashboard ready");
        Self::with_registry(registry, next_check_at)
    }

    // === Inbound operations ===

    /// Register a url. Blank input is ignored and returns `None`.
    pub fn add_site(&mut self, url: &str) -> Option<&Site> {
        self.registry.add(url)
    }

    pub fn add_site_at(&mut self, url: &str, now: DateTime<Utc>) -> Option<&Site> {
        self.registry.add_at(url, now)
    }

    pub fn delete_requested(&mut self, id: Uuid) {
        self.view.request_delete(id);
    }

    /// Remove the pending site. Returns the removed id, `None` if nothing was pending or found.
    pub fn delete_confirmed(&mut self) -> Option<Uuid> {
        self.view.confirm_delete(&mut self.registry)
    }

    pub fn delete_cancelled(&mut self) {
        self.view.cancel_delete();
    }

    pub fn select(&mut self, id: Uuid) {
        self.view.select(id);
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view.search_term = term.into();
    }

    // === Outbound views ===

    pub fn search_term(&self) -> &str {
        &self.view.search_term
    }

    /// Sites matching the current search term, in registry order
    pub fn filtered_sites(&self) -> Vec<&Site> {
        view::filtered_sites(&self.registry, &self.view.search_term)
    }

    /// The selected site, or `None` if nothing is selected or it no longer exists
    pub fn selected_site(&self) -> Option<&Site> {
        self.view.selected_site(&self.registry)
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.view.selected_id()
    }

    pub fn downtime_series(&self) -> Vec<DowntimePoint> {
        view::downtime_series(&self.registry)
    }

    pub fn confirm_dialog_open(&self) -> bool {
        self.view.confirm_dialog_open()
    }

    pub fn delete_flow(&self) -> DeleteFlow {
        self.view.delete_flow()
    }

    pub fn pending_delete(&self) -> Option<Uuid> {
        self.view.pending_delete()
    }

    /// Site targeted by the open delete prompt
    pub fn pending_delete_site(&self) -> Option<&Site> {
        self.view.pending_delete().and_then(|id| self.registry.find(id))
    }

    pub fn next_check_at(&self) -> DateTime<Utc> {
        self.view.next_check_at()
    }

    /// Time left until the next check, zero once it has passed
    pub fn next_check_in(&self, now: DateTime<Utc>) -> std::time::Duration {
        (self.view.next_check_at() - now).to_std().unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.registry.len()
    }

    pub fn sites(&self) -> &[Site] {
        self.registry.all()
    }

    pub fn registry(&self) -> &SiteRegistry {
        &self.registry
    }

    /// Mutable registry access for an external status updater
    pub fn registry_mut(&mut self) -> &mut SiteRegistry {
        &mut self.registry
    }
}
