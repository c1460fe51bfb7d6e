//! Transient view state and the read-only projections derived from the registry

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::registry::SiteRegistry;
use crate::site::Site;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Two-step delete: a request opens the prompt, confirm or cancel closes it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteFlow {
    #[default]
    Idle,
    PendingConfirm(Uuid),
}

/// One point of the downtime chart: the site url and its last outage in minutes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DowntimePoint {
    pub label: String,
    pub minutes: u32,
}

/// Selection, search and delete-prompt state for one dashboard session
///
/// `selected` and the pending delete target are lookup keys into the
/// registry, never handles. A key whose site is gone resolves to nothing.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub search_term: String,
    selected: Option<Uuid>,
    delete_flow: DeleteFlow,
    next_check_at: DateTime<Utc>,
}

impl ViewState {
    pub fn new(next_check_at: DateTime<Utc>) -> Self {
        Self {
            search_term: String::new(),
            selected: None,
            delete_flow: DeleteFlow::Idle,
            next_check_at,
        }
    }

    /// Select a site for the detail panel. Unknown ids are accepted.
    pub fn select(&mut self, id: Uuid) {
        self.selected = Some(id);
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.selected
    }

    /// Resolve the selection against the registry
    pub fn selected_site<'a>(&self, registry: &'a SiteRegistry) -> Option<&'a Site> {
        self.selected.and_then(|id| registry.find(id))
    }

    pub fn delete_flow(&self) -> DeleteFlow {
        self.delete_flow
    }

    pub fn pending_delete(&self) -> Option<Uuid> {
        match self.delete_flow {
            DeleteFlow::PendingConfirm(id) => Some(id),
            DeleteFlow::Idle => None,
        }
    }

    pub fn confirm_dialog_open(&self) -> bool {
        matches!(self.delete_flow, DeleteFlow::PendingConfirm(_))
    }

    /// Open the confirmation prompt for `id`. A second request retargets it.
    pub fn request_delete(&mut self, id: Uuid) {
        self.delete_flow = DeleteFlow::PendingConfirm(id);
    }

    /// Carry out the pending delete. Returns the removed id, if a site was removed.
    pub fn confirm_delete(&mut self, registry: &mut SiteRegistry) -> Option<Uuid> {
        let DeleteFlow::PendingConfirm(id) = self.delete_flow else {
            tracing::debug!("confirm with no pending delete");
            return None;
        };

        self.delete_flow = DeleteFlow::Idle;
        let removed = registry.remove(id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        removed.then_some(id)
    }

    /// Close the prompt without touching the registry
    pub fn cancel_delete(&mut self) {
        if self.delete_flow == DeleteFlow::Idle {
            tracing::debug!("cancel with no pending delete");
        }
        self.delete_flow = DeleteFlow::Idle;
    }

    pub fn next_check_at(&self) -> DateTime<Utc> {
        self.next_check_at
    }
}

/// Sites whose url contains `term`, case-insensitively, in registry order
pub fn filtered_sites<'a>(registry: &'a SiteRegistry, term: &str) -> Vec<&'a Site> {
    if term.is_empty() {
        return registry.all().iter().collect();
    }
    let term_lower = term.to_lowercase();
    registry
        .all()
        .iter()
        .filter(|s| s.url().to_lowercase().contains(&term_lower))
        .collect()
}

/// Whole days between `timestamp` and `now`, rounded up, never less than 1
pub fn days_since(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (now - timestamp).num_milliseconds().abs();
    let days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    days.max(1)
}

/// Chart data: one point per site, in registry order
pub fn downtime_series(registry: &SiteRegistry) -> Vec<DowntimePoint> {
    registry
        .all()
        .iter()
        .map(|s| DowntimePoint {
            label: s.url().to_string(),
            minutes: s.downtime_minutes(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn registry_of(urls: &[&str]) -> SiteRegistry {
        let mut registry = SiteRegistry::new();
        for url in urls {
            registry.add(url);
        }
        registry
    }

    #[test]
    fn test_filter_empty_term_returns_all() {
        let registry = registry_of(&["https://a.com", "https://b.com"]);
        let filtered = filtered_sites(&registry, "");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].url(), "https://a.com");
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let registry = registry_of(&["https://Example.com", "https://downsite.com", "https://other.org"]);
        let urls: Vec<&str> = filtered_sites(&registry, "EXAMPLE").iter().map(|s| s.url()).collect();
        assert_eq!(urls, vec!["https://Example.com"]);

        let urls: Vec<&str> = filtered_sites(&registry, ".com").iter().map(|s| s.url()).collect();
        assert_eq!(urls, vec!["https://Example.com", "https://downsite.com"]);
    }

    #[test]
    fn test_filter_no_match() {
        let registry = registry_of(&["https://a.com"]);
        assert!(filtered_sites(&registry, "zzz").is_empty());
    }

    #[test]
    fn test_days_since_rounds_up() {
        let now = Utc::now();
        assert_eq!(days_since(now, now), 1);
        assert_eq!(days_since(now - Duration::hours(60), now), 3);
        assert_eq!(days_since(now - Duration::days(2), now), 2);
        assert_eq!(days_since(now - Duration::days(2) - Duration::seconds(1), now), 3);
        assert_eq!(days_since(now - Duration::minutes(1), now), 1);
    }

    #[test]
    fn test_days_since_is_symmetric() {
        let now = Utc::now();
        assert_eq!(days_since(now + Duration::hours(36), now), 2);
    }

    #[test]
    fn test_downtime_series_defaults_to_zero() {
        let mut registry = registry_of(&["https://a.com", "https://b.com"]);
        let b = registry.all()[1].id();
        registry.find_mut(b).unwrap().last_downtime = Some(crate::site::Downtime {
            at: Utc::now(),
            duration_mins: 60,
        });

        let series = downtime_series(&registry);
        assert_eq!(
            series,
            vec![
                DowntimePoint { label: "https://a.com".into(), minutes: 0 },
                DowntimePoint { label: "https://b.com".into(), minutes: 60 },
            ]
        );
    }

    #[test]
    fn test_delete_flow_cancel() {
        let mut registry = registry_of(&["https://a.com"]);
        let id = registry.all()[0].id();
        let mut view = ViewState::new(Utc::now());

        view.request_delete(id);
        assert!(view.confirm_dialog_open());
        assert_eq!(view.pending_delete(), Some(id));

        view.cancel_delete();
        assert!(!view.confirm_dialog_open());
        assert_eq!(view.pending_delete(), None);
        assert_eq!(registry.len(), 1);
        assert!(view.confirm_delete(&mut registry).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_delete_flow_confirm_clears_selection() {
        let mut registry = registry_of(&["https://a.com", "https://b.com"]);
        let a = registry.all()[0].id();
        let mut view = ViewState::new(Utc::now());
        view.select(a);

        view.request_delete(a);
        assert_eq!(view.confirm_delete(&mut registry), Some(a));
        assert_eq!(view.delete_flow(), DeleteFlow::Idle);
        assert_eq!(view.selected_id(), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_confirm_keeps_other_selection() {
        let mut registry = registry_of(&["https://a.com", "https://b.com"]);
        let a = registry.all()[0].id();
        let b = registry.all()[1].id();
        let mut view = ViewState::new(Utc::now());
        view.select(b);

        view.request_delete(a);
        view.confirm_delete(&mut registry);
        assert_eq!(view.selected_site(&registry).map(|s| s.id()), Some(b));
    }

    #[test]
    fn test_second_request_retargets() {
        let mut registry = registry_of(&["https://a.com", "https://b.com"]);
        let a = registry.all()[0].id();
        let b = registry.all()[1].id();
        let mut view = ViewState::new(Utc::now());

        view.request_delete(a);
        view.request_delete(b);
        view.confirm_delete(&mut registry);
        assert!(registry.find(a).is_some());
        assert!(registry.find(b).is_none());
    }

    #[test]
    fn test_dangling_selection_resolves_to_none() {
        let registry = registry_of(&["https://a.com"]);
        let mut view = ViewState::new(Utc::now());
        view.select(Uuid::new_v4());
        assert!(view.selected_id().is_some());
        assert!(view.selected_site(&registry).is_none());
    }
}
