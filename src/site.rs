use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The most recent outage recorded for a site
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Downtime {
    /// When the outage happened
    pub at: DateTime<Utc>,
    /// How long it lasted, in minutes
    pub duration_mins: u32,
}

/// A monitored website
///
/// `id`, `url` and `tracking_since` are fixed at creation. The status fields
/// are public so a health-check collaborator can update them in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    id: Uuid,
    url: String,
    tracking_since: DateTime<Utc>,
    /// Whether the last known status was up
    pub is_up: bool,
    /// Uptime in percent, 0 to 100
    pub uptime_percentage: f64,
    /// Last response time in milliseconds
    pub response_time_ms: u64,
    /// Most recent outage, if any was recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_downtime: Option<Downtime>,
}

impl Site {
    /// Create a freshly registered site: up, 100% uptime, no response time yet.
    pub fn new(url: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::with_id(Uuid::new_v4(), url, now)
    }

    pub(crate) fn with_id(id: Uuid, url: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            url: url.into(),
            tracking_since: now,
            is_up: true,
            uptime_percentage: 100.0,
            response_time_ms: 0,
            last_downtime: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn tracking_since(&self) -> DateTime<Utc> {
        self.tracking_since
    }

    /// Short form of the id for display (first 8 hex chars)
    pub fn short_id(&self) -> String {
        self.id.to_string()[..8].to_string()
    }

    /// Downtime duration in minutes, 0 when no outage is recorded
    pub fn downtime_minutes(&self) -> u32 {
        self.last_downtime.map(|d| d.duration_mins).unwrap_or(0)
    }
}

/// A site entry as written in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedSite {
    /// Pinned id. Without one, the id is derived from the entry's position and url.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub url: String,
    #[serde(default = "default_true")]
    pub is_up: bool,
    pub tracking_since: DateTime<Utc>,
    #[serde(default = "default_uptime")]
    pub uptime_percentage: f64,
    #[serde(default)]
    pub response_time_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_downtime: Option<Downtime>,
}

fn default_true() -> bool {
    true
}

fn default_uptime() -> f64 {
    100.0
}

impl SeedSite {
    /// Turn the seed at position `index` of the config into a registered site.
    ///
    /// The id is the pinned one if set, otherwise a v5 uuid over index and url,
    /// so the same config file yields the same ids on every run.
    /// Returns `None` for a blank url, the same rule `SiteRegistry::add` applies.
    pub fn into_site(self, index: usize) -> Option<Site> {
        let url = self.url.trim();
        if url.is_empty() {
            return None;
        }
        let id = self.id.unwrap_or_else(|| seed_id(index, url));
        let mut site = Site::with_id(id, url, self.tracking_since);
        site.is_up = self.is_up;
        site.uptime_percentage = clamp_uptime(self.uptime_percentage);
        site.response_time_ms = self.response_time_ms;
        site.last_downtime = self.last_downtime;
        Some(site)
    }
}

fn seed_id(index: usize, url: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, format!("{index}:{url}").as_bytes())
}

fn clamp_uptime(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_new_site_defaults() {
        let now = ts(2024, 3, 1);
        let site = Site::new("https://example.com", now);
        assert!(site.is_up);
        assert_eq!(site.uptime_percentage, 100.0);
        assert_eq!(site.response_time_ms, 0);
        assert_eq!(site.last_downtime, None);
        assert_eq!(site.tracking_since(), now);
        assert_eq!(site.downtime_minutes(), 0);
        assert_eq!(site.short_id().len(), 8);
    }

    #[test]
    fn test_seed_clamps_uptime_and_trims_url() {
        let seed = SeedSite {
            id: None,
            url: "  https://example.com ".into(),
            is_up: false,
            tracking_since: ts(2023, 1, 1),
            uptime_percentage: 140.0,
            response_time_ms: 250,
            last_downtime: Some(Downtime { at: ts(2023, 6, 18), duration_mins: 15 }),
        };
        let site = seed.into_site(0).unwrap();
        assert_eq!(site.url(), "https://example.com");
        assert!(!site.is_up);
        assert_eq!(site.uptime_percentage, 100.0);
        assert_eq!(site.downtime_minutes(), 15);
    }

    #[test]
    fn test_blank_seed_is_skipped() {
        let seed = SeedSite {
            id: None,
            url: "   ".into(),
            is_up: true,
            tracking_since: ts(2023, 1, 1),
            uptime_percentage: 99.0,
            response_time_ms: 0,
            last_downtime: None,
        };
        assert!(seed.into_site(0).is_none());
    }

    #[test]
    fn test_seed_parses_with_defaults() {
        let seed: SeedSite = toml::from_str(
            r#"
url = "https://example.org"
tracking_since = "2024-01-01T00:00:00Z"
"#,
        )
        .unwrap();
        assert!(seed.is_up);
        assert_eq!(seed.uptime_percentage, 100.0);
        assert_eq!(seed.last_downtime, None);
        assert_eq!(seed.id, None);
    }

    fn seed(url: &str) -> SeedSite {
        SeedSite {
            id: None,
            url: url.into(),
            is_up: true,
            tracking_since: ts(2024, 1, 1),
            uptime_percentage: 100.0,
            response_time_ms: 0,
            last_downtime: None,
        }
    }

    #[test]
    fn test_seed_ids_are_stable_across_conversions() {
        let first = seed("https://example.com").into_site(0).unwrap();
        let again = seed("https://example.com").into_site(0).unwrap();
        assert_eq!(first.id(), again.id());

        // Same url at another position is a different entry
        let other = seed("https://example.com").into_site(1).unwrap();
        assert_ne!(first.id(), other.id());
    }

    #[test]
    fn test_pinned_seed_id_is_kept() {
        let seed: SeedSite = toml::from_str(
            r#"
id = "67e55044-10b1-426f-9247-bb680e5fe0c8"
url = "https://example.org"
tracking_since = "2024-01-01T00:00:00Z"
"#,
        )
        .unwrap();
        let site = seed.into_site(3).unwrap();
        assert_eq!(site.id().to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert_eq!(site.short_id(), "67e55044");
    }
}
