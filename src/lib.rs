pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod logging;
pub mod registry;
pub mod site;
#[cfg(feature = "tui")]
pub mod tui;
pub mod view;

pub use dashboard::Dashboard;
pub use error::{Result, UpwatchError};
pub use registry::SiteRegistry;
pub use site::{Downtime, Site};
pub use view::{days_since, downtime_series, filtered_sites, DeleteFlow, DowntimePoint, ViewState};
