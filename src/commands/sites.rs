//! Site commands: list, show, chart, next

use chrono::Utc;
use colored::Colorize;

use upwatch::config::Config;
use upwatch::error::{Result, UpwatchError};
use upwatch::format::{
    format_clock, format_countdown, format_interval, format_last_downtime, format_response_time,
    format_tracking, format_uptime, status_label,
};
use upwatch::{days_since, Dashboard, Site};

fn load_dashboard(config: &Config) -> Dashboard {
    Dashboard::from_config(config, Utc::now())
}

fn status_indicator(site: &Site, use_color: bool) -> String {
    match (site.is_up, use_color) {
        (true, true) => "●".green().to_string(),
        (false, true) => "●".red().to_string(),
        (true, false) => "[up]  ".to_string(),
        (false, false) => "[down]".to_string(),
    }
}

/// List sites, optionally filtered by a search term
pub fn cmd_list(config: &Config, search: Option<String>, details: bool, json: bool) -> Result<()> {
    let mut dashboard = load_dashboard(config);
    if let Some(term) = search {
        dashboard.set_search_term(term);
    }
    let sites = dashboard.filtered_sites();

    if json {
        println!("{}", serde_json::to_string_pretty(&sites)?);
        return Ok(());
    }

    if sites.is_empty() {
        if dashboard.search_term().is_empty() {
            println!("No sites configured. Add entries under [[sites]] in {}", Config::config_path()?.display());
        } else {
            println!("No sites match '{}'.", dashboard.search_term());
        }
        return Ok(());
    }

    let use_color = atty::is(atty::Stream::Stdout);
    let now = Utc::now();

    println!("\nMy URLs (total: {})\n", dashboard.total());

    let max_url_len = sites.iter().map(|s| s.url().len()).max().unwrap_or(20).min(50);
    for site in &sites {
        let tracking = format_tracking(days_since(site.tracking_since(), now));
        println!(
            "  {} {:<width$}  {}  {}",
            status_indicator(site, use_color),
            site.url(),
            tracking.dimmed(),
            site.short_id().dimmed(),
            width = max_url_len
        );
        if details {
            println!(
                "      {}  uptime {}  response {}",
                status_label(site),
                format_uptime(site.uptime_percentage),
                format_response_time(site.response_time_ms)
            );
        }
    }
    println!();

    Ok(())
}

/// Show stats for one site
pub fn cmd_show(config: &Config, id_or_url: &str, json: bool) -> Result<()> {
    let dashboard = load_dashboard(config);
    let site = dashboard
        .registry()
        .lookup(id_or_url)
        .ok_or_else(|| UpwatchError::SiteNotFound(id_or_url.to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(site)?);
        return Ok(());
    }

    let status = if site.is_up {
        status_label(site).green()
    } else {
        status_label(site).red()
    };

    println!("\nSite: {}\n", site.url().bold());
    println!("  ID:            {}", site.id());
    println!("  Status:        {}", status);
    println!("  Uptime:        {}", format_uptime(site.uptime_percentage));
    println!("  Response Time: {}", format_response_time(site.response_time_ms));
    println!("  Last Downtime: {}", format_last_downtime(site.last_downtime.as_ref()));
    println!(
        "  Tracking:      since {} ({})",
        site.tracking_since().format("%Y-%m-%d"),
        format_tracking(days_since(site.tracking_since(), Utc::now()))
    );
    println!();

    Ok(())
}

/// Print the downtime series, one bar per site
pub fn cmd_chart(config: &Config, json: bool) -> Result<()> {
    let dashboard = load_dashboard(config);
    let series = dashboard.downtime_series();

    if json {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    if series.is_empty() {
        println!("No sites configured.");
        return Ok(());
    }

    println!("\nLast downtime (minutes)\n");
    let max = series.iter().map(|p| p.minutes).max().unwrap_or(0).max(1);
    let label_width = series.iter().map(|p| p.label.len()).max().unwrap_or(0).min(50);
    for point in &series {
        let bar_len = usize::try_from(u64::from(point.minutes) * 40 / u64::from(max)).unwrap_or(40);
        println!(
            "  {:<width$}  {} {}",
            point.label,
            "█".repeat(bar_len).magenta(),
            point.minutes,
            width = label_width
        );
    }
    println!();

    Ok(())
}

/// Show the next scheduled check
pub fn cmd_next(config: &Config) -> Result<()> {
    let now = Utc::now();
    let dashboard = Dashboard::from_config(config, now);
    println!(
        "Next scheduled check: {} (in {}, every {})",
        format_clock(dashboard.next_check_at()).bold(),
        format_countdown(dashboard.next_check_in(now).as_secs()),
        format_interval(config.check_interval_secs)
    );
    Ok(())
}
