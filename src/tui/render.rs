//! TUI rendering - all UI drawing functions

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::format::{
    format_clock, format_countdown, format_last_downtime, format_response_time, format_tracking,
    format_uptime, status_label,
};
use crate::site::Site;
use crate::view::days_since;

use super::state::*;
use super::types::*;
use super::utils::{bar_width, centered_rect, status_span, ACCENT};

/// Main UI entry point - called from the main loop
pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(3),  // Add URL + next check
            Constraint::Min(10),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!(" upwatch v{} - Website Uptime Dashboard", version))
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let top_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(36)])
        .split(chunks[1]);
    render_add_box(f, app, top_chunks[0]);
    render_next_check(f, app, top_chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(main_chunks[0]);

    app.layout_areas = LayoutAreas { sites: left_chunks[1] };

    render_search(f, app, left_chunks[0]);
    render_sites(f, app, left_chunks[1]);
    render_details(f, app, main_chunks[1]);
    render_status_bar(f, app, chunks[3]);

    // Overlays
    if app.dashboard.confirm_dialog_open() {
        render_confirm(f, app);
    } else if app.mode == Mode::Help {
        render_help(f);
    }
}

fn input_block(title: &str, active: bool) -> Block<'_> {
    let border_style = if active {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    };
    Block::default().borders(Borders::ALL).title(title).border_style(border_style)
}

fn render_add_box(f: &mut Frame, app: &App, area: Rect) {
    let active = app.mode == Mode::AddUrl;
    let line = if active {
        Line::from(vec![Span::raw(&app.url_input), Span::styled("_", Style::default().fg(ACCENT))])
    } else if app.url_input.is_empty() {
        Line::from(Span::styled("Press a to add a URL", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(Span::raw(&app.url_input))
    };

    let widget = Paragraph::new(line).block(input_block(" Add a new site monitor ", active));
    f.render_widget(widget, area);
}

fn render_next_check(f: &mut Frame, app: &App, area: Rect) {
    let now = Utc::now();
    let line = Line::from(vec![
        Span::styled(
            format_clock(app.dashboard.next_check_at()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  (in {})", format_countdown(app.dashboard.next_check_in(now).as_secs())),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Next Scheduled Check "),
    );
    f.render_widget(widget, area);
}

fn render_search(f: &mut Frame, app: &App, area: Rect) {
    let active = app.mode == Mode::Search;
    let term = app.dashboard.search_term();
    let line = if active {
        Line::from(vec![Span::raw(term), Span::styled("_", Style::default().fg(ACCENT))])
    } else if term.is_empty() {
        Line::from(Span::styled("Press / to search URLs", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(Span::raw(term))
    };

    let widget = Paragraph::new(line).block(input_block(" Search ", active));
    f.render_widget(widget, area);
}

fn render_sites(f: &mut Frame, app: &mut App, area: Rect) {
    let title = format!(" My URLs (Total: {}) ", app.dashboard.total());
    let block = Block::default().borders(Borders::ALL).title(title);

    if app.dashboard.total() == 0 {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No sites yet",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("    a", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
                Span::raw("  Add a URL to monitor"),
            ]),
        ];
        f.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    let now = Utc::now();
    let selected_id = app.dashboard.selected_id();
    let items: Vec<ListItem> = app
        .dashboard
        .filtered_sites()
        .into_iter()
        .map(|site| {
            let marker = if Some(site.id()) == selected_id { "▸" } else { " " };
            let tracking = format_tracking(days_since(site.tracking_since(), now));
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(ACCENT)),
                status_span(site),
                Span::raw(site.url().to_string()),
                Span::styled(format!("  {}", tracking), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    if items.is_empty() {
        let text = Paragraph::new(Line::from(Span::styled(
            format!("  No URLs match \"{}\"", app.dashboard.search_term()),
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(text, area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let mut state = ListState::default().with_offset(app.list_offset);
    state.select(Some(app.cursor));
    f.render_stateful_widget(list, area, &mut state);
    app.list_offset = state.offset();
}

fn render_details(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Website Stats ");

    let Some(site) = app.dashboard.selected_site() else {
        let text = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Select a website to view detailed stats",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block);
        f.render_widget(text, area);
        return;
    };

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(6)])
        .split(inner);

    f.render_widget(Paragraph::new(stats_lines(site)), chunks[0]);
    render_downtime_chart(f, app, chunks[1]);
}

fn stats_lines(site: &Site) -> Vec<Line<'_>> {
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::Yellow));
    let status_color = if site.is_up { Color::Green } else { Color::Red };

    vec![
        Line::from(Span::styled(site.url(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(vec![
            label(" Status:        "),
            Span::styled(status_label(site), Style::default().fg(status_color)),
        ]),
        Line::from(vec![label(" Uptime:        "), Span::raw(format_uptime(site.uptime_percentage))]),
        Line::from(vec![label(" Response Time: "), Span::raw(format_response_time(site.response_time_ms))]),
        Line::from(vec![
            label(" Last Downtime: "),
            Span::raw(format_last_downtime(site.last_downtime.as_ref())),
        ]),
    ]
}

fn render_downtime_chart(f: &mut Frame, app: &App, area: Rect) {
    let series = app.dashboard.downtime_series();
    let data: Vec<(&str, u64)> = series
        .iter()
        .map(|p| (p.label.as_str(), u64::from(p.minutes)))
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::TOP).title(" Downtime Graph (min) "))
        .data(data.as_slice())
        .bar_width(bar_width(area.width, data.len()))
        .bar_gap(1)
        .bar_style(Style::default().fg(ACCENT))
        .value_style(Style::default().fg(Color::Black).bg(ACCENT));
    f.render_widget(chart, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let (status, help_hint) = match app.mode {
        Mode::Search => (
            format!("/{}", app.dashboard.search_term()),
            "<Enter> apply  <Esc> clear",
        ),
        Mode::AddUrl => ("New URL".to_string(), "<Enter> add  <Esc> cancel"),
        Mode::Normal | Mode::Help => {
            let status = app.status_message.clone().unwrap_or_else(|| {
                let down = app.dashboard.sites().iter().filter(|s| !s.is_up).count();
                format!("{} sites ({} down)", app.dashboard.total(), down)
            });
            (status, "<a> add  <Enter> select  <d> delete  </> search  <?> help")
        }
    };

    let padding = usize::from(area.width)
        .saturating_sub(status.chars().count() + help_hint.len() + 4);
    let status_line = Line::from(vec![
        Span::styled(format!(" {} ", status), Style::default().fg(ACCENT)),
        Span::raw(" ".repeat(padding)),
        Span::styled(help_hint, Style::default().fg(Color::DarkGray)),
    ]);

    let widget = Paragraph::new(status_line).block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_help(f: &mut Frame) {
    let area = centered_rect(50, 60, f.area());
    f.render_widget(Clear, area);

    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(" Navigation", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(vec![key(" j/k     "), Span::raw("Move up/down")]),
        Line::from(vec![key(" g/G     "), Span::raw("Jump to first/last")]),
        Line::from(vec![key(" Enter   "), Span::raw("Show stats for site")]),
        Line::from(vec![key(" /       "), Span::raw("Search URLs")]),
        Line::from(""),
        Line::from(Span::styled(" Sites", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(vec![key(" a       "), Span::raw("Add a URL")]),
        Line::from(vec![key(" d       "), Span::raw("Delete (asks first)")]),
        Line::from(""),
        Line::from(vec![key(" q       "), Span::raw("Quit")]),
        Line::from(""),
        Line::from(Span::styled(" Press any key to close", Style::default().fg(Color::DarkGray))),
    ];

    let widget = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .style(Style::default().bg(Color::Black));
    f.render_widget(widget, area);
}

fn render_confirm(f: &mut Frame, app: &App) {
    let area = centered_rect(50, 30, f.area());
    f.render_widget(Clear, area);

    let url = app.dashboard.pending_delete_site().map(|s| s.url()).unwrap_or("?");

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(" Are you sure?", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::raw(format!(" Delete '{}' from your monitoring list?", url))),
        Line::from(Span::styled(" This action cannot be undone.", Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(vec![
            Span::styled(" y ", Style::default().fg(Color::Red)),
            Span::raw("Delete  "),
            Span::styled(" n ", Style::default().fg(Color::Green)),
            Span::raw("Cancel"),
        ]),
    ];

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Confirm "))
        .style(Style::default().bg(Color::Black));
    f.render_widget(widget, area);
}
