// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use leads_app::{
    EMPTY_STATE_MESSAGE, Lead, LeadId, LeadListState, ListCommand, ListEvent, Location, Route,
    Router, SEARCH_PLACEHOLDER, StatusChip, Tone, format_since, list_title,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use std::io;
use std::time::Duration;
use time::OffsetDateTime;

const PRIORITY_MARK: &str = "●";
const SEARCH_CURSOR: &str = "▏";

/// Supplies the records the list view shows.
pub trait LeadRuntime {
    fn load_leads(&mut self) -> Result<Vec<Lead>>;
    fn last_synced_at(&mut self) -> Result<Option<OffsetDateTime>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Focus {
    #[default]
    List,
    Search,
}

#[derive(Debug, Default)]
struct ViewData {
    leads: Vec<Lead>,
    last_synced_at: Option<OffsetDateTime>,
    list: LeadListState,
    focus: Focus,
    cursor: usize,
    status_line: Option<String>,
}

pub fn run_app<N: Router, R: LeadRuntime>(router: &mut N, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    if let Err(error) = refresh_view_data(runtime, &mut view_data) {
        tracing::warn!(error = %error, "initial lead load failed");
        view_data.status_line = Some(format!("load failed: {error}"));
    }
    clamp_cursor(&mut view_data, router.location());

    let mut result = Ok(());
    loop {
        if router.location().route() == Route::Dashboard {
            tracing::info!("back to dashboard; leaving lead list");
            break;
        }

        if let Err(error) = terminal.draw(|frame| render(frame, router.location(), &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = match event::poll(Duration::from_millis(250)).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if !has_event {
            continue;
        }
        match event::read().context("read event") {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if handle_key_event(router, runtime, &mut view_data, key) {
                    break;
                }
            }
            Ok(_) => {}
            Err(error) => {
                result = Err(error);
                break;
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn refresh_view_data<R: LeadRuntime>(runtime: &mut R, view_data: &mut ViewData) -> Result<()> {
    view_data.leads = runtime.load_leads().context("load leads")?;
    view_data.last_synced_at = runtime.last_synced_at().context("load sync time")?;
    tracing::debug!(count = view_data.leads.len(), "leads refreshed");
    Ok(())
}

/// Returns true when the session should end.
fn handle_key_event<N: Router, R: LeadRuntime>(
    router: &mut N,
    runtime: &mut R,
    view_data: &mut ViewData,
    key: KeyEvent,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    view_data.status_line = None;

    match router.location().route() {
        Route::Leads => handle_list_key(router, runtime, view_data, key),
        Route::LeadDetail(_) | Route::NotFound(_) => handle_detail_key(router, key),
        Route::Dashboard => return true,
    }

    clamp_cursor(view_data, router.location());
    router.location().route() == Route::Dashboard
}

fn handle_list_key<N: Router, R: LeadRuntime>(
    router: &mut N,
    runtime: &mut R,
    view_data: &mut ViewData,
    key: KeyEvent,
) {
    let command = match view_data.focus {
        Focus::Search => search_command_for_key(view_data, key),
        Focus::List => list_command_for_key(router.location(), runtime, view_data, key),
    };
    if let Some(command) = command {
        apply_list_command(router, view_data, command);
    }
}

fn search_command_for_key(view_data: &mut ViewData, key: KeyEvent) -> Option<ListCommand> {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(ListCommand::ClearSearch)
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(ListCommand::InsertChar(ch))
        }
        KeyCode::Backspace => Some(ListCommand::Backspace),
        KeyCode::Enter | KeyCode::Esc | KeyCode::Down => {
            view_data.focus = Focus::List;
            None
        }
        _ => None,
    }
}

fn list_command_for_key<R: LeadRuntime>(
    location: &Location,
    runtime: &mut R,
    view_data: &mut ViewData,
    key: KeyEvent,
) -> Option<ListCommand> {
    match key.code {
        KeyCode::Char('/') => {
            view_data.focus = Focus::Search;
            None
        }
        KeyCode::Char(digit @ '1'..='4') => {
            let index = digit as usize - '1' as usize;
            Some(ListCommand::ChooseStatus(StatusChip::ALL[index].value))
        }
        KeyCode::Char('h') | KeyCode::Left => Some(rotate_chip(location, -1)),
        KeyCode::Char('l') | KeyCode::Right => Some(rotate_chip(location, 1)),
        KeyCode::Char('j') | KeyCode::Down => {
            view_data.cursor = view_data.cursor.saturating_add(1);
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.cursor = view_data.cursor.saturating_sub(1);
            None
        }
        KeyCode::Char('r') => {
            match refresh_view_data(runtime, view_data) {
                Ok(()) => view_data.status_line = Some("reloaded".to_owned()),
                Err(error) => view_data.status_line = Some(format!("reload failed: {error:#}")),
            }
            None
        }
        KeyCode::Enter => selected_lead_id(view_data, location).map(ListCommand::OpenLead),
        KeyCode::Esc | KeyCode::Char('q') => Some(ListCommand::Back),
        _ => None,
    }
}

fn rotate_chip(location: &Location, delta: isize) -> ListCommand {
    let chips = StatusChip::ALL;
    let current = StatusChip::position(location.status_filter()) as isize;
    let next = (current + delta).rem_euclid(chips.len() as isize) as usize;
    ListCommand::ChooseStatus(chips[next].value)
}

fn apply_list_command<N: Router>(router: &mut N, view_data: &mut ViewData, command: ListCommand) {
    for event in view_data.list.dispatch(command) {
        match event {
            ListEvent::SearchChanged(search) => {
                tracing::debug!(search = %search, "search changed");
                view_data.cursor = 0;
            }
            ListEvent::Navigate(intent) => {
                if let Err(error) = router.apply(&intent) {
                    tracing::warn!(error = %error, ?intent, "navigation failed");
                    view_data.status_line = Some(format!("navigation failed: {error}"));
                    continue;
                }
                view_data.cursor = 0;
                if router.location().route() != Route::Leads {
                    // search belongs to the list view and ends with it
                    view_data.list = LeadListState::default();
                    view_data.focus = Focus::List;
                }
            }
        }
    }
}

fn handle_detail_key<N: Router>(router: &mut N, key: KeyEvent) {
    if !matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace
    ) {
        return;
    }
    if !router.back()
        && let Err(error) = router.navigate(leads_app::LEADS_PATH)
    {
        tracing::warn!(error = %error, "return to lead list failed");
    }
}

fn visible_leads<'a>(view_data: &'a ViewData, location: &Location) -> Vec<&'a Lead> {
    view_data.list.visible(&view_data.leads, location)
}

fn selected_lead_id(view_data: &ViewData, location: &Location) -> Option<LeadId> {
    visible_leads(view_data, location)
        .get(view_data.cursor)
        .map(|lead| lead.id.clone())
}

fn clamp_cursor(view_data: &mut ViewData, location: &Location) {
    let visible = visible_leads(view_data, location).len();
    view_data.cursor = view_data.cursor.min(visible.saturating_sub(1));
}

fn render(frame: &mut ratatui::Frame<'_>, location: &Location, view_data: &ViewData) {
    match location.route() {
        Route::Leads => render_list(frame, location, view_data),
        Route::LeadDetail(id) => render_detail(frame, &id, view_data),
        Route::NotFound(path) => {
            let body = Paragraph::new(format!("no page at {path}"))
                .block(Block::default().title("leads").borders(Borders::ALL));
            frame.render_widget(body, frame.area());
        }
        Route::Dashboard => {}
    }
}

fn render_list(frame: &mut ratatui::Frame<'_>, location: &Location, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let visible = visible_leads(view_data, location);
    let now = OffsetDateTime::now_utc();
    let header = Paragraph::new(header_lines(visible.len(), view_data.last_synced_at, now))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, layout[0]);

    let search_style = if view_data.focus == Focus::Search {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let search = Paragraph::new(search_line(&view_data.list.search, view_data.focus))
        .block(Block::default().borders(Borders::ALL).style(search_style));
    frame.render_widget(search, layout[1]);

    frame.render_widget(
        Paragraph::new(chip_line(location.status_filter())),
        layout[2],
    );

    render_cards(frame, layout[3], &visible, view_data.cursor);

    let status = Paragraph::new(status_text(view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(status, layout[4]);
}

fn render_cards(frame: &mut ratatui::Frame<'_>, area: Rect, visible: &[&Lead], cursor: usize) {
    if visible.is_empty() {
        let empty = Paragraph::new(EMPTY_STATE_MESSAGE)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(ratatui::layout::Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem<'_>> = visible
        .iter()
        .map(|lead| ListItem::new(card_lines(lead)))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail(frame: &mut ratatui::Frame<'_>, id: &LeadId, view_data: &ViewData) {
    let lead = view_data.leads.iter().find(|lead| &lead.id == id);
    let body = Paragraph::new(detail_lines(id, lead))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!("lead {id}"))
                .borders(Borders::ALL),
        );
    frame.render_widget(body, frame.area());
}

fn header_lines(
    visible: usize,
    last_synced_at: Option<OffsetDateTime>,
    now: OffsetDateTime,
) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            list_title(visible),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            last_sync_text(last_synced_at, now),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn last_sync_text(last_synced_at: Option<OffsetDateTime>, now: OffsetDateTime) -> String {
    match last_synced_at {
        Some(at) => format!("Last Sync: {}", format_since(now - at)),
        None => "Last Sync: never".to_owned(),
    }
}

fn search_line(search: &str, focus: Focus) -> Line<'static> {
    let cursor = if focus == Focus::Search {
        SEARCH_CURSOR
    } else {
        ""
    };
    if search.is_empty() {
        return Line::from(vec![
            Span::raw(cursor),
            Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ]);
    }
    Line::from(format!("{search}{cursor}"))
}

fn chip_line(current: Option<leads_app::LeadStatus>) -> Line<'static> {
    let mut spans = Vec::with_capacity(StatusChip::ALL.len() * 2);
    for (index, chip) in StatusChip::ALL.iter().enumerate() {
        let style = if chip.is_selected(current) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(
            format!(" {} {} ", index + 1, chip.label),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn card_lines(lead: &Lead) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                PRIORITY_MARK,
                Style::default().fg(tone_color(lead.priority.tone())),
            ),
            Span::raw(" "),
            Span::styled(
                lead.id.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(lead.date.clone(), Style::default().fg(Color::DarkGray)),
            Span::raw("  "),
            badge_span(lead),
        ]),
        Line::from(Span::styled(
            lead.customer_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Delivery to:",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(lead.address.clone()),
        Line::default(),
    ]
}

fn badge_span(lead: &Lead) -> Span<'static> {
    Span::styled(
        format!(" {} ", lead.status.label()),
        Style::default()
            .fg(Color::White)
            .bg(tone_color(lead.status.badge_tone())),
    )
}

fn detail_lines(id: &LeadId, lead: Option<&Lead>) -> Vec<Line<'static>> {
    let Some(lead) = lead else {
        return vec![Line::from(format!("lead {id} not found"))];
    };
    vec![
        Line::from(vec![Span::raw("Status:   "), badge_span(lead)]),
        Line::from(vec![
            Span::raw("Priority: "),
            Span::styled(
                format!("{PRIORITY_MARK} {}", lead.priority.as_str()),
                Style::default().fg(tone_color(lead.priority.tone())),
            ),
        ]),
        Line::from(format!("Date:     {}", lead.date)),
        Line::default(),
        Line::from(Span::styled(
            lead.customer_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Delivery to:"),
        Line::from(lead.address.clone()),
        Line::default(),
        Line::from(Span::styled(
            "esc back",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Danger => Color::Red,
        Tone::Warning => Color::Yellow,
        Tone::Info => Color::Blue,
        Tone::Success => Color::Green,
        Tone::Muted => Color::Gray,
    }
}

fn status_text(view_data: &ViewData) -> String {
    let hints = match view_data.focus {
        Focus::Search => "type to search | ctrl+u clear | enter/esc done",
        Focus::List => "j/k move | enter open | / search | 1-4 h/l status | r reload | q back",
    };
    match &view_data.status_line {
        Some(status) => format!("{status} | {hints}"),
        None => hints.to_owned(),
    }
}
