use crate::calc::{CalendarDate, INVALID_DATE};
use crate::data::InfoPanelData;
use crate::ui::link::{parse_link, LinkOpener};
use crate::ui::presentation::PresentationState;
use anyhow::Result;
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::Stdout;
use std::time::Duration as StdDuration;

const ACCENT: Color = Color::Blue;

// Section header style inside the info panel
const SECTION_BG: Color = Color::Rgb(40, 44, 52);

/// Which of the three pickers receives ↑/↓.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Picker {
    #[default]
    Day,
    Month,
    Year,
}

impl Picker {
    fn next(self) -> Self {
        match self {
            Picker::Day => Picker::Month,
            Picker::Month => Picker::Year,
            Picker::Year => Picker::Day,
        }
    }

    fn prev(self) -> Self {
        match self {
            Picker::Day => Picker::Year,
            Picker::Month => Picker::Day,
            Picker::Year => Picker::Month,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Picker::Day => "Day",
            Picker::Month => "Month",
            Picker::Year => "Year",
        }
    }
}

pub struct App<'a> {
    pub state: PresentationState,
    info: &'a InfoPanelData,
    opener: &'a dyn LinkOpener,
    today: CalendarDate,
    focus: Picker,
    /// Selected card in the info panel.
    card_cursor: usize,
    /// Result of the last "Try" (message, color). Cleared on next keypress.
    status: Option<(String, Color)>,
}

impl<'a> App<'a> {
    pub fn new(
        info: &'a InfoPanelData,
        opener: &'a dyn LinkOpener,
        today: CalendarDate,
        state: PresentationState,
    ) -> Self {
        App {
            state,
            info,
            opener,
            today,
            focus: Picker::default(),
            card_cursor: 0,
            status: None,
        }
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        self.status = None;

        if self.state.info_panel_visible() {
            self.handle_info_key(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Left | KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Right | KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Up => self.step_focused(-1),
            KeyCode::Down => self.step_focused(1),
            KeyCode::PageUp => self.step_focused(-10),
            KeyCode::PageDown => self.step_focused(10),
            KeyCode::Char('t') => self.state.reset_to(self.today),
            KeyCode::Char('?') | KeyCode::Char('i') => {
                self.card_cursor = 0;
                self.state.toggle_info_panel();
            }
            _ => {}
        }
        false
    }

    fn step_focused(&mut self, delta: i32) {
        match self.focus {
            Picker::Day => self.state.step_day(delta),
            Picker::Month => self.state.step_month(delta),
            Picker::Year => self.state.step_year(delta),
        }
    }

    fn handle_info_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => {
                if self.card_cursor > 0 {
                    self.card_cursor -= 1;
                }
            }
            KeyCode::Down => {
                if self.card_cursor + 1 < self.info.apps.len() {
                    self.card_cursor += 1;
                }
            }
            KeyCode::Enter => self.try_selected_app(),
            KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => {
                self.state.close_info_panel();
            }
            KeyCode::Char('?') | KeyCode::Char('i') => self.state.toggle_info_panel(),
            _ => {}
        }
    }

    fn try_selected_app(&mut self) {
        let Some(app) = self.info.apps.get(self.card_cursor) else {
            return;
        };
        if parse_link(&app.url).is_none() {
            self.status = Some((format!("{} has no usable link", app.name), Color::Yellow));
            return;
        }
        self.opener.open(&app.url);
        self.status = Some((format!("Opening {}...", app.name), Color::Green));
    }

    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1), // padding
                Constraint::Length(5), // pickers (3 rows + borders)
                Constraint::Length(1), // padding
                Constraint::Length(1), // weekday result
                Constraint::Min(0),
                Constraint::Length(1), // key hints
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_pickers(f, chunks[2]);
        self.render_result(f, chunks[4]);
        let hints = Paragraph::new(Span::styled(
            "←→=field  ↑↓=scroll  PgUp/PgDn=±10  t=today  ?=info  q=quit",
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(hints, chunks[6]);

        if self.state.info_panel_visible() {
            let panel = centered_rect(80, 90, f.area());
            self.render_info_panel(f, panel);
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled("What Day?", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled("(?)", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        ]);
        f.render_widget(Paragraph::new(title), area);
    }

    fn render_pickers(&self, f: &mut Frame, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Length(10),
                Constraint::Min(0),
            ])
            .split(area);

        let s = &self.state;
        let columns = [
            (Picker::Day, s.day() as i64, 1, s.max_day() as i64, 2),
            (Picker::Month, s.month() as i64, 1, 12, 2),
            (
                Picker::Year,
                s.year() as i64,
                *s.year_range().start() as i64,
                *s.year_range().end() as i64,
                4,
            ),
        ];

        for (i, (picker, value, lo, hi, width)) in columns.into_iter().enumerate() {
            let focused = picker == self.focus;
            let lines: Vec<Line> = picker_window(value, lo, hi)
                .iter()
                .enumerate()
                .map(|(row, v)| {
                    let text = v.map(|v| format!("{:0width$}", v, width = width)).unwrap_or_default();
                    Line::from(Span::styled(text, picker_cell_style(row == 1, focused)))
                })
                .collect();
            let border = if focused {
                Style::default().fg(ACCENT)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(picker.label());
            let p = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(p, cols[i]);
        }
    }

    fn render_result(&self, f: &mut Frame, area: Rect) {
        let text = self.state.displayed_text();
        let style = if text == INVALID_DATE {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };
        f.render_widget(Paragraph::new(Span::styled(text, style)), area);
    }

    fn render_info_panel(&self, f: &mut Frame, area: Rect) {
        f.render_widget(Clear, area);
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(" Info  (↑↓=select  Enter=Try  Esc/c=Close) ");
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let usage_height = self.info.usage.len() as u16 + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),            // "Ads & App Functionality"
                Constraint::Min(4),               // app cards
                Constraint::Length(1),            // "App Functionality"
                Constraint::Length(usage_height), // usage bullets
                Constraint::Length(1),            // "Try" status
                Constraint::Length(1),            // close hint
            ])
            .split(inner);

        f.render_widget(section_header("Ads & App Functionality"), chunks[0]);

        let text_width = chunks[1].width.saturating_sub(4).max(10) as usize;
        let items: Vec<ListItem> = self
            .info
            .apps
            .iter()
            .map(|app| {
                let mut lines = vec![Line::from(vec![
                    Span::styled(app.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled("[Try]", Style::default().fg(Color::White).bg(ACCENT)),
                ])];
                for l in textwrap::wrap(&app.description, text_width) {
                    lines.push(Line::from(Span::styled(
                        format!("  {l}"),
                        Style::default().fg(Color::Gray),
                    )));
                }
                lines.push(Line::from(Span::styled(
                    "─".repeat(text_width.min(40)),
                    Style::default().fg(Color::DarkGray),
                )));
                ListItem::new(lines)
            })
            .collect();

        let mut list_state = ListState::default();
        if !self.info.apps.is_empty() {
            list_state.select(Some(self.card_cursor));
        }
        let list = List::new(items)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▶ ");
        f.render_stateful_widget(list, chunks[1], &mut list_state);

        f.render_widget(section_header("App Functionality"), chunks[2]);
        let bullets: Vec<Line> = self
            .info
            .usage
            .iter()
            .map(|u| Line::from(format!("• {u}")))
            .collect();
        let usage = Paragraph::new(bullets)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true });
        f.render_widget(usage, chunks[3]);

        if let Some((msg, color)) = &self.status {
            let p = Paragraph::new(Span::styled(msg.clone(), Style::default().fg(*color)))
                .alignment(Alignment::Center);
            f.render_widget(p, chunks[4]);
        }

        let close = Paragraph::new(Span::styled(
            " Close (Esc) ",
            Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        f.render_widget(close, chunks[5]);
    }
}

// ── Widget helpers ────────────────────────────────────────────────────────────

/// A bold title line on a dark background.
fn section_header(title: &str) -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        title.to_string(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))
    .style(Style::default().bg(SECTION_BG))
}

/// The values shown by a scroll wheel: previous, selected, next.
/// Neighbours outside `[lo, hi]` are None.
pub(crate) fn picker_window(value: i64, lo: i64, hi: i64) -> [Option<i64>; 3] {
    let around = |v: i64| (lo..=hi).contains(&v).then_some(v);
    [around(value - 1), Some(value), around(value + 1)]
}

pub(crate) fn picker_cell_style(is_selected: bool, is_focused: bool) -> Style {
    match (is_selected, is_focused) {
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().add_modifier(Modifier::BOLD),
        (false, _) => Style::default().add_modifier(Modifier::DIM),
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            if let CEvent::Key(key) = event::read()? {
                // Windows also reports key releases.
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key.code, key.modifiers) {
                    break;
                }
            }
        }
    }
    Ok(())
}
