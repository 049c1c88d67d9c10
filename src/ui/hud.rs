//! Screen chrome around the flight view: border, status line, gauge panel and
//! the crash banner.

use crate::core::game_state::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TITLE: &str = " Aviate ";
const BORDER: Color = Color::Cyan;
const GAUGE_PANEL_WIDTH: u16 = 22;
const MIN_VIEW_HEIGHT: u16 = 8;
const STATUS_HEIGHT: u16 = 2;
const BANNER_WIDTH: u16 = 36;
const BANNER_HEIGHT: u16 = 5;

/// Areas of the flight screen.
///
/// ```text
/// ┌─ Aviate ────────────────────────┬─ Gauges ────┐
/// │                                 │             │
/// │   [view]                        │  [gauges]   │
/// │                                 │             │
/// │ [status - 2 lines]              │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudLayout {
    pub view: Rect,
    pub status: Rect,
    pub gauges: Rect,
}

/// Clear `area`, draw the outer border and split the inside.
pub fn split_screen(frame: &mut Frame, area: Rect) -> HudLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(GAUGE_PANEL_WIDTH)])
        .split(inner);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(MIN_VIEW_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(columns[0]);

    HudLayout {
        view: rows[0],
        status: rows[1],
        gauges: columns[1],
    }
}

/// Score line plus key hints; both change once the aircraft has crashed.
pub fn render_status(frame: &mut Frame, area: Rect, state: &GameState) {
    if area.height == 0 {
        return;
    }

    let (text, color, hints): (String, Color, &[(&str, &str)]) = if state.game_over {
        (
            format!("Crashed! Final score: {}", state.score),
            Color::Red,
            &[("[Any key]", "Exit")],
        )
    } else {
        (
            format!("Score: {}", state.score),
            Color::Green,
            &[("[Esc/q]", "Quit")],
        )
    };

    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );

    if area.height < 2 {
        return;
    }
    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// One labelled readout in the gauge panel.
#[derive(Debug, Clone)]
pub struct Gauge {
    pub label: &'static str,
    pub value: String,
    pub color: Color,
}

impl Gauge {
    pub fn new(label: &'static str, value: String, color: Color) -> Self {
        Self {
            label,
            value,
            color,
        }
    }
}

/// Draw the gauge panel. `None` rows are spacers.
pub fn render_gauges(frame: &mut Frame, area: Rect, gauges: &[Option<Gauge>]) {
    let block = Block::default()
        .title(" Gauges ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label_width = gauges
        .iter()
        .flatten()
        .map(|g| g.label.chars().count())
        .max()
        .unwrap_or(0);
    let lines: Vec<Line> = gauges
        .iter()
        .map(|row| match row {
            Some(g) => Line::from(vec![
                Span::styled(
                    format!(" {:<label_width$} ", g.label),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(g.value.clone(), Style::default().fg(g.color)),
            ]),
            None => Line::from(""),
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Centered crash box over the frozen view. Only the box itself is cleared.
pub fn render_crash_banner(frame: &mut Frame, area: Rect, score: u32) {
    let width = area.width.min(BANNER_WIDTH);
    let height = area.height.min(BANNER_HEIGHT);
    if width < 4 || height < 3 {
        return;
    }
    let banner = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    frame.render_widget(Clear, banner);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(banner);
    frame.render_widget(block, banner);

    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Score: {score}"),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "[Press any key]",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
