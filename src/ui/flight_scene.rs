//! UI rendering for the flight screen.

use super::hud::{render_crash_banner, render_gauges, render_status, split_screen, Gauge};
use super::projection::Camera;
use crate::core::constants::{GROUND_VISIBLE_SECONDS, GROUND_Y};
use crate::core::game_loop::FrameSnapshot;
use crate::flight::Vec3;
use crate::sensor::OrientationSample;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SKY: Color = Color::Rgb(135, 206, 250);
const GROUND_LINE_SPACING: f64 = 5.0;
const GROUND_COL_SPACING: f64 = 3.0;
const GROUND_DRAW_DISTANCE: f64 = 120.0;

/// Render the flight scene.
pub fn render_flight(
    frame: &mut Frame,
    area: Rect,
    snapshot: &FrameSnapshot<'_>,
    tilt: OrientationSample,
) {
    let layout = split_screen(frame, area);

    render_play_area(frame, layout.view, snapshot);
    render_status(frame, layout.status, snapshot.state);
    render_gauges(frame, layout.gauges, &gauges(snapshot, tilt));

    if snapshot.state.game_over {
        render_crash_banner(frame, layout.view, snapshot.state.score);
    }
}

/// Cell buffer for the play area, painted back to front.
struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<(char, Style)>,
}

impl Canvas {
    fn new(width: u16, height: u16) -> Self {
        let blank = (' ', Style::default().bg(SKY));
        Self {
            width,
            height,
            cells: vec![blank; usize::from(width) * usize::from(height)],
        }
    }

    /// Draw `text` centered on (`col`, `row`), clipping at the edges.
    fn put_centered(&mut self, col: u16, row: u16, text: &str, style: Style) {
        if row >= self.height {
            return;
        }
        let len = text.chars().count() as i32;
        let start = i32::from(col) - len / 2;
        for (i, ch) in text.chars().enumerate() {
            let c = start + i as i32;
            if c < 0 || c >= i32::from(self.width) {
                continue;
            }
            let idx = usize::from(row) * usize::from(self.width) + c as usize;
            self.cells[idx] = (ch, style.bg(SKY));
        }
    }

    fn into_lines(self) -> Vec<Line<'static>> {
        let width = usize::from(self.width).max(1);
        self.cells
            .chunks(width)
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|(ch, style)| Span::styled(ch.to_string(), *style))
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }
}

/// Render the main play area: ground, birds, aircraft.
fn render_play_area(frame: &mut Frame, area: Rect, snapshot: &FrameSnapshot<'_>) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let camera = Camera::following(snapshot.aircraft);
    let mut canvas = Canvas::new(area.width, area.height);

    // The starting ground is only there for the first few seconds.
    if snapshot.elapsed < GROUND_VISIBLE_SECONDS {
        draw_ground(&mut canvas, &camera);
    }

    let mut birds: Vec<_> = snapshot
        .obstacles
        .iter()
        .filter_map(|o| camera.project(o.position, area.width, area.height))
        .collect();
    birds.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    for bird in birds {
        canvas.put_centered(
            bird.col,
            bird.row,
            bird_glyph(bird.depth),
            Style::default().fg(Color::Black),
        );
    }

    if let Some(p) = camera.project(snapshot.aircraft.position, area.width, area.height) {
        let color = if snapshot.state.game_over {
            Color::DarkGray
        } else {
            Color::Red
        };
        canvas.put_centered(
            p.col,
            p.row,
            aircraft_glyph(snapshot.aircraft.rotation_z),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );
    }

    frame.render_widget(Paragraph::new(canvas.into_lines()), area);
}

fn draw_ground(canvas: &mut Canvas, camera: &Camera) {
    let cam = camera.position;
    let style = Style::default().fg(Color::Green);

    let mut z = ((cam.z + 1.0) / GROUND_LINE_SPACING).ceil() * GROUND_LINE_SPACING;
    while z < cam.z + GROUND_DRAW_DISTANCE {
        let mut x = cam.x - 60.0;
        while x <= cam.x + 60.0 {
            if let Some(p) = camera.project(Vec3::new(x, GROUND_Y, z), canvas.width, canvas.height)
            {
                canvas.put_centered(p.col, p.row, "·", style);
            }
            x += GROUND_COL_SPACING;
        }
        z += GROUND_LINE_SPACING;
    }
}

/// Bird sprite, shrinking with distance.
pub fn bird_glyph(depth: f64) -> &'static str {
    if depth > 60.0 {
        "·"
    } else if depth > 40.0 {
        "v"
    } else {
        "\\v/"
    }
}

/// Aircraft sprite with the wings drawn along the current roll.
pub fn aircraft_glyph(rotation_z: f64) -> &'static str {
    if rotation_z > 8.0 {
        "╲■╲"
    } else if rotation_z < -8.0 {
        "╱■╱"
    } else {
        "━■━"
    }
}

fn gauges(snapshot: &FrameSnapshot<'_>, tilt: OrientationSample) -> Vec<Option<Gauge>> {
    let pos = snapshot.aircraft.position;
    vec![
        Some(Gauge::new(
            "Score:",
            snapshot.state.score.to_string(),
            Color::White,
        )),
        Some(Gauge::new(
            "Time:",
            format!("{:.1}s", snapshot.elapsed),
            Color::White,
        )),
        Some(Gauge::new(
            "Birds:",
            snapshot.obstacles.len().to_string(),
            Color::White,
        )),
        None,
        Some(Gauge::new("Offset:", format!("{:+.1}", pos.x), Color::Cyan)),
        Some(Gauge::new("Altitude:", format!("{:+.1}", pos.y), Color::Cyan)),
        Some(Gauge::new("Distance:", format!("{:.0}", pos.z), Color::Cyan)),
        None,
        Some(Gauge::new("Tilt x:", format!("{:+.2}", tilt.x), Color::Yellow)),
        Some(Gauge::new("Tilt y:", format!("{:+.2}", tilt.y), Color::Yellow)),
    ]
}
