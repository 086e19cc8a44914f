//! Drive scene rendering.
//!
//! Cell-buffer approach for per-character color control: the 800x600
//! logical pixel space is scaled onto the drawable area, road bands and
//! sprites are sampled into a 2D grid, and the grid is stamped row-by-row
//! as Paragraph widgets.

use crate::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::game_state::{Phase, RaceState};
use crate::sprites;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{create_scene_layout, render_status_bar};

const CAR_COLOR: Color = Color::LightBlue;
const HAZARD_COLOR: Color = Color::LightRed;

/// Render the full drive scene: border, play field, status bar.
pub fn render_race_scene(frame: &mut Frame, area: Rect, state: &RaceState) {
    let (title, border_color) = match state.phase {
        Phase::Running => (" Drive Fast ", Color::LightGreen),
        Phase::Crash => (" Drive Fast ", Color::LightRed),
    };
    let layout = create_scene_layout(frame, area, title, border_color);

    render_play_field(frame, layout.content, state);

    match state.phase {
        Phase::Running => render_status_bar(
            frame,
            layout.status_bar,
            "Drive!",
            Color::LightGreen,
            &[("[Space]", "Dodge"), ("[Esc]", "Exit")],
        ),
        Phase::Crash => render_status_bar(
            frame,
            layout.status_bar,
            "Crash!",
            Color::LightRed,
            &[("[Enter]", "Play again"), ("[Esc]", "Exit")],
        ),
    }
}

/// Cell in the render buffer.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }
}

/// Road art characters get their color from what they depict.
fn road_color(ch: char) -> Color {
    match ch {
        '░' => Color::Rgb(70, 110, 50),
        '▌' | '▐' => Color::White,
        '┆' => Color::Yellow,
        _ => Color::Reset,
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, state: &RaceState) {
    if area.height < 3 || area.width < 10 {
        return;
    }

    let render_width = area.width;
    let render_height = area.height;

    let mut buffer: Vec<Vec<Cell>> =
        vec![vec![Cell::default(); render_width as usize]; render_height as usize];

    // Logical pixels per terminal cell
    let px_per_col = WINDOW_WIDTH as f64 / render_width as f64;
    let px_per_row = WINDOW_HEIGHT as f64 / render_height as f64;

    for row in 0..render_height as usize {
        for col in 0..render_width as usize {
            // Sample at the cell's logical center
            let px = ((col as f64 + 0.5) * px_per_col) as i32;
            let py = ((row as f64 + 0.5) * px_per_row) as i32;

            // Road: all three bands in index order, later copies painting
            // over earlier ones in the seam overlap, same as the draw loop
            // the simulation models.
            for band_y in state.road_y {
                if py >= band_y && py < band_y + sprites::ROAD.height {
                    let u = px as f64 / WINDOW_WIDTH as f64;
                    let v = (py - band_y) as f64 / sprites::ROAD.height as f64;
                    let ch = sprites::ROAD.sample(u, v);
                    buffer[row][col] = Cell {
                        ch,
                        fg: road_color(ch),
                    };
                }
            }

            // Car over road
            if state.car.contains(px, py) {
                let u = (px - state.car.x) as f64 / state.car.width as f64;
                let v = (py - state.car.y) as f64 / state.car.height as f64;
                let ch = sprites::CAR.sample(u, v);
                if ch != ' ' {
                    buffer[row][col] = Cell { ch, fg: CAR_COLOR };
                }
            }

            // Hazard drawn last, over everything
            if state.hazard.contains(px, py) {
                let u = (px - state.hazard.x) as f64 / state.hazard.width as f64;
                let v = (py - state.hazard.y) as f64 / state.hazard.height as f64;
                let ch = sprites::HAZARD.sample(u, v);
                if ch != ' ' {
                    buffer[row][col] = Cell {
                        ch,
                        fg: HAZARD_COLOR,
                    };
                }
            }
        }
    }

    // HUD and crash text live at fixed logical offsets, scaled like
    // everything else.
    let cell_of = |logical_x: i32, logical_y: i32| -> (usize, usize) {
        (
            (logical_y as f64 / px_per_row) as usize,
            (logical_x as f64 / px_per_col) as usize,
        )
    };

    let (hud_row, hud_col) = cell_of(5, 25);
    stamp_text(
        &mut buffer,
        hud_row,
        hud_col,
        &format!("Hazards: {}", state.hazards_passed),
        Color::White,
    );

    if state.phase == Phase::Crash {
        for (text, logical_y) in [
            ("Crash!", 200),
            ("'Enter' to play again.", 230),
            ("'Escape' to exit.", 260),
        ] {
            let (row, col) = cell_of(5, logical_y);
            stamp_text(&mut buffer, row, col, text, Color::White);
        }
    }

    // Flush the buffer as one Paragraph per row, grouping runs of the same
    // color into spans.
    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if cell.fg != current_fg && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg),
                ));
            }
            current_fg = cell.fg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg),
            ));
        }

        let line = Paragraph::new(Line::from(spans));
        let row_area = Rect::new(area.x, area.y + row_idx as u16, render_width, 1);
        if row_area.y < area.y + area.height {
            frame.render_widget(line, row_area);
        }
    }
}

/// Write a string into the buffer at a cell position, clipped to the grid.
fn stamp_text(buffer: &mut [Vec<Cell>], row: usize, col: usize, text: &str, fg: Color) {
    if row >= buffer.len() {
        return;
    }
    let width = buffer[row].len();
    for (i, ch) in text.chars().enumerate() {
        let target = col + i;
        if target < width {
            buffer[row][target] = Cell { ch, fg };
        }
    }
}
