//! Terminal rendering. Tightly coupled to ratatui; not part of the logic
//! surface the integration tests exercise.

pub mod race_scene;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Areas carved out for the scene.
pub struct SceneLayout {
    /// Play field, inside the outer border.
    pub content: Rect,
    /// One-line key-hint bar at the bottom.
    pub status_bar: Rect,
}

/// Draw the outer border and split the interior into play field + status
/// bar.
pub fn create_scene_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
) -> SceneLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    SceneLayout {
        content: chunks[0],
        status_bar: chunks[1],
    }
}

/// Render the key-hint bar: a status word plus `(key, action)` pairs.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let mut spans = vec![
        Span::styled(
            status_text,
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    for (key, action) in controls {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!(" {}  ", action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
