use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::{AppMode, AppState},
    horizon::{Dimensions, Segment},
};

const MIN_WIDTH: u16 = 20;
const MIN_HEIGHT: u16 = 6;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new("Terminal too small. Resize to at least 20x6.")
            .block(Block::default().borders(Borders::ALL).title("runner-horizon"));
        frame.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    render_horizon_panel(frame, chunks[0], state);

    let status = Paragraph::new(Line::from(status_line(state)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, chunks[1]);
}

fn render_horizon_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" runner-horizon ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = usize::from(inner.width);
    let rows = usize::from(inner.height);
    let top = viewport_top(state.horizon.dimensions(), rows);
    let lines = state
        .canvas
        .window(0, top, cols, rows)
        .into_iter()
        .map(Line::from)
        .collect::<Vec<_>>();

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(Color::Gray)),
        inner,
    );
}

/// First canvas row to show in a viewport `rows` tall. The ground band sits
/// on the bottom edge when it fits; otherwise its top rows are kept.
#[must_use]
pub fn viewport_top(dimensions: Dimensions, rows: usize) -> usize {
    let y_pos = usize::try_from(dimensions.y_pos).unwrap_or(0);
    let height = usize::try_from(dimensions.height).unwrap_or(0);
    if rows > height {
        (y_pos + height).saturating_sub(rows)
    } else {
        y_pos.saturating_sub(1)
    }
}

/// The ground band only, `cols` wide, right-trimmed.
#[must_use]
pub fn horizon_band(state: &AppState, cols: usize) -> Vec<String> {
    let dimensions = state.horizon.dimensions();
    let top = usize::try_from(dimensions.y_pos).unwrap_or(0);
    let rows = usize::try_from(dimensions.height).unwrap_or(0);
    state
        .canvas
        .window(0, top, cols, rows)
        .into_iter()
        .map(|line| line.trim_end().to_string())
        .collect()
}

#[must_use]
pub fn status_line(state: &AppState) -> String {
    let [first, second] = state.horizon.x_positions();
    let mut line = format!(
        "{:.1} px/f  x {first},{second}  {}/{}  wraps {}/{}",
        state.settings.speed,
        state.horizon.variant(Segment::First).label(),
        state.horizon.variant(Segment::Second).label(),
        state.wraps,
        state.bumpy_wraps,
    );
    if state.mode == AppMode::Paused {
        line.push_str("  paused");
    }
    if let Some(message) = &state.status_message {
        line.push_str("  · ");
        line.push_str(message);
    }
    line
}
