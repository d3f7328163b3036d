pub mod canvas;
pub mod hud;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;
use crate::scene::Bounds;

/// Virtual pixels per terminal cell. Chosen so a typical 80-column
/// terminal spans roughly a thousand virtual pixels, which is the scale
/// the scene's particle constants are tuned for.
pub const CELL_PX_W: f32 = 12.0;
pub const CELL_PX_H: f32 = 24.0;

/// Engine-facing surface extent for a terminal of `cols` x `rows` cells
/// (one row is reserved for the status line).
#[must_use]
pub fn virtual_bounds(cols: u16, rows: u16) -> Bounds {
    Bounds::new(
        f32::from(cols.max(1)) * CELL_PX_W,
        f32::from(rows.saturating_sub(1).max(1)) * CELL_PX_H,
    )
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < 20 || area.height < 6 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 20x6.")
            .block(Block::default().borders(Borders::ALL).title("sky-stage"));
        frame.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    canvas::render_scene(frame, chunks[0], state);
    hud::render(frame, chunks[1], state);
}
