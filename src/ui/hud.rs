use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::app::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = Paragraph::new(Line::from(status_line(state)))
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM));
    frame.render_widget(line, area);
}

/// One-line status readout: weather, moon, sun, key hints.
#[must_use]
pub fn status_line(state: &AppState) -> String {
    let engine = &state.engine;
    let fading = if engine.is_transitioning() {
        " (fading)"
    } else {
        ""
    };
    let moon = if engine.moon_visible() {
        format!("\u{263d} {}", engine.moon_phase().display_name())
    } else {
        "hidden".to_string()
    };
    format!(
        "{}{fading} \u{2502} \u{2190}/\u{2192} weather \u{2502} m moon: {moon} \u{2502} ,/. phase \u{2502} [/] sun: {} \u{2502} q quit",
        engine.weather_name(),
        engine.sun_label(),
    )
}
