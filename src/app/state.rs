use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use tokio::sync::mpsc;

use crate::{
    app::events::{AppEvent, start_frame_task},
    cli::Cli,
    render::frame::SceneFrame,
    scene::engine::SceneEngine,
    ui,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Running,
    Quit,
}

/// Per-frame sun nudge for the `[` / `]` keys.
const SUN_NUDGE: f32 = 0.1;

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub engine: SceneEngine,
    /// Draw commands of the most recent tick, replayed by the UI.
    pub frame: SceneFrame,
    pub frame_tick: u64,
}

impl AppState {
    #[must_use]
    pub fn new(cli: &Cli, cols: u16, rows: u16) -> Self {
        let bounds = ui::virtual_bounds(cols, rows);
        let mut engine = match cli.seed {
            Some(seed) => SceneEngine::with_seed(bounds, seed),
            None => SceneEngine::new(bounds),
        };
        if let Some(weather) = cli.weather {
            engine.set_weather(weather);
        }
        if cli.hide_moon {
            engine.set_moon_visible(false);
        }
        if let Some(phase) = cli.moon_phase {
            engine.set_moon_phase(phase.into());
        }
        if let Some(position) = cli.sun_position {
            engine.set_sun_position(position);
        }

        Self {
            mode: AppMode::Running,
            running: true,
            engine,
            frame: SceneFrame::new(),
            frame_tick: 0,
        }
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                start_frame_task(tx.clone(), cli.effective_fps());
            }
            AppEvent::TickFrame => {
                self.frame_tick = self.frame_tick.saturating_add(1);
                self.engine.tick(&mut self.frame);
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => {
                    tx.send(AppEvent::Quit).await?;
                }
                KeyCode::Left => self.engine.cycle_weather(-1),
                KeyCode::Right => self.engine.cycle_weather(1),
                KeyCode::Char('m') => self.engine.toggle_moon(),
                KeyCode::Char(',') => self.engine.cycle_moon_phase(-1),
                KeyCode::Char('.') => self.engine.cycle_moon_phase(1),
                KeyCode::Char('[') => self.engine.adjust_sun_position(-SUN_NUDGE),
                KeyCode::Char(']') => self.engine.adjust_sun_position(SUN_NUDGE),
                _ => {}
            },
            Event::Resize(cols, rows) => {
                let bounds = ui::virtual_bounds(cols, rows);
                self.engine.resize(bounds.width, bounds.height);
            }
            _ => {}
        }

        Ok(())
    }
}
