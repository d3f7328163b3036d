pub mod app;
pub mod cli;
pub mod domain;
pub mod render;
pub mod scene;
pub mod ui;

use std::collections::BTreeMap;
use std::io::{self, Stdout};

use anyhow::Result;
use app::events::{AppEvent, spawn_input_task};
use app::state::{AppMode, AppState};
use cli::Cli;
use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;

    if let Some(frames) = cli.probe {
        return probe(&cli, frames);
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, cli).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(terminal: &mut Terminal<CrosstermBackend<Stdout>>, cli: Cli) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);

    let size = terminal.size()?;
    let mut app = AppState::new(&cli, size.width, size.height);

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx, &cli).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx, &cli).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app))?;

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    Ok(())
}

/// Headless mode: run the engine for `frames` ticks against the recording
/// surface and report what the final frame contains.
fn probe(cli: &Cli, frames: u32) -> Result<()> {
    let mut state = AppState::new(cli, 80, 24);
    for _ in 0..frames {
        state.frame_tick = state.frame_tick.saturating_add(1);
        state.engine.tick(&mut state.frame);
    }

    println!("weather:  {}", state.engine.weather_name());
    println!("status:   {}", ui::hud::status_line(&state));
    println!("frames:   {}", state.frame_tick);
    println!("ops in final frame: {}", state.frame.ops.len());

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for op in &state.frame.ops {
        *counts.entry(op.name()).or_default() += 1;
    }
    for (name, count) in counts {
        println!("  {name:>14}  {count}");
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        existing(panic);
    }));
}
