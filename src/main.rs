//! Flapdash entry point
//!
//! Wires the terminal frontend to the simulation: key events become
//! `TickInput`s, a fixed-timestep scheduler drives `tick`, and the scene is
//! redrawn once per frame.

use std::io::stdout;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, terminal,
};

use flapdash::consts::{MAX_SUBSTEPS, SIM_DT};
use flapdash::platform::FixedTimestep;
use flapdash::renderer::terminal::TerminalRenderer;
use flapdash::renderer::{Renderer, Scene};
use flapdash::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use flapdash::{BestScore, Tuning};

fn main() -> Result<()> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(seed_from_clock);
    log::info!("Flapdash starting (seed {seed})");

    let mut state = GameState::new(seed, Tuning::default())?;
    let mut best = BestScore::open();
    log::info!("Loaded best score: {}", best.get());

    terminal::enable_raw_mode()?;
    execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
    let result = run(&mut state, &mut best);
    let _ = execute!(stdout(), cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    result
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0xF1AB)
}

fn run(state: &mut GameState, best: &mut BestScore) -> Result<()> {
    let mut renderer = TerminalRenderer::new()?;
    let mut scheduler = FixedTimestep::new(SIM_DT, MAX_SUBSTEPS);
    let mut input = TickInput::default();
    let mut last = Instant::now();

    loop {
        // Drain pending events; repeated flap presses within one frame
        // coalesce into a single flag
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Char(' ') | KeyCode::Up => {
                        if state.phase == GamePhase::Running {
                            input.flap = true;
                        } else {
                            input.start = true;
                        }
                    }
                    KeyCode::Enter => input.start = true,
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    _ => {}
                },
                Event::Resize(cols, rows) => renderer.resize(cols, rows),
                _ => {}
            }
        }

        let now = Instant::now();
        let frame_dt = now.duration_since(last).as_secs_f32();
        last = now;

        let mut crashed = false;
        scheduler.advance(frame_dt, |dt| {
            let events = tick(state, &input, dt);
            // One-shot inputs are consumed by the first substep
            input = TickInput::default();
            if events.contains(&GameEvent::Crashed) {
                crashed = true;
            }
        });

        if crashed {
            let score = state.score;
            log::info!("Session over at score {score}");
            if best.submit(score) {
                log::info!("New best score: {score}");
            }
        }

        let scene = Scene::capture(state, best.get());
        renderer.draw(&scene)?;

        std::thread::sleep(Duration::from_millis(4));
    }
}
