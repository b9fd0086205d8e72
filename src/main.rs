//! Terminal Gridfall runner.
//!
//! The driver loop the engine expects: poll input with a timeout until the
//! next frame, forward mapped actions, advance gravity on a monotonic
//! millisecond clock, and spawn a piece whenever the read model shows none
//! while the game is still running.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::Game;
use gridfall::input::{handle_key_event, should_quit};
use gridfall::term::TerminalRenderer;
use gridfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let clock = Instant::now();
    let mut game = Game::with_seed(wall_clock_seed());
    game.spawn();

    let frame = Duration::from_millis(TICK_MS);
    let mut last_frame = Instant::now();

    loop {
        term.draw(&game)?;

        // Input with timeout until the next frame.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action, now_ms(&clock));
                    }
                }
            }
        }

        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
            game.tick(now_ms(&clock));
            if game.active().is_none() && !game.is_over() {
                game.spawn();
            }
        }
    }
}

fn now_ms(clock: &Instant) -> u64 {
    clock.elapsed().as_millis() as u64
}

/// Seed from the wall clock; gameplay only needs variety between runs.
fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |d| d.subsec_nanos())
}
