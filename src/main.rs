//! Headless demo driver
//!
//! Runs one variant under a tiny scripted pilot and prints the outcome.
//! Useful for eyeballing balance changes and for profiling the kernel
//! without a renderer in the way.
//!
//! Usage: `cabinet [variant] [ticks]` (defaults: shooter, 2000).

use cabinet::{GameSession, HighScoreStore, TickInput, Variant};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let variant = match args.next() {
        Some(name) => match Variant::from_str(&name) {
            Some(v) => v,
            None => {
                eprintln!(
                    "unknown variant {name:?}; expected one of: \
                     lane-dodge, gated-flier, side-runner, grid-snake, shooter"
                );
                std::process::exit(2);
            }
        },
        None => Variant::Shooter,
    };
    let ticks: u64 = match args.next() {
        Some(raw) => match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("invalid tick count {raw:?}; expected a non-negative integer");
                std::process::exit(2);
            }
        },
        None => 2000,
    };

    let store = HighScoreStore::new("highscores");
    let mut session = GameSession::new(variant.config(), 0xCAB1_4E7, Some(store));
    let mut deaths = 0u32;
    for t in 0..ticks {
        let mut input = TickInput::default();
        pilot(variant, t, &session, &mut input);
        if input.restart {
            deaths += 1;
        }
        session.tick(&input);
    }

    let state = session.state();
    println!(
        "{}: score {} best {} after {} ticks ({} deaths, {})",
        variant.as_str(),
        state.score,
        state.best_score,
        ticks,
        deaths,
        if state.running { "still running" } else { "game over" },
    );
}

/// A deliberately dumb pilot: enough input variety to exercise every system,
/// no attempt to actually play well.
fn pilot(variant: Variant, t: u64, session: &GameSession, input: &mut TickInput) {
    if !session.state().running {
        input.restart = true;
        return;
    }
    match variant {
        Variant::GatedFlier | Variant::SideRunner => {
            // Flap whenever below the middle of the arena.
            if session.state().player.pos.y > session.config().arena.y / 2.0 {
                input.jump = true;
            }
        }
        Variant::Shooter => {
            if t.is_multiple_of(8) {
                input.fire = true;
            }
            if t % 40 < 20 {
                input.left = true;
            } else {
                input.right = true;
            }
        }
        Variant::LaneDodge => {
            if t % 60 < 30 {
                input.left = true;
            } else {
                input.right = true;
            }
        }
        Variant::GridSnake => {
            // Trace a small rectangle so the snake survives a while.
            match (t / 8) % 4 {
                0 => input.right = true,
                1 => input.down = true,
                2 => input.left = true,
                _ => input.up = true,
            }
        }
    }
}
