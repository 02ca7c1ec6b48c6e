//! Close Pong entry point
//!
//! On the web this wires the page's close button. Natively it plays one
//! headless match against an autopilot and logs the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    close_pong::platform::start();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use close_pong::renderer::{RecordingSurface, Theme};
    use close_pong::sim::Phase;
    use close_pong::sim::geometry::step_toward;
    use close_pong::{NextTick, Session};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Autopilot pointer speed per frame, a little quicker than the AI
    const AUTOPILOT_SPEED: f32 = 7.0;

    pub fn run(seed: u64, max_frames: u64) {
        let court = close_pong::sim::Court::new(800.0, 600.0);
        let theme = Theme::default();
        let mut surface = RecordingSurface::new(court.width, court.height);
        let mut session = Session::new(seed, court, 0.0);
        let mut now = 0.0;
        let mut aim = court.width / 2.0;
        let mut points = 0;
        let mut outcome = None;

        log::info!("Headless match, seed {}", seed);

        loop {
            let state = session.state();
            if state.frame >= max_frames {
                log::warn!("Frame cap reached, abandoning match");
                break;
            }

            aim = step_toward(aim, state.ball.pos.x, AUTOPILOT_SPEED, 0.0);
            session.pointer_moved(aim);

            surface.clear();
            let step = session.frame(now, &theme, &mut surface);
            if let Some(scorer) = step.events.point {
                points += 1;
                let score = session.state().score;
                log::debug!(
                    "Point {} to {:?}: {} - {}",
                    points,
                    scorer,
                    score.opponent,
                    score.player
                );
            }

            if let Some(ended) = step.events.ended {
                outcome = Some(ended);
            }

            match step.next {
                NextTick::Frame => now += FRAME_MS,
                NextTick::WakeAfter(ms) => now += ms,
                NextTick::Halt => break,
            }
        }

        let state = session.state();
        log::info!(
            "Finished in {} frames ({:.1}s): opponent {} - player {} [{}]",
            state.frame,
            now / 1000.0,
            state.score.opponent,
            state.score.player,
            outcome.map(|o| o.message()).unwrap_or("no result")
        );
        if !matches!(session.phase(), Phase::Stopped) {
            log::warn!("Match ended in phase {:?}", session.phase());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "close-pong")]
#[command(about = "Play one headless Close Pong match against an autopilot")]
struct Cli {
    /// RNG seed for the match
    #[arg(default_value_t = 42)]
    seed: u64,
    /// Give up after this many frames (ten minutes at 60 Hz by default)
    #[arg(long, default_value_t = 36_000)]
    max_frames: u64,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    headless::run(cli.seed, cli.max_frames);
}
