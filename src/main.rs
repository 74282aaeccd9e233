//! Spotted Garden Eel headless runner
//!
//! Drives the engine with a simple autopilot and logs each round. Rendering
//! and real input devices are provided by other front ends.

use spotted_garden_eel::consts::*;
use spotted_garden_eel::settings::random_id;
use spotted_garden_eel::sim::{Mode, Snapshot, TickInput};
use spotted_garden_eel::{
    AudioManager, Engine, LogAudio, LogTelemetry, NullTelemetry, Settings, Telemetry,
    TelemetryPipeline, TelemetrySink,
};

/// Default run length (10 minutes at 60 Hz)
const DEFAULT_DEMO_TICKS: u64 = 10 * 60 * 60;

/// Holds the "finger" state so it can emit press/release edges
#[derive(Debug, Default)]
struct Autopilot {
    holding: bool,
}

impl Autopilot {
    fn decide(&mut self, snap: &Snapshot<'_>) -> TickInput {
        let want_hold = match snap.mode {
            Mode::Title | Mode::GameOver => {
                // Tap once to advance, then let go
                if self.holding {
                    false
                } else {
                    return self.set_holding(true);
                }
            }
            Mode::Playing => wants_stretch(snap),
        };
        self.set_holding(want_hold)
    }

    fn set_holding(&mut self, hold: bool) -> TickInput {
        let input = TickInput {
            pressed: hold && !self.holding,
            released: !hold && self.holding,
        };
        self.holding = hold;
        input
    }
}

/// Reach for food drifting toward the column, unless a predator is close
fn wants_stretch(snap: &Snapshot<'_>) -> bool {
    let danger = snap
        .predators
        .iter()
        .any(|p| (p.pos.x - APPENDAGE_X).abs() < 120.0);
    if danger {
        return false;
    }

    let tip_y = SEA_BOTTOM - snap.appendage_length;
    snap.food.iter().any(|f| {
        let dx = APPENDAGE_X - f.pos.x;
        let approaching = dx * snap.flow.x > 0.0;
        approaching && dx.abs() < 200.0 && f.pos.y < tip_y
    })
}

fn build_telemetry(settings: &Settings) -> Box<dyn TelemetrySink> {
    let player_id = settings.resolve_player_id();
    let play_id = random_id();
    if !settings.logging {
        return Box::new(Telemetry::new(NullTelemetry, player_id, play_id, false));
    }
    match TelemetryPipeline::new(LogTelemetry) {
        Ok(pipeline) => Box::new(Telemetry::new(pipeline, player_id, play_id, true)),
        Err(err) => {
            log::warn!("Telemetry disabled, worker failed to start: {err}");
            Box::new(Telemetry::new(NullTelemetry, player_id, play_id, false))
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Spotted Garden Eel (headless) starting...");

    let settings = Settings::from_env();
    let max_ticks = std::env::var("GAME_DEMO_TICKS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_DEMO_TICKS);

    let audio = AudioManager::from_settings(LogAudio, &settings);
    let mut engine = Engine::new(&settings, Box::new(audio), build_telemetry(&settings));
    let mut pilot = Autopilot::default();
    let mut rounds = 0u32;
    let mut best = 0u64;

    for _ in 0..max_ticks {
        let input = pilot.decide(&engine.snapshot());
        let was_playing = engine.state().mode == Mode::Playing;
        engine.tick(input);

        if was_playing && engine.state().mode == Mode::GameOver {
            rounds += 1;
            best = best.max(engine.state().score);
            log::info!("Round {} over: ate {} plankton", rounds, engine.state().score);
        }
    }

    log::info!("Finished {} rounds in {} ticks, best score {}", rounds, max_ticks, best);
}
