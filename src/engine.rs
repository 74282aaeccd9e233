//! Engine: the simulation plus its side-effect sinks
//!
//! The engine owns the state and the random stream exclusively. Each call to
//! [`Engine::tick`] runs one pure simulation step and then replays the step's
//! events to audio and telemetry, ignoring whatever those do with them.

use serde_json::Value;

use crate::audio::{AudioSink, SoundEffect};
use crate::settings::Settings;
use crate::sim::{self, RandomSource, SimEvent, SimRng, SimulationState, Snapshot, TickInput};
use crate::telemetry::{Fields, TelemetrySink};

pub struct Engine<R = SimRng> {
    state: SimulationState,
    rng: R,
    audio: Box<dyn AudioSink>,
    telemetry: Box<dyn TelemetrySink>,
    events: Vec<SimEvent>,
}

impl Engine<SimRng> {
    /// Seed from settings (or the clock) and start on a pre-warmed title screen
    pub fn new(
        settings: &Settings,
        audio: Box<dyn AudioSink>,
        telemetry: Box<dyn TelemetrySink>,
    ) -> Self {
        let rng = SimRng::from_seed_or_clock(settings.seed);
        log::info!("Engine seeded with {}", rng.seed());
        Self::with_rng(rng, audio, telemetry)
    }
}

impl<R: RandomSource> Engine<R> {
    /// Start on a pre-warmed title screen using the given random stream
    pub fn with_rng(rng: R, audio: Box<dyn AudioSink>, telemetry: Box<dyn TelemetrySink>) -> Self {
        let mut engine = Self::from_state(SimulationState::new(), rng, audio, telemetry);
        sim::reset(&mut engine.state, &mut engine.rng, &mut engine.events);
        engine.dispatch();
        engine
    }

    /// Wrap an existing state as-is, without resetting it
    pub fn from_state(
        state: SimulationState,
        rng: R,
        audio: Box<dyn AudioSink>,
        telemetry: Box<dyn TelemetrySink>,
    ) -> Self {
        Self {
            state,
            rng,
            audio,
            telemetry,
            events: Vec::new(),
        }
    }

    /// Advance one frame
    pub fn tick(&mut self, input: TickInput) {
        self.events.clear();
        sim::tick(&mut self.state, &mut self.rng, &input, &mut self.events);
        self.dispatch();
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Events produced by the most recent tick (or reset)
    pub fn last_events(&self) -> &[SimEvent] {
        &self.events
    }

    fn dispatch(&mut self) {
        for event in &self.events {
            notify(event, self.audio.as_mut(), self.telemetry.as_mut());
        }
    }
}

fn notify(event: &SimEvent, audio: &mut dyn AudioSink, telemetry: &mut dyn TelemetrySink) {
    match *event {
        SimEvent::Initialized => telemetry.record("initialize", Fields::new()),
        SimEvent::GameStarted => {
            audio.play(SoundEffect::GameStart);
            telemetry.record("start_game", Fields::new());
        }
        SimEvent::Stretched => audio.play(SoundEffect::Stretch),
        SimEvent::FlowChanged { .. } => audio.play(SoundEffect::FlowChange),
        SimEvent::Ate { .. } => audio.play(SoundEffect::Eat),
        SimEvent::Progress { ticks, score } => {
            telemetry.record("playing", progress_fields(ticks, score));
        }
        SimEvent::GameOver { ticks, score } => {
            audio.play(SoundEffect::GameOver);
            telemetry.record("game_over", progress_fields(ticks, score));
        }
    }
}

fn progress_fields(ticks: u64, score: u64) -> Fields {
    let mut fields = Fields::new();
    fields.insert("ticks".into(), Value::from(ticks));
    fields.insert("score".into(), Value::from(score));
    fields
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use glam::DVec2;

    use super::*;
    use crate::sim::{Mode, Swimmer};

    type Log = Arc<Mutex<Vec<String>>>;

    struct AudioLog(Log);

    impl AudioSink for AudioLog {
        fn play(&mut self, effect: SoundEffect) {
            self.0.lock().unwrap().push(format!("audio:{}", effect.clip_id()));
        }
    }

    struct TelemetryLog(Log);

    impl TelemetrySink for TelemetryLog {
        fn record(&mut self, action: &str, fields: Fields) {
            let line = format!("telemetry:{action}:{}", Value::Object(fields));
            self.0.lock().unwrap().push(line);
        }
    }

    fn engine_with_log(seed: u64) -> (Engine, Log) {
        let log: Log = Arc::default();
        let engine = Engine::with_rng(
            SimRng::new(seed),
            Box::new(AudioLog(log.clone())),
            Box::new(TelemetryLog(log.clone())),
        );
        (engine, log)
    }

    #[test]
    fn test_construction_initializes_title() {
        let (engine, log) = engine_with_log(1);
        assert_eq!(engine.snapshot().mode, Mode::Title);
        assert!(!engine.snapshot().streaks.is_empty());
        assert_eq!(*log.lock().unwrap(), vec!["telemetry:initialize:{}".to_string()]);
    }

    #[test]
    fn test_start_plays_cue_and_records() {
        let (mut engine, log) = engine_with_log(1);
        log.lock().unwrap().clear();
        engine.tick(TickInput::press());

        assert_eq!(engine.last_events(), &[SimEvent::GameStarted]);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["audio:game_start".to_string(), "telemetry:start_game:{}".to_string()]
        );
    }

    #[test]
    fn test_game_over_records_final_score() {
        let log: Log = Arc::default();
        let mut state = SimulationState::playing();
        state.score = 7;
        state
            .predators
            .push(Swimmer::predator(DVec2::new(298.0, 360.0), DVec2::ZERO));
        let mut engine = Engine::from_state(
            state,
            SimRng::new(3),
            Box::new(AudioLog(log.clone())),
            Box::new(TelemetryLog(log.clone())),
        );
        engine.tick(TickInput::default());

        assert_eq!(engine.state().mode, Mode::GameOver);
        let log = log.lock().unwrap();
        assert_eq!(log[0], "audio:game_over");
        assert!(log[1].starts_with("telemetry:game_over:"));
        assert!(log[1].contains("\"score\":7"));
        assert!(log[1].contains("\"ticks\":1"));
    }

    #[test]
    fn test_eat_plays_cue() {
        let log: Log = Arc::default();
        let mut state = SimulationState::playing();
        state
            .food
            .push(Swimmer::food(DVec2::new(278.0, 366.0), DVec2::ZERO));
        let mut engine = Engine::from_state(
            state,
            SimRng::new(3),
            Box::new(AudioLog(log.clone())),
            Box::new(TelemetryLog(log.clone())),
        );
        engine.tick(TickInput::default());
        assert_eq!(engine.snapshot().score, 1);
        assert_eq!(*log.lock().unwrap(), vec!["audio:eat".to_string()]);
    }
}
