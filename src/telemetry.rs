//! Best-effort gameplay telemetry
//!
//! Records are flat JSON objects keyed by `action`. Every layer here swallows
//! its own failures: a lost record never reaches the simulation.

use std::sync::mpsc;
use std::thread;

use serde_json::{Map, Value};

use crate::consts::GAME_NAME;

/// Extra fields attached to a record
pub type Fields = Map<String, Value>;

/// Receives telemetry records. Must not block the caller.
pub trait TelemetrySink {
    fn record(&mut self, action: &str, fields: Fields);
}

/// Drops everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTelemetry;

impl TelemetrySink for NullTelemetry {
    fn record(&mut self, _action: &str, _fields: Fields) {}
}

/// Writes each record as one JSON line through the `telemetry` log target
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTelemetry;

impl TelemetrySink for LogTelemetry {
    fn record(&mut self, _action: &str, fields: Fields) {
        log::info!(target: "telemetry", "{} {}", GAME_NAME, Value::Object(fields));
    }
}

/// Stamps player/play ids onto records and honours the logging toggle
#[derive(Debug)]
pub struct Telemetry<S> {
    sink: S,
    player_id: String,
    play_id: String,
    enabled: bool,
}

impl<S: TelemetrySink> Telemetry<S> {
    pub fn new(sink: S, player_id: impl Into<String>, play_id: impl Into<String>, enabled: bool) -> Self {
        Self {
            sink,
            player_id: player_id.into(),
            play_id: play_id.into(),
            enabled,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: TelemetrySink> TelemetrySink for Telemetry<S> {
    fn record(&mut self, action: &str, mut fields: Fields) {
        if !self.enabled {
            return;
        }
        fields.insert("player_id".into(), Value::from(self.player_id.as_str()));
        fields.insert("play_id".into(), Value::from(self.play_id.as_str()));
        fields.insert("action".into(), Value::from(action));
        self.sink.record(action, fields);
    }
}

enum PipelineCommand {
    Record(String, Fields),
    Shutdown,
}

/// Hands records to a worker thread so the tick never waits on the sink
pub struct TelemetryPipeline {
    tx: mpsc::Sender<PipelineCommand>,
    handle: Option<thread::JoinHandle<()>>,
}

impl TelemetryPipeline {
    pub fn new<S>(mut sink: S) -> std::io::Result<Self>
    where
        S: TelemetrySink + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<PipelineCommand>();
        let handle = thread::Builder::new()
            .name("telemetry-worker".into())
            .spawn(move || {
                while let Ok(command) = rx.recv() {
                    match command {
                        PipelineCommand::Record(action, fields) => sink.record(&action, fields),
                        PipelineCommand::Shutdown => break,
                    }
                }
            })?;

        Ok(Self {
            tx,
            handle: Some(handle),
        })
    }
}

impl TelemetrySink for TelemetryPipeline {
    fn record(&mut self, action: &str, fields: Fields) {
        if self
            .tx
            .send(PipelineCommand::Record(action.to_owned(), fields))
            .is_err()
        {
            log::warn!("telemetry worker gone; {action} dropped");
        }
    }
}

impl Drop for TelemetryPipeline {
    fn drop(&mut self) {
        let _ = self.tx.send(PipelineCommand::Shutdown);
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            log::warn!("telemetry worker panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<(String, Fields)>>>);

    impl TelemetrySink for Shared {
        fn record(&mut self, action: &str, fields: Fields) {
            if let Ok(mut records) = self.0.lock() {
                records.push((action.to_owned(), fields));
            }
        }
    }

    #[test]
    fn test_ids_stamped_on_records() {
        let shared = Shared::default();
        let mut telemetry = Telemetry::new(shared.clone(), "player-1", "play-1", true);
        let mut fields = Fields::new();
        fields.insert("score".into(), Value::from(3));
        telemetry.record("game_over", fields);

        let records = shared.0.lock().unwrap();
        assert_eq!(records.len(), 1);
        let (action, fields) = &records[0];
        assert_eq!(action, "game_over");
        assert_eq!(fields["player_id"], "player-1");
        assert_eq!(fields["play_id"], "play-1");
        assert_eq!(fields["action"], "game_over");
        assert_eq!(fields["score"], 3);
    }

    #[test]
    fn test_disabled_records_nothing() {
        let shared = Shared::default();
        let mut telemetry = Telemetry::new(shared.clone(), "p", "q", false);
        telemetry.record("start_game", Fields::new());
        assert!(shared.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_pipeline_delivers_before_drop_returns() {
        let shared = Shared::default();
        {
            let mut pipeline = TelemetryPipeline::new(shared.clone()).unwrap();
            pipeline.record("initialize", Fields::new());
            pipeline.record("start_game", Fields::new());
        }
        let actions: Vec<String> = shared.0.lock().unwrap().iter().map(|(a, _)| a.clone()).collect();
        assert_eq!(actions, vec!["initialize", "start_game"]);
    }
}
