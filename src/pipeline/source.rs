//! Sensor delivery
//!
//! Frames and recogniser swipes arrive on one channel so the pipeline
//! handles them in order on a single thread. Anything that produces
//! [`SensorEvent`]s implements [`SensorSource`] and runs on its own thread.

use crate::error::{PointerError, PointerResult};
use crate::gesture::SwipeDirection;
use crate::skeleton::SkeletonFrame;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, IsTerminal};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

/// One delivery from the sensor session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SensorEvent {
    /// A skeleton frame; `None` when the sensor handed over an empty frame
    Frame(Option<SkeletonFrame>),
    /// A swipe raised by the external recogniser
    Swipe(SwipeDirection),
}

/// Anything that can deliver [`SensorEvent`]s over a channel
pub trait SensorSource: Send + 'static {
    fn run(self: Box<Self>, tx: Sender<SensorEvent>);
}

/// Spawn a source on its own thread and return the receiving end
///
/// The channel closes when the source returns.
pub fn spawn_sensor_source<S: SensorSource>(source: S) -> Receiver<SensorEvent> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || Box::new(source).run(tx));
    rx
}

/// Replays a fixed list of recorded events
#[derive(Debug, Clone)]
pub struct ReplaySource {
    events: Vec<SensorEvent>,
}

impl ReplaySource {
    pub fn new(events: Vec<SensorEvent>) -> Self {
        Self { events }
    }
}

impl SensorSource for ReplaySource {
    fn run(self: Box<Self>, tx: Sender<SensorEvent>) {
        for event in self.events {
            if tx.send(event).is_err() {
                break;
            }
        }
    }
}

/// Reads newline-delimited JSON events, e.g. from a sensor bridge process
///
/// Malformed lines are logged and skipped; the source ends at EOF.
pub struct JsonLinesSource<R: BufRead + Send + 'static> {
    reader: R,
}

impl<R: BufRead + Send + 'static> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl JsonLinesSource<std::io::BufReader<std::io::Stdin>> {
    /// Source bound to this process's stdin
    ///
    /// Fails when stdin is an interactive terminal, since no sensor bridge
    /// is attached in that case.
    pub fn stdin() -> PointerResult<Self> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(PointerError::SourceUnavailable(
                "stdin is a terminal; pipe a sensor event stream into it".to_string(),
            ));
        }
        Ok(Self::new(std::io::BufReader::new(stdin)))
    }
}

impl<R: BufRead + Send + 'static> SensorSource for JsonLinesSource<R> {
    fn run(self: Box<Self>, tx: Sender<SensorEvent>) {
        for (index, line) in self.reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!("Sensor stream read failed: {}", e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<SensorEvent>(&line) {
                Ok(event) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Err(e) => tracing::warn!("Skipping malformed sensor event on line {}: {}", index + 1, e),
            }
        }
        tracing::info!("Sensor stream ended");
    }
}
