use std::{fmt, sync::Arc, time::Duration};

use chrono::Utc;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};

use crate::domain::weather::format_local_time;

pub type TimeSource = Arc<dyn Fn() -> i64 + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    /// Which `start` call produced this reading.
    pub generation: u64,
    pub local_time: String,
    pub observed_epoch: i64,
}

/// Live local-time ticker for the city on display.
///
/// At most one timer runs at a time: `start` aborts the previous task before
/// spawning the next one, and dropping the clock stops it. Readings go out
/// once immediately and then every second. Must be used inside a tokio
/// runtime.
pub struct ClockState {
    tx: mpsc::UnboundedSender<ClockReading>,
    source: TimeSource,
    running: Option<JoinHandle<()>>,
    generation: u64,
}

impl fmt::Debug for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClockState")
            .field("running", &self.is_running())
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl ClockState {
    pub fn new(tx: mpsc::UnboundedSender<ClockReading>) -> Self {
        Self::with_time_source(tx, Arc::new(|| Utc::now().timestamp()))
    }

    pub fn with_time_source(tx: mpsc::UnboundedSender<ClockReading>, source: TimeSource) -> Self {
        Self {
            tx,
            source,
            running: None,
            generation: 0,
        }
    }

    /// Starts ticking for a location `timezone_offset_sec` away from UTC and
    /// returns the generation tag of the new stream.
    pub fn start(&mut self, observed_epoch: i64, timezone_offset_sec: i64) -> u64 {
        self.stop();
        self.generation += 1;

        let generation = self.generation;
        let tx = self.tx.clone();
        let source = Arc::clone(&self.source);
        self.running = Some(tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(1));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                let reading = ClockReading {
                    generation,
                    local_time: format_local_time((*source)(), timezone_offset_sec),
                    observed_epoch,
                };
                if tx.send(reading).is_err() {
                    break;
                }
            }
        }));
        generation
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.running.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for ClockState {
    fn drop(&mut self) {
        self.stop();
    }
}
