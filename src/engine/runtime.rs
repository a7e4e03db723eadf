//! Threaded event runtime for the calculator engine.
//!
//! The engine itself is synchronous. This module wraps one engine in a
//! dedicated worker thread fed by a bounded channel - the process-level
//! analog of a UI event loop. There is exactly one worker: events must
//! take effect strictly in arrival order, which rules out a concurrent
//! pool.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use tracing::debug;

use crate::engine::CalcEngine;
use crate::error::{CalcError, CalcResult};
use crate::event::InputEvent;
use crate::snapshot::Snapshot;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct CalcRuntimeConfig {
    /// Maximum queued events before submission reports backpressure.
    pub queue_capacity: usize,
}

impl Default for CalcRuntimeConfig {
    fn default() -> Self {
        Self { queue_capacity: 256 }
    }
}

enum Job {
    Apply {
        event: InputEvent,
        reply: Sender<CalcResult<Snapshot>>,
    },

    #[cfg(test)]
    Sleep {
        duration: Duration,
        reply: Sender<()>,
    },
}

/// Handle for one submitted event.
pub struct EventHandle {
    rx: Receiver<CalcResult<Snapshot>>,
}

impl EventHandle {
    /// Waits for the event to be applied.
    ///
    /// # Errors
    ///
    /// [`CalcError::Disconnected`] if the worker shut down before
    /// replying; otherwise whatever the engine returned.
    pub fn join(self) -> CalcResult<Snapshot> {
        self.rx.recv().map_err(|_| CalcError::Disconnected)?
    }

    /// Waits for the event to be applied, up to `timeout`.
    ///
    /// # Errors
    ///
    /// [`CalcError::Timeout`] when the wait expires,
    /// [`CalcError::Disconnected`] if the worker is gone, otherwise
    /// whatever the engine returned.
    #[allow(clippy::cast_possible_truncation)]
    pub fn join_timeout(self, timeout: Duration) -> CalcResult<Snapshot> {
        self.rx.recv_timeout(timeout).map_err(|err| match err {
            crossbeam_channel::RecvTimeoutError::Timeout => CalcError::Timeout {
                duration_ms: timeout.as_millis().min(u128::from(u64::MAX)) as u64,
            },
            crossbeam_channel::RecvTimeoutError::Disconnected => CalcError::Disconnected,
        })?
    }
}

/// A single-worker runtime that applies events strictly in arrival order.
pub struct CalcRuntime {
    tx: Sender<Job>,
    worker: JoinHandle<()>,
    queue_capacity: usize,
}

impl CalcRuntime {
    /// Starts a runtime around a fresh engine.
    #[must_use]
    pub fn new(config: CalcRuntimeConfig) -> Self {
        Self::with_engine(CalcEngine::new(), config)
    }

    /// Starts a runtime around an existing engine, keeping its memory
    /// and angle mode.
    #[must_use]
    pub fn with_engine(mut engine: CalcEngine, config: CalcRuntimeConfig) -> Self {
        let queue_capacity = config.queue_capacity.max(1);
        let (tx, rx) = bounded::<Job>(queue_capacity);

        let worker = thread::Builder::new()
            .name("tapcalc-events".to_string())
            .spawn(move || {
                debug!("calculator event worker started");
                loop {
                    match rx.recv() {
                        Ok(Job::Apply { event, reply }) => {
                            let result = engine.apply(event);
                            let _ = reply.send(result);
                        }
                        Err(_) => break,

                        #[cfg(test)]
                        Ok(Job::Sleep { duration, reply }) => {
                            thread::sleep(duration);
                            let _ = reply.send(());
                        }
                    }
                }
                debug!("calculator event worker stopped");
            })
            .expect("failed to spawn tapcalc worker");

        Self {
            tx,
            worker,
            queue_capacity,
        }
    }

    /// Submits an event without blocking.
    ///
    /// # Errors
    ///
    /// [`CalcError::QueueFull`] when the queue is at capacity,
    /// [`CalcError::Disconnected`] when the worker is gone.
    pub fn submit(&self, event: InputEvent) -> CalcResult<EventHandle> {
        let (reply, rx) = bounded(1);
        match self.tx.try_send(Job::Apply { event, reply }) {
            Ok(()) => Ok(EventHandle { rx }),
            Err(TrySendError::Full(_)) => Err(CalcError::QueueFull {
                capacity: self.queue_capacity,
            }),
            Err(TrySendError::Disconnected(_)) => Err(CalcError::Disconnected),
        }
    }

    /// Submits an event and waits for its snapshot.
    ///
    /// # Errors
    ///
    /// As [`submit`](Self::submit) and [`EventHandle::join`].
    pub fn apply(&self, event: InputEvent) -> CalcResult<Snapshot> {
        self.submit(event)?.join()
    }

    /// Closes the queue: the worker drains queued events, then exits.
    pub fn shutdown(self) {
        drop(self.tx);
        let _ = self.worker.join();
    }

    #[cfg(test)]
    fn submit_sleep(&self, duration: Duration) -> Receiver<()> {
        let (reply, rx) = bounded(1);
        self.tx
            .send(Job::Sleep { duration, reply })
            .expect("worker gone");
        rx
    }
}
