// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated processing queue.
//!
//! Holds the in-flight items and broadcasts the full snapshot to every
//! connected client whenever it changes.

use std::sync::Arc;
use std::time::Duration;

use ag_core::protocol::encode_queue_frame;
use ag_core::{MediaType, QueueItem, Result};
use chrono::Utc;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info};

/// Number of simulated workers jobs are spread over.
const WORKERS: u64 = 4;

const MEDIA_ROTATION: [MediaType; 3] = [MediaType::Image, MediaType::Video, MediaType::Audio];

/// How the ticker admits new jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Admit one job every this many ticks (0 disables admission).
    pub job_every: u32,
    /// Upper bound on in-flight jobs.
    pub max_jobs: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            job_every: 2,
            max_jobs: 5,
        }
    }
}

/// Shared queue state.
#[derive(Clone)]
pub struct QueueBoard {
    inner: Arc<QueueBoardInner>,
}

struct QueueBoardInner {
    config: SimConfig,
    jobs: Mutex<Jobs>,
    /// Encoded snapshots, one per change.
    broadcast_tx: broadcast::Sender<String>,
}

#[derive(Default)]
struct Jobs {
    items: Vec<QueueItem>,
    ticks: u64,
    admitted: u64,
}

impl QueueBoard {
    pub fn new(config: SimConfig) -> Self {
        let (broadcast_tx, _) = broadcast::channel(64);
        QueueBoard {
            inner: Arc::new(QueueBoardInner {
                config,
                jobs: Mutex::new(Jobs::default()),
                broadcast_tx,
            }),
        }
    }

    /// Subscribes to snapshot broadcasts.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.inner.broadcast_tx.subscribe()
    }

    /// The current queue as one frame.
    pub async fn snapshot(&self) -> Result<String> {
        let jobs = self.inner.jobs.lock().await;
        encode_queue_frame(&jobs.items)
    }

    /// Adds a job at the start of the pipeline and broadcasts the change.
    #[cfg(test)]
    pub async fn admit(&self, media_type: MediaType) -> Result<QueueItem> {
        let mut jobs = self.inner.jobs.lock().await;
        let item = jobs.admit(media_type);
        self.publish(&jobs.items)?;
        Ok(item)
    }

    /// Advances every job one stage, drops finished ones, and admits a new
    /// job when due. Returns true if the queue changed.
    pub async fn tick(&self) -> Result<bool> {
        let mut jobs = self.inner.jobs.lock().await;
        jobs.ticks += 1;

        let before = jobs.items.len();
        let mut changed = !jobs.items.is_empty();
        jobs.items.retain_mut(|item| item.advance());
        let finished = before - jobs.items.len();
        if finished > 0 {
            debug!(finished, "jobs completed");
        }

        let config = self.inner.config;
        let due = config.job_every > 0 && jobs.ticks % u64::from(config.job_every) == 0;
        if due && jobs.items.len() < config.max_jobs {
            let media_type = MEDIA_ROTATION[(jobs.admitted % MEDIA_ROTATION.len() as u64) as usize];
            jobs.admit(media_type);
            changed = true;
        }

        if changed {
            self.publish(&jobs.items)?;
        }
        Ok(changed)
    }

    fn publish(&self, items: &[QueueItem]) -> Result<()> {
        let frame = encode_queue_frame(items)?;
        // No subscribers is fine
        let receivers = self.inner.broadcast_tx.send(frame).unwrap_or(0);
        debug!(items = items.len(), receivers, "snapshot published");
        Ok(())
    }
}

impl Jobs {
    fn admit(&mut self, media_type: MediaType) -> QueueItem {
        self.admitted += 1;
        let mut item = QueueItem::new(format!("sim-{:04}", self.admitted), media_type, Utc::now());
        item.worker_id = Some(format!("worker-{}", (self.admitted - 1) % WORKERS + 1));
        info!(id = %item.id, media = %media_type, "job admitted");
        self.items.push(item.clone());
        item
    }
}

/// Drives the board forever at `interval`.
pub async fn run_ticker(board: QueueBoard, interval: Duration) {
    let mut timer = tokio::time::interval(interval);
    timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // The first tick of an interval completes immediately
    timer.tick().await;
    loop {
        timer.tick().await;
        if let Err(e) = board.tick().await {
            tracing::error!("Failed to publish snapshot: {}", e);
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
