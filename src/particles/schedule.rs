//! Frame pacing and cancellation for the render loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tokio::time::{self, Interval, MissedTickBehavior};

use super::particle::Point;

/// Lets a frame through at most once per interval; early calls are skipped.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    interval: Duration,
    last_frame: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_frame: None,
        }
    }

    pub fn ready(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_frame {
            if now.saturating_duration_since(last) < self.interval {
                return false;
            }
        }
        self.last_frame = Some(now);
        true
    }
}

/// Coalesces bursts of pointer moves into at most one update per interval.
#[derive(Debug, Clone)]
pub struct PointerThrottle {
    interval: Duration,
    pending: Option<Point>,
    last_commit: Option<Instant>,
}

impl PointerThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            last_commit: None,
        }
    }

    /// Remembers the latest position; earlier uncommitted ones are dropped.
    pub fn record(&mut self, point: Point) {
        self.pending = Some(point);
    }

    /// Hands out the pending position if the interval since the last commit has passed.
    pub fn take(&mut self, now: Instant) -> Option<Point> {
        if let Some(last) = self.last_commit {
            if now.saturating_duration_since(last) < self.interval {
                return None;
            }
        }
        let point = self.pending.take()?;
        self.last_commit = Some(now);
        Some(point)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Shared stop flag for a render loop. Cancelling more than once is harmless.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Async frame clock: ticks at the target rate until cancelled.
pub struct FrameScheduler {
    ticker: Interval,
    limiter: FrameLimiter,
    cancel: CancelHandle,
}

impl FrameScheduler {
    pub fn new(interval: Duration, cancel: CancelHandle) -> Self {
        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            ticker,
            limiter: FrameLimiter::new(interval),
            cancel,
        }
    }

    pub fn handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Waits for the next frame slot. `None` once the loop is cancelled.
    pub async fn next_frame(&mut self) -> Option<Instant> {
        loop {
            if self.cancel.is_cancelled() {
                return None;
            }
            let tick = self.ticker.tick().await.into_std();
            if self.cancel.is_cancelled() {
                return None;
            }
            if self.limiter.ready(tick) {
                return Some(tick);
            }
        }
    }
}
