//! Tick scheduling abstraction.
//!
//! The engine never blocks: it requests a single tick "near the next
//! display refresh" and returns. This seam keeps the engine testable with
//! a manually advanced clock while the terminal front end supplies a
//! wall-clock implementation.

use std::time::{Duration, Instant};

/// Opaque identifier for a scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

/// Frame scheduling primitive.
///
/// `schedule` arranges for the caller's `tick` to run once near the next
/// display refresh; `cancel` prevents a still-pending tick from running
/// and is a no-op for handles that already fired or were already canceled.
pub trait TickScheduler {
    fn schedule(&mut self) -> TickHandle;
    fn cancel(&mut self, handle: TickHandle);
}

/// Virtual-clock scheduler for tests.
///
/// Tracks the single pending handle and counts schedule/cancel traffic so
/// tests can assert that at most one tick is ever outstanding and that
/// restarts really cancel.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<TickHandle>,
    scheduled: usize,
    canceled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pending tick, as if the display refresh arrived.
    /// The caller is expected to invoke the engine's `tick` next.
    pub fn fire(&mut self) -> Option<TickHandle> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn scheduled_count(&self) -> usize {
        self.scheduled
    }

    pub fn canceled_count(&self) -> usize {
        self.canceled
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.pending = Some(handle);
        self.scheduled += 1;
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.canceled += 1;
        }
    }
}

/// Wall-clock scheduler for the terminal loop.
///
/// `schedule` arms a deadline one tick interval away; the event loop polls
/// `due`/`fire` and drives the engine when the deadline passes.
#[derive(Debug)]
pub struct FrameScheduler {
    tick_rate: Duration,
    next_id: u64,
    pending: Option<(TickHandle, Instant)>,
}

impl FrameScheduler {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            next_id: 0,
            pending: None,
        }
    }

    /// Whether the armed deadline has passed
    pub fn due(&self, now: Instant) -> bool {
        matches!(self.pending, Some((_, deadline)) if deadline <= now)
    }

    /// Consume a ripe tick. Returns false if nothing was due.
    pub fn fire(&mut self, now: Instant) -> bool {
        if self.due(now) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Time remaining until the armed deadline, if any
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl TickScheduler for FrameScheduler {
    fn schedule(&mut self) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.pending = Some((handle, Instant::now() + self.tick_rate));
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if matches!(self.pending, Some((pending, _)) if pending == handle) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_schedule_and_fire() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule();
        assert!(scheduler.has_pending());
        assert_eq!(scheduler.scheduled_count(), 1);
        assert_eq!(scheduler.fire(), Some(handle));
        assert!(!scheduler.has_pending());
        assert_eq!(scheduler.fire(), None);
    }

    #[test]
    fn test_manual_cancel_is_noop_after_fire() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule();
        scheduler.fire();
        scheduler.cancel(handle);
        assert_eq!(scheduler.canceled_count(), 0);
    }

    #[test]
    fn test_manual_cancel_clears_pending() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule();
        scheduler.cancel(handle);
        assert!(!scheduler.has_pending());
        assert_eq!(scheduler.canceled_count(), 1);
    }

    #[test]
    fn test_manual_stale_handle_cancel_ignored() {
        let mut scheduler = ManualScheduler::new();
        let old = scheduler.schedule();
        let _new = scheduler.schedule();
        scheduler.cancel(old);
        // The newer handle is still the pending one
        assert!(scheduler.has_pending());
    }

    #[test]
    fn test_frame_scheduler_deadline() {
        let mut scheduler = FrameScheduler::new(Duration::from_millis(10));
        let now = Instant::now();
        scheduler.schedule();
        assert!(!scheduler.fire(now));
        assert!(scheduler.fire(now + Duration::from_millis(11)));
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn test_frame_scheduler_time_until_due() {
        let mut scheduler = FrameScheduler::new(Duration::from_millis(10));
        let now = Instant::now();
        assert_eq!(scheduler.time_until_due(now), None);

        scheduler.schedule();
        assert!(scheduler.time_until_due(now).is_some());
        // Past the deadline the remaining time saturates to zero
        assert_eq!(
            scheduler.time_until_due(now + Duration::from_secs(3600)),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn test_frame_scheduler_cancel() {
        let mut scheduler = FrameScheduler::new(Duration::from_millis(10));
        let handle = scheduler.schedule();
        scheduler.cancel(handle);
        assert!(!scheduler.due(Instant::now() + Duration::from_secs(1)));
    }
}
