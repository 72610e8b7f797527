//! Periodic driver for the bell board.
//!
//! Each tick reads the time source, recomputes the snapshot and hands a
//! [`Frame`] to the caller. The only state kept between ticks is which
//! boundary was last announced and until when its toast stays visible.

use crate::core::board::{self, Snapshot};
use crate::core::week::WeekSchedule;
use crate::errors::AppResult;
use crate::models::clock::ClockValue;
use crate::models::period::Period;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// Where the watcher reads "now" from.
pub trait TimeSource {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock.
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Cloneable flag that ends [`Watcher::run`] before its next tick.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub time: ClockValue,
    pub period: Period,
    pub until: NaiveDateTime,
}

/// Fires one toast per period boundary and remembers how long it lasts.
#[derive(Debug)]
pub struct Notifier {
    lifetime: TimeDelta,
    last: Option<(NaiveDate, ClockValue)>,
    toast: Option<Toast>,
}

impl Notifier {
    /// Lifetimes too large for a `TimeDelta` are clamped to its maximum.
    pub fn new(lifetime_ms: u64) -> Self {
        let lifetime = i64::try_from(lifetime_ms)
            .ok()
            .and_then(TimeDelta::try_milliseconds)
            .unwrap_or(TimeDelta::MAX);

        Self {
            lifetime,
            last: None,
            toast: None,
        }
    }

    /// Returns `true` when `snap` carries a boundary not announced before.
    pub fn observe(&mut self, snap: &Snapshot, now: &NaiveDateTime) -> bool {
        let Some(period) = snap.notify else {
            return false;
        };

        let key = (snap.date, period.start);
        if self.last == Some(key) {
            return false;
        }

        self.last = Some(key);
        self.toast = Some(Toast {
            time: snap.time,
            period,
            until: now
                .checked_add_signed(self.lifetime)
                .unwrap_or(NaiveDateTime::MAX),
        });
        true
    }

    /// Toast still on screen at `now`.
    pub fn active(&self, now: &NaiveDateTime) -> Option<&Toast> {
        self.toast.as_ref().filter(|t| *now < t.until)
    }
}

/// What one tick produced.
#[derive(Debug, Clone)]
pub struct Frame {
    pub now: NaiveDateTime,
    pub snapshot: Snapshot,
    /// A toast was raised on this very tick.
    pub fired: bool,
    pub toast: Option<Toast>,
}

pub struct Watcher<'a, S: TimeSource> {
    week: &'a WeekSchedule,
    source: S,
    notifier: Notifier,
    interval: Duration,
    stop: StopHandle,
}

impl<'a, S: TimeSource> Watcher<'a, S> {
    pub fn new(week: &'a WeekSchedule, source: S, notification_ms: u64) -> Self {
        Self {
            week,
            source,
            notifier: Notifier::new(notification_ms),
            interval: Duration::from_secs(1),
            stop: StopHandle::default(),
        }
    }

    /// Tick spacing; zero disables sleeping.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn tick(&mut self) -> Frame {
        let now = self.source.now();
        let snapshot = board::snapshot(self.week, &now);
        let fired = self.notifier.observe(&snapshot, &now);

        if fired && let Some(p) = snapshot.notify {
            info!(time = %snapshot.time, period = %p, "bell");
        }

        Frame {
            toast: self.notifier.active(&now).cloned(),
            now,
            snapshot,
            fired,
        }
    }

    /// Tick until stopped, `max_ticks` is reached or `on_frame` fails.
    pub fn run<F>(&mut self, max_ticks: Option<u64>, mut on_frame: F) -> AppResult<()>
    where
        F: FnMut(&Frame) -> AppResult<()>,
    {
        info!(interval_ms = self.interval.as_millis() as u64, "watcher started");
        let mut ticks = 0u64;

        while !self.stop.is_stopped() {
            let frame = self.tick();
            on_frame(&frame)?;

            ticks += 1;
            if max_ticks.is_some_and(|m| ticks >= m) {
                break;
            }

            self.sleep_to_next_tick(&frame.now);
        }

        debug!(ticks, "watcher stopped");
        Ok(())
    }

    // Align to the next whole interval so second 0 of a minute is not skipped
    fn sleep_to_next_tick(&self, now: &NaiveDateTime) {
        if self.interval.is_zero() {
            return;
        }
        let into_second = Duration::from_nanos(u64::from(now.nanosecond() % 1_000_000_000));
        thread::sleep(self.interval.saturating_sub(into_second).max(Duration::from_millis(1)));
    }
}
