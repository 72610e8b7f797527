use chrono::NaiveDateTime;
use rbells::core::watch::{Frame, TimeSource, Watcher};
use std::cell::Cell;
use std::time::Duration;

mod common;
use common::{at, standard_week};

/// Replays a fixed list of instants, repeating the last one.
struct Replay {
    times: Vec<NaiveDateTime>,
    next: Cell<usize>,
}

impl Replay {
    fn new(times: Vec<NaiveDateTime>) -> Self {
        Self {
            times,
            next: Cell::new(0),
        }
    }
}

impl TimeSource for &Replay {
    fn now(&self) -> NaiveDateTime {
        let i = self.next.get();
        self.next.set(i + 1);
        self.times[i.min(self.times.len() - 1)]
    }
}

fn collect(replay: &Replay, ticks: u64, notification_ms: u64) -> Vec<Frame> {
    let week = standard_week();
    let mut watcher =
        Watcher::new(&week, replay, notification_ms).with_interval(Duration::ZERO);

    let mut frames = Vec::new();
    watcher
        .run(Some(ticks), |f| {
            frames.push(f.clone());
            Ok(())
        })
        .unwrap();
    frames
}

#[test]
fn test_bell_fires_once_per_boundary() {
    let replay = Replay::new(vec![
        at(19, 8, 59, 59),
        at(19, 9, 0, 0),
        at(19, 9, 0, 0),
        at(19, 9, 0, 3),
        at(19, 9, 0, 6),
    ]);
    let frames = collect(&replay, 5, 5000);

    let fired: Vec<bool> = frames.iter().map(|f| f.fired).collect();
    assert_eq!(fired, vec![false, true, false, false, false]);

    let showing: Vec<bool> = frames.iter().map(|f| f.toast.is_some()).collect();
    assert_eq!(showing, vec![false, true, true, true, false]);

    let toast = frames[1].toast.as_ref().unwrap();
    assert_eq!(toast.period.index(), Some(1));
    assert_eq!(toast.until, at(19, 9, 0, 5));
}

#[test]
fn test_next_boundary_replaces_the_toast() {
    let replay = Replay::new(vec![at(19, 9, 0, 0), at(19, 9, 45, 0)]);
    let frames = collect(&replay, 2, 60_000);

    assert!(frames.iter().all(|f| f.fired));
    assert!(frames[1].toast.as_ref().unwrap().period.is_break());
}

#[test]
fn test_stop_handle_ends_the_loop() {
    let week = standard_week();
    let replay = Replay::new(vec![at(19, 10, 0, 0)]);
    let mut watcher = Watcher::new(&week, &replay, 5000).with_interval(Duration::ZERO);
    let stop = watcher.stop_handle();

    let mut ticks = 0;
    watcher
        .run(None, |_| {
            ticks += 1;
            if ticks == 3 {
                stop.stop();
            }
            Ok(())
        })
        .unwrap();

    assert_eq!(ticks, 3);
    assert!(stop.is_stopped());
}

#[test]
fn test_frame_error_stops_the_loop() {
    let week = standard_week();
    let replay = Replay::new(vec![at(19, 10, 0, 0)]);
    let mut watcher = Watcher::new(&week, &replay, 5000).with_interval(Duration::ZERO);

    let result = watcher.run(None, |_| Err(rbells::errors::AppError::Other("closed".into())));
    assert!(result.is_err());
}

#[test]
fn test_oversized_notification_time_keeps_the_toast() {
    let replay = Replay::new(vec![at(19, 9, 0, 0), at(19, 9, 30, 0)]);
    let frames = collect(&replay, 2, u64::MAX);

    assert!(frames[0].fired);
    assert!(frames[1].toast.is_some());
}
