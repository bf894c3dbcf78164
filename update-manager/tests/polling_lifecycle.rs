//! Lifecycle tests for the polling loop
//!
//! These tests drive the worker with scripted in-memory update sources and
//! short intervals, verifying the offset-tracking and delivery guarantees:
//! monotonic offsets, at-least-once in-order delivery across failures,
//! idempotent start, and clean stop.

use std::collections::VecDeque;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use serde_json::Map;
use telebot_update_manager::{
    ApiError, PollerConfig, Update, UpdateManager, UpdateSource,
};

const INTERVAL: Duration = Duration::from_millis(20);

fn update(id: i64) -> Update {
    Update {
        update_id: id,
        payload: Map::new(),
    }
}

fn config() -> PollerConfig {
    PollerConfig::default().with_check_interval(INTERVAL)
}

/// Poll `condition` until it holds or the timeout expires
fn wait_until(timeout: Duration, condition: impl Fn() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    condition()
}

/// Scripted update source
///
/// Pops one step per fetch and records the offset each fetch was called
/// with. Once the script is exhausted every fetch returns an empty batch.
#[derive(Clone, Default)]
struct ScriptedSource {
    steps: Arc<Mutex<VecDeque<Result<Vec<Update>, ApiError>>>>,
    offsets: Arc<Mutex<Vec<Option<i64>>>>,
}

impl ScriptedSource {
    fn new(steps: Vec<Result<Vec<Update>, ApiError>>) -> Self {
        Self {
            steps: Arc::new(Mutex::new(steps.into())),
            offsets: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn offsets(&self) -> Vec<Option<i64>> {
        self.offsets.lock().unwrap().clone()
    }

    fn calls(&self) -> usize {
        self.offsets.lock().unwrap().len()
    }
}

impl UpdateSource for ScriptedSource {
    fn fetch(&self, offset: Option<i64>, _limit: Option<u8>) -> Result<Vec<Update>, ApiError> {
        self.offsets.lock().unwrap().push(offset);
        self.steps
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Collects dispatched batches as lists of update identifiers
#[derive(Clone, Default)]
struct BatchLog {
    batches: Arc<Mutex<Vec<Vec<i64>>>>,
}

impl BatchLog {
    fn observe(&self, manager: &UpdateManager) {
        let batches = Arc::clone(&self.batches);
        manager
            .observe_updates(move |batch| {
                batches
                    .lock()
                    .unwrap()
                    .push(batch.iter().map(|u| u.update_id).collect());
            })
            .unwrap();
    }

    fn batches(&self) -> Vec<Vec<i64>> {
        self.batches.lock().unwrap().clone()
    }
}

#[test]
fn first_poll_omits_offset_then_resumes_past_last_id() {
    let source = ScriptedSource::new(vec![Ok(vec![update(5), update(6)])]);
    let manager = UpdateManager::with_config(source.clone(), config());
    let log = BatchLog::default();
    log.observe(&manager);

    manager.start().unwrap();
    assert!(wait_until(Duration::from_secs(2), || source.calls() >= 2));
    manager.stop().unwrap();

    let offsets = source.offsets();
    assert_eq!(offsets[0], None);
    assert_eq!(offsets[1], Some(7));
    assert_eq!(log.batches(), vec![vec![5, 6]]);
}

#[test]
fn failed_poll_keeps_offset_and_notifies_error_channel() {
    let source = ScriptedSource::new(vec![
        Ok(vec![update(5), update(6)]),
        Err(ApiError::Api {
            error_code: 500,
            description: "Internal Server Error".to_string(),
        }),
        Ok(vec![update(7)]),
    ]);
    let manager = UpdateManager::with_config(source.clone(), config());
    let log = BatchLog::default();
    log.observe(&manager);

    let errors = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&errors);
    manager
        .observe_errors(move |error| {
            seen.lock().unwrap().push(error.to_string());
        })
        .unwrap();

    manager.start().unwrap();
    assert!(wait_until(Duration::from_secs(2), || source.calls() >= 4));
    manager.stop().unwrap();

    let offsets = source.offsets();
    // The failed tick polled with offset 7 and did not advance it; the
    // following tick retried the same offset.
    assert_eq!(offsets[1], Some(7));
    assert_eq!(offsets[2], Some(7));
    assert_eq!(offsets[3], Some(8));
    assert_eq!(log.batches(), vec![vec![5, 6], vec![7]]);

    let errors = errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Internal Server Error"));
}

#[test]
fn empty_batch_is_not_dispatched_and_timer_still_reschedules() {
    let source = ScriptedSource::new(Vec::new());
    let manager = UpdateManager::with_config(source.clone(), config());
    let log = BatchLog::default();
    log.observe(&manager);

    manager.start().unwrap();
    assert!(wait_until(Duration::from_secs(2), || source.calls() >= 3));
    manager.stop().unwrap();

    assert!(log.batches().is_empty());
    // Nothing was ever consumed, so every poll fetched from the beginning.
    assert!(source.offsets().iter().all(Option::is_none));
}

#[test]
fn start_twice_arms_a_single_timer() {
    let source = ScriptedSource::new(Vec::new());
    let manager = UpdateManager::with_config(
        source.clone(),
        PollerConfig::default().with_check_interval(Duration::from_millis(50)),
    );

    manager.start().unwrap();
    manager.start().unwrap();
    thread::sleep(Duration::from_millis(220));
    manager.stop().unwrap();

    // One timer yields about four ticks in this window; a duplicated timer
    // would roughly double that.
    let calls = source.calls();
    assert!(calls >= 2, "expected at least 2 ticks, got {}", calls);
    assert!(calls <= 5, "expected at most 5 ticks, got {}", calls);
}

#[test]
fn stop_prevents_further_ticks() {
    let source = ScriptedSource::new(Vec::new());
    let manager = UpdateManager::with_config(source.clone(), config());

    manager.start().unwrap();
    assert!(wait_until(Duration::from_secs(2), || source.calls() >= 1));
    manager.stop().unwrap();

    // A tick that was mid-flight at the stop may still complete; give it
    // time to drain, then verify the timer never fires again.
    thread::sleep(Duration::from_millis(30));
    let calls_at_stop = source.calls();
    thread::sleep(INTERVAL * 5);
    assert_eq!(source.calls(), calls_at_stop);
}

#[test]
fn offset_survives_stop_and_restart() {
    let source = ScriptedSource::new(vec![Ok(vec![update(5), update(6)])]);
    let manager = UpdateManager::with_config(source.clone(), config());
    let log = BatchLog::default();
    log.observe(&manager);

    manager.start().unwrap();
    assert!(wait_until(Duration::from_secs(2), || !log.batches().is_empty()));
    manager.stop().unwrap();

    manager.start().unwrap();
    let calls_before_restart = source.calls();
    assert!(wait_until(Duration::from_secs(2), || {
        source.calls() > calls_before_restart
    }));
    manager.stop().unwrap();

    // Polling resumed one past the highest consumed identifier; the batch
    // from before the stop was not redelivered.
    assert_eq!(*source.offsets().last().unwrap(), Some(7));
    assert_eq!(log.batches(), vec![vec![5, 6]]);
}

/// Source whose first fetch blocks until the test releases it; subsequent
/// fetches return empty batches immediately
#[derive(Clone)]
struct BlockingFirstFetch {
    gate: Arc<Mutex<Option<(mpsc::Sender<()>, mpsc::Receiver<Vec<Update>>)>>>,
    offsets: Arc<Mutex<Vec<Option<i64>>>>,
}

impl BlockingFirstFetch {
    fn new(entered_tx: mpsc::Sender<()>, release_rx: mpsc::Receiver<Vec<Update>>) -> Self {
        Self {
            gate: Arc::new(Mutex::new(Some((entered_tx, release_rx)))),
            offsets: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn offsets(&self) -> Vec<Option<i64>> {
        self.offsets.lock().unwrap().clone()
    }
}

impl UpdateSource for BlockingFirstFetch {
    fn fetch(&self, offset: Option<i64>, _limit: Option<u8>) -> Result<Vec<Update>, ApiError> {
        self.offsets.lock().unwrap().push(offset);

        let gate = self.gate.lock().unwrap().take();
        if let Some((entered_tx, release_rx)) = gate {
            let _ = entered_tx.send(());
            let batch = release_rx.recv().unwrap_or_default();
            return Ok(batch);
        }
        Ok(Vec::new())
    }
}

#[test]
fn stop_discards_the_result_of_an_in_flight_fetch() {
    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let source = BlockingFirstFetch::new(entered_tx, release_rx);

    let manager = UpdateManager::with_config(
        source.clone(),
        PollerConfig::default().with_check_interval(Duration::from_millis(5)),
    );
    let log = BatchLog::default();
    log.observe(&manager);

    manager.start().unwrap();
    entered_rx
        .recv_timeout(Duration::from_secs(2))
        .expect("first fetch never started");

    // The fetch is now in flight; stop, then let it complete with a batch.
    manager.stop().unwrap();
    release_tx.send(vec![update(9)]).unwrap();

    thread::sleep(Duration::from_millis(100));
    assert!(log.batches().is_empty());

    // The discarded batch did not advance the offset: the next poll after
    // a restart still fetches from the beginning.
    manager.start().unwrap();
    assert!(wait_until(Duration::from_secs(2), || {
        source.offsets().len() >= 2
    }));
    manager.stop().unwrap();

    assert_eq!(source.offsets()[1], None);
}

#[test]
fn observer_panic_does_not_stop_polling_or_other_observers() {
    let source = ScriptedSource::new(vec![Ok(vec![update(1)]), Ok(vec![update(2)])]);
    let manager = UpdateManager::with_config(source.clone(), config());

    manager.observe_updates(|_| panic!("observer bug")).unwrap();
    let log = BatchLog::default();
    log.observe(&manager);

    manager.start().unwrap();
    assert!(wait_until(Duration::from_secs(2), || log.batches().len() >= 2));
    manager.stop().unwrap();

    assert_eq!(log.batches(), vec![vec![1], vec![2]]);
}

#[test]
fn interval_change_takes_effect_on_the_next_rearm() {
    let source = ScriptedSource::new(Vec::new());
    let manager = UpdateManager::with_config(
        source.clone(),
        PollerConfig::default().with_check_interval(Duration::from_millis(150)),
    );

    manager.start().unwrap();
    manager
        .set_check_interval(Duration::from_millis(10))
        .unwrap();

    // The already-armed tick keeps its 150ms deadline.
    thread::sleep(Duration::from_millis(75));
    assert_eq!(source.calls(), 0);

    // After it fires, the 10ms interval kicks in.
    assert!(wait_until(Duration::from_secs(2), || source.calls() >= 5));
    manager.stop().unwrap();
}
