//! Background polling worker
//!
//! Runs the poll-fetch-dispatch-reschedule loop on a dedicated thread,
//! driven by a command channel whose receive timeout doubles as the
//! one-shot poll timer. The timer is rearmed only after a tick fully
//! completes, so at most one fetch is ever in flight and a slow or failed
//! poll delays the next one instead of overlapping it.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::dispatch::Dispatcher;
use crate::source::UpdateSource;
use crate::state::PollState;

/// Commands sent from the sync UpdateManager to the background worker
#[derive(Debug)]
pub(crate) enum Command {
    /// Arm the poll timer, or reset a pending one
    Start,
    /// Disarm the poll timer
    Stop,
    /// Change the poll interval, effective at the next rearm
    SetInterval(Duration),
    /// Shut down the worker
    Shutdown,
}

/// Shared flags that make `stop()` effective from any thread
///
/// `running` gates new ticks. `generation` is bumped on every stop and
/// invalidates the result of a fetch that was in flight at that moment:
/// the batch (or error) of a stale generation is discarded, so nothing is
/// dispatched and the offset stays where the observers last saw it.
#[derive(Debug)]
pub(crate) struct PollControl {
    pub running: AtomicBool,
    pub generation: AtomicU64,
}

impl PollControl {
    pub fn new() -> Self {
        Self {
            running: AtomicBool::new(false),
            generation: AtomicU64::new(0),
        }
    }
}

/// Timer state of the polling loop
#[derive(Debug, Clone, Copy)]
enum Timer {
    /// No poll scheduled
    Stopped,
    /// One poll scheduled at the deadline
    Armed { deadline: Instant },
}

/// Spawn the background poll worker thread
pub(crate) fn spawn_poll_worker(
    source: Box<dyn UpdateSource>,
    dispatcher: Arc<Dispatcher>,
    control: Arc<PollControl>,
    command_rx: Receiver<Command>,
    initial_interval: Duration,
    batch_limit: Option<u8>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        run_poll_loop(
            source,
            dispatcher,
            control,
            command_rx,
            initial_interval,
            batch_limit,
        );
    })
}

fn run_poll_loop(
    source: Box<dyn UpdateSource>,
    dispatcher: Arc<Dispatcher>,
    control: Arc<PollControl>,
    command_rx: Receiver<Command>,
    initial_interval: Duration,
    batch_limit: Option<u8>,
) {
    let mut state = PollState::new();
    let mut interval = initial_interval;
    let mut timer = Timer::Stopped;

    tracing::debug!("Update poll worker started");

    loop {
        let deadline = match timer {
            Timer::Stopped => {
                // Nothing scheduled; block until the next command.
                match command_rx.recv() {
                    Ok(command) => {
                        if apply_command(command, &mut timer, &mut interval) {
                            break;
                        }
                        continue;
                    }
                    Err(_) => break,
                }
            }
            Timer::Armed { deadline } => deadline,
        };

        let now = Instant::now();
        if now < deadline {
            match command_rx.recv_timeout(deadline - now) {
                Ok(command) => {
                    if apply_command(command, &mut timer, &mut interval) {
                        break;
                    }
                    continue;
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        // Deadline reached. Skip the tick if polling stopped in the window
        // since the timer was armed.
        if !control.running.load(Ordering::SeqCst) {
            timer = Timer::Stopped;
            continue;
        }

        run_tick(
            source.as_ref(),
            &dispatcher,
            &control,
            &mut state,
            batch_limit,
        );

        // Commands that arrived during the tick apply before the rearm.
        let mut shutdown = false;
        while let Ok(command) = command_rx.try_recv() {
            if apply_command(command, &mut timer, &mut interval) {
                shutdown = true;
                break;
            }
        }
        if shutdown {
            break;
        }

        if control.running.load(Ordering::SeqCst) {
            // Fixed delay: the next poll is measured from the completion of
            // this one, never from its scheduled time.
            timer = Timer::Armed {
                deadline: Instant::now() + interval,
            };
        } else {
            timer = Timer::Stopped;
        }
    }

    tracing::debug!("Update poll worker shut down");
}

/// Apply a command to the loop state; returns true on shutdown
fn apply_command(command: Command, timer: &mut Timer, interval: &mut Duration) -> bool {
    match command {
        Command::Start => {
            // A second Start resets the pending timer; it never schedules a
            // second one.
            *timer = Timer::Armed {
                deadline: Instant::now() + *interval,
            };
            tracing::debug!("Update polling armed, interval {:?}", interval);
            false
        }
        Command::Stop => {
            *timer = Timer::Stopped;
            tracing::debug!("Update polling disarmed");
            false
        }
        Command::SetInterval(new_interval) => {
            // Takes effect at the next rearm; an already-armed deadline is
            // never recomputed.
            *interval = new_interval;
            false
        }
        Command::Shutdown => true,
    }
}

/// One poll-fetch-dispatch sequence
///
/// Every failure is absorbed and reported through the error channel; the
/// caller always regains control to reschedule.
fn run_tick(
    source: &dyn UpdateSource,
    dispatcher: &Dispatcher,
    control: &PollControl,
    state: &mut PollState,
    batch_limit: Option<u8>,
) {
    let generation = control.generation.load(Ordering::SeqCst);
    let offset = state.next_offset();

    match source.fetch(offset, batch_limit) {
        Ok(batch) => {
            if control.generation.load(Ordering::SeqCst) != generation {
                // Polling stopped while the fetch was in flight. The offset
                // was not advanced, so the batch is redelivered after the
                // next start.
                tracing::debug!("Discarding batch fetched after stop");
                return;
            }
            if batch.is_empty() {
                return;
            }
            state.record_batch(&batch);
            tracing::debug!(
                "Dispatching {} update(s), last_update_id now {}",
                batch.len(),
                state.last_update_id()
            );
            dispatcher.notify_updates(&batch);
        }
        Err(error) => {
            if control.generation.load(Ordering::SeqCst) != generation {
                tracing::debug!("Discarding poll error raised after stop");
                return;
            }
            tracing::warn!("getUpdates poll failed: {}", error);
            dispatcher.notify_error(&error);
        }
    }
}
