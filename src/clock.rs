//! Clock recovery and the per-frame tick driver (§4.7 "Clock Engine").
//!
//! [`ClockEngine`] tracks lock state against the transceiver's `on_clock`
//! samples and its own periodic timer; it never touches a [`Dispatcher`]
//! directly. Callers pass a `tick` closure that is invoked once per frame
//! that needs servicing, keeping this module free of any dependency on
//! [`crate::scheduler`].

use crate::fn_time::Fn32;

/// Wall-clock frame period, in microseconds.
pub const FRAME_DURATION_US: u64 = 4615;

/// Maximum `|Δfn|` tolerated before a clock sample is treated as a re-lock
/// rather than an in-lock correction.
pub const MAX_FN_SKEW: u32 = 50;

/// Consecutive periodic-timer fires with no real clock sample before the
/// transceiver is declared lost.
pub const LOSS_THRESHOLD: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unlocked,
    Locked,
}

/// What happened as a result of a clock-engine input; the caller reacts to
/// [`ClockEvent::LossOfClock`] and [`ClockEvent::SkewDetected`] by flushing
/// outbound state and requesting re-provisioning (§5 "Cancellation/timeout").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    /// Nothing beyond the ticks already delivered via the closure.
    NoAction,
    /// Transitioned UNLOCKED -> LOCKED (first lock or a re-lock after skew).
    Locked,
    /// `lost_counter` reached [`LOSS_THRESHOLD`]; the transceiver is
    /// presumed gone.
    LossOfClock,
    /// Host wall-clock skewed relative to the frame timer.
    SkewDetected,
}

/// Frame-clock recovery state machine (§4.7).
pub struct ClockEngine {
    state: State,
    internal_fn: Fn32,
    lost_counter: u32,
    tv_clock_us: u64,
}

impl ClockEngine {
    pub fn new() -> Self {
        ClockEngine {
            state: State::Unlocked,
            internal_fn: Fn32::new(0),
            lost_counter: 0,
            tv_clock_us: 0,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.state == State::Locked
    }

    pub fn internal_fn(&self) -> Fn32 {
        self.internal_fn
    }

    /// A clock sample arrived from the transceiver's control channel.
    /// Returns the resulting event and the number of frames until the
    /// periodic timer should next be armed.
    pub fn on_clock<F: FnMut(Fn32)>(&mut self, fn_new: Fn32, now_us: u64, mut tick: F) -> (ClockEvent, u32) {
        match self.state {
            State::Unlocked => {
                self.internal_fn = fn_new;
                tick(fn_new);
                self.tv_clock_us = now_us;
                self.lost_counter = 0;
                self.state = State::Locked;
                (ClockEvent::Locked, 1)
            }
            State::Locked => {
                self.lost_counter = 0;
                let delta = self.internal_fn.signed_delta_from(fn_new);
                if delta.unsigned_abs() > MAX_FN_SKEW {
                    self.internal_fn = fn_new;
                    tick(fn_new);
                    self.tv_clock_us = now_us;
                    return (ClockEvent::Locked, 1);
                }
                if delta < 0 {
                    return (ClockEvent::NoAction, (-delta) as u32 + 1);
                }
                while self.internal_fn != fn_new {
                    self.internal_fn = self.internal_fn.succ();
                    tick(self.internal_fn);
                }
                (ClockEvent::NoAction, 1)
            }
        }
    }

    /// The periodic frame timer fired. Returns the resulting event and the
    /// number of microseconds until the timer should next be armed.
    pub fn on_timer<F: FnMut(Fn32)>(&mut self, now_us: u64, mut tick: F) -> (ClockEvent, u64) {
        match self.state {
            State::Unlocked => (ClockEvent::NoAction, FRAME_DURATION_US),
            State::Locked => {
                self.lost_counter += 1;
                if self.lost_counter >= LOSS_THRESHOLD {
                    self.state = State::Unlocked;
                    return (ClockEvent::LossOfClock, FRAME_DURATION_US);
                }
                let elapsed = now_us as i64 - self.tv_clock_us as i64;
                if elapsed > FRAME_DURATION_US as i64 * MAX_FN_SKEW as i64 || elapsed < 0 {
                    self.state = State::Unlocked;
                    return (ClockEvent::SkewDetected, FRAME_DURATION_US);
                }
                let mut elapsed = elapsed;
                while elapsed > FRAME_DURATION_US as i64 / 2 {
                    self.tv_clock_us += FRAME_DURATION_US;
                    self.internal_fn = self.internal_fn.succ();
                    tick(self.internal_fn);
                    elapsed -= FRAME_DURATION_US as i64;
                }
                let rearm = FRAME_DURATION_US as i64 - elapsed;
                (ClockEvent::NoAction, rearm.max(0) as u64)
            }
        }
    }
}

impl Default for ClockEngine {
    fn default() -> Self {
        Self::new()
    }
}
