//! Lower-layer radio-frame scheduler for a GSM BTS TRX stack.
//!
//! Supports `no_std`. This crate owns the per-FN dispatch of burst
//! producers/consumers across a multiframe-structured timeslot, the
//! diagonal interleaving windows for SACCH/xCCH/PDTCH/TCH, the clock
//! recovery state machine driving the tick loop, and the upward/downward
//! primitive interfaces to the layers above and below it. Channel coding
//! (convolutional coding, interleaving bit layout, CRC) is out of scope;
//! see [`codec::ChannelCodec`].
#![no_std]

pub mod fn_time;
pub mod chan;
pub mod multiframe;
pub mod state;
pub mod queue;
pub mod burst;
pub mod sch;
pub mod codec;
pub mod upper;
pub mod transceiver;
pub mod error;
pub mod logging;
pub mod config;
pub mod dispatcher;
pub mod clock;
pub mod scheduler;

pub use chan::{Chan, ChanDesc, CHAN_COUNT, CHAN_DESC};
pub use clock::{ClockEngine, ClockEvent};
pub use codec::{ChannelCodec, DecodeOutcome};
pub use config::TrxConfig;
pub use dispatcher::Dispatcher;
pub use error::SchedError;
pub use fn_time::{Fn32, GsmTime, Tn, HYPERFRAME};
pub use multiframe::Pchan;
pub use scheduler::Scheduler;
pub use transceiver::TransceiverIo;
pub use upper::UpperLayer;
