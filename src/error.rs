//! Error taxonomy (§7) for failures that escape a single function call.
//!
//! None of these escape [`crate::scheduler::Scheduler::tick`] itself — every
//! site that can produce one logs and absorbs it, per §7's closing rule
//! ("No error escapes the tick boundary").

use thiserror::Error;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedError {
    #[error("timeslot is disabled in the TRX slot-mask")]
    TnDisabled,
    #[error("no multiframe table matches this PCHAN")]
    UnsupportedPchan,
    #[error("channel is not active and not auto-active")]
    ChannelNotActive,
    #[error("chan_nr/link_id does not match any channel descriptor row")]
    UnknownChannel,
}
