//! Per-timeslot downlink primitive queue and `dequeue_prim` (§4.3).

use crate::chan::ChanDesc;
use crate::fn_time::{Fn32, Tn};
use crate::logging::log_error;

/// How far in the past (in frames) a primitive may sit before it is
/// considered stale and discarded on the next dequeue scan.
pub const STALE_WINDOW: u32 = 20;

/// Capacity of a single timeslot's primitive queue. The source's `msgb`
/// queue is unbounded; see DESIGN.md for why this port bounds it.
pub const QUEUE_CAPACITY: usize = 16;

/// Maximum L2 payload a DL primitive carries: 33 bytes for a TCH/F speech
/// or data frame, 23 for everything else.
pub const MAX_L2_LEN: usize = 33;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimKind {
    /// `PH-DATA.req`: xCCH/PDTCH data, or FACCH-over-TCH when queued
    /// against a TCH/F channel.
    Data,
    /// `TCH.req`: speech or data traffic frame.
    Tch,
}

/// A downlink primitive waiting to be served at its `target_fn`.
#[derive(Debug, Clone)]
pub struct DlPrim {
    pub target_fn: Fn32,
    pub chan_nr: u8,
    pub link_id: u8,
    pub kind: PrimKind,
    pub payload: heapless::Vec<u8, MAX_L2_LEN>,
}

/// The FIFO of DL primitives for one timeslot. Ordering within the queue is
/// enqueue order; service order is filtered by FN match, not by position
/// (§9 "Primitive queue").
#[derive(Default)]
pub struct TsQueue {
    prims: heapless::Deque<DlPrim, QUEUE_CAPACITY>,
}

impl TsQueue {
    pub const fn new() -> Self {
        TsQueue {
            prims: heapless::Deque::new(),
        }
    }

    /// Enqueue a primitive. A full queue drops the newest arrival and logs
    /// at ERROR rather than growing without bound.
    pub fn enqueue(&mut self, prim: DlPrim) {
        if self.prims.push_back(prim).is_err() {
            log_error("DL primitive queue full, dropping newest");
        }
    }

    /// Flush all queued primitives, e.g. on `trx_sched_reset` or transceiver
    /// loss (§5 "Cancellation/timeout").
    pub fn flush(&mut self) {
        self.prims.clear();
    }

    /// Implements §4.3 steps 1-4 for the given `(tn, fn, descriptor)`.
    pub fn dequeue_prim(&mut self, fn_: Fn32, tn: Tn, desc: &ChanDesc) -> Option<DlPrim> {
        // Step 1: partition into stale (drop now), future (keep), and
        // candidates (matching fn).
        let mut candidates: heapless::Vec<DlPrim, QUEUE_CAPACITY> = heapless::Vec::new();
        let mut kept: heapless::Deque<DlPrim, QUEUE_CAPACITY> = heapless::Deque::new();

        while let Some(prim) = self.prims.pop_front() {
            let d = fn_.distance_to(prim.target_fn);
            if d > STALE_WINDOW {
                log_error("stale DL primitive discarded");
                continue;
            }
            if d > 0 {
                kept.push_back(prim).ok();
                continue;
            }
            candidates.push(prim).ok();
        }
        self.prims = kept;

        // Step 2: prefer the non-traffic (FACCH) candidate over a TCH one.
        let winner = if candidates.len() > 1 {
            let facch_idx = candidates.iter().position(|p| p.kind != PrimKind::Tch);
            match facch_idx {
                Some(i) => candidates.swap_remove(i),
                None => candidates.swap_remove(0),
            }
        } else {
            candidates.pop()?
        };

        // Step 3: validate chan_nr / SACCH link-id bit.
        let expected_chan_nr = desc.chan_nr | tn.get();
        let sacch_ok = (winner.link_id & 0x40) == (desc.link_id & 0x40);
        if winner.chan_nr != expected_chan_nr || !sacch_ok {
            log_error("DL primitive failed chan_nr/link_id validation");
            return None;
        }

        Some(winner)
    }
}
