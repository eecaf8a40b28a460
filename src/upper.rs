//! Upper-layer primitive boundary (§6 "Upper-layer boundary", §6-ADD).

use crate::fn_time::Fn32;

/// Upward indications the scheduler emits. One method per primitive named
/// in §6; the scheduler never blocks on these, matching §5's "all outbound
/// writes ... are non-blocking fire-and-forget".
pub trait UpperLayer {
    /// `PH-DATA.ind(chan_nr, link_id, fn, L2[])`. An empty `l2` is a BFI /
    /// loss indication, not an error.
    fn ph_data_ind(&mut self, chan_nr: u8, link_id: u8, fn_: Fn32, l2: &[u8]);

    /// `TCH.ind(chan_nr, fn, payload[])`.
    fn tch_ind(&mut self, chan_nr: u8, fn_: Fn32, payload: &[u8]);

    /// `PH-RACH.ind(ra, acc_delay, fn)`.
    fn ph_rach_ind(&mut self, ra: u8, acc_delay: u8, fn_: Fn32);

    /// `PH-RTS.ind(chan_nr, link_id, fn)`.
    fn ph_rts_ind(&mut self, chan_nr: u8, link_id: u8, fn_: Fn32);

    /// `TCH-RTS.ind(chan_nr, fn)`.
    fn tch_rts_ind(&mut self, chan_nr: u8, fn_: Fn32);

    /// `MPH-TIME.ind(fn)`, emitted once per `tick`.
    fn mph_time_ind(&mut self, fn_: Fn32);
}
