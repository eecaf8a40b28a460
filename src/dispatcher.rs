//! Per-TRX dispatch: the timeslot state matrix and the descriptor-table
//! producers/consumers it drives (§4.1, §4.4, §4.5).
//!
//! A [`Dispatcher`] owns one TRX's configuration and its 8 timeslots. The
//! multi-TRX orchestration (`tick`) lives one layer up, in
//! [`crate::scheduler`].

use crate::burst::{compose_normal_burst, split_normal_burst};
use crate::chan::{Chan, CHAN_COUNT, CHAN_DESC};
use crate::codec::{ChannelCodec, DecodeOutcome};
use crate::config::{TrxConfig, PCHAN_TABLES};
use crate::error::SchedError;
use crate::fn_time::{Fn32, Tn};
use crate::logging::{log_error, log_fatal};
use crate::multiframe::{self, Pchan};
use crate::queue::{DlPrim, PrimKind, TsQueue};
use crate::sch::{build_sb_info, compose_sch_burst};
use crate::state::{ChanState, BURST_BUF_LEN};
use crate::upper::UpperLayer;

/// `RTS` upcall for one channel kind. Takes `&mut Dispatcher` rather than
/// owning any state itself, mirroring the source's function-pointer table.
pub type RtsFn = fn(&mut Dispatcher, Tn, Fn32, Chan, &mut dyn UpperLayer) -> Result<(), SchedError>;

/// Downlink burst producer. Returns `None` when this channel has nothing to
/// send this frame (the dispatcher may substitute a dummy burst on C0).
pub type DlFn =
    fn(&mut Dispatcher, Tn, Fn32, Chan, u8, &dyn ChannelCodec, &mut dyn UpperLayer) -> Option<[u8; 148]>;

/// Uplink burst consumer.
pub type UlFn = fn(
    &mut Dispatcher,
    Tn,
    Fn32,
    Chan,
    u8,
    &[i8; 148],
    i16,
    &dyn ChannelCodec,
    &mut dyn UpperLayer,
);

/// Which half of a channel's activation state `set_lchan` is changing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Dl,
    Ul,
}

/// Runtime state of one timeslot: its PCHAN, DL primitive queue, and the
/// per-channel state matrix row (§3 "Channel State").
struct TsState {
    pchan: Pchan,
    queue: TsQueue,
    chans: [ChanState; CHAN_COUNT],
}

impl TsState {
    fn new() -> Self {
        TsState {
            pchan: Pchan::None,
            queue: TsQueue::new(),
            chans: core::array::from_fn(|_| ChanState::new()),
        }
    }
}

/// Dispatch state for a single TRX: its configuration and 8 timeslots.
pub struct Dispatcher {
    pub config: TrxConfig,
    ts: [TsState; Tn::COUNT],
}

impl Dispatcher {
    pub fn new() -> Self {
        Dispatcher {
            config: TrxConfig::default(),
            ts: core::array::from_fn(|_| TsState::new()),
        }
    }

    /// `trx_sched_set_pchan` (§4.1, §9 REDESIGN FLAGS): set a timeslot's
    /// physical-channel configuration, walking a properly bounded table
    /// rather than the source's unbounded loop.
    pub fn set_pchan(&mut self, tn: Tn, pchan: Pchan) -> Result<(), SchedError> {
        if !self.config.tn_enabled(tn) {
            return Err(SchedError::TnDisabled);
        }
        if pchan != Pchan::None && !PCHAN_TABLES.iter().any(|&p| p == pchan) {
            return Err(SchedError::UnsupportedPchan);
        }
        let ts = &mut self.ts[tn.idx()];
        ts.pchan = pchan;
        ts.queue.flush();
        for cs in ts.chans.iter_mut() {
            cs.release();
            cs.dl_active = false;
            cs.ul_active = false;
        }
        Ok(())
    }

    /// `trx_sched_set_lchan`: (de)activate one logical channel, identified
    /// by `chan_nr`/`link_id` as on the wire. Clears the SACCH loss counter
    /// and releases the channel's buffers once both directions are idle.
    pub fn set_lchan(
        &mut self,
        chan_nr: u8,
        link_id: u8,
        direction: Direction,
        active: bool,
    ) -> Result<(), SchedError> {
        let tn = match Tn::new(chan_nr & 0x07) {
            Some(t) => t,
            None => unreachable!("chan_nr & 0x07 is always < 8"),
        };
        if !self.config.tn_enabled(tn) {
            return Err(SchedError::TnDisabled);
        }
        let row = CHAN_DESC
            .iter()
            .find(|d| d.chan_nr == (chan_nr & 0xf8) && d.link_id == link_id);
        let row = match row {
            Some(r) => r,
            None => return Err(SchedError::UnknownChannel),
        };
        let cs = &mut self.ts[tn.idx()].chans[row.chan.idx()];
        match direction {
            Direction::Dl => cs.dl_active = active,
            Direction::Ul => cs.ul_active = active,
        }
        cs.sacch_lost = 0;
        if !cs.dl_active && !cs.ul_active {
            cs.release();
        }
        Ok(())
    }

    /// `trx_sched_reset`: return every timeslot to its unconfigured state.
    pub fn reset(&mut self) {
        for ts in self.ts.iter_mut() {
            ts.pchan = Pchan::None;
            ts.queue.flush();
            for cs in ts.chans.iter_mut() {
                cs.release();
                cs.dl_active = false;
                cs.ul_active = false;
            }
        }
    }

    /// Queue a DL primitive for later service by `dequeue_prim` (§4.3).
    pub fn enqueue(&mut self, tn: Tn, prim: DlPrim) {
        self.ts[tn.idx()].queue.enqueue(prim);
    }

    /// `trx_sched_rts`: the RTS upcall for whichever channel the multiframe
    /// table says occupies this (tn, fn)'s first burst (§4.6 step 2a).
    pub fn rts(&mut self, tn: Tn, fn_: Fn32, upper: &mut dyn UpperLayer) -> Result<(), SchedError> {
        if !self.config.tn_enabled(tn) {
            return Err(SchedError::TnDisabled);
        }
        let pchan = self.ts[tn.idx()].pchan;
        let period = pchan.period();
        if period == 0 {
            return Ok(());
        }
        let row = multiframe::lookup(pchan, fn_.rem(period as u32) as usize)
            .ok_or(SchedError::UnsupportedPchan)?;
        if row.dl_bid != 0 {
            return Ok(());
        }
        let chan = row.dl_chan;
        let desc = chan.desc();
        let active = self.ts[tn.idx()].chans[chan.idx()].dl_active;
        if !desc.auto_active && !active {
            return Err(SchedError::ChannelNotActive);
        }
        match desc.rts {
            Some(f) => f(self, tn, fn_, chan, upper),
            None => Ok(()),
        }
    }

    /// `trx_sched_dl_burst`: produce this (tn, fn)'s downlink burst, or
    /// `None` if nothing is scheduled / the channel is inactive (§4.4).
    pub fn dl_burst(
        &mut self,
        tn: Tn,
        fn_: Fn32,
        codec: &dyn ChannelCodec,
        upper: &mut dyn UpperLayer,
    ) -> Option<[u8; 148]> {
        if !self.config.tn_enabled(tn) {
            return None;
        }
        let pchan = self.ts[tn.idx()].pchan;
        let period = pchan.period();
        if period == 0 {
            return None;
        }
        let row = multiframe::lookup(pchan, fn_.rem(period as u32) as usize)?;
        let chan = row.dl_chan;
        let bid = row.dl_bid;
        let desc = chan.desc();
        let active = self.ts[tn.idx()].chans[chan.idx()].dl_active;
        if !desc.auto_active && !active {
            return None;
        }
        match desc.dl {
            Some(f) => f(self, tn, fn_, chan, bid, codec, upper),
            None => None,
        }
    }

    /// `trx_sched_ul_burst`: hand this (tn, fn)'s received soft bits to
    /// whichever channel the multiframe table says owns them (§4.5).
    pub fn ul_burst(
        &mut self,
        tn: Tn,
        fn_: Fn32,
        bits: &[i8; 148],
        toa: i16,
        codec: &dyn ChannelCodec,
        upper: &mut dyn UpperLayer,
    ) {
        if !self.config.tn_enabled(tn) {
            return;
        }
        let pchan = self.ts[tn.idx()].pchan;
        let period = pchan.period();
        if period == 0 {
            return;
        }
        let row = match multiframe::lookup(pchan, fn_.rem(period as u32) as usize) {
            Some(r) => r,
            None => return,
        };
        let chan = row.ul_chan;
        let bid = row.ul_bid;
        let desc = chan.desc();
        let active = self.ts[tn.idx()].chans[chan.idx()].ul_active;
        if !desc.auto_active && !active {
            return;
        }
        if let Some(f) = desc.ul {
            f(self, tn, fn_, chan, bid, bits, toa, codec, upper);
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

// --- RTS upcalls -----------------------------------------------------

pub fn rts_data(
    _d: &mut Dispatcher,
    tn: Tn,
    fn_: Fn32,
    chan: Chan,
    upper: &mut dyn UpperLayer,
) -> Result<(), SchedError> {
    let desc = chan.desc();
    upper.ph_rts_ind(desc.chan_nr | tn.get(), desc.link_id, fn_);
    Ok(())
}

/// `rts_tch_fn`: reproduces the source's chan_nr/link_id swap verbatim —
/// the second primitive's `chan_nr` field is overwritten with `link_id`
/// instead of the real channel number. See DESIGN.md "Open Questions".
pub fn rts_tch(
    _d: &mut Dispatcher,
    tn: Tn,
    fn_: Fn32,
    chan: Chan,
    upper: &mut dyn UpperLayer,
) -> Result<(), SchedError> {
    let desc = chan.desc();
    let chan_nr = desc.chan_nr | tn.get();
    upper.tch_rts_ind(chan_nr, fn_);
    upper.ph_rts_ind(desc.link_id, desc.link_id, fn_);
    Ok(())
}

// --- DL producers ------------------------------------------------------

pub fn dl_idle(
    _d: &mut Dispatcher,
    _tn: Tn,
    _fn_: Fn32,
    _chan: Chan,
    _bid: u8,
    _codec: &dyn ChannelCodec,
    _upper: &mut dyn UpperLayer,
) -> Option<[u8; 148]> {
    None
}

pub fn dl_fcch(
    _d: &mut Dispatcher,
    _tn: Tn,
    _fn_: Fn32,
    _chan: Chan,
    _bid: u8,
    _codec: &dyn ChannelCodec,
    _upper: &mut dyn UpperLayer,
) -> Option<[u8; 148]> {
    Some(crate::burst::FCCH_BURST)
}

pub fn dl_sch(
    d: &mut Dispatcher,
    _tn: Tn,
    fn_: Fn32,
    _chan: Chan,
    _bid: u8,
    codec: &dyn ChannelCodec,
    _upper: &mut dyn UpperLayer,
) -> Option<[u8; 148]> {
    let sb_info = build_sb_info(fn_, d.config.bsic);
    let encoded = codec.encode_sch(&sb_info);
    Some(compose_sch_burst(&encoded))
}

/// Generic xCCH producer shared by BCCH, CCCH, SDCCH and SACCH (§4.4
/// "xCCH/SACCH"): dequeue a primitive at bid 0, encode it into the 464-bit
/// buffer, and emit one 116-bit slice of it per burst.
pub fn dl_xcch(
    d: &mut Dispatcher,
    tn: Tn,
    fn_: Fn32,
    chan: Chan,
    bid: u8,
    codec: &dyn ChannelCodec,
    upper: &mut dyn UpperLayer,
) -> Option<[u8; 148]> {
    let desc = chan.desc();
    let idx = chan.idx();
    let ts = &mut d.ts[tn.idx()];
    if bid == 0 {
        ts.chans[idx].ensure_dl_buf(464);
        match ts.queue.dequeue_prim(fn_, tn, desc) {
            Some(prim) if prim.payload.len() == 23 => {
                let mut l2 = [0u8; 23];
                l2.copy_from_slice(&prim.payload[..23]);
                let encoded = codec.encode_xcch(&l2);
                ts.chans[idx].dl_bursts.clear();
                ts.chans[idx].dl_bursts.extend_from_slice(&encoded).ok();
                ts.chans[idx].sacch_lost = 0;
            }
            Some(_) => {
                log_fatal("wrong L2 length for xCCH channel");
                ts.chans[idx].dl_bursts.clear();
            }
            None => {
                if chan.is_sacch() {
                    let cs = &mut ts.chans[idx];
                    cs.sacch_lost += 1;
                    if cs.sacch_lost > 1 {
                        upper.ph_data_ind(desc.chan_nr | tn.get(), desc.link_id, fn_, &[]);
                    }
                }
                ts.chans[idx].dl_bursts.clear();
            }
        }
    }
    let cs = &d.ts[tn.idx()].chans[idx];
    if cs.dl_bursts.len() < 464 {
        return None;
    }
    let off = bid as usize * 116;
    let lo = &cs.dl_bursts[off..off + 58];
    let hi = &cs.dl_bursts[off + 58..off + 116];
    Some(compose_normal_burst(lo, hi, d.config.tsc as usize))
}

pub fn dl_pdtch(
    d: &mut Dispatcher,
    tn: Tn,
    fn_: Fn32,
    chan: Chan,
    bid: u8,
    codec: &dyn ChannelCodec,
    _upper: &mut dyn UpperLayer,
) -> Option<[u8; 148]> {
    let desc = chan.desc();
    let idx = chan.idx();
    let ts = &mut d.ts[tn.idx()];
    if bid == 0 {
        ts.chans[idx].ensure_dl_buf(464);
        match ts.queue.dequeue_prim(fn_, tn, desc) {
            Some(prim) => match codec.encode_pdtch(&prim.payload) {
                Ok(encoded) => {
                    ts.chans[idx].dl_bursts.clear();
                    ts.chans[idx].dl_bursts.extend_from_slice(&encoded).ok();
                }
                Err(()) => {
                    log_error("PDTCH encoder rejected L2 length");
                    ts.chans[idx].dl_bursts.clear();
                }
            },
            None => ts.chans[idx].dl_bursts.clear(),
        }
    }
    let cs = &d.ts[tn.idx()].chans[idx];
    if cs.dl_bursts.len() < 464 {
        return None;
    }
    let off = bid as usize * 116;
    let lo = &cs.dl_bursts[off..off + 58];
    let hi = &cs.dl_bursts[off + 58..off + 116];
    Some(compose_normal_burst(lo, hi, d.config.tsc as usize))
}

/// TCH/F producer (§4.4 "TCH/F"): a 928-byte rolling buffer holding this
/// block and the one ahead of it, so FACCH-over-TCH primitives can preempt
/// traffic at the block boundary (`dequeue_prim` already prefers them).
pub fn dl_tchf(
    d: &mut Dispatcher,
    tn: Tn,
    fn_: Fn32,
    chan: Chan,
    bid: u8,
    codec: &dyn ChannelCodec,
    _upper: &mut dyn UpperLayer,
) -> Option<[u8; 148]> {
    let desc = chan.desc();
    let idx = chan.idx();
    let ts = &mut d.ts[tn.idx()];
    ts.chans[idx].ensure_dl_buf(BURST_BUF_LEN);
    if bid == 0 {
        ts.chans[idx].dl_bursts.copy_within(464..928, 0);
        for b in ts.chans[idx].dl_bursts[464..928].iter_mut() {
            *b = 0;
        }
        if let Some(prim) = ts.queue.dequeue_prim(fn_, tn, desc) {
            let encoded = match prim.kind {
                PrimKind::Tch => {
                    let mut l2 = [0u8; 33];
                    let n = prim.payload.len().min(33);
                    l2[..n].copy_from_slice(&prim.payload[..n]);
                    codec.encode_tch_fr(&l2)
                }
                PrimKind::Data => {
                    let mut l2 = [0u8; 23];
                    let n = prim.payload.len().min(23);
                    l2[..n].copy_from_slice(&prim.payload[..n]);
                    codec.encode_tch_fr(&l2)
                }
            };
            ts.chans[idx].dl_bursts[464..928].copy_from_slice(&encoded);
        }
    }
    let cs = &d.ts[tn.idx()].chans[idx];
    let off = bid as usize * 116;
    let lo = &cs.dl_bursts[off..off + 58];
    let hi = &cs.dl_bursts[off + 58..off + 116];
    Some(compose_normal_burst(lo, hi, d.config.tsc as usize))
}

/// TCH/H half-rate subchannel multiplexing is out of scope; this stub
/// never produces a burst.
pub fn dl_tchh(
    _d: &mut Dispatcher,
    _tn: Tn,
    _fn_: Fn32,
    _chan: Chan,
    _bid: u8,
    _codec: &dyn ChannelCodec,
    _upper: &mut dyn UpperLayer,
) -> Option<[u8; 148]> {
    None
}

// --- UL consumers --------------------------------------------------------

pub fn ul_rach(
    d: &mut Dispatcher,
    _tn: Tn,
    fn_: Fn32,
    _chan: Chan,
    _bid: u8,
    bits: &[i8; 148],
    toa: i16,
    codec: &dyn ChannelCodec,
    upper: &mut dyn UpperLayer,
) {
    let mut enc = [0i8; 36];
    enc.copy_from_slice(&bits[8..44]);
    if let Some(ra) = codec.decode_rach(&enc, d.config.bsic) {
        let acc_delay = toa.clamp(0, u8::MAX as i16) as u8;
        upper.ph_rach_ind(ra, acc_delay, fn_);
    }
}

pub fn ul_xcch(
    d: &mut Dispatcher,
    tn: Tn,
    fn_: Fn32,
    chan: Chan,
    bid: u8,
    bits: &[i8; 148],
    _toa: i16,
    codec: &dyn ChannelCodec,
    upper: &mut dyn UpperLayer,
) {
    let desc = chan.desc();
    let idx = chan.idx();
    let ts = &mut d.ts[tn.idx()];
    ts.chans[idx].ensure_ul_buf(464);
    let (lo, hi) = split_normal_burst(bits);
    let off = bid as usize * 116;
    {
        let buf = &mut ts.chans[idx].ul_bursts;
        buf[off..off + 58].copy_from_slice(&lo);
        buf[off + 58..off + 116].copy_from_slice(&hi);
    }
    if bid != 3 {
        return;
    }
    let mut window = [0i8; 464];
    window.copy_from_slice(&ts.chans[idx].ul_bursts[..464]);
    let mut out = [0u8; 23];
    match codec.decode_xcch(&window, &mut out) {
        DecodeOutcome::Ok(n) => {
            ts.chans[idx].sacch_lost = 0;
            upper.ph_data_ind(desc.chan_nr | tn.get(), desc.link_id, fn_, &out[..n]);
        }
        DecodeOutcome::BadFrame => {
            if chan.is_sacch() {
                let cs = &mut ts.chans[idx];
                cs.sacch_lost += 1;
                if cs.sacch_lost > 1 {
                    upper.ph_data_ind(desc.chan_nr | tn.get(), desc.link_id, fn_, &[]);
                }
            } else {
                log_error("xCCH decode failed");
            }
        }
    }
}

pub fn ul_pdtch(
    d: &mut Dispatcher,
    tn: Tn,
    fn_: Fn32,
    chan: Chan,
    bid: u8,
    bits: &[i8; 148],
    _toa: i16,
    codec: &dyn ChannelCodec,
    upper: &mut dyn UpperLayer,
) {
    let desc = chan.desc();
    let idx = chan.idx();
    let ts = &mut d.ts[tn.idx()];
    ts.chans[idx].ensure_ul_buf(464);
    let (lo, hi) = split_normal_burst(bits);
    let off = bid as usize * 116;
    {
        let buf = &mut ts.chans[idx].ul_bursts;
        buf[off..off + 58].copy_from_slice(&lo);
        buf[off + 58..off + 116].copy_from_slice(&hi);
    }
    if bid != 3 {
        return;
    }
    let mut window = [0i8; 464];
    window.copy_from_slice(&ts.chans[idx].ul_bursts[..464]);
    let mut out = [0u8; 54];
    match codec.decode_pdtch(&window, &mut out) {
        Ok(n) => upper.ph_data_ind(desc.chan_nr | tn.get(), desc.link_id, fn_, &out[..n]),
        Err(()) => log_error("PDTCH decode failed"),
    }
}

/// TCH/F consumer: mirrors [`dl_tchf`]'s 928-byte rolling window, decoding
/// the full two-block window at the block boundary.
pub fn ul_tchf(
    d: &mut Dispatcher,
    tn: Tn,
    fn_: Fn32,
    chan: Chan,
    bid: u8,
    bits: &[i8; 148],
    _toa: i16,
    codec: &dyn ChannelCodec,
    upper: &mut dyn UpperLayer,
) {
    let desc = chan.desc();
    let idx = chan.idx();
    let ts = &mut d.ts[tn.idx()];
    ts.chans[idx].ensure_ul_buf(BURST_BUF_LEN);
    let (lo, hi) = split_normal_burst(bits);
    let off = 464 + bid as usize * 116;
    {
        let buf = &mut ts.chans[idx].ul_bursts;
        buf[off..off + 58].copy_from_slice(&lo);
        buf[off + 58..off + 116].copy_from_slice(&hi);
    }
    if bid != 3 {
        return;
    }
    let mut window = [0i8; 928];
    window.copy_from_slice(&ts.chans[idx].ul_bursts[..928]);
    let mut out = [0u8; 33];
    let rc = codec.decode_tch_fr(&window, &mut out);
    match rc {
        33 => upper.tch_ind(desc.chan_nr | tn.get(), fn_, &out[..33]),
        23 => upper.ph_data_ind(desc.chan_nr | tn.get(), 0x40, fn_, &out[..23]),
        _ => upper.tch_ind(desc.chan_nr | tn.get(), fn_, &[]),
    }
    let buf = &mut ts.chans[idx].ul_bursts;
    buf.copy_within(464..928, 0);
    for b in buf[464..928].iter_mut() {
        *b = 0;
    }
}

/// TCH/H half-rate subchannel multiplexing is out of scope.
pub fn ul_tchh(
    _d: &mut Dispatcher,
    _tn: Tn,
    _fn_: Fn32,
    _chan: Chan,
    _bid: u8,
    _bits: &[i8; 148],
    _toa: i16,
    _codec: &dyn ChannelCodec,
    _upper: &mut dyn UpperLayer,
) {
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeCodec;
    impl ChannelCodec for FakeCodec {
        fn encode_sch(&self, _sb_info: &[u8; 4]) -> [u8; 78] {
            [1u8; 78]
        }
        fn encode_xcch(&self, l2: &[u8; 23]) -> [u8; 464] {
            let mut out = [0u8; 464];
            for (i, b) in l2.iter().enumerate() {
                out[i] = *b;
            }
            out
        }
        fn decode_xcch(&self, bits: &[i8; 464], out: &mut [u8; 23]) -> DecodeOutcome {
            for (i, o) in out.iter_mut().enumerate() {
                *o = bits[i] as u8;
            }
            DecodeOutcome::Ok(23)
        }
        fn encode_pdtch(&self, l2: &[u8]) -> Result<[u8; 464], ()> {
            let mut out = [0u8; 464];
            let n = l2.len().min(464);
            out[..n].copy_from_slice(&l2[..n]);
            Ok(out)
        }
        fn decode_pdtch(&self, bits: &[i8; 464], out: &mut [u8; 54]) -> Result<usize, ()> {
            for (i, o) in out.iter_mut().enumerate() {
                *o = bits[i] as u8;
            }
            Ok(54)
        }
        fn encode_tch_fr(&self, l2: &[u8]) -> [u8; 464] {
            let mut out = [0u8; 464];
            let n = l2.len().min(464);
            out[..n].copy_from_slice(&l2[..n]);
            out
        }
        fn decode_tch_fr(&self, _bits: &[i8; 928], _out: &mut [u8; 33]) -> usize {
            33
        }
        fn decode_rach(&self, _bits: &[i8; 36], _bsic: u8) -> Option<u8> {
            Some(5)
        }
    }

    struct RecordingUpper {
        rts_count: u32,
        data_ind_count: u32,
    }
    impl RecordingUpper {
        fn new() -> Self {
            RecordingUpper {
                rts_count: 0,
                data_ind_count: 0,
            }
        }
    }
    impl UpperLayer for RecordingUpper {
        fn ph_data_ind(&mut self, _chan_nr: u8, _link_id: u8, _fn_: Fn32, _l2: &[u8]) {
            self.data_ind_count += 1;
        }
        fn tch_ind(&mut self, _chan_nr: u8, _fn_: Fn32, _payload: &[u8]) {}
        fn ph_rach_ind(&mut self, _ra: u8, _acc_delay: u8, _fn_: Fn32) {}
        fn ph_rts_ind(&mut self, _chan_nr: u8, _link_id: u8, _fn_: Fn32) {
            self.rts_count += 1;
        }
        fn tch_rts_ind(&mut self, _chan_nr: u8, _fn_: Fn32) {}
        fn mph_time_ind(&mut self, _fn_: Fn32) {}
    }

    fn enabled_dispatcher() -> Dispatcher {
        let mut d = Dispatcher::new();
        d.config.poweron = true;
        d.config.slotmask = 0xff;
        d
    }

    #[test]
    fn set_pchan_rejects_unconfigured_tn() {
        let mut d = Dispatcher::new();
        let tn = Tn::new(0).unwrap();
        assert_eq!(d.set_pchan(tn, Pchan::Ccch), Err(SchedError::TnDisabled));
    }

    #[test]
    fn fcch_and_sch_are_always_on_at_fn0_and_1() {
        let mut d = enabled_dispatcher();
        let tn = Tn::new(0).unwrap();
        d.set_pchan(tn, Pchan::Ccch).unwrap();
        let codec = FakeCodec;
        let mut upper = RecordingUpper::new();
        let fcch = d.dl_burst(tn, Fn32::new(0), &codec, &mut upper);
        assert_eq!(fcch, Some(crate::burst::FCCH_BURST));
        let sch = d.dl_burst(tn, Fn32::new(1), &codec, &mut upper);
        assert!(sch.is_some());
    }

    #[test]
    fn rts_on_ccch_fires_rts_ind() {
        let mut d = enabled_dispatcher();
        let tn = Tn::new(0).unwrap();
        d.set_pchan(tn, Pchan::Ccch).unwrap();
        let mut upper = RecordingUpper::new();
        // fn 2 is the first BCCH block's bid 0 on the CCCH multiframe.
        d.rts(tn, Fn32::new(2), &mut upper).unwrap();
        assert_eq!(upper.rts_count, 1);
    }

    #[test]
    fn sacch_miss_emits_bfi_after_two_losses() {
        let mut d = enabled_dispatcher();
        let tn = Tn::new(0).unwrap();
        d.set_pchan(tn, Pchan::TchF).unwrap();
        d.set_lchan(0x08, 0x40, Direction::Dl, true).unwrap();
        let codec = FakeCodec;
        let mut upper = RecordingUpper::new();
        // Drive every fn of one full TCH/F multiframe period twice; with no
        // primitives ever queued, every SACCH block is a miss.
        let mut misses_seen_bfi = 0;
        for rep in 0..2u32 {
            for i in 0..104u32 {
                let fn_ = Fn32::new(rep * 104 + i);
                let before = upper.data_ind_count;
                d.dl_burst(tn, fn_, &codec, &mut upper);
                if upper.data_ind_count > before {
                    misses_seen_bfi += 1;
                }
            }
        }
        assert!(misses_seen_bfi >= 1);
    }

    #[test]
    fn unknown_lchan_is_rejected() {
        let mut d = enabled_dispatcher();
        d.set_pchan(Tn::new(0).unwrap(), Pchan::Ccch).unwrap();
        // 0x98 matches no row's chan_nr, unlike 0x00 which collides with IDLE.
        let err = d.set_lchan(0x98, 0x00, Direction::Dl, true);
        assert_eq!(err, Err(SchedError::UnknownChannel));
    }
}
