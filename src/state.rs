//! Per-channel runtime state (§3 "Channel State").

/// Capacity of the diagonal-interleaver buffer: 2 x 464 bytes, large enough
/// for TCH/F (the biggest consumer). xCCH channels only use the first 464
/// bytes of this; the rest sits unused rather than being separately sized,
/// trading memory for a single, allocator-free buffer shape.
pub const BURST_BUF_LEN: usize = 928;

/// Runtime state of one (timeslot, channel) cell of the state matrix.
///
/// Buffers are conceptually "lazily allocated on first use, released when
/// the channel goes idle" (§3); since this crate has no allocator, that
/// lifecycle is modelled as zeroing rather than deallocation — see
/// [`ChanState::release`].
pub struct ChanState {
    pub dl_active: bool,
    pub ul_active: bool,
    pub dl_bursts: heapless::Vec<u8, BURST_BUF_LEN>,
    pub ul_bursts: heapless::Vec<i8, BURST_BUF_LEN>,
    pub ul_mask: u8,
    pub ul_first_fn: Option<crate::fn_time::Fn32>,
    pub sacch_lost: u32,
}

impl ChanState {
    pub const fn new() -> Self {
        ChanState {
            dl_active: false,
            ul_active: false,
            dl_bursts: heapless::Vec::new(),
            ul_bursts: heapless::Vec::new(),
            ul_mask: 0,
            ul_first_fn: None,
            sacch_lost: 0,
        }
    }

    /// Reclaim this cell's buffers on `trx_sched_reset` or on deactivation
    /// that transitions through reset (§3 "Lifecycles").
    pub fn release(&mut self) {
        self.dl_bursts.clear();
        self.ul_bursts.clear();
        self.ul_mask = 0;
        self.ul_first_fn = None;
        self.sacch_lost = 0;
    }

    /// Ensure the DL buffer is present and has `len` bytes of zeroed space,
    /// standing in for "allocated on first use".
    pub fn ensure_dl_buf(&mut self, len: usize) {
        if self.dl_bursts.is_empty() {
            self.dl_bursts.resize(len, 0).ok();
        }
    }

    pub fn ensure_ul_buf(&mut self, len: usize) {
        if self.ul_bursts.is_empty() {
            self.ul_bursts.resize(len, 0).ok();
        }
    }
}

impl Default for ChanState {
    fn default() -> Self {
        Self::new()
    }
}
