//! Per-TRX configuration (§6 "Configuration").

/// Recognised per-TRX options (§6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrxConfig {
    /// Scheduler is skipped entirely for this TRX when false.
    pub poweron: bool,
    /// Bitmask of enabled timeslots, bit `n` = TN `n`.
    pub slotmask: u8,
    /// Training-sequence code, 0..=7.
    pub tsc: u8,
    /// Frame lead the dispatcher gives the transceiver, in frames.
    pub clock_advance: u32,
    /// Frame lead for the RTS upcall ahead of the DL burst, in frames.
    pub rts_advance: u32,
    /// Base-station identity code, used by the SCH encoder.
    pub bsic: u8,
}

impl Default for TrxConfig {
    fn default() -> Self {
        TrxConfig {
            poweron: false,
            slotmask: 0,
            tsc: 0,
            clock_advance: 10,
            rts_advance: 5,
            bsic: 0,
        }
    }
}

impl TrxConfig {
    pub fn tn_enabled(&self, tn: crate::fn_time::Tn) -> bool {
        self.slotmask & tn.mask_bit() != 0
    }
}

/// The table `trx_sched_set_pchan` walks to find a TS's multiframe. The
/// source's loop condition is a truthy constant (`ARRAY_SIZE(...)` instead
/// of `i < ARRAY_SIZE(...)`), so an unsupported PCHAN walks off the end of
/// the array; every PCHAN actually in use always matched, so the bug never
/// fired in practice, but the port gives it a real bound regardless (§9
/// REDESIGN FLAGS, mandatory).
pub const PCHAN_TABLES: [crate::multiframe::Pchan; 6] = [
    crate::multiframe::Pchan::Ccch,
    crate::multiframe::Pchan::CcchSdcch4,
    crate::multiframe::Pchan::Sdcch8Sacch8c,
    crate::multiframe::Pchan::TchF,
    crate::multiframe::Pchan::TchH,
    crate::multiframe::Pchan::Pdch,
];
