//! Transceiver I/O boundary (§6 "Transceiver boundary", §6-ADD).

use crate::fn_time::{Fn32, Tn};

/// The downlink/outbound half of the transceiver boundary. Inbound calls
/// (`clock`, `rx_burst`) are not trait methods here: they are calls *into*
/// the scheduler (`ClockEngine::on_clock`, `Dispatcher::ul_burst`).
pub trait TransceiverIo {
    /// `tx_data(tn, fn, gain, 148 hard_bits)`. `gain` is an attenuation
    /// value (0 = full power, 128 = the dummy-burst attenuation used when
    /// the dispatcher substitutes a filler burst on C0).
    fn tx_data(&mut self, tn: Tn, fn_: Fn32, gain: u8, bits: &[u8; 148]);

    /// Flush any buffered outbound state, called on transceiver loss
    /// (§5 "Cancellation/timeout").
    fn flush(&mut self);

    /// Request re-provisioning of the transceiver after a loss recovery.
    fn request_provision(&mut self);
}
