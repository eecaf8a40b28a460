//! `TransceiverIo` stand-in that just counts what it was handed.

use gsm_trx_sched::{Fn32, Tn, TransceiverIo};

pub struct RecordingTio {
    pub tx_count: u32,
    pub flush_count: u32,
    pub provision_count: u32,
}

impl RecordingTio {
    pub fn new() -> Self {
        RecordingTio {
            tx_count: 0,
            flush_count: 0,
            provision_count: 0,
        }
    }
}

impl TransceiverIo for RecordingTio {
    fn tx_data(&mut self, _tn: Tn, _fn_: Fn32, _gain: u8, _bits: &[u8; 148]) {
        self.tx_count += 1;
    }
    fn flush(&mut self) {
        self.flush_count += 1;
    }
    fn request_provision(&mut self) {
        self.provision_count += 1;
    }
}
