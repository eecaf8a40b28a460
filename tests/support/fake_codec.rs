//! Deterministic `ChannelCodec` stand-in shared by the integration tests.

use gsm_trx_sched::{ChannelCodec, DecodeOutcome};

pub struct FakeCodec;

impl ChannelCodec for FakeCodec {
    fn encode_sch(&self, sb_info: &[u8; 4]) -> [u8; 78] {
        let mut out = [0u8; 78];
        out[0] = sb_info[0];
        out[1] = sb_info[1];
        out[2] = sb_info[2];
        out[3] = sb_info[3];
        out
    }

    fn encode_xcch(&self, l2: &[u8; 23]) -> [u8; 464] {
        let mut out = [0u8; 464];
        for (i, b) in l2.iter().enumerate() {
            out[i] = *b;
        }
        out
    }

    fn decode_xcch(&self, bits: &[i8; 464], out: &mut [u8; 23]) -> DecodeOutcome {
        if bits[0] < 0 {
            return DecodeOutcome::BadFrame;
        }
        for (i, b) in out.iter_mut().enumerate() {
            *b = bits[i] as u8;
        }
        DecodeOutcome::Ok(23)
    }

    fn encode_pdtch(&self, l2: &[u8]) -> Result<[u8; 464], ()> {
        if l2.len() > 464 {
            return Err(());
        }
        let mut out = [0u8; 464];
        out[..l2.len()].copy_from_slice(l2);
        Ok(out)
    }

    fn decode_pdtch(&self, bits: &[i8; 464], out: &mut [u8; 54]) -> Result<usize, ()> {
        for (i, b) in out.iter_mut().enumerate() {
            *b = bits[i] as u8;
        }
        Ok(54)
    }

    fn encode_tch_fr(&self, l2: &[u8]) -> [u8; 464] {
        let mut out = [0u8; 464];
        let n = l2.len().min(464);
        out[..n].copy_from_slice(&l2[..n]);
        out
    }

    fn decode_tch_fr(&self, bits: &[i8; 928], out: &mut [u8; 33]) -> usize {
        // First byte of the window encodes which length the test fixture
        // wants decoded back out: 33 (speech), 23 (FACCH), anything else (BFI).
        let rc = bits[0] as usize;
        for (i, b) in out.iter_mut().enumerate() {
            *b = bits[i] as u8;
        }
        rc
    }

    fn decode_rach(&self, _bits: &[i8; 36], _bsic: u8) -> Option<u8> {
        Some(0)
    }
}
