//! The channel-coding boundary (§6-ADD).
//!
//! Convolutional coding, interleaving and CRC checking are a Non-goal of
//! this crate (§1); `ChannelCodec` is the seam this scheduler calls into
//! and nothing more. Production callers supply a real GSM channel coder;
//! tests use a deterministic fake (`tests/support/fake_codec.rs`).

/// Decode outcome for a block that was accumulated from 4 bursts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// Decode succeeded; `len` valid bytes are in the caller-supplied
    /// output buffer.
    Ok(usize),
    /// Decode failed (bad CRC / Viterbi distance too large).
    BadFrame,
}

pub trait ChannelCodec {
    /// Encode the 4-byte SB info block into 78 coded bits (§4.4 "SCH").
    fn encode_sch(&self, sb_info: &[u8; 4]) -> [u8; 78];

    /// Encode a 23-byte xCCH/SACCH L2 frame into the 464-bit interleaver
    /// buffer (4 bursts x 116 bits).
    fn encode_xcch(&self, l2: &[u8; 23]) -> [u8; 464];

    /// Decode 464 accumulated soft bits back into a 23-byte L2 frame.
    fn decode_xcch(&self, bits: &[i8; 464], out: &mut [u8; 23]) -> DecodeOutcome;

    /// Encode a variable-length PDTCH L2 frame. Returns an error for an
    /// L2 length the packet coder does not accept.
    fn encode_pdtch(&self, l2: &[u8]) -> Result<[u8; 464], ()>;

    /// Decode accumulated PDTCH soft bits; `rc` is the decoded length.
    fn decode_pdtch(&self, bits: &[i8; 464], out: &mut [u8; 54]) -> Result<usize, ()>;

    /// Encode one TCH/FR frame (33-byte traffic or 23-byte stolen FACCH)
    /// into this block's 464-bit half of the diagonal interleaver; the
    /// other half carries the previous block's contribution.
    fn encode_tch_fr(&self, l2: &[u8]) -> [u8; 464];

    /// Decode a full 8-burst, 928-bit TCH/FR window. `rc == 33` is a speech
    /// frame, `rc == 23` is a stolen FACCH frame, anything else is BFI.
    fn decode_tch_fr(&self, bits: &[i8; 928], out: &mut [u8; 33]) -> usize;

    /// Decode a RACH burst's 36 encoded bits against the configured BSIC.
    fn decode_rach(&self, bits: &[i8; 36], bsic: u8) -> Option<u8>;
}
