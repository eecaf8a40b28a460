//! Channel type enumeration and the static channel descriptor table.

use crate::dispatcher::{DlFn, RtsFn, UlFn};
use crate::dispatcher::{dl_fcch, dl_idle, dl_pdtch, dl_sch, dl_tchf, dl_tchh, dl_xcch};
use crate::dispatcher::{rts_data, rts_tch};
use crate::dispatcher::{ul_pdtch, ul_rach, ul_tchf, ul_tchh, ul_xcch};

/// Every logical channel kind a timeslot can carry, in the same order as the
/// source's `trx_chan_desc` table — the discriminant doubles as the index
/// into [`CHAN_DESC`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Chan {
    Idle = 0,
    Fcch,
    Sch,
    Bcch,
    Rach,
    Ccch,
    TchF,
    TchH0,
    TchH1,
    Sdcch4_0,
    Sdcch4_1,
    Sdcch4_2,
    Sdcch4_3,
    Sdcch8_0,
    Sdcch8_1,
    Sdcch8_2,
    Sdcch8_3,
    Sdcch8_4,
    Sdcch8_5,
    Sdcch8_6,
    Sdcch8_7,
    SacchTf,
    SacchTh0,
    SacchTh1,
    Sacch4_0,
    Sacch4_1,
    Sacch4_2,
    Sacch4_3,
    Sacch8_0,
    Sacch8_1,
    Sacch8_2,
    Sacch8_3,
    Sacch8_4,
    Sacch8_5,
    Sacch8_6,
    Sacch8_7,
    Pdtch,
    Ptcch,
}

/// Number of [`Chan`] variants; also the length of [`CHAN_DESC`].
pub const CHAN_COUNT: usize = 38;

impl Chan {
    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn desc(self) -> &'static ChanDesc {
        &CHAN_DESC[self.idx()]
    }

    /// Whether this channel carries the SACCH link-id bit (0x40).
    pub fn is_sacch(self) -> bool {
        self.desc().link_id & 0x40 != 0
    }
}

/// A row of the static channel descriptor table (§4.1).
///
/// `rts`/`dl`/`ul` are `None` exactly where the source's function-pointer
/// table carries a `NULL` entry: no upcall, no transmission, no indication.
pub struct ChanDesc {
    pub chan: Chan,
    pub chan_nr: u8,
    pub link_id: u8,
    pub name: &'static str,
    pub rts: Option<RtsFn>,
    pub dl: Option<DlFn>,
    pub ul: Option<UlFn>,
    pub auto_active: bool,
}

macro_rules! row {
    ($chan:ident, $chan_nr:expr, $link_id:expr, $name:expr, $rts:expr, $dl:expr, $ul:expr, $auto:expr) => {
        ChanDesc {
            chan: Chan::$chan,
            chan_nr: $chan_nr,
            link_id: $link_id,
            name: $name,
            rts: $rts,
            dl: $dl,
            ul: $ul,
            auto_active: $auto,
        }
    };
}

/// The static channel descriptor table, transcribed row-for-row from
/// `trx_chan_desc[]`.
pub static CHAN_DESC: [ChanDesc; CHAN_COUNT] = [
    row!(Idle, 0, 0, "IDLE", None, Some(dl_idle), None, true),
    row!(Fcch, 0, 0, "FCCH", None, Some(dl_fcch), None, true),
    row!(Sch, 0, 0, "SCH", None, Some(dl_sch), None, true),
    row!(Bcch, 0x80, 0x00, "BCCH", Some(rts_data), Some(dl_xcch), None, true),
    row!(Rach, 0x88, 0x00, "RACH", None, None, Some(ul_rach), true),
    row!(Ccch, 0x90, 0x00, "CCCH", Some(rts_data), Some(dl_xcch), None, true),
    row!(TchF, 0x08, 0x00, "TCH/F", Some(rts_tch), Some(dl_tchf), Some(ul_tchf), false),
    row!(TchH0, 0x10, 0x00, "TCH/H(0)", Some(rts_tch), Some(dl_tchh), Some(ul_tchh), false),
    row!(TchH1, 0x18, 0x00, "TCH/H(1)", Some(rts_tch), Some(dl_tchh), Some(ul_tchh), false),
    row!(Sdcch4_0, 0x20, 0x00, "SDCCH/4(0)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sdcch4_1, 0x28, 0x00, "SDCCH/4(1)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sdcch4_2, 0x30, 0x00, "SDCCH/4(2)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sdcch4_3, 0x38, 0x00, "SDCCH/4(3)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sdcch8_0, 0x40, 0x00, "SDCCH/8(0)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sdcch8_1, 0x48, 0x00, "SDCCH/8(1)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sdcch8_2, 0x50, 0x00, "SDCCH/8(2)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sdcch8_3, 0x58, 0x00, "SDCCH/8(3)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sdcch8_4, 0x60, 0x00, "SDCCH/8(4)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sdcch8_5, 0x68, 0x00, "SDCCH/8(5)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sdcch8_6, 0x70, 0x00, "SDCCH/8(6)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sdcch8_7, 0x78, 0x00, "SDCCH/8(7)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(SacchTf, 0x08, 0x40, "SACCH/TF", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(SacchTh0, 0x10, 0x40, "SACCH/TH(0)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(SacchTh1, 0x18, 0x40, "SACCH/TH(1)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sacch4_0, 0x20, 0x40, "SACCH/4(0)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sacch4_1, 0x28, 0x40, "SACCH/4(1)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sacch4_2, 0x30, 0x40, "SACCH/4(2)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sacch4_3, 0x38, 0x40, "SACCH/4(3)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sacch8_0, 0x40, 0x40, "SACCH/8(0)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sacch8_1, 0x48, 0x40, "SACCH/8(1)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sacch8_2, 0x50, 0x40, "SACCH/8(2)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sacch8_3, 0x58, 0x40, "SACCH/8(3)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sacch8_4, 0x60, 0x40, "SACCH/8(4)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sacch8_5, 0x68, 0x40, "SACCH/8(5)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Sacch8_6, 0x70, 0x40, "SACCH/8(6)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    // NOTE: chan_nr is 0x68, not 0x78 — a duplicate of SACCH8_5's row.
    // Kept verbatim; see DESIGN.md "Open Questions".
    row!(Sacch8_7, 0x68, 0x40, "SACCH/8(7)", Some(rts_data), Some(dl_xcch), Some(ul_xcch), false),
    row!(Pdtch, 0x08, 0x00, "PDTCH", Some(rts_data), Some(dl_pdtch), Some(ul_pdtch), false),
    row!(Ptcch, 0x08, 0x00, "PTCCH", Some(rts_data), Some(dl_pdtch), Some(ul_pdtch), false),
];
