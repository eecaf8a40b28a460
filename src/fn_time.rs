//! Frame-number arithmetic over the GSM hyperframe.

/// Length of a GSM hyperframe: 26 * 51 * 2048.
pub const HYPERFRAME: u32 = 2_715_648;

/// A frame number, always held reduced modulo [`HYPERFRAME`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fn32(u32);

impl Fn32 {
    pub fn new(raw: u32) -> Self {
        Fn32(raw % HYPERFRAME)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// `(self + delta) mod HYPERFRAME`.
    pub fn add(self, delta: u32) -> Self {
        let delta = delta % HYPERFRAME;
        Fn32((self.0 + delta) % HYPERFRAME)
    }

    /// `(self + 1) mod HYPERFRAME`.
    pub fn succ(self) -> Self {
        self.add(1)
    }

    /// `(self mod period)` as used for multiframe table lookups.
    pub fn rem(self, period: u32) -> u32 {
        self.0 % period
    }

    /// `(other - self) mod HYPERFRAME`, always in `[0, HYPERFRAME)`.
    ///
    /// This is the quantity `dequeue_prim` calls `d`: how far in the future
    /// `other` is from `self`, viewed through wraparound.
    pub fn distance_to(self, other: Fn32) -> u32 {
        let a = self.0 as i64;
        let b = other.0 as i64;
        ((b - a).rem_euclid(HYPERFRAME as i64)) as u32
    }

    /// Signed delta `((other - self + H/2) mod H) - H/2`, in `(-H/2, H/2]`.
    ///
    /// Used by the clock engine's re-lock test, where a jump "backwards" by
    /// a small amount must read as negative rather than as a huge forward
    /// wrap.
    pub fn signed_delta_from(self, other: Fn32) -> i32 {
        let half = (HYPERFRAME / 2) as i64;
        let d = self.distance_to(other) as i64;
        (((d + half).rem_euclid(HYPERFRAME as i64)) - half) as i32
    }
}

impl From<u32> for Fn32 {
    fn from(raw: u32) -> Self {
        Fn32::new(raw)
    }
}

/// A timeslot index, `0..8`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tn(u8);

impl Tn {
    pub const COUNT: usize = 8;

    pub fn new(n: u8) -> Option<Self> {
        if n < 8 {
            Some(Tn(n))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn idx(self) -> usize {
        self.0 as usize
    }

    pub fn mask_bit(self) -> u8 {
        1 << self.0
    }
}

impl TryFrom<u8> for Tn {
    type Error = ();

    fn try_from(n: u8) -> Result<Self, ()> {
        Tn::new(n).ok_or(())
    }
}

/// GSM time decomposition of an FN, used by the SCH encoder and by RACH/PDTCH
/// framing elsewhere in the corpus this scheduler descends from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GsmTime {
    pub t1: u16,
    pub t2: u8,
    pub t3: u8,
    pub t3p: u8,
}

impl GsmTime {
    pub fn from_fn(fn_: Fn32) -> Self {
        let fn_ = fn_.get();
        let t1 = (fn_ / (26 * 51)) as u16;
        let t2 = (fn_ % 26) as u8;
        let t3 = (fn_ % 51) as u8;
        let t3p = (t3.wrapping_sub(1)) / 10;
        GsmTime { t1, t2, t3, t3p }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_hyperframe() {
        let f = Fn32::new(HYPERFRAME - 1);
        assert_eq!(f.succ().get(), 0);
    }

    #[test]
    fn distance_is_forward_looking() {
        let from = Fn32::new(50);
        let to = Fn32::new(10);
        // 10 is "behind" 50 by 40, so viewed forward it is H - 40 away.
        assert_eq!(from.distance_to(to), HYPERFRAME - 40);
    }

    #[test]
    fn signed_delta_small_negative() {
        let internal = Fn32::new(100);
        let sample = Fn32::new(98);
        assert_eq!(internal.signed_delta_from(sample), -2);
    }

    #[test]
    fn signed_delta_small_positive() {
        let internal = Fn32::new(100);
        let sample = Fn32::new(105);
        assert_eq!(internal.signed_delta_from(sample), 5);
    }

    #[test]
    fn gsm_time_decomposition_matches_spec_example() {
        // fn=13 on a TCH/F multiframe: t2 = 13, t3 = 13.
        let t = GsmTime::from_fn(Fn32::new(13));
        assert_eq!(t.t1, 0);
        assert_eq!(t.t2, 13);
        assert_eq!(t.t3, 13);
    }
}
