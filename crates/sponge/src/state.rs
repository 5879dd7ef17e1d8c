#![allow(
    clippy::indexing_slicing,
    reason = "Lane indices are checked against `LANES`"
)]

use core::fmt;

#[cfg(feature = "no-panic")]
use no_panic::no_panic;
use zerocopy::byteorder::little_endian::U64;

use crate::{keccak::keccak_f1600, util::as_chunks};

/// The number of 64-bit lanes in the state.
pub(crate) const LANES: usize = 25;

/// The size in bytes of the state.
pub const STATE_BYTES: usize = LANES * 8;

/// The 1600-bit `Keccak-f` state.
///
/// The state is stored once, as 200 bytes. Lane `i` is bytes
/// `8*i..8*i+8` read as a little-endian `u64`, regardless of the
/// host's byte order, so the byte view and the lane view always
/// agree.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct State {
    lanes: [U64; LANES],
}

impl State {
    /// Creates a zeroed state.
    #[inline]
    pub const fn new() -> Self {
        Self {
            lanes: [U64::ZERO; LANES],
        }
    }

    /// Zeroes the state.
    #[inline]
    pub fn reset(&mut self) {
        self.lanes = [U64::ZERO; LANES];
    }

    /// Returns lane `x + 5*y`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 25`.
    #[inline]
    pub fn lane(&self, i: usize) -> u64 {
        self.lanes[i].get()
    }

    /// Sets lane `x + 5*y`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 25`.
    #[inline]
    pub fn set_lane(&mut self, i: usize, v: u64) {
        self.lanes[i].set(v);
    }

    /// Returns the lane view.
    pub fn to_lanes(&self) -> [u64; LANES] {
        self.lanes.map(U64::get)
    }

    /// Returns the byte view.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; STATE_BYTES] {
        zerocopy::transmute_ref!(&self.lanes)
    }

    /// Returns the mutable byte view.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8; STATE_BYTES] {
        zerocopy::transmute_mut!(&mut self.lanes)
    }

    /// XORs whole lanes from `block` into the state, starting at
    /// lane 0. Bytes past the last whole lane are XORed one at
    /// a time.
    ///
    /// `block` must not be longer than [`STATE_BYTES`].
    #[cfg_attr(feature = "no-panic", no_panic)]
    pub(crate) fn xor_block(&mut self, block: &[u8]) {
        let (lanes, rest) = as_chunks::<u8, 8>(block);
        for (lane, chunk) in self.lanes.iter_mut().zip(lanes) {
            lane.set(lane.get() ^ u64::from_le_bytes(*chunk));
        }
        let off = block.len() - rest.len();
        if let Some(dst) = self.as_bytes_mut().get_mut(off..) {
            xor_bytes(dst, rest);
        }
    }

    /// XORs `data` into the byte view at `offset`.
    ///
    /// `offset + data.len()` must not exceed [`STATE_BYTES`].
    #[inline]
    pub(crate) fn xor_at(&mut self, offset: usize, data: &[u8]) {
        if let Some(dst) = self.as_bytes_mut().get_mut(offset..) {
            xor_bytes(dst, data);
        }
    }

    /// Applies `Keccak-f[1600]` to the state.
    #[cfg_attr(feature = "no-panic", no_panic)]
    pub fn permute(&mut self) {
        let mut lanes = self.to_lanes();
        keccak_f1600(&mut lanes);
        for (dst, src) in self.lanes.iter_mut().zip(lanes) {
            dst.set(src);
        }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State").finish_non_exhaustive()
    }
}

// Sanity check: the byte view covers exactly the lanes.
const _: () = assert!(size_of::<[U64; LANES]>() == STATE_BYTES);

#[inline(always)]
fn xor_bytes(dst: &mut [u8], src: &[u8]) {
    dst.iter_mut().zip(src).for_each(|(d, s)| *d ^= s);
}
