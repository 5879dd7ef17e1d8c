//! The `Keccak-f[1600]` permutation.

#![allow(
    clippy::indexing_slicing,
    reason = "All indices come from fixed tables over a 25-lane state"
)]
#![allow(
    clippy::arithmetic_side_effects,
    reason = "All arithmetic is on small loop counters"
)]

#[cfg(feature = "no-panic")]
use no_panic::no_panic;

/// The number of rounds in `Keccak-f[1600]`.
pub const ROUNDS: usize = 24;

/// Rotation offsets for ρ, indexed by lane position `x + 5y`.
pub const RHO_OFFSETS: [u32; 25] = [
    0, 1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14, //
];

/// The π cycle, walked backwards from lane 1.
///
/// `PI_LANES[i]` receives the rotated contents of
/// `PI_LANES[i+1]`; the last entry receives the rotated contents
/// of lane 1. Lane 0 is a fixed point and does not appear.
pub const PI_LANES: [usize; 24] = [
    1, 6, 9, 22, 14, 20, 2, 12, 13, 19, 23, 15, 4, 24, 21, 8, 16, 5, 3, 18, 17, 11, 7, 10,
];

/// Round constants for ι.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Applies `Keccak-f[1600]` to `lanes`, where lane `(x, y)` is
/// `lanes[x + 5*y]`.
#[cfg_attr(feature = "no-panic", no_panic)]
pub fn keccak_f1600(lanes: &mut [u64; 25]) {
    for rc in ROUND_CONSTANTS {
        round(lanes, rc);
    }
}

#[inline(always)]
fn round(a: &mut [u64; 25], rc: u64) {
    // θ
    let mut c = [0u64; 5];
    for (x, c) in c.iter_mut().enumerate() {
        *c = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in (0..25).step_by(5) {
            a[y + x] ^= d;
        }
    }

    // ρ and π
    let first = a[1].rotate_left(RHO_OFFSETS[1]);
    for i in 0..PI_LANES.len() - 1 {
        let src = PI_LANES[i + 1];
        a[PI_LANES[i]] = a[src].rotate_left(RHO_OFFSETS[src]);
    }
    a[PI_LANES[PI_LANES.len() - 1]] = first;

    // χ
    for y in (0..25).step_by(5) {
        let a0 = a[y];
        let a1 = a[y + 1];
        a[y] ^= !a[y + 1] & a[y + 2];
        a[y + 1] ^= !a[y + 2] & a[y + 3];
        a[y + 2] ^= !a[y + 3] & a[y + 4];
        a[y + 3] ^= !a[y + 4] & a0;
        a[y + 4] ^= !a0 & a1;
    }

    // ι
    a[0] ^= rc;
}
