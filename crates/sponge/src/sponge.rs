//! The Keccak sponge: absorbing, `pad10*1` padding and
//! squeezing.

#![allow(
    clippy::indexing_slicing,
    reason = "`pos` is always less than `rate`, which is at most 199"
)]
#![allow(
    clippy::arithmetic_side_effects,
    reason = "All arithmetic is bounded by the rate"
)]

use alloc::{vec, vec::Vec};
use core::{cmp, mem};

#[cfg(feature = "no-panic")]
use no_panic::no_panic;

use crate::{
    error::Error,
    params::{Domain, Params},
    state::State,
    util::split_at_most,
};

/// The absorbing half of a sponge.
#[derive(Clone, Debug)]
pub(crate) struct Sponge {
    state: State,
    /// The rate, in bytes.
    rate: usize,
    /// Bytes absorbed into the current block.
    ///
    /// Invariant: `pos < rate`.
    pos: usize,
}

impl Sponge {
    /// Creates a sponge with a rate of `rate` bytes.
    ///
    /// `rate` must be in `[1, 200)`.
    pub(crate) const fn new(rate: usize) -> Self {
        debug_assert!(rate > 0 && rate < 200);

        Self {
            state: State::new(),
            rate,
            pos: 0,
        }
    }

    /// Zeroes the state and rewinds to the start of a block.
    pub(crate) fn reset(&mut self) {
        self.state.reset();
        self.pos = 0;
    }

    /// Returns the number of bytes absorbed into the current
    /// block.
    pub(crate) const fn pos(&self) -> usize {
        self.pos
    }

    /// Absorbs `data`.
    #[cfg_attr(feature = "no-panic", no_panic)]
    pub(crate) fn absorb(&mut self, mut data: &[u8]) {
        if self.pos != 0 {
            let (head, rest) = split_at_most(data, self.rate - self.pos);
            self.state.xor_at(self.pos, head);
            self.pos += head.len();
            if self.pos < self.rate {
                return;
            }
            self.state.permute();
            self.pos = 0;
            data = rest;
        }

        // Whole blocks go in a lane at a time.
        while data.len() >= self.rate {
            let (block, rest) = data.split_at(self.rate);
            self.state.xor_block(block);
            self.state.permute();
            data = rest;
        }

        self.state.xor_at(0, data);
        self.pos = data.len();
    }

    /// Pads the final block and switches to squeezing.
    ///
    /// `tail` holds the final `tail_bits` bits of the message,
    /// first bit in the LSB, for messages that are not a whole
    /// number of bytes. Bits of `tail` above `tail_bits` are
    /// ignored.
    pub(crate) fn finalize(mut self, domain: Domain, tail: u8, tail_bits: usize) -> XofReader {
        debug_assert!(tail_bits < 8);

        let tail_bits = tail_bits % 8;
        let tail = u16::from(tail) & ((1 << tail_bits) - 1);

        // The message tail, the domain suffix and the first pad
        // bit. This can be up to 7+4+1 bits, so it might spill
        // into the next byte.
        let pad = tail | (u16::from(domain.delimiter()) << tail_bits);
        let nbits = tail_bits + domain.suffix_len() + 1;
        let [lo, hi] = pad.to_le_bytes();

        self.state.xor_at(self.pos, &[lo]);
        if self.pos + 1 < self.rate {
            self.state.xor_at(self.pos + 1, &[hi]);
        } else if nbits >= 8 {
            // The first pad bit landed on (or past) the final bit
            // of the block, leaving no room for the last pad bit
            // in this block.
            self.state.permute();
            self.state.xor_at(0, &[hi]);
        }
        self.state.xor_at(self.rate - 1, &[0x80]);
        self.state.permute();

        XofReader {
            state: self.state,
            rate: self.rate,
            pos: 0,
        }
    }
}

/// Reads output from a finalized sponge.
///
/// Reading `n` bytes and then `m` bytes produces the same output
/// as reading `n + m` bytes at once.
#[derive(Clone, Debug)]
pub struct XofReader {
    state: State,
    rate: usize,
    /// Bytes of the current block already read.
    ///
    /// Invariant: `pos <= rate`.
    pos: usize,
}

impl XofReader {
    /// Fills `out` with the next `out.len()` bytes of output.
    pub fn read(&mut self, mut out: &mut [u8]) {
        while !out.is_empty() {
            if self.pos == self.rate {
                self.state.permute();
                self.pos = 0;
            }
            let n = cmp::min(self.rate - self.pos, out.len());
            let (head, rest) = mem::take(&mut out).split_at_mut(n);
            head.copy_from_slice(&self.state.as_bytes()[self.pos..self.pos + n]);
            self.pos += n;
            out = rest;
        }
    }

    /// Returns the next `bits` bits of output.
    ///
    /// If `bits` is not a multiple of 8, the unused high bits of
    /// the final byte are cleared and the rest of that byte is
    /// discarded.
    pub fn read_bits(&mut self, bits: usize) -> Vec<u8> {
        let mut out = vec![0u8; bits.div_ceil(8)];
        self.read(&mut out);
        mask_tail(&mut out, bits);
        out
    }
}

/// Clears the unused high bits of the last byte of a `bits`-long
/// output.
pub(crate) fn mask_tail(out: &mut [u8], bits: usize) {
    let rem = bits % 8;
    if rem != 0 {
        if let Some(last) = out.last_mut() {
            *last &= 0xff >> (8 - rem);
        }
    }
}

/// Computes the digest of the first `bit_len` bits of `msg`.
///
/// Bits are taken from each byte starting with the LSB. Bits of
/// the final byte above `bit_len % 8` are ignored.
///
/// The digest is [`Params::output_bytes`] long; if the output
/// length is not a multiple of 8 the unused high bits of the
/// final byte are zero.
///
/// # Example
///
/// ```rust
/// use sha3_sponge::{digest, Params};
///
/// // The 5-bit message `11001`.
/// let md = digest(&Params::sha3_224(), &[0x13], 5)?;
/// assert_eq!(md.len(), 28);
/// # Ok::<(), sha3_sponge::Error>(())
/// ```
pub fn digest(params: &Params, msg: &[u8], bit_len: usize) -> Result<Vec<u8>, Error> {
    let mut out = vec![0u8; params.output_bytes()];
    digest_into(params, msg, bit_len, &mut out)?;
    Ok(out)
}

/// Same as [`digest`], but writes the digest to `out`, which
/// must be exactly [`Params::output_bytes`] long.
pub fn digest_into(
    params: &Params,
    msg: &[u8],
    bit_len: usize,
    out: &mut [u8],
) -> Result<(), Error> {
    if out.len() != params.output_bytes() {
        log::debug!(
            "{params}: output buffer is {} bytes, want {}",
            out.len(),
            params.output_bytes()
        );
        return Err(Error::OutputSizeMismatch {
            want: params.output_bytes(),
            got: out.len(),
        });
    }
    if bit_len.div_ceil(8) > msg.len() {
        log::debug!("{params}: {bit_len} bits requested from {} bytes", msg.len());
        return Err(Error::MessageTooShort {
            bits: bit_len,
            len: msg.len(),
        });
    }

    let (whole, tail) = msg.split_at(bit_len / 8);
    let mut sponge = Sponge::new(params.rate_bytes());
    sponge.absorb(whole);
    let tail = tail.first().copied().unwrap_or(0);
    let mut reader = sponge.finalize(params.domain(), tail, bit_len % 8);
    reader.read(out);
    mask_tail(out, params.output_bits());

    log::trace!("{params}: digested {bit_len} bits");
    Ok(())
}
