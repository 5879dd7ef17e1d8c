use alloc::{string::String, vec, vec::Vec};
use core::mem;

use crate::{
    error::Error,
    params::Params,
    sponge::{mask_tail, Sponge, XofReader},
};

/// An Init/Update/Finalize hash session.
///
/// Output does not depend on how the input is split across calls
/// to [`update`][Self::update].
///
/// After [`finalize`][Self::finalize] (or one of its variants)
/// the session refuses further input with [`Error::Finalized`]
/// until [`init`][Self::init] is called.
///
/// # Example
///
/// ```rust
/// use sha3_sponge::{Error, Hasher, Params};
///
/// let mut h = Hasher::new(Params::shake128());
/// h.set_output_length(100)?;
/// h.update(b"abc")?;
/// let md = h.finalize()?;
/// assert_eq!(md.len(), 13);
///
/// assert_eq!(h.update(b"more"), Err(Error::Finalized));
/// h.init();
/// h.update(b"more")?;
/// # Ok::<(), sha3_sponge::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Hasher {
    params: Params,
    sponge: Sponge,
    finalized: bool,
}

impl Hasher {
    /// Creates a session, ready for input.
    pub const fn new(params: Params) -> Self {
        Self {
            sponge: Sponge::new(params.rate_bytes()),
            params,
            finalized: false,
        }
    }

    /// Resets the session, discarding any absorbed input.
    pub fn init(&mut self) {
        self.sponge.reset();
        self.finalized = false;
    }

    /// Absorbs `data`, returning the number of bytes consumed,
    /// which is always `data.len()`.
    pub fn update(&mut self, data: &[u8]) -> Result<usize, Error> {
        self.check()?;
        self.sponge.absorb(data);
        Ok(data.len())
    }

    /// Finishes the session and returns the digest.
    pub fn finalize(&mut self) -> Result<Vec<u8>, Error> {
        let mut out = vec![0u8; self.params.output_bytes()];
        self.finalize_into(&mut out)?;
        Ok(out)
    }

    /// Finishes the session and writes the digest to `out`,
    /// which must be exactly
    /// [`Params::output_bytes`] long.
    pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), Error> {
        self.check()?;
        let want = self.params.output_bytes();
        if out.len() != want {
            log::debug!("{}: output buffer is {} bytes, want {want}", self.params, out.len());
            return Err(Error::OutputSizeMismatch {
                want,
                got: out.len(),
            });
        }
        self.take_reader()?.read(out);
        mask_tail(out, self.params.output_bits());
        Ok(())
    }

    /// Finishes the session and returns a reader over the
    /// unbounded output stream.
    ///
    /// Only XOFs support this.
    pub fn finalize_xof(&mut self) -> Result<XofReader, Error> {
        if !self.params.is_xof() {
            log::debug!("{}: not an XOF", self.params);
            return Err(Error::NotExtendable);
        }
        self.take_reader()
    }

    /// Changes the output length of an XOF session.
    ///
    /// See [`Params::set_output_length`].
    pub fn set_output_length(&mut self, bits: usize) -> Result<(), Error> {
        self.params.set_output_length(bits)
    }

    /// Returns the session's parameters.
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// Returns the name of the parameter set, e.g.
    /// `"SHA3-256"`.
    pub fn variant_name(&self) -> String {
        self.params.variant_name()
    }

    /// Returns the rate, in bytes.
    pub const fn rate_bytes(&self) -> usize {
        self.params.rate_bytes()
    }

    /// Returns the number of bytes absorbed into the current
    /// block.
    pub const fn block_pos(&self) -> usize {
        self.sponge.pos()
    }

    /// Reports whether the session has been finalized.
    pub const fn is_finalized(&self) -> bool {
        self.finalized
    }

    fn check(&self) -> Result<(), Error> {
        if self.finalized {
            log::debug!("{}: used after finalize without init", self.params);
            return Err(Error::Finalized);
        }
        Ok(())
    }

    /// Pads the current block and leaves a zeroed sponge behind.
    fn take_reader(&mut self) -> Result<XofReader, Error> {
        self.check()?;
        let fresh = Sponge::new(self.params.rate_bytes());
        let sponge = mem::replace(&mut self.sponge, fresh);
        self.finalized = true;
        log::trace!("{}: finalized at block offset {}", self.params, sponge.pos());
        Ok(sponge.finalize(self.params.domain(), 0, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{digest, params::Domain};

    fn message(n: usize) -> Vec<u8> {
        (0..n).map(|i| (i * 7 + 3) as u8).collect()
    }

    #[test]
    fn test_matches_oneshot_at_every_split() {
        for p in [
            Params::sha3_224(),
            Params::sha3_256(),
            Params::sha3_384(),
            Params::sha3_512(),
            Params::shake128(),
            Params::shake256(),
            Params::keccak256(),
        ] {
            let r = p.rate_bytes();
            let msg = message(2 * r + 3);
            let want = digest(&p, &msg, msg.len() * 8).unwrap();
            let mut h = Hasher::new(p);
            for split in 0..=msg.len() {
                h.init();
                let (a, b) = msg.split_at(split);
                assert_eq!(h.update(a), Ok(a.len()));
                assert_eq!(h.update(b), Ok(b.len()));
                assert_eq!(h.finalize().unwrap(), want, "{p}: #{split}");
            }
        }
    }

    #[test]
    fn test_rate_boundaries() {
        let p = Params::sha3_256();
        let r = p.rate_bytes();
        for n in [r - 1, r, r + 1, 2 * r - 1, 2 * r, 2 * r + 1, 3 * r] {
            let msg = message(n);
            let want = digest(&p, &msg, n * 8).unwrap();

            let mut h = Hasher::new(p);
            for b in &msg {
                h.update(core::slice::from_ref(b)).unwrap();
            }
            assert_eq!(h.block_pos(), n % r, "#{n}");
            assert_eq!(h.finalize().unwrap(), want, "#{n}");
        }
    }

    #[test]
    fn test_fails_closed_after_finalize() {
        let mut h = Hasher::new(Params::sha3_256());
        h.update(b"abc").unwrap();
        let first = h.finalize().unwrap();
        assert!(h.is_finalized());

        assert_eq!(h.update(b"abc"), Err(Error::Finalized));
        assert_eq!(h.finalize(), Err(Error::Finalized));
        assert!(matches!(h.finalize_xof(), Err(Error::NotExtendable)));

        h.init();
        h.update(b"abc").unwrap();
        assert_eq!(h.finalize().unwrap(), first);
    }

    #[test]
    fn test_finalize_xof() {
        let mut h = Hasher::new(Params::shake256());
        h.update(b"xof").unwrap();
        let mut r = h.finalize_xof().unwrap();
        assert!(matches!(h.finalize_xof(), Err(Error::Finalized)));

        let mut got = vec![0u8; 300];
        r.read(&mut got[..10]);
        r.read(&mut got[10..]);

        let mut p = Params::shake256();
        p.set_output_length(300 * 8).unwrap();
        assert_eq!(got, digest(&p, b"xof", 24).unwrap());
    }

    #[test]
    fn test_set_output_length() {
        let mut h = Hasher::new(Params::sha3_384());
        assert_eq!(h.set_output_length(128), Err(Error::NotExtendable));
        assert_eq!(h.finalize().unwrap().len(), 48);

        let mut h = Hasher::new(Params::shake128());
        h.set_output_length(213).unwrap();
        let md = h.finalize().unwrap();
        assert_eq!(md.len(), 27);
        assert_eq!(md[26] >> 5, 0);
    }

    #[test]
    fn test_introspection() {
        let h = Hasher::new(Params::custom(Domain::Sha3, 256, 512).unwrap());
        assert_eq!(h.variant_name(), "SHA3-256");
        assert_eq!(h.rate_bytes(), 136);
        assert_eq!(h.params().output_bytes(), 32);

        let mut out = [0u8; 33];
        let mut h = Hasher::new(Params::sha3_256());
        assert_eq!(
            h.finalize_into(&mut out),
            Err(Error::OutputSizeMismatch { want: 32, got: 33 })
        );
        // A rejected buffer does not finalize the session.
        assert!(!h.is_finalized());
    }

    #[test]
    fn test_finalized_before_size_mismatch() {
        let mut h = Hasher::new(Params::sha3_256());
        h.finalize().unwrap();
        let mut out = [0u8; 33];
        assert_eq!(h.finalize_into(&mut out), Err(Error::Finalized));
        let mut out = [0u8; 32];
        assert_eq!(h.finalize_into(&mut out), Err(Error::Finalized));
    }
}
