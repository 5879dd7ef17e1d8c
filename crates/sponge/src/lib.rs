//! SHA-3 and SHAKE per [FIPS 202].
//!
//! The crate exposes three layers over the same Keccak sponge:
//!
//! - [`digest`]: one-shot hashing of a (possibly bit-oriented)
//!   message under a runtime [`Params`].
//! - [`Hasher`]: an Init/Update/Finalize session under a runtime
//!   [`Params`].
//! - [`Sha3_224`], [`Sha3_256`], [`Sha3_384`], [`Sha3_512`],
//!   [`Shake128`], [`Shake256`] and [`Keccak256`]: fixed
//!   variants with compile-time output sizes.
//!
//! # Example
//!
//! ```rust
//! use sha3_sponge::{Hasher, Params};
//!
//! let mut h = Hasher::new(Params::sha3_256());
//! h.update(b"hello, ")?;
//! h.update(b"world!")?;
//! let got = h.finalize()?;
//!
//! let want = sha3_sponge::digest(&Params::sha3_256(), b"hello, world!", 13 * 8)?;
//! assert_eq!(got, want);
//! # Ok::<(), sha3_sponge::Error>(())
//! ```
//!
//! [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(test, doctest, feature = "std")), no_std)]

extern crate alloc;

mod error;
mod hash;
mod keccak;
mod params;
mod session;
mod sponge;
mod state;
mod util;

pub use error::Error;
pub use hash::{Hash, Keccak256, Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256};
pub use keccak::{keccak_f1600, RHO_OFFSETS, PI_LANES, ROUNDS, ROUND_CONSTANTS};
pub use params::{Domain, Params, Variant, MAX_OUTPUT_BITS, WIDTH};
pub use session::Hasher;
pub use sponge::{digest, digest_into, XofReader};
pub use state::{State, STATE_BYTES};
