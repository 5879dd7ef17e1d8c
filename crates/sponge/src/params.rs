#![allow(
    clippy::arithmetic_side_effects,
    reason = "Capacities are checked against `WIDTH` before use"
)]

use alloc::string::{String, ToString};
use core::fmt;

use crate::error::Error;

/// The width in bits of the `Keccak-f[1600]` permutation.
pub const WIDTH: usize = 1600;

/// The largest supported output, in bits: 2^16-1 bytes.
pub const MAX_OUTPUT_BITS: usize = 0xffff * 8;

/// Domain separation appended to the message before padding.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Domain {
    /// SHA-3: suffix `01`.
    Sha3,
    /// SHAKE: suffix `1111`.
    Shake,
    /// The original Keccak submission: no suffix.
    Keccak,
}

impl Domain {
    /// Returns the suffix bits, first bit in the LSB.
    pub const fn suffix(self) -> u8 {
        match self {
            Self::Sha3 => 0b10,
            Self::Shake => 0b1111,
            Self::Keccak => 0,
        }
    }

    /// Returns the number of suffix bits.
    pub const fn suffix_len(self) -> usize {
        match self {
            Self::Sha3 => 2,
            Self::Shake => 4,
            Self::Keccak => 0,
        }
    }

    /// Returns the suffix followed by the first `pad10*1` bit:
    /// `0x06` for SHA-3, `0x1f` for SHAKE and `0x01` for Keccak.
    pub const fn delimiter(self) -> u8 {
        self.suffix() | (1 << self.suffix_len())
    }

    /// Reports whether the output length is caller-chosen.
    pub const fn is_xof(self) -> bool {
        matches!(self, Self::Shake)
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Sha3 => "SHA3",
            Self::Shake => "SHAKE",
            Self::Keccak => "Keccak",
        }
    }
}

/// A named, standardized parameter set.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Variant {
    /// SHA3-224.
    Sha3_224,
    /// SHA3-256.
    Sha3_256,
    /// SHA3-384.
    Sha3_384,
    /// SHA3-512.
    Sha3_512,
    /// SHAKE128.
    Shake128,
    /// SHAKE256.
    Shake256,
    /// Keccak-256 as used by Ethereum.
    Keccak256,
}

impl Variant {
    /// All variants.
    pub const ALL: [Self; 7] = [
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
        Self::Shake128,
        Self::Shake256,
        Self::Keccak256,
    ];

    /// Returns the name of the variant, e.g. `"SHA3-256"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha3_224 => "SHA3-224",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
            Self::Shake128 => "SHAKE128",
            Self::Shake256 => "SHAKE256",
            Self::Keccak256 => "Keccak-256",
        }
    }

    /// Looks up a variant by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name().eq_ignore_ascii_case(name))
    }

    const fn params(self) -> (Domain, usize, usize) {
        match self {
            Self::Sha3_224 => (Domain::Sha3, 224, 448),
            Self::Sha3_256 => (Domain::Sha3, 256, 512),
            Self::Sha3_384 => (Domain::Sha3, 384, 768),
            Self::Sha3_512 => (Domain::Sha3, 512, 1024),
            Self::Shake128 => (Domain::Shake, 128, 256),
            Self::Shake256 => (Domain::Shake, 256, 512),
            Self::Keccak256 => (Domain::Keccak, 256, 512),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The parameters of a Keccak sponge.
///
/// The rate is `1600 - capacity` bits and never changes after
/// construction. Only the output length of an XOF can be
/// changed, see [`set_output_length`][Self::set_output_length].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Params {
    variant: Option<Variant>,
    domain: Domain,
    output_bits: usize,
    capacity_bits: usize,
}

impl Params {
    /// Returns the parameters of a named variant.
    ///
    /// Every named variant has a capacity of twice its output
    /// length, so SHAKE128 and SHAKE256 default to 128 and 256
    /// bits of output, respectively.
    pub const fn from_variant(variant: Variant) -> Self {
        let (domain, output_bits, capacity_bits) = variant.params();
        Self {
            variant: Some(variant),
            domain,
            output_bits,
            capacity_bits,
        }
    }

    /// SHA3-224.
    pub const fn sha3_224() -> Self {
        Self::from_variant(Variant::Sha3_224)
    }

    /// SHA3-256.
    pub const fn sha3_256() -> Self {
        Self::from_variant(Variant::Sha3_256)
    }

    /// SHA3-384.
    pub const fn sha3_384() -> Self {
        Self::from_variant(Variant::Sha3_384)
    }

    /// SHA3-512.
    pub const fn sha3_512() -> Self {
        Self::from_variant(Variant::Sha3_512)
    }

    /// SHAKE128 with 128 bits of output.
    pub const fn shake128() -> Self {
        Self::from_variant(Variant::Shake128)
    }

    /// SHAKE256 with 256 bits of output.
    pub const fn shake256() -> Self {
        Self::from_variant(Variant::Shake256)
    }

    /// Keccak-256.
    pub const fn keccak256() -> Self {
        Self::from_variant(Variant::Keccak256)
    }

    /// Creates a custom parameter set.
    ///
    /// The capacity is never derived from the output length: a
    /// standard security margin must be requested explicitly.
    ///
    /// - `capacity_bits` must be in `(0, 1600)` and a multiple of
    ///   8, so that the rate is a whole number of bytes.
    /// - `output_bits` must be at most [`MAX_OUTPUT_BITS`] and
    ///   non-zero unless `domain` is an XOF.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sha3_sponge::{Domain, Params};
    ///
    /// let p = Params::custom(Domain::Sha3, 256, 512)?;
    /// assert_eq!(p.rate_bytes(), 136);
    ///
    /// assert!(Params::custom(Domain::Sha3, 256, 1601).is_err());
    /// # Ok::<(), sha3_sponge::Error>(())
    /// ```
    pub fn custom(domain: Domain, output_bits: usize, capacity_bits: usize) -> Result<Self, Error> {
        if capacity_bits == 0 || capacity_bits >= WIDTH || capacity_bits % 8 != 0 {
            log::debug!("rejecting capacity of {capacity_bits} bits");
            return Err(Error::InvalidCapacity {
                capacity: capacity_bits,
            });
        }
        check_output_bits(domain, output_bits)?;
        let p = Self {
            variant: None,
            domain,
            output_bits,
            capacity_bits,
        };
        // Custom parameters that happen to match a named variant
        // are that variant.
        Ok(Variant::ALL
            .into_iter()
            .map(Self::from_variant)
            .find(|v| *v == Self { variant: v.variant, ..p })
            .unwrap_or(p))
    }

    /// Changes the output length of an XOF.
    ///
    /// Returns [`Error::NotExtendable`] for fixed-output
    /// variants.
    pub fn set_output_length(&mut self, bits: usize) -> Result<(), Error> {
        if !self.domain.is_xof() {
            log::debug!("{self}: output length is fixed at {} bits", self.output_bits);
            return Err(Error::NotExtendable);
        }
        check_output_bits(self.domain, bits)?;
        self.output_bits = bits;
        Ok(())
    }

    /// Returns the named variant, if any.
    pub const fn variant(&self) -> Option<Variant> {
        self.variant
    }

    /// Returns the domain separation suffix.
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    /// Reports whether the output length can be changed.
    pub const fn is_xof(&self) -> bool {
        self.domain.is_xof()
    }

    /// Returns the output length, in bits.
    pub const fn output_bits(&self) -> usize {
        self.output_bits
    }

    /// Returns the output length, rounded up to whole bytes.
    pub const fn output_bytes(&self) -> usize {
        self.output_bits.div_ceil(8)
    }

    /// Returns the capacity, in bits.
    pub const fn capacity_bits(&self) -> usize {
        self.capacity_bits
    }

    /// Returns the rate, in bits.
    pub const fn rate_bits(&self) -> usize {
        WIDTH - self.capacity_bits
    }

    /// Returns the rate, in bytes.
    pub const fn rate_bytes(&self) -> usize {
        self.rate_bits() / 8
    }

    /// Returns the name of the parameter set, e.g.
    /// `"SHA3-256"`.
    ///
    /// Custom parameters are named after their domain, capacity
    /// and output length, e.g. `"SHA3[c=512,d=200]"`.
    pub fn variant_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant {
            Some(v) => f.write_str(v.name()),
            None => write!(
                f,
                "{}[c={},d={}]",
                self.domain.name(),
                self.capacity_bits,
                self.output_bits
            ),
        }
    }
}

fn check_output_bits(domain: Domain, bits: usize) -> Result<(), Error> {
    if bits > MAX_OUTPUT_BITS || (bits == 0 && !domain.is_xof()) {
        log::debug!("rejecting output length of {bits} bits");
        return Err(Error::InvalidOutputLength { bits });
    }
    Ok(())
}
