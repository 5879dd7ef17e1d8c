use generic_array::{ArrayLength, GenericArray};
use typenum::{Unsigned, U16, U28, U32, U48, U64};

use crate::{
    params::Params,
    sponge::{Sponge, XofReader},
};

/// A hash function.
pub trait Hash: Clone {
    /// The hash digest.
    type Digest: AsRef<[u8]>;
    /// Creates a new hash.
    fn new() -> Self;
    /// Updates the running hash with `data`.
    fn update(&mut self, data: &[u8]);
    /// Returns the hash digest.
    fn finalize(self) -> Self::Digest;
}

macro_rules! impl_fixed {
    ($alg:literal, $name:ident, $size:ty, $params:expr) => {
        #[doc = "`"]
        #[doc = $alg]
        #[doc = "`."]
        #[derive(Clone, Debug)]
        pub struct $name {
            sponge: Sponge,
        }

        impl $name {
            /// The parameters of this hash.
            pub const PARAMS: Params = $params;

            /// The size in bytes of the digest.
            pub const OUTPUT_SIZE: usize = <$size as Unsigned>::USIZE;

            /// The rate in bytes.
            pub const BLOCK_SIZE: usize = Self::PARAMS.rate_bytes();

            /// Creates a new hash.
            pub const fn new() -> Self {
                Self {
                    sponge: Sponge::new(Self::BLOCK_SIZE),
                }
            }

            /// Writes `data` to the running hash.
            pub fn update(&mut self, data: &[u8]) {
                self.sponge.absorb(data);
            }

            /// Writes the digest to `out`.
            pub fn finalize_into(self, out: &mut GenericArray<u8, $size>) {
                self.sponge
                    .finalize(Self::PARAMS.domain(), 0, 0)
                    .read(out);
            }

            /// Returns the digest.
            pub fn finalize(self) -> GenericArray<u8, $size> {
                let mut out = GenericArray::default();
                self.finalize_into(&mut out);
                out
            }

            /// Returns the digest of `data`.
            pub fn digest(data: &[u8]) -> GenericArray<u8, $size> {
                let mut h = Self::new();
                h.update(data);
                h.finalize()
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new()
            }
        }

        impl Hash for $name {
            type Digest = GenericArray<u8, $size>;

            #[inline]
            fn new() -> Self {
                Self::new()
            }

            #[inline]
            fn update(&mut self, data: &[u8]) {
                self.update(data);
            }

            #[inline]
            fn finalize(self) -> Self::Digest {
                self.finalize()
            }
        }

        #[cfg(feature = "rust-crypto")]
        #[cfg_attr(docsrs, doc(cfg(feature = "rust-crypto")))]
        impl digest::crypto_common::AlgorithmName for $name {
            fn write_alg_name(f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, $alg)
            }
        }

        #[cfg(feature = "rust-crypto")]
        #[cfg_attr(docsrs, doc(cfg(feature = "rust-crypto")))]
        impl digest::HashMarker for $name {}

        #[cfg(feature = "rust-crypto")]
        #[cfg_attr(docsrs, doc(cfg(feature = "rust-crypto")))]
        impl digest::Update for $name {
            #[inline]
            fn update(&mut self, data: &[u8]) {
                self.update(data);
            }
        }
    };
}
impl_fixed!("SHA3-224", Sha3_224, U28, Params::sha3_224());
impl_fixed!("SHA3-256", Sha3_256, U32, Params::sha3_256());
impl_fixed!("SHA3-384", Sha3_384, U48, Params::sha3_384());
impl_fixed!("SHA3-512", Sha3_512, U64, Params::sha3_512());
impl_fixed!("Keccak-256", Keccak256, U32, Params::keccak256());

macro_rules! impl_xof {
    ($alg:literal, $name:ident, $size:ty, $params:expr) => {
        #[doc = "`"]
        #[doc = $alg]
        #[doc = "`."]
        ///
        /// The [`Hash`] digest is the default output length;
        /// use [`finalize_xof`][Self::finalize_xof] for any other
        /// length.
        #[derive(Clone, Debug)]
        pub struct $name {
            sponge: Sponge,
        }

        impl $name {
            /// The parameters of this XOF, with the default output
            /// length.
            pub const PARAMS: Params = $params;

            /// The rate in bytes.
            pub const BLOCK_SIZE: usize = Self::PARAMS.rate_bytes();

            /// Creates a new XOF.
            pub const fn new() -> Self {
                Self {
                    sponge: Sponge::new(Self::BLOCK_SIZE),
                }
            }

            /// Writes `data` to the running XOF.
            pub fn update(&mut self, data: &[u8]) {
                self.sponge.absorb(data);
            }

            /// Returns a reader over the output stream.
            pub fn finalize_xof(self) -> XofReader {
                self.sponge.finalize(Self::PARAMS.domain(), 0, 0)
            }

            /// Fills `out` with output.
            pub fn finalize_into(self, out: &mut [u8]) {
                self.finalize_xof().read(out)
            }

            /// Returns a fixed-size output.
            pub fn finalize<N: ArrayLength>(self) -> GenericArray<u8, N> {
                let mut out = GenericArray::default();
                self.finalize_into(&mut out);
                out
            }

            /// Fills `out` with the output for `data`.
            pub fn digest_into(data: &[u8], out: &mut [u8]) {
                let mut h = Self::new();
                h.update(data);
                h.finalize_into(out);
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new()
            }
        }

        impl Hash for $name {
            type Digest = GenericArray<u8, $size>;

            #[inline]
            fn new() -> Self {
                Self::new()
            }

            #[inline]
            fn update(&mut self, data: &[u8]) {
                self.update(data);
            }

            #[inline]
            fn finalize(self) -> Self::Digest {
                self.finalize::<$size>()
            }
        }

        #[cfg(feature = "rust-crypto")]
        #[cfg_attr(docsrs, doc(cfg(feature = "rust-crypto")))]
        impl digest::crypto_common::AlgorithmName for $name {
            fn write_alg_name(f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, $alg)
            }
        }

        #[cfg(feature = "rust-crypto")]
        #[cfg_attr(docsrs, doc(cfg(feature = "rust-crypto")))]
        impl digest::ExtendableOutput for $name {
            type Reader = XofReader;

            fn finalize_xof(self) -> Self::Reader {
                self.finalize_xof()
            }
        }

        #[cfg(feature = "rust-crypto")]
        #[cfg_attr(docsrs, doc(cfg(feature = "rust-crypto")))]
        impl digest::Update for $name {
            #[inline]
            fn update(&mut self, data: &[u8]) {
                self.update(data);
            }
        }
    };
}
impl_xof!("SHAKE128", Shake128, U16, Params::shake128());
impl_xof!("SHAKE256", Shake256, U32, Params::shake256());

#[cfg(feature = "rust-crypto")]
#[cfg_attr(docsrs, doc(cfg(feature = "rust-crypto")))]
impl digest::XofReader for XofReader {
    #[inline]
    fn read(&mut self, buffer: &mut [u8]) {
        self.read(buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_all<H: Hash>(chunks: &[&[u8]]) -> H::Digest {
        let mut h = H::new();
        for c in chunks {
            h.update(c);
        }
        h.finalize()
    }

    #[test]
    fn test_empty() {
        let vectors = [
            (
                "SHA3-224",
                Sha3_224::digest(b"").to_vec(),
                "6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
            ),
            (
                "SHA3-256",
                Sha3_256::digest(b"").to_vec(),
                "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
            ),
            (
                "SHA3-384",
                Sha3_384::digest(b"").to_vec(),
                "0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2a\
                 c3713831264adb47fb6bd1e058d5f004",
            ),
            (
                "SHA3-512",
                Sha3_512::digest(b"").to_vec(),
                "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a6\
                 15b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
            ),
            (
                "SHAKE128",
                Shake128::new().finalize::<U16>().to_vec(),
                "7f9c2ba4e88f827d616045507605853e",
            ),
            (
                "SHAKE256",
                Shake256::new().finalize::<U32>().to_vec(),
                "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f",
            ),
            (
                "Keccak-256",
                Keccak256::digest(b"").to_vec(),
                "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
            ),
        ];
        for (name, got, want) in vectors {
            assert_eq!(hex::encode(got), want, "{name}");
        }
    }

    #[test]
    fn test_abc() {
        assert_eq!(
            hex::encode(Sha3_256::digest(b"abc")),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
        );
    }

    #[test]
    fn test_hash_trait() {
        let chunks: &[&[u8]] = &[b"hello", b", ", b"world", b"!"];
        assert_eq!(
            hash_all::<Sha3_256>(chunks),
            Sha3_256::digest(b"hello, world!")
        );
        assert_eq!(
            hash_all::<Shake128>(chunks).as_slice(),
            crate::digest(&Params::shake128(), b"hello, world!", 13 * 8).unwrap(),
        );
    }

    #[test]
    fn test_xof_default_length() {
        assert_eq!(hash_all::<Shake128>(&[&b"abc"[..]]).len(), 16);
        assert_eq!(hash_all::<Shake256>(&[&b"abc"[..]]).len(), 32);
        assert_eq!(Shake128::PARAMS.output_bits(), 128);
        assert_eq!(Shake256::PARAMS.output_bits(), 256);
    }

    #[test]
    fn test_matches_runtime_params() {
        let msg = [0x5au8; 500];
        let got = Sha3_384::digest(&msg);
        let want = crate::digest(&Sha3_384::PARAMS, &msg, msg.len() * 8).unwrap();
        assert_eq!(got.as_slice(), want);
        assert_eq!(Sha3_384::OUTPUT_SIZE, 48);
        assert_eq!(Sha3_384::BLOCK_SIZE, 104);
    }

    #[test]
    fn test_xof_prefix() {
        let mut long = [0u8; 1000];
        Shake256::digest_into(b"prefix", &mut long);
        for n in [0, 1, 135, 136, 137, 999] {
            let mut short = [0u8; 1000];
            Shake256::digest_into(b"prefix", &mut short[..n]);
            assert_eq!(short[..n], long[..n], "#{n}");
        }
    }

    #[test]
    fn test_domain_separation() {
        // Same capacity, same input, different suffix.
        assert_eq!(Sha3_256::PARAMS.capacity_bits(), 512);
        assert_eq!(Keccak256::PARAMS.capacity_bits(), 512);
        let mut shake = Shake256::new();
        shake.update(b"domain");
        let shake = shake.finalize::<U32>();
        let sha3 = Sha3_256::digest(b"domain");
        let keccak = Keccak256::digest(b"domain");
        assert_ne!(sha3, shake);
        assert_ne!(sha3, keccak);
        assert_ne!(shake, keccak);
    }

    #[cfg(feature = "rust-crypto")]
    #[test]
    fn test_rust_crypto() {
        use digest::{crypto_common::AlgorithmName, ExtendableOutput, Update};

        let mut h = Sha3_512::new();
        Update::update(&mut h, b"abc");
        assert_eq!(h.finalize(), Sha3_512::digest(b"abc"));

        let mut x = Shake128::default();
        Update::update(&mut x, b"abc");
        let mut got = [0u8; 200];
        ExtendableOutput::finalize_xof(x).read(&mut got);
        let mut want = [0u8; 200];
        Shake128::digest_into(b"abc", &mut want);
        assert_eq!(got, want);

        struct Name<T>(core::marker::PhantomData<T>);
        impl<T: AlgorithmName> core::fmt::Display for Name<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                T::write_alg_name(f)
            }
        }
        assert_eq!(
            Name::<Sha3_224>(core::marker::PhantomData).to_string(),
            "SHA3-224"
        );
        assert_eq!(
            Name::<Shake256>(core::marker::PhantomData).to_string(),
            "SHAKE256"
        );
    }
}
