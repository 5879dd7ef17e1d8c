use core::{error, fmt};

/// Returned when a parameter set is invalid or a hash is
/// misused.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The capacity is zero, at least the permutation width, or
    /// leaves a rate that is not a whole number of bytes.
    InvalidCapacity {
        /// The rejected capacity, in bits.
        capacity: usize,
    },
    /// The output length exceeds
    /// [`MAX_OUTPUT_BITS`][crate::MAX_OUTPUT_BITS], or is zero
    /// for a fixed-output variant.
    InvalidOutputLength {
        /// The rejected length, in bits.
        bits: usize,
    },
    /// The output length of a fixed-output variant cannot be
    /// changed.
    NotExtendable,
    /// The session was already finalized and must be
    /// re-initialized before use.
    Finalized,
    /// The message is shorter than its stated bit length.
    MessageTooShort {
        /// The stated length, in bits.
        bits: usize,
        /// The length of the supplied buffer, in bytes.
        len: usize,
    },
    /// The output buffer does not match the configured output
    /// length.
    OutputSizeMismatch {
        /// The configured output length, in bytes.
        want: usize,
        /// The length of the supplied buffer, in bytes.
        got: usize,
    },
}

impl Error {
    /// Reports whether the error came from an invalid parameter
    /// set rather than from misuse of a hash.
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Self::InvalidCapacity { .. } | Self::InvalidOutputLength { .. } | Self::NotExtendable
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { capacity } => write!(f, "invalid capacity: {capacity} bits"),
            Self::InvalidOutputLength { bits } => write!(f, "invalid output length: {bits} bits"),
            Self::NotExtendable => write!(f, "output length is fixed for this variant"),
            Self::Finalized => write!(f, "hash already finalized"),
            Self::MessageTooShort { bits, len } => {
                write!(f, "message of {len} bytes is shorter than {bits} bits")
            }
            Self::OutputSizeMismatch { want, got } => {
                write!(f, "output buffer is {got} bytes, expected {want}")
            }
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_display() {
        let vectors = [
            (Error::InvalidCapacity { capacity: 1600 }, "invalid capacity: 1600 bits"),
            (Error::InvalidOutputLength { bits: 0 }, "invalid output length: 0 bits"),
            (Error::NotExtendable, "output length is fixed for this variant"),
            (Error::Finalized, "hash already finalized"),
            (
                Error::MessageTooShort { bits: 9, len: 1 },
                "message of 1 bytes is shorter than 9 bits",
            ),
            (
                Error::OutputSizeMismatch { want: 32, got: 31 },
                "output buffer is 31 bytes, expected 32",
            ),
        ];
        for (i, (err, want)) in vectors.iter().enumerate() {
            assert_eq!(err.to_string(), *want, "#{i}");
        }
    }

    #[test]
    fn test_is_config() {
        assert!(Error::InvalidCapacity { capacity: 0 }.is_config());
        assert!(Error::NotExtendable.is_config());
        assert!(!Error::Finalized.is_config());
        assert!(!Error::MessageTooShort { bits: 1, len: 0 }.is_config());
    }
}
