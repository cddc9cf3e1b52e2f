#[cfg(feature = "std")]
use thiserror::Error;

/// Codec configuration errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// A maximum run length of zero cannot represent any bit
    #[cfg_attr(
        feature = "std",
        error("Max run length must be in the range 1..=65535, got {0}")
    )]
    InvalidMaxRunLength(u16),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CodecError::InvalidMaxRunLength(n) => {
                write!(f, "Max run length must be in the range 1..=65535, got {}", n)
            }
        }
    }
}
