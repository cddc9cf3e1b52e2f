use rle_codec::CodecError;
#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmapError {
    #[cfg_attr(
        feature = "std",
        error("Bitmap dimensions must be positive, got {width}x{height}")
    )]
    Construction { width: usize, height: usize },

    #[cfg_attr(feature = "std", error("Column {x} is out of bounds for width {width}"))]
    ColumnOutOfRange { x: usize, width: usize },

    #[cfg_attr(feature = "std", error("Row {y} is out of bounds for height {height}"))]
    RowOutOfRange { y: usize, height: usize },

    /// A stored encoding does not decode to the bitmap width.
    #[cfg_attr(
        feature = "std",
        error("Row {y} decodes to {found} bits, expected {expected}")
    )]
    RowLengthMismatch {
        y: usize,
        expected: usize,
        found: usize,
    },

    #[cfg_attr(feature = "std", error("codec error: {0}"))]
    Codec(#[cfg_attr(feature = "std", from)] CodecError),
}

pub type Result<T> = core::result::Result<T, BitmapError>;

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitmapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitmapError::Construction { width, height } => {
                write!(f, "Bitmap dimensions must be positive, got {}x{}", width, height)
            }
            BitmapError::ColumnOutOfRange { x, width } => {
                write!(f, "Column {} is out of bounds for width {}", x, width)
            }
            BitmapError::RowOutOfRange { y, height } => {
                write!(f, "Row {} is out of bounds for height {}", y, height)
            }
            BitmapError::RowLengthMismatch { y, expected, found } => {
                write!(f, "Row {} decodes to {} bits, expected {}", y, found, expected)
            }
            BitmapError::Codec(e) => write!(f, "codec error: {}", e),
        }
    }
}

#[cfg(not(feature = "std"))]
impl From<CodecError> for BitmapError {
    fn from(err: CodecError) -> Self {
        BitmapError::Codec(err)
    }
}
