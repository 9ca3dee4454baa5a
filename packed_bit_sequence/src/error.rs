#[cfg(feature = "std")]
use thiserror::Error;

/// Errors raised by [`PackedBitSequence`](crate::PackedBitSequence) operations.
///
/// Every operation validates its arguments before touching the buffer, so an
/// `Err` always leaves the sequence exactly as it was.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq)]
pub enum BitSequenceError {
    #[cfg_attr(feature = "std", error("Bit value must be 0 or 1, got {0}"))]
    InvalidBitValue(u8),

    #[cfg_attr(feature = "std", error("Invalid argument: {0}"))]
    InvalidArgument(&'static str),

    #[cfg_attr(feature = "std", error("Index {0} is out of bounds for length {1}"))]
    IndexOutOfBounds(usize, usize),

    #[cfg_attr(
        feature = "std",
        error("Binary string may only contain '0' or '1', found {digit:?} at position {position}")
    )]
    InvalidBinaryDigit { digit: char, position: usize },

    #[cfg_attr(feature = "std", error("Pattern must be a non-empty binary string"))]
    EmptyPattern,

    #[cfg_attr(feature = "std", error("Invalid hexadecimal string: {0}"))]
    InvalidHex(hex::FromHexError),

    #[cfg_attr(feature = "std", error("Bit {0} not found in sequence"))]
    ValueNotFound(u8),

    #[cfg_attr(feature = "std", error("Sequence is empty"))]
    Empty,
}

impl From<hex::FromHexError> for BitSequenceError {
    fn from(err: hex::FromHexError) -> Self {
        BitSequenceError::InvalidHex(err)
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitSequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitSequenceError::InvalidBitValue(v) => {
                write!(f, "Bit value must be 0 or 1, got {}", v)
            }
            BitSequenceError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            BitSequenceError::IndexOutOfBounds(i, l) => {
                write!(f, "Index {} is out of bounds for length {}", i, l)
            }
            BitSequenceError::InvalidBinaryDigit { digit, position } => write!(
                f,
                "Binary string may only contain '0' or '1', found {:?} at position {}",
                digit, position
            ),
            BitSequenceError::EmptyPattern => {
                write!(f, "Pattern must be a non-empty binary string")
            }
            BitSequenceError::InvalidHex(e) => write!(f, "Invalid hexadecimal string: {}", e),
            BitSequenceError::ValueNotFound(v) => write!(f, "Bit {} not found in sequence", v),
            BitSequenceError::Empty => write!(f, "Sequence is empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = BitSequenceError::IndexOutOfBounds(9, 4);
        assert_eq!(err.to_string(), "Index 9 is out of bounds for length 4");

        let err = BitSequenceError::InvalidBinaryDigit {
            digit: 'x',
            position: 2,
        };
        assert!(err.to_string().contains("'x'"));
        assert!(err.to_string().contains("position 2"));
    }

    #[test]
    fn hex_errors_convert() {
        let err: BitSequenceError = hex::decode("abc").unwrap_err().into();
        assert!(matches!(
            err,
            BitSequenceError::InvalidHex(hex::FromHexError::OddLength)
        ));
    }
}
