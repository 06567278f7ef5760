//! Parse and format the textual bit strings crossing the crate boundary.
//!
//! Messages enter and leave the codec as strings of `'0'` and `'1'`
//! characters; internally everything operates on bit vectors. This module is
//! the only place where the two representations meet.
//!
//! ```
//! let bits = dna_fountain::bits::parse("0110").unwrap();
//! assert_eq!(bits, vec![false, true, true, false]);
//! assert_eq!(dna_fountain::bits::format(&bits), "0110");
//! ```

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

/// The only error that can be returned when parsing a bit string.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The string contains a character other than `'0'` or `'1'`.
    InvalidBit(char),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidBit(c) => write!(f, "invalid bit character: {:?}", c),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Parses a string of `'0'` and `'1'` characters into a bit vector.
///
/// # Errors
///
/// Returns [`Error::InvalidBit`] on any other character.
pub fn parse(bits: &str) -> Result<Vec<bool>, Error> {
    bits.chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(Error::InvalidBit(other)),
        })
        .collect()
}

/// Formats a bit vector as a string of `'0'` and `'1'` characters.
#[must_use]
pub fn format(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

/// Expands `value` into its `width`-bit big-endian representation.
///
/// High bits beyond `width` are discarded.
#[must_use]
pub fn from_value(value: u32, width: u32) -> Vec<bool> {
    (0..width).rev().map(|i| (value >> i) & 1 == 1).collect()
}

/// Collapses up to 32 big-endian bits back into their integer value.
#[must_use]
pub fn to_value(bits: &[bool]) -> u32 {
    bits.iter().fold(0, |acc, &b| (acc << 1) | u32::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        assert_eq!(parse("").unwrap(), Vec::<bool>::new());
        assert_eq!(parse("0110").unwrap(), vec![false, true, true, false]);
        assert_eq!(
            format(&parse("0101001111000100").unwrap()),
            "0101001111000100"
        );
        assert_eq!(parse("01x1").unwrap_err(), Error::InvalidBit('x'));
        assert_eq!(parse("01 1").unwrap_err(), Error::InvalidBit(' '));
    }

    #[test]
    fn test_values() {
        assert_eq!(from_value(0b1011, 4), vec![true, false, true, true]);
        assert_eq!(from_value(2, 4), vec![false, false, true, false]);
        assert_eq!(from_value(0, 1), vec![false]);
        assert_eq!(to_value(&[true; 32]), u32::MAX);
        for seed in 0..16 {
            assert_eq!(to_value(&from_value(seed, 4)), seed);
        }
    }
}
