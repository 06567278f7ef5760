//! Transcode between bit vectors and the four-letter nucleotide alphabet.
//!
//! Each pair of bits maps to one base: `00` to `A`, `01` to `C`, `10` to `G`
//! and `11` to `T`.
//!
//! ```
//! let bits = dna_fountain::bits::parse("0001101100").unwrap();
//! let dna = dna_fountain::nucleotides::encode(&bits).unwrap();
//! assert_eq!(dna, "ACGTA");
//! assert_eq!(dna_fountain::nucleotides::decode(&dna).unwrap(), bits);
//! ```

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

/// The two different errors that can be returned when transcoding.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The sequence contains a character outside `A`, `C`, `G`, `T`.
    InvalidNucleotide(char),
    /// Only an even number of bits maps onto whole bases.
    InvalidLength,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidNucleotide(c) => write!(f, "invalid nucleotide: {:?}", c),
            Self::InvalidLength => write!(f, "bit count must be even"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Encodes a bit vector into a nucleotide sequence, two bits per base.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] if the number of bits is odd.
pub fn encode(bits: &[bool]) -> Result<String, Error> {
    if bits.len() % 2 != 0 {
        return Err(Error::InvalidLength);
    }
    Ok(bits
        .chunks(2)
        .map(|pair| {
            crate::constants::NUCLEOTIDES[(usize::from(pair[0]) << 1) | usize::from(pair[1])]
        })
        .collect())
}

/// Decodes a nucleotide sequence back into its bit vector, two bits per base.
///
/// # Errors
///
/// Returns [`Error::InvalidNucleotide`] on any character outside the
/// alphabet; lower-case bases are not accepted.
pub fn decode(dna: &str) -> Result<Vec<bool>, Error> {
    let mut bits = Vec::with_capacity(dna.len() * 2);
    for c in dna.chars() {
        let value = crate::constants::NUCLEOTIDE_IDXS
            .get(&c)
            .copied()
            .ok_or(Error::InvalidNucleotide(c))?;
        bits.push(value & 0b10 != 0);
        bits.push(value & 0b01 != 0);
    }
    Ok(bits)
}
