//! Whole messages as DNA strands: segment layout, strand encoding and
//! strand decoding.
//!
//! Every droplet becomes one fixed-length segment, seed bases first and
//! payload bases second, and the segments concatenate into a single strand.
//! The chunk count travels out of band, nothing in the strand encodes it.
//!
//! ```
//! use dna_fountain::DegreeTable;
//! let table = DegreeTable::reference();
//! let strand = dna_fountain::encode("0000000100100011", 4, &table).unwrap();
//! assert_eq!(
//!     strand,
//!     "AAAGACACAGACATAGCAAGCCAACGACCTAAGAAAGCATGGAGGTATTAAATCAGTGATTTAA"
//! );
//! let decoded = dna_fountain::decode(&strand, 4, 4, &table).unwrap();
//! assert!(decoded.is_complete());
//! assert_eq!(
//!     dna_fountain::bits::format(&decoded.message()),
//!     "0000000100100011"
//! );
//! ```

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

/// The errors that can be returned when encoding or decoding strands.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Chunk sizes must be positive and even to transcode cleanly.
    ChunkSize(usize),
    /// The table's seed width must be even to transcode cleanly.
    SeedWidth(u32),
    /// The message contains a character other than `'0'` or `'1'`.
    Bits(crate::bits::Error),
    /// A segment contains a character outside the alphabet.
    Nucleotides(crate::nucleotides::Error),
    /// The droplet layer rejected the input.
    Fountain(crate::fountain::Error),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ChunkSize(size) => {
                write!(f, "chunk size {} is not a positive even bit count", size)
            }
            Self::SeedWidth(bits) => write!(f, "seed width {} is not an even bit count", bits),
            Self::Bits(e) => write!(f, "{}", e),
            Self::Nucleotides(e) => write!(f, "{}", e),
            Self::Fountain(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<crate::bits::Error> for Error {
    fn from(e: crate::bits::Error) -> Self {
        Self::Bits(e)
    }
}

impl From<crate::nucleotides::Error> for Error {
    fn from(e: crate::nucleotides::Error) -> Self {
        Self::Nucleotides(e)
    }
}

impl From<crate::fountain::Error> for Error {
    fn from(e: crate::fountain::Error) -> Self {
        Self::Fountain(e)
    }
}

/// The derived segment geometry for a chunk size and degree table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentLayout {
    seed_nucleotides: usize,
    payload_nucleotides: usize,
}

impl SegmentLayout {
    /// Derives the layout: half the seed bits, then half the chunk bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChunkSize`] or [`Error::SeedWidth`] unless the chunk
    /// size is positive and even and the table's seed width is even.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(chunk_size: usize, table: &crate::table::DegreeTable) -> Result<Self, Error> {
        if chunk_size == 0 || chunk_size % 2 != 0 {
            return Err(Error::ChunkSize(chunk_size));
        }
        let seed_bits = table.seed_bits();
        if seed_bits % 2 != 0 {
            return Err(Error::SeedWidth(seed_bits));
        }
        Ok(Self {
            seed_nucleotides: (seed_bits / 2) as usize,
            payload_nucleotides: chunk_size / 2,
        })
    }

    /// Bases holding the seed, at the front of each segment.
    #[must_use]
    pub fn seed_nucleotides(&self) -> usize {
        self.seed_nucleotides
    }

    /// Bases holding the payload, after the seed.
    #[must_use]
    pub fn payload_nucleotides(&self) -> usize {
        self.payload_nucleotides
    }

    /// Total bases per segment.
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.seed_nucleotides + self.payload_nucleotides
    }
}

/// Encodes a bit-string message into one DNA strand, one segment per table
/// entry.
///
/// # Errors
///
/// Returns an error if the geometry doesn't transcode cleanly
/// ([`Error::ChunkSize`], [`Error::SeedWidth`]), the message isn't binary
/// ([`Error::Bits`]) or the message is empty ([`Error::Fountain`]).
pub fn encode(
    message: &str,
    chunk_size: usize,
    table: &crate::table::DegreeTable,
) -> Result<String, Error> {
    let layout = SegmentLayout::new(chunk_size, table)?;
    let message = crate::bits::parse(message)?;
    let droplets = crate::fountain::encode(&message, chunk_size, table)?;
    let mut strand = String::with_capacity(droplets.len() * layout.len());
    for droplet in &droplets {
        strand.push_str(&droplet.to_dna(table.seed_bits())?);
    }
    Ok(strand)
}

/// Decodes a DNA strand back into message bits.
///
/// The strand is sliced into fixed-size segments; a trailing fragment
/// shorter than one segment holds no decodable droplet and is discarded.
/// The chunk count is out-of-band knowledge the caller must supply.
///
/// # Errors
///
/// Returns an error if the geometry doesn't transcode cleanly, a segment
/// contains a character outside the alphabet ([`Error::Nucleotides`]) or a
/// seed is not in the table ([`Error::Fountain`]).
pub fn decode(
    strand: &str,
    num_chunks: usize,
    chunk_size: usize,
    table: &crate::table::DegreeTable,
) -> Result<crate::fountain::Reconstruction, Error> {
    let layout = SegmentLayout::new(chunk_size, table)?;
    let bases: Vec<char> = strand.chars().collect();
    let mut droplets = Vec::with_capacity(bases.len() / layout.len());
    for segment in bases.chunks(layout.len()) {
        if segment.len() < layout.len() {
            log::debug!(
                "discarding {} trailing bases, shorter than one segment",
                segment.len()
            );
            break;
        }
        let segment: String = segment.iter().collect();
        droplets.push(crate::fountain::Droplet::from_dna(
            &segment,
            layout.seed_nucleotides(),
        )?);
    }
    Ok(crate::fountain::decode(
        &droplets, num_chunks, chunk_size, table,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::DegreeTable;

    #[test]
    fn test_layout() {
        let table = DegreeTable::reference();
        let layout = SegmentLayout::new(4, &table).unwrap();
        assert_eq!(layout.seed_nucleotides(), 2);
        assert_eq!(layout.payload_nucleotides(), 2);
        assert_eq!(layout.len(), 4);
        assert_eq!(
            SegmentLayout::new(0, &table).unwrap_err(),
            Error::ChunkSize(0)
        );
        assert_eq!(
            SegmentLayout::new(5, &table).unwrap_err(),
            Error::ChunkSize(5)
        );
        let odd = DegreeTable::new(&[(0, 1)], 3).unwrap();
        assert_eq!(SegmentLayout::new(4, &odd).unwrap_err(), Error::SeedWidth(3));
    }

    #[test]
    fn test_strand_roundtrip() {
        let table = DegreeTable::reference();
        let message = "01010011110001001110011001001001";
        let strand = encode(message, 4, &table).unwrap();
        assert_eq!(
            strand,
            "AAGGACTTAGTAATTGCAAGCCTGCGCTCTATGATAGCCAGGTGGTCTTATTTCTCTGCATTTT"
        );
        let decoded = decode(&strand, 8, 4, &table).unwrap();
        assert!(decoded.is_complete());
        assert_eq!(crate::bits::format(&decoded.message()), message);
    }

    #[test]
    fn test_trailing_fragment_discarded() {
        let table = DegreeTable::reference();
        let message = "0000000100100011";
        let strand = encode(message, 4, &table).unwrap();
        // two stray bases at the end don't form a segment
        let decoded = decode(&(strand + "GT"), 4, 4, &table).unwrap();
        assert!(decoded.is_complete());
        assert_eq!(crate::bits::format(&decoded.message()), message);
    }

    #[test]
    fn test_invalid_inputs() {
        let table = DegreeTable::reference();
        assert_eq!(
            encode("0102", 4, &table).unwrap_err(),
            Error::Bits(crate::bits::Error::InvalidBit('2'))
        );
        assert_eq!(
            decode("ACGU", 4, 4, &table).unwrap_err(),
            Error::Nucleotides(crate::nucleotides::Error::InvalidNucleotide('U'))
        );
        assert_eq!(
            encode("", 4, &table).unwrap_err(),
            Error::Fountain(crate::fountain::Error::EmptyInput)
        );
    }

    #[test]
    fn test_custom_table_strand() {
        let table = DegreeTable::new(&[(0b00, 1), (0b01, 2)], 2).unwrap();
        let strand = encode("01001101", 4, &table).unwrap();
        assert_eq!(strand, "ATCCGC");
        let decoded = decode(&strand, 2, 4, &table).unwrap();
        assert!(decoded.is_complete());
        assert_eq!(crate::bits::format(&decoded.message()), "01001101");
        // a full segment with a seed the table doesn't know is an error, not
        // a skip
        assert_eq!(
            decode(&(strand + "TAA"), 2, 4, &table).unwrap_err(),
            Error::Fountain(crate::fountain::Error::UnknownSeed(3))
        );
    }

    #[test]
    fn test_derived_message_roundtrip() {
        let table = DegreeTable::reference();
        let message = crate::xoshiro::test_utils::make_bits("Wolf", 32);
        let strand = encode(&message, 4, &table).unwrap();
        let decoded = decode(&strand, 8, 4, &table).unwrap();
        assert!(decoded.is_complete());
        assert_eq!(crate::bits::format(&decoded.message()), message);
    }

    #[test]
    fn test_partial_strand() {
        let table = DegreeTable::reference();
        let message = "0100000110101111000001011010010111001010";
        let strand = encode(message, 4, &table).unwrap();
        let decoded = decode(&strand, 10, 4, &table).unwrap();
        assert!(!decoded.is_complete());
        assert_eq!(decoded.missing(), &[0, 4]);
    }
}
