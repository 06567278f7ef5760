//! The seed/degree table driving droplet generation.
//!
//! Every droplet carries a seed and the table maps each seed to its degree,
//! the number of chunks combined into that droplet. The table is part of the
//! codec contract: sender and receiver pass the same table explicitly, it is
//! never ambient state.
//!
//! ```
//! use dna_fountain::DegreeTable;
//! let table = DegreeTable::reference();
//! assert_eq!(table.len(), 16);
//! assert_eq!(table.degree(0b1100), Some(7));
//! assert_eq!(table.degree(0b10000), None);
//! ```

extern crate alloc;
use alloc::vec::Vec;

/// The errors that can be returned when building a table.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The seed carries a degree of zero, which selects nothing.
    ZeroDegree(u32),
    /// The seed appears more than once.
    DuplicateSeed(u32),
    /// The seed doesn't fit the declared seed width.
    SeedOutOfRange(u32),
    /// The seed width must be between 1 and 32 bits.
    InvalidSeedWidth(u32),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroDegree(seed) => write!(f, "seed {} has degree zero", seed),
            Self::DuplicateSeed(seed) => write!(f, "seed {} appears more than once", seed),
            Self::SeedOutOfRange(seed) => write!(f, "seed {} exceeds the seed width", seed),
            Self::InvalidSeedWidth(bits) => write!(f, "invalid seed width: {} bits", bits),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// An immutable assignment of droplet degrees to seed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeTable {
    entries: Vec<(u32, u8)>,
    seed_bits: u32,
}

impl DegreeTable {
    /// The 16-entry reference table with 4-bit seeds.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            entries: crate::constants::DEGREE_TABLE.to_vec(),
            seed_bits: crate::constants::SEED_BITS,
        }
    }

    /// Builds a table from explicit entries and a seed width in bits.
    ///
    /// Entries are stored in ascending seed order; droplets are emitted in
    /// that order.
    ///
    /// # Errors
    ///
    /// Returns an error on a zero degree, a repeated seed, a seed wider than
    /// `seed_bits`, or a seed width outside 1 to 32 bits.
    pub fn new(entries: &[(u32, u8)], seed_bits: u32) -> Result<Self, Error> {
        if seed_bits == 0 || seed_bits > 32 {
            return Err(Error::InvalidSeedWidth(seed_bits));
        }
        let mut entries = entries.to_vec();
        entries.sort_unstable_by_key(|&(seed, _)| seed);
        for window in entries.windows(2) {
            if window[0].0 == window[1].0 {
                return Err(Error::DuplicateSeed(window[0].0));
            }
        }
        for &(seed, degree) in &entries {
            if degree == 0 {
                return Err(Error::ZeroDegree(seed));
            }
            if seed_bits < 32 && seed >> seed_bits != 0 {
                return Err(Error::SeedOutOfRange(seed));
            }
        }
        Ok(Self { entries, seed_bits })
    }

    /// Looks up the degree assigned to `seed`.
    #[must_use]
    pub fn degree(&self, seed: u32) -> Option<usize> {
        self.entries
            .binary_search_by_key(&seed, |&(s, _)| s)
            .ok()
            .map(|index| usize::from(self.entries[index].1))
    }

    /// Iterates the entries in ascending seed order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.entries
            .iter()
            .map(|&(seed, degree)| (seed, usize::from(degree)))
    }

    /// The number of entries, and therefore of droplets per message.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The width in bits of every seed in this table.
    #[must_use]
    pub fn seed_bits(&self) -> u32 {
        self.seed_bits
    }
}
