//! The fountain codec itself: message partitioning, droplet generation and
//! the peeling decoder.
//!
//! A message is split into fixed-size chunks. Each table entry yields one
//! droplet: the seed keys a random generator which selects `degree` distinct
//! chunks, and the droplet payload is their XOR. Decoding re-derives every
//! selection from the seeds, takes the payloads of single-chunk droplets
//! directly and then repeatedly peels droplets down to one unknown chunk
//! until the message is rebuilt.
//!
//! ```
//! use dna_fountain::DegreeTable;
//! let table = DegreeTable::reference();
//! let message = dna_fountain::bits::parse("0000000100100011").unwrap();
//! let droplets = dna_fountain::fountain::encode(&message, 4, &table).unwrap();
//! assert_eq!(droplets.len(), 16);
//! let decoded = dna_fountain::fountain::decode(&droplets, 4, 4, &table).unwrap();
//! assert!(decoded.is_complete());
//! assert_eq!(decoded.message(), message);
//! ```

extern crate alloc;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// The errors that can be returned when encoding or decoding droplets.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Chunks must be at least one bit wide.
    InvalidChunkSize,
    /// There is nothing to combine, the message is empty.
    EmptyInput,
    /// A droplet carries a seed the degree table doesn't contain.
    UnknownSeed(u32),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidChunkSize => write!(f, "chunk size must be at least one bit"),
            Self::EmptyInput => write!(f, "nothing to combine"),
            Self::UnknownSeed(seed) => write!(f, "seed {} is not in the degree table", seed),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Splits `data` into consecutive `chunk_size`-bit chunks. The final chunk
/// is kept even when the data doesn't divide evenly and is then shorter than
/// the rest.
///
/// # Panics
///
/// Panics if `chunk_size` is zero.
#[must_use]
pub fn partition(data: &[bool], chunk_size: usize) -> Vec<Vec<bool>> {
    data.chunks(chunk_size).map(|c| c.to_vec()).collect()
}

/// XOR-combines bit chunks as right-aligned binary numbers.
///
/// Operands narrower than the result are zero-extended on the left, so the
/// combination is order-independent. The result is the combined value at its
/// natural width, left-padded with zeros to at least `width` bits.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `chunks` is empty.
pub fn xor_chunks(chunks: &[Vec<bool>], width: usize) -> Result<Vec<bool>, Error> {
    if chunks.is_empty() {
        return Err(Error::EmptyInput);
    }
    let full = width.max(chunks.iter().map(Vec::len).max().unwrap_or(0));
    let mut result = vec![false; full];
    for chunk in chunks {
        let offset = full - chunk.len();
        for (i, &bit) in chunk.iter().enumerate() {
            result[offset + i] ^= bit;
        }
    }
    let surplus = result.len() - width;
    let keep = result[..surplus]
        .iter()
        .position(|&bit| bit)
        .unwrap_or(surplus);
    Ok(result.split_off(keep))
}

/// Derives the chunk index set for a droplet.
///
/// The seed keys the generator, the chunk indexes are shuffled and the first
/// `degree` of them (all of them if the degree exceeds the chunk count) form
/// the selection. Sender and receiver call this with the same inputs and
/// obtain the same set.
#[must_use]
pub fn choose_chunks(seed: u32, chunk_count: usize, degree: usize) -> Vec<usize> {
    let mut xoshiro = crate::xoshiro::Xoshiro256::from_droplet_seed(seed);
    let indexes = (0..chunk_count).collect();
    let mut shuffled = xoshiro.shuffled(indexes);
    shuffled.truncate(degree);
    shuffled
}

/// A single droplet: the seed identifying the chunk selection and the
/// XOR-combined payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Droplet {
    seed: u32,
    data: Vec<bool>,
}

impl Droplet {
    #[must_use]
    pub fn new(seed: u32, data: Vec<bool>) -> Self {
        Self { seed, data }
    }

    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[must_use]
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Transcodes the droplet into one DNA segment, seed bases first,
    /// payload bases second.
    ///
    /// # Errors
    ///
    /// Returns an error if the combined seed and payload bit count is odd.
    pub fn to_dna(&self, seed_bits: u32) -> Result<String, crate::nucleotides::Error> {
        let mut bits = crate::bits::from_value(self.seed, seed_bits);
        bits.extend_from_slice(&self.data);
        crate::nucleotides::encode(&bits)
    }

    /// Rebuilds a droplet from one DNA segment whose first
    /// `seed_nucleotides` bases hold the seed.
    ///
    /// # Errors
    ///
    /// Returns an error on a character outside the alphabet or a segment too
    /// short to hold the seed.
    pub fn from_dna(
        segment: &str,
        seed_nucleotides: usize,
    ) -> Result<Self, crate::nucleotides::Error> {
        let bits = crate::nucleotides::decode(segment)?;
        if bits.len() < seed_nucleotides * 2 {
            return Err(crate::nucleotides::Error::InvalidLength);
        }
        let (seed, data) = bits.split_at(seed_nucleotides * 2);
        Ok(Self {
            seed: crate::bits::to_value(seed),
            data: data.to_vec(),
        })
    }
}

/// Encodes `message` into one droplet per table entry, in ascending seed
/// order.
///
/// The droplet count is fixed by the table and independent of the message
/// length.
///
/// # Errors
///
/// Returns [`Error::InvalidChunkSize`] if `chunk_size` is zero and
/// [`Error::EmptyInput`] if `message` is empty.
pub fn encode(
    message: &[bool],
    chunk_size: usize,
    table: &crate::table::DegreeTable,
) -> Result<Vec<Droplet>, Error> {
    if chunk_size == 0 {
        return Err(Error::InvalidChunkSize);
    }
    let chunks = partition(message, chunk_size);
    let mut droplets = Vec::with_capacity(table.len());
    for (seed, degree) in table.entries() {
        let selected: Vec<Vec<bool>> = choose_chunks(seed, chunks.len(), degree)
            .into_iter()
            .map(|index| chunks[index].clone())
            .collect();
        let data = xor_chunks(&selected, chunk_size)?;
        log::debug!("droplet seed {} combines {} chunks", seed, selected.len());
        droplets.push(Droplet::new(seed, data));
    }
    Ok(droplets)
}

/// The outcome of a decode: either every chunk was recovered or some are
/// missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconstruction {
    /// Every chunk was resolved; the payload is the whole message.
    Complete(Vec<bool>),
    /// The droplet set couldn't resolve every chunk. The payload
    /// concatenates the resolved chunks only and `missing` lists the
    /// unresolved chunk indexes in ascending order.
    Partial {
        bits: Vec<bool>,
        missing: Vec<usize>,
    },
}

impl Reconstruction {
    /// The concatenated resolved chunks. On a partial reconstruction this is
    /// shorter than the original message, check [`Self::is_complete`] before
    /// trusting it.
    #[must_use]
    pub fn message(&self) -> Vec<bool> {
        match self {
            Self::Complete(bits) | Self::Partial { bits, .. } => bits.clone(),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// The unresolved chunk indexes, empty when complete.
    #[must_use]
    pub fn missing(&self) -> &[usize] {
        match self {
            Self::Complete(_) => &[],
            Self::Partial { missing, .. } => missing,
        }
    }
}

/// Rebuilds a message from droplets.
///
/// Chunk selections are re-derived from the droplet seeds. Payloads of
/// single-chunk droplets are taken over directly; afterwards `num_chunks`
/// peeling rounds visit the droplets in the order given and XOR the known
/// chunks back out of any droplet that is one chunk away from resolved.
/// Chunks resolved earlier in a round are visible later in the same round.
///
/// `num_chunks` and `chunk_size` travel out of band, nothing in the droplets
/// encodes them.
///
/// # Errors
///
/// Returns [`Error::InvalidChunkSize`] if `chunk_size` is zero and
/// [`Error::UnknownSeed`] if a droplet's seed is not in the table.
pub fn decode(
    droplets: &[Droplet],
    num_chunks: usize,
    chunk_size: usize,
    table: &crate::table::DegreeTable,
) -> Result<Reconstruction, Error> {
    if chunk_size == 0 {
        return Err(Error::InvalidChunkSize);
    }
    let mut selections = Vec::with_capacity(droplets.len());
    for droplet in droplets {
        let degree = table
            .degree(droplet.seed)
            .ok_or(Error::UnknownSeed(droplet.seed))?;
        selections.push(choose_chunks(droplet.seed, num_chunks, degree));
    }

    let mut chunks: Vec<Option<Vec<bool>>> = vec![None; num_chunks];
    for (droplet, selection) in droplets.iter().zip(&selections) {
        if let &[index] = selection.as_slice() {
            log::debug!("chunk {} taken from droplet seed {}", index, droplet.seed);
            chunks[index] = Some(droplet.data.clone());
        }
    }

    for _ in 0..num_chunks {
        for (droplet, selection) in droplets.iter().zip(&selections) {
            let unknown: Vec<usize> = selection
                .iter()
                .copied()
                .filter(|&index| chunks[index].is_none())
                .collect();
            if let &[index] = unknown.as_slice() {
                let mut operands = vec![droplet.data.clone()];
                operands.extend(
                    selection
                        .iter()
                        .filter(|&&i| i != index)
                        .filter_map(|&i| chunks[i].clone()),
                );
                log::debug!("chunk {} peeled from droplet seed {}", index, droplet.seed);
                chunks[index] = Some(xor_chunks(&operands, chunk_size)?);
            }
        }
    }

    let mut bits = Vec::with_capacity(num_chunks * chunk_size);
    let mut missing = Vec::new();
    for (index, chunk) in chunks.iter().enumerate() {
        match chunk {
            Some(chunk) => bits.extend_from_slice(chunk),
            None => missing.push(index),
        }
    }
    if missing.is_empty() {
        Ok(Reconstruction::Complete(bits))
    } else {
        log::warn!("{} of {} chunks left unresolved", missing.len(), num_chunks);
        Ok(Reconstruction::Partial { bits, missing })
    }
}
