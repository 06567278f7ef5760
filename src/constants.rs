//! Static tables shared by the codec: the reference degree assignment and
//! the nucleotide alphabet.

use phf::phf_map;

/// Width in bits of the seeds in [`DEGREE_TABLE`].
pub const SEED_BITS: u32 = 4;

/// The reference seed/degree assignment, one entry per 4-bit seed.
///
/// The degree is the number of chunks XOR-combined into the droplet carrying
/// that seed. The assignment is part of the codec contract: sender and
/// receiver must agree on it for the chunk selection to be reproducible.
pub const DEGREE_TABLE: [(u32, u8); 16] = [
    (0b0000, 2),
    (0b0001, 2),
    (0b0010, 1),
    (0b0011, 1),
    (0b0100, 2),
    (0b0101, 4),
    (0b0110, 2),
    (0b0111, 1),
    (0b1000, 6),
    (0b1001, 1),
    (0b1010, 1),
    (0b1011, 2),
    (0b1100, 7),
    (0b1101, 2),
    (0b1110, 1),
    (0b1111, 4),
];

/// Nucleotide for each 2-bit value: `00`, `01`, `10`, `11` in order.
pub const NUCLEOTIDES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Reverse lookup from nucleotide to its 2-bit value.
pub static NUCLEOTIDE_IDXS: phf::Map<char, u8> = phf_map! {
    'A' => 0,
    'C' => 1,
    'G' => 2,
    'T' => 3,
};
