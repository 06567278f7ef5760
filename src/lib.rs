//! `dna-fountain` encodes binary messages into DNA strands with a fountain
//! code and decodes them back.
//!
//! A message splits into fixed-size chunks; every entry of a shared
//! seed/degree table produces one droplet whose payload XOR-combines the
//! chunks its seed selects. Droplets transcode to the four-letter nucleotide
//! alphabet and concatenate into a strand. Decoding re-derives every
//! selection from the seeds alone and peels the chunks back out.
//!
//! # Encode a message into a strand
//! ```
//! use dna_fountain::DegreeTable;
//! let table = DegreeTable::reference();
//! let strand = dna_fountain::encode("0000000100100011", 4, &table).unwrap();
//! assert_eq!(
//!     strand,
//!     "AAAGACACAGACATAGCAAGCCAACGACCTAAGAAAGCATGGAGGTATTAAATCAGTGATTTAA"
//! );
//! ```
//!
//! # Decode a strand back into the message
//!
//! The chunk count is not part of the strand; the receiver must know it.
//! ```
//! use dna_fountain::DegreeTable;
//! let table = DegreeTable::reference();
//! let strand = dna_fountain::encode("0000000100100011", 4, &table).unwrap();
//! let decoded = dna_fountain::decode(&strand, 4, 4, &table).unwrap();
//! assert!(decoded.is_complete());
//! assert_eq!(
//!     dna_fountain::bits::format(&decoded.message()),
//!     "0000000100100011"
//! );
//! ```
//!
//! # Work with droplets directly
//! ```
//! use dna_fountain::DegreeTable;
//! let table = DegreeTable::reference();
//! let message = dna_fountain::bits::parse("0100110100101110").unwrap();
//! let droplets = dna_fountain::fountain::encode(&message, 4, &table).unwrap();
//! assert_eq!(droplets.len(), table.len());
//! let decoded = dna_fountain::fountain::decode(&droplets, 4, 4, &table).unwrap();
//! assert_eq!(decoded.message(), message);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod bits;
pub mod codec;
pub mod constants;
pub mod fountain;
pub mod nucleotides;
pub mod table;
pub mod xoshiro;

pub use self::codec::decode;
pub use self::codec::encode;
pub use self::codec::SegmentLayout;
pub use self::fountain::Droplet;
pub use self::fountain::Reconstruction;
pub use self::table::DegreeTable;
