use honggfuzz::fuzz;

use dna_fountain::DegreeTable;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if data.is_empty() {
                return;
            }
            // the reference droplet set resolves every message of up to nine
            // chunks
            let num_chunks = 1 + data[0] as usize % 9;
            let chunk_size = 4;
            let bits: String = data[1..]
                .iter()
                .flat_map(|&byte| {
                    (0..8)
                        .rev()
                        .map(move |i| if (byte >> i) & 1 == 1 { '1' } else { '0' })
                })
                .take(num_chunks * chunk_size)
                .collect();
            if bits.len() < num_chunks * chunk_size {
                return;
            }
            let table = DegreeTable::reference();
            let strand = dna_fountain::encode(&bits, chunk_size, &table).unwrap();
            let decoded = dna_fountain::decode(&strand, num_chunks, chunk_size, &table).unwrap();
            assert!(decoded.is_complete());
            assert_eq!(dna_fountain::bits::format(&decoded.message()), bits);
        });
    }
}
