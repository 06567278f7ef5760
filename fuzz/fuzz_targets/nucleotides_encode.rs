use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let bits: Vec<bool> = data
                .iter()
                .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
                .collect();
            let encoded = dna_fountain::nucleotides::encode(&bits).unwrap();
            let decoded = dna_fountain::nucleotides::decode(&encoded).unwrap();
            assert_eq!(bits, decoded);
        });
    }
}
