use honggfuzz::fuzz;

use dna_fountain::DegreeTable;

fn main() {
    loop {
        fuzz!(|data: &str| {
            dna_fountain::nucleotides::decode(data).ok();
            let table = DegreeTable::reference();
            dna_fountain::decode(data, 8, 4, &table).ok();
        });
    }
}
