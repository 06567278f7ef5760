use clap::Parser;
use dna_fountain::DegreeTable;
use log::{error, info};

const MESSAGES: [&str; 11] = [
    "01010011110001001110011001001001",
    "01111000010010100110110001001110",
    "10001101110111100111000000111100",
    "11111110110010010001010110011110",
    "10001000100001011011111011101011",
    "01011010010100001110000110110110",
    "11101000111011000001001101001100",
    "01101110000100001110000001110101",
    "00100110011110010110101100100010",
    "10001010111101010000001001001011",
    "01010111010110011011001101010010",
];

#[derive(Parser)]
#[command(about = "Round-trip self-test for the DNA fountain codec")]
struct Cli {
    /// Chunk size in bits, must be even
    #[arg(long, default_value_t = 4)]
    chunk_size: usize,
    /// Test a single message instead of the built-in suite
    #[arg(long)]
    message: Option<String>,
    /// Logging level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .parse_filters(&cli.log_level)
        .init();

    let table = DegreeTable::reference();
    let messages: Vec<String> = match cli.message {
        Some(message) => vec![message],
        None => MESSAGES.iter().map(|&m| m.to_string()).collect(),
    };

    let mut passed = true;
    for message in &messages {
        info!("testing message {}", message);
        if cli.chunk_size == 0 || message.len() % cli.chunk_size != 0 {
            error!(
                "message length {} is not a multiple of chunk size {}, skipping",
                message.len(),
                cli.chunk_size
            );
            passed = false;
            continue;
        }
        let num_chunks = message.len() / cli.chunk_size;
        passed &= roundtrip(message, num_chunks, cli.chunk_size, &table)?;
    }

    if passed {
        info!("all messages round-tripped");
        Ok(())
    } else {
        anyhow::bail!("at least one message failed to round-trip")
    }
}

fn roundtrip(
    message: &str,
    num_chunks: usize,
    chunk_size: usize,
    table: &DegreeTable,
) -> anyhow::Result<bool> {
    let bits = dna_fountain::bits::parse(message)?;
    let droplets = dna_fountain::fountain::encode(&bits, chunk_size, table)?;
    let decoded = dna_fountain::fountain::decode(&droplets, num_chunks, chunk_size, table)?;
    if !decoded.is_complete() || decoded.message() != bits {
        error!(
            "droplet round trip failed, missing chunks {:?}",
            decoded.missing()
        );
        return Ok(false);
    }
    info!("droplet round trip ok ({} droplets)", droplets.len());

    let strand = dna_fountain::encode(message, chunk_size, table)?;
    info!("strand {}", strand);
    let decoded = dna_fountain::decode(&strand, num_chunks, chunk_size, table)?;
    if !decoded.is_complete() || dna_fountain::bits::format(&decoded.message()) != message {
        error!(
            "strand round trip failed, missing chunks {:?}",
            decoded.missing()
        );
        return Ok(false);
    }
    info!("strand round trip ok ({} bases)", strand.len());
    Ok(true)
}
