use clap::{Parser, Subcommand};
use std::fs;
use std::io::BufReader;
use std::path::PathBuf;

use wordpack::decode::decode_records;
use wordpack::encode::pack_lines;
use wordpack::layout::MAX_WORD_LEN;

#[derive(Parser)]
#[command(name = "wordpack", about = "Word-puzzle asset packer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a CSV word list into the binary blob
    Pack {
        /// Input CSV file
        input: PathBuf,
        /// Output file (default: <input>.bin)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decode a packed blob and print its records
    Dump {
        /// Packed input file
        input: PathBuf,
        /// Answer-word length the blob was packed with
        #[arg(short, long, default_value_t = 7)]
        word_length: usize,
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack { input, output } => {
            let file = fs::File::open(&input).unwrap_or_else(|e| {
                eprintln!("Error reading {}: {e}", input.display());
                std::process::exit(1);
            });
            let packed = pack_lines(BufReader::new(file)).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            let out_path = output.unwrap_or_else(|| input.with_extension("bin"));
            fs::write(&out_path, &packed).unwrap_or_else(|e| {
                eprintln!("Error writing {}: {e}", out_path.display());
                std::process::exit(1);
            });
            eprintln!("  {} bytes written to {}", packed.len(), out_path.display());
        }
        Commands::Dump {
            input,
            word_length,
            json,
        } => {
            if word_length == 0 || word_length > MAX_WORD_LEN {
                eprintln!("Error: word length must be 1..={MAX_WORD_LEN}");
                std::process::exit(1);
            }
            let data = fs::read(&input).unwrap_or_else(|e| {
                eprintln!("Error reading {}: {e}", input.display());
                std::process::exit(1);
            });
            let records = decode_records(&data, word_length).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            if json {
                let out = serde_json::to_string_pretty(&records).unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });
                println!("{out}");
            } else {
                for (i, record) in records.iter().enumerate() {
                    println!(
                        "{i}: {} targets={:?} guesses: {}",
                        record.word,
                        record.targets,
                        record.guesses.join(" ")
                    );
                }
            }
        }
    }
}
