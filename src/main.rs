use clap::Parser;
use hanfix::{OutputError, StyleSheet, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hanfix")]
#[command(version)]
#[command(about = "Generate a JSON style fixture for the CJK Unified Ideographs block", long_about = None)]
struct Cli {
    /// Seed the random source for a reproducible fixture
    #[arg(long)]
    seed: Option<u64>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let sheet = match cli.seed {
        Some(seed) => generate(&mut StdRng::seed_from_u64(seed)),
        None => generate(&mut rand::rng()),
    };

    match cli.output {
        Some(path) => {
            let file = fs::File::create(&path)?;
            write_sheet(&sheet, file, cli.pretty)?;
        }
        None => {
            let stdout = io::stdout();
            write_sheet(&sheet, stdout.lock(), cli.pretty)?;
        }
    }

    Ok(())
}

fn write_sheet<W: Write>(sheet: &StyleSheet, sink: W, pretty: bool) -> Result<(), OutputError> {
    if pretty {
        sheet.write_json_pretty(sink)
    } else {
        sheet.write_json(sink)
    }
}
