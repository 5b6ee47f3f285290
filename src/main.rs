use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use extract_draft::{extract_draft, ExtractOptions, RAGTAG_MARKER};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "extract_draft")]
#[command(about = "Keep RagTag-scaffolded sequences from a FASTA assembly")]
struct Args {
    #[arg(value_name = "FASTA", help = "Input FASTA file (.gz accepted)")]
    fasta_path: PathBuf,

    #[arg(
        value_name = "SAMPLE_ID",
        help = "Sample ID; output is <SAMPLE_ID>.reordered.fasta"
    )]
    sample_id: String,

    #[arg(
        short = 'o',
        long,
        help = "Directory for the output file [default: current directory]"
    )]
    outdir: Option<PathBuf>,

    #[arg(
        short = 'm',
        long,
        default_value = RAGTAG_MARKER,
        help = "Substring a record ID must contain to be kept"
    )]
    marker: String,

    #[arg(short = 'c', long, default_value = "false", help = "Compress output file with gzip")]
    compress: bool,

    #[arg(short = 'v', long, default_value = "false", help = "Verbose output")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let opts = ExtractOptions {
        fasta_path: args.fasta_path,
        sample_id: args.sample_id,
        out_dir: args.outdir,
        marker: args.marker,
        compress: args.compress,
    };

    let summary = extract_draft(&opts)?;

    info!("Records read: {}", summary.total_records);
    info!("Records kept: {}", summary.kept_records);
    info!("Output file: {}", summary.output.display());

    Ok(())
}
