// lib.rs - 库函数

pub mod fasta;

use anyhow::Result;
use bio::io::fasta::Record;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Marker RagTag appends to identifiers of scaffolded/reordered sequences.
pub const RAGTAG_MARKER: &str = "RagTag";

/// Literal, case-sensitive substring test on a record identifier.
pub fn has_marker(id: &str, marker: &str) -> bool {
    id.contains(marker)
}

/// 保留 id 含有 marker 的记录，顺序不变
///
/// Only the identifier is inspected; a marker that appears in the
/// description alone does not keep the record.
pub fn filter_by_marker(records: Vec<Record>, marker: &str) -> Vec<Record> {
    records
        .into_iter()
        .filter(|r| {
            let keep = has_marker(r.id(), marker);
            debug!("{} {}", if keep { "keep" } else { "drop" }, r.id());
            keep
        })
        .collect()
}

pub fn output_file_name(sample_id: &str, compress: bool) -> String {
    let extension = if compress { ".fasta.gz" } else { ".fasta" };
    format!("{}.reordered{}", sample_id, extension)
}

pub fn output_path(out_dir: Option<&Path>, sample_id: &str, compress: bool) -> PathBuf {
    let name = output_file_name(sample_id, compress);
    match out_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub fasta_path: PathBuf,
    pub sample_id: String,
    pub out_dir: Option<PathBuf>,
    pub marker: String,
    pub compress: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            fasta_path: PathBuf::new(),
            sample_id: String::new(),
            out_dir: None,
            marker: RAGTAG_MARKER.to_string(),
            compress: false,
        }
    }
}

impl ExtractOptions {
    pub fn new(fasta_path: impl Into<PathBuf>, sample_id: impl Into<String>) -> Self {
        ExtractOptions {
            fasta_path: fasta_path.into(),
            sample_id: sample_id.into(),
            ..Default::default()
        }
    }

    pub fn output_path(&self) -> PathBuf {
        output_path(self.out_dir.as_deref(), &self.sample_id, self.compress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    pub total_records: usize,
    pub kept_records: usize,
    pub output: PathBuf,
}

/// Read `fasta_path`, keep the marker-bearing records and write them to
/// `{sample_id}.reordered.fasta`.
///
/// The output is only touched once the whole input has parsed, so a bad
/// input never leaves a file behind. A write that fails after the output
/// was opened removes it. An existing output is overwritten.
pub fn extract_draft(opts: &ExtractOptions) -> Result<ExtractSummary> {
    info!("Reading {}", opts.fasta_path.display());
    let records = fasta::read_records(&opts.fasta_path)?;
    let total_records = records.len();

    let kept = filter_by_marker(records, &opts.marker);
    if kept.is_empty() {
        info!(
            "No record id in {} contains {:?}; writing an empty file",
            opts.fasta_path.display(),
            opts.marker
        );
    }

    let output = opts.output_path();
    fasta::write_records(&output, &kept)?;

    Ok(ExtractSummary {
        total_records,
        kept_records: kept.len(),
        output,
    })
}
