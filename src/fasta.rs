// fasta.rs - FASTA 读写

use anyhow::{Context, Result};
use bio::io::fasta::{self, Record};
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::warn;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

fn is_gzip(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("gz")
}

pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open input FASTA {}", path.display()))?;

    if is_gzip(path) {
        let decoder = MultiGzDecoder::new(file);
        Ok(Box::new(BufReader::with_capacity(2 << 20, decoder)))
    } else {
        Ok(Box::new(BufReader::with_capacity(2 << 20, file)))
    }
}

/// Parse every record of `path` into memory, in file order.
///
/// The file is read exactly once. The first record that fails to parse
/// aborts the whole read; no partial list is returned. Records with an
/// empty id are kept; they simply never carry a marker.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let reader = fasta::Reader::from_bufread(open_reader(path)?);

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| {
            format!("invalid FASTA in {} at record {}", path.display(), idx + 1)
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Output side: a plain or gzip-compressed buffered file.
pub enum FastaSink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl FastaSink {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("failed to create output {}", path.display()))?;
        let buffered = BufWriter::with_capacity(4 << 20, file);

        if is_gzip(path) {
            // level 1: 速度优先
            Ok(FastaSink::Gzip(GzEncoder::new(buffered, Compression::new(1))))
        } else {
            Ok(FastaSink::Plain(buffered))
        }
    }

    /// Flush everything to disk. For gzip this also writes the trailer,
    /// so a sink that is dropped without `finish` may leave a truncated file.
    pub fn finish(self) -> io::Result<()> {
        match self {
            FastaSink::Plain(mut w) => w.flush(),
            FastaSink::Gzip(enc) => enc.finish()?.flush(),
        }
    }
}

impl Write for FastaSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FastaSink::Plain(w) => w.write(buf),
            FastaSink::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FastaSink::Plain(w) => w.flush(),
            FastaSink::Gzip(w) => w.flush(),
        }
    }
}

/// Serialize `records` to `path`, creating or truncating it.
///
/// Zero records still produce a (empty) file. If writing fails after the
/// file was created, the partial file is removed; a file that could not be
/// opened is left untouched.
pub fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    let mut sink = FastaSink::create(path)?;

    if let Err(e) = write_all_records(&mut sink, records).and_then(|_| sink.finish()) {
        if let Err(rm) = fs::remove_file(path) {
            warn!("Could not remove partial output {}: {}", path.display(), rm);
        }
        return Err(e).with_context(|| format!("failed to write output {}", path.display()));
    }
    Ok(())
}

fn write_all_records(sink: &mut FastaSink, records: &[Record]) -> io::Result<()> {
    let mut writer = fasta::Writer::new(sink);
    for record in records {
        writer.write_record(record)?;
    }
    writer.flush()
}
