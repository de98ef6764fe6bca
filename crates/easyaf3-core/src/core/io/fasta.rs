use bio::io::fasta;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// An `(identifier, raw sequence)` pair as read from a FASTA record.
pub type RawPair = (String, String);

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("FASTA file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("I/O error while reading FASTA: {0}")]
    Io(#[from] io::Error),
    #[error("Record {index} ('{id}') contains non-UTF-8 sequence data")]
    Encoding { index: usize, id: String },
}

/// Reads every record from `reader`, preserving file order.
///
/// Blank lines before the first header are skipped. The identifier is the
/// first word of the header, ignoring whitespace after `>`, and may be empty.
/// Spaces inside sequence lines are dropped.
pub fn read_pairs<R: Read>(mut reader: R) -> Result<Vec<RawPair>, FastaError> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;
    let body = &content[leading_blank_len(&content)..];

    fasta::Reader::new(body)
        .records()
        .enumerate()
        .map(|(i, record)| {
            let record = record?;
            let id = header_id(&record).to_string();
            let residues: Vec<u8> = record
                .seq()
                .iter()
                .copied()
                .filter(|b| !matches!(b, b' ' | b'\r'))
                .collect();
            let sequence = String::from_utf8(residues).map_err(|_| FastaError::Encoding {
                index: i + 1,
                id: id.clone(),
            })?;
            Ok((id, sequence))
        })
        .collect()
}

fn header_id(record: &fasta::Record) -> &str {
    match record.id() {
        "" => record
            .desc()
            .and_then(|desc| desc.split_whitespace().next())
            .unwrap_or(""),
        id => id,
    }
}

fn leading_blank_len(content: &[u8]) -> usize {
    content
        .split_inclusive(|&b| b == b'\n')
        .take_while(|line| line.iter().all(u8::is_ascii_whitespace))
        .map(<[u8]>::len)
        .sum()
}

pub fn read_pairs_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawPair>, FastaError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FastaError::NotFound {
            path: path.to_path_buf(),
        },
        _ => FastaError::Io(e),
    })?;
    let pairs = read_pairs(BufReader::new(file))?;
    debug!("Read {} FASTA record(s) from {:?}", pairs.len(), path);
    Ok(pairs)
}
