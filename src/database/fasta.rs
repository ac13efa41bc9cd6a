use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use bio::io::fasta;
use log::debug;

use super::{DatabaseError, SequenceDatabase};

/// In-memory protein sequences loaded from a FASTA file.
///
/// Records are keyed on the first whitespace-delimited token of the header line, so
/// `>sp|P02769|ALBU_BOVIN Albumin` is found under `sp|P02769|ALBU_BOVIN`.
#[derive(Debug, Clone, Default)]
pub struct FastaDatabase {
    sequences: HashMap<String, String>,
}

impl FastaDatabase {
    /// Load a FASTA file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load FASTA records from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatabaseError> {
        let mut sequences = HashMap::new();

        for (index, record) in fasta::Reader::new(reader).records().enumerate() {
            let record = record?;
            let number = index + 1;

            let identifier = record.id();
            if identifier.is_empty() {
                return Err(DatabaseError::EmptyIdentifier(number));
            }
            if sequences.contains_key(identifier) {
                return Err(DatabaseError::DuplicateIdentifier {
                    identifier: identifier.to_string(),
                    record: number,
                });
            }

            let residues: Vec<u8> = record
                .seq()
                .iter()
                .copied()
                .filter(|byte| !byte.is_ascii_whitespace())
                .collect();
            let sequence = String::from_utf8(residues)
                .map_err(|_| DatabaseError::InvalidSequence(identifier.to_string()))?;
            sequences.insert(identifier.to_string(), sequence);
        }

        debug!("Loaded {} FASTA records", sequences.len());
        Ok(Self { sequences })
    }

    /// Number of sequences
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Returns true if no sequences were loaded
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Borrow a sequence by identifier
    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.sequences.get(identifier).map(String::as_str)
    }
}

impl SequenceDatabase for FastaDatabase {
    fn lookup(&self, identifier: &str) -> Option<String> {
        self.get(identifier).map(str::to_string)
    }
}

impl FromIterator<(String, String)> for FastaDatabase {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            sequences: iter.into_iter().collect(),
        }
    }
}
