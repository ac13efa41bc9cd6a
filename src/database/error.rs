/// Errors that can occur while loading a sequence database
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// I/O error, including FASTA syntax errors reported by the reader
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A header line without an identifier
    #[error("empty FASTA header in record {0}")]
    EmptyIdentifier(usize),

    /// Sequence bytes that are not valid text
    #[error("sequence of '{0}' is not valid UTF-8")]
    InvalidSequence(String),

    /// The same identifier was defined twice
    #[error("duplicate sequence identifier '{identifier}' in record {record}")]
    DuplicateIdentifier {
        /// Repeated identifier
        identifier: String,
        /// 1-based index of the second definition
        record: usize,
    },
}
