use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort processing of a book or of the whole run.
///
/// Sentence-count mismatches are data-integrity failures: the two output
/// lists are only usable as a corpus while they line up pair for pair, so
/// nothing is padded or truncated to paper over a divergence.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("chapter {chapter}: sentence count mismatch ({english} english, {quenya} quenya)")]
    ChapterMismatch {
        chapter: usize,
        english: usize,
        quenya: usize,
    },

    #[error("book sentence lists differ in length ({english} english, {quenya} quenya)")]
    BookMismatch { english: usize, quenya: usize },

    #[error("failed to read document {path:?}: {source}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output file {path:?}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
