use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a synonym lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read synonyms file {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Errors that can occur during tuple generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TupleError {
    #[error("tuple size must be at least 1")]
    InvalidTupleSize,
    #[error("cannot generate tuples: document has {words} words but tuple size is {tuple_size}")]
    InsufficientWords { words: usize, tuple_size: usize },
}

/// Errors that can occur while scoring two tuple sequences.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("reference tuple sequence is empty")]
    EmptyReference,
}

/// Errors surfaced by the end-to-end comparison pipeline.
///
/// No stage terminates the process; every fatal condition is returned as a
/// value and the binary decides the exit code.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid comparison config: {0}")]
    InvalidConfig(String),
    #[error("lexicon failure: {0}")]
    Lexicon(#[from] LexiconError),
    #[error("failed to read document {}: {source}", path.display())]
    DocumentIo { path: PathBuf, source: io::Error },
    #[error("tuple generation failure: {0}")]
    Tuple(#[from] TupleError),
    #[error("scoring failure: {0}")]
    Score(#[from] ScoreError),
}
