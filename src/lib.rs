//! Document similarity screening over synonym-normalized word N-grams.
//!
//! Two documents are compared by tokenizing each into a word stream,
//! normalizing synonyms against a shared lexicon, windowing the streams into
//! fixed-size tuples, and counting how often the first document's tuples
//! occur in the second. The resulting ratio is a plagiarism-screening
//! heuristic, not a full detector: there is no reordering detection, no
//! fuzzy matching, and no stemming beyond the user-supplied synonym table.
//!
//! [`compare_files`] runs the whole pipeline from file paths;
//! [`compare_word_streams`] is the I/O-free core for callers that already
//! hold token streams. No stage terminates the process; every failure is a
//! [`PipelineError`] value and the caller decides exit behavior.
//!
//! # Example
//!
//! ```
//! use simgram::{compare_word_streams, tokenize_line, CompareConfig, SynonymLexicon};
//!
//! let lexicon = SynonymLexicon::parse("run sprint jog\n");
//! let reference = tokenize_line("I jog every day.");
//! let candidate = tokenize_line("I run every day!");
//!
//! let outcome =
//!     compare_word_streams(&reference, &candidate, &lexicon, &CompareConfig::default())?;
//! assert_eq!(outcome.similarity, 1.0);
//! # Ok::<(), simgram::PipelineError>(())
//! ```

mod config;
mod error;
mod lexicon;
mod score;
mod token;
mod tuple;

pub use crate::config::{CompareConfig, DEFAULT_TUPLE_SIZE};
pub use crate::error::{LexiconError, PipelineError, ScoreError, TupleError};
pub use crate::lexicon::SynonymLexicon;
pub use crate::score::{distinct_match_count, match_count, score, score_distinct};
pub use crate::token::{tokenize_line, tokenize_text};
pub use crate::tuple::{Tuple, build_tuples};

use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Core comparison numbers for one ordered document pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonOutcome {
    /// Window size the tuples were generated with.
    pub tuple_size: usize,
    /// Tuple count of the reference document.
    pub reference_tuples: usize,
    /// Tuple count of the candidate document.
    pub candidate_tuples: usize,
    /// Multiplicity-weighted match count: each reference tuple contributes
    /// one count per equal candidate tuple.
    pub matched_tuples: usize,
    /// `matched_tuples / reference_tuples`. Exceeds 1.0 when candidate
    /// duplicates outnumber the reference tuples they match.
    pub similarity: f64,
    /// Fraction of reference tuples with at least one match; always in [0, 1].
    pub distinct_similarity: f64,
}

/// Full report for a file-level comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonReport {
    pub synonyms_path: String,
    pub reference_path: String,
    pub candidate_path: String,
    #[serde(flatten)]
    pub outcome: ComparisonOutcome,
}

/// Read a document and tokenize it into its word stream.
pub fn load_document_words(path: &Path) -> Result<Vec<String>, PipelineError> {
    let text = fs::read_to_string(path).map_err(|source| PipelineError::DocumentIo {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(tokenize_text(&text))
}

/// Compare two word streams against a shared lexicon.
///
/// The reference and candidate streams are windowed independently; they
/// share only the immutable lexicon, so nothing here blocks or locks.
pub fn compare_word_streams(
    reference: &[String],
    candidate: &[String],
    lexicon: &SynonymLexicon,
    cfg: &CompareConfig,
) -> Result<ComparisonOutcome, PipelineError> {
    cfg.validate()?;

    let reference_tuples = build_tuples(reference, lexicon, cfg.tuple_size)?;
    let candidate_tuples = build_tuples(candidate, lexicon, cfg.tuple_size)?;

    let matched_tuples = match_count(&reference_tuples, &candidate_tuples);
    let similarity = score(&reference_tuples, &candidate_tuples)?;
    let distinct_similarity = score_distinct(&reference_tuples, &candidate_tuples)?;

    Ok(ComparisonOutcome {
        tuple_size: cfg.tuple_size,
        reference_tuples: reference_tuples.len(),
        candidate_tuples: candidate_tuples.len(),
        matched_tuples,
        similarity,
        distinct_similarity,
    })
}

/// Run the end-to-end pipeline: lexicon load, document reads, tokenization,
/// tuple generation, and scoring.
pub fn compare_files(
    synonyms_path: &Path,
    reference_path: &Path,
    candidate_path: &Path,
    cfg: &CompareConfig,
) -> Result<ComparisonReport, PipelineError> {
    let start = Instant::now();
    match compare_files_inner(synonyms_path, reference_path, candidate_path, cfg) {
        Ok(report) => {
            let elapsed_micros = start.elapsed().as_micros();
            info!(
                tuple_size = report.outcome.tuple_size,
                reference_tuples = report.outcome.reference_tuples,
                candidate_tuples = report.outcome.candidate_tuples,
                matched_tuples = report.outcome.matched_tuples,
                similarity = report.outcome.similarity,
                elapsed_micros,
                "compare_success"
            );
            Ok(report)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "compare_failure");
            Err(err)
        }
    }
}

fn compare_files_inner(
    synonyms_path: &Path,
    reference_path: &Path,
    candidate_path: &Path,
    cfg: &CompareConfig,
) -> Result<ComparisonReport, PipelineError> {
    let lexicon = SynonymLexicon::from_file(synonyms_path)?;
    let reference_words = load_document_words(reference_path)?;
    let candidate_words = load_document_words(candidate_path)?;

    let outcome = compare_word_streams(&reference_words, &candidate_words, &lexicon, cfg)?;

    Ok(ComparisonReport {
        synonyms_path: synonyms_path.display().to_string(),
        reference_path: reference_path.display().to_string(),
        candidate_path: candidate_path.display().to_string(),
        outcome,
    })
}
