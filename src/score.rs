//! Pairwise scoring of tuple sequences.
//!
//! The default metric is multiplicity-weighted: every reference tuple
//! contributes one count for EACH equal candidate tuple, so the ratio can
//! exceed 1.0 when candidate duplicates outnumber the reference tuples they
//! match. That counting rule is part of the contract and pinned by tests;
//! the colloquial "fraction of reference tuples with at least one match"
//! reading is available as [`score_distinct`] instead of replacing it.

use std::collections::HashMap;

use crate::error::ScoreError;
use crate::tuple::Tuple;

/// Occurrence counts of the candidate sequence, keyed by tuple identity.
fn occurrence_counts(candidate: &[Tuple]) -> HashMap<&Tuple, usize> {
    let mut counts: HashMap<&Tuple, usize> = HashMap::with_capacity(candidate.len());
    for tuple in candidate {
        *counts.entry(tuple).or_insert(0) += 1;
    }
    counts
}

/// Multiplicity-weighted match count: the sum over reference tuples of the
/// number of equal candidate tuples.
pub fn match_count(reference: &[Tuple], candidate: &[Tuple]) -> usize {
    let counts = occurrence_counts(candidate);
    reference
        .iter()
        .map(|tuple| counts.get(tuple).copied().unwrap_or(0))
        .sum()
}

/// Count of reference tuples with at least one equal candidate tuple.
pub fn distinct_match_count(reference: &[Tuple], candidate: &[Tuple]) -> usize {
    let counts = occurrence_counts(candidate);
    reference
        .iter()
        .filter(|tuple| counts.contains_key(tuple))
        .count()
}

/// Multiplicity-weighted similarity: [`match_count`] divided by the
/// reference sequence length. Not symmetric, and not bounded above by 1.0.
///
/// An empty reference cannot arise from tuple generation (a too-short stream
/// already failed there), so `EmptyReference` guards the public boundary
/// against a division by zero rather than a reachable pipeline state.
pub fn score(reference: &[Tuple], candidate: &[Tuple]) -> Result<f64, ScoreError> {
    if reference.is_empty() {
        return Err(ScoreError::EmptyReference);
    }
    Ok(match_count(reference, candidate) as f64 / reference.len() as f64)
}

/// Distinct-match similarity: [`distinct_match_count`] divided by the
/// reference sequence length. Always in [0, 1].
pub fn score_distinct(reference: &[Tuple], candidate: &[Tuple]) -> Result<f64, ScoreError> {
    if reference.is_empty() {
        return Err(ScoreError::EmptyReference);
    }
    Ok(distinct_match_count(reference, candidate) as f64 / reference.len() as f64)
}
