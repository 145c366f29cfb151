//! Fixed-size word tuples and the sliding-window builder.

use serde::{Deserialize, Serialize};

use crate::error::TupleError;
use crate::lexicon::SynonymLexicon;

/// A contiguous, fixed-length, order-sensitive window of words.
///
/// Two tuples are equal iff they have the same size and identical words at
/// every position; tuples of different sizes are never equal. `Hash` follows
/// the same identity so sequences can be indexed for O(1) lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tuple {
    words: Vec<String>,
}

impl Tuple {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Generate the ordered tuple sequence for a word stream.
///
/// Every word is first normalized through the lexicon (synonyms replaced by
/// their canonical root, other words left unchanged), then a window of width
/// `tuple_size` slides across the normalized stream with stride 1. The
/// result holds exactly `words.len() - tuple_size + 1` tuples in window
/// order.
///
/// Normalization happens once per word rather than once per window; tuples
/// overlap, so a per-window lookup would repeat the same work up to
/// `tuple_size` times per word with no change in output.
///
/// A stream shorter than the window is a hard error, not an empty sequence:
/// a caller who configured an oversized window on a short document needs to
/// know that no comparison is possible.
pub fn build_tuples(
    words: &[String],
    lexicon: &SynonymLexicon,
    tuple_size: usize,
) -> Result<Vec<Tuple>, TupleError> {
    if tuple_size == 0 {
        return Err(TupleError::InvalidTupleSize);
    }
    if words.len() < tuple_size {
        return Err(TupleError::InsufficientWords {
            words: words.len(),
            tuple_size,
        });
    }

    let normalized: Vec<&str> = words
        .iter()
        .map(|word| lexicon.canonical_root(word).unwrap_or(word))
        .collect();

    let mut tuples = Vec::with_capacity(words.len() - tuple_size + 1);
    for window in normalized.windows(tuple_size) {
        tuples.push(Tuple::new(
            window.iter().map(|word| (*word).to_owned()).collect(),
        ));
    }
    Ok(tuples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_owned).collect()
    }

    fn tuple(text: &str) -> Tuple {
        Tuple::new(words(text))
    }

    #[test]
    fn produces_window_count_tuples_of_requested_size() {
        let lexicon = SynonymLexicon::default();
        let stream = words("a b c d e");
        for n in 1..=stream.len() {
            let tuples = build_tuples(&stream, &lexicon, n).expect("build");
            assert_eq!(tuples.len(), stream.len() - n + 1);
            assert!(tuples.iter().all(|t| t.len() == n));
        }
    }

    #[test]
    fn windows_are_in_stream_order() {
        let lexicon = SynonymLexicon::default();
        let tuples = build_tuples(&words("a b c d"), &lexicon, 2).expect("build");
        assert_eq!(tuples, vec![tuple("a b"), tuple("b c"), tuple("c d")]);
    }

    #[test]
    fn window_equal_to_stream_yields_one_tuple() {
        let lexicon = SynonymLexicon::default();
        let tuples = build_tuples(&words("a b c"), &lexicon, 3).expect("build");
        assert_eq!(tuples, vec![tuple("a b c")]);
    }

    #[test]
    fn short_stream_is_insufficient_words() {
        let lexicon = SynonymLexicon::default();
        let err = build_tuples(&words("a b"), &lexicon, 3).expect_err("build should fail");
        assert_eq!(
            err,
            TupleError::InsufficientWords {
                words: 2,
                tuple_size: 3
            }
        );
    }

    #[test]
    fn empty_stream_is_insufficient_words() {
        let lexicon = SynonymLexicon::default();
        let err = build_tuples(&[], &lexicon, 1).expect_err("build should fail");
        assert!(matches!(err, TupleError::InsufficientWords { words: 0, .. }));
    }

    #[test]
    fn zero_window_rejected() {
        let lexicon = SynonymLexicon::default();
        let err = build_tuples(&words("a b c"), &lexicon, 0).expect_err("build should fail");
        assert_eq!(err, TupleError::InvalidTupleSize);
    }

    #[test]
    fn synonyms_normalized_before_windowing() {
        let lexicon = SynonymLexicon::parse("run sprint jog\n");
        let tuples = build_tuples(&words("i jog every day"), &lexicon, 3).expect("build");
        assert_eq!(tuples, vec![tuple("i run every"), tuple("run every day")]);
    }

    #[test]
    fn normalization_is_idempotent() {
        let lexicon = SynonymLexicon::parse("run sprint jog\n");
        let once = build_tuples(&words("i jog every day"), &lexicon, 2).expect("build");
        let twice = build_tuples(&words("i run every day"), &lexicon, 2).expect("build");
        assert_eq!(once, twice);
    }

    #[test]
    fn input_stream_is_not_mutated() {
        let lexicon = SynonymLexicon::parse("run jog\n");
        let stream = words("i jog daily");
        build_tuples(&stream, &lexicon, 2).expect("build");
        assert_eq!(stream, words("i jog daily"));
    }

    #[test]
    fn tuple_equality_is_positional_and_size_sensitive() {
        let ab = tuple("a b");
        assert_eq!(ab, ab.clone());
        assert_eq!(tuple("a b"), tuple("a b"));
        assert_ne!(tuple("a b"), tuple("b a"));
        assert_ne!(tuple("a b"), tuple("a b c"));
    }

    #[test]
    fn empty_tokens_are_ordinary_words() {
        let lexicon = SynonymLexicon::default();
        let stream = vec!["a".to_string(), String::new(), "b".to_string()];
        let tuples = build_tuples(&stream, &lexicon, 2).expect("build");
        assert_eq!(tuples.len(), 2);
        assert_eq!(tuples[0].words(), ["a".to_string(), String::new()]);
    }
}
