//! Line tokenization for document word streams.

/// Tokenize one line: strip every character that is not an ASCII Latin
/// letter or space, lowercase the remainder, and split on single spaces.
///
/// Interior empty tokens (from consecutive separators) are kept and trailing
/// empty tokens are dropped; a line with no letters or spaces at all reduces
/// to a single empty token. Empty tokens are ordinary words downstream.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut cleaned = String::with_capacity(line.len());
    for ch in line.chars() {
        if ch.is_ascii_alphabetic() {
            cleaned.push(ch.to_ascii_lowercase());
        } else if ch == ' ' {
            cleaned.push(' ');
        }
    }

    if cleaned.is_empty() {
        return vec![String::new()];
    }

    let mut tokens: Vec<String> = cleaned.split(' ').map(str::to_owned).collect();
    while tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Tokenize a whole document: the concatenation of per-line token sequences
/// in file order.
pub fn tokenize_text(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    for line in text.lines() {
        words.extend(tokenize_line(line));
    }
    words
}
