use super::token::Token;

/// Splits extracted text into an ordered sequence of CSV-ready tokens.
///
/// Runs of Unicode whitespace (spaces, tabs, newlines) are the delimiter, so
/// leading, trailing and consecutive whitespace never produce empty tokens.
/// An empty or whitespace-only input produces an empty sequence.
pub fn tokenize(raw_text: &str) -> Vec<Token> {
    raw_text.split_whitespace().map(Token::new).collect()
}
