use super::token::Token;

/// Renders the token sequence as CSV text: one field per row, joined with a
/// single newline. No trailing newline, no header row.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(Token::field).collect::<Vec<_>>().join("\n")
}
