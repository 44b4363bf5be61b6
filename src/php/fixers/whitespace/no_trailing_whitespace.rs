//! No trailing whitespace
//!
//! Spaces and tabs before a line break are removed, both in whitespace tokens and at the
//! end of line comments. Strings, heredocs, block comments and inline HTML keep theirs:
//! trailing whitespace inside them is content.

use crate::php::fixers::{FixContext, Fixer};
use crate::php::token::{Token, TokenKind};
use crate::php::tokens::{Changeset, IndexError, Tokens};

pub struct NoTrailingWhitespaceFixer;

/// Strip spaces and tabs at the end of every line but the last. A `\r` before `\n` is
/// part of the line break.
fn trim_lines(text: &str) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    let last = lines.pop().unwrap_or_default();
    let mut result = String::with_capacity(text.len());
    for line in lines {
        let (content, cr) = match line.strip_suffix('\r') {
            Some(content) => (content, "\r"),
            None => (line, ""),
        };
        result.push_str(content.trim_end_matches([' ', '\t']));
        result.push_str(cr);
        result.push('\n');
    }
    result.push_str(last);
    result
}

fn is_line_comment(token: &Token) -> bool {
    token.kind() == TokenKind::Comment && !token.text().starts_with("/*")
}

impl Fixer for NoTrailingWhitespaceFixer {
    fn name(&self) -> &'static str {
        "no_trailing_whitespace"
    }

    fn description(&self) -> &'static str {
        "Remove trailing whitespace at the end of non-blank lines."
    }

    fn priority(&self) -> i32 {
        -10
    }

    fn is_candidate(&self, tokens: &Tokens) -> bool {
        tokens
            .iter()
            .any(|t| t.is_whitespace() || is_line_comment(t))
    }

    fn fix(&self, tokens: &Tokens, _ctx: &mut FixContext<'_>) -> Result<Changeset, IndexError> {
        let mut changeset = Changeset::new();
        for (index, token) in tokens.iter().enumerate() {
            if token.is_whitespace() && token.text().contains('\n') {
                let trimmed = trim_lines(token.text());
                if trimmed != token.text() {
                    changeset.replace(index, token.with_text(trimmed));
                }
            } else if is_line_comment(token) {
                let ends_line = match tokens.get(index + 1) {
                    Ok(next) => next.is_whitespace() && next.contains_newline(),
                    Err(_) => true,
                };
                let trimmed = token.text().trim_end_matches([' ', '\t']);
                if ends_line && trimmed.len() != token.text().len() {
                    changeset.replace(index, token.with_text(trimmed));
                }
            }
        }
        Ok(changeset)
    }
}
