//! Base tokenization for PHP source
//!
//! This module provides the raw tokenization. It is the entry point where source strings
//! become token vectors; classification happens later in the lexing pipeline.
//!
//! PHP source alternates between two modes. Outside of `<?php ... ?>` everything is inline
//! HTML and is kept as a single token. Inside, a logos lexer does the work. The mode driver
//! below switches between the two and makes sure every byte of input lands in exactly one
//! token, even when logos fails to match.

use crate::php::token::{Token, TokenKind};
use logos::{Lexer, Logos};
use std::ops::Range;

/// Raw tokens produced by logos in code mode
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken {
    #[regex(r"\?>(\r?\n)?")]
    CloseTag,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("//", line_comment)]
    #[token("#", line_comment)]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("#[")]
    AttributeStart,

    #[regex(r"\$[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*")]
    Variable,

    #[regex(r"[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*")]
    Identifier,

    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0[xX][0-9a-fA-F_]+")]
    #[regex(r"0[bB][01_]+")]
    #[regex(r"0[oO][0-7_]+")]
    Integer,

    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+")]
    Float,

    #[regex(r"'([^'\\]|\\(.|\n))*'")]
    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    #[regex(r"`([^`\\]|\\(.|\n))*`")]
    QuotedString,

    #[regex(
        r#"<<<[ \t]*("[a-zA-Z_][a-zA-Z0-9_]*"|'[a-zA-Z_][a-zA-Z0-9_]*'|[a-zA-Z_][a-zA-Z0-9_]*)\r?\n"#,
        heredoc_body
    )]
    Heredoc,

    #[token("\\")]
    NsSeparator,

    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,

    #[token("->")]
    #[token("?->")]
    #[token("=>")]
    #[token("::")]
    #[token("...")]
    #[token("++")]
    #[token("--")]
    #[token("**")]
    #[token("**=")]
    #[token("??")]
    #[token("??=")]
    #[token("==")]
    #[token("===")]
    #[token("!=")]
    #[token("!==")]
    #[token("<>")]
    #[token("<=")]
    #[token(">=")]
    #[token("<=>")]
    #[token("&&")]
    #[token("||")]
    #[token("<<")]
    #[token(">>")]
    #[token("<<=")]
    #[token(">>=")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token(".=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("=")]
    #[token("<")]
    #[token(">")]
    #[token("!")]
    #[token(".")]
    #[token("&")]
    #[token("|")]
    #[token("^")]
    #[token("~")]
    #[token("?")]
    #[token(":")]
    #[token("@")]
    #[token("$")]
    Operator,
}

/// A line comment runs up to (not including) the line break or a closing tag.
fn line_comment(lex: &mut Lexer<RawToken>) {
    let rest = lex.remainder();
    let end = [rest.find('\n'), rest.find('\r'), rest.find("?>")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(rest.len());
    lex.bump(end);
}

/// A block comment runs through the next `*/`. An unterminated one swallows the rest of
/// the code section.
fn block_comment(lex: &mut Lexer<RawToken>) {
    let rest = lex.remainder();
    let end = rest.find("*/").map_or(rest.len(), |at| at + 2);
    lex.bump(end);
}

/// Consume a heredoc/nowdoc body up to and including its closing label.
///
/// The closing label may be indented. An unterminated heredoc swallows the rest of the
/// code section.
fn heredoc_body(lex: &mut Lexer<RawToken>) {
    let label: String = lex
        .slice()
        .trim_start_matches("<<<")
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string();
    let rest = lex.remainder();

    let mut line_start = 0;
    while line_start <= rest.len() {
        let line = &rest[line_start..];
        let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
        let candidate = &line[indent..];
        if candidate.starts_with(label.as_str()) {
            let after = &candidate[label.len()..];
            let continues_word = after
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii());
            if !continues_word {
                lex.bump(line_start + indent + label.len());
                return;
            }
        }
        match line.find('\n') {
            Some(offset) => line_start += offset + 1,
            None => break,
        }
    }
    lex.bump(rest.len());
}

impl RawToken {
    fn kind(self, text: &str) -> TokenKind {
        match self {
            RawToken::CloseTag => TokenKind::CloseTag,
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::LineComment => TokenKind::Comment,
            RawToken::BlockComment => {
                let is_doc = text.starts_with("/**")
                    && text[3..].starts_with([' ', '\t', '\r', '\n']);
                if is_doc {
                    TokenKind::DocComment
                } else {
                    TokenKind::Comment
                }
            }
            RawToken::AttributeStart => TokenKind::AttributeStart,
            RawToken::Variable => TokenKind::Variable,
            RawToken::Identifier => TokenKind::Identifier,
            RawToken::Integer => TokenKind::Integer,
            RawToken::Float => TokenKind::Float,
            RawToken::QuotedString => TokenKind::StringLiteral,
            RawToken::Heredoc => TokenKind::Heredoc,
            RawToken::NsSeparator => TokenKind::NsSeparator,
            RawToken::OpenParen => TokenKind::OpenParen,
            RawToken::CloseParen => TokenKind::CloseParen,
            RawToken::OpenBracket => TokenKind::OpenBracket,
            RawToken::CloseBracket => TokenKind::CloseBracket,
            RawToken::OpenBrace => TokenKind::OpenBrace,
            RawToken::CloseBrace => TokenKind::CloseBrace,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Operator => TokenKind::Operator,
        }
    }
}

/// Tokenize source text with location information
///
/// The result is lossless: the token texts concatenate back to `source`. Word tokens come
/// out as [TokenKind::Identifier]; the lexing pipeline classifies them afterwards.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < source.len() {
        pos = scan_inline_html(source, pos, &mut tokens);
        if pos < source.len() {
            pos = scan_code(source, pos, &mut tokens);
        }
    }

    tokens
}

/// Scan inline HTML up to and including the next open tag. Returns the position where
/// code starts (or the end of input).
fn scan_inline_html(source: &str, start: usize, tokens: &mut Vec<Token>) -> usize {
    let Some((tag_start, tag_end, kind)) = find_open_tag(source, start) else {
        push(tokens, source, TokenKind::InlineHtml, start..source.len());
        return source.len();
    };
    if tag_start > start {
        push(tokens, source, TokenKind::InlineHtml, start..tag_start);
    }
    push(tokens, source, kind, tag_start..tag_end);
    tag_end
}

fn find_open_tag(source: &str, from: usize) -> Option<(usize, usize, TokenKind)> {
    let bytes = source.as_bytes();
    let mut search = from;
    while let Some(offset) = source[search..].find("<?") {
        let at = search + offset;
        let after = &bytes[at + 2..];
        if after.starts_with(b"=") {
            return Some((at, at + 3, TokenKind::OpenTagWithEcho));
        }
        if after.len() >= 3 && after[..3].eq_ignore_ascii_case(b"php") {
            let tail = &after[3..];
            let end = at + 5;
            if tail.is_empty() {
                return Some((at, end, TokenKind::OpenTag));
            }
            if tail.starts_with(b"\r\n") {
                return Some((at, end + 2, TokenKind::OpenTag));
            }
            if matches!(tail[0], b' ' | b'\t' | b'\n' | b'\r') {
                return Some((at, end + 1, TokenKind::OpenTag));
            }
        }
        search = at + 2;
    }
    None
}

/// Run logos from `start` until a closing tag or the end of input. Returns the position
/// where inline HTML resumes.
fn scan_code(source: &str, start: usize, tokens: &mut Vec<Token>) -> usize {
    let mut base = start;

    'restart: loop {
        let mut lexer = RawToken::lexer(&source[base..]);
        let mut cursor = base;

        while let Some(result) = lexer.next() {
            let span = lexer.span();
            let abs = (base + span.start)..(base + span.end);
            if abs.start > cursor {
                push(tokens, source, TokenKind::Unknown, cursor..abs.start);
            }
            match result {
                Ok(raw) => {
                    let kind = raw.kind(&source[abs.clone()]);
                    push(tokens, source, kind, abs.clone());
                    cursor = abs.end;
                    if raw == RawToken::CloseTag {
                        return cursor;
                    }
                }
                Err(()) => {
                    // Resume on a char boundary so no multi-byte character is ever split.
                    let mut end = abs.end.max(abs.start + 1).min(source.len());
                    while !source.is_char_boundary(end) {
                        end += 1;
                    }
                    push(tokens, source, TokenKind::Unknown, abs.start..end);
                    base = end;
                    if base >= source.len() {
                        return source.len();
                    }
                    continue 'restart;
                }
            }
        }

        if cursor < source.len() {
            push(tokens, source, TokenKind::Unknown, cursor..source.len());
        }
        return source.len();
    }
}

fn push(tokens: &mut Vec<Token>, source: &str, kind: TokenKind, span: Range<usize>) {
    if span.is_empty() {
        return;
    }
    tokens.push(Token::with_span(kind, &source[span.clone()], span));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .into_iter()
            .map(|t| (t.kind(), t.text().to_string()))
            .collect()
    }

    fn joined(source: &str) -> String {
        tokenize(source).iter().map(|t| t.text()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_inline_html_only() {
        assert_eq!(
            kinds("<p>hello</p>"),
            vec![(TokenKind::InlineHtml, "<p>hello</p>".to_string())]
        );
    }

    #[test]
    fn test_open_tag_takes_one_whitespace() {
        let tokens = kinds("<?php  echo");
        assert_eq!(tokens[0], (TokenKind::OpenTag, "<?php ".to_string()));
        assert_eq!(tokens[1], (TokenKind::Whitespace, " ".to_string()));
        assert_eq!(tokens[2], (TokenKind::Identifier, "echo".to_string()));

        let tokens = kinds("<?php\r\n$a");
        assert_eq!(tokens[0], (TokenKind::OpenTag, "<?php\r\n".to_string()));
        assert_eq!(tokens[1], (TokenKind::Variable, "$a".to_string()));
    }

    #[test]
    fn test_echo_tag_and_close_tag() {
        let tokens = kinds("a<?= $x ?>\nb");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::InlineHtml, "a".to_string()),
                (TokenKind::OpenTagWithEcho, "<?=".to_string()),
                (TokenKind::Whitespace, " ".to_string()),
                (TokenKind::Variable, "$x".to_string()),
                (TokenKind::Whitespace, " ".to_string()),
                (TokenKind::CloseTag, "?>\n".to_string()),
                (TokenKind::InlineHtml, "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_cast_expression_tokens() {
        let tokens = kinds("<?php $b=( boolean  )$a;");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::OpenTag, "<?php ".to_string()),
                (TokenKind::Variable, "$b".to_string()),
                (TokenKind::Operator, "=".to_string()),
                (TokenKind::OpenParen, "(".to_string()),
                (TokenKind::Whitespace, " ".to_string()),
                (TokenKind::Identifier, "boolean".to_string()),
                (TokenKind::Whitespace, "  ".to_string()),
                (TokenKind::CloseParen, ")".to_string()),
                (TokenKind::Variable, "$a".to_string()),
                (TokenKind::Semicolon, ";".to_string()),
            ]
        );
    }

    #[test]
    fn test_comments() {
        let tokens = kinds("<?php // note ?>x");
        assert_eq!(tokens[1], (TokenKind::Comment, "// note ".to_string()));
        assert_eq!(tokens[2], (TokenKind::CloseTag, "?>".to_string()));
        assert_eq!(tokens[3], (TokenKind::InlineHtml, "x".to_string()));

        let tokens = kinds("<?php /** doc */ /*plain*/ # hash\n");
        assert_eq!(tokens[1], (TokenKind::DocComment, "/** doc */".to_string()));
        assert_eq!(tokens[3], (TokenKind::Comment, "/*plain*/".to_string()));
        assert_eq!(tokens[5], (TokenKind::Comment, "# hash".to_string()));
        assert_eq!(tokens[6], (TokenKind::Whitespace, "\n".to_string()));
    }

    #[test]
    fn test_block_comments_hide_code() {
        let tokens = kinds("<?php /* (Boolean) ECHO */ $a; /**/ /** @var int */");
        assert_eq!(
            tokens[1],
            (TokenKind::Comment, "/* (Boolean) ECHO */".to_string())
        );
        assert_eq!(tokens[2], (TokenKind::Whitespace, " ".to_string()));
        assert_eq!(tokens[3], (TokenKind::Variable, "$a".to_string()));
        assert_eq!(tokens[6], (TokenKind::Comment, "/**/".to_string()));
        assert_eq!(
            tokens[8],
            (TokenKind::DocComment, "/** @var int */".to_string())
        );
    }

    #[test]
    fn test_unterminated_block_comment_runs_to_end() {
        let source = "<?php $a; /* open ?> <p>";
        let tokens = kinds(source);
        assert_eq!(
            tokens.last(),
            Some(&(TokenKind::Comment, "/* open ?> <p>".to_string()))
        );
        assert_eq!(joined(source), source);
    }

    #[test]
    fn test_attribute_start_wins_over_hash_comment() {
        let tokens = kinds("<?php #[Attr]");
        assert_eq!(tokens[1], (TokenKind::AttributeStart, "#[".to_string()));
        assert_eq!(tokens[2], (TokenKind::Identifier, "Attr".to_string()));
        assert_eq!(tokens[3], (TokenKind::CloseBracket, "]".to_string()));
    }

    #[test]
    fn test_strings_hide_close_tags() {
        let tokens = kinds("<?php '?>' \"a\\\"b\"");
        assert_eq!(tokens[1], (TokenKind::StringLiteral, "'?>'".to_string()));
        assert_eq!(tokens[3], (TokenKind::StringLiteral, "\"a\\\"b\"".to_string()));
    }

    #[test]
    fn test_heredoc_with_indented_label() {
        let source = "<?php $x = <<<EOT\n  line (int)\n  EOT;\n";
        let tokens = kinds(source);
        assert_eq!(
            tokens[5],
            (TokenKind::Heredoc, "<<<EOT\n  line (int)\n  EOT".to_string())
        );
        assert_eq!(tokens[6], (TokenKind::Semicolon, ";".to_string()));
        assert_eq!(joined(source), source);
    }

    #[test]
    fn test_nowdoc_label_prefix_is_not_a_terminator() {
        let source = "<?php <<<'END'\nENDING\nEND;";
        let tokens = kinds(source);
        assert_eq!(
            tokens[1],
            (TokenKind::Heredoc, "<<<'END'\nENDING\nEND".to_string())
        );
    }

    #[test]
    fn test_numbers() {
        let tokens = kinds("<?php 1_000 0x1F 1.5 .5 1e3");
        assert_eq!(tokens[1], (TokenKind::Integer, "1_000".to_string()));
        assert_eq!(tokens[3], (TokenKind::Integer, "0x1F".to_string()));
        assert_eq!(tokens[5], (TokenKind::Float, "1.5".to_string()));
        assert_eq!(tokens[7], (TokenKind::Float, ".5".to_string()));
        assert_eq!(tokens[9], (TokenKind::Float, "1e3".to_string()));
    }

    #[test]
    fn test_operators_longest_match() {
        let tokens = kinds("<?php $a?->b ?? $c <=> $d !== $e");
        let ops: Vec<_> = tokens
            .iter()
            .filter(|(k, _)| *k == TokenKind::Operator)
            .map(|(_, t)| t.as_str())
            .collect();
        assert_eq!(ops, vec!["?->", "??", "<=>", "!=="]);
    }

    #[test]
    fn test_unrecognized_input_becomes_unknown() {
        let source = "<?php \u{0}é 'unterminated";
        let tokens = tokenize(source);
        assert!(tokens.iter().any(|t| t.kind() == TokenKind::Unknown));
        assert_eq!(joined(source), source);
    }

    #[test]
    fn test_spans_are_contiguous() {
        let source = "<html><?php echo  (int) $a; ?>\n</html>";
        let tokens = tokenize(source);
        let mut cursor = 0;
        for token in &tokens {
            assert_eq!(token.span().start, cursor);
            assert_eq!(&source[token.span()], token.text());
            cursor = token.span().end;
        }
        assert_eq!(cursor, source.len());
    }
}
