//! Core token types shared across the lexer, the token sequence and the fixers.
//!
//!     A token is a kind plus the exact text it was lexed from. Nothing is ever dropped:
//!     whitespace, comments and inline HTML are tokens like any other, so that joining the
//!     texts of a sequence gives back the source byte for byte.
//!
//! Token Layers
//!
//!     Core Tokens:
//!         Produced by the logos lexer in code mode, plus the open/close tags and inline
//!         HTML produced by the mode driver. See [base_tokenization](crate::php::lexing::base_tokenization).
//!
//!     Classified Tokens:
//!         The logos lexer only knows about words. The lexing pipeline then retags words in
//!         cast position as [TokenKind::CastType] and reserved words as [TokenKind::Keyword].
//!         Classification is recomputed every time a changeset is flushed, so it always
//!         matches what a fresh lex of the rendered text would say.
//!
//! Byte Ranges
//!
//!     Freshly lexed tokens carry their source range. Tokens created by fixers start with
//!     an empty range, and every flush reindexes the whole sequence against the current
//!     rendering.

pub mod keywords;

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Every token kind the lexer and classifiers produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    InlineHtml,
    OpenTag,
    OpenTagWithEcho,
    CloseTag,
    Whitespace,
    Comment,
    DocComment,
    AttributeStart,
    Variable,
    Identifier,
    Keyword,
    CastType,
    Integer,
    Float,
    StringLiteral,
    Heredoc,
    NsSeparator,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Semicolon,
    Comma,
    Operator,
    Unknown,
}

/// Coarse grouping of token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenCategory {
    Identifier,
    Keyword,
    /// Operators, cast markers included
    Operator,
    Whitespace,
    Comment,
    Literal,
    Delimiter,
    /// Inline HTML and open/close tags
    Markup,
}

impl TokenKind {
    pub fn category(self) -> TokenCategory {
        match self {
            TokenKind::InlineHtml
            | TokenKind::OpenTag
            | TokenKind::OpenTagWithEcho
            | TokenKind::CloseTag => TokenCategory::Markup,
            TokenKind::Whitespace => TokenCategory::Whitespace,
            TokenKind::Comment | TokenKind::DocComment => TokenCategory::Comment,
            TokenKind::Variable | TokenKind::Identifier => TokenCategory::Identifier,
            TokenKind::Keyword => TokenCategory::Keyword,
            TokenKind::CastType | TokenKind::Operator | TokenKind::NsSeparator => {
                TokenCategory::Operator
            }
            TokenKind::Integer
            | TokenKind::Float
            | TokenKind::StringLiteral
            | TokenKind::Heredoc
            | TokenKind::Unknown => TokenCategory::Literal,
            TokenKind::AttributeStart
            | TokenKind::OpenParen
            | TokenKind::CloseParen
            | TokenKind::OpenBracket
            | TokenKind::CloseBracket
            | TokenKind::OpenBrace
            | TokenKind::CloseBrace
            | TokenKind::Semicolon
            | TokenKind::Comma => TokenCategory::Delimiter,
        }
    }

    /// Word-like kinds the classifiers are allowed to retag.
    pub fn is_word(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::Keyword | TokenKind::CastType
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::DocComment)
    }
}

/// A single lexical unit: kind, exact text and byte range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
    span: Range<usize>,
}

impl Token {
    /// Create a token with an empty byte range. The range is filled in when the
    /// token becomes part of a sequence.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            span: 0..0,
        }
    }

    pub(crate) fn with_span(kind: TokenKind, text: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Same kind, new text.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Token::new(self.kind, text)
    }

    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// Whitespace or comment.
    pub fn is_trivia(&self) -> bool {
        self.kind == TokenKind::Whitespace || self.kind.is_comment()
    }

    /// Whitespace made only of spaces and tabs.
    pub fn is_inline_whitespace(&self) -> bool {
        self.is_whitespace() && self.text.bytes().all(|b| b == b' ' || b == b'\t')
    }

    pub fn contains_newline(&self) -> bool {
        self.text.contains('\n') || self.text.contains('\r')
    }

    pub(crate) fn set_kind(&mut self, kind: TokenKind) {
        self.kind = kind;
    }

    pub(crate) fn set_span(&mut self, span: Range<usize>) {
        self.span = span;
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text)
    }
}
