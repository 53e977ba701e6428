//! Token types produced by the lexer.

use super::span::Span;

/// A lexical token. `fd` and `target_fd` are only meaningful on the variants
/// that use them (redirects and heredocs); see [`TokenKind`] docs.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// Source file descriptor for a redirect (`N>`, `N<`, ...), or for a
    /// `HereDoc` token repurposes this field as the quoting flag: `Some(0)`
    /// means the delimiter was quoted (body stored verbatim, never
    /// re-expanded), `Some(1)` means unquoted (body re-lexed for expansions).
    pub fd: Option<u8>,
    /// Target fd for a `N>&M` / `N<&M` duplication redirect.
    pub target_fd: Option<u8>,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            span,
            fd: None,
            target_fd: None,
        }
    }

    pub fn with_fd(mut self, fd: Option<u8>) -> Self {
        self.fd = fd;
        self
    }

    pub fn with_target_fd(mut self, target_fd: Option<u8>) -> Self {
        self.target_fd = target_fd;
        self
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

/// The kind of a token, carrying any string payload for word-like tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// An unquoted word, possibly a concatenation of adjacent quoted and
    /// unquoted segments merged by the lexer (see lexer module docs).
    Word(String),
    /// `'...'` — content stored verbatim, no escapes honored.
    SingleQuoted(String),
    /// `"..."` — content stored post-unescape of `\" \\ \$ \` \NL`.
    DoubleQuoted(String),
    /// `$'...'` — content stored post-C-escape-decode.
    DollarSingleQuoted(String),
    Pipe,
    And,
    Or,
    Semi,
    Newline,
    Background,
    RedirectOut,
    RedirectAppend,
    RedirectIn,
    /// `<<DELIM` / `<<-DELIM`. Carries the already-read heredoc body; the
    /// delimiter itself is lexed as the following Word/quoted token.
    HereDoc(String),
    HereString,
    LeftParen,
    RightParen,
    Eof,
}

impl TokenKind {
    /// True for tokens that separate statements/pipelines on their own
    /// (used by the lexer to decide whether a newline needs emitting).
    pub fn is_separator(&self) -> bool {
        matches!(
            self,
            TokenKind::Semi
                | TokenKind::Newline
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Pipe
                | TokenKind::Background
                | TokenKind::LeftParen
        )
    }

    /// Payload string for word-like tokens, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            TokenKind::Word(s)
            | TokenKind::SingleQuoted(s)
            | TokenKind::DoubleQuoted(s)
            | TokenKind::DollarSingleQuoted(s)
            | TokenKind::HereDoc(s) => Some(s),
            _ => None,
        }
    }
}
