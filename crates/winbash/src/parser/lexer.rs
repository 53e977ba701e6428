//! Lexer: byte-stream to token stream.
//!
//! Never returns an error. Unterminated quotes and runaway heredocs are
//! closed at end-of-input with whatever content was accumulated — agents
//! frequently emit truncated shell snippets and the best-effort policy keeps
//! the rest of the pipeline useful instead of aborting on them.

use super::span::{Position, Span};
use super::tokens::{Token, TokenKind};
use std::iter::Peekable;
use std::str::CharIndices;

fn is_boundary_char(c: char) -> bool {
    matches!(
        c,
        '|' | '&' | ';' | '(' | ')' | '<' | '>' | ' ' | '\t' | '\n' | '\r'
    )
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_name_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_special_var_char(c: char) -> bool {
    matches!(c, '?' | '#' | '!' | '$' | '@' | '0'..='9')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegKind {
    Bareword,
    Single,
    Double,
    DollarSingle,
}

struct PendingHeredoc {
    token_index: usize,
    delimiter: String,
    quoted: bool,
    tab_strip: bool,
}

pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    position: Position,
    tokens: Vec<Token>,
    pending_heredocs: Vec<PendingHeredoc>,
}

/// Tokenize a full bash command string. Always ends with `TokenKind::Eof`.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    lexer.run();
    lexer.tokens
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            position: Position::new(),
            tokens: Vec::new(),
            pending_heredocs: Vec::new(),
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn peek_offset(&mut self) -> usize {
        match self.chars.peek() {
            Some(&(i, _)) => i,
            None => self.input.len(),
        }
    }

    fn advance(&mut self) -> Option<char> {
        let item = self.chars.next();
        if let Some((_, c)) = item {
            self.position.advance(c);
        }
        item.map(|(_, c)| c)
    }

    fn digit_starts_redirect(&mut self) -> bool {
        let mut it = self.chars.clone();
        it.next();
        matches!(it.peek(), Some(&(_, '>')) | Some(&(_, '<')))
    }

    fn peek_is_dollar_single(&mut self) -> bool {
        let mut it = self.chars.clone();
        match it.next() {
            Some((_, '$')) => matches!(it.peek(), Some(&(_, '\''))),
            _ => false,
        }
    }

    fn skip_inline_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c == ' ' || c == '\t' {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn push_token(&mut self, kind: TokenKind) {
        let span = Span::at(self.position);
        self.tokens.push(Token::new(kind, span));
    }

    fn push_token_fd(&mut self, kind: TokenKind, fd: Option<u8>, target_fd: Option<u8>) {
        let span = Span::at(self.position);
        self.tokens
            .push(Token::new(kind, span).with_fd(fd).with_target_fd(target_fd));
    }

    fn run(&mut self) {
        loop {
            self.skip_inline_whitespace();
            match self.peek_char() {
                None => {
                    self.drain_heredocs_at_line_end();
                    self.push_token(TokenKind::Eof);
                    break;
                }
                Some('#') => {
                    while let Some(c) = self.peek_char() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                Some('\n') => {
                    self.advance();
                    self.drain_heredocs_at_line_end();
                    let prev_is_separator = self
                        .tokens
                        .last()
                        .map(|t| t.kind.is_separator())
                        .unwrap_or(true);
                    if !prev_is_separator {
                        self.push_token(TokenKind::Newline);
                    }
                }
                Some('\r') => {
                    self.advance();
                }
                Some(';') => {
                    self.advance();
                    self.push_token(TokenKind::Semi);
                }
                Some('|') => {
                    self.advance();
                    if self.peek_char() == Some('|') {
                        self.advance();
                        self.push_token(TokenKind::Or);
                    } else {
                        self.push_token(TokenKind::Pipe);
                    }
                }
                Some('&') => {
                    self.advance();
                    if self.peek_char() == Some('&') {
                        self.advance();
                        self.push_token(TokenKind::And);
                    } else {
                        self.push_token(TokenKind::Background);
                    }
                }
                Some('(') => {
                    self.advance();
                    self.push_token(TokenKind::LeftParen);
                }
                Some(')') => {
                    self.advance();
                    self.push_token(TokenKind::RightParen);
                }
                Some(c) if c.is_ascii_digit() && self.digit_starts_redirect() => {
                    let fd = self.advance().and_then(|d| d.to_digit(10)).map(|d| d as u8);
                    self.lex_redirect_operator(fd);
                }
                Some('>') | Some('<') => {
                    self.lex_redirect_operator(None);
                }
                Some(_) => {
                    let kind = self.scan_word_run();
                    self.push_token(kind);
                }
            }
        }
    }

    fn lex_redirect_operator(&mut self, fd: Option<u8>) {
        match self.peek_char() {
            Some('>') => {
                self.advance();
                if self.peek_char() == Some('>') {
                    self.advance();
                    self.push_token_fd(TokenKind::RedirectAppend, fd, None);
                } else if self.peek_char() == Some('&') {
                    self.advance();
                    let target_fd = self.scan_fd_digit();
                    self.push_token_fd(TokenKind::RedirectOut, fd, target_fd);
                } else {
                    self.push_token_fd(TokenKind::RedirectOut, fd, None);
                }
            }
            Some('<') => {
                self.advance();
                if self.peek_char() == Some('<') {
                    self.advance();
                    if self.peek_char() == Some('<') {
                        self.advance();
                        self.push_token_fd(TokenKind::HereString, fd, None);
                    } else {
                        let tab_strip = if self.peek_char() == Some('-') {
                            self.advance();
                            true
                        } else {
                            false
                        };
                        self.lex_heredoc(tab_strip);
                    }
                } else {
                    self.push_token_fd(TokenKind::RedirectIn, fd, None);
                }
            }
            _ => {}
        }
    }

    fn scan_fd_digit(&mut self) -> Option<u8> {
        match self.peek_char() {
            Some(c) if c.is_ascii_digit() => {
                self.advance();
                c.to_digit(10).map(|d| d as u8)
            }
            _ => None,
        }
    }

    fn lex_heredoc(&mut self, tab_strip: bool) {
        self.skip_inline_whitespace();
        let kind = self.scan_word_run();
        let (delimiter, quoted) = match kind {
            TokenKind::SingleQuoted(s) | TokenKind::DoubleQuoted(s) | TokenKind::DollarSingleQuoted(s) => {
                (s, true)
            }
            TokenKind::Word(s) => {
                if s.contains('\\') || s.contains('\'') || s.contains('"') {
                    (s.replace(['\\', '\'', '"'], ""), true)
                } else {
                    (s, false)
                }
            }
            _ => (String::new(), false),
        };
        let index = self.tokens.len();
        let span = Span::at(self.position);
        self.tokens
            .push(Token::new(TokenKind::HereDoc(String::new()), span));
        self.pending_heredocs.push(PendingHeredoc {
            token_index: index,
            delimiter,
            quoted,
            tab_strip,
        });
    }

    fn drain_heredocs_at_line_end(&mut self) {
        if self.pending_heredocs.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending_heredocs);
        for ph in pending {
            let body = self.read_heredoc_body(&ph.delimiter, ph.tab_strip);
            let fd_flag = if ph.quoted { 0 } else { 1 };
            if let Some(tok) = self.tokens.get_mut(ph.token_index) {
                tok.kind = TokenKind::HereDoc(body);
                tok.fd = Some(fd_flag);
            }
        }
    }

    fn read_heredoc_body(&mut self, delimiter: &str, tab_strip: bool) -> String {
        let mut body = String::new();
        loop {
            if self.peek_char().is_none() {
                break;
            }
            let line = self.read_raw_line();
            let compare: &str = if tab_strip {
                line.trim_start_matches('\t')
            } else {
                line.as_str()
            };
            if compare == delimiter {
                break;
            }
            body.push_str(compare);
            body.push('\n');
        }
        if body.ends_with('\n') {
            body.pop();
        }
        body
    }

    fn read_raw_line(&mut self) -> String {
        let mut s = String::new();
        loop {
            match self.advance() {
                None => break,
                Some('\n') => break,
                Some(c) => s.push(c),
            }
        }
        s
    }

    /// Scan one contiguous run of word material. Returns a dedicated
    /// `SingleQuoted`/`DoubleQuoted`/`DollarSingleQuoted` token when the
    /// whole run is exactly one such quoted segment with nothing else
    /// concatenated to it; otherwise returns `Word` carrying the raw source
    /// slice for the entire run, which the parser re-scans to split into
    /// parts (quoting changes mid-word can't be represented by a single tag).
    fn scan_word_run(&mut self) -> TokenKind {
        let start_offset = self.peek_offset();
        let mut segments = 0usize;
        let mut last_single: Option<(SegKind, String)> = None;

        loop {
            match self.peek_char() {
                None => break,
                Some(c) if is_boundary_char(c) => break,
                Some('\'') => {
                    let content = self.scan_single_quoted_raw();
                    segments += 1;
                    last_single = Some((SegKind::Single, content));
                }
                Some('"') => {
                    let content = self.scan_double_quoted_raw();
                    segments += 1;
                    last_single = Some((SegKind::Double, content));
                }
                Some('$') if self.peek_is_dollar_single() => {
                    self.advance();
                    let content = self.scan_dollar_single_quoted_raw();
                    segments += 1;
                    last_single = Some((SegKind::DollarSingle, content));
                }
                Some(_) => {
                    self.scan_bareword_run();
                    segments += 1;
                    last_single = Some((SegKind::Bareword, String::new()));
                }
            }
        }

        if segments == 1 {
            if let Some((kind, content)) = last_single {
                match kind {
                    SegKind::Single => return TokenKind::SingleQuoted(content),
                    SegKind::Double => return TokenKind::DoubleQuoted(content),
                    SegKind::DollarSingle => return TokenKind::DollarSingleQuoted(content),
                    SegKind::Bareword => {}
                }
            }
        }

        let end_offset = self.peek_offset();
        TokenKind::Word(self.input[start_offset..end_offset].to_string())
    }

    fn scan_bareword_run(&mut self) {
        loop {
            match self.peek_char() {
                None => break,
                Some(c) if is_boundary_char(c) => break,
                Some('\'') | Some('"') => break,
                Some('$') if self.peek_is_dollar_single() => break,
                Some('$') => {
                    self.advance();
                    self.scan_dollar_expansion_raw();
                }
                Some('\\') => {
                    self.advance();
                    self.advance();
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Consume a `$...` expansion (`$(...)`, `${...}`, `$NAME`, or a special
    /// single-char variable) immediately after the leading `$` was consumed.
    fn scan_dollar_expansion_raw(&mut self) {
        match self.peek_char() {
            Some('(') => {
                self.advance();
                let mut depth = 1;
                while depth > 0 {
                    match self.peek_char() {
                        None => break,
                        Some('(') => {
                            self.advance();
                            depth += 1;
                        }
                        Some(')') => {
                            self.advance();
                            depth -= 1;
                        }
                        Some('\'') => {
                            self.advance();
                            loop {
                                match self.peek_char() {
                                    None => break,
                                    Some('\'') => {
                                        self.advance();
                                        break;
                                    }
                                    Some(_) => {
                                        self.advance();
                                    }
                                }
                            }
                        }
                        Some('"') => {
                            self.advance();
                            loop {
                                match self.peek_char() {
                                    None => break,
                                    Some('"') => {
                                        self.advance();
                                        break;
                                    }
                                    Some('\\') => {
                                        self.advance();
                                        self.advance();
                                    }
                                    Some(_) => {
                                        self.advance();
                                    }
                                }
                            }
                        }
                        Some(_) => {
                            self.advance();
                        }
                    }
                }
            }
            Some('{') => {
                self.advance();
                loop {
                    match self.advance() {
                        None => break,
                        Some('}') => break,
                        Some(_) => {}
                    }
                }
            }
            Some(c) if is_name_start(c) => {
                while let Some(c2) = self.peek_char() {
                    if is_name_continue(c2) {
                        self.advance();
                    } else {
                        break;
                    }
                }
            }
            Some(c) if is_special_var_char(c) => {
                self.advance();
            }
            _ => {}
        }
    }

    fn scan_single_quoted_raw(&mut self) -> String {
        self.advance(); // opening '
        let mut s = String::new();
        loop {
            match self.advance() {
                None => break,
                Some('\'') => break,
                Some(c) => s.push(c),
            }
        }
        s
    }

    fn scan_double_quoted_raw(&mut self) -> String {
        self.advance(); // opening "
        let mut s = String::new();
        loop {
            match self.advance() {
                None => break,
                Some('"') => break,
                Some('\\') => match self.peek_char() {
                    Some(c2) if matches!(c2, '"' | '\\' | '$' | '`') => {
                        self.advance();
                        s.push(c2);
                    }
                    Some('\n') => {
                        self.advance();
                    }
                    _ => s.push('\\'),
                },
                Some(c) => s.push(c),
            }
        }
        s
    }

    fn scan_dollar_single_quoted_raw(&mut self) -> String {
        self.advance(); // opening '
        let mut s = String::new();
        loop {
            match self.advance() {
                None => break,
                Some('\'') => break,
                Some('\\') => match self.peek_char() {
                    Some('n') => {
                        self.advance();
                        s.push('\n');
                    }
                    Some('t') => {
                        self.advance();
                        s.push('\t');
                    }
                    Some('r') => {
                        self.advance();
                        s.push('\r');
                    }
                    Some('\\') => {
                        self.advance();
                        s.push('\\');
                    }
                    Some('\'') => {
                        self.advance();
                        s.push('\'');
                    }
                    Some('"') => {
                        self.advance();
                        s.push('"');
                    }
                    Some('a') => {
                        self.advance();
                        s.push('\u{07}');
                    }
                    Some('b') => {
                        self.advance();
                        s.push('\u{08}');
                    }
                    Some('e') | Some('E') => {
                        self.advance();
                        s.push('\u{1B}');
                    }
                    Some('0') => {
                        self.advance();
                        let mut digits = String::new();
                        for _ in 0..3 {
                            match self.peek_char() {
                                Some(d) if d.is_digit(8) => {
                                    digits.push(d);
                                    self.advance();
                                }
                                _ => break,
                            }
                        }
                        let val = u32::from_str_radix(&digits, 8).unwrap_or(0);
                        if let Some(ch) = char::from_u32(val) {
                            s.push(ch);
                        }
                    }
                    Some('x') => {
                        self.advance();
                        let mut digits = String::new();
                        for _ in 0..2 {
                            match self.peek_char() {
                                Some(d) if d.is_ascii_hexdigit() => {
                                    digits.push(d);
                                    self.advance();
                                }
                                _ => break,
                            }
                        }
                        if let Ok(val) = u32::from_str_radix(&digits, 16) {
                            if let Some(ch) = char::from_u32(val) {
                                s.push(ch);
                            }
                        }
                    }
                    Some('u') => {
                        self.advance();
                        let mut digits = String::new();
                        for _ in 0..4 {
                            match self.peek_char() {
                                Some(d) if d.is_ascii_hexdigit() => {
                                    digits.push(d);
                                    self.advance();
                                }
                                _ => break,
                            }
                        }
                        if let Ok(val) = u32::from_str_radix(&digits, 16) {
                            if let Some(ch) = char::from_u32(val) {
                                s.push(ch);
                            }
                        }
                    }
                    Some(other) => {
                        self.advance();
                        s.push(other);
                    }
                    None => s.push('\\'),
                },
                Some(c) => s.push(c),
            }
        }
        s
    }
}
