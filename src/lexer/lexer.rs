use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{Position, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref NUMBER_PATTERN: Regex =
        Regex::new("^(0[xX][0-9a-fA-F]+|0[oO][0-7]+|0[bB][01]+|[0-9]+)").unwrap();
}

/// On-demand scanner over a single source text.
///
/// The lexer keeps only a cursor into the source; each call to
/// [`Lexer::next_token`] consumes exactly the characters of one token. To scan
/// the same text again, construct a new lexer.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    /// Byte offset of the current character
    pos: usize,
    line: u32,
    column: u32,
    /// Set once the iterator has handed out `Eof`
    exhausted: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: source.to_string(),
            pos: 0,
            line: 1,
            column: 1,
            exhausted: false,
        }
    }

    /// Produces the next token. Once the input is consumed every call returns `Eof`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let position = self.current_position();
        let ch = match self.at() {
            Some(ch) => ch,
            None => return MK_TOKEN!(TokenKind::Eof, String::new(), position),
        };

        let token = match ch {
            '=' => self.one_or_two('=', TokenKind::Eq, TokenKind::Assign, position),
            '!' => self.one_or_two('=', TokenKind::NotEq, TokenKind::Bang, position),
            '+' => self.single(TokenKind::Plus, position),
            '-' => self.single(TokenKind::Minus, position),
            '*' => self.single(TokenKind::Asterisk, position),
            '/' => self.single(TokenKind::Slash, position),
            '<' => self.single(TokenKind::Lt, position),
            '>' => self.single(TokenKind::Gt, position),
            ',' => self.single(TokenKind::Comma, position),
            ';' => self.single(TokenKind::Semicolon, position),
            '(' => self.single(TokenKind::LParen, position),
            ')' => self.single(TokenKind::RParen, position),
            '{' => self.single(TokenKind::LBrace, position),
            '}' => self.single(TokenKind::RBrace, position),
            '[' => self.single(TokenKind::LBracket, position),
            ']' => self.single(TokenKind::RBracket, position),
            '"' => self.read_string(position),
            c if c.is_ascii_alphabetic() || c == '_' => self.read_identifier(position),
            c if c.is_ascii_digit() => self.read_number(position),
            _ => self.single(TokenKind::Illegal, position),
        };

        if token.has_payload() {
            trace!("{} ({}) at {}", token.kind, token.literal, token.position);
        } else {
            trace!("{} at {}", token.kind, token.position);
        }

        token
    }

    pub fn current_position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn peek_char(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn advance(&mut self) {
        if let Some(ch) = self.at() {
            self.pos += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Skips `n` bytes of single-line ASCII text.
    fn advance_n(&mut self, n: usize) {
        self.pos += n;
        self.column += n as u32;
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.at(), Some(' ' | '\t' | '\n' | '\r')) {
            self.advance();
        }
    }

    fn single(&mut self, kind: TokenKind, position: Position) -> Token {
        let literal = self.at().map(String::from).unwrap_or_default();
        self.advance();
        MK_TOKEN!(kind, literal, position)
    }

    fn one_or_two(
        &mut self,
        second: char,
        double: TokenKind,
        single: TokenKind,
        position: Position,
    ) -> Token {
        if self.peek_char() != Some(second) {
            return self.single(single, position);
        }

        let mut literal = String::with_capacity(2);
        literal.extend(self.at());
        self.advance();
        literal.push(second);
        self.advance();
        MK_TOKEN!(double, literal, position)
    }

    fn read_identifier(&mut self, position: Position) -> Token {
        let literal = match IDENTIFIER_PATTERN.find(self.remainder()) {
            Some(found) => found.as_str().to_string(),
            None => return self.single(TokenKind::Illegal, position),
        };
        self.advance_n(literal.len());

        MK_TOKEN!(lookup_identifier(&literal), literal, position)
    }

    fn read_number(&mut self, position: Position) -> Token {
        let literal = match NUMBER_PATTERN.find(self.remainder()) {
            Some(found) => found.as_str().to_string(),
            None => return self.single(TokenKind::Illegal, position),
        };
        self.advance_n(literal.len());

        MK_TOKEN!(TokenKind::Int, literal, position)
    }

    fn read_string(&mut self, position: Position) -> Token {
        let start = self.pos;
        self.advance();

        let content_start = self.pos;
        while let Some(ch) = self.at() {
            if ch == '"' {
                let literal = self.source[content_start..self.pos].to_string();
                self.advance();
                return MK_TOKEN!(TokenKind::String, literal, position);
            }
            self.advance();
        }

        // Unterminated: hand the raw text to the parser as a single illegal token
        let literal = self.source[start..].to_string();
        MK_TOKEN!(TokenKind::Illegal, literal, position)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token up to and including the first `Eof`.
    fn next(&mut self) -> Option<Token> {
        if self.exhausted {
            return None;
        }

        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.exhausted = true;
        }
        Some(token)
    }
}

/// Scans the whole source, `Eof` included.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
