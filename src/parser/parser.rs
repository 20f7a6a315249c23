//! Parser state for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level loop.
//! The parser pulls tokens from its lexer one at a time and decides
//! everything from a two-token window (current, peek). Expressions are
//! parsed with NUD/LED handlers looked up by token kind.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Problems are recorded as diagnostics instead of being returned, so a
//! single pass reports every syntax error in the input.

use std::{collections::HashMap, mem};

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Tunables for a single parser instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Deepest expression nesting accepted before the parser gives up on the
    /// enclosing statement.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions { max_depth: 256 }
    }
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, read on demand
    lexer: Lexer,
    /// Token under examination
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    options: ParserOptions,
    /// Current expression nesting
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser with default options and primes the lookahead window.
    pub fn new(lexer: Lexer) -> Self {
        Parser::with_options(lexer, ParserOptions::default())
    }

    pub fn with_options(mut lexer: Lexer, options: ParserOptions) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            options,
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Parses statements until end of input.
    ///
    /// A statement that fails to parse is left out of the program; its
    /// diagnostics are kept and parsing resumes at the next statement.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::Eof) {
            let start = self.current.position;
            match parse_stmt(self) {
                Some(stmt) => {
                    debug!("parsed statement at {}: {}", start, stmt);
                    program.statements.push(stmt);
                }
                None => {
                    debug!("discarding statement at {}", start);
                    self.synchronize();
                }
            }
            self.advance();
        }

        program
    }

    /// Diagnostics recorded so far, in discovery order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Skips the remainder of a malformed statement. Stops on its `;`, on the
    /// `}` closing the enclosing block, at end of input, or just before a
    /// token that starts a new statement. Braces opened while skipping are
    /// skipped as a whole.
    pub(crate) fn synchronize(&mut self) {
        let mut nesting = 0usize;

        loop {
            match self.current.kind {
                TokenKind::Eof => return,
                TokenKind::Semicolon | TokenKind::RBrace if nesting == 0 => return,
                TokenKind::LBrace => nesting += 1,
                TokenKind::RBrace => nesting -= 1,
                _ => {}
            }
            if nesting == 0 && (self.peek_is(TokenKind::Let) || self.peek_is(TokenKind::Return)) {
                return;
            }
            self.advance();
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts the window by one token and returns the token that was current.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = mem::replace(&mut self.peek, next);
        mem::replace(&mut self.current, peek)
    }

    /// Advances if the peek token has the expected kind.
    ///
    /// Otherwise records an `UnexpectedToken` diagnostic and leaves the window
    /// where it is.
    pub fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek_is(expected) {
            self.advance();
            true
        } else {
            self.peek_error(expected);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.push_error(
            ErrorImpl::UnexpectedToken {
                expected,
                found: self.peek.kind,
            },
            self.peek.position,
        );
    }

    pub fn push_error(&mut self, error: ErrorImpl, position: Position) {
        debug!("{}: {}", position, error);
        self.errors.push(Error::new(error, position));
    }

    /// Binding power of the peek token, `Lowest` if it is not an operator.
    pub fn peek_precedence(&self) -> BindingPower {
        self.precedence_of(self.peek.kind)
    }

    fn precedence_of(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Enters one level of expression nesting. Records a diagnostic and
    /// returns false when the configured limit would be exceeded.
    pub fn enter_expression(&mut self) -> bool {
        if self.depth >= self.options.max_depth {
            self.push_error(
                ErrorImpl::MaxDepthExceeded {
                    limit: self.options.max_depth,
                },
                self.current.position,
            );
            return false;
        }
        self.depth += 1;
        true
    }

    pub fn leave_expression(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Prefix registration leaves the binding power table alone: a token such
    /// as `(` or `-` can start an expression and also continue one.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses a complete source text.
///
/// This is the main entry point for parsing. It creates a lexer and a parser
/// with default options and parses every statement until end of input.
///
/// # Returns
///
/// A tuple containing:
/// - The program, holding every statement that parsed cleanly
/// - The diagnostics; a non-empty list means the program is incomplete
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.errors)
}
