use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

/// A trailing `;` is consumed when present and tolerated when absent.
fn skip_optional_semicolon(parser: &mut Parser) {
    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    let position = parser.current_token().position;
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    skip_optional_semicolon(parser);

    Some(Stmt::Expression(ExpressionStmt {
        expression,
        position,
    }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Stmt> {
    let position = parser.current_token().position;

    if !parser.expect_peek(TokenKind::Ident) {
        return None;
    }
    let name_token = parser.current_token();
    let name = Identifier {
        name: name_token.literal.clone(),
        position: name_token.position,
    };

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    skip_optional_semicolon(parser);

    Some(Stmt::Let(LetStmt {
        name,
        value,
        position,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let position = parser.advance().position;

    let value = parse_expr(parser, BindingPower::Lowest)?;

    skip_optional_semicolon(parser);

    Some(Stmt::Return(ReturnStmt { value, position }))
}

/// Parses `{ ... }`. The current token is `{`; on success it is `}`.
///
/// Statements inside the block that fail to parse are dropped, the same way
/// the top level drops them.
pub fn parse_block_stmt(parser: &mut Parser) -> Option<BlockStmt> {
    let position = parser.advance().position;

    let mut statements = Vec::new();
    while !parser.current_is(TokenKind::RBrace) {
        if parser.current_is(TokenKind::Eof) {
            let position = parser.current_token().position;
            parser.push_error(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::RBrace,
                    found: TokenKind::Eof,
                },
                position,
            );
            return None;
        }

        match parse_stmt(parser) {
            Some(stmt) => statements.push(stmt),
            None => {
                parser.synchronize();
                // Recovery stopped on our closing brace
                if parser.current_is(TokenKind::RBrace) {
                    break;
                }
            }
        }
        parser.advance();
    }

    Some(BlockStmt {
        statements,
        position,
    })
}
