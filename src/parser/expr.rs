use crate::{
    ast::{
        ast::Expr,
        expressions::{
            ArrayLiteral, BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr,
            IndexExpr, InfixExpr, IntegerLiteral, PrefixExpr, StringLiteral,
        },
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

/// Parses an expression whose trailing operators bind tighter than `bp`.
///
/// On entry the current token starts the expression; on success the current
/// token is the last one belonging to it.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    if !parser.enter_expression() {
        return None;
    }
    let expr = parse_expr_inner(parser, bp);
    parser.leave_expression();

    expr
}

fn parse_expr_inner(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind).copied() {
        Some(nud) => nud,
        None => {
            let position = parser.current_token().position;
            parser.push_error(ErrorImpl::NoPrefixParseFn { kind: token_kind }, position);
            return None;
        }
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than bp, it takes left as its lhs
    while !parser.peek_is(TokenKind::Semicolon) && bp < parser.peek_precedence() {
        let led = match parser.get_led_lookup().get(&parser.peek_token_kind()).copied() {
            Some(led) => led,
            None => return Some(left),
        };
        let operator_bp = parser.peek_precedence();

        parser.advance();
        left = led(parser, left, operator_bp)?;
    }

    Some(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token();

    Some(Expr::Identifier(Identifier {
        name: token.literal.clone(),
        position: token.position,
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    match parse_integer(&token.literal) {
        Some(value) => Some(Expr::Integer(IntegerLiteral {
            value,
            position: token.position,
        })),
        None => {
            parser.push_error(
                ErrorImpl::IntegerParse {
                    literal: token.literal,
                },
                token.position,
            );
            None
        }
    }
}

/// Converts integer literal text to an `i64`, honouring `0x`, `0o` and `0b`
/// prefixes. A bare leading `0` followed by more digits means octal, so `010`
/// is 8 and `09` is rejected.
pub fn parse_integer(literal: &str) -> Option<i64> {
    let (digits, radix) = match literal.get(..2) {
        Some("0x" | "0X") => (&literal[2..], 16),
        Some("0o" | "0O") => (&literal[2..], 8),
        Some("0b" | "0B") => (&literal[2..], 2),
        _ if literal.len() > 1 && literal.starts_with('0') => (&literal[1..], 8),
        _ => (literal, 10),
    };

    if !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}

pub fn parse_boolean_literal(parser: &mut Parser) -> Option<Expr> {
    Some(Expr::Boolean(BooleanLiteral {
        value: parser.current_is(TokenKind::True),
        position: parser.current_token().position,
    }))
}

pub fn parse_string_literal(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token();

    Some(Expr::String(StringLiteral {
        value: token.literal.clone(),
        position: token.position,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let operator_token = parser.advance();
    let operand = parse_expr(parser, BindingPower::Prefix)?;

    Some(Expr::Prefix(PrefixExpr {
        operator: operator_token.literal,
        operand: Box::new(operand),
        position: operator_token.position,
    }))
}

/// Left-associative binary operator: the right operand is parsed at the
/// operator's own binding power, so an equal-power operator that follows is
/// left for the enclosing loop.
pub fn parse_infix_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Option<Expr> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, bp)?;

    Some(Expr::Infix(InfixExpr {
        operator: operator_token.literal,
        position: *left.get_position(),
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }

    Some(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expr> {
    // if (condition) { ... } else { ... }
    let position = parser.current_token().position;

    if !parser.expect_peek(TokenKind::LParen) {
        return None;
    }
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;

    if !parser.expect_peek(TokenKind::RParen) || !parser.expect_peek(TokenKind::LBrace) {
        return None;
    }
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.advance();
        if !parser.expect_peek(TokenKind::LBrace) {
            return None;
        }
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Some(Expr::If(IfExpr {
        condition: Box::new(condition),
        consequence,
        alternative,
        position,
    }))
}

pub fn parse_function_literal(parser: &mut Parser) -> Option<Expr> {
    // fn(a, b) { ... }
    let position = parser.current_token().position;

    if !parser.expect_peek(TokenKind::LParen) {
        return None;
    }
    let parameters = parse_function_parameters(parser)?;

    if !parser.expect_peek(TokenKind::LBrace) {
        return None;
    }
    let body = parse_block_stmt(parser)?;

    Some(Expr::Function(FunctionLiteral {
        parameters,
        body,
        position,
    }))
}

fn parse_function_parameters(parser: &mut Parser) -> Option<Vec<Identifier>> {
    let mut parameters = vec![];

    if parser.peek_is(TokenKind::RParen) {
        parser.advance();
        return Some(parameters);
    }

    loop {
        if !parser.expect_peek(TokenKind::Ident) {
            return None;
        }
        let token = parser.current_token();
        parameters.push(Identifier {
            name: token.literal.clone(),
            position: token.position,
        });

        if !parser.peek_is(TokenKind::Comma) {
            break;
        }
        parser.advance();
    }

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }

    Some(parameters)
}

pub fn parse_array_literal(parser: &mut Parser) -> Option<Expr> {
    let position = parser.current_token().position;
    let elements = parse_expr_list(parser, TokenKind::RBracket)?;

    Some(Expr::Array(ArrayLiteral { elements, position }))
}

pub fn parse_call_expr(parser: &mut Parser, callee: Expr, _bp: BindingPower) -> Option<Expr> {
    let arguments = parse_expr_list(parser, TokenKind::RParen)?;

    Some(Expr::Call(CallExpr {
        position: *callee.get_position(),
        callee: Box::new(callee),
        arguments,
    }))
}

pub fn parse_index_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Option<Expr> {
    parser.advance();
    let index = parse_expr(parser, BindingPower::Lowest)?;

    if !parser.expect_peek(TokenKind::RBracket) {
        return None;
    }

    Some(Expr::Index(IndexExpr {
        position: *left.get_position(),
        left: Box::new(left),
        index: Box::new(index),
    }))
}

/// Parses comma-separated expressions up to `end`. The current token is the
/// opening delimiter; on success it is `end`.
fn parse_expr_list(parser: &mut Parser, end: TokenKind) -> Option<Vec<Expr>> {
    let mut list = vec![];

    if parser.peek_is(end) {
        parser.advance();
        return Some(list);
    }

    parser.advance();
    list.push(parse_expr(parser, BindingPower::Lowest)?);

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        list.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    if !parser.expect_peek(end) {
        return None;
    }

    Some(list)
}
