use std::{
    fmt::{self, Display},
    slice::Iter,
};

use crate::Position;

use super::{
    expressions::{
        ArrayLiteral, BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, IndexExpr,
        InfixExpr, IntegerLiteral, PrefixExpr, StringLiteral,
    },
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

/// Statement
///
/// The closed set of statement kinds. Each variant owns its node exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    /// Returns the position of the statement's first token.
    pub fn get_position(&self) -> &Position {
        match self {
            Stmt::Let(stmt) => &stmt.position,
            Stmt::Return(stmt) => &stmt.position,
            Stmt::Expression(stmt) => &stmt.position,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(stmt) => stmt.fmt(f),
            Stmt::Return(stmt) => stmt.fmt(f),
            Stmt::Expression(stmt) => stmt.fmt(f),
        }
    }
}

/// Expression
///
/// The closed set of expression kinds. A parse failure is represented by the
/// absence of an `Expr`, never by a placeholder variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    String(StringLiteral),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Function(FunctionLiteral),
    Call(CallExpr),
    Array(ArrayLiteral),
    Index(IndexExpr),
}

impl Expr {
    /// Returns the position of the expression's first token.
    pub fn get_position(&self) -> &Position {
        match self {
            Expr::Identifier(expr) => &expr.position,
            Expr::Integer(expr) => &expr.position,
            Expr::Boolean(expr) => &expr.position,
            Expr::String(expr) => &expr.position,
            Expr::Prefix(expr) => &expr.position,
            Expr::Infix(expr) => &expr.position,
            Expr::If(expr) => &expr.position,
            Expr::Function(expr) => &expr.position,
            Expr::Call(expr) => &expr.position,
            Expr::Array(expr) => &expr.position,
            Expr::Index(expr) => &expr.position,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(expr) => expr.fmt(f),
            Expr::Integer(expr) => expr.fmt(f),
            Expr::Boolean(expr) => expr.fmt(f),
            Expr::String(expr) => expr.fmt(f),
            Expr::Prefix(expr) => expr.fmt(f),
            Expr::Infix(expr) => expr.fmt(f),
            Expr::If(expr) => expr.fmt(f),
            Expr::Function(expr) => expr.fmt(f),
            Expr::Call(expr) => expr.fmt(f),
            Expr::Array(expr) => expr.fmt(f),
            Expr::Index(expr) => expr.fmt(f),
        }
    }
}

/// Program
///
/// Root of the tree: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// Writes `items` separated by `", "`.
pub(crate) fn write_list<T: Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
