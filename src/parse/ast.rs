use std::rc::Rc;

pub use codespan::{ByteIndex, Span};

// All identifiers in the language are a single character
pub type Ident = char;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Var(Ident),
    Call(Rc<Expr>, Rc<Expr>),
    Func(Ident, Rc<Expr>),
}

impl Expr {
    pub fn var(name: Ident) -> Rc<Expr> {
        Rc::new(Expr::Var(name))
    }

    pub fn call(fun: Rc<Expr>, arg: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Call(fun, arg))
    }

    pub fn func(param: Ident, body: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::Func(param, body))
    }
}

/// A top-level statement. `Bare` holds a fully reduced term
/// with no effect, which the interpreter rejects when it reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Assign {
        span: Span,
        name: Ident,
        value: Rc<Expr>,
    },
    Print {
        span: Span,
        value: Rc<Expr>,
    },
    Bare {
        span: Span,
        value: Rc<Expr>,
    },
}

impl Statement {
    pub fn span(&self) -> Span {
        match self {
            Statement::Assign { span, .. } => *span,
            Statement::Print { span, .. } => *span,
            Statement::Bare { span, .. } => *span,
        }
    }
}

pub fn span(l: usize, r: usize) -> Span {
    Span::new(l as u32, r as u32)
}
