pub mod ast;
pub mod lexer;
pub mod pretty;

pub use lexer::Lexer;

use crate::error::Result;
use crate::grammar::{ProgramParser, ValueParser};
use ast::{Expr, Statement};

use std::rc::Rc;

/// Parses a whole program. Nothing is returned unless every token
/// reduces into a statement.
pub fn parse_program(src: &str) -> Result<Vec<Statement>> {
    let statements = ProgramParser::new().parse(Lexer::new(src))?;
    log::debug!("parsed {} statements", statements.len());
    Ok(statements)
}

pub fn parse_value(src: &str) -> Result<Rc<Expr>> {
    Ok(ValueParser::new().parse(Lexer::new(src))?)
}
