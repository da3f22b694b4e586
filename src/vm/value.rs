use std::rc::Rc;

use crate::parse::ast::{Expr, Ident};

use super::scope::Frame;

/// The only runtime value: a parameter, an unevaluated body and
/// the bindings of the body's free variables at construction time.
#[derive(Debug, Clone)]
pub struct Closure {
    pub param: Ident,
    pub body: Rc<Expr>,
    captured: Frame,
}

impl Closure {
    pub fn new(param: Ident, body: Rc<Expr>, captured: Frame) -> Self {
        Closure {
            param,
            body,
            captured,
        }
    }

    // no mutable access, the frame is fixed once built
    pub fn captured(&self) -> &Frame {
        &self.captured
    }
}
