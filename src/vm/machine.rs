use std::rc::Rc;

use crate::config::Config;
use crate::core::free_vars;
use crate::error::{Error, ErrorKind, Result};
use crate::parse::ast::{Expr, Ident};

use super::scope::{Frame, Scope};
use super::value::Closure;

// Evaluates expressions to closures. The machine itself holds no
// bindings, every call is handed the scope it should look names up in.
pub struct Machine {
    max_depth: usize,
    depth: usize,
}

impl Machine {
    pub fn new(config: &Config) -> Self {
        Machine {
            max_depth: config.max_depth,
            depth: 0,
        }
    }

    pub fn lookup(&self, name: Ident, scope: &Scope<'_>) -> Result<Rc<Closure>> {
        scope.lookup(name).cloned().ok_or_else(|| Error::undefined(name))
    }

    pub fn eval(&mut self, expr: &Rc<Expr>, scope: &Scope<'_>) -> Result<Rc<Closure>> {
        self.depth += 1;
        let res = if self.depth > self.max_depth {
            Err(Error::with_message(
                ErrorKind::RecursionLimit,
                format!("recursion limit of {} exceeded", self.max_depth),
            ))
        } else {
            self.eval_inner(expr, scope)
        };
        self.depth -= 1;
        res
    }

    fn eval_inner(&mut self, expr: &Rc<Expr>, scope: &Scope<'_>) -> Result<Rc<Closure>> {
        match expr.as_ref() {
            Expr::Var(name) => self.lookup(*name, scope),
            Expr::Func(param, body) => {
                let captured = self.capture(expr, scope)?;
                log::trace!(target: "eval", "closure !{} capturing {} names", param, captured.len());
                Ok(Rc::new(Closure::new(*param, body.clone(), captured)))
            }
            Expr::Call(fun, arg) => {
                let f = self.eval(fun, scope)?;
                let arg = self.eval(arg, scope)?;
                log::trace!(target: "eval", "apply !{} at depth {}", f.param, self.depth);
                let bound = Frame::bind(f.param, arg);
                let with_arg = scope.push(&bound);
                let inner = with_arg.push(f.captured());
                self.eval(&f.body, &inner)
            }
        }
    }

    // Copies the current binding of every free variable of `func`
    // into a fresh frame. Resolution happens now, not at call time.
    fn capture(&self, func: &Expr, scope: &Scope<'_>) -> Result<Frame> {
        let mut captured = Frame::new();
        for name in free_vars(func) {
            captured.insert(name, self.lookup(name, scope)?);
        }
        Ok(captured)
    }
}
