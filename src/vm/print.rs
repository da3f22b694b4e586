use std::rc::Rc;

use pretty::{BoxAllocator, DocAllocator, DocBuilder};

use crate::error::Result;
use crate::parse::ast::{Expr, Ident};
use crate::parse::pretty::render;

use super::machine::Machine;
use super::scope::Scope;
use super::value::Closure;

type Doc<'a> = DocBuilder<'a, BoxAllocator, ()>;

// Renders closures by inlining every free reference to the
// closure it names. Names bound by an enclosing parameter are
// emitted as-is so they keep referring to that parameter.
pub struct Expander<'m> {
    machine: &'m mut Machine,
    bound: Vec<Ident>,
}

impl<'m> Expander<'m> {
    pub fn new(machine: &'m mut Machine) -> Self {
        Expander {
            machine,
            bound: Vec::new(),
        }
    }

    pub fn expand(&mut self, closure: &Closure, scope: &Scope<'_>) -> Result<String> {
        let doc = self.closure(closure, scope, &BoxAllocator)?;
        Ok(render(doc))
    }

    fn closure<'a>(
        &mut self,
        closure: &Closure,
        scope: &Scope<'_>,
        a: &'a BoxAllocator,
    ) -> Result<Doc<'a>> {
        let inner = scope.push(closure.captured());
        self.bound.push(closure.param);
        let body = self.expr(&closure.body, &inner, a);
        self.bound.pop();
        Ok(header(closure.param, a).append(body?))
    }

    fn expr<'a>(
        &mut self,
        expr: &Rc<Expr>,
        scope: &Scope<'_>,
        a: &'a BoxAllocator,
    ) -> Result<Doc<'a>> {
        match expr.as_ref() {
            Expr::Func(param, body) => {
                self.bound.push(*param);
                let body = self.expr(body, scope, a);
                self.bound.pop();
                Ok(header(*param, a).append(body?))
            }
            Expr::Call(fun, arg) => {
                let fun = self.expr(fun, scope, a)?;
                let arg = self.expr(arg, scope, a)?;
                Ok(a.text("(")
                    .append(a.space())
                    .append(fun)
                    .append(a.space())
                    .append(arg)
                    .append(a.space())
                    .append(")"))
            }
            Expr::Var(name) if self.bound.contains(name) => Ok(a.as_string(name)),
            Expr::Var(_) => {
                let value = self.machine.eval(expr, scope)?;
                self.closure(&value, scope, a)
            }
        }
    }
}

fn header<'a>(param: Ident, a: &'a BoxAllocator) -> Doc<'a> {
    a.text("!")
        .append(a.space())
        .append(a.as_string(param))
        .append(a.space())
        .append(".")
        .append(a.space())
}
