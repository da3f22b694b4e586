use std::collections::HashSet;

use crate::parse::ast::{Expr, Ident};

pub trait FreeVariables {
    fn free_variables(&self, bound: &HashSet<Ident>) -> HashSet<Ident>;
}

impl FreeVariables for Expr {
    fn free_variables(&self, bound: &HashSet<Ident>) -> HashSet<Ident> {
        match self {
            // FV(x) = {x}
            Expr::Var(name) => {
                if bound.contains(name) {
                    HashSet::new()
                } else {
                    let mut s = HashSet::new();
                    s.insert(*name);
                    s
                }
            }
            // FV(e0 e1) = FV(e0) \cup FV(e1)
            Expr::Call(fun, arg) => {
                let mut free = fun.free_variables(bound);
                free.extend(arg.free_variables(bound));
                free
            }
            // FV(!x.e) = FV(e) - {x}
            Expr::Func(param, body) => {
                let mut sub_bound = bound.clone();
                sub_bound.insert(*param);
                body.free_variables(&sub_bound)
            }
        }
    }
}

/// The free variables of an expression with nothing bound around it.
pub fn free_vars(e: &Expr) -> HashSet<Ident> {
    e.free_variables(&HashSet::new())
}

pub fn closed(e: &Expr) -> bool {
    free_vars(e).is_empty()
}
