use super::ast::{Expr, Statement};

use pretty::{BoxAllocator, BoxDoc, DocAllocator, DocBuilder};

// Output never breaks lines, every separator is a hard space
pub const WIDTH: usize = 80;

impl Expr {
    /// Renders the expression as written, without substituting
    /// any references.
    pub fn pretty<'a, D, A>(&'a self, a: &'a D) -> DocBuilder<'a, D, A>
    where
        D: ?Sized + DocAllocator<'a, A>,
        A: 'a,
    {
        match self {
            Expr::Var(name) => a.as_string(name),
            Expr::Call(fun, arg) => a
                .text("(")
                .append(a.space())
                .append(fun.pretty(a))
                .append(a.space())
                .append(arg.pretty(a))
                .append(a.space())
                .append(")"),
            Expr::Func(param, body) => a
                .text("!")
                .append(a.space())
                .append(a.as_string(param))
                .append(a.space())
                .append(".")
                .append(a.space())
                .append(body.pretty(a)),
        }
    }
}

impl Statement {
    pub fn pretty<'a, D, A>(&'a self, a: &'a D) -> DocBuilder<'a, D, A>
    where
        D: ?Sized + DocAllocator<'a, A>,
        A: 'a,
    {
        match self {
            Statement::Assign { name, value, .. } => a
                .as_string(name)
                .append(a.space())
                .append("=")
                .append(a.space())
                .append(value.pretty(a)),
            Statement::Print { value, .. } => a
                .text("!=")
                .append(a.space())
                .append(value.pretty(a)),
            Statement::Bare { value, .. } => value.pretty(a),
        }
    }

    pub fn to_source(&self) -> String {
        render(self.pretty(&BoxAllocator))
    }
}

impl Expr {
    pub fn to_source(&self) -> String {
        render(self.pretty(&BoxAllocator))
    }
}

pub fn render<'a>(doc: DocBuilder<'a, BoxAllocator, ()>) -> String {
    let doc: BoxDoc<'a, ()> = doc.into_doc();
    doc.pretty(WIDTH).to_string()
}
