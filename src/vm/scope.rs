use std::collections::HashMap;
use std::rc::Rc;

use crate::parse::ast::Ident;

use super::value::Closure;

// A single mapping from identifier to closure. Later
// inserts of the same name overwrite earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    vars: HashMap<Ident, Rc<Closure>>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(name: Ident, value: Rc<Closure>) -> Self {
        let mut frame = Frame::new();
        frame.insert(name, value);
        frame
    }

    pub fn insert(&mut self, name: Ident, value: Rc<Closure>) {
        self.vars.insert(name, value);
    }

    pub fn get(&self, name: Ident) -> Option<&Rc<Closure>> {
        self.vars.get(&name)
    }

    pub fn contains(&self, name: Ident) -> bool {
        self.vars.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn names(&self) -> impl Iterator<Item = Ident> + '_ {
        self.vars.keys().copied()
    }
}

// A chain of borrowed frames. Each scope only points
// outward, so pushing a frame never touches the frames
// below it and lookups walk innermost to outermost.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    frame: &'a Frame,
    parent: Option<&'a Scope<'a>>,
}

impl<'a> Scope<'a> {
    pub fn root(frame: &'a Frame) -> Self {
        Scope {
            frame,
            parent: None,
        }
    }

    pub fn push<'b>(&'b self, frame: &'b Frame) -> Scope<'b> {
        Scope {
            frame,
            parent: Some(self),
        }
    }

    pub fn lookup(&self, name: Ident) -> Option<&'a Rc<Closure>> {
        let mut scope = Some(self);
        while let Some(s) = scope {
            if let Some(value) = s.frame.get(name) {
                return Some(value);
            }
            scope = s.parent;
        }
        None
    }
}
