use crate::config::Config;
use crate::error::{Error, ErrorKind, Result};
use crate::parse::ast::Statement;
use crate::parse::parse_program;

use super::machine::Machine;
use super::print::Expander;
use super::scope::{Frame, Scope};

/// Runs statements in order against a single global frame
/// that lives as long as the interpreter.
pub struct Interpreter {
    globals: Frame,
    machine: Machine,
}

impl Interpreter {
    pub fn new(config: &Config) -> Self {
        Interpreter {
            globals: Frame::new(),
            machine: Machine::new(config),
        }
    }

    pub fn globals(&self) -> &Frame {
        &self.globals
    }

    /// Executes one statement, returning the rendered output
    /// if it was a print.
    pub fn execute(&mut self, stmt: &Statement) -> Result<Option<String>> {
        self.execute_inner(stmt)
            .map_err(|e| e.in_statement(stmt.to_source()))
    }

    fn execute_inner(&mut self, stmt: &Statement) -> Result<Option<String>> {
        let scope = Scope::root(&self.globals);
        match stmt {
            Statement::Assign { name, value, .. } => {
                let value = self.machine.eval(value, &scope)?;
                log::debug!("bound {}", name);
                self.globals.insert(*name, value);
                Ok(None)
            }
            Statement::Print { value, .. } => {
                let value = self.machine.eval(value, &scope)?;
                let out = Expander::new(&mut self.machine).expand(&value, &scope)?;
                log::debug!("printed {}", out);
                Ok(Some(out))
            }
            Statement::Bare { span, .. } => {
                Err(Error::from(ErrorKind::NoEffectStatement).at(*span))
            }
        }
    }

    /// Parses and runs a whole program. Each output is handed to
    /// `emit` as soon as it is produced; the collected outputs are
    /// only returned if every statement succeeds.
    pub fn run(&mut self, src: &str, emit: &mut dyn FnMut(&str)) -> Result<Vec<String>> {
        let statements = parse_program(src)?;
        let mut output = Vec::new();
        for stmt in statements.iter() {
            if let Some(out) = self.execute(stmt)? {
                emit(&out);
                output.push(out);
            }
        }
        Ok(output)
    }
}

/// Runs a program against a fresh global frame.
pub fn run_source(src: &str, config: &Config, emit: &mut dyn FnMut(&str)) -> Result<Vec<String>> {
    Interpreter::new(config).run(src, emit)
}
