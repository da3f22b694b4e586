use lalrpop_util::lalrpop_mod;

lalrpop_mod!(pub grammar); // synthesized by LALRPOP

pub mod chain;
pub mod config;
pub mod core;
pub mod error;
pub mod parse;
pub mod vm;

pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use vm::{run_source, Interpreter};
