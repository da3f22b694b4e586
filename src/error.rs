use std::fmt;

use codespan::Span;
use lalrpop_util::ParseError;

use crate::parse::lexer::{LexicalError, Token};

#[derive(Debug)]
pub struct Error {
    repr: Repr,
    span: Option<Span>,
    context: Option<String>,
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    UndefinedVariable,
    NoEffectStatement,
    ChainArgument,
    RecursionLimit,
    IO,
}

#[derive(Debug)]
enum Repr {
    Simple(ErrorKind),
    SimpleMessage(ErrorKind, &'static str),
    Message(ErrorKind, String),
    Custom(ErrorKind, Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub fn new<E>(kind: ErrorKind, error: E) -> Error
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::from_repr(Repr::Custom(kind, error.into()))
    }

    pub fn new_const(kind: ErrorKind, message: &'static str) -> Self {
        Error::from_repr(Repr::SimpleMessage(kind, message))
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Error::from_repr(Repr::Message(kind, message.into()))
    }

    pub fn undefined(name: char) -> Self {
        Error::with_message(
            ErrorKind::UndefinedVariable,
            format!("undefined variable `{}`", name),
        )
    }

    pub fn chain(message: impl Into<String>) -> Self {
        Error::with_message(ErrorKind::ChainArgument, message)
    }

    fn from_repr(repr: Repr) -> Self {
        Error {
            repr,
            span: None,
            context: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.repr {
            Repr::Simple(k) => *k,
            Repr::SimpleMessage(k, _) => *k,
            Repr::Message(k, _) => *k,
            Repr::Custom(k, _) => *k,
        }
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// The raw rendering of the statement that was executing when
    /// the error was raised, if any.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn in_statement(mut self, rendered: impl Into<String>) -> Self {
        // keep the innermost statement if one was already recorded
        if self.context.is_none() {
            self.context = Some(rendered.into());
        }
        self
    }
}

impl ErrorKind {
    fn describe(&self) -> &'static str {
        match self {
            ErrorKind::Syntax => "syntax error",
            ErrorKind::UndefinedVariable => "undefined variable",
            ErrorKind::NoEffectStatement => "statement has no effect on program",
            ErrorKind::ChainArgument => "invalid chain arguments",
            ErrorKind::RecursionLimit => "recursion limit exceeded",
            ErrorKind::IO => "i/o error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Simple(k) => write!(f, "{}", k)?,
            Repr::SimpleMessage(k, m) => write!(f, "{}: {}", k, m)?,
            Repr::Message(_, m) => write!(f, "{}", m)?,
            Repr::Custom(k, e) => write!(f, "{}: {}", k, e)?,
        }
        if let Some(span) = self.span {
            write!(f, " at {}..{}", span.start().0, span.end().0)?;
        }
        if let Some(ctx) = &self.context {
            write!(f, "\n  in: {}", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(e: ErrorKind) -> Self {
        Error::from_repr(Repr::Simple(e))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::new(ErrorKind::IO, e)
    }
}

fn expected_list(expected: &[String]) -> String {
    match expected.len() {
        0 => String::new(),
        1 => format!(", expected {}", expected[0]),
        _ => format!(", expected one of {}", expected.join(" ")),
    }
}

impl From<ParseError<usize, Token, LexicalError>> for Error {
    fn from(e: ParseError<usize, Token, LexicalError>) -> Self {
        use ParseError::*;
        match e {
            InvalidToken { location } => {
                Error::new_const(ErrorKind::Syntax, "invalid token").at(Span::new(
                    location as u32,
                    location as u32,
                ))
            }
            UnrecognizedEOF { location, expected } => Error::with_message(
                ErrorKind::Syntax,
                format!("unexpected end of input{}", expected_list(&expected)),
            )
            .at(Span::new(location as u32, location as u32)),
            UnrecognizedToken {
                token: (l, tok, r),
                expected,
            } => Error::with_message(
                ErrorKind::Syntax,
                format!(
                    "unexpected {}{}",
                    tok,
                    expected_list(&expected)
                ),
            )
            .at(Span::new(l as u32, r as u32)),
            ExtraToken { token: (l, tok, r) } => Error::with_message(
                ErrorKind::Syntax,
                format!("extra identifier or other symbol {}", tok),
            )
            .at(Span::new(l as u32, r as u32)),
            User { error } => {
                let LexicalError::UnexpectedChar(span) = error;
                Error::new_const(ErrorKind::Syntax, "unexpected character").at(span)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let e = Error::undefined('z').in_statement("!= z");
        assert_eq!(e.kind(), ErrorKind::UndefinedVariable);
        assert_eq!(e.to_string(), "undefined variable `z`\n  in: != z");
    }

    #[test]
    fn innermost_context_wins() {
        let e = Error::undefined('q')
            .in_statement("a = q")
            .in_statement("outer");
        assert_eq!(e.context(), Some("a = q"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.bang");
        let e: Error = io.into();
        assert_eq!(e.kind(), ErrorKind::IO);
        assert!(e.to_string().contains("missing.bang"));
    }
}
